use const_format::formatcp;
use directories::ProjectDirs;
use eyre::{eyre, Result};
use serde_derive::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

use super::{CLI_NAME, GITHUB, VERSION};

static DEFAULT_USER_AGENT: &str = formatcp!("{}/{} ({})", CLI_NAME, VERSION, GITHUB);

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub registry: Registry,
    #[serde(default)]
    pub catalog: Catalog,
    #[serde(default)]
    pub tools: Tools,
    #[serde(default)]
    pub http: Http,
    #[serde(default)]
    pub clipboard: Clipboard,
}

fn parse_url(s: &str) -> Url {
    // only ever called with the constants below
    Url::parse(s).unwrap()
}

fn default_registry_url() -> Url {
    parse_url("https://musicbrainz.org/ws/2/")
}

fn default_registry_site() -> Url {
    parse_url("https://musicbrainz.org")
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

fn default_calls_per_second() -> u32 {
    1
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registry {
    /// Base of the web service, with a trailing slash.
    #[serde(default = "default_registry_url")]
    pub url: Url,
    /// Base of the website, used for release links.
    #[serde(default = "default_registry_site")]
    pub site: Url,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    #[serde(default = "default_calls_per_second")]
    pub calls_per_second: u32,
}

impl Default for Registry {
    fn default() -> Self {
        Self {
            url: default_registry_url(),
            site: default_registry_site(),
            user_agent: default_user_agent(),
            calls_per_second: default_calls_per_second(),
        }
    }
}

fn default_catalog_url() -> Url {
    parse_url("https://amp-api.music.apple.com/v1/")
}

fn default_catalog_origin() -> String {
    "https://music.apple.com".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default = "default_catalog_url")]
    pub url: Url,
    #[serde(default = "default_catalog_origin")]
    pub origin: String,
    /// Skips scraping the page for a token when set.
    #[serde(default)]
    pub token: Option<String>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            url: default_catalog_url(),
            origin: default_catalog_origin(),
            token: None,
        }
    }
}

fn default_harmony() -> Url {
    parse_url("http://localhost:5220/release")
}

fn default_magic_isrc() -> Url {
    parse_url("https://magicisrc.kepstin.ca/")
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tools {
    #[serde(default = "default_harmony")]
    pub harmony: Url,
    #[serde(default = "default_magic_isrc")]
    pub magic_isrc: Url,
}

impl Default for Tools {
    fn default() -> Self {
        Self {
            harmony: default_harmony(),
            magic_isrc: default_magic_isrc(),
        }
    }
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Http {
    /// Upper bound in seconds for every outgoing request. Unset means wait forever.
    #[serde(default)]
    pub timeout: Option<u64>,
}

impl Http {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout.map(Duration::from_secs)
    }
}

fn default_clipboard_command() -> String {
    "wl-paste".to_string()
}

fn default_clipboard_args() -> Vec<String> {
    vec!["--no-newline".to_string()]
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clipboard {
    #[serde(default = "default_clipboard_command")]
    pub command: String,
    #[serde(default = "default_clipboard_args")]
    pub args: Vec<String>,
}

impl Default for Clipboard {
    fn default() -> Self {
        Self {
            command: default_clipboard_command(),
            args: default_clipboard_args(),
        }
    }
}

pub fn default_path() -> Result<PathBuf> {
    let dirs = ProjectDirs::from("com", "github", CLI_NAME)
        .ok_or(eyre!("Could not locate program directories"))?;
    Ok(dirs.config_dir().join(PathBuf::from("config.toml")))
}

pub fn parse(content: &str) -> Result<Settings> {
    toml::from_str(content).map_err(|e| eyre!(e))
}

pub fn load(path: Option<PathBuf>) -> Result<Settings> {
    let path = match path {
        Some(path) => path,
        None => default_path()?,
    };
    tracing::info! {?path, "Loading config file"};
    let content = fs::read_to_string(path).unwrap_or_else(|_| "".to_string());
    let set = parse(content.as_str())?;
    tracing::trace! {settings = ?set, "Loaded settings"};
    Ok(set)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_yields_defaults() {
        let set = parse("").unwrap();
        assert_eq!(set, Settings::default());
        assert_eq!(set.registry.url.as_str(), "https://musicbrainz.org/ws/2/");
        assert_eq!(set.registry.calls_per_second, 1);
        assert_eq!(set.http.timeout(), None);
        assert_eq!(set.catalog.token, None);
    }

    #[test]
    fn default_user_agent_identifies_the_program() {
        let set = Settings::default();
        assert!(set.registry.user_agent.starts_with("crosscheck/"));
        assert!(set.registry.user_agent.contains(GITHUB));
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let set = parse(
            r#"
            [tools]
            harmony = "https://harmony.pulsewidth.org.uk/release"

            [http]
            timeout = 10
            "#,
        )
        .unwrap();
        assert_eq!(
            set.tools.harmony.as_str(),
            "https://harmony.pulsewidth.org.uk/release"
        );
        assert_eq!(set.tools.magic_isrc.as_str(), "https://magicisrc.kepstin.ca/");
        assert_eq!(set.http.timeout(), Some(Duration::from_secs(10)));
    }

    #[test]
    fn defaults_survive_a_toml_round_trip() {
        let set = Settings::default();
        let printed = toml::to_string(&set).unwrap();
        assert_eq!(parse(printed.as_str()).unwrap(), set);
    }

    #[test]
    fn invalid_urls_are_rejected() {
        assert!(parse("[registry]\nurl = \"not a url\"").is_err());
    }
}
