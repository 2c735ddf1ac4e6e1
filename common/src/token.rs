use async_trait::async_trait;
use lazy_static::lazy_static;
use regex::Regex;
use scraper::{Html, Selector};
use std::time::Instant;
use url::Url;

use crate::error::AuthError;
use crate::fetch::client;
use base::setting;

lazy_static! {
    static ref SCRIPT_SELECTOR: Selector = Selector::parse("script[crossorigin]").unwrap();
    static ref TOKEN_RE: Regex = Regex::new(r#""(ey[^"\n]*)"|'(ey[^'\n]*)'"#).unwrap();
}

#[async_trait]
pub trait TokenProvider: Send + Sync {
    async fn bearer_token(&self) -> Result<String, AuthError>;
}

/// A token known up front, from the config file or the command line.
pub struct StaticTokenProvider(pub String);

#[async_trait]
impl TokenProvider for StaticTokenProvider {
    async fn bearer_token(&self) -> Result<String, AuthError> {
        if self.0.is_empty() {
            return Err(AuthError::NotFound);
        }
        Ok(self.0.clone())
    }
}

/// Pulls the token the web player embeds in its main script bundle.
pub struct PageTokenProvider {
    client: reqwest::Client,
    page: Url,
}

/// Source of the first `script[crossorigin]` element, resolved against the page.
pub fn script_url(page: &Url, html: &str) -> Result<Url, AuthError> {
    let document = Html::parse_document(html);
    let src = document
        .select(&SCRIPT_SELECTOR)
        .next()
        .and_then(|e| e.value().attr("src"))
        .ok_or(AuthError::NoScript)?;
    Ok(page.join(src)?)
}

/// First quoted string in the script that starts with `ey`.
pub fn extract_token(script: &str) -> Option<String> {
    TOKEN_RE
        .captures(script)
        .and_then(|c| c.get(1).or_else(|| c.get(2)))
        .map(|m| m.as_str().to_string())
}

impl PageTokenProvider {
    pub fn new(page: Url, http: &setting::Http) -> Result<Self, AuthError> {
        Ok(PageTokenProvider {
            client: client(http.timeout())?,
            page,
        })
    }

    async fn get(&self, url: Url) -> Result<String, AuthError> {
        let start = Instant::now();
        let res = self.client.get(url).send().await?;
        tracing::trace! {elapsed = ?start.elapsed(), status = %res.status(), "Page HTTP request"};
        let status = res.status();
        if !status.is_success() {
            return Err(AuthError::Status { status });
        }
        Ok(res.text().await?)
    }
}

#[async_trait]
impl TokenProvider for PageTokenProvider {
    async fn bearer_token(&self) -> Result<String, AuthError> {
        let html = self.get(self.page.clone()).await?;
        let script = script_url(&self.page, html.as_str())?;
        tracing::debug! {%script, "Looking for a token in the page script"};
        let source = self.get(script).await?;
        extract_token(source.as_str()).ok_or(AuthError::NotFound)
    }
}
