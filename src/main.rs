mod report;

use clap::{Args, Parser, Subcommand};
use eyre::{eyre, Result, WrapErr};
use std::path::PathBuf;
use tracing_subscriber::{
    filter::{EnvFilter, LevelFilter},
    fmt,
    prelude::*,
};
use url::Url;

use base::setting::{load, Settings};
use base::CLI_NAME;
use common::check::{check, fetch_albums};
use common::clipboard::{ClipboardReader, CommandClipboard};
use common::fetch::{apple_music::AppleMusic, musicbrainz::MusicBrainz};
use common::links::LinkBuilder;
use common::token::{PageTokenProvider, StaticTokenProvider, TokenProvider};

#[derive(Parser)]
#[command(name = CLI_NAME, author, version, about, long_about = None)]
#[command(next_line_help = true)]
struct Cli {
    /// Sets a custom config file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compares a catalog album against its MusicBrainz release
    Check(CheckOptions),
    /// Prints the correction tool links for a catalog album
    Links(LinksOptions),
    DefaultConfig,
}

#[derive(Args)]
struct PageOptions {
    #[arg(name = "URL", help = "The catalog page of an album or music video")]
    url: Url,

    /// Bearer token for the catalog API, skips scraping the page
    #[arg(short, long, name = "TOKEN")]
    token: Option<String>,
}

#[derive(Parser)]
struct CheckOptions {
    #[command(flatten)]
    page: PageOptions,

    /// Print the full report as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Parser)]
struct LinksOptions {
    #[command(flatten)]
    page: PageOptions,

    /// MusicBrainz release id to prefill in the tools
    #[arg(short, long, name = "MBID", conflicts_with = "from_clipboard")]
    mbid: Option<String>,

    /// Take the MusicBrainz release id from the clipboard
    #[arg(long)]
    from_clipboard: bool,
}

fn token_provider(settings: &Settings, page: &PageOptions) -> Result<Box<dyn TokenProvider>> {
    let token = page.token.clone().or_else(|| settings.catalog.token.clone());
    Ok(match token {
        Some(token) => Box::new(StaticTokenProvider(token)),
        None => Box::new(
            PageTokenProvider::new(page.url.clone(), &settings.http)
                .wrap_err(eyre!("Could not build the page client"))?,
        ),
    })
}

async fn run_check(settings: &Settings, opts: CheckOptions) -> Result<()> {
    let tokens = token_provider(settings, &opts.page)?;
    let catalog = AppleMusic::new(&settings.catalog, &settings.http)?;
    let registry = MusicBrainz::new(&settings.registry, &settings.http)?;
    let links = LinkBuilder::new(settings);

    let report = check(
        &opts.page.url,
        tokens.as_ref(),
        &catalog,
        &registry,
        &links,
    )
    .await?;
    match report {
        None => tracing::warn! {url = %opts.page.url, "Nothing to check on this page"},
        Some(report) if opts.json => println!("{}", serde_json::to_string_pretty(&report)?),
        Some(report) => print!("{}", report::render(&report)),
    }
    Ok(())
}

async fn run_links(settings: &Settings, opts: LinksOptions) -> Result<()> {
    let tokens = token_provider(settings, &opts.page)?;
    let catalog = AppleMusic::new(&settings.catalog, &settings.http)?;
    let links = LinkBuilder::new(settings);

    let albums = match fetch_albums(&opts.page.url, tokens.as_ref(), &catalog).await? {
        Some((_, albums)) => albums,
        None => {
            tracing::warn! {url = %opts.page.url, "No album on this page"};
            return Ok(());
        }
    };
    let mbid = if opts.from_clipboard {
        let id = CommandClipboard::new(&settings.clipboard)
            .read_identifier()
            .await;
        if id.is_empty() {
            tracing::warn!("No MusicBrainz release id found in the clipboard");
        }
        Some(id)
    } else {
        opts.mbid
    };
    print!(
        "{}",
        report::render_links(&links.tool_links(&albums[0], mbid.as_deref()))
    );
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // logging
    color_eyre::install()?;
    let tracing_builder =
        tracing_subscriber::registry().with(fmt::layer().with_writer(std::io::stderr));
    if std::env::var(base::CROSSCHECK_LOGLEVEL).is_ok() {
        tracing_builder.with(EnvFilter::from_env(base::CROSSCHECK_LOGLEVEL))
    } else {
        tracing_builder.with(EnvFilter::default().add_directive(LevelFilter::INFO.into()))
    }
    .init();

    let cli = Cli::parse();
    match cli.command {
        Command::DefaultConfig => {
            let str = toml::to_string(&Settings::default())?;
            println!("{}", str);
            Ok(())
        }
        Command::Check(opts) => run_check(&load(cli.config)?, opts).await,
        Command::Links(opts) => run_links(&load(cli.config)?, opts).await,
    }
}
