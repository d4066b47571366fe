//! Command-line interface for artfinder.
//!
//! Provides commands for searching the catalog, inspecting how a query is
//! parsed, deriving links from a raw thumbnail URL and showing the resolved
//! configuration.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};

use crate::adapters::ItunesClient;
use crate::core::{derive_from_template, parse, ArtworkSearch, ResultView, SearchOutcome};
use crate::domain::{ArtworkLinkSet, MediaKind, OutputFormat};

/// artfinder - Find full-size artwork in the media catalog
#[derive(Parser, Debug)]
#[command(name = "artfinder")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search the catalog and list artwork links
    Search {
        /// Query, e.g. `uk: artist: Coldplay .png`
        #[arg(required = true)]
        query: Vec<String>,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show how a query is parsed
    Parse {
        /// Query to parse
        #[arg(required = true)]
        query: Vec<String>,
    },

    /// Derive artwork links from a thumbnail URL
    Links {
        /// Catalog thumbnail URL (e.g. .../100x100bb.jpg)
        thumbnail_url: String,

        /// Media kind the thumbnail belongs to
        #[arg(short, long, value_enum, default_value = "album")]
        kind: KindArg,

        /// Output image format
        #[arg(short, long, value_enum, default_value = "jpg")]
        format: FormatArg,
    },

    /// Show resolved configuration (debug)
    Config,
}

/// Media kind for CLI (maps to MediaKind)
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum KindArg {
    Album,
    Song,
    Movie,
    Tv,
    App,
    Audiobook,
    Ebook,
}

impl From<KindArg> for MediaKind {
    fn from(k: KindArg) -> Self {
        match k {
            KindArg::Album => MediaKind::Album,
            KindArg::Song => MediaKind::Song,
            KindArg::Movie => MediaKind::Movie,
            KindArg::Tv => MediaKind::TvSeason,
            KindArg::App => MediaKind::Software,
            KindArg::Audiobook => MediaKind::Audiobook,
            KindArg::Ebook => MediaKind::Ebook,
        }
    }
}

/// Output format for CLI (maps to OutputFormat)
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum FormatArg {
    Jpg,
    Png,
}

impl From<FormatArg> for OutputFormat {
    fn from(f: FormatArg) -> Self {
        match f {
            FormatArg::Jpg => OutputFormat::Jpg,
            FormatArg::Png => OutputFormat::Png,
        }
    }
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(self) -> Result<()> {
        match self.command {
            Commands::Search { query, json } => search(&query.join(" "), json).await,
            Commands::Parse { query } => show_parse(&query.join(" ")),
            Commands::Links {
                thumbnail_url,
                kind,
                format,
            } => show_links(&thumbnail_url, kind.into(), format.into()),
            Commands::Config => show_config(),
        }
    }
}

/// Run a catalog search and print the results
async fn search(raw: &str, json: bool) -> Result<()> {
    let query = parse(raw);
    if query.is_empty() {
        anyhow::bail!("Nothing to search for in '{}'", raw);
    }

    let config = crate::config::config()?;
    let search = ArtworkSearch::new(ItunesClient::new(config.catalog.clone()));

    // Upstream failures are shown verbatim
    let outcome = search.run(query).await.context("Search failed")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        return Ok(());
    }

    match &outcome {
        SearchOutcome::NoResults { query } => {
            println!("No results for '{}'", query.search_term);
        }
        SearchOutcome::Results { results, .. } => {
            println!("{} result(s)\n", results.len());
            for result in results {
                print_result(result);
            }
        }
    }

    Ok(())
}

fn print_result(result: &ResultView) {
    println!("{}", result.title);
    if let Some(url) = &result.view_url {
        println!("  {}", url);
    }
    print_links(&result.artwork);
    println!();
}

fn print_links(links: &ArtworkLinkSet) {
    let width = links.iter().map(|l| l.label.len()).max().unwrap_or(0);
    for link in links.iter() {
        println!("  {:<width$}  {}", link.label, link.url, width = width);
    }
}

/// Print the parsed form of a query
fn show_parse(raw: &str) -> Result<()> {
    let query = parse(raw);
    println!("{}", serde_json::to_string_pretty(&query)?);
    Ok(())
}

/// Print links for a raw thumbnail URL
fn show_links(thumbnail_url: &str, kind: MediaKind, format: OutputFormat) -> Result<()> {
    let links = derive_from_template(thumbnail_url, kind, format);
    println!("Preview: {}", links.preview);
    print_links(&links);
    Ok(())
}

/// Show resolved configuration
fn show_config() -> Result<()> {
    let config = crate::config::config()?;

    println!("Configuration:");
    match &config.config_file {
        Some(path) => println!("  Config file: {}", path.display()),
        None => println!("  Config file: (none, using defaults)"),
    }
    println!("  Base URL:    {}", config.catalog.base_url);
    println!(
        "  Relay URL:   {}",
        config.catalog.relay_url.as_deref().unwrap_or("(direct)")
    );
    println!("  Limit:       {}", config.catalog.limit);
    println!("  Timeout:     {}s", config.catalog.timeout_seconds);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_links_command() {
        let cli = Cli::try_parse_from([
            "artfinder",
            "links",
            "https://example.com/100x100bb.jpg",
            "--kind",
            "ebook",
            "--format",
            "png",
        ])
        .unwrap();

        match cli.command {
            Commands::Links { kind, format, .. } => {
                assert_eq!(MediaKind::from(kind), MediaKind::Ebook);
                assert_eq!(OutputFormat::from(format), OutputFormat::Png);
            }
            other => panic!("Unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_search_joins_words() {
        let cli = Cli::try_parse_from(["artfinder", "search", "uk:", "artist:", "Coldplay"]).unwrap();
        match cli.command {
            Commands::Search { query, json } => {
                assert_eq!(query.join(" "), "uk: artist: Coldplay");
                assert!(!json);
            }
            other => panic!("Unexpected command: {:?}", other),
        }
    }
}
