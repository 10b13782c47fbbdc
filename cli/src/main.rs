//! songbook - terminal front-end for the song catalog browser.
//!
//! Loads a catalog (per-artist YAML directory or `search.json`) and runs one
//! query, suggestion lookup or aggregate per invocation.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use songbook_core::types::{AppConfig, language_label};
use songbook_core::{Catalog, Field, SortDirection};
use songbook_search::{Browser, SearchConfig, SortState};
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Debug, Parser)]
#[command(name = "songbook", version, about = "Search and browse a song catalog")]
struct Cli {
    /// Config file (TOML). Defaults are used when absent.
    #[arg(long, env = "SONGBOOK_CONFIG")]
    config: Option<PathBuf>,

    /// Directory of per-artist YAML files.
    #[arg(long)]
    music_dir: Option<PathBuf>,

    /// Flattened search.json to load instead of the YAML directory.
    #[arg(long, conflicts_with = "music_dir")]
    json: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Filter and sort songs, e.g. `search "artist:aim, tags:ballad"`.
    Search {
        query: String,
        /// Column to sort by.
        #[arg(long)]
        sort: Option<Field>,
        #[arg(long, conflicts_with = "desc")]
        asc: bool,
        #[arg(long)]
        desc: bool,
    },
    /// Autocomplete candidates for the last `field:term` segment.
    Suggest { query: String },
    /// Print the catalog as search.json.
    ExportJson {
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Songs per artist nationality.
    Nationalities,
    /// Songs per language.
    Languages,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;
    let catalog = load_catalog(&cli, &config)?;

    match cli.command {
        Command::Search {
            query,
            sort,
            asc,
            desc,
        } => run_search(catalog, &config, &query, sort, asc, desc),
        Command::Suggest { query } => run_suggest(catalog, &config, &query),
        Command::ExportJson { out } => run_export(&catalog, out),
        Command::Nationalities => {
            for (code, count) in catalog.nationality_counts() {
                println!("{code}\t{count}");
            }
            Ok(())
        }
        Command::Languages => {
            let counts = catalog.count_index();
            let sources = catalog.suggestion_sources();
            for code in sources.values(Field::Language).unwrap_or_default() {
                let label = language_label(code)
                    .map(|label| label.describe())
                    .unwrap_or_else(|| code.clone());
                println!("{}\t{label}", counts.count(Field::Language, code));
            }
            Ok(())
        }
    }
}

fn load_config(cli: &Cli) -> Result<AppConfig> {
    let Some(path) = &cli.config else {
        return Ok(AppConfig::default());
    };
    let config = AppConfig::load(path)
        .with_context(|| format!("failed to load config {}", path.display()))?;

    let errors = config.validate();
    if errors.is_empty() {
        return Ok(config);
    }
    for error in &errors {
        warn!("invalid config value: {error}");
    }
    Ok(config.with_defaults_for_invalid())
}

fn load_catalog(cli: &Cli, config: &AppConfig) -> Result<Catalog> {
    if let Some(dir) = &cli.music_dir {
        return Ok(Catalog::load_dir(dir)?);
    }
    match cli.json.as_ref().or(config.catalog.json_path.as_ref()) {
        Some(json) => Ok(Catalog::load_json(json)?),
        None => Ok(Catalog::load_dir(&config.catalog.music_dir)?),
    }
}

fn run_search(
    catalog: Catalog,
    config: &AppConfig,
    query: &str,
    sort: Option<Field>,
    asc: bool,
    desc: bool,
) -> Result<()> {
    let mut search_config = SearchConfig::from(config);
    let default_sort = search_config.default_sort;
    let direction = match (asc, desc) {
        (true, _) => SortDirection::Ascending,
        (_, true) => SortDirection::Descending,
        _ if sort.is_some_and(|key| key != default_sort.key) => SortDirection::Ascending,
        _ => default_sort.direction,
    };
    search_config.default_sort = SortState::new(sort.unwrap_or(default_sort.key), direction);

    let mut browser = Browser::new(catalog, search_config);
    browser.set_query(query);

    let results = browser.results();
    for record in results.iter() {
        let tags = record
            .tags
            .iter()
            .map(|tag| format!("#{tag}"))
            .collect::<Vec<_>>()
            .join(" ");
        println!(
            "{}\t{}\t{}\t{}\t{}\t{}",
            record.release,
            record.artist,
            record.title,
            tags,
            record.note.as_deref().unwrap_or("N/A"),
            record.language_str().unwrap_or(""),
        );
    }
    info!(shown = results.len(), total = results.total(), "search complete");
    println!("{}", results.summary());
    Ok(())
}

fn run_suggest(catalog: Catalog, config: &AppConfig, query: &str) -> Result<()> {
    let mut browser = Browser::new(catalog, SearchConfig::from(config));
    browser.set_query(query);

    let Some(suggestions) = browser.suggestions().suggestions() else {
        println!("no suggestions");
        return Ok(());
    };
    for candidate in &suggestions.candidates {
        println!(
            "{}:{} ({})",
            suggestions.field, candidate.value, candidate.count
        );
    }
    Ok(())
}

fn run_export(catalog: &Catalog, out: Option<PathBuf>) -> Result<()> {
    let json = catalog.to_json()?;
    match out {
        Some(path) => {
            std::fs::write(&path, json)
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!(path = %path.display(), records = catalog.len(), "exported catalog");
        }
        None => println!("{json}"),
    }
    Ok(())
}
