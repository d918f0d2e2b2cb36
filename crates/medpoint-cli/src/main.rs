//! Command line interface for the facility directory.

mod gaps;
mod lang;
mod query;
mod render;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use medpoint_core::{load_app_config, load_catalog, AppConfig, Catalog, Language};
use medpoint_directory::Directory;

#[derive(Debug, Parser)]
#[command(name = "medpoint")]
#[command(about = "Medical checkpoint facility directory")]
struct Cli {
    /// Interface language for this invocation (fr, en, or ar); overrides the
    /// persisted selection
    #[arg(long, global = true)]
    lang: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Search and filter the facility list
    Search {
        /// Free-text query matched against name, speciality, city, and type
        #[arg(default_value = "")]
        query: String,
        /// Only facilities of this type (raw value, e.g. "hospital")
        #[arg(long = "type", value_name = "TYPE")]
        kind: Option<String>,
        /// Only facilities with this speciality
        #[arg(long)]
        speciality: Option<String>,
        /// Only facilities in this city
        #[arg(long)]
        city: Option<String>,
        /// Results to reveal; each load-more step adds one page
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Show search suggestions for a partial query
    Suggest { query: String },
    /// List the selectable filter values per dimension
    Filters,
    /// Project facilities onto map pins
    Map {
        /// Free-text query applied before projecting
        #[arg(default_value = "")]
        query: String,
        #[arg(long = "type", value_name = "TYPE")]
        kind: Option<String>,
        #[arg(long)]
        speciality: Option<String>,
        #[arg(long)]
        city: Option<String>,
    },
    /// Per-city coverage summary
    Cities,
    /// List facilities with missing phone or location data
    Gaps,
    /// Print a Markdown directory report
    Report,
    /// Show or change the persisted interface language
    Lang {
        #[command(subcommand)]
        command: LangCommands,
    },
}

#[derive(Debug, Subcommand)]
enum LangCommands {
    /// Print the active language
    Get,
    /// Persist a new language selection
    Set {
        /// Language code: fr, en, or ar
        language: String,
    },
}

/// Everything a directory command needs, loaded once per invocation.
struct DirectoryContext {
    directory: Directory,
    catalog: Catalog,
    config: AppConfig,
    language: Language,
}

fn load_context(config: AppConfig, lang_flag: Option<&str>) -> anyhow::Result<DirectoryContext> {
    let language = lang::resolve(lang_flag, &config)?;
    let directory = Directory::load(&config.facilities_path)?;
    let catalog = load_catalog(&config.locales_dir)?;
    Ok(DirectoryContext {
        directory,
        catalog,
        config,
        language,
    })
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let config = load_app_config()?;

    match cli.command {
        Commands::Lang { command } => lang::run(&config, &command),
        Commands::Search {
            query,
            kind,
            speciality,
            city,
            limit,
        } => {
            let ctx = load_context(config, cli.lang.as_deref())?;
            query::run_search(
                &ctx,
                &query,
                kind.as_deref(),
                speciality.as_deref(),
                city.as_deref(),
                limit,
            )
        }
        Commands::Suggest { query } => {
            let ctx = load_context(config, cli.lang.as_deref())?;
            query::run_suggest(&ctx, &query)
        }
        Commands::Filters => {
            let ctx = load_context(config, cli.lang.as_deref())?;
            query::run_filters(&ctx)
        }
        Commands::Map {
            query,
            kind,
            speciality,
            city,
        } => {
            let ctx = load_context(config, cli.lang.as_deref())?;
            query::run_map(
                &ctx,
                &query,
                kind.as_deref(),
                speciality.as_deref(),
                city.as_deref(),
            )
        }
        Commands::Cities => {
            let ctx = load_context(config, cli.lang.as_deref())?;
            query::run_cities(&ctx)
        }
        Commands::Gaps => {
            let ctx = load_context(config, cli.lang.as_deref())?;
            gaps::run_gaps(&ctx)
        }
        Commands::Report => {
            let ctx = load_context(config, cli.lang.as_deref())?;
            gaps::run_report(&ctx)
        }
    }
}
