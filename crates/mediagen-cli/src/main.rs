use anyhow::Result;
use chrono::Utc;
use clap::builder::PossibleValuesParser;
use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use mediagen_core::{RankedSearch, ScoredMatch};
use mediagen_term::{
    start_loop, CatalogService, CatalogSourceManager, Config, ConfigKey, EventsService,
    ModelPicker, SelectOption,
};
use tokio::io::BufReader;
use tokio::sync::mpsc;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[clap(
    name = "mediagen",
    author,
    version,
    about = "Browse generative-media models with fuzzy search"
)]
struct Cli {
    #[clap(subcommand)]
    command: Option<Commands>,

    #[clap(flatten)]
    config: ConfigArgs,
}

/// Settings layered into `Config`; values are read from there, not from here.
#[derive(clap::Args, Debug)]
#[allow(dead_code)]
struct ConfigArgs {
    #[clap(long, id = "config-file", env = "MEDIAGEN_CONFIG_FILE", global = true, help = "Path to configuration file")]
    config_file: Option<String>,

    #[clap(
        long,
        id = "catalog-source",
        global = true,
        value_parser = PossibleValuesParser::new(["fal", "builtin"]),
        help = "Where the model catalog is loaded from [default: fal]"
    )]
    catalog_source: Option<String>,

    #[clap(long, id = "catalog-url", env = "MEDIAGEN_CATALOG_URL", global = true, help = "Model listing endpoint [default: https://fal.ai/api/models]")]
    catalog_url: Option<String>,

    #[clap(long, id = "catalog-limit", global = true, help = "Maximum number of models requested from the listing [default: 1000]")]
    catalog_limit: Option<String>,

    #[clap(long, id = "catalog-timeout-ms", global = true, help = "Listing request timeout in milliseconds [default: 10000]")]
    catalog_timeout_ms: Option<String>,

    #[clap(long, id = "popular-terms", global = true, help = "Comma separated title fragments boosted when the search box is empty [default: flux,veo,kling,wan,stable]")]
    popular_terms: Option<String>,

    #[clap(long, id = "popular-boost", global = true, help = "Relevance given to popular models when the search box is empty [default: 100]")]
    popular_boost: Option<String>,

    #[clap(long, id = "max-rows", global = true, help = "Number of ranked models printed per update [default: 10]")]
    max_rows: Option<String>,

    #[clap(long, id = "log-dir", global = true, help = "Directory receiving the session log file [default: logs]")]
    log_dir: Option<String>,

    #[clap(long, id = "log-level", env = "MEDIAGEN_LOG", global = true, help = "Log filter, e.g. info or mediagen_term=debug [default: info]")]
    log_level: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Search the catalog interactively (default command)
    Browse,
    /// Print the ranked models for a query
    Search {
        #[clap(required = true, num_args = 1..)]
        query: Vec<String>,

        #[clap(long, help = "Print results as JSON")]
        json: bool,
    },
    /// Print the default model view, popular models first
    Models {
        #[clap(long, help = "Print results as JSON")]
        json: bool,
    },
    /// Configuration helpers
    Config {
        #[clap(subcommand)]
        action: ConfigCommands,
    },
    /// Generate shell completions
    Completions {
        #[clap(long, short)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommands {
    /// Print a commented configuration file with every default
    Default,
}

#[tokio::main]
async fn main() -> Result<()> {
    better_panic::install();

    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches)?;

    let mut arg_matches = vec![&matches];
    if let Some((_, sub_matches)) = matches.subcommand() {
        arg_matches.push(sub_matches);
    }
    Config::load(Cli::command(), arg_matches).await?;

    match cli.command.unwrap_or(Commands::Browse) {
        Commands::Browse => {
            let _guard = init_logging()?;
            browse().await
        }
        Commands::Search { query, json } => {
            let _guard = init_logging()?;
            print_ranked(&query.join(" "), json).await
        }
        Commands::Models { json } => {
            let _guard = init_logging()?;
            print_ranked("", json).await
        }
        Commands::Config {
            action: ConfigCommands::Default,
        } => {
            println!("{}", Config::serialize_default(Cli::command()));
            Ok(())
        }
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "mediagen", &mut std::io::stdout());
            Ok(())
        }
    }
}

/// Send logs to a timestamped file so they never interleave with the session.
fn init_logging() -> Result<WorkerGuard> {
    let log_dir = Config::get(ConfigKey::LogDir);
    std::fs::create_dir_all(&log_dir)?;

    let file_name = format!("{}.log", Utc::now().format("%Y-%m-%dT%H-%M-%S-%3fZ"));
    let (writer, guard) =
        tracing_appender::non_blocking(tracing_appender::rolling::never(&log_dir, file_name));

    tracing_subscriber::fmt()
        .json()
        .with_env_filter(EnvFilter::try_new(Config::get(ConfigKey::LogLevel))?)
        .with_writer(writer)
        .init();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "mediagen started");
    Ok(guard)
}

async fn browse() -> Result<()> {
    let search = RankedSearch::new(Config::search_config()?)?;
    let source = CatalogSourceManager::get(&Config::get(ConfigKey::CatalogSource))?;
    let max_rows = Config::parse::<usize>(ConfigKey::MaxRows)?;

    let (tx, rx) = mpsc::unbounded_channel();
    println!("Fetching models...");
    CatalogService::spawn_load(source, tx);

    let events = EventsService::new(BufReader::new(tokio::io::stdin()), rx);
    let mut stdout = std::io::stdout();
    let selected = start_loop(ModelPicker::new(search), events, &mut stdout, max_rows).await?;

    if selected.is_none() {
        tracing::info!("browse ended without a selection");
    }
    Ok(())
}

async fn print_ranked(query: &str, json: bool) -> Result<()> {
    let search = RankedSearch::new(Config::search_config()?)?;
    let source = CatalogSourceManager::get(&Config::get(ConfigKey::CatalogSource))?;
    let max_rows = Config::parse::<usize>(ConfigKey::MaxRows)?;

    let catalog = CatalogService::load(source.as_ref()).await;
    let matches = search.rank(catalog.items(), query);

    if json {
        let rows: Vec<serde_json::Value> = matches.iter().map(json_row).collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    if matches.is_empty() {
        let placeholder = SelectOption::no_matches();
        println!("{} ({})", placeholder.name, placeholder.description);
        return Ok(());
    }

    for scored in matches.iter().take(max_rows) {
        let option = SelectOption::from(scored);
        println!("{:>8.1}  {}  {}", scored.score, option.name, option.value);
        println!("          {}", option.description);
    }
    println!("{}/{} models", matches.len(), catalog.len());
    Ok(())
}

fn json_row(scored: &ScoredMatch<'_>) -> serde_json::Value {
    serde_json::json!({
        "id": scored.item.id,
        "title": scored.item.title,
        "category": scored.item.category,
        "score": scored.score,
    })
}
