use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use thiserror::Error;

use randomizer_api::config::{ConfigError, LoggingConfig, ServiceConfig};
use randomizer_api::error::AppError;
use randomizer_api::logging::{LoggingError, init_logging};
use randomizer_api::routes::requested_country;
use randomizer_api::state::AppState;
use randomizer_generate::random::seeded;
use randomizer_generate::{
    AddressFactory, GenerationError, GenerationSettings, RandomSource, WordListStore,
};

#[derive(Debug, Error)]
enum CliError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    #[error("logging error: {0}")]
    Logging(#[from] LoggingError),
    #[error("word lists error: {0}")]
    Generation(#[from] GenerationError),
    #[error("request rejected: {0}")]
    Request(#[from] AppError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "randomizer", version, about = "Random postal address service")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve `GET /randomizer/address` over HTTP.
    Serve(ServeArgs),
    /// Print addresses as JSON lines.
    Generate(GenerateArgs),
}

#[derive(Args, Debug)]
struct ServeArgs {
    /// TOML configuration file.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Address to listen on, overriding the config file.
    #[arg(long)]
    bind: Option<SocketAddr>,
    /// Word-list directory, overriding the config file.
    #[arg(long)]
    data_dir: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// Country code (CAN, MEX, NLD, USA); any implemented country when omitted.
    #[arg(long)]
    country: Option<String>,
    /// Number of addresses to print.
    #[arg(long, default_value_t = 1)]
    count: u32,
    /// Seed for reproducible output.
    #[arg(long)]
    seed: Option<u64>,
    /// Word-list directory; the bundled lists are used when omitted.
    #[arg(long)]
    data_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();

    match cli.command {
        Command::Serve(args) => run_serve(args).await,
        Command::Generate(args) => run_generate(args),
    }
}

async fn run_serve(args: ServeArgs) -> Result<(), CliError> {
    let ServeArgs {
        config,
        bind,
        data_dir,
    } = args;

    let mut config = ServiceConfig::load_or_default(config.as_deref())?;
    if let Some(bind) = bind {
        config.bind = bind;
    }
    if data_dir.is_some() {
        config.data_dir = data_dir;
    }

    init_logging(&config.logging)?;

    let store = match load_store(config.data_dir.as_deref()) {
        Ok(store) => store,
        Err(err) => {
            tracing::error!(event = "word_lists_failed", error = %err);
            return Err(err.into());
        }
    };
    let app = randomizer_api::app(AppState::from_store(store));

    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    tracing::info!(event = "service_started", bind = %listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!(event = "service_stopped");
    Ok(())
}

fn run_generate(args: GenerateArgs) -> Result<(), CliError> {
    init_logging(&LoggingConfig {
        filter: "warn".to_string(),
        ..LoggingConfig::default()
    })?;

    let store = load_store(args.data_dir.as_deref())?;
    let country = requested_country(&store, args.country.as_deref())?;
    let factory = AddressFactory::new(store.into(), GenerationSettings::default());

    let mut seeded_rng;
    let mut thread_rng;
    let rng: &mut dyn RandomSource = match args.seed {
        Some(seed) => {
            seeded_rng = seeded(seed);
            &mut seeded_rng
        }
        None => {
            thread_rng = rand::rng();
            &mut thread_rng
        }
    };

    for _ in 0..args.count {
        let address = factory.create_address(country.as_deref(), rng)?;
        println!("{}", serde_json::to_string(&address)?);
    }
    Ok(())
}

fn load_store(data_dir: Option<&Path>) -> Result<WordListStore, GenerationError> {
    match data_dir {
        Some(dir) => WordListStore::load(dir),
        None => WordListStore::bundled(),
    }
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!(event = "signal_handler_failed", error = %err);
    }
}
