use clap::Parser;

mod cli;
mod pipeline;
mod session;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("scout error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let config = scout_config::ScoutConfig::load_with_dotenv()?;

    match cli.command {
        cli::Commands::Find { query, limit } => pipeline::find(&config, &query, limit).await,
        cli::Commands::Match {
            query,
            docs,
            profile,
            limit,
        } => {
            pipeline::match_corpus(&config, &query, docs.as_deref(), profile.as_deref(), limit)
                .await
        }
        cli::Commands::Disclose { text } => pipeline::disclose(&text),
    }
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("SCOUT_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
