use anyhow::Context;
use clap::Parser;
use qbank_config::QbankConfig;
use qbank_lake::QbankLake;
use qbank_server::AppState;
use tokio::net::TcpListener;

mod cli;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("qbank error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let mut config = QbankConfig::load_with_dotenv().context("failed to load configuration")?;
    if let cli::Commands::Serve { host, port } = &cli.command {
        if let Some(host) = host {
            config.server.host.clone_from(host);
        }
        if let Some(port) = port {
            config.server.port = *port;
        }
    }
    config.validate().context("invalid configuration")?;

    let lake = QbankLake::connect(&config.storage).context("failed to connect object store")?;

    match cli.command {
        cli::Commands::Subjects => {
            let subjects = lake
                .load_subjects(&config.catalog.index_file)
                .await
                .context("failed to load subject index")?;
            println!("{}", serde_json::to_string_pretty(&subjects)?);
            Ok(())
        }
        cli::Commands::Serve { .. } => {
            let addr = config.server.bind_addr();
            let state = AppState::load(config, lake)
                .await
                .context("failed to load question catalog")?;
            let listener = TcpListener::bind(&addr)
                .await
                .with_context(|| format!("failed to bind {addr}"))?;
            qbank_server::serve(listener, state, shutdown_signal())
                .await
                .context("server error")
        }
    }
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "warn"
    } else if verbose {
        "debug"
    } else {
        "info"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("QBANK_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::error!(%error, "failed to install Ctrl-C handler; serving until killed");
        std::future::pending::<()>().await;
    }
    tracing::info!("Ctrl-C received, shutting down");
}
