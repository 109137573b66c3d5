//! txgate - Transaction gateway client and echo service
//!
//! Entry point for the txgate application.

use clap::Parser;
use std::process::ExitCode;
use std::time::Duration;
use tracing::Level;
use txgate::cli::{Cli, Commands, ConfigCommands, FetchArgs, OptionsArgs, ServeArgs, SubmitArgs};
use txgate::config::{Config, LogFormat};
use txgate::error::exit_code;
use txgate::model::{TransactionQuery, TransactionSubmission};
use txgate::GatewayClient;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // The config file decides logging defaults; -v/-q override.
    let config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::from(e.exit_code() as u8);
        }
    };

    if let Err(e) = init_logging(&cli, &config) {
        eprintln!("Failed to initialize logging: {}", e);
        return ExitCode::from(exit_code::GENERAL_ERROR as u8);
    }

    match run(cli, config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

/// Initialize the tracing subscriber from configuration and CLI flags.
fn init_logging(cli: &Cli, config: &Config) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let level: Level = match cli.log_level() {
        Some("error") => Level::ERROR,
        Some("trace") => Level::TRACE,
        Some(_) => Level::DEBUG,
        None => config.logging.level.into(),
    };

    match config.logging.format {
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_max_level(level)
            .with_target(true)
            .try_init()?,
        LogFormat::Text => tracing_subscriber::fmt()
            .with_max_level(level)
            .with_target(true)
            .try_init()?,
    }

    Ok(())
}

/// Main application logic.
fn run(cli: Cli, config: Config) -> txgate::Result<()> {
    match &cli.command {
        Commands::Fetch(args) => cmd_fetch(&config, args),
        Commands::Submit(args) => cmd_submit(&config, args),
        Commands::Options(args) => cmd_options(&config, args),
        Commands::Serve(args) => cmd_serve(&config, args),
        Commands::Config(subcmd) => cmd_config(&config, subcmd),
    }
}

/// Handle the `fetch` subcommand.
fn cmd_fetch(config: &Config, args: &FetchArgs) -> txgate::Result<()> {
    let query = TransactionQuery::new(args.transaction_id.clone(), args.kind, args.amount)?;

    tracing::info!(
        transaction_id = %query.transaction_id,
        kind = %query.kind,
        amount = %query.amount,
        "Fetching transaction"
    );

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let client = client_for(config, args.url.as_deref())?;
        let value = client.fetch_transaction(&query).await?;
        println!("{}", serde_json::to_string_pretty(&value)?);
        Ok(())
    })
}

/// Handle the `submit` subcommand.
fn cmd_submit(config: &Config, args: &SubmitArgs) -> txgate::Result<()> {
    let submission = TransactionSubmission::new(args.body_id.clone(), args.kind, args.amount)?;

    tracing::info!(
        body_id = %submission.body_id,
        kind = %submission.kind,
        amount = %submission.amount,
        "Submitting transaction"
    );

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let client = client_for(config, args.url.as_deref())?;
        let value = client.submit_transaction(&submission).await?;
        println!("{}", serde_json::to_string_pretty(&value)?);
        Ok(())
    })
}

/// Handle the `options` subcommand.
fn cmd_options(config: &Config, args: &OptionsArgs) -> txgate::Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let client = client_for(config, args.url.as_deref())?;
        let value = client.query_options().await?;
        println!("{}", serde_json::to_string_pretty(&value)?);
        Ok(())
    })
}

/// Handle the `serve` subcommand.
fn cmd_serve(config: &Config, args: &ServeArgs) -> txgate::Result<()> {
    let mut config = config.clone();

    // Use CLI args if provided, otherwise fall back to config
    if args.bind != "0.0.0.0" {
        config.server.bind = args.bind.clone();
    }

    if args.port != 8080 {
        config.server.port = args.port;
    }

    tracing::info!(
        bind = %config.server.bind,
        port = %config.server.port,
        "Starting gateway service"
    );

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async { txgate::gateway::serve(&config).await })
}

/// Handle the `config` subcommand.
fn cmd_config(config: &Config, subcmd: &ConfigCommands) -> txgate::Result<()> {
    match subcmd {
        ConfigCommands::Validate => {
            // Loading already validated; reaching this point means it passed.
            println!("✓ Configuration is valid");
            tracing::debug!(?config, "Validated configuration");
            Ok(())
        }
        ConfigCommands::Show => {
            let yaml = serde_yaml::to_string(config)?;
            println!("{}", yaml);
            Ok(())
        }
    }
}

/// Builds a client for the configured gateway, honoring a per-call URL override.
fn client_for(config: &Config, url_override: Option<&str>) -> txgate::Result<GatewayClient> {
    match url_override {
        Some(url) => GatewayClient::with_timeout(
            url,
            Duration::from_secs(config.gateway.timeout_seconds),
        ),
        None => GatewayClient::from_config(&config.gateway),
    }
}
