use anyhow::Context;
use softsell::{
    AppState, ConfigBasedLLMFactory, SoftSellConfig, SoftSellConfigManager,
    api::routes::create_app,
    cli::{
        Cli, Commands,
        init::{self, InitConfig, InitResult},
        output::Output,
    },
};
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse_args();
    let output = if cli.no_color {
        Output::no_color()
    } else {
        Output::new()
    };

    match cli.command {
        Some(Commands::Init {
            path,
            force,
            provider,
            host,
            port,
        }) => {
            let result = init::run(
                InitConfig {
                    path,
                    force,
                    provider,
                    host,
                    port,
                },
                &output,
            );
            Ok(match result {
                InitResult::Success => ExitCode::SUCCESS,
                InitResult::AlreadyExists | InitResult::Error(_) => ExitCode::FAILURE,
            })
        }
        Some(Commands::Config { full, validate }) => {
            Ok(show_config(&cli.config, full, validate, &output))
        }
        None => {
            serve(&cli, &output).await?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

async fn serve(cli: &Cli, output: &Output) -> anyhow::Result<()> {
    if !cli.config.exists() {
        output.fail(&format!(
            "Configuration file not found: {}",
            cli.config.display()
        ));
        output.tip("Create one with: softsell-server init");
        anyhow::bail!("missing configuration file {}", cli.config.display());
    }

    let mut config_manager = SoftSellConfigManager::new(&cli.config)
        .with_context(|| format!("Failed to load {}", cli.config.display()))?;
    let config = config_manager.config();

    init_tracing(&config.server.log_level, cli.verbose, cli.json);

    for warning in config.validate_with_warnings()? {
        warn!("{}", warning);
    }

    if let Err(e) = config_manager.start_watching() {
        warn!("Config hot reload disabled: {}", e);
    }
    let config_manager = Arc::new(config_manager);

    let state = AppState {
        llm_factory: Arc::new(ConfigBasedLLMFactory::new(Arc::clone(&config_manager))),
        config_manager,
    };
    let app = create_app(state);

    // Bind address and CORS origins are read once; the assistant section reloads live
    let addr = config.bind_address();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!(
        provider = config.assistant.provider.name(),
        model = config.assistant.model(),
        "SoftSell server listening on http://{}",
        addr
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server stopped");
    Ok(())
}

fn init_tracing(log_level: &str, verbose: bool, json: bool) {
    let default_level = if verbose { "debug" } else { log_level };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry.with(fmt::layer().json()).init();
    } else {
        registry.with(fmt::layer()).init();
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

fn show_config(path: &Path, full: bool, validate: bool, output: &Output) -> ExitCode {
    output.section("SoftSell Configuration");

    let config = match SoftSellConfig::load(path) {
        Ok(config) => config,
        Err(e) => {
            output.fail(&e.to_string());
            return ExitCode::FAILURE;
        }
    };

    output.field("File", &path.display().to_string());
    output.field("Listen", &config.bind_address());
    output.provider_status(
        config.assistant.provider,
        config.assistant.model(),
        config.assistant.api_key_env(),
        config.api_key().is_ok(),
    );

    if full {
        match toml::to_string_pretty(&config) {
            Ok(rendered) => {
                output.section("Resolved settings");
                println!("{}", rendered);
            }
            Err(e) => output.notice(&format!("Could not render configuration: {}", e)),
        }
    }

    if validate {
        match config.validate_with_warnings() {
            Ok(warnings) => {
                for warning in &warnings {
                    output.config_warning(warning);
                }
                output.ok("Configuration is valid");
            }
            Err(e) => {
                output.fail(&e.to_string());
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}
