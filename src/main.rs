use clap::{Parser, Subcommand};
use std::sync::{Arc, Mutex};

use cogbot::application::messaging::{CommandDispatcher, MessageParser};
use cogbot::application::services::{
    LifecycleManager, OwnerGate, ProcessController, ShutdownIntent,
};
use cogbot::cogs::{builtin_cogs, CogRegistry};
use cogbot::domain::entities::{LifecycleOp, OutcomeKind};
use cogbot::domain::traits::Bot;
use cogbot::infrastructure::adapters::ConsoleAdapter;
use cogbot::infrastructure::config::Config;
use cogbot::infrastructure::database::Database;

#[derive(Parser)]
#[command(name = "cogbot")]
#[command(about = "A chat bot with runtime-managed cogs", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path
    #[arg(short, long, default_value = "config.yaml")]
    config: String,

    /// Owner id (overrides config)
    #[arg(long)]
    owner: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the bot
    Run,
    /// Show version
    Version,
    /// Generate default config
    InitConfig,
}

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run => {
            run_bot(cli.config, cli.owner);
        }
        Commands::Version => {
            println!("cogbot v{}", env!("CARGO_PKG_VERSION"));
        }
        Commands::InitConfig => {
            init_config(&cli.config);
        }
    }
}

fn run_bot(config_path: String, owner_override: Option<String>) {
    // Load config
    let mut config = if std::path::Path::new(&config_path).exists() {
        Config::load(&config_path).unwrap_or_else(|e| {
            tracing::warn!("Failed to load config: {}, using defaults", e);
            Config::load_env()
        })
    } else {
        Config::load_env()
    };
    if let Some(owner) = owner_override {
        config.bot.owner_id = owner;
    }

    tracing::info!("Starting cogbot: {}", config.bot.name);
    if config.bot.owner_id.is_empty() {
        tracing::warn!("No owner id configured; all privileged commands will be denied");
    }

    let rt = tokio::runtime::Runtime::new().expect("failed to build tokio runtime");
    let intent = rt.block_on(run(config));
    drop(rt);

    if intent == ShutdownIntent::Restart {
        tracing::info!("Re-executing process");
        re_exec();
    }
    tracing::info!("Goodbye");
}

async fn run(config: Config) -> ShutdownIntent {
    // Open the audit log before the bot connects
    let audit = match Database::new(&config.database.path) {
        Ok(db) => {
            tracing::info!("Audit log opened at {}", config.database.path.display());
            Some(Arc::new(Mutex::new(db)))
        }
        Err(e) => {
            tracing::error!("Failed to open audit log: {}", e);
            None
        }
    };

    // Discover cogs and wire the services
    let registry = Arc::new(tokio::sync::Mutex::new(CogRegistry::discover(
        builtin_cogs(),
    )));
    let lifecycle = LifecycleManager::new(registry.clone());
    let grace = std::time::Duration::from_secs(config.shutdown.grace_seconds);
    let (controller, mut shutdown) = ProcessController::new(grace);
    let controller = Arc::new(controller);

    let mut dispatcher = CommandDispatcher::new(
        MessageParser::new(config.bot.prefix.clone()),
        OwnerGate::new(config.bot.owner_id.clone()),
        lifecycle.clone(),
        controller.clone(),
    );
    if let Some(db) = &audit {
        dispatcher = dispatcher.with_audit_log(db.clone());
    }

    // Startup autoload, one outcome per configured cog
    let outcomes = lifecycle
        .execute(LifecycleOp::Load, &config.cogs.autoload)
        .await;
    tracing::info!(
        "Autoload complete: {}/{} cogs loaded",
        outcomes
            .iter()
            .filter(|o| o.kind == OutcomeKind::Success)
            .count(),
        outcomes.len()
    );

    let console = config
        .adapters
        .console
        .as_ref()
        .filter(|c| c.enabled)
        .cloned();
    let Some(console) = console else {
        tracing::error!("No enabled adapter configured");
        return ShutdownIntent::Stop;
    };

    let mut bot = ConsoleAdapter::new(console.user_id.clone());
    if let Err(e) = bot.start().await {
        tracing::error!("Failed to start bot: {}", e);
        return ShutdownIntent::Stop;
    }
    let info = bot.bot_info();
    tracing::info!("Bot started: @{}", info.username);

    // Main loop: one inbound command at a time
    loop {
        let inbound = tokio::select! {
            maybe = bot.next_message() => Some(maybe),
            _ = tokio::signal::ctrl_c() => {
                controller.stop();
                None
            }
            _ = shutdown.changed() => None,
        };
        let Some(maybe) = inbound else {
            break;
        };
        let Some(message) = maybe else {
            tracing::info!("Input stream closed");
            controller.stop();
            break;
        };

        let chat_id = message.chat_id.clone();
        if let Some(reply) = dispatcher.dispatch(message).await {
            if let Err(e) = bot.send_message(&chat_id, &reply).await {
                tracing::error!("Failed to send reply: {}", e);
            }
        }
        if controller.is_shutting_down() {
            break;
        }
    }

    // Orderly shutdown: unload cogs within the grace period, then close
    // the connection and storage. Best effort past the grace period.
    match tokio::time::timeout(controller.grace_period(), lifecycle.unload_all()).await {
        Ok(outcomes) => tracing::info!("Unloaded {} cogs", outcomes.len()),
        Err(_) => tracing::warn!("Grace period expired, abandoning cog teardown"),
    }
    if let Err(e) = bot.close().await {
        tracing::error!("Failed to close connection: {}", e);
    }

    drop(dispatcher);
    if let Some(db) = audit {
        match Arc::try_unwrap(db) {
            Ok(db) => match db.into_inner() {
                Ok(db) => {
                    if let Err(e) = db.close() {
                        tracing::error!("Failed to close audit log: {}", e);
                    }
                }
                Err(_) => tracing::error!("Audit log lock poisoned at shutdown"),
            },
            Err(_) => tracing::error!("Audit log still shared at shutdown"),
        }
    }

    let intent = (*shutdown.borrow()).unwrap_or(ShutdownIntent::Stop);
    intent
}

/// Replace the current process image with a fresh copy of itself
fn re_exec() {
    let exe = match std::env::current_exe() {
        Ok(exe) => exe,
        Err(e) => {
            tracing::error!("Cannot determine current executable: {}", e);
            std::process::exit(1);
        }
    };
    let args: Vec<std::ffi::OsString> = std::env::args_os().skip(1).collect();

    #[cfg(unix)]
    {
        use std::os::unix::process::CommandExt;
        let err = std::process::Command::new(&exe).args(&args).exec();
        tracing::error!("exec failed: {}", err);
        std::process::exit(1);
    }

    #[cfg(not(unix))]
    {
        match std::process::Command::new(&exe).args(&args).spawn() {
            Ok(_) => std::process::exit(0),
            Err(e) => {
                tracing::error!("Failed to respawn: {}", e);
                std::process::exit(1);
            }
        }
    }
}

fn init_config(path: &str) {
    if std::path::Path::new(path).exists() {
        tracing::error!("{} already exists, not overwriting", path);
        std::process::exit(1);
    }
    match serde_yaml::to_string(&Config::default()) {
        Ok(yaml) => {
            if let Err(e) = std::fs::write(path, yaml) {
                tracing::error!("Failed to write {}: {}", path, e);
                std::process::exit(1);
            }
            println!("Wrote default config to {}", path);
        }
        Err(e) => {
            tracing::error!("Failed to serialize default config: {}", e);
            std::process::exit(1);
        }
    }
}
