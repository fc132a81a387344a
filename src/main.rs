use clap::{Parser, Subcommand};

use slate_bot::bootstrap::Bootstrap;
use slate_bot::infrastructure::adapters::discord::{DiscordGateway, RestRegistrar};
use slate_bot::infrastructure::config::Config;
use slate_bot::infrastructure::logging;
use slate_bot::{modules, BotError};

#[derive(Parser)]
#[command(name = "slate-bot")]
#[command(about = "A Discord bot with prefix and slash commands", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path
    #[arg(short, long, default_value = "config.yaml")]
    config: String,

    /// Bot token (overrides config)
    #[arg(short, long)]
    token: Option<String>,
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
    logging::init();
    logging::install_panic_hook();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run => {
            if let Err(e) = run_bot(&cli.config, cli.token) {
                tracing::error!("{}", e);
                std::process::exit(1);
            }
        }
        Commands::Version => {
            println!("slate-bot v{}", env!("CARGO_PKG_VERSION"));
        }
        Commands::InitConfig => {
            if let Err(e) = init_config() {
                tracing::error!("{}", e);
                std::process::exit(1);
            }
        }
    }
}

fn run_bot(config_path: &str, token_override: Option<String>) -> Result<(), BotError> {
    let mut config = if std::path::Path::new(config_path).exists() {
        let mut config = Config::load(config_path)?;
        config.apply_env()?;
        config
    } else {
        tracing::warn!("Config file {} not found, using defaults and environment", config_path);
        Config::load_env()?
    };
    if let Some(token) = token_override {
        config.discord.token = Some(token);
    }

    let token = config
        .discord
        .token
        .clone()
        .ok_or_else(|| BotError::Login("no Discord token configured (discord.token or DISCORD_TOKEN)".to_string()))?;

    tracing::info!("Starting {}", config.bot.name);

    let registrar = RestRegistrar::new(token.clone()).with_api_base(config.discord.api_base.clone());
    let mut gateway = DiscordGateway::new(token);

    let rt = tokio::runtime::Runtime::new().map_err(|e| BotError::Internal(e.to_string()))?;
    rt.block_on(Bootstrap::new(config, modules::table()).run(&registrar, &mut gateway))
}

fn init_config() -> Result<(), BotError> {
    let config = Config::default();
    let yaml = serde_yaml::to_string(&config).map_err(|e| BotError::Internal(e.to_string()))?;
    println!("{}", yaml);
    println!("\nSave this to config.yaml and adjust as needed.");
    Ok(())
}
