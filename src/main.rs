use clap::Parser;
use crypto_karo::cli::{Cli, Commands};
use crypto_karo::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = match Config::load(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Warning: Could not load config from {}: {}", cli.config, e);
            eprintln!("Using default configuration");
            toml::from_str(include_str!("../config.toml.example"))?
        }
    };

    // Initialize telemetry
    let telemetry = crypto_karo::telemetry::init_telemetry(&config.telemetry)?;
    if let Some(port) = telemetry.metrics_port() {
        tracing::info!(port, "Metrics enabled");
    }

    match cli.command {
        Commands::Serve(args) => {
            tracing::info!("Starting price relay");
            args.execute(&config).await?;
        }
        Commands::Dashboard(args) => {
            tracing::info!(relay = crypto_karo::dashboard::relay_base_url(), "Starting dashboard");
            args.execute(&config).await?;
        }
        Commands::Chat(args) => {
            args.execute(&config).await?;
        }
        Commands::Ask(args) => {
            args.execute(&config).await?;
        }
        Commands::Config => {
            println!("Current configuration:");
            println!(
                "  Relay: {} (origin {})",
                config.relay.bind_addr, config.relay.allowed_origin
            );
            println!(
                "  Upstream: {} (timeout {}s)",
                config.upstream.base_url, config.upstream.timeout_secs
            );
            println!(
                "  Dashboard: {} every {}s, typing delay {}ms",
                crypto_karo::dashboard::relay_base_url(),
                config.dashboard.poll_interval_secs,
                config.dashboard.typing_delay_ms
            );
            println!("  Advisor: {:?}", config.advisor.mode);
            println!("  Stats: {:?}", config.stats.source);
        }
    }

    Ok(())
}
