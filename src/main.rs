use clap::Parser;
use stocksent::adapter::inbound::cli::command::{
    CheckCommand, Cli, ColorChoice, Commands, ConfigCommand,
};
use stocksent::adapter::inbound::cli::output::{self, OutputConfig};
use stocksent::adapter::inbound::cli::{check, config, report, run};
use stocksent::error::Result;
use tokio::signal;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {}
    }
    output::configure(OutputConfig::new(cli.json, cli.quiet, cli.verbose));

    let _ = dotenvy::dotenv();

    let result = tokio::select! {
        result = dispatch(cli.command) => result,
        _ = signal::ctrl_c() => {
            info!("Shutdown signal received");
            output::warning("Interrupted; unscored articles will be picked up next run");
            std::process::exit(130);
        }
    };

    if let Err(e) = result {
        error!(error = %e, "Fatal error");
        output::error(&e.to_string());
        std::process::exit(1);
    }
}

async fn dispatch(command: Commands) -> Result<()> {
    match command {
        Commands::Run(args) => run::execute(&args).await,
        Commands::Report(args) => report::execute(&args).await,
        Commands::Config(ConfigCommand::Init(args)) => {
            config::execute_init(&args.path, args.force)
        }
        Commands::Check(CheckCommand::Config(args)) => check::execute_config(&args.config),
    }
}
