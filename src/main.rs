use clap::{CommandFactory, Parser};
use commander_recs::utils::logger;
use commander_recs::{app, report, CliConfig};

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.log);
    tracing::debug!("CLI config: {:?}", cli);

    let config = match cli.into_run_config() {
        Ok(Some(config)) => config,
        Ok(None) => {
            // Missing --src/--out is not an error exit.
            let _ = CliConfig::command().print_help();
            return;
        }
        Err(e) => {
            tracing::error!("❌ Configuration failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };
    let print_modes = config.print_modes.clone();

    match app::run(config).await {
        Ok(summary) => {
            tracing::info!("📁 Output saved to: {}", summary.output_path);
            println!("Done!");
            report::print_report(&summary.document, &print_modes);
        }
        Err(e) => {
            tracing::error!("❌ Run failed: {} (Category: {:?})", e, e.category());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    }
}
