use clap::Parser;
use prompt_assets::app::cat;
use prompt_assets::utils::error::ErrorSeverity;
use prompt_assets::utils::logger;
use prompt_assets::CliConfig;

fn main() {
    let config = CliConfig::parse();

    if config.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }
    tracing::debug!("CLI config: {:?}", config);

    let mut stdout = std::io::stdout().lock();
    if let Err(e) = cat::run(&config, &mut stdout) {
        if e.severity() == ErrorSeverity::Low {
            tracing::debug!("Output closed early: {}", e);
            return;
        }

        tracing::error!(
            "❌ prompt-cat failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }
}
