use replace_strings::config::USAGE;
use replace_strings::utils::error::ErrorCategory;
use replace_strings::utils::logger;
use replace_strings::{CliConfig, LocalStorage, ReplaceEngine};

fn main() {
    let config = CliConfig::parse_args();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::debug!("CLI config: {:?}", config);

    let engine = ReplaceEngine::new(LocalStorage::new(), config);

    match engine.run() {
        Ok(summary) => {
            tracing::debug!(
                "✅ Done: {} lines, {} rules",
                summary.lines_processed,
                summary.rules.len()
            );
        }
        Err(e) if e.category() == ErrorCategory::Usage => {
            tracing::debug!("{}", e);
            eprintln!("usage: {}", USAGE);
            std::process::exit(e.exit_code());
        }
        Err(e) => {
            // 記錄詳細錯誤信息
            tracing::error!(
                "❌ {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::debug!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(e.exit_code());
        }
    }
}
