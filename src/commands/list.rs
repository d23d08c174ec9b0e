use crate::app_config::{ConfigManager, StorePaths};
use crate::cli::ListArgs;
use crate::domain::trust::ReconciledEntry;
use crate::error::AppError;
use crate::infrastructure::key_store_reader::load_store_or_empty;
use crate::services::reconcile;
use crate::ui::key_presenter;
use crate::ui::logger::Logger;
use std::process::ExitCode;

pub fn execute(args: ListArgs, logger: &Logger) -> Result<ExitCode, AppError> {
    // The config file is only consulted for a directory not given on the command line.
    let paths = match (args.developer_keys, args.trusted_keys) {
        (Some(developer), Some(trusted)) => StorePaths { developer, trusted },
        (developer, trusted) => ConfigManager::new()?.store_paths(developer, trusted)?,
    };
    let entries = reconcile_stores(&paths, logger);
    key_presenter::display_report(&entries, logger);
    Ok(ExitCode::SUCCESS)
}

/// Reads both stores and merges them. A store that cannot be read is
/// reported and contributes nothing; the other side is still listed.
pub fn reconcile_stores(paths: &StorePaths, logger: &Logger) -> Vec<ReconciledEntry> {
    logger.debug(
        &format!("Developer keys: {}", paths.developer.display()),
        Some("📂"),
    );
    logger.debug(
        &format!("Trusted keys: {}", paths.trusted.display()),
        Some("📂"),
    );

    let developer = load_store_or_empty(&paths.developer, logger);
    let trusted = load_store_or_empty(&paths.trusted, logger);
    reconcile(&developer, &trusted)
}
