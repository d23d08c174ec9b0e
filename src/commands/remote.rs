use crate::app_config::ConfigManager;
use crate::cli::RemoteArgs;
use crate::error::AppError;
use crate::services::remote_lister::RemoteKeyLister;
use crate::ui::logger::Logger;
use std::process::ExitCode;
use std::time::Duration;

pub fn execute(args: RemoteArgs, logger: &Logger) -> Result<ExitCode, AppError> {
    let api_url = match args.api_url {
        Some(url) => url,
        None => ConfigManager::new()?.get_api_url(),
    };
    let lister = RemoteKeyLister::new(&api_url, Duration::from_millis(args.timeout_ms))?;
    // Rendered in full before printing so a failure leaves stdout empty.
    let output = lister.list_remote(logger)?;
    println!("{}", output);
    Ok(ExitCode::SUCCESS)
}
