use crate::app_config::ConfigManager;
use crate::cli::ConfigureArgs;
use crate::error::AppError;
use crate::ui::logger::{render_json, Logger};
use serde_json::json;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

pub fn execute(args: ConfigureArgs, logger: &Logger) -> Result<ExitCode, AppError> {
    let mut config_manager = ConfigManager::new()?;
    let is_non_interactive =
        args.developer_keys.is_some() || args.trusted_keys.is_some() || args.api_url.is_some();

    if is_non_interactive {
        apply_arguments(&mut config_manager, &args, logger)?;
    } else {
        logger.info("Configuring keytrust defaults (Interactive)", Some("⚙️"));
        logger.info(
            &format!(
                "Configuration will be saved to: {}",
                config_manager.get_config_path().display()
            ),
            None,
        );

        let current_dev = config_manager.get_developer_keys_path()?;
        let new_dev = prompt_with_default(
            "Enter your developer key pair directory",
            &current_dev.display().to_string(),
        )?;
        config_manager.set_developer_keys_path(PathBuf::from(new_dev));

        let current_trusted = config_manager.get_trusted_keys_path();
        let new_trusted = prompt_with_default(
            "Enter the runtime's trusted key directory",
            &current_trusted.display().to_string(),
        )?;
        config_manager.set_trusted_keys_path(PathBuf::from(new_trusted));

        let new_url = prompt_with_default("Enter the agent API base URL", &config_manager.get_api_url())?;
        config_manager.set_api_url(validate_api_url(&new_url)?);
    }

    config_manager.save()?;
    if args.json {
        println!(
            "{}",
            render_json(&json!({
                "status": "success",
                "message": "Configuration saved.",
                "config_file": config_manager.get_config_path(),
                "config": config_manager.config(),
            }))?
        );
    } else {
        logger.success("Configuration saved successfully!", Some("✅"));
    }

    Ok(ExitCode::SUCCESS)
}

fn apply_arguments(
    config_manager: &mut ConfigManager,
    args: &ConfigureArgs,
    logger: &Logger,
) -> Result<(), AppError> {
    if !args.json {
        logger.info("Updating configuration non-interactively...", Some("🤖"));
    }
    if let Some(path) = &args.developer_keys {
        config_manager.set_developer_keys_path(path.clone());
        if !args.json {
            logger.success(
                &format!("Developer key directory set to: {}", path.display()),
                Some("🔑"),
            );
        }
    }
    if let Some(path) = &args.trusted_keys {
        config_manager.set_trusted_keys_path(path.clone());
        if !args.json {
            logger.success(
                &format!("Trusted key directory set to: {}", path.display()),
                Some("🛡️"),
            );
        }
    }
    if let Some(url) = &args.api_url {
        config_manager.set_api_url(validate_api_url(url)?);
        if !args.json {
            logger.success(&format!("Agent API URL set to: {}", url), Some("🌐"));
        }
    }
    Ok(())
}

fn validate_api_url(url: &str) -> Result<String, AppError> {
    let trimmed = url.trim();
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        Ok(trimmed.to_string())
    } else {
        Err(AppError::InvalidInput(format!(
            "API URL '{}' must start with http:// or https://",
            url
        )))
    }
}

fn prompt_with_default(prompt_text: &str, default: &str) -> Result<String, AppError> {
    print!("{} [{}]: ", prompt_text, default);
    io::stdout().flush().map_err(|e| AppError::Io {
        path: PathBuf::from("<stdout>"),
        source: e,
    })?;
    let mut input = String::new();
    io::stdin().read_line(&mut input).map_err(|e| AppError::Io {
        path: PathBuf::from("<stdin>"),
        source: e,
    })?;
    let trimmed = input.trim();
    if trimmed.is_empty() {
        Ok(default.to_string())
    } else {
        Ok(trimmed.to_string())
    }
}
