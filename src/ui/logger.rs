use crate::error::AppError;
use serde::Serialize;

/// Operator-facing diagnostics. Informational lines go to stdout; warnings,
/// errors and debug output go to stderr so a report or JSON payload on
/// stdout stays clean.
pub struct Logger {
    debug_enabled: bool,
    emojis_enabled: bool,
}

impl Logger {
    pub fn new(debug_enabled: bool, emojis_enabled: bool) -> Self {
        Self {
            debug_enabled,
            emojis_enabled,
        }
    }

    pub fn info(&self, message: &str, emoji: Option<&str>) {
        println!("{}", self.format_message("INFO", emoji.unwrap_or("ℹ️"), message));
    }

    pub fn success(&self, message: &str, emoji: Option<&str>) {
        println!("{}", self.format_message("OK", emoji.unwrap_or("✅"), message));
    }

    pub fn warn(&self, message: &str, emoji: Option<&str>) {
        eprintln!("{}", self.format_message("WARN", emoji.unwrap_or("⚠️"), message));
    }

    pub fn error(&self, message: &str, emoji: Option<&str>) {
        eprintln!("{}", self.format_message("ERROR", emoji.unwrap_or("❌"), message));
    }

    pub fn debug(&self, message: &str, emoji: Option<&str>) {
        if self.debug_enabled {
            eprintln!("{}", self.format_message("DEBUG", emoji.unwrap_or("🐛"), message));
        }
    }

    fn format_message(&self, level: &str, emoji: &str, message: &str) -> String {
        if self.emojis_enabled {
            format!("{} {}", emoji, message)
        } else {
            format!("[{}] {}", level, message)
        }
    }
}

/// Two-space indented JSON, the format of every structured payload this
/// tool prints.
pub fn render_json<T: Serialize + ?Sized>(data: &T) -> Result<String, AppError> {
    serde_json::to_string_pretty(data).map_err(|e| AppError::Serialization(e.to_string()))
}
