pub mod key_presenter;
pub mod logger;
