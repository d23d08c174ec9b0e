pub mod app_config;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod services;
pub mod ui;
pub mod utils;

pub mod commands {
    pub mod configure;
    pub mod list;
    pub mod remote;
}
