use clap::Parser;
use keytrust::cli::{Cli, Commands};
use keytrust::commands::{configure, list, remote};
use keytrust::ui::logger::Logger;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let logger = Logger::new(cli.debug, !cli.no_emojis);

    let result = match cli.command {
        Commands::List(args) => list::execute(args, &logger),
        Commands::Remote(args) => remote::execute(args, &logger),
        Commands::Configure(args) => configure::execute(args, &logger),
    };

    match result {
        Ok(exit_code) => exit_code,
        Err(e) => {
            logger.error(&format!("{}", e), None);
            ExitCode::from(e.exit_status())
        }
    }
}
