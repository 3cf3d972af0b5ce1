use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config { print_config } = cmd {
        if *print_config {
            let yaml = serde_yaml::to_string(&cfg.redacted())
                .map_err(|e| AppError::Config(e.to_string()))?;
            print!("{yaml}");
        } else {
            println!("Nothing to do. Use --print to show the resolved configuration.");
        }
    }
    Ok(())
}
