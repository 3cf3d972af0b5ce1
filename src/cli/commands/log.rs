use crate::cli::parser::Commands;
use crate::errors::{AppError, AppResult};
use crate::logging::{LogSink, StreamLogger};
use log::Level;

pub fn handle(cmd: &Commands) -> AppResult<()> {
    if let Commands::Log { level } = cmd {
        let min_level: Level = level
            .parse()
            .map_err(|_| AppError::Config(format!("Invalid log level: {level}")))?;

        let logger = StreamLogger::new("dbcheck", min_level);
        logger.info("Logging is configured and working!");

        println!("Check the logs to see if the message was logged.");
    }
    Ok(())
}
