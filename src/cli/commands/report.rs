use crate::config::Config;
use crate::db::DbClient;
use crate::errors::AppResult;
use crate::report;
use std::io::{self, Write};

pub fn handle(cfg: &Config) -> AppResult<()> {
    let mut client = DbClient::connect(cfg)?;
    let output = report::generate(&mut client)?;

    // One write for the whole payload: nothing reaches stdout on failure.
    let mut stdout = io::stdout();
    stdout.write_all(output.as_bytes())?;
    writeln!(stdout)?;
    Ok(())
}
