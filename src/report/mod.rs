pub mod html;

use crate::db::RecordSource;
use crate::errors::AppResult;

/// Fetch-and-render pipeline for the report command.
///
/// The whole result set is materialized before any rendering starts and
/// the payload is returned as one piece, so a connection or query
/// failure can never leave a half-emitted table behind.
pub fn generate(source: &mut dyn RecordSource) -> AppResult<String> {
    let records = source.fetch_all()?;

    let mut out = String::from("Database connection successful!<br>");
    out.push_str(&html::render(&records));
    Ok(out)
}
