//! MySQL session wrapper (lightweight for CLI usage).

use crate::config::Config;
use crate::db::value::value_to_string;
use crate::errors::{AppError, AppResult};
use crate::models::record::Record;
use mysql::prelude::Queryable;
use mysql::{Conn, OptsBuilder};

/// The fixed statement issued by the report command. Read-only and
/// parameterless; anything parameterized must go through `exec_*`
/// (server-side bound parameters), never string interpolation.
pub const REPORT_QUERY: &str = "SELECT * FROM test";

/// Source of report rows. The report pipeline only depends on this
/// trait, so it can run against an in-memory source in tests.
pub trait RecordSource {
    /// Materialize the entire result set, in store order.
    /// All rows or an error, never a partial batch.
    fn fetch_all(&mut self) -> AppResult<Vec<Record>>;
}

pub struct DbClient {
    conn: Conn,
}

impl DbClient {
    /// Open a session with the resolved configuration. The session always
    /// negotiates utf8mb4 so 4-byte characters survive the round trip, and
    /// it is closed when the client drops, on every exit path.
    pub fn connect(cfg: &Config) -> AppResult<Self> {
        let opts = OptsBuilder::new()
            .ip_or_hostname(Some(cfg.host.clone()))
            .db_name(Some(cfg.database.clone()))
            .user(Some(cfg.user.clone()))
            .pass(Some(cfg.password.clone()))
            .init(vec!["SET NAMES utf8mb4"]);

        let conn = Conn::new(opts).map_err(AppError::connection)?;
        Ok(Self { conn })
    }
}

impl RecordSource for DbClient {
    fn fetch_all(&mut self) -> AppResult<Vec<Record>> {
        let result = self
            .conn
            .query_iter(REPORT_QUERY)
            .map_err(AppError::query)?;

        let mut records = Vec::new();
        for row in result {
            let row = row.map_err(AppError::query)?;
            let columns = row.columns();
            let mut fields = Vec::with_capacity(columns.len());
            for (i, col) in columns.iter().enumerate() {
                let value = row.as_ref(i).map(value_to_string).unwrap_or_default();
                fields.push((col.name_str().into_owned(), value));
            }
            records.push(Record::new(fields));
        }
        Ok(records)
    }
}
