//! Unified application error type.
//! All modules (db, report, cli) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Store-related
    // ---------------------------
    #[error("Connection error [{code}]: {message}")]
    Connection { message: String, code: u16 },

    #[error("Query error [{code}]: {message}")]
    Query { message: String, code: u16 },

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// Wrap a driver error raised while establishing the session.
    /// The server message and numeric code survive the wrap; driver-level
    /// failures (DNS, refused socket) carry code 0.
    pub fn connection(err: mysql::Error) -> Self {
        let (message, code) = split_driver_error(err);
        AppError::Connection { message, code }
    }

    /// Wrap a driver error raised during statement execution or fetch.
    pub fn query(err: mysql::Error) -> Self {
        let (message, code) = split_driver_error(err);
        AppError::Query { message, code }
    }
}

fn split_driver_error(err: mysql::Error) -> (String, u16) {
    match err {
        mysql::Error::MySqlError(server) => (server.message, server.code),
        other => (other.to_string(), 0),
    }
}

pub type AppResult<T> = Result<T, AppError>;
