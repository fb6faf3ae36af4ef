//! Shared application state.

use rusqlite::Connection;
use std::sync::Arc;
use tokio::sync::Mutex;

/// State shared by all handlers.
///
/// The SQLite connection is opened once at process start and owned here;
/// the mutex gives each store call exclusive use of the handle, which is
/// all the serialization the single-statement operations need.
#[derive(Clone)]
pub struct AppState {
    pub conn: Arc<Mutex<Connection>>,
}

impl AppState {
    /// Wrap an already opened and migrated connection.
    pub fn new(conn: Connection) -> Self {
        Self {
            conn: Arc::new(Mutex::new(conn)),
        }
    }
}
