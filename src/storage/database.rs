use crate::error::{AppError, Result};
use once_cell::sync::OnceCell;
use parking_lot::Mutex;
use rusqlite::Connection;
use std::path::PathBuf;
use tracing::info;

static DB: OnceCell<Mutex<Connection>> = OnceCell::new();

fn get_db_path() -> PathBuf {
    let app_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("com.transcriba.app");

    std::fs::create_dir_all(&app_dir).ok();
    app_dir.join("transcriba.db")
}

pub fn init_database() -> Result<()> {
    let db_path = get_db_path();
    info!("Initializing settings database at {:?}", db_path);

    let conn = Connection::open(&db_path)?;
    conn.execute_batch(include_str!("../../migrations/001_init.sql"))?;

    DB.set(Mutex::new(conn))
        .map_err(|_| AppError::InvalidState("Database already initialized".into()))?;

    Ok(())
}

pub fn with_db<F, T>(f: F) -> Result<T>
where
    F: FnOnce(&Connection) -> Result<T>,
{
    let db = DB
        .get()
        .ok_or_else(|| AppError::InvalidState("Database not initialized".into()))?;
    let conn = db.lock();
    f(&conn)
}
