use crate::error::Result;
use crate::storage::models::{Settings, Theme};
use rusqlite::{params, Connection};

pub fn get_settings(conn: &Connection) -> Result<Settings> {
    let mut stmt = conn.prepare("SELECT key, value FROM settings")?;
    let rows = stmt.query_map([], |row| {
        Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
    })?;

    let mut settings = Settings::default();
    for row in rows {
        let (key, value) = row?;
        match key.as_str() {
            "theme" => settings.theme = Theme::from_str_or_default(&value),
            "api_token" => settings.api_token = Some(value),
            _ => {}
        }
    }

    Ok(settings)
}

pub fn update_settings(conn: &Connection, settings: &Settings) -> Result<()> {
    conn.execute(
        "INSERT OR REPLACE INTO settings (key, value) VALUES ('theme', ?1)",
        params![settings.theme.as_str()],
    )?;

    match settings.api_token {
        Some(ref token) => {
            conn.execute(
                "INSERT OR REPLACE INTO settings (key, value) VALUES ('api_token', ?1)",
                [token],
            )?;
        }
        None => {
            conn.execute("DELETE FROM settings WHERE key = 'api_token'", [])?;
        }
    }

    Ok(())
}

pub fn set_theme(conn: &Connection, theme: Theme) -> Result<()> {
    conn.execute(
        "INSERT OR REPLACE INTO settings (key, value) VALUES ('theme', ?1)",
        params![theme.as_str()],
    )?;
    Ok(())
}

pub fn get_refresh_token(conn: &Connection) -> Result<Option<String>> {
    let mut stmt = conn.prepare("SELECT value FROM settings WHERE key = 'refresh_token'")?;
    let token = stmt
        .query_row([], |row| row.get::<_, String>(0))
        .map(Some)
        .or_else(|e| match e {
            rusqlite::Error::QueryReturnedNoRows => Ok(None),
            other => Err(other),
        })?;
    Ok(token)
}

pub fn set_refresh_token(conn: &Connection, token: Option<&str>) -> Result<()> {
    match token {
        Some(token) => {
            conn.execute(
                "INSERT OR REPLACE INTO settings (key, value) VALUES ('refresh_token', ?1)",
                [token],
            )?;
        }
        None => {
            conn.execute("DELETE FROM settings WHERE key = 'refresh_token'", [])?;
        }
    }
    Ok(())
}
