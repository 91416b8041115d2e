use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

const SESSION_FILE: &str = "session.json";

/// Server used when neither `--server`, `SHOWCASE_API_URL`, nor a saved session names one
pub const DEFAULT_SERVER: &str = "http://localhost:3000";

/// What `auth login` leaves behind for later commands
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub server: Option<String>,
    pub token: Option<String>,
    pub email: Option<String>,
    pub logged_in_at: Option<DateTime<Utc>>,
}

impl Session {
    pub fn new(server: String, token: String, email: String) -> Self {
        Self {
            server: Some(server),
            token: Some(token),
            email: Some(email),
            logged_in_at: Some(Utc::now()),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Read the session stored in `dir`, or an empty one if none was saved.
    pub fn load_from(dir: &Path) -> anyhow::Result<Self> {
        let file = dir.join(SESSION_FILE);
        if !file.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(file)?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn save_to(&self, dir: &Path) -> anyhow::Result<()> {
        if !dir.exists() {
            fs::create_dir_all(dir)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(dir.join(SESSION_FILE), content)?;
        Ok(())
    }

    /// Remove any stored session. Returns whether one existed.
    pub fn clear_in(dir: &Path) -> anyhow::Result<bool> {
        let file = dir.join(SESSION_FILE);
        if !file.exists() {
            return Ok(false);
        }

        fs::remove_file(file)?;
        Ok(true)
    }
}

pub fn get_config_dir() -> anyhow::Result<PathBuf> {
    if let Ok(custom_dir) = std::env::var("SHOWCASE_CLI_CONFIG_DIR") {
        return Ok(PathBuf::from(custom_dir));
    }

    let home = std::env::var("HOME").map_err(|_| anyhow::anyhow!("HOME environment variable not set"))?;
    Ok(PathBuf::from(home).join(".config").join("showcase").join("cli"))
}

pub fn load_session() -> anyhow::Result<Session> {
    Session::load_from(&get_config_dir()?)
}

pub fn save_session(session: &Session) -> anyhow::Result<()> {
    session.save_to(&get_config_dir()?)
}

pub fn clear_session() -> anyhow::Result<bool> {
    Session::clear_in(&get_config_dir()?)
}

/// Pick the server: explicit flag/env first, then the saved session, then the default.
pub fn resolve_server(flag: Option<&str>, session: &Session) -> String {
    flag.map(str::to_string)
        .or_else(|| session.server.clone())
        .unwrap_or_else(|| DEFAULT_SERVER.to_string())
        .trim_end_matches('/')
        .to_string()
}
