// Configuration module: the credential and endpoint are read once at
// startup and passed explicitly to `ApiClient::new`, never looked up again.

use std::path::{Path, PathBuf};

/// Default Short Answers endpoint.
pub const DEFAULT_BASE_URL: &str = "http://api.wolframalpha.com/v1/result";

const APP_ID_VAR: &str = "WOLFRAM_APP_ID";
const BASE_URL_VAR: &str = "WOLFRAM_API_URL";
const APP_ID_FILE: &str = ".wolfram_app_id";

/// Settings needed to reach the Short Answers API.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub app_id: String,
    pub base_url: String,
}

impl Config {
    pub fn new(app_id: impl Into<String>, base_url: impl Into<String>) -> Self {
        Config {
            app_id: app_id.into(),
            base_url: base_url.into(),
        }
    }

    /// Build the configuration from the process environment.
    ///
    /// A `.env` file in the working directory (or a parent) is loaded first;
    /// variables already set in the environment take precedence over it.
    /// The credential is taken from `WOLFRAM_APP_ID`, falling back to the
    /// file `~/.wolfram_app_id`. A missing credential is not an error here:
    /// requests go out with an empty `appid` and the service rejects them.
    /// `WOLFRAM_API_URL` overrides the endpoint.
    pub fn from_env() -> Self {
        match dotenvy::dotenv() {
            Ok(path) => log::debug!("loaded environment from {}", path.display()),
            Err(e) if e.not_found() => log::debug!("no .env file found"),
            Err(e) => log::warn!("ignoring unreadable .env file: {}", e),
        }
        resolve(
            std::env::var(APP_ID_VAR).ok(),
            dirs::home_dir(),
            std::env::var(BASE_URL_VAR).ok(),
        )
    }
}

fn resolve(
    env_app_id: Option<String>,
    home: Option<PathBuf>,
    env_base_url: Option<String>,
) -> Config {
    let app_id = match env_app_id.filter(|v| !v.trim().is_empty()) {
        Some(v) => {
            log::debug!("using app id from {}", APP_ID_VAR);
            v.trim().to_string()
        }
        None => match home.as_deref().and_then(|h| read_app_id_file(&h.join(APP_ID_FILE))) {
            Some(v) => {
                log::debug!("using app id from ~/{}", APP_ID_FILE);
                v
            }
            None => {
                log::warn!(
                    "no Wolfram|Alpha app id configured; set {} to get answers",
                    APP_ID_VAR
                );
                String::new()
            }
        },
    };

    let base_url = env_base_url
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_BASE_URL.into());

    Config { app_id, base_url }
}

/// Read a credential file, ignoring it when unreadable or blank.
fn read_app_id_file(path: &Path) -> Option<String> {
    let data = std::fs::read_to_string(path).ok()?;
    let id = data.trim();
    if id.is_empty() {
        None
    } else {
        Some(id.to_string())
    }
}
