// API client module: a small blocking HTTP client for the Wolfram|Alpha
// Short Answers API. One query in, one line of text out.

use anyhow::{Context, Result};
use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde::Serialize;

use crate::config::Config;

/// Anything that can answer a query with text. The menu loop is written
/// against this so tests can swap in a stub.
pub trait Solver {
    /// Never fails: problems come back as a descriptive string.
    fn fetch_solution(&self, query: &str) -> String;
}

/// Holds a reqwest blocking client, the endpoint and the app id sent with
/// every request.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    app_id: String,
}

/// Query parameters expected by `/v1/result`.
#[derive(Serialize, Debug)]
struct ShortAnswerParams<'a> {
    appid: &'a str,
    i: &'a str,
}

impl ApiClient {
    /// Build a client from an explicit configuration. Client defaults are
    /// kept as-is, including reqwest's timeout behaviour.
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self::with_client(client, config))
    }

    /// Use an already configured reqwest client.
    pub fn with_client(client: Client, config: &Config) -> Self {
        ApiClient {
            client,
            base_url: config.base_url.clone(),
            app_id: config.app_id.clone(),
        }
    }

    fn request(&self, query: &str) -> reqwest::Result<(StatusCode, String)> {
        let params = ShortAnswerParams {
            appid: &self.app_id,
            i: query,
        };
        let res = self.client.get(&self.base_url).query(&params).send()?;
        let status = res.status();
        let txt = res.text()?;
        Ok((status, txt))
    }
}

impl Solver for ApiClient {
    /// GET the endpoint with `appid` and `i`. Returns the trimmed body on
    /// 200, `Error: <code>, <body>` on any other status and
    /// `Request error: <cause>` when no response arrived.
    fn fetch_solution(&self, query: &str) -> String {
        log::debug!("GET {} i={:?}", self.base_url, query);
        match self.request(query) {
            Ok((status, txt)) if status == StatusCode::OK => txt.trim().to_string(),
            Ok((status, txt)) => {
                log::warn!("short answers API returned {}", status);
                format!("Error: {}, {}", status.as_u16(), txt.trim())
            }
            Err(e) => {
                // The URL carries the app id, keep it out of the output.
                let e = e.without_url();
                log::warn!("short answers request failed: {}", e);
                format!("Request error: {}", e)
            }
        }
    }
}
