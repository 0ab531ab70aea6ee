// src/core/net.rs
// Blocking HTTP GET (reqwest). One client per scrape run.

use std::time::Duration;

use reqwest::blocking::Client;

use crate::config::consts::{HTTP_TIMEOUT_SECS, USER_AGENT};
use crate::error::{Result, ScrapeError};

pub fn client() -> Result<Client> {
    let c = Client::builder()
        .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
        .user_agent(USER_AGENT)
        .build()?;
    Ok(c)
}

pub fn http_get(client: &Client, url: &str) -> Result<String> {
    tracing::debug!(url, "GET");
    let resp = client.get(url).send()?;

    let status = resp.status();
    if !status.is_success() {
        return Err(ScrapeError::Status { status: status.as_u16(), url: s!(url) });
    }
    let body = resp.text()?;
    tracing::debug!(url, bytes = body.len(), "fetched");
    Ok(body)
}
