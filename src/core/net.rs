// src/core/net.rs
// Blocking page retrieval. One GET, no retries; timeouts are the transport's.

use std::{fs, path::{Path, PathBuf}};

use reqwest::blocking::Client;

use crate::config::consts::USER_AGENT;
use crate::error::{Error, Result};

/// Outcome of one retrieval that reached the server.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Fetched {
    Success(String),
    Failure(u16),
}

impl Fetched {
    /// Markup on success; `FetchFailure` otherwise, so nothing downstream
    /// ever sees the body of a failed response.
    pub fn into_markup(self, url: &str) -> Result<String> {
        match self {
            Fetched::Success(text) => Ok(text),
            Fetched::Failure(status) => Err(Error::FetchFailure { url: s!(url), status }),
        }
    }
}

pub trait TableFetcher {
    fn fetch(&self, url: &str) -> Result<Fetched>;
}

/// Plain HTTP(S) GET via reqwest's blocking client.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { client })
    }
}

impl TableFetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<Fetched> {
        let resp = self.client.get(url).send()?;
        let status = resp.status();
        if !status.is_success() {
            logd!("GET {url} → {status}");
            return Ok(Fetched::Failure(status.as_u16()));
        }
        let body = resp.text()?;
        logd!("GET {url} → {status} ({} bytes)", body.len());
        Ok(Fetched::Success(body))
    }
}

/// Serves a saved copy of the page; the URL is ignored.
pub struct FileFetcher {
    path: PathBuf,
}

impl FileFetcher {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self { path: path.as_ref().to_path_buf() }
    }
}

impl TableFetcher for FileFetcher {
    fn fetch(&self, _url: &str) -> Result<Fetched> {
        fs::read_to_string(&self.path)
            .map(Fetched::Success)
            .map_err(|e| Error::io(&self.path, e))
    }
}
