//! Page-title fetcher cog

use super::trait_def::Cog;
use crate::application::errors::CogError;
use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex_lite::Regex;
use std::time::Duration;

static TITLE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<title[^>]*>(.*?)</title>").expect("valid title regex"));

/// Fetches a URL and replies with the page title
pub struct FetchCog {
    client: reqwest::Client,
}

impl FetchCog {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

impl Default for FetchCog {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Cog for FetchCog {
    fn name(&self) -> &str {
        "fetch"
    }

    fn description(&self) -> &str {
        "Fetches a web page and reports its title"
    }

    fn commands(&self) -> Vec<&'static str> {
        vec!["fetch"]
    }

    async fn handle(&self, _command: &str, args: &[String]) -> Result<String, CogError> {
        let url = args
            .first()
            .ok_or_else(|| CogError::InvalidArgs("usage: fetch <url>".to_string()))?;

        let body = self
            .client
            .get(url)
            .timeout(Duration::from_secs(10))
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        match TITLE_RE.captures(&body).and_then(|c| c.get(1)) {
            Some(title) => Ok(format!("{}: {}", url, title.as_str().trim())),
            None => Err(CogError::Execution(format!("no title found at {}", url))),
        }
    }
}
