use super::slug::video_url;
use super::{LexiconEntry, LinkCheckError};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures::stream::{self, StreamExt};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info};

/// Reachability check for one URL. Errors count as unreachable.
#[async_trait]
pub trait Prober: Send + Sync {
    async fn probe(&self, url: &str) -> bool;
}

/// GET the URL and accept only `200 OK`.
pub struct HttpProber {
    http: Client,
}

impl HttpProber {
    pub fn new(timeout: Duration) -> Result<Self, LinkCheckError> {
        let http = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("glosa-check-links/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { http })
    }
}

#[async_trait]
impl Prober for HttpProber {
    async fn probe(&self, url: &str) -> bool {
        match self.http.get(url).send().await {
            Ok(response) => response.status() == StatusCode::OK,
            Err(err) => {
                debug!(url, error = %err, "probe failed");
                false
            }
        }
    }
}

/// Result of one checker run, persisted as JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkReport {
    pub date: DateTime<Utc>,
    pub found: Vec<String>,
    pub missing: Vec<String>,
}

impl LinkReport {
    pub fn write_json(&self, path: &Path) -> Result<(), LinkCheckError> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| LinkCheckError::WriteReport(path.to_path_buf(), e.into()))?;
        std::fs::write(path, json).map_err(|e| LinkCheckError::WriteReport(path.to_path_buf(), e))
    }
}

/// Probe every entry's video URL with at most `width` probes in flight.
///
/// One probe's failure never affects the others. `found` and `missing`
/// keep the input order.
pub async fn check_links<P: Prober + ?Sized>(
    entries: &[LexiconEntry],
    prober: &P,
    base_url: &str,
    width: usize,
) -> LinkReport {
    let outcomes: Vec<(String, bool)> = stream::iter(entries)
        .map(|entry| async move {
            let url = video_url(base_url, &entry.word, &entry.id);
            let ok = prober.probe(&url).await;
            info!("{}: {} - {}", entry.id, if ok { "OK" } else { "saknas" }, url);
            (entry.id.clone(), ok)
        })
        .buffered(width.max(1))
        .collect()
        .await;

    let (found, missing): (Vec<_>, Vec<_>) = outcomes.into_iter().partition(|(_, ok)| *ok);
    LinkReport {
        date: Utc::now(),
        found: found.into_iter().map(|(id, _)| id).collect(),
        missing: missing.into_iter().map(|(id, _)| id).collect(),
    }
}
