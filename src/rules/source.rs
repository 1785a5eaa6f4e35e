use crate::engine::config::RuleSourceConfig;
use crate::engine::error::RuleLoadError;
use async_trait::async_trait;
use reqwest::Client;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

/// Provider of raw rule documents, addressed by resource path.
#[async_trait]
pub trait RuleSource: Send + Sync {
    async fn fetch(&self, resource: &str) -> Result<String, RuleLoadError>;

    /// Human-readable origin for log lines
    fn describe(&self) -> String;
}

/// Rule documents on the local filesystem, relative to `root`.
pub struct DirSource {
    root: PathBuf,
}

impl DirSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl RuleSource for DirSource {
    async fn fetch(&self, resource: &str) -> Result<String, RuleLoadError> {
        let path = self.root.join(resource.trim_start_matches('/'));
        tokio::fs::read_to_string(&path)
            .await
            .map_err(|source| RuleLoadError::Io {
                resource: path.display().to_string(),
                source,
            })
    }

    fn describe(&self) -> String {
        format!("dir:{}", self.root.display())
    }
}

/// Rule documents served over HTTP under `base_url`.
pub struct HttpSource {
    http: Client,
    base_url: String,
}

impl HttpSource {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, RuleLoadError> {
        let http = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("glosa/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|source| RuleLoadError::Http {
                resource: base_url.to_string(),
                source,
            })?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url_for(&self, resource: &str) -> String {
        format!("{}/{}", self.base_url, resource.trim_start_matches('/'))
    }
}

#[async_trait]
impl RuleSource for HttpSource {
    async fn fetch(&self, resource: &str) -> Result<String, RuleLoadError> {
        let url = self.url_for(resource);
        let http_err = |source| RuleLoadError::Http {
            resource: url.clone(),
            source,
        };

        let response = self.http.get(&url).send().await.map_err(http_err)?;
        let status = response.status();
        if !status.is_success() {
            return Err(RuleLoadError::Status {
                resource: url.clone(),
                status: status.as_u16(),
            });
        }
        response.text().await.map_err(http_err)
    }

    fn describe(&self) -> String {
        self.base_url.clone()
    }
}

/// In-memory documents, keyed by resource path.
#[derive(Default)]
pub struct StaticSource {
    documents: HashMap<String, String>,
}

impl StaticSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, resource: &str, body: impl Into<String>) -> Self {
        self.documents.insert(resource.to_string(), body.into());
        self
    }
}

#[async_trait]
impl RuleSource for StaticSource {
    async fn fetch(&self, resource: &str) -> Result<String, RuleLoadError> {
        self.documents
            .get(resource)
            .cloned()
            .ok_or_else(|| RuleLoadError::NotFound(resource.to_string()))
    }

    fn describe(&self) -> String {
        "static".to_string()
    }
}

/// Pick a source from config: a local directory wins over an HTTP base.
/// `None` when neither is configured.
pub fn source_from_config(
    config: &RuleSourceConfig,
) -> Result<Option<Arc<dyn RuleSource>>, RuleLoadError> {
    if let Some(dir) = &config.dir {
        return Ok(Some(Arc::new(DirSource::new(dir.clone()))));
    }
    if let Some(url) = &config.base_url {
        let timeout = Duration::from_secs(config.timeout_secs.max(1));
        return Ok(Some(Arc::new(HttpSource::new(url, timeout)?)));
    }
    Ok(None)
}
