use super::index::FilterIndex;
use super::model::{FilterRuleSet, GrammarRuleSet};
use super::source::RuleSource;
use crate::engine::config::RuleSourceConfig;
use crate::engine::error::RuleLoadError;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tokio::sync::OnceCell;
use tracing::{debug, info, warn};

const FILTER_SECTION: &str = "filterRules";
const GRAMMAR_SECTION: &str = "grammarRules";

/// Rule families available at one point in time. Either may be absent.
#[derive(Debug, Clone, Default)]
pub struct RuleSnapshot {
    pub filter: Option<Arc<FilterRuleSet>>,
    pub grammar: Option<Arc<GrammarRuleSet>>,
}

impl RuleSnapshot {
    pub fn is_empty(&self) -> bool {
        self.filter.is_none() && self.grammar.is_none()
    }

    /// Compiled filter lookup, or `None` when filter rules are absent.
    pub fn filter_index(&self, use_grammar_removals: bool) -> Option<FilterIndex> {
        let index = FilterIndex::new(self.filter.as_deref()?);
        match (&self.grammar, use_grammar_removals) {
            (Some(grammar), true) => Some(index.with_removals(grammar)),
            _ => Some(index),
        }
    }
}

/// Lazily loaded, memoized holder of both rule families.
///
/// Each family sits in its own `OnceCell`: concurrent callers share one
/// in-flight load, a success is kept for the lifetime of the repository,
/// and a failure leaves the cell empty so the next call tries again.
pub struct RuleRepository {
    source: Option<Arc<dyn RuleSource>>,
    filter_resource: String,
    grammar_resource: String,
    filter: OnceCell<Arc<FilterRuleSet>>,
    grammar: OnceCell<Arc<GrammarRuleSet>>,
}

impl RuleRepository {
    pub fn new(source: Option<Arc<dyn RuleSource>>, config: &RuleSourceConfig) -> Self {
        Self {
            source,
            filter_resource: config.filter_resource.clone(),
            grammar_resource: config.grammar_resource.clone(),
            filter: OnceCell::new(),
            grammar: OnceCell::new(),
        }
    }

    /// Repository with no source; every load leaves rules absent.
    pub fn empty() -> Self {
        Self::new(None, &RuleSourceConfig::default())
    }

    /// Repository seeded with synthetic rules. Absent families stay absent.
    pub fn preloaded(filter: Option<FilterRuleSet>, grammar: Option<GrammarRuleSet>) -> Self {
        Self {
            filter: OnceCell::new_with(filter.map(Arc::new)),
            grammar: OnceCell::new_with(grammar.map(Arc::new)),
            ..Self::empty()
        }
    }

    /// Load whatever is still absent and return the current snapshot.
    /// Never fails: load errors are logged and the family stays absent.
    pub async fn ensure_loaded(&self) -> RuleSnapshot {
        let (filter, grammar) = tokio::join!(
            self.load_family::<FilterRuleSet>(&self.filter, &self.filter_resource, FILTER_SECTION),
            self.load_family::<GrammarRuleSet>(&self.grammar, &self.grammar_resource, GRAMMAR_SECTION),
        );
        RuleSnapshot { filter, grammar }
    }

    /// Current state without triggering a load.
    pub fn snapshot(&self) -> RuleSnapshot {
        RuleSnapshot {
            filter: self.filter.get().cloned(),
            grammar: self.grammar.get().cloned(),
        }
    }

    pub fn source_description(&self) -> Option<String> {
        self.source.as_ref().map(|source| source.describe())
    }

    async fn load_family<T: DeserializeOwned>(
        &self,
        cell: &OnceCell<Arc<T>>,
        resource: &str,
        section: &'static str,
    ) -> Option<Arc<T>> {
        if let Some(loaded) = cell.get() {
            return Some(loaded.clone());
        }
        let Some(source) = self.source.as_deref() else {
            debug!(section, "no rule source configured");
            return None;
        };

        let result = cell
            .get_or_try_init(|| async {
                let rules = fetch_section::<T>(source, resource, section).await?;
                info!(section, origin = %source.describe(), "loaded rules");
                Ok::<_, RuleLoadError>(Arc::new(rules))
            })
            .await;

        match result {
            Ok(rules) => Some(rules.clone()),
            Err(err) => {
                warn!(section, error = %err, "could not load rules; continuing without them");
                None
            }
        }
    }
}

/// Fetch `resource` and decode its top-level `section` object.
pub async fn fetch_section<T: DeserializeOwned>(
    source: &dyn RuleSource,
    resource: &str,
    section: &'static str,
) -> Result<T, RuleLoadError> {
    let body = source.fetch(resource).await?;
    let parse_err = |source| RuleLoadError::Parse {
        resource: resource.to_string(),
        source,
    };

    let mut document: serde_json::Value = serde_json::from_str(&body).map_err(parse_err)?;
    match document.get_mut(section).map(serde_json::Value::take) {
        Some(value) if !value.is_null() => serde_json::from_value(value).map_err(parse_err),
        _ => Err(RuleLoadError::MissingSection {
            resource: resource.to_string(),
            section,
        }),
    }
}
