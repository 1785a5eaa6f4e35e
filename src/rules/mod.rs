//! Rule repository
//!
//! Holds the two externally configured rule families and loads them lazily.
//!
//! - **model.rs**: serde types for `filterRules` and `grammarRules`
//! - **index.rs**: lowercase lookup sets compiled from a filter rule set
//! - **source.rs**: `RuleSource` trait with directory, HTTP and in-memory backends
//! - **repository.rs**: memoized "load-if-absent" repository and snapshots

pub mod index;
pub mod model;
pub mod repository;
pub mod source;

pub use index::FilterIndex;
pub use model::{FilterRuleSet, GrammarRuleSet, WordOrderRule};
pub use repository::{RuleRepository, RuleSnapshot};
pub use source::{source_from_config, DirSource, HttpSource, RuleSource, StaticSource};
