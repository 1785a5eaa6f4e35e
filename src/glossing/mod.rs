//! Glossing engine
//!
//! raw text → `normalize` → `filter` → `reorder` → `synth` → variants.
//! `pipeline::Glosser` ties the stages to a rule snapshot and exposes the
//! two transformation profiles.

pub mod filter;
pub mod normalize;
pub mod pipeline;
pub mod reorder;
pub mod synth;
pub mod tables;
pub mod token;

pub use normalize::{Normalizer, Sentence};
pub use pipeline::{GlossResult, Glosser, Profile, SentenceGloss};
pub use synth::GlossVariants;
pub use token::Token;
