//! Swedish text to Swedish Sign Language gloss notation.
//!
//! - **glossing**: normalize, filter, reorder and synthesize glosses
//! - **rules**: lazily loaded filter and grammar rule families
//! - **lexicon**: video-link checker for the sign lexicon
//! - **engine**: configuration and error types
//! - **app** / **repl** / **input**: the interactive front end

pub mod app;
pub mod engine;
pub mod glossing;
pub mod input;
pub mod lexicon;
pub mod logging;
pub mod repl;
pub mod rules;
