//! REPL (Read-Eval-Print Loop) module
//!
//! ## Module Structure
//!
//! - **command.rs**: Command definitions and conversion to AppEvent
//! - **parser.rs**: Manual string parsing for `@` and `:` prefixes
//!
//! ## Usage in main.rs
//!
//! ```rust,ignore
//! let event = command_to_app_event(parse_repl_input(&line));
//! for line in app.handle_event(event).await {
//!     println!("{line}");
//! }
//! ```

pub mod command;
pub mod parser;

pub use command::{command_to_app_event, ReplCommand};
pub use parser::parse_repl_input;
