use crate::app::AppEvent;
use crate::glossing::Profile;

/// Commands that can be parsed from REPL input
///
/// These commands map to AppEvent for handling in App core.
#[derive(Debug, Clone, PartialEq)]
pub enum ReplCommand {
    /// Gloss a line of Swedish text
    Gloss(String),

    /// Gloss the contents of a text file
    LoadFile(String),

    /// Gloss the clipboard text
    LoadClipboard,

    /// Switch transformation profile
    SetProfile(Profile),

    /// Retry loading rule families that are still absent
    ReloadRules,

    /// Quit the application
    Quit,

    /// Show help information
    Help,

    /// Unknown/invalid command
    Unknown(String),
}

/// Convert a parsed REPL command into an AppEvent
pub fn command_to_app_event(command: ReplCommand) -> AppEvent {
    match command {
        ReplCommand::Gloss(text) => AppEvent::Gloss(text),
        ReplCommand::LoadFile(path) => AppEvent::LoadFile(path),
        ReplCommand::LoadClipboard => AppEvent::LoadClipboard,
        ReplCommand::SetProfile(profile) => AppEvent::SetProfile(profile),
        ReplCommand::ReloadRules => AppEvent::ReloadRules,
        ReplCommand::Quit => AppEvent::Quit,
        ReplCommand::Help => AppEvent::Help,
        ReplCommand::Unknown(input) => AppEvent::InvalidCommand(input),
    }
}
