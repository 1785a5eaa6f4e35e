use crate::glossing::Profile;

/// Application events
#[derive(Debug, PartialEq, Clone)]
pub enum AppEvent {
    Gloss(String),
    LoadFile(String),
    LoadClipboard,
    SetProfile(Profile),
    ReloadRules,
    Quit,
    Help,
    InvalidCommand(String),
}
