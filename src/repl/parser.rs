use super::ReplCommand;

/// Parse REPL input string into a command
///
/// Supports:
/// - `:q` or `:quit` → Quit command
/// - `:h` or `:help` → Help command
/// - `:profile rules|static` → switch profile
/// - `:reload` → retry loading absent rules
/// - `@filename` → gloss a file, `@@` → gloss the clipboard
/// - anything else → gloss the line itself
pub fn parse_repl_input(input: &str) -> ReplCommand {
    let input = input.trim();

    if input.is_empty() {
        return ReplCommand::Unknown(input.to_string());
    }

    if let Some(cmd) = input.strip_prefix(':') {
        let mut parts = cmd.split_whitespace();
        match (parts.next(), parts.next()) {
            (Some("q" | "quit"), None) => ReplCommand::Quit,
            (Some("h" | "help"), None) => ReplCommand::Help,
            (Some("reload"), None) => ReplCommand::ReloadRules,
            (Some("profile"), Some(name)) => match name.parse() {
                Ok(profile) => ReplCommand::SetProfile(profile),
                Err(_) => ReplCommand::Unknown(input.to_string()),
            },
            _ => ReplCommand::Unknown(input.to_string()),
        }
    } else if let Some(rest) = input.strip_prefix('@') {
        let filename = rest.trim();
        if filename.is_empty() || filename == "@" {
            ReplCommand::LoadClipboard
        } else {
            ReplCommand::LoadFile(filename.to_string())
        }
    } else {
        ReplCommand::Gloss(input.to_string())
    }
}
