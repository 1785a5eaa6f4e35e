use super::{LoadError, LoadedText};
use std::path::Path;

/// Load a UTF-8 text file for glossing.
pub fn load(path: &str) -> Result<LoadedText, LoadError> {
    let path = Path::new(path);

    if !path.exists() {
        return Err(LoadError::FileNotFound(path.to_path_buf()));
    }

    let text = std::fs::read_to_string(path).map_err(|e| LoadError::Read(path.to_path_buf(), e))?;
    if text.trim().is_empty() {
        return Err(LoadError::Empty(path.display().to_string()));
    }

    Ok(LoadedText {
        text,
        source: format!("file:{}", path.display()),
    })
}
