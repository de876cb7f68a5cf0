use anyhow::{anyhow, Result};
use std::fs;
use std::path::PathBuf;

/// Storage key for the saved value list. The on-disk record is
/// `<key>.json` containing a JSON array of strings; external tooling
/// relies on this exact name and encoding.
pub const VALUES_KEY: &str = "clipboard-values";

pub fn get_clip_tui_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().ok_or_else(|| anyhow!("Could not find home directory"))?;
    Ok(home.join(".clip-tui"))
}

pub fn get_values_path() -> Result<PathBuf> {
    let dir = get_clip_tui_dir()?;
    Ok(dir.join(format!("{VALUES_KEY}.json")))
}

pub fn get_config_path() -> Result<PathBuf> {
    let dir = get_clip_tui_dir()?;
    Ok(dir.join("config.toml"))
}

pub fn ensure_directories_exist() -> Result<()> {
    let dir = get_clip_tui_dir()?;

    if !dir.exists() {
        fs::create_dir_all(&dir)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_clip_tui_dir() {
        let dir = get_clip_tui_dir().unwrap();
        assert!(dir.to_string_lossy().contains(".clip-tui"));
    }

    #[test]
    fn test_get_values_path() {
        let path = get_values_path().unwrap();
        assert!(path.to_string_lossy().contains(".clip-tui"));
        assert!(path.to_string_lossy().ends_with("clipboard-values.json"));
    }

    #[test]
    fn test_get_config_path() {
        let path = get_config_path().unwrap();
        assert!(path.to_string_lossy().contains(".clip-tui"));
        assert!(path.to_string_lossy().ends_with("config.toml"));
    }
}
