use std::path::Path;

use gridmark_engine::GameSettings;

/// Load game settings from a YAML file. A missing file yields the defaults;
/// unreadable, unparsable or invalid content is an error.
pub fn load_settings(path: &Path) -> Result<GameSettings, String> {
    if !path.exists() {
        return Ok(GameSettings::default());
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {}", path.display(), e))?;
    let settings: GameSettings = serde_yaml_ng::from_str(&content)
        .map_err(|e| format!("Failed to parse config {}: {}", path.display(), e))?;

    settings
        .validate()
        .map_err(|e| format!("Config validation error: {}", e))?;

    Ok(settings)
}

pub fn save_settings(path: &Path, settings: &GameSettings) -> Result<(), String> {
    let content = serde_yaml_ng::to_string(settings)
        .map_err(|e| format!("Failed to serialize config: {}", e))?;
    std::fs::write(path, content)
        .map_err(|e| format!("Failed to write config {}: {}", path.display(), e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_config_path() -> PathBuf {
        let random_number: u32 = rand::random();
        std::env::temp_dir().join(format!("gridmark_config_{}.yaml", random_number))
    }

    #[test]
    fn test_missing_file_returns_defaults() {
        let path = PathBuf::from("this_file_does_not_exist.yaml");
        let settings = load_settings(&path).unwrap();
        assert_eq!(settings, GameSettings::default());
    }

    #[test]
    fn test_settings_round_trip_through_file() {
        let path = temp_config_path();
        let settings = GameSettings {
            field_width: 8,
            field_height: 5,
            win_length: 4,
        };

        save_settings(&path, &settings).unwrap();
        let loaded = load_settings(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_invalid_settings_rejected_on_load() {
        let path = temp_config_path();
        std::fs::write(&path, "field_width: 3\nfield_height: 3\nwin_length: 9\n").unwrap();

        let result = load_settings(&path);
        std::fs::remove_file(&path).unwrap();

        assert!(result.is_err());
    }

    #[test]
    fn test_unparsable_content_rejected() {
        let path = temp_config_path();
        std::fs::write(&path, "field_width: [not a number\n").unwrap();

        let result = load_settings(&path);
        std::fs::remove_file(&path).unwrap();

        assert!(result.is_err());
    }
}
