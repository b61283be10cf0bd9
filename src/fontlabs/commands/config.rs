use crate::commands::{CmdMessage, CmdResult};
use crate::config::FontlabsConfig;
use crate::error::Result;
use std::path::Path;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    let mut config = FontlabsConfig::load(dir)?;
    let mut result = CmdResult::default();

    match action {
        ConfigAction::ShowAll => Ok(result.with_config(config)),
        ConfigAction::ShowKey(key) => {
            match config.get(&key) {
                Some(value) => result.add_message(CmdMessage::info(value)),
                None => {
                    result.add_message(CmdMessage::error(format!("Unknown config key: {}", key)))
                }
            }
            Ok(result)
        }
        ConfigAction::Set(key, value) => {
            if let Err(e) = config.set(&key, &value) {
                result.add_message(CmdMessage::error(e));
                return Ok(result);
            }
            config.save(dir)?;
            let shown = config.get(&key).unwrap_or(value);
            result.add_message(CmdMessage::success(format!("{} set to {}", key, shown)));
            Ok(result.with_config(config))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;

    #[test]
    fn set_persists_and_show_key_reads_it() {
        let temp_dir = tempfile::tempdir().unwrap();
        let dir = temp_dir.path();

        let set = run(dir, ConfigAction::Set("page-size".into(), "32".into())).unwrap();
        assert_eq!(set.messages[0].content, "page-size set to 32");
        assert_eq!(set.config.unwrap().page_size, 32);

        let shown = run(dir, ConfigAction::ShowKey("page-size".into())).unwrap();
        assert_eq!(shown.messages[0].content, "32");
    }

    #[test]
    fn show_all_returns_defaults_without_a_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let result = run(temp_dir.path(), ConfigAction::ShowAll).unwrap();
        assert_eq!(result.config, Some(FontlabsConfig::default()));
    }

    #[test]
    fn invalid_values_are_reported_not_saved() {
        let temp_dir = tempfile::tempdir().unwrap();
        let dir = temp_dir.path();

        let result = run(dir, ConfigAction::Set("trending-limit".into(), "0".into())).unwrap();
        assert!(result.has_level(MessageLevel::Error));
        assert!(!dir.join("config.json").exists());

        let unknown = run(dir, ConfigAction::ShowKey("colour".into())).unwrap();
        assert!(unknown.has_level(MessageLevel::Error));
    }
}
