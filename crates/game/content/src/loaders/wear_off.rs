//! Wear-off message loader.

use std::path::Path;

use charstate_core::EffectKind;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};
use crate::oracle::WearOffTable;

/// One wear-off message in a RON file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WearOffEntry {
    pub kind: EffectKind,
    #[serde(default)]
    pub message: String,
}

/// Wear-off table structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WearOffFile {
    pub messages: Vec<WearOffEntry>,
}

/// Loader for wear-off messages from RON files.
pub struct WearOffLoader;

impl WearOffLoader {
    pub fn load(path: &Path) -> LoadResult<WearOffTable> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<WearOffTable> {
        let file: WearOffFile = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse wear-off RON: {}", e))?;

        Ok(file
            .messages
            .into_iter()
            .map(|entry| (entry.kind, entry.message))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use charstate_core::SkillOracle;

    #[test]
    fn missing_message_means_silent() {
        let table = WearOffLoader::parse(
            r#"(messages: [
                (kind: 59, message: "You float back to the ground."),
                (kind: 440),
            ])"#,
        )
        .expect("table");

        assert_eq!(
            table.wear_off(EffectKind::LEVITATE),
            Some("You float back to the ground.")
        );
        assert_eq!(table.wear_off(EffectKind::BERSERK), Some(""));
    }
}
