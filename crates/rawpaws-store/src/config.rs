//! 儲存配置

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::dirty_tracking::Collection;
use crate::StoreResult;

/// 儲存配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// 鍵名前綴
    pub key_prefix: String,

    /// 檔案儲存的資料目錄
    pub data_dir: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            key_prefix: "rawpaws_".to_string(),
            data_dir: PathBuf::from("rawpaws-data"),
        }
    }
}

impl StoreConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// 從 JSON 檔案載入，缺少的欄位使用預設值
    pub fn from_json_file(path: impl AsRef<Path>) -> StoreResult<Self> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// 建構器模式：設置鍵名前綴
    pub fn with_key_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.key_prefix = prefix.into();
        self
    }

    /// 建構器模式：設置資料目錄
    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = dir.into();
        self
    }

    /// 集合在儲存中的完整鍵名
    pub fn key_for(&self, collection: Collection) -> String {
        format!("{}{}", self.key_prefix, collection.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Collection::Cats, "rawpaws_cats")]
    #[case(Collection::Meats, "rawpaws_meats")]
    #[case(Collection::Inventory, "rawpaws_inventory")]
    #[case(Collection::Purchases, "rawpaws_purchases")]
    #[case(Collection::InboundRecords, "rawpaws_inboundRecords")]
    fn test_key_for(#[case] collection: Collection, #[case] expected: &str) {
        assert_eq!(StoreConfig::default().key_for(collection), expected);
    }

    #[test]
    fn test_custom_prefix() {
        let config = StoreConfig::new().with_key_prefix("").with_data_dir("/tmp/cats");

        assert_eq!(config.key_for(Collection::Meats), "meats");
        assert_eq!(config.data_dir, PathBuf::from("/tmp/cats"));
    }

    #[test]
    fn test_from_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        fs::write(&path, r#"{ "key_prefix": "cat_" }"#).unwrap();

        let config = StoreConfig::from_json_file(&path).unwrap();

        assert_eq!(config.key_prefix, "cat_");
        assert_eq!(config.data_dir, PathBuf::from("rawpaws-data"));
    }

    #[test]
    fn test_from_missing_file() {
        assert!(StoreConfig::from_json_file("/nonexistent/store.json").is_err());
    }
}
