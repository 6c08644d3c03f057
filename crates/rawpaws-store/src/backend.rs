//! 鍵值儲存後端

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::StoreResult;

/// 鍵值儲存（每個鍵存一份完整的 JSON 字串）
pub trait KeyValueStore {
    /// 讀取；鍵不存在時回傳 `None`
    fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// 整份覆寫
    fn set(&mut self, key: &str, value: &str) -> StoreResult<()>;
}

/// 記憶體儲存
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> StoreResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// 檔案儲存：資料目錄下每個鍵一個 `<key>.json`
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// 開啟資料目錄，不存在時建立
    pub fn open(dir: impl AsRef<Path>) -> StoreResult<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;
        tracing::debug!("開啟資料目錄 {}", dir.display());
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(path)?))
    }

    fn set(&mut self, key: &str, value: &str) -> StoreResult<()> {
        // 先寫暫存檔再改名
        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store() {
        let mut store = MemoryStore::new();

        assert_eq!(store.get("cats").unwrap(), None);
        store.set("cats", "[]").unwrap();
        store.set("cats", "[1]").unwrap();

        assert_eq!(store.get("cats").unwrap().as_deref(), Some("[1]"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::open(dir.path().join("data")).unwrap();

        assert_eq!(store.get("rawpaws_cats").unwrap(), None);
        store.set("rawpaws_cats", "[]").unwrap();

        assert!(dir.path().join("data").join("rawpaws_cats.json").exists());
        assert_eq!(store.get("rawpaws_cats").unwrap().as_deref(), Some("[]"));

        // 重新開啟仍讀得到
        let reopened = FileStore::open(dir.path().join("data")).unwrap();
        assert_eq!(reopened.get("rawpaws_cats").unwrap().as_deref(), Some("[]"));
    }
}
