//! # RawPaws Store
//!
//! 鍵值儲存、髒標記追蹤與應用狀態容器

pub mod backend;
pub mod config;
pub mod dirty_tracking;
pub mod household;

// Re-export 主要類型
pub use backend::{FileStore, KeyValueStore, MemoryStore};
pub use config::StoreConfig;
pub use dirty_tracking::{Collection, DirtyTracker};
pub use household::Household;

use rawpaws_core::DietError;

/// 儲存層錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("I/O 錯誤: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON 錯誤: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<StoreError> for DietError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Io(e) => DietError::Storage(e.to_string()),
            StoreError::Json(e) => DietError::Serialization(e.to_string()),
        }
    }
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;
