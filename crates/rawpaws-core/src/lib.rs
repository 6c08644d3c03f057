//! # RawPaws Core
//!
//! 核心資料模型與類型定義

pub mod calendar;
pub mod cat;
pub mod config;
pub mod inventory;
pub mod meat;
pub mod purchase;
pub mod quantity;
pub mod supplement;

// Re-export 主要類型
pub use calendar::{Clock, FixedClock, SystemClock};
pub use cat::{Cat, DietRatios, Gender};
pub use config::PlannerConfig;
pub use inventory::{
    AdjustType, InboundRecord, InboundType, InventoryItem, InventoryModule, InventoryStatus,
};
pub use meat::{MeatCategory, MeatType};
pub use purchase::PurchaseItem;
pub use supplement::{DosingMethod, Supplement, SupplementUnit};

/// 飲食規劃錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum DietError {
    #[error("名稱不可為空: {0}")]
    EmptyName(String),

    #[error("無效的克數: {0}")]
    InvalidGrams(String),

    #[error("找不到貓咪: {0}")]
    CatNotFound(String),

    #[error("找不到肉類: {0}")]
    MeatNotFound(String),

    #[error("找不到補充劑: {0}")]
    SupplementNotFound(String),

    #[error("找不到庫存記錄: {0}")]
    InventoryItemNotFound(String),

    #[error("找不到採購計劃: {0}")]
    PurchaseNotFound(String),

    #[error("無效的日期: {0}")]
    InvalidDate(String),

    #[error("無效的配置: {0}")]
    InvalidConfig(String),

    #[error("儲存錯誤: {0}")]
    Storage(String),

    #[error("序列化錯誤: {0}")]
    Serialization(String),
}

pub type Result<T> = std::result::Result<T, DietError>;

/// 產生新的記錄 ID
pub fn generate_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// 校驗必填名稱，回傳去除前後空白後的名稱
pub fn require_name(field: &str, name: &str) -> Result<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(DietError::EmptyName(field.to_string()));
    }
    Ok(trimmed.to_string())
}
