//! # RawPaws Ledger
//!
//! 貓咪、肉類資料庫、庫存與採購計劃的狀態集合

pub mod catalog;
pub mod cats;
pub mod inventory;
pub mod purchase;

// Re-export 主要類型
pub use catalog::MeatCatalog;
pub use cats::CatRegistry;
pub use inventory::{
    InventoryDraft, InventoryFilter, InventoryLedger, InventorySummary, ModuleStock,
};
pub use purchase::{PurchaseCoverage, PurchaseDraft, PurchasePlanner};

use rawpaws_core::{DietError, InventoryModule, MeatCategory, Result};
use rust_decimal::Decimal;

/// 校驗克數：零視為未填寫；負數只記錄警告，不阻止
pub(crate) fn require_grams(name: &str, grams: Decimal) -> Result<()> {
    if grams.is_zero() {
        return Err(DietError::InvalidGrams(format!("{}: {}", name, grams)));
    }
    if grams.is_sign_negative() {
        tracing::warn!("{} 的克數為負數：{}", name, grams);
    }
    Ok(())
}

/// 按模組內類別彙總克數（保留零值類別）
pub(crate) fn category_breakdown(
    module: InventoryModule,
    entries: &[(MeatCategory, Decimal)],
) -> Vec<(MeatCategory, Decimal)> {
    module
        .categories()
        .into_iter()
        .map(|category| {
            let grams = entries
                .iter()
                .filter(|(c, _)| *c == category)
                .map(|(_, g)| *g)
                .sum();
            (category, grams)
        })
        .collect()
}
