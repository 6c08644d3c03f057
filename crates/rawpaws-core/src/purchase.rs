//! 採購計劃模型

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::inventory::{InventoryItem, InventoryModule};
use crate::meat::MeatCategory;

/// 待到貨的採購項目
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseItem {
    /// 採購ID
    pub id: String,

    /// 模組
    pub module: InventoryModule,

    /// 類別
    pub category: MeatCategory,

    /// 名稱
    pub name: String,

    /// 重量（克）
    pub grams: Decimal,

    /// 預計到貨日期
    pub expected_date: NaiveDate,
}

impl PurchaseItem {
    /// 創建新的採購項目
    pub fn new(
        id: String,
        module: InventoryModule,
        category: MeatCategory,
        name: String,
        grams: Decimal,
        expected_date: NaiveDate,
    ) -> Self {
        Self {
            id,
            module,
            category,
            name,
            grams,
            expected_date,
        }
    }

    /// 到貨後轉為庫存批次（已入庫，入庫日期為到貨當天）
    pub fn into_inventory_item(self, id: String, arrived_on: NaiveDate) -> InventoryItem {
        InventoryItem::new(id, self.module, self.category, self.name, self.grams, arrived_on)
    }
}
