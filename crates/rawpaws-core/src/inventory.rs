//! 庫存模型

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::meat::MeatCategory;

/// 庫存模組
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InventoryModule {
    /// 肌肉肉（紅肉 + 白肉）
    #[serde(alias = "肌肉肉")]
    Meat,
    /// 內臟（心臟 + 非心臟內臟）
    #[serde(alias = "内脏")]
    Organ,
    /// 骨骼
    #[serde(alias = "骨骼")]
    Bone,
}

impl InventoryModule {
    /// 全部模組
    pub const ALL: [InventoryModule; 3] = [
        InventoryModule::Meat,
        InventoryModule::Organ,
        InventoryModule::Bone,
    ];

    /// 未指定類別時的預設類別
    pub fn default_category(self) -> MeatCategory {
        match self {
            InventoryModule::Meat => MeatCategory::Red,
            InventoryModule::Organ => MeatCategory::Heart,
            InventoryModule::Bone => MeatCategory::Bone,
        }
    }

    /// 模組內的類別
    pub fn categories(self) -> Vec<MeatCategory> {
        MeatCategory::ALL
            .iter()
            .copied()
            .filter(|c| c.module() == self)
            .collect()
    }

    /// 顯示名稱
    pub fn label(self) -> &'static str {
        match self {
            InventoryModule::Meat => "肌肉肉",
            InventoryModule::Organ => "内脏",
            InventoryModule::Bone => "骨骼",
        }
    }
}

/// 庫存狀態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InventoryStatus {
    /// 已入庫
    #[serde(alias = "已入库")]
    InStock,
    /// 消耗中
    #[serde(alias = "消耗中")]
    Consuming,
    /// 已消耗
    #[serde(alias = "已消耗")]
    Consumed,
}

/// 庫存批次
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    /// 庫存ID
    pub id: String,

    /// 模組
    pub module: InventoryModule,

    /// 類別
    pub category: MeatCategory,

    /// 名稱
    pub name: String,

    /// 重量（克）
    pub grams: Decimal,

    /// 狀態
    pub status: InventoryStatus,

    /// 入庫日期
    pub in_stock_date: NaiveDate,

    /// 開始消耗日期
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_consume_date: Option<NaiveDate>,

    /// 消耗完畢日期
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_consume_date: Option<NaiveDate>,
}

impl InventoryItem {
    /// 創建已入庫的庫存批次
    pub fn new(
        id: String,
        module: InventoryModule,
        category: MeatCategory,
        name: String,
        grams: Decimal,
        in_stock_date: NaiveDate,
    ) -> Self {
        Self {
            id,
            module,
            category,
            name,
            grams,
            status: InventoryStatus::InStock,
            in_stock_date,
            start_consume_date: None,
            end_consume_date: None,
        }
    }

    /// 切換狀態並記錄日期
    ///
    /// 進入「消耗中」時若尚未有開始日期則記為今天；進入「已消耗」時結束日期記為今天。
    /// 任何狀態都可以切換到任何狀態。
    pub fn transition(&mut self, status: InventoryStatus, today: NaiveDate) {
        match status {
            InventoryStatus::Consuming => {
                if self.start_consume_date.is_none() {
                    self.start_consume_date = Some(today);
                }
            }
            InventoryStatus::Consumed => self.end_consume_date = Some(today),
            InventoryStatus::InStock => {}
        }
        self.status = status;
    }

    /// 是否為消耗中
    pub fn is_consuming(&self) -> bool {
        self.status == InventoryStatus::Consuming
    }

    /// 是否為已入庫
    pub fn is_in_stock(&self) -> bool {
        self.status == InventoryStatus::InStock
    }
}

/// 入庫來源
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InboundType {
    /// 庫存直調
    #[serde(alias = "库存直调")]
    Direct,
    /// 採購計劃入庫
    #[serde(alias = "采购计划入库")]
    Purchase,
}

/// 調整類型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdjustType {
    /// 新增
    #[serde(alias = "新增")]
    New,
    /// 修改
    #[serde(alias = "修改")]
    Modified,
}

/// 入庫記錄（只追加，不修改）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InboundRecord {
    /// 記錄ID
    pub id: String,

    /// 入庫來源
    #[serde(rename = "type")]
    pub inbound_type: InboundType,

    /// 模組
    pub module: InventoryModule,

    /// 類別
    pub category: MeatCategory,

    /// 名稱
    pub name: String,

    /// 重量（克）
    pub grams: Decimal,

    /// 日期
    pub date: NaiveDate,

    /// 調整類型
    pub adjust_type: AdjustType,
}

impl InboundRecord {
    /// 依庫存批次建立「新增」入庫記錄
    pub fn for_item(id: String, item: &InventoryItem, inbound_type: InboundType) -> Self {
        Self {
            id,
            inbound_type,
            module: item.module,
            category: item.category,
            name: item.name.clone(),
            grams: item.grams,
            date: item.in_stock_date,
            adjust_type: AdjustType::New,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn beef() -> InventoryItem {
        InventoryItem::new(
            "i1".to_string(),
            InventoryModule::Meat,
            MeatCategory::Red,
            "牛肉".to_string(),
            Decimal::from(1000),
            date(2023, 12, 20),
        )
    }

    #[test]
    fn test_status_transition_stamps_dates() {
        let mut item = beef();

        item.transition(InventoryStatus::Consuming, date(2024, 1, 1));
        assert_eq!(item.status, InventoryStatus::Consuming);
        assert_eq!(item.start_consume_date, Some(date(2024, 1, 1)));

        item.transition(InventoryStatus::Consumed, date(2024, 1, 10));
        assert_eq!(item.status, InventoryStatus::Consumed);
        assert_eq!(item.end_consume_date, Some(date(2024, 1, 10)));
        assert_eq!(item.start_consume_date, Some(date(2024, 1, 1)));
    }

    #[test]
    fn test_transition_keeps_existing_start_date() {
        let mut item = beef();
        item.transition(InventoryStatus::Consuming, date(2024, 1, 1));
        item.transition(InventoryStatus::InStock, date(2024, 1, 3));
        item.transition(InventoryStatus::Consuming, date(2024, 1, 5));

        assert_eq!(item.start_consume_date, Some(date(2024, 1, 1)));
        assert!(item.is_consuming());
    }

    #[test]
    fn test_inbound_record_for_item() {
        let item = beef();
        let record = InboundRecord::for_item("r1".to_string(), &item, InboundType::Purchase);

        assert_eq!(record.grams, item.grams);
        assert_eq!(record.date, item.in_stock_date);
        assert_eq!(record.adjust_type, AdjustType::New);

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["type"], "purchase");
        assert_eq!(json["adjustType"], "new");
    }

    #[test]
    fn test_module_categories() {
        assert_eq!(
            InventoryModule::Organ.categories(),
            vec![MeatCategory::Heart, MeatCategory::Organ]
        );
        assert_eq!(InventoryModule::Bone.default_category(), MeatCategory::Bone);
        assert_eq!(InventoryModule::Organ.default_category(), MeatCategory::Heart);
        assert_eq!(InventoryModule::Meat.default_category(), MeatCategory::Red);
    }

    #[test]
    fn test_legacy_status_label() {
        let status: InventoryStatus = serde_json::from_str("\"消耗中\"").unwrap();
        assert_eq!(status, InventoryStatus::Consuming);
    }
}
