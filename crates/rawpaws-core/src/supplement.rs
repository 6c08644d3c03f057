//! 補充劑模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 補充劑單位
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SupplementUnit {
    /// 克
    Gram,
    /// 片
    Pill,
    /// 滴
    Drop,
    /// 泵／顆
    Pump,
}

impl SupplementUnit {
    /// 顯示符號
    pub fn symbol(self) -> &'static str {
        match self {
            SupplementUnit::Gram => "g",
            SupplementUnit::Pill => "片",
            SupplementUnit::Drop => "滴",
            SupplementUnit::Pump => "颗",
        }
    }
}

/// 給量方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DosingMethod {
    /// 每日固定量
    FixedDaily,
    /// 按每日食量百分比（克）
    ByFoodRatio,
}

/// 自訂補充劑（隸屬於單一貓咪）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Supplement {
    /// 補充劑ID
    pub id: String,

    /// 名稱
    pub name: String,

    /// 單位
    pub unit: SupplementUnit,

    /// 給量方式
    pub method: DosingMethod,

    /// 數值（固定量或百分比）
    pub value: Decimal,
}

impl Supplement {
    /// 創建每日固定量補充劑
    pub fn fixed_daily(id: String, name: String, unit: SupplementUnit, value: Decimal) -> Self {
        Self {
            id,
            name,
            unit,
            method: DosingMethod::FixedDaily,
            value,
        }
    }

    /// 創建按食量百分比的補充劑（單位固定為克）
    pub fn by_food_ratio(id: String, name: String, percent: Decimal) -> Self {
        Self {
            id,
            name,
            unit: SupplementUnit::Gram,
            method: DosingMethod::ByFoodRatio,
            value: percent,
        }
    }

    /// 實際劑量單位；按比例給量時一律為克
    pub fn dose_unit(&self) -> SupplementUnit {
        match self.method {
            DosingMethod::FixedDaily => self.unit,
            DosingMethod::ByFoodRatio => SupplementUnit::Gram,
        }
    }
}
