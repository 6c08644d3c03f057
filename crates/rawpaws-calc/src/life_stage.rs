//! 生命階段判斷

use chrono::NaiveDate;
use rawpaws_core::calendar::whole_months_between;
use serde::Serialize;

/// 未滿此月數為幼貓
pub const ADULT_AGE_MONTHS: i32 = 12;

/// 生命階段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LifeStage {
    /// 幼貓（< 12 個月）
    Kitten,
    /// 成貓（≥ 12 個月）
    Adult,
}

impl LifeStage {
    /// 依生日判斷生命階段
    pub fn classify(birth_date: NaiveDate, today: NaiveDate) -> Self {
        if age_in_months(birth_date, today) < ADULT_AGE_MONTHS {
            LifeStage::Kitten
        } else {
            LifeStage::Adult
        }
    }

    pub fn is_adult(self) -> bool {
        self == LifeStage::Adult
    }

    /// 顯示名稱
    pub fn label(self) -> &'static str {
        match self {
            LifeStage::Kitten => "幼猫",
            LifeStage::Adult => "成猫",
        }
    }
}

/// 完整月齡（未滿一個月不計）
pub fn age_in_months(birth_date: NaiveDate, today: NaiveDate) -> i32 {
    whole_months_between(birth_date, today)
}

/// 年齡標籤，例如 `2y 3m`
pub fn age_label(birth_date: NaiveDate, today: NaiveDate) -> String {
    let months = age_in_months(birth_date, today).max(0);
    format!("{}y {}m", months / 12, months % 12)
}
