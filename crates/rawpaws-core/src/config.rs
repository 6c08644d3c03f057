//! 規劃參數配置

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{DietError, Result};

/// 飲食與庫存規劃參數
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// 每日餐數
    pub meals_per_day: u32,

    /// 食材分裝天數（一週）
    pub food_days: u32,

    /// 補充劑備貨天數
    pub supplement_days: u32,

    /// 日消耗為零時的可用天數（視為無限）
    pub unlimited_days: Decimal,

    /// 剩餘天數低於此值時發出提醒
    pub low_supply_days: i64,

    /// 只有可用天數低於此值時才建議補足到整週
    pub restock_horizon_days: Decimal,

    /// 判斷「已是整週倍數」的容差（克）
    pub restock_tolerance_grams: Decimal,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            meals_per_day: 3,
            food_days: 7,
            supplement_days: 30,
            unlimited_days: Decimal::from(999),
            low_supply_days: 3,
            restock_horizon_days: Decimal::from(100),
            restock_tolerance_grams: Decimal::ONE,
        }
    }
}

impl PlannerConfig {
    /// 創建預設配置
    pub fn new() -> Self {
        Self::default()
    }

    /// 從 JSON 字串載入配置，缺少的欄位使用預設值
    pub fn from_json_str(raw: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(raw).map_err(|e| DietError::Serialization(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// 驗證配置
    pub fn validate(&self) -> Result<()> {
        if self.meals_per_day == 0 {
            return Err(DietError::InvalidConfig("meals_per_day 必須大於 0".to_string()));
        }
        Ok(())
    }

    /// 建構器模式：設置每日餐數
    pub fn with_meals_per_day(mut self, meals: u32) -> Self {
        self.meals_per_day = meals.max(1);
        self
    }

    /// 建構器模式：設置分裝天數
    pub fn with_food_days(mut self, days: u32) -> Self {
        self.food_days = days;
        self
    }

    /// 建構器模式：設置補充劑備貨天數
    pub fn with_supplement_days(mut self, days: u32) -> Self {
        self.supplement_days = days;
        self
    }

    /// 建構器模式：設置低庫存提醒天數
    pub fn with_low_supply_days(mut self, days: i64) -> Self {
        self.low_supply_days = days;
        self
    }

    /// 每日餐數（Decimal），至少一餐
    pub fn meals_per_day_decimal(&self) -> Decimal {
        Decimal::from(self.meals_per_day.max(1))
    }

    /// 一個分裝週期的總餐數
    pub fn total_meals(&self) -> u32 {
        self.meals_per_day * self.food_days
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PlannerConfig::default();

        assert_eq!(config.meals_per_day, 3);
        assert_eq!(config.food_days, 7);
        assert_eq!(config.supplement_days, 30);
        assert_eq!(config.total_meals(), 21);
        assert_eq!(config.unlimited_days, Decimal::from(999));
    }

    #[test]
    fn test_config_builder() {
        let config = PlannerConfig::new()
            .with_meals_per_day(2)
            .with_food_days(14)
            .with_supplement_days(60)
            .with_low_supply_days(5);

        assert_eq!(config.total_meals(), 28);
        assert_eq!(config.supplement_days, 60);
        assert_eq!(config.low_supply_days, 5);

        // 每日至少一餐
        assert_eq!(PlannerConfig::new().with_meals_per_day(0).meals_per_day, 1);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = PlannerConfig::from_json_str(r#"{ "food_days": 10 }"#).unwrap();

        assert_eq!(config.food_days, 10);
        assert_eq!(config.meals_per_day, 3);
        assert!(PlannerConfig::from_json_str("{ not json").is_err());
    }

    #[test]
    fn test_zero_meals_rejected() {
        assert!(matches!(
            PlannerConfig::from_json_str(r#"{ "meals_per_day": 0 }"#),
            Err(DietError::InvalidConfig(_))
        ));

        // 直接建構的零餐配置按一餐計算
        let config = PlannerConfig {
            meals_per_day: 0,
            ..PlannerConfig::default()
        };
        assert!(config.validate().is_err());
        assert_eq!(config.meals_per_day_decimal(), Decimal::ONE);
    }
}
