//! 庫存可用天數與補貨建議

use chrono::NaiveDate;
use rawpaws_core::calendar::{add_days, days_between};
use rawpaws_core::quantity::{round_whole, truncate_days};
use rawpaws_core::{InventoryItem, InventoryModule, MeatCategory, PlannerConfig};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::consumption::DailyConsumption;

/// 可用天數：日消耗為零時回傳哨兵值（視為無限）
pub fn days_of_supply(
    total_grams: Decimal,
    daily_usage: Decimal,
    config: &PlannerConfig,
) -> Decimal {
    if daily_usage.is_zero() {
        return config.unlimited_days;
    }
    total_grams
        .checked_div(daily_usage)
        .unwrap_or(config.unlimited_days)
}

/// 補足到整週倍數的建議
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RestockAdvice {
    /// 庫存已是整週用量的倍數
    AlreadyWeekly,
    /// 建議補足的克數
    TopUp(Decimal),
    /// 不需要建議（庫存充足或沒有消耗）
    Unneeded,
}

impl RestockAdvice {
    /// 依庫存總量與日消耗計算
    ///
    /// 餘數 = 總量 mod (日消耗 * 7)，缺口 = 週用量 - 餘數；缺口在 1 克容差內接近 0 或整週時
    /// 視為已是倍數，否則只有可用天數少於 100 天時才建議補足。
    pub fn assess(total_grams: Decimal, daily_usage: Decimal, config: &PlannerConfig) -> Self {
        let weekly = daily_usage * Decimal::from(config.food_days);
        if weekly.is_zero() {
            return RestockAdvice::Unneeded;
        }

        let remainder = total_grams % weekly;
        let missing = weekly - remainder;
        let tolerance = config.restock_tolerance_grams;

        if missing.abs() < tolerance || (missing - weekly).abs() < tolerance {
            return RestockAdvice::AlreadyWeekly;
        }

        if days_of_supply(total_grams, daily_usage, config) < config.restock_horizon_days {
            RestockAdvice::TopUp(round_whole(missing))
        } else {
            RestockAdvice::Unneeded
        }
    }

    /// 建議補足的克數
    pub fn top_up(&self) -> Option<Decimal> {
        match self {
            RestockAdvice::TopUp(grams) => Some(*grams),
            _ => None,
        }
    }
}

/// 單一模組的庫存可用狀況
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SupplyStatus {
    pub module: InventoryModule,

    /// 庫存總量（克）
    pub total_grams: Decimal,

    /// 每日消耗
    pub daily_usage: Decimal,

    /// 可用天數
    pub days: Decimal,

    pub restock: RestockAdvice,
}

impl SupplyStatus {
    /// 評估模組庫存
    pub fn assess(
        module: InventoryModule,
        total_grams: Decimal,
        daily_usage: Decimal,
        config: &PlannerConfig,
    ) -> Self {
        Self {
            module,
            total_grams,
            daily_usage,
            days: days_of_supply(total_grams, daily_usage, config),
            restock: RestockAdvice::assess(total_grams, daily_usage, config),
        }
    }
}

/// 消耗中批次的預計吃完日期
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConsumptionProjection {
    pub item_id: String,
    pub name: String,
    pub module: InventoryModule,
    pub category: MeatCategory,
    pub grams: Decimal,

    /// 適用的每日消耗
    pub daily_usage: Decimal,

    /// 批次可吃天數
    pub total_days: Decimal,

    pub start_date: NaiveDate,

    /// 預計吃完日期（開始日期 + 天數的整數部分）
    pub end_date: NaiveDate,

    /// 剩餘天數，負數表示已超期
    pub days_remaining: i64,
}

impl ConsumptionProjection {
    /// 推算消耗中批次；非消耗中或沒有開始日期的批次回傳 `None`
    pub fn project(
        item: &InventoryItem,
        consumption: &DailyConsumption,
        today: NaiveDate,
        config: &PlannerConfig,
    ) -> rawpaws_core::Result<Option<Self>> {
        let start_date = match item.start_consume_date {
            Some(date) if item.is_consuming() => date,
            _ => return Ok(None),
        };

        let daily_usage = consumption.for_item(item.module, item.category);
        let total_days = days_of_supply(item.grams, daily_usage, config);
        let end_date = add_days(start_date, truncate_days(total_days))?;

        Ok(Some(Self {
            item_id: item.id.clone(),
            name: item.name.clone(),
            module: item.module,
            category: item.category,
            grams: item.grams,
            daily_usage,
            total_days,
            start_date,
            end_date,
            days_remaining: days_between(today, end_date),
        }))
    }

    /// 已超過預計吃完日期
    pub fn is_overdue(&self) -> bool {
        self.days_remaining < 0
    }

    /// 即將吃完（0 到提醒天數之間）
    pub fn is_running_low(&self, config: &PlannerConfig) -> bool {
        (0..=config.low_supply_days).contains(&self.days_remaining)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rawpaws_core::{Cat, InventoryStatus};
    use rstest::rstest;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_days_of_supply() {
        let config = PlannerConfig::default();

        assert_eq!(
            days_of_supply(Decimal::from(700), Decimal::from(100), &config),
            Decimal::from(7)
        );
        assert_eq!(
            days_of_supply(Decimal::from(700), Decimal::ZERO, &config),
            Decimal::from(999)
        );
        // 商超出數值範圍時視為無限
        assert_eq!(
            days_of_supply(Decimal::MAX, Decimal::new(1, 28), &config),
            Decimal::from(999)
        );
    }

    #[rstest]
    #[case(650, 100, RestockAdvice::TopUp(Decimal::from(50)))]
    #[case(700, 100, RestockAdvice::AlreadyWeekly)]
    #[case(0, 100, RestockAdvice::AlreadyWeekly)]
    #[case(1400, 100, RestockAdvice::AlreadyWeekly)]
    #[case(1399, 100, RestockAdvice::TopUp(Decimal::ONE))]
    #[case(1000, 100, RestockAdvice::TopUp(Decimal::from(400)))]
    #[case(10_050, 100, RestockAdvice::Unneeded)] // 100.5 天，不建議
    #[case(700, 0, RestockAdvice::Unneeded)]
    fn test_restock_advice(
        #[case] total: i64,
        #[case] daily: i64,
        #[case] expected: RestockAdvice,
    ) {
        let advice = RestockAdvice::assess(
            Decimal::from(total),
            Decimal::from(daily),
            &PlannerConfig::default(),
        );
        assert_eq!(advice, expected);
    }

    #[test]
    fn test_restock_within_tolerance() {
        // 缺 0.5 克，在 1 克容差內視為整週
        let advice = RestockAdvice::assess(
            Decimal::new(13995, 1),
            Decimal::from(100),
            &PlannerConfig::default(),
        );
        assert_eq!(advice, RestockAdvice::AlreadyWeekly);
    }

    #[test]
    fn test_restock_fractional_usage() {
        // 日消耗 27g，週用量 189g；500 mod 189 = 122，缺口 67
        let advice = RestockAdvice::assess(
            Decimal::from(500),
            Decimal::from(27),
            &PlannerConfig::default(),
        );
        assert_eq!(advice.top_up(), Some(Decimal::from(67)));
    }

    #[test]
    fn test_supply_status() {
        let status = SupplyStatus::assess(
            InventoryModule::Meat,
            Decimal::from(650),
            Decimal::from(100),
            &PlannerConfig::default(),
        );

        assert_eq!(status.days, Decimal::new(65, 1));
        assert_eq!(status.restock.top_up(), Some(Decimal::from(50)));
    }

    fn consuming_item(
        module: InventoryModule,
        category: MeatCategory,
        grams: i64,
    ) -> InventoryItem {
        let mut item = InventoryItem::new(
            "i1".to_string(),
            module,
            category,
            "批次".to_string(),
            Decimal::from(grams),
            date(2023, 12, 25),
        );
        item.transition(InventoryStatus::Consuming, date(2024, 1, 1));
        item
    }

    fn one_cat_consumption() -> DailyConsumption {
        // 4000g，每日 120g：紅肉 48g、心臟 6g、骨骼 12g
        let cat = Cat::new("c1".to_string(), "咪咪".to_string(), date(2022, 1, 1));
        DailyConsumption::from_cats(&[cat])
    }

    #[test]
    fn test_projection_end_date() {
        let config = PlannerConfig::default();
        let item = consuming_item(InventoryModule::Meat, MeatCategory::Red, 500);

        let projection =
            ConsumptionProjection::project(&item, &one_cat_consumption(), date(2024, 1, 5), &config)
                .unwrap()
                .unwrap();

        // 500 / 48 = 10.42 天，取整 10 天
        assert_eq!(projection.daily_usage, Decimal::from(48));
        assert_eq!(projection.end_date, date(2024, 1, 11));
        assert_eq!(projection.days_remaining, 6);
        assert!(!projection.is_overdue());
        assert!(!projection.is_running_low(&config));
    }

    #[rstest]
    #[case(date(2024, 1, 8), 3, false, true)]
    #[case(date(2024, 1, 11), 0, false, true)]
    #[case(date(2024, 1, 12), -1, true, false)]
    fn test_projection_alerts(
        #[case] today: NaiveDate,
        #[case] remaining: i64,
        #[case] overdue: bool,
        #[case] low: bool,
    ) {
        let config = PlannerConfig::default();
        let item = consuming_item(InventoryModule::Meat, MeatCategory::Red, 500);

        let projection =
            ConsumptionProjection::project(&item, &one_cat_consumption(), today, &config)
                .unwrap()
                .unwrap();

        assert_eq!(projection.days_remaining, remaining);
        assert_eq!(projection.is_overdue(), overdue);
        assert_eq!(projection.is_running_low(&config), low);
    }

    #[test]
    fn test_projection_bone_uses_group_rate() {
        let item = consuming_item(InventoryModule::Bone, MeatCategory::Bone, 120);
        let projection = ConsumptionProjection::project(
            &item,
            &one_cat_consumption(),
            date(2024, 1, 1),
            &PlannerConfig::default(),
        )
        .unwrap()
        .unwrap();

        assert_eq!(projection.daily_usage, Decimal::from(12));
        assert_eq!(projection.end_date, date(2024, 1, 11));
    }

    #[test]
    fn test_projection_without_consumption_uses_sentinel() {
        let item = consuming_item(InventoryModule::Organ, MeatCategory::Heart, 200);
        let projection = ConsumptionProjection::project(
            &item,
            &DailyConsumption::from_cats(&[]),
            date(2024, 1, 1),
            &PlannerConfig::default(),
        )
        .unwrap()
        .unwrap();

        assert_eq!(projection.total_days, Decimal::from(999));
        assert_eq!(projection.days_remaining, 999);
    }

    #[test]
    fn test_projection_skips_other_statuses() {
        let mut item = consuming_item(InventoryModule::Meat, MeatCategory::Red, 500);
        item.transition(InventoryStatus::Consumed, date(2024, 1, 4));

        let projection = ConsumptionProjection::project(
            &item,
            &one_cat_consumption(),
            date(2024, 1, 5),
            &PlannerConfig::default(),
        )
        .unwrap();

        assert!(projection.is_none());
    }
}
