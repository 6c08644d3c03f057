//! 生骨肉配比計算

use rawpaws_core::quantity::{percent_of, round_whole};
use rawpaws_core::{Cat, DietRatios, MeatCategory, PlannerConfig};
use rust_decimal::Decimal;
use serde::Serialize;

/// 單一類別每日份量
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryPortion {
    pub category: MeatCategory,
    /// 百分比
    pub percent: Decimal,
    /// 每日克數（取整）
    pub daily_grams: Decimal,
}

/// 配比計算結果
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RatioBreakdown {
    /// 每日總量（克，取整）
    pub daily_total: Decimal,

    /// 每餐份量（克，取整）
    pub per_meal: Decimal,

    /// 五個類別百分比總和
    pub percentage_sum: Decimal,

    /// 各類別每日份量
    pub portions: Vec<CategoryPortion>,
}

impl RatioBreakdown {
    /// 百分比總和是否剛好為 100
    pub fn is_balanced(&self) -> bool {
        self.percentage_sum == Decimal::ONE_HUNDRED
    }

    /// 指定類別的每日克數
    pub fn grams_for(&self, category: MeatCategory) -> Decimal {
        self.portions
            .iter()
            .find(|p| p.category == category)
            .map(|p| p.daily_grams)
            .unwrap_or(Decimal::ZERO)
    }
}

/// 配比計算器
///
/// 不做任何校驗：負數或超過 100 的百分比照常計算。
pub struct RatioEngine;

impl RatioEngine {
    /// 未取整的每日食量：`體重 * 食量百分比 / 100`
    pub fn daily_intake_grams(cat: &Cat) -> Decimal {
        percent_of(cat.weight, cat.diet_ratios.daily_intake_percent)
    }

    /// 每日總量（取整）
    pub fn daily_total_grams(cat: &Cat) -> Decimal {
        round_whole(Self::daily_intake_grams(cat))
    }

    /// 每餐份量（取整）
    pub fn per_meal_grams(daily_total: Decimal, config: &PlannerConfig) -> Decimal {
        round_whole(daily_total / config.meals_per_day_decimal())
    }

    /// 類別每日克數（取整）
    pub fn grams_for_category(daily_total: Decimal, percent: Decimal) -> Decimal {
        round_whole(percent_of(daily_total, percent))
    }

    /// 每日肌肉肉量（紅肉 + 白肉），不取整
    pub fn daily_muscle_meat(daily_total: Decimal, ratios: &DietRatios) -> Decimal {
        percent_of(daily_total, ratios.muscle_percent())
    }

    /// 計算整份配比
    pub fn breakdown(cat: &Cat, config: &PlannerConfig) -> RatioBreakdown {
        let ratios = &cat.diet_ratios;
        let daily_total = Self::daily_total_grams(cat);

        let portions = MeatCategory::ALL
            .iter()
            .map(|&category| {
                let percent = ratios.percent_for(category);
                CategoryPortion {
                    category,
                    percent,
                    daily_grams: Self::grams_for_category(daily_total, percent),
                }
            })
            .collect();

        RatioBreakdown {
            daily_total,
            per_meal: Self::per_meal_grams(daily_total, config),
            percentage_sum: ratios.percentage_sum(),
            portions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use proptest::prelude::*;
    use rstest::rstest;

    fn cat_with(weight: i64, intake: Decimal) -> Cat {
        let mut cat = Cat::new(
            "c1".to_string(),
            "咪咪".to_string(),
            NaiveDate::from_ymd_opt(2022, 1, 1).unwrap(),
        )
        .with_weight(Decimal::from(weight));
        cat.diet_ratios.daily_intake_percent = intake;
        cat
    }

    #[test]
    fn test_breakdown_default_ratios() {
        let cat = cat_with(4000, Decimal::from(3));
        let breakdown = RatioEngine::breakdown(&cat, &PlannerConfig::default());

        assert_eq!(breakdown.daily_total, Decimal::from(120));
        assert_eq!(breakdown.per_meal, Decimal::from(40));
        assert!(breakdown.is_balanced());
        assert_eq!(breakdown.grams_for(MeatCategory::Red), Decimal::from(48));
        assert_eq!(breakdown.grams_for(MeatCategory::White), Decimal::from(48));
        assert_eq!(breakdown.grams_for(MeatCategory::Heart), Decimal::from(6));
        assert_eq!(breakdown.grams_for(MeatCategory::Organ), Decimal::from(6));
        assert_eq!(breakdown.grams_for(MeatCategory::Bone), Decimal::from(12));
    }

    #[rstest]
    #[case(3333, Decimal::new(25, 1), 83, 28)] // 83.325 -> 83, 27.67 -> 28
    #[case(4500, Decimal::from(3), 135, 45)]
    #[case(3900, Decimal::new(35, 1), 137, 46)] // 136.5 -> 137
    #[case(0, Decimal::from(3), 0, 0)]
    fn test_daily_total_and_per_meal(
        #[case] weight: i64,
        #[case] intake: Decimal,
        #[case] daily: i64,
        #[case] per_meal: i64,
    ) {
        let cat = cat_with(weight, intake);
        let daily_total = RatioEngine::daily_total_grams(&cat);

        assert_eq!(daily_total, Decimal::from(daily));
        assert_eq!(
            RatioEngine::per_meal_grams(daily_total, &PlannerConfig::default()),
            Decimal::from(per_meal)
        );
    }

    #[test]
    fn test_unbalanced_ratios_still_computed() {
        let mut cat = cat_with(4000, Decimal::from(3));
        cat.diet_ratios.red_meat_percent = Decimal::from(150);
        cat.diet_ratios.bone_percent = Decimal::from(-10);

        let breakdown = RatioEngine::breakdown(&cat, &PlannerConfig::default());

        assert!(!breakdown.is_balanced());
        assert_eq!(breakdown.percentage_sum, Decimal::from(190));
        assert_eq!(breakdown.grams_for(MeatCategory::Red), Decimal::from(180));
        assert_eq!(breakdown.grams_for(MeatCategory::Bone), Decimal::from(-12));
    }

    #[test]
    fn test_daily_muscle_meat() {
        let ratios = DietRatios::default();
        assert_eq!(
            RatioEngine::daily_muscle_meat(Decimal::from(120), &ratios),
            Decimal::from(96)
        );
    }

    proptest! {
        #[test]
        fn prop_daily_total_monotonic(
            weight in 0i64..20_000,
            extra in 0i64..2_000,
            intake_tenths in 0i64..80,
        ) {
            let intake = Decimal::new(intake_tenths, 1);
            let lighter = RatioEngine::daily_total_grams(&cat_with(weight, intake));
            let heavier = RatioEngine::daily_total_grams(&cat_with(weight + extra, intake));
            let hungrier = RatioEngine::daily_total_grams(&cat_with(weight, intake + Decimal::ONE));

            prop_assert!(lighter <= heavier);
            prop_assert!(lighter <= hungrier);
        }

        #[test]
        fn prop_balanced_portions_approximate_total(
            weight in 1_000i64..10_000,
            red in 0u32..=100,
            white in 0u32..=100,
            heart in 0u32..=100,
            organ in 0u32..=100,
        ) {
            // 前四項按比例縮放到總和不超過 100，骨骼補足
            let raw = [red, white, heart, organ];
            let total: u32 = raw.iter().sum();
            let scaled: Vec<u32> = raw
                .iter()
                .map(|v| if total > 100 { v * 100 / total } else { *v })
                .collect();
            let bone = 100 - scaled.iter().sum::<u32>();

            let mut cat = cat_with(weight, Decimal::from(3));
            cat.diet_ratios.red_meat_percent = Decimal::from(scaled[0]);
            cat.diet_ratios.white_meat_percent = Decimal::from(scaled[1]);
            cat.diet_ratios.heart_percent = Decimal::from(scaled[2]);
            cat.diet_ratios.organ_percent = Decimal::from(scaled[3]);
            cat.diet_ratios.bone_percent = Decimal::from(bone);

            let breakdown = RatioEngine::breakdown(&cat, &PlannerConfig::default());
            let portion_sum: Decimal = breakdown.portions.iter().map(|p| p.daily_grams).sum();

            prop_assert!(breakdown.is_balanced());
            prop_assert!((portion_sum - breakdown.daily_total).abs() <= Decimal::from(2));
        }
    }
}
