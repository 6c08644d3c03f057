//! 分裝與備貨計劃

use rawpaws_core::quantity::{format_fixed, percent_of, round_to, round_whole};
use rawpaws_core::{Cat, MeatCategory, PlannerConfig, SupplementUnit};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::ratio::RatioEngine;
use crate::supplement::SupplementDose;

/// 單一類別的一週分裝建議
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BagPlan {
    pub category: MeatCategory,

    pub percent: Decimal,

    /// 一週所需克數（取整）
    pub grams_needed: Decimal,

    /// 約合袋數（一位小數，各類別相加不一定等於總餐數）
    pub bag_count: Decimal,

    /// 若平均分裝，每袋克數
    pub even_grams_per_bag: Decimal,
}

/// 補充劑備貨量
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SupplementStock {
    pub name: String,
    pub unit: SupplementUnit,
    pub daily: Decimal,
    /// 備貨期總量
    pub period_total: Decimal,
    /// 顯示文字（克數滿 1000 以公斤顯示）
    pub display: String,
}

/// 分裝計劃
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PackagingPlan {
    /// 每日食量（未取整）
    pub daily_total: Decimal,

    /// 每袋（每餐）份量（未取整）
    pub meal_size: Decimal,

    /// 一週總量
    pub weekly_total: Decimal,

    /// 總袋數
    pub total_meals: u32,

    pub bags: Vec<BagPlan>,

    pub supplements: Vec<SupplementStock>,
}

/// 分裝計劃計算器
pub struct PackagingPlanner;

impl PackagingPlanner {
    /// 計算一隻貓的分裝與補充劑備貨計劃
    pub fn plan(cat: &Cat, doses: &[SupplementDose], config: &PlannerConfig) -> PackagingPlan {
        let daily_total = RatioEngine::daily_intake_grams(cat);
        let meal_size = daily_total / config.meals_per_day_decimal();
        let weekly_total = daily_total * Decimal::from(config.food_days);

        let bags = MeatCategory::ALL
            .iter()
            .map(|&c| (c, cat.diet_ratios.percent_for(c)))
            .filter(|(_, pct)| *pct > Decimal::ZERO)
            .map(|(category, percent)| Self::bag_plan(category, percent, weekly_total, meal_size))
            .collect();

        let supplements = doses
            .iter()
            .map(|dose| Self::supplement_stock(dose, config.supplement_days))
            .collect();

        PackagingPlan {
            daily_total,
            meal_size,
            weekly_total,
            total_meals: config.total_meals(),
            bags,
            supplements,
        }
    }

    fn bag_plan(
        category: MeatCategory,
        percent: Decimal,
        weekly_total: Decimal,
        meal_size: Decimal,
    ) -> BagPlan {
        let needed = percent_of(weekly_total, percent);
        let bag_count = if meal_size.is_zero() {
            Decimal::ZERO
        } else {
            round_to(needed / meal_size, 1)
        };
        let grams_needed = round_whole(needed);
        let even_grams_per_bag = round_whole(grams_needed / bag_count.ceil().max(Decimal::ONE));

        BagPlan {
            category,
            percent,
            grams_needed,
            bag_count,
            even_grams_per_bag,
        }
    }

    fn supplement_stock(dose: &SupplementDose, days: u32) -> SupplementStock {
        let period_total = dose.daily * Decimal::from(days);
        SupplementStock {
            name: dose.name.clone(),
            unit: dose.unit,
            daily: dose.daily,
            period_total,
            display: format_period_total(period_total, dose.unit),
        }
    }
}

/// 備貨總量顯示：克數滿 1000 轉為公斤（兩位小數），否則原單位一位小數
pub fn format_period_total(total: Decimal, unit: SupplementUnit) -> String {
    if unit == SupplementUnit::Gram && total >= Decimal::ONE_THOUSAND {
        format!("{} kg", format_fixed(total / Decimal::ONE_THOUSAND, 2))
    } else {
        format!("{} {}", format_fixed(total, 1), unit.symbol())
    }
}
