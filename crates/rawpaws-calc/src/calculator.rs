//! 飲食計劃主計算器

use chrono::NaiveDate;
use rawpaws_core::{Cat, PlannerConfig};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::life_stage::{age_label, LifeStage};
use crate::packaging::{PackagingPlan, PackagingPlanner};
use crate::ratio::{RatioBreakdown, RatioEngine};
use crate::supplement::{SupplementDose, SupplementEngine};
use crate::DietWarning;

/// 單隻貓的每日飲食計劃
#[derive(Debug, Clone, Serialize)]
pub struct DietPlan {
    pub cat_id: String,
    pub cat_name: String,

    pub life_stage: LifeStage,

    /// 年齡標籤
    pub age: String,

    /// 配比結果
    pub ratios: RatioBreakdown,

    /// 每日肌肉肉量
    pub daily_muscle_meat: Decimal,

    /// 自訂補充劑劑量
    pub supplements: Vec<SupplementDose>,

    pub warnings: Vec<DietWarning>,
}

impl DietPlan {
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// 飲食計算器
pub struct DietCalculator {
    config: PlannerConfig,
}

impl DietCalculator {
    /// 創建新的飲食計算器
    pub fn new(config: PlannerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// 計算每日飲食計劃
    pub fn plan(&self, cat: &Cat, today: NaiveDate) -> DietPlan {
        tracing::info!("計算飲食計劃：{}（{}g）", cat.name, cat.weight);

        let ratios = RatioEngine::breakdown(cat, &self.config);
        tracing::debug!(
            "每日總量 {}g，每餐 {}g，比例合計 {}%",
            ratios.daily_total,
            ratios.per_meal,
            ratios.percentage_sum
        );

        let mut warnings = Vec::new();
        if !ratios.is_balanced() {
            tracing::warn!("{} 的配比合計為 {}%，不等於 100%", cat.name, ratios.percentage_sum);
            warnings.push(DietWarning::warning(
                cat.name.clone(),
                format!("配比合計為 {}%，建議調整為 100%", ratios.percentage_sum),
            ));
        }

        let daily_muscle_meat =
            RatioEngine::daily_muscle_meat(ratios.daily_total, &cat.diet_ratios);
        let supplements = SupplementEngine::doses_for_cat(cat, ratios.daily_total);

        DietPlan {
            cat_id: cat.id.clone(),
            cat_name: cat.name.clone(),
            life_stage: LifeStage::classify(cat.birth_date, today),
            age: age_label(cat.birth_date, today),
            ratios,
            daily_muscle_meat,
            supplements,
            warnings,
        }
    }

    /// 固定七項補充劑參考表（只供顯示，不寫回貓咪檔案）
    pub fn reference_supplements(&self, cat: &Cat, today: NaiveDate) -> Vec<SupplementDose> {
        let daily_total = RatioEngine::daily_total_grams(cat);
        let muscle = RatioEngine::daily_muscle_meat(daily_total, &cat.diet_ratios);
        SupplementEngine::legacy_schedule(muscle, LifeStage::classify(cat.birth_date, today))
    }

    /// 一週分裝與補充劑備貨計劃
    pub fn packaging(&self, cat: &Cat) -> PackagingPlan {
        let daily_total = RatioEngine::daily_total_grams(cat);
        let doses = SupplementEngine::doses_for_cat(cat, daily_total);
        let plan = PackagingPlanner::plan(cat, &doses, &self.config);

        tracing::info!(
            "{} 的分裝計劃：{} 袋，每袋約 {}g",
            cat.name,
            plan.total_meals,
            plan.meal_size.round()
        );

        plan
    }
}

impl Default for DietCalculator {
    fn default() -> Self {
        Self::new(PlannerConfig::default())
    }
}
