//! 補充劑劑量計算
//!
//! 以貓咪自訂的補充劑清單為準；固定七項規則表只作為參考資料，
//! 不與自訂清單混用在同一隻貓上。

use rawpaws_core::quantity::{format_fixed, percent_of};
use rawpaws_core::{Cat, DosingMethod, Supplement, SupplementUnit};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::life_stage::LifeStage;

/// 每日劑量
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SupplementDose {
    /// 來源補充劑ID（參考表沒有）
    pub supplement_id: Option<String>,

    pub name: String,

    /// 規則說明
    pub rule: String,

    /// 每日劑量
    pub daily: Decimal,

    pub unit: SupplementUnit,
}

impl SupplementDose {
    fn reference(name: &str, rule: &str, daily: Decimal, unit: SupplementUnit) -> Self {
        Self {
            supplement_id: None,
            name: name.to_string(),
            rule: rule.to_string(),
            daily,
            unit,
        }
    }

    /// 顯示用劑量：小於 0.01 顯示為 `< 0.01`，否則保留兩位小數
    pub fn display_daily(&self) -> String {
        if self.daily < Decimal::new(1, 2) {
            format!("< 0.01 {}", self.unit.symbol())
        } else {
            format!("{} {}", format_fixed(self.daily, 2), self.unit.symbol())
        }
    }
}

/// 補充劑計算器
pub struct SupplementEngine;

impl SupplementEngine {
    /// 單一自訂補充劑的每日劑量
    ///
    /// 固定量直接使用設定值；按比例時為 `每日總量 * 百分比 / 100` 克。
    pub fn dose_for(supplement: &Supplement, daily_total: Decimal) -> SupplementDose {
        let (daily, rule) = match supplement.method {
            DosingMethod::FixedDaily => (
                supplement.value,
                format!("每日固定 {} {}", supplement.value, supplement.unit.symbol()),
            ),
            DosingMethod::ByFoodRatio => (
                percent_of(daily_total, supplement.value),
                format!("每日食量的 {}%", supplement.value),
            ),
        };

        SupplementDose {
            supplement_id: Some(supplement.id.clone()),
            name: supplement.name.clone(),
            rule,
            daily,
            unit: supplement.dose_unit(),
        }
    }

    /// 貓咪所有自訂補充劑的每日劑量
    pub fn doses_for_cat(cat: &Cat, daily_total: Decimal) -> Vec<SupplementDose> {
        cat.supplements
            .iter()
            .map(|s| Self::dose_for(s, daily_total))
            .collect()
    }

    /// 固定七項參考規則（依肌肉肉量與生命階段）
    pub fn legacy_schedule(daily_muscle_meat: Decimal, stage: LifeStage) -> Vec<SupplementDose> {
        let mm = daily_muscle_meat;
        let adult = stage.is_adult();

        let iodine = if adult {
            mm / Decimal::from(700)
        } else {
            mm / Decimal::from(700) * Decimal::from(2)
        };
        let manganese = if adult {
            mm / Decimal::from(9000)
        } else {
            mm / Decimal::from(6000)
        };

        vec![
            SupplementDose::reference(
                "蛋壳粉",
                "每100g肌肉肉需要0.6g",
                mm / Decimal::ONE_HUNDRED * Decimal::new(6, 1),
                SupplementUnit::Gram,
            ),
            SupplementDose::reference(
                "复合维生素B",
                "两天一片",
                Decimal::new(5, 1),
                SupplementUnit::Pill,
            ),
            SupplementDose::reference(
                "维生素E",
                "一周一片",
                Decimal::ONE / Decimal::from(7),
                SupplementUnit::Pill,
            ),
            SupplementDose::reference(
                "碘 (180片版)",
                if adult {
                    "成猫: 每700g肌肉肉1片"
                } else {
                    "幼猫: 每700g肌肉肉2片"
                },
                iodine,
                SupplementUnit::Pill,
            ),
            SupplementDose::reference(
                "锰 (10mg版)",
                if adult {
                    "成猫: 每9000g肌肉肉1片"
                } else {
                    "幼猫: 每6000g肌肉肉1片"
                },
                manganese,
                SupplementUnit::Pill,
            ),
            SupplementDose::reference(
                "牛磺酸",
                "每1000g肌肉肉需要0.5g",
                mm / Decimal::ONE_THOUSAND * Decimal::new(5, 1),
                SupplementUnit::Gram,
            ),
            SupplementDose::reference(
                "鱼油",
                "每周两颗",
                Decimal::from(2) / Decimal::from(7),
                SupplementUnit::Pump,
            ),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rawpaws_core::quantity::round_to;

    fn find<'a>(doses: &'a [SupplementDose], name: &str) -> &'a SupplementDose {
        doses.iter().find(|d| d.name == name).unwrap()
    }

    #[test]
    fn test_user_defined_doses() {
        let fixed = Supplement::fixed_daily(
            "s1".to_string(),
            "维生素B".to_string(),
            SupplementUnit::Pill,
            Decimal::new(5, 1),
        );
        let ratio =
            Supplement::by_food_ratio("s2".to_string(), "蛋壳粉".to_string(), Decimal::new(5, 1));

        let fixed_dose = SupplementEngine::dose_for(&fixed, Decimal::from(120));
        let ratio_dose = SupplementEngine::dose_for(&ratio, Decimal::from(120));

        assert_eq!(fixed_dose.daily, Decimal::new(5, 1));
        assert_eq!(fixed_dose.unit, SupplementUnit::Pill);
        assert_eq!(fixed_dose.supplement_id.as_deref(), Some("s1"));
        // 120g * 0.5% = 0.6g
        assert_eq!(ratio_dose.daily, Decimal::new(6, 1));
        assert_eq!(ratio_dose.unit, SupplementUnit::Gram);
    }

    #[test]
    fn test_legacy_schedule_adult() {
        // 每日 120g，肌肉肉 80% = 96g
        let doses = SupplementEngine::legacy_schedule(Decimal::from(96), LifeStage::Adult);

        assert_eq!(doses.len(), 7);
        assert_eq!(find(&doses, "蛋壳粉").daily, Decimal::new(576, 3));
        assert_eq!(find(&doses, "复合维生素B").daily, Decimal::new(5, 1));
        assert_eq!(round_to(find(&doses, "维生素E").daily, 4), Decimal::new(1429, 4));
        assert_eq!(round_to(find(&doses, "碘 (180片版)").daily, 4), Decimal::new(1371, 4));
        assert_eq!(round_to(find(&doses, "锰 (10mg版)").daily, 5), Decimal::new(1067, 5));
        assert_eq!(find(&doses, "牛磺酸").daily, Decimal::new(48, 3));
        assert_eq!(round_to(find(&doses, "鱼油").daily, 4), Decimal::new(2857, 4));
        assert!(doses.iter().all(|d| d.supplement_id.is_none()));
    }

    #[test]
    fn test_legacy_schedule_kitten() {
        let mm = Decimal::from(96);
        let adult = SupplementEngine::legacy_schedule(mm, LifeStage::Adult);
        let kitten = SupplementEngine::legacy_schedule(mm, LifeStage::Kitten);

        let iodine = "碘 (180片版)";
        assert_eq!(find(&kitten, iodine).daily, find(&adult, iodine).daily * Decimal::from(2));
        assert_eq!(find(&kitten, "锰 (10mg版)").daily, Decimal::new(16, 3));
        assert!(find(&kitten, iodine).rule.starts_with("幼猫"));
    }

    #[test]
    fn test_display_daily() {
        let doses = SupplementEngine::legacy_schedule(Decimal::from(96), LifeStage::Adult);

        assert_eq!(find(&doses, "锰 (10mg版)").display_daily(), "0.01 片");
        assert_eq!(find(&doses, "复合维生素B").display_daily(), "0.50 片");

        let small = SupplementEngine::legacy_schedule(Decimal::from(60), LifeStage::Adult);
        assert_eq!(find(&small, "锰 (10mg版)").display_daily(), "< 0.01 片");
        assert_eq!(find(&doses, "蛋壳粉").display_daily(), "0.58 g");
    }
}
