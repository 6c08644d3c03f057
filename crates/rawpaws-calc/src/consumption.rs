//! 全部貓咪的每日消耗量
//!
//! 每次查詢時從當前貓咪清單重新計算，不做快取。

use std::collections::HashMap;

use rawpaws_core::quantity::percent_of;
use rawpaws_core::{Cat, InventoryModule, MeatCategory};
use rust_decimal::Decimal;

use crate::ratio::RatioEngine;

/// 每日消耗量（克，未取整）
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DailyConsumption {
    per_category: HashMap<MeatCategory, Decimal>,
}

impl DailyConsumption {
    /// 彙總所有貓咪：`Σ 體重 * 食量% * 類別%`
    pub fn from_cats(cats: &[Cat]) -> Self {
        let mut per_category: HashMap<MeatCategory, Decimal> = HashMap::new();

        for cat in cats {
            let daily_total = RatioEngine::daily_intake_grams(cat);
            for category in MeatCategory::ALL {
                let grams = percent_of(daily_total, cat.diet_ratios.percent_for(category));
                *per_category.entry(category).or_insert(Decimal::ZERO) += grams;
            }
        }

        tracing::debug!("每日消耗量（{} 隻貓）: {:?}", cats.len(), per_category);

        Self { per_category }
    }

    /// 指定類別的每日消耗
    pub fn for_category(&self, category: MeatCategory) -> Decimal {
        self.per_category
            .get(&category)
            .copied()
            .unwrap_or(Decimal::ZERO)
    }

    /// 模組合計（肌肉肉 = 紅 + 白，內臟 = 心臟 + 其他內臟，骨骼）
    pub fn for_module(&self, module: InventoryModule) -> Decimal {
        module
            .categories()
            .into_iter()
            .map(|c| self.for_category(c))
            .sum()
    }

    /// 單一消耗中批次適用的每日消耗
    ///
    /// 肌肉肉與內臟按批次自己的類別計算，骨骼模組一律使用骨骼合計。
    pub fn for_item(&self, module: InventoryModule, category: MeatCategory) -> Decimal {
        match module {
            InventoryModule::Bone => self.for_module(InventoryModule::Bone),
            InventoryModule::Meat | InventoryModule::Organ => self.for_category(category),
        }
    }

    /// 是否完全沒有消耗（沒有貓或配比全為零）
    pub fn is_idle(&self) -> bool {
        self.per_category.values().all(|v| v.is_zero())
    }
}
