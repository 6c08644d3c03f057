//! 採購計劃

use chrono::NaiveDate;
use rawpaws_calc::supply::days_of_supply;
use rawpaws_calc::DailyConsumption;
use rawpaws_core::quantity::format_fixed;
use rawpaws_core::{
    generate_id, require_name, DietError, InboundType, InventoryModule, MeatCategory,
    PlannerConfig, PurchaseItem, Result,
};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::inventory::{InventoryDraft, InventoryLedger};
use crate::{category_breakdown, require_grams};

/// 新增採購的輸入
#[derive(Debug, Clone, PartialEq)]
pub struct PurchaseDraft {
    pub module: InventoryModule,
    pub category: Option<MeatCategory>,
    pub name: String,
    pub grams: Decimal,
    pub expected_date: Option<NaiveDate>,
}

impl PurchaseDraft {
    pub fn new(module: InventoryModule, name: impl Into<String>, grams: Decimal) -> Self {
        Self {
            module,
            category: None,
            name: name.into(),
            grams,
            expected_date: None,
        }
    }

    /// 建構器模式：設置類別
    pub fn with_category(mut self, category: MeatCategory) -> Self {
        self.category = Some(category);
        self
    }

    /// 建構器模式：設置預計到貨日期
    pub fn with_expected_date(mut self, date: NaiveDate) -> Self {
        self.expected_date = Some(date);
        self
    }
}

/// 待到貨量可支撐的天數
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PurchaseCoverage {
    pub module: InventoryModule,
    pub by_category: Vec<(MeatCategory, Decimal)>,
    pub total_grams: Decimal,
    pub daily_usage: Decimal,
    pub days: Decimal,
    /// 一位小數的天數；無消耗時為整數哨兵值
    pub display: String,
}

/// 採購計劃清單
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PurchasePlanner {
    items: Vec<PurchaseItem>,
}

impl PurchasePlanner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_items(items: Vec<PurchaseItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[PurchaseItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// 新增採購項目（預計到貨日期預設今天）
    pub fn add(&mut self, draft: PurchaseDraft, today: NaiveDate) -> Result<String> {
        let name = require_name("purchase.name", &draft.name)?;
        require_grams(&name, draft.grams)?;

        let item = PurchaseItem::new(
            generate_id(),
            draft.module,
            draft.category.unwrap_or_else(|| draft.module.default_category()),
            name,
            draft.grams,
            draft.expected_date.unwrap_or(today),
        );

        tracing::info!("新增採購：{} {}g，預計 {}", item.name, item.grams, item.expected_date);
        let id = item.id.clone();
        self.items.push(item);
        Ok(id)
    }

    pub fn delete(&mut self, id: &str) -> Result<PurchaseItem> {
        let index = self
            .items
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| DietError::PurchaseNotFound(id.to_string()))?;
        Ok(self.items.remove(index))
    }

    /// 到貨清單：按模組、再按預計到貨日期排序
    pub fn arrival_queue(&self) -> Vec<&PurchaseItem> {
        let mut queue: Vec<&PurchaseItem> = self.items.iter().collect();
        queue.sort_by(|a, b| {
            a.module
                .cmp(&b.module)
                .then_with(|| a.expected_date.cmp(&b.expected_date))
        });
        queue
    }

    /// 確認到貨
    ///
    /// 選中的採購項目轉為今天入庫的庫存（採購計劃入庫），成功後從清單移除。
    /// 找不到的ID略過；回傳新庫存的ID。
    pub fn confirm_arrival(
        &mut self,
        ids: &[String],
        ledger: &mut InventoryLedger,
        today: NaiveDate,
    ) -> Result<Vec<String>> {
        let drafts: Vec<InventoryDraft> = self
            .items
            .iter()
            .filter(|p| ids.contains(&p.id))
            .map(|p| {
                InventoryDraft::new(p.module, p.name.clone(), p.grams)
                    .with_category(p.category)
                    .with_in_stock_date(today)
            })
            .collect();

        if drafts.is_empty() {
            return Ok(Vec::new());
        }

        let inventory_ids = ledger.bulk_add(drafts, InboundType::Purchase, today)?;
        self.items.retain(|p| !ids.contains(&p.id));

        tracing::info!("確認到貨 {} 筆，剩餘採購 {} 筆", inventory_ids.len(), self.items.len());
        Ok(inventory_ids)
    }

    /// 模組內待到貨量可支撐的天數
    pub fn module_coverage(
        &self,
        module: InventoryModule,
        consumption: &DailyConsumption,
        config: &PlannerConfig,
    ) -> PurchaseCoverage {
        let entries: Vec<(MeatCategory, Decimal)> = self
            .items
            .iter()
            .filter(|p| p.module == module)
            .map(|p| (p.category, p.grams))
            .collect();

        let total_grams = entries.iter().map(|(_, g)| *g).sum();
        let daily_usage = consumption.for_module(module);
        let days = days_of_supply(total_grams, daily_usage, config);
        // 無消耗時哨兵值不帶小數
        let display = if daily_usage.is_zero() {
            format_fixed(days, 0)
        } else {
            format_fixed(days, 1)
        };

        PurchaseCoverage {
            module,
            by_category: category_breakdown(module, &entries),
            total_grams,
            daily_usage,
            days,
            display,
        }
    }

    pub fn into_inner(self) -> Vec<PurchaseItem> {
        self.items
    }
}
