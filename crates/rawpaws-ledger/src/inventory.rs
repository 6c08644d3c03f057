//! 庫存批次與入庫記錄
//!
//! 庫存增加時一定同時寫入入庫記錄；刪除庫存不影響已有的入庫記錄。

use chrono::NaiveDate;
use rawpaws_calc::{ConsumptionProjection, DailyConsumption, DietWarning, SupplyStatus};
use rawpaws_core::{
    generate_id, require_name, DietError, InboundRecord, InboundType, InventoryItem,
    InventoryModule, InventoryStatus, MeatCategory, PlannerConfig, Result,
};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::{category_breakdown, require_grams};

/// 新增庫存的輸入
#[derive(Debug, Clone, PartialEq)]
pub struct InventoryDraft {
    pub module: InventoryModule,
    pub category: Option<MeatCategory>,
    pub name: String,
    pub grams: Decimal,
    pub status: InventoryStatus,
    pub in_stock_date: Option<NaiveDate>,
}

impl InventoryDraft {
    /// 創建新的庫存輸入（預設已入庫、今天入庫）
    pub fn new(module: InventoryModule, name: impl Into<String>, grams: Decimal) -> Self {
        Self {
            module,
            category: None,
            name: name.into(),
            grams,
            status: InventoryStatus::InStock,
            in_stock_date: None,
        }
    }

    /// 建構器模式：設置類別
    pub fn with_category(mut self, category: MeatCategory) -> Self {
        self.category = Some(category);
        self
    }

    /// 建構器模式：設置狀態
    pub fn with_status(mut self, status: InventoryStatus) -> Self {
        self.status = status;
        self
    }

    /// 建構器模式：設置入庫日期
    pub fn with_in_stock_date(mut self, date: NaiveDate) -> Self {
        self.in_stock_date = Some(date);
        self
    }

    fn validate(&self) -> Result<String> {
        let name = require_name("inventory.name", &self.name)?;
        require_grams(&name, self.grams)?;
        Ok(name)
    }

    fn into_item(self, name: String, today: NaiveDate) -> InventoryItem {
        let mut item = InventoryItem::new(
            generate_id(),
            self.module,
            self.category.unwrap_or_else(|| self.module.default_category()),
            name,
            self.grams,
            self.in_stock_date.unwrap_or(today),
        );
        if self.status != InventoryStatus::InStock {
            item.transition(self.status, today);
        }
        item
    }
}

/// 庫存篩選條件
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InventoryFilter {
    pub module: Option<InventoryModule>,
    /// 名稱包含的文字
    pub name: Option<String>,
    pub status: Option<InventoryStatus>,
}

impl InventoryFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_module(mut self, module: InventoryModule) -> Self {
        self.module = Some(module);
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_status(mut self, status: InventoryStatus) -> Self {
        self.status = Some(status);
        self
    }

    fn matches(&self, item: &InventoryItem) -> bool {
        self.module.map_or(true, |m| item.module == m)
            && self.status.map_or(true, |s| item.status == s)
            && self
                .name
                .as_deref()
                .map_or(true, |n| item.name.contains(n.trim()))
    }
}

/// 模組的已入庫存量
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModuleStock {
    pub module: InventoryModule,
    pub total_grams: Decimal,
    pub item_count: usize,
    /// 各類別克數
    pub by_category: Vec<(MeatCategory, Decimal)>,
}

/// 庫存總覽
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InventorySummary {
    /// 各模組可用天數（只計已入庫）
    pub modules: Vec<SupplyStatus>,

    /// 消耗中批次的預計吃完日期
    pub projections: Vec<ConsumptionProjection>,

    /// 即將吃完與已超期提醒
    pub warnings: Vec<DietWarning>,
}

impl InventorySummary {
    pub fn module(&self, module: InventoryModule) -> Option<&SupplyStatus> {
        self.modules.iter().find(|s| s.module == module)
    }
}

/// 庫存帳本
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InventoryLedger {
    items: Vec<InventoryItem>,
    /// 最新的在前
    records: Vec<InboundRecord>,
}

impl InventoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// 由已儲存的庫存與入庫記錄建立
    pub fn from_parts(items: Vec<InventoryItem>, records: Vec<InboundRecord>) -> Self {
        Self { items, records }
    }

    pub fn items(&self) -> &[InventoryItem] {
        &self.items
    }

    pub fn records(&self) -> &[InboundRecord] {
        &self.records
    }

    pub fn get(&self, id: &str) -> Option<&InventoryItem> {
        self.items.iter().find(|i| i.id == id)
    }

    /// 直接新增一筆庫存（庫存直調）
    pub fn add_item(&mut self, draft: InventoryDraft, today: NaiveDate) -> Result<String> {
        let name = draft.validate()?;
        let item = draft.into_item(name, today);
        let record = InboundRecord::for_item(generate_id(), &item, InboundType::Direct);

        tracing::info!("新增庫存：{} {}g", item.name, item.grams);
        let id = item.id.clone();
        self.items.push(item);
        self.records.insert(0, record);
        Ok(id)
    }

    /// 批次新增庫存與對應的入庫記錄
    ///
    /// 先校驗全部輸入，任何一筆不合法則不做任何修改。
    pub fn bulk_add(
        &mut self,
        drafts: Vec<InventoryDraft>,
        inbound_type: InboundType,
        today: NaiveDate,
    ) -> Result<Vec<String>> {
        let names = drafts
            .iter()
            .map(InventoryDraft::validate)
            .collect::<Result<Vec<_>>>()?;

        let mut new_records = Vec::with_capacity(drafts.len());
        let mut ids = Vec::with_capacity(drafts.len());

        for (draft, name) in drafts.into_iter().zip(names) {
            let item = draft.into_item(name, today);
            new_records.push(InboundRecord::for_item(generate_id(), &item, inbound_type));
            ids.push(item.id.clone());
            self.items.push(item);
        }

        tracing::info!("入庫 {} 筆（{:?}）", ids.len(), inbound_type);
        self.records.splice(0..0, new_records);

        Ok(ids)
    }

    /// 批次切換狀態，回傳實際更新的筆數（找不到的ID略過）
    pub fn set_status(
        &mut self,
        ids: &[String],
        status: InventoryStatus,
        today: NaiveDate,
    ) -> usize {
        let mut updated = 0;
        for item in self.items.iter_mut().filter(|i| ids.contains(&i.id)) {
            item.transition(status, today);
            updated += 1;
        }

        tracing::info!("{} 筆庫存切換為 {:?}", updated, status);
        updated
    }

    /// 切換單筆狀態
    pub fn transition(
        &mut self,
        id: &str,
        status: InventoryStatus,
        today: NaiveDate,
    ) -> Result<()> {
        let item = self
            .items
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or_else(|| DietError::InventoryItemNotFound(id.to_string()))?;
        item.transition(status, today);
        Ok(())
    }

    /// 刪除庫存批次（入庫記錄保留）
    pub fn delete(&mut self, id: &str) -> Result<InventoryItem> {
        let index = self
            .items
            .iter()
            .position(|i| i.id == id)
            .ok_or_else(|| DietError::InventoryItemNotFound(id.to_string()))?;

        let item = self.items.remove(index);
        tracing::info!("刪除庫存：{}", item.name);
        Ok(item)
    }

    pub fn filter(&self, filter: &InventoryFilter) -> Vec<&InventoryItem> {
        self.items.iter().filter(|i| filter.matches(i)).collect()
    }

    /// 模組內已入庫的存量統計
    pub fn module_stock(&self, module: InventoryModule) -> ModuleStock {
        let entries: Vec<(MeatCategory, Decimal)> = self
            .items
            .iter()
            .filter(|i| i.module == module && i.is_in_stock())
            .map(|i| (i.category, i.grams))
            .collect();

        ModuleStock {
            module,
            total_grams: entries.iter().map(|(_, g)| *g).sum(),
            item_count: entries.len(),
            by_category: category_breakdown(module, &entries),
        }
    }

    /// 入庫記錄（日期新的在前）
    pub fn records_newest_first(&self) -> Vec<&InboundRecord> {
        let mut records: Vec<&InboundRecord> = self.records.iter().collect();
        records.sort_by(|a, b| b.date.cmp(&a.date));
        records
    }

    /// 庫存總覽：各模組可用天數、補貨建議與消耗中批次提醒
    pub fn summary(
        &self,
        consumption: &DailyConsumption,
        today: NaiveDate,
        config: &PlannerConfig,
    ) -> Result<InventorySummary> {
        let modules = InventoryModule::ALL
            .iter()
            .map(|&module| {
                let stock = self.module_stock(module);
                SupplyStatus::assess(
                    module,
                    stock.total_grams,
                    consumption.for_module(module),
                    config,
                )
            })
            .collect();

        let mut projections = Vec::new();
        let mut warnings = Vec::new();

        for item in self.items.iter().filter(|i| i.is_consuming()) {
            let projection = match ConsumptionProjection::project(item, consumption, today, config)
            {
                Ok(Some(projection)) => projection,
                Ok(None) => continue,
                Err(e) => {
                    // 單筆推算失敗不影響整份總覽
                    tracing::warn!("{} 無法推算吃完日期: {}", item.name, e);
                    warnings.push(DietWarning::warning(
                        item.name.clone(),
                        format!("無法推算吃完日期: {}", e),
                    ));
                    continue;
                }
            };

            if projection.is_overdue() {
                warnings.push(DietWarning::error(
                    projection.name.clone(),
                    format!("已超過預計吃完日期 {}", projection.end_date),
                ));
            } else if projection.is_running_low(config) {
                warnings.push(DietWarning::warning(
                    projection.name.clone(),
                    format!("預計 {} 天後吃完", projection.days_remaining),
                ));
            }
            projections.push(projection);
        }

        tracing::debug!("庫存總覽：{} 筆消耗中，{} 項提醒", projections.len(), warnings.len());

        Ok(InventorySummary {
            modules,
            projections,
            warnings,
        })
    }

    pub fn into_parts(self) -> (Vec<InventoryItem>, Vec<InboundRecord>) {
        (self.items, self.records)
    }
}
