//! 家庭資料容器
//!
//! 持有五個集合，每次修改後立即把有變動的集合整份寫回儲存。
//! 衍生的計劃、總覽每次查詢時重新計算。

use chrono::NaiveDate;
use rawpaws_calc::{
    DailyConsumption, DietCalculator, DietPlan, PackagingPlan, SupplementDose,
};
use rawpaws_core::meat::default_catalog;
use rawpaws_core::{
    Cat, Clock, DietError, InventoryModule, InventoryStatus, MeatCategory, PlannerConfig, Result,
    Supplement,
};
use rawpaws_ledger::{
    CatRegistry, InventoryDraft, InventoryLedger, InventorySummary, MeatCatalog,
    PurchaseCoverage, PurchaseDraft, PurchasePlanner,
};
use serde::de::DeserializeOwned;

use crate::backend::KeyValueStore;
use crate::config::StoreConfig;
use crate::dirty_tracking::{Collection, DirtyTracker};

/// 應用狀態容器
pub struct Household<S: KeyValueStore> {
    store: S,
    store_config: StoreConfig,
    calculator: DietCalculator,
    clock: Box<dyn Clock>,

    cats: CatRegistry,
    meats: MeatCatalog,
    inventory: InventoryLedger,
    purchases: PurchasePlanner,

    dirty: DirtyTracker,
}

impl<S: KeyValueStore> Household<S> {
    /// 從儲存載入全部集合
    ///
    /// 每個鍵獨立載入：不存在時使用預設值（肉類為預設資料庫，其他為空），
    /// 內容損壞時記錄警告並使用預設值。
    pub fn load(
        store: S,
        store_config: StoreConfig,
        planner: PlannerConfig,
        clock: Box<dyn Clock>,
    ) -> Result<Self> {
        planner.validate()?;

        let cats = load_collection(&store, &store_config, Collection::Cats)?.unwrap_or_default();
        let meats = load_collection(&store, &store_config, Collection::Meats)?
            .unwrap_or_else(default_catalog);
        let items =
            load_collection(&store, &store_config, Collection::Inventory)?.unwrap_or_default();
        let purchases =
            load_collection(&store, &store_config, Collection::Purchases)?.unwrap_or_default();
        let records =
            load_collection(&store, &store_config, Collection::InboundRecords)?.unwrap_or_default();

        let household = Self {
            store,
            store_config,
            calculator: DietCalculator::new(planner),
            clock,
            cats: CatRegistry::from_cats(cats),
            meats: MeatCatalog::from_meats(meats),
            inventory: InventoryLedger::from_parts(items, records),
            purchases: PurchasePlanner::from_items(purchases),
            dirty: DirtyTracker::new(),
        };

        tracing::info!(
            "載入完成：{} 隻貓、{} 種肉類、{} 筆庫存、{} 筆採購",
            household.cats.len(),
            household.meats.meats().len(),
            household.inventory.items().len(),
            household.purchases.len()
        );

        Ok(household)
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    pub fn set_clock(&mut self, clock: Box<dyn Clock>) {
        self.clock = clock;
    }

    pub fn config(&self) -> &PlannerConfig {
        self.calculator.config()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn cats(&self) -> &CatRegistry {
        &self.cats
    }

    pub fn meats(&self) -> &MeatCatalog {
        &self.meats
    }

    pub fn inventory(&self) -> &InventoryLedger {
        &self.inventory
    }

    pub fn purchases(&self) -> &PurchasePlanner {
        &self.purchases
    }

    // ---- 貓咪 ----

    pub fn add_cat(&mut self, cat: Cat) -> Result<String> {
        let id = self.cats.add(cat)?;
        self.commit(&[Collection::Cats])?;
        Ok(id)
    }

    pub fn update_cat(&mut self, cat: Cat) -> Result<()> {
        self.cats.update(cat)?;
        self.commit(&[Collection::Cats])
    }

    /// 刪除貓咪（不連帶清理庫存與採購）
    pub fn delete_cat(&mut self, id: &str) -> Result<Cat> {
        let cat = self.cats.delete(id)?;
        self.commit(&[Collection::Cats])?;
        Ok(cat)
    }

    pub fn add_supplement(&mut self, cat_id: &str, supplement: Supplement) -> Result<String> {
        let id = self.cats.add_supplement(cat_id, supplement)?;
        self.commit(&[Collection::Cats])?;
        Ok(id)
    }

    pub fn update_supplement(&mut self, cat_id: &str, supplement: Supplement) -> Result<()> {
        self.cats.update_supplement(cat_id, supplement)?;
        self.commit(&[Collection::Cats])
    }

    pub fn remove_supplement(&mut self, cat_id: &str, supplement_id: &str) -> Result<Supplement> {
        let supplement = self.cats.remove_supplement(cat_id, supplement_id)?;
        self.commit(&[Collection::Cats])?;
        Ok(supplement)
    }

    // ---- 肉類資料庫 ----

    pub fn add_meat(&mut self, name: &str, category: MeatCategory) -> Result<String> {
        let id = self.meats.add(name, category)?;
        self.commit(&[Collection::Meats])?;
        Ok(id)
    }

    pub fn edit_meat(&mut self, id: &str, name: &str, category: MeatCategory) -> Result<()> {
        self.meats.edit(id, name, category)?;
        self.commit(&[Collection::Meats])
    }

    pub fn delete_meat(&mut self, id: &str) -> Result<()> {
        self.meats.delete(id)?;
        self.commit(&[Collection::Meats])
    }

    /// 依肉類名稱查類別
    pub fn meat_category(&self, name: &str) -> Option<MeatCategory> {
        self.meats.find_by_name(name).map(|m| m.category)
    }

    /// 未指定類別時依肉類資料庫補上，類別須屬於同一模組
    fn catalog_category(&self, module: InventoryModule, name: &str) -> Option<MeatCategory> {
        self.meat_category(name).filter(|c| c.module() == module)
    }

    // ---- 庫存 ----

    pub fn add_inventory(&mut self, mut draft: InventoryDraft) -> Result<String> {
        if draft.category.is_none() {
            draft.category = self.catalog_category(draft.module, &draft.name);
        }
        let today = self.today();
        let id = self.inventory.add_item(draft, today)?;
        self.commit(&[Collection::Inventory, Collection::InboundRecords])?;
        Ok(id)
    }

    /// 批次切換庫存狀態，回傳更新筆數
    pub fn set_inventory_status(
        &mut self,
        ids: &[String],
        status: InventoryStatus,
    ) -> Result<usize> {
        let today = self.today();
        let updated = self.inventory.set_status(ids, status, today);
        if updated > 0 {
            self.commit(&[Collection::Inventory])?;
        }
        Ok(updated)
    }

    pub fn delete_inventory(&mut self, id: &str) -> Result<()> {
        self.inventory.delete(id)?;
        self.commit(&[Collection::Inventory])
    }

    // ---- 採購 ----

    pub fn add_purchase(&mut self, mut draft: PurchaseDraft) -> Result<String> {
        if draft.category.is_none() {
            draft.category = self.catalog_category(draft.module, &draft.name);
        }
        let today = self.today();
        let id = self.purchases.add(draft, today)?;
        self.commit(&[Collection::Purchases])?;
        Ok(id)
    }

    pub fn delete_purchase(&mut self, id: &str) -> Result<()> {
        self.purchases.delete(id)?;
        self.commit(&[Collection::Purchases])
    }

    /// 確認到貨，回傳新庫存的ID
    pub fn confirm_arrival(&mut self, ids: &[String]) -> Result<Vec<String>> {
        let today = self.today();
        let created = self
            .purchases
            .confirm_arrival(ids, &mut self.inventory, today)?;

        if !created.is_empty() {
            self.commit(&[
                Collection::Purchases,
                Collection::Inventory,
                Collection::InboundRecords,
            ])?;
        }
        Ok(created)
    }

    // ---- 查詢 ----

    /// 以目前貓咪清單計算每日消耗
    pub fn consumption(&self) -> DailyConsumption {
        DailyConsumption::from_cats(self.cats.cats())
    }

    pub fn diet_plan(&self, cat_id: &str) -> Result<DietPlan> {
        Ok(self.calculator.plan(self.cat(cat_id)?, self.today()))
    }

    pub fn packaging_plan(&self, cat_id: &str) -> Result<PackagingPlan> {
        Ok(self.calculator.packaging(self.cat(cat_id)?))
    }

    pub fn reference_supplements(&self, cat_id: &str) -> Result<Vec<SupplementDose>> {
        Ok(self
            .calculator
            .reference_supplements(self.cat(cat_id)?, self.today()))
    }

    pub fn inventory_summary(&self) -> Result<InventorySummary> {
        self.inventory
            .summary(&self.consumption(), self.today(), self.config())
    }

    pub fn purchase_coverage(&self, module: InventoryModule) -> PurchaseCoverage {
        self.purchases
            .module_coverage(module, &self.consumption(), self.config())
    }

    fn cat(&self, id: &str) -> Result<&Cat> {
        self.cats
            .get(id)
            .ok_or_else(|| DietError::CatNotFound(id.to_string()))
    }

    // ---- 持久化 ----

    fn commit(&mut self, changed: &[Collection]) -> Result<()> {
        for &collection in changed {
            self.dirty.mark_dirty(collection);
        }
        self.flush()
    }

    /// 將所有髒集合寫回儲存
    pub fn flush(&mut self) -> Result<()> {
        for collection in self.dirty.dirty_collections() {
            let json = self.serialize(collection)?;
            let key = self.store_config.key_for(collection);
            self.store.set(&key, &json)?;
            self.dirty.mark_clean(collection);
            tracing::debug!("已寫入 {}", key);
        }
        Ok(())
    }

    fn serialize(&self, collection: Collection) -> Result<String> {
        let json = match collection {
            Collection::Cats => serde_json::to_string(self.cats.cats()),
            Collection::Meats => serde_json::to_string(self.meats.meats()),
            Collection::Inventory => serde_json::to_string(self.inventory.items()),
            Collection::Purchases => serde_json::to_string(self.purchases.items()),
            Collection::InboundRecords => serde_json::to_string(self.inventory.records()),
        };
        json.map_err(|e| DietError::Serialization(e.to_string()))
    }
}

/// 載入單一集合；鍵不存在或內容損壞時回傳 `None`
fn load_collection<S, T>(
    store: &S,
    config: &StoreConfig,
    collection: Collection,
) -> Result<Option<Vec<T>>>
where
    S: KeyValueStore,
    T: DeserializeOwned,
{
    let key = config.key_for(collection);
    let Some(raw) = store.get(&key)? else {
        tracing::debug!("{} 不存在，使用預設值", key);
        return Ok(None);
    };

    match serde_json::from_str(&raw) {
        Ok(values) => Ok(Some(values)),
        Err(e) => {
            tracing::warn!("{} 內容損壞（{}），使用預設值", key, e);
            Ok(None)
        }
    }
}
