//! # RawPaws
//!
//! 家庭生骨肉飲食規劃：貓咪配比、補充劑、分裝、庫存與採購

pub use rawpaws_calc as calc;
pub use rawpaws_core as model;
pub use rawpaws_ledger as ledger;
pub use rawpaws_store as store;

pub use rawpaws_calc::{
    ConsumptionProjection, DailyConsumption, DietCalculator, DietPlan, DietWarning, LifeStage,
    PackagingPlan, RatioBreakdown, RestockAdvice, SupplementDose, SupplyStatus, WarningSeverity,
};
pub use rawpaws_core::{
    Cat, Clock, DietError, DietRatios, DosingMethod, FixedClock, InboundType, InventoryItem,
    InventoryModule, InventoryStatus, MeatCategory, MeatType, PlannerConfig, PurchaseItem,
    Result, Supplement, SupplementUnit, SystemClock,
};
pub use rawpaws_ledger::{
    CatRegistry, InventoryDraft, InventoryFilter, InventoryLedger, InventorySummary, MeatCatalog,
    PurchaseCoverage, PurchaseDraft, PurchasePlanner,
};
pub use rawpaws_store::{FileStore, Household, KeyValueStore, MemoryStore, StoreConfig};
