//! # RawPaws Calculation Engine
//!
//! 生骨肉配比、補充劑、分裝與庫存可用天數的計算引擎

pub mod calculator;
pub mod consumption;
pub mod life_stage;
pub mod packaging;
pub mod ratio;
pub mod supplement;
pub mod supply;

// Re-export 主要類型
pub use calculator::{DietCalculator, DietPlan};
pub use consumption::DailyConsumption;
pub use life_stage::LifeStage;
pub use packaging::{BagPlan, PackagingPlan, PackagingPlanner, SupplementStock};
pub use ratio::{CategoryPortion, RatioBreakdown, RatioEngine};
pub use supplement::{SupplementDose, SupplementEngine};
pub use supply::{ConsumptionProjection, RestockAdvice, SupplyStatus};

use serde::Serialize;

/// 計算警告（提醒性質，不阻止計算）
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DietWarning {
    /// 相關對象（貓咪名字、庫存名稱等）
    pub subject: String,
    pub message: String,
    pub severity: WarningSeverity,
}

impl DietWarning {
    pub fn new(subject: String, message: String, severity: WarningSeverity) -> Self {
        Self {
            subject,
            message,
            severity,
        }
    }

    pub fn info(subject: String, message: String) -> Self {
        Self::new(subject, message, WarningSeverity::Info)
    }

    pub fn warning(subject: String, message: String) -> Self {
        Self::new(subject, message, WarningSeverity::Warning)
    }

    pub fn error(subject: String, message: String) -> Self {
        Self::new(subject, message, WarningSeverity::Error)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum WarningSeverity {
    Info,
    Warning,
    Error,
}
