//! 肉類與食材類別模型

use serde::{Deserialize, Serialize};

use crate::inventory::InventoryModule;

/// 食材類別
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeatCategory {
    /// 紅肉
    #[serde(alias = "红肉")]
    Red,
    /// 白肉
    #[serde(alias = "白肉")]
    White,
    /// 心臟
    #[serde(alias = "心脏")]
    Heart,
    /// 非心臟內臟
    #[serde(alias = "非心脏内脏")]
    Organ,
    /// 骨骼
    #[serde(alias = "骨骼")]
    Bone,
}

impl MeatCategory {
    /// 全部類別（配比表順序）
    pub const ALL: [MeatCategory; 5] = [
        MeatCategory::Red,
        MeatCategory::White,
        MeatCategory::Heart,
        MeatCategory::Organ,
        MeatCategory::Bone,
    ];

    /// 所屬的庫存模組
    pub fn module(self) -> InventoryModule {
        match self {
            MeatCategory::Red | MeatCategory::White => InventoryModule::Meat,
            MeatCategory::Heart | MeatCategory::Organ => InventoryModule::Organ,
            MeatCategory::Bone => InventoryModule::Bone,
        }
    }

    /// 是否為肌肉肉
    pub fn is_muscle(self) -> bool {
        self.module() == InventoryModule::Meat
    }

    /// 顯示名稱
    pub fn label(self) -> &'static str {
        match self {
            MeatCategory::Red => "红肉",
            MeatCategory::White => "白肉",
            MeatCategory::Heart => "心脏",
            MeatCategory::Organ => "非心脏内脏",
            MeatCategory::Bone => "骨骼",
        }
    }
}

/// 肉類資料
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeatType {
    /// 肉類ID
    pub id: String,

    /// 名稱
    pub name: String,

    /// 類別（紅肉／白肉）
    pub category: MeatCategory,

    /// 是否為系統預設
    #[serde(default)]
    pub is_system: bool,
}

impl MeatType {
    /// 創建使用者自訂肉類
    pub fn new(id: String, name: String, category: MeatCategory) -> Self {
        Self {
            id,
            name,
            category,
            is_system: false,
        }
    }

    fn system(id: &str, name: &str, category: MeatCategory) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            category,
            is_system: true,
        }
    }
}

/// 預設肉類資料庫（4 種紅肉、7 種白肉）
pub fn default_catalog() -> Vec<MeatType> {
    vec![
        MeatType::system("m1", "牛肉", MeatCategory::Red),
        MeatType::system("m2", "猪肉", MeatCategory::Red),
        MeatType::system("m3", "羊肉", MeatCategory::Red),
        MeatType::system("m4", "兔肉(红)", MeatCategory::Red),
        MeatType::system("m5", "鸡肉", MeatCategory::White),
        MeatType::system("m6", "鸭肉", MeatCategory::White),
        MeatType::system("m7", "鹅肉", MeatCategory::White),
        MeatType::system("m8", "兔肉(白)", MeatCategory::White),
        MeatType::system("m9", "鹌鹑", MeatCategory::White),
        MeatType::system("m10", "鸵鸟肉", MeatCategory::White),
        MeatType::system("m11", "火鸡肉", MeatCategory::White),
    ]
}
