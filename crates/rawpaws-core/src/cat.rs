//! 貓咪檔案模型

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::inventory::InventoryModule;
use crate::meat::MeatCategory;
use crate::supplement::Supplement;

/// 性別
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    /// 公
    #[serde(alias = "公")]
    Male,
    /// 母
    #[serde(alias = "母")]
    Female,
}

/// 生骨肉配比
///
/// 五個類別百分比預期總和為 100，但不強制，只作提醒。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DietRatios {
    /// 每日食量（體重百分比，通常 2-4）
    pub daily_intake_percent: Decimal,

    /// 紅肉
    pub red_meat_percent: Decimal,

    /// 白肉
    pub white_meat_percent: Decimal,

    /// 心臟
    pub heart_percent: Decimal,

    /// 非心臟內臟
    pub organ_percent: Decimal,

    /// 骨骼
    pub bone_percent: Decimal,
}

impl Default for DietRatios {
    fn default() -> Self {
        Self {
            daily_intake_percent: Decimal::from(3),
            red_meat_percent: Decimal::from(40),
            white_meat_percent: Decimal::from(40),
            heart_percent: Decimal::from(5),
            organ_percent: Decimal::from(5),
            bone_percent: Decimal::from(10),
        }
    }
}

impl DietRatios {
    /// 指定類別的百分比
    pub fn percent_for(&self, category: MeatCategory) -> Decimal {
        match category {
            MeatCategory::Red => self.red_meat_percent,
            MeatCategory::White => self.white_meat_percent,
            MeatCategory::Heart => self.heart_percent,
            MeatCategory::Organ => self.organ_percent,
            MeatCategory::Bone => self.bone_percent,
        }
    }

    /// 設置指定類別的百分比
    pub fn set_percent(&mut self, category: MeatCategory, percent: Decimal) {
        let slot = match category {
            MeatCategory::Red => &mut self.red_meat_percent,
            MeatCategory::White => &mut self.white_meat_percent,
            MeatCategory::Heart => &mut self.heart_percent,
            MeatCategory::Organ => &mut self.organ_percent,
            MeatCategory::Bone => &mut self.bone_percent,
        };
        *slot = percent;
    }

    /// 庫存模組（肌肉肉／內臟／骨骼）合計百分比
    pub fn percent_for_module(&self, module: InventoryModule) -> Decimal {
        MeatCategory::ALL
            .iter()
            .filter(|c| c.module() == module)
            .map(|c| self.percent_for(*c))
            .sum()
    }

    /// 肌肉肉百分比（紅肉 + 白肉）
    pub fn muscle_percent(&self) -> Decimal {
        self.red_meat_percent + self.white_meat_percent
    }

    /// 五個類別百分比總和
    pub fn percentage_sum(&self) -> Decimal {
        MeatCategory::ALL.iter().map(|c| self.percent_for(*c)).sum()
    }
}

/// 貓咪檔案
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cat {
    /// 貓咪ID
    pub id: String,

    /// 名字
    pub name: String,

    /// 生日
    pub birth_date: NaiveDate,

    /// 性別
    pub gender: Gender,

    /// 是否絕育
    pub is_neutered: bool,

    /// 體重（克）
    pub weight: Decimal,

    /// 品種
    pub breed: String,

    /// 頭像
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    /// 生骨肉配比
    pub diet_ratios: DietRatios,

    /// 自訂補充劑（舊資料沒有此欄位）
    #[serde(default)]
    pub supplements: Vec<Supplement>,
}

impl Cat {
    /// 創建新的貓咪檔案（預設 4000g、已絕育、中華田園貓）
    pub fn new(id: String, name: String, birth_date: NaiveDate) -> Self {
        Self {
            id,
            name,
            birth_date,
            gender: Gender::Male,
            is_neutered: true,
            weight: Decimal::from(4000),
            breed: "中华田园猫".to_string(),
            image: None,
            diet_ratios: DietRatios::default(),
            supplements: Vec::new(),
        }
    }

    /// 建構器模式：設置體重
    pub fn with_weight(mut self, weight: Decimal) -> Self {
        self.weight = weight;
        self
    }

    /// 建構器模式：設置性別
    pub fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = gender;
        self
    }

    /// 建構器模式：設置絕育狀態
    pub fn with_neutered(mut self, is_neutered: bool) -> Self {
        self.is_neutered = is_neutered;
        self
    }

    /// 建構器模式：設置品種
    pub fn with_breed(mut self, breed: String) -> Self {
        self.breed = breed;
        self
    }

    /// 建構器模式：設置配比
    pub fn with_diet_ratios(mut self, ratios: DietRatios) -> Self {
        self.diet_ratios = ratios;
        self
    }

    /// 建構器模式：設置補充劑
    pub fn with_supplements(mut self, supplements: Vec<Supplement>) -> Self {
        self.supplements = supplements;
        self
    }
}
