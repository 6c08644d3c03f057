//! 肉類資料庫

use rawpaws_core::meat::default_catalog;
use rawpaws_core::{generate_id, require_name, DietError, MeatCategory, MeatType, Result};

/// 肉類資料庫（名稱 → 類別查詢）
#[derive(Debug, Clone, PartialEq)]
pub struct MeatCatalog {
    meats: Vec<MeatType>,
}

impl MeatCatalog {
    /// 預設資料庫（11 種系統肉類）
    pub fn seeded() -> Self {
        Self {
            meats: default_catalog(),
        }
    }

    pub fn from_meats(meats: Vec<MeatType>) -> Self {
        Self { meats }
    }

    pub fn meats(&self) -> &[MeatType] {
        &self.meats
    }

    /// 新增自訂肉類
    pub fn add(&mut self, name: &str, category: MeatCategory) -> Result<String> {
        let name = require_name("meat.name", name)?;
        let meat = MeatType::new(generate_id(), name, category);

        tracing::info!("新增肉類：{}（{}）", meat.name, category.label());
        let id = meat.id.clone();
        self.meats.push(meat);
        Ok(id)
    }

    /// 修改名稱與類別
    pub fn edit(&mut self, id: &str, name: &str, category: MeatCategory) -> Result<()> {
        let name = require_name("meat.name", name)?;
        let meat = self
            .meats
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or_else(|| DietError::MeatNotFound(id.to_string()))?;

        meat.name = name;
        meat.category = category;
        Ok(())
    }

    /// 刪除肉類，已引用的庫存與採購不受影響
    pub fn delete(&mut self, id: &str) -> Result<MeatType> {
        let index = self
            .meats
            .iter()
            .position(|m| m.id == id)
            .ok_or_else(|| DietError::MeatNotFound(id.to_string()))?;

        let meat = self.meats.remove(index);
        tracing::info!("刪除肉類：{}", meat.name);
        Ok(meat)
    }

    pub fn by_category(&self, category: MeatCategory) -> Vec<&MeatType> {
        self.meats.iter().filter(|m| m.category == category).collect()
    }

    pub fn find_by_name(&self, name: &str) -> Option<&MeatType> {
        let name = name.trim();
        self.meats.iter().find(|m| m.name == name)
    }

    pub fn into_inner(self) -> Vec<MeatType> {
        self.meats
    }
}

impl Default for MeatCatalog {
    fn default() -> Self {
        Self::seeded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_catalog() {
        let catalog = MeatCatalog::seeded();

        assert_eq!(catalog.meats().len(), 11);
        assert_eq!(catalog.by_category(MeatCategory::Red).len(), 4);
        assert_eq!(catalog.find_by_name("鸡肉").unwrap().category, MeatCategory::White);
    }

    #[test]
    fn test_add_custom_meat() {
        let mut catalog = MeatCatalog::seeded();
        let id = catalog.add("  鹿肉 ", MeatCategory::Red).unwrap();

        let meat = catalog.find_by_name("鹿肉").unwrap();
        assert_eq!(meat.id, id);
        assert!(!meat.is_system);
        assert_eq!(catalog.by_category(MeatCategory::Red).len(), 5);
    }

    #[test]
    fn test_add_requires_name() {
        let mut catalog = MeatCatalog::seeded();
        assert!(matches!(
            catalog.add("", MeatCategory::White),
            Err(DietError::EmptyName(_))
        ));
    }

    #[test]
    fn test_edit_and_delete() {
        let mut catalog = MeatCatalog::seeded();

        catalog.edit("m4", "兔肉", MeatCategory::White).unwrap();
        assert_eq!(catalog.find_by_name("兔肉").unwrap().category, MeatCategory::White);
        assert!(catalog.edit("m4", " ", MeatCategory::White).is_err());

        let removed = catalog.delete("m1").unwrap();
        assert_eq!(removed.name, "牛肉");
        assert!(catalog.find_by_name("牛肉").is_none());
        assert!(matches!(catalog.delete("m1"), Err(DietError::MeatNotFound(_))));
    }
}
