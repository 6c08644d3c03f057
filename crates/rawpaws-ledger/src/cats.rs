//! 貓咪檔案
//!
//! 刪除貓咪不會連帶清理庫存、採購或入庫記錄。

use rawpaws_core::{generate_id, require_name, Cat, DietError, Result, Supplement};

/// 貓咪清單
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatRegistry {
    cats: Vec<Cat>,
}

impl CatRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// 由已儲存的清單建立
    pub fn from_cats(cats: Vec<Cat>) -> Self {
        Self { cats }
    }

    pub fn cats(&self) -> &[Cat] {
        &self.cats
    }

    pub fn len(&self) -> usize {
        self.cats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cats.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Cat> {
        self.cats.iter().find(|c| c.id == id)
    }

    /// 新增貓咪，產生新ID並回傳
    pub fn add(&mut self, mut cat: Cat) -> Result<String> {
        cat.name = require_name("cat.name", &cat.name)?;
        cat.id = generate_id();

        tracing::info!("新增貓咪：{}（{}）", cat.name, cat.id);
        let id = cat.id.clone();
        self.cats.push(cat);
        Ok(id)
    }

    /// 以ID原地更新貓咪檔案
    pub fn update(&mut self, mut cat: Cat) -> Result<()> {
        cat.name = require_name("cat.name", &cat.name)?;
        let slot = self.get_mut(&cat.id)?;

        tracing::info!("更新貓咪：{}", cat.name);
        *slot = cat;
        Ok(())
    }

    pub fn delete(&mut self, id: &str) -> Result<Cat> {
        let index = self
            .cats
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(|| DietError::CatNotFound(id.to_string()))?;

        let cat = self.cats.remove(index);
        tracing::info!("刪除貓咪：{}", cat.name);
        Ok(cat)
    }

    /// 為貓咪新增補充劑
    pub fn add_supplement(&mut self, cat_id: &str, mut supplement: Supplement) -> Result<String> {
        supplement.name = require_name("supplement.name", &supplement.name)?;
        supplement.id = generate_id();

        let cat = self.get_mut(cat_id)?;
        tracing::debug!("{} 新增補充劑 {}", cat.name, supplement.name);
        let id = supplement.id.clone();
        cat.supplements.push(supplement);
        Ok(id)
    }

    /// 更新補充劑設定（以補充劑ID比對）
    pub fn update_supplement(&mut self, cat_id: &str, mut supplement: Supplement) -> Result<()> {
        supplement.name = require_name("supplement.name", &supplement.name)?;

        let cat = self.get_mut(cat_id)?;
        let slot = cat
            .supplements
            .iter_mut()
            .find(|s| s.id == supplement.id)
            .ok_or_else(|| DietError::SupplementNotFound(supplement.id.clone()))?;
        *slot = supplement;
        Ok(())
    }

    pub fn remove_supplement(&mut self, cat_id: &str, supplement_id: &str) -> Result<Supplement> {
        let cat = self.get_mut(cat_id)?;
        let index = cat
            .supplements
            .iter()
            .position(|s| s.id == supplement_id)
            .ok_or_else(|| DietError::SupplementNotFound(supplement_id.to_string()))?;
        Ok(cat.supplements.remove(index))
    }

    fn get_mut(&mut self, id: &str) -> Result<&mut Cat> {
        self.cats
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| DietError::CatNotFound(id.to_string()))
    }

    pub fn into_inner(self) -> Vec<Cat> {
        self.cats
    }
}
