//! 髒標記追蹤

use std::collections::HashSet;

/// 持久化的集合
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Cats,
    Meats,
    Inventory,
    Purchases,
    InboundRecords,
}

impl Collection {
    /// 全部集合（寫入順序）
    pub const ALL: [Collection; 5] = [
        Collection::Cats,
        Collection::Meats,
        Collection::Inventory,
        Collection::Purchases,
        Collection::InboundRecords,
    ];

    /// 儲存鍵名（不含前綴）
    pub fn key(self) -> &'static str {
        match self {
            Collection::Cats => "cats",
            Collection::Meats => "meats",
            Collection::Inventory => "inventory",
            Collection::Purchases => "purchases",
            Collection::InboundRecords => "inboundRecords",
        }
    }
}

/// 髒標記追蹤器
#[derive(Debug, Default)]
pub struct DirtyTracker {
    dirty: HashSet<Collection>,
}

impl DirtyTracker {
    /// 創建新的追蹤器
    pub fn new() -> Self {
        Self::default()
    }

    /// 標記集合為髒
    pub fn mark_dirty(&mut self, collection: Collection) {
        self.dirty.insert(collection);
    }

    pub fn is_dirty(&self, collection: Collection) -> bool {
        self.dirty.contains(&collection)
    }

    pub fn is_clean(&self) -> bool {
        self.dirty.is_empty()
    }

    /// 標記為已寫入
    pub fn mark_clean(&mut self, collection: Collection) {
        self.dirty.remove(&collection);
    }

    /// 所有髒集合（固定順序）
    pub fn dirty_collections(&self) -> Vec<Collection> {
        Collection::ALL
            .iter()
            .copied()
            .filter(|c| self.dirty.contains(c))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mark_and_clean() {
        let mut tracker = DirtyTracker::new();
        assert!(tracker.is_clean());

        tracker.mark_dirty(Collection::InboundRecords);
        tracker.mark_dirty(Collection::Inventory);
        tracker.mark_dirty(Collection::Inventory);

        assert_eq!(
            tracker.dirty_collections(),
            vec![Collection::Inventory, Collection::InboundRecords]
        );

        tracker.mark_clean(Collection::Inventory);
        assert!(!tracker.is_dirty(Collection::Inventory));
        assert!(tracker.is_dirty(Collection::InboundRecords));
    }
}
