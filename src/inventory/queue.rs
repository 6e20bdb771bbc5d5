use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::model::FoodItem;
use crate::error::PlannerError;

/// Binary min-heap of food items keyed on expiration date only.
///
/// Items sharing an expiration date come out in no particular order.
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    heap: Vec<FoodItem>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn peek_earliest(&self) -> Option<&FoodItem> {
        self.heap.first()
    }

    pub fn add_item(&mut self, item: FoodItem) {
        self.heap.push(item);
        self.sift_up(self.heap.len() - 1);
    }

    pub fn remove_earliest(&mut self) -> Result<FoodItem, PlannerError> {
        if self.is_empty() {
            return Err(PlannerError::EmptyInventory);
        }
        Ok(self.remove_at(0))
    }

    /// Removes one item equal to `item`. Returns whether anything was removed.
    pub fn remove_specific(&mut self, item: &FoodItem) -> bool {
        match self.heap.iter().position(|candidate| candidate == item) {
            Some(idx) => {
                self.remove_at(idx);
                true
            }
            None => false,
        }
    }

    /// One-shot walk over the items in heap array order.
    ///
    /// Only the first yielded item is guaranteed to be the earliest; the rest
    /// follow the heap layout, not expiration order.
    pub fn snapshot(&self) -> impl Iterator<Item = &FoodItem> + '_ {
        self.heap.iter()
    }

    pub fn contains_name(&self, name: &str) -> bool {
        self.snapshot().any(|item| item.name() == name)
    }

    fn remove_at(&mut self, idx: usize) -> FoodItem {
        let removed = self.heap.swap_remove(idx);
        if idx < self.heap.len() {
            // moved-in tail element may belong above or below its new slot
            let settled = self.sift_down(idx);
            if settled == idx {
                self.sift_up(idx);
            }
        }
        removed
    }

    fn sift_up(&mut self, mut idx: usize) {
        while idx > 0 {
            let parent = (idx - 1) / 2;
            if self.heap[idx].expiration() >= self.heap[parent].expiration() {
                break;
            }
            self.heap.swap(idx, parent);
            idx = parent;
        }
    }

    fn sift_down(&mut self, mut idx: usize) -> usize {
        let len = self.heap.len();
        loop {
            let left = 2 * idx + 1;
            if left >= len {
                return idx;
            }
            let right = left + 1;
            let child = if right < len && self.heap[right].expiration() < self.heap[left].expiration()
            {
                right
            } else {
                left
            };
            if self.heap[idx].expiration() <= self.heap[child].expiration() {
                return idx;
            }
            self.heap.swap(idx, child);
            idx = child;
        }
    }
}

impl FromIterator<FoodItem> for Inventory {
    fn from_iter<I: IntoIterator<Item = FoodItem>>(iter: I) -> Self {
        let mut inventory = Inventory::new();
        for item in iter {
            inventory.add_item(item);
        }
        inventory
    }
}

impl Serialize for Inventory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.snapshot())
    }
}

impl<'de> Deserialize<'de> for Inventory {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let items = Vec::<FoodItem>::deserialize(deserializer)?;
        Ok(items.into_iter().collect())
    }
}
