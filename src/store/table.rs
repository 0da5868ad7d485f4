use std::collections::BTreeMap;

use crate::entities::Record;
use crate::error::{AppError, AppResult};

/// Keyed storage for one entity type with its own id sequence.
///
/// Ids start at 1 and are never reused. Rows are kept in a `BTreeMap`, so
/// iteration follows id order, which equals insertion order.
#[derive(Debug, Clone)]
pub struct Table<T> {
    rows: BTreeMap<i32, T>,
    next_id: i32,
}

impl<T: Record> Default for Table<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Record> Table<T> {
    pub fn new() -> Self {
        Self {
            rows: BTreeMap::new(),
            next_id: 1,
        }
    }

    /// Assign the next id, build the record with it and store it.
    pub fn insert_with(&mut self, build: impl FnOnce(i32) -> T) -> T {
        let id = self.next_id;
        self.next_id += 1;

        let record = build(id);
        debug_assert_eq!(record.id(), id);
        self.rows.insert(id, record.clone());
        record
    }

    pub fn get(&self, id: i32) -> Option<&T> {
        self.rows.get(&id)
    }

    pub fn get_mut(&mut self, id: i32) -> Option<&mut T> {
        self.rows.get_mut(&id)
    }

    /// Like [`Table::get`] but fails with `NotFound` for an absent id.
    pub fn require(&self, id: i32) -> AppResult<&T> {
        self.rows.get(&id).ok_or_else(|| AppError::not_found(T::ENTITY))
    }

    /// Apply `change` to a copy of the row and store it only if `change`
    /// succeeds. Fields the closure does not touch are retained.
    pub fn update(
        &mut self,
        id: i32,
        change: impl FnOnce(&mut T) -> AppResult<()>,
    ) -> AppResult<T> {
        let mut record = self.require(id)?.clone();
        change(&mut record)?;
        self.rows.insert(id, record.clone());
        Ok(record)
    }

    pub fn find(&self, predicate: impl Fn(&T) -> bool) -> Option<&T> {
        self.rows.values().find(|r| predicate(r))
    }

    pub fn list(&self) -> Vec<T> {
        self.rows.values().cloned().collect()
    }

    pub fn list_where(&self, predicate: impl Fn(&T) -> bool) -> Vec<T> {
        self.rows.values().filter(|r| predicate(r)).cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
