//! Wall interaction parameters, one entry per particle type

use wall_physics::{Result, WallError, WallParams};

/// Sparse table of [`WallParams`] indexed by particle type
#[derive(Clone, Debug)]
pub struct WallParamTable<T> {
    entries: Vec<Option<WallParams<T>>>,
}

impl<T> Default for WallParamTable<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<T> WallParamTable<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set (or replace) the parameters for `type_id`
    pub fn set(&mut self, type_id: u32, params: WallParams<T>) {
        let index = type_id as usize;
        if index >= self.entries.len() {
            self.entries.resize_with(index + 1, || None);
        }
        self.entries[index] = Some(params);
    }

    pub fn get(&self, type_id: u32) -> Result<&WallParams<T>> {
        self.entries
            .get(type_id as usize)
            .and_then(Option::as_ref)
            .ok_or(WallError::MissingParameters(type_id))
    }

    /// Number of types with parameters set
    pub fn len(&self) -> usize {
        self.entries.iter().filter(|e| e.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
