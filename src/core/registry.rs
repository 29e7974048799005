use crate::domain::model::Boat;
use crate::utils::error::{MarinaError, Result};
use std::cmp::Ordering;

/// Most boats a registry holds unless configured otherwise.
pub const DEFAULT_CAPACITY: usize = 120;

/// Case-insensitive lexicographic comparison of two boat names.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}

/// Boats kept sorted by case-insensitive name after every insertion.
#[derive(Debug, Clone)]
pub struct Registry {
    boats: Vec<Boat>,
    capacity: usize,
}

impl Registry {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// `capacity` is a limit only; storage grows as boats are inserted.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            boats: Vec::new(),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.boats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boats.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.boats.len() >= self.capacity
    }

    /// Appends the boat and re-sorts. Duplicate names are accepted.
    pub fn insert(&mut self, boat: Boat) -> Result<()> {
        if self.is_full() {
            return Err(MarinaError::CapacityExceeded {
                capacity: self.capacity,
            });
        }

        tracing::debug!("Inserting boat '{}'", boat.name());
        self.boats.push(boat);
        self.boats.sort_by(|a, b| compare_names(a.name(), b.name()));
        Ok(())
    }

    /// First boat in sorted order whose name matches ignoring case.
    pub fn find(&self, name: &str) -> Option<&Boat> {
        self.position(name).map(|idx| &self.boats[idx])
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Boat> {
        let idx = self.position(name)?;
        Some(&mut self.boats[idx])
    }

    /// Removes the first match, shifting the rest down in order.
    pub fn remove(&mut self, name: &str) -> Result<Boat> {
        let idx = self.position(name).ok_or_else(|| MarinaError::NotFound {
            name: name.to_string(),
        })?;
        let boat = self.boats.remove(idx);
        tracing::debug!("Removed boat '{}'", boat.name());
        Ok(boat)
    }

    /// Boats in current sort order.
    pub fn list(&self) -> &[Boat] {
        &self.boats
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Boat> {
        self.boats.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> std::slice::IterMut<'_, Boat> {
        self.boats.iter_mut()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.boats
            .iter()
            .position(|boat| compare_names(boat.name(), name) == Ordering::Equal)
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a Registry {
    type Item = &'a Boat;
    type IntoIter = std::slice::Iter<'a, Boat>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
