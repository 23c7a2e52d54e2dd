//! Result storage for the calculator session
//!
//! Holds the values computed during the session in insertion order, up to a
//! fixed capacity. The store is append-only: once full, further values are
//! rejected and existing entries are left untouched.

use crate::error::{CalcError, Result};

/// Number of results kept by a default store
pub const DEFAULT_CAPACITY: usize = 100;

/// Bounded, append-only sequence of results
#[derive(Debug, Clone)]
pub struct ResultStore {
    values: Vec<f64>,
    capacity: usize,
}

/// What the store has to show
#[derive(Debug, Clone, PartialEq)]
pub enum Listing {
    /// Nothing stored yet
    Empty,
    /// Stored values paired with their 1-based position
    Entries(Vec<(usize, f64)>),
}

impl ResultStore {
    /// Create a store holding up to `DEFAULT_CAPACITY` results
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create a store holding up to `capacity` results
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            values: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a result, failing with `StoreFull` once capacity is reached
    pub fn append(&mut self, value: f64) -> Result<()> {
        if self.values.len() >= self.capacity {
            return Err(CalcError::StoreFull {
                capacity: self.capacity,
            });
        }
        self.values.push(value);
        Ok(())
    }

    /// List stored results with their 1-based index
    pub fn list(&self) -> Listing {
        if self.values.is_empty() {
            return Listing::Empty;
        }
        Listing::Entries(
            self.values
                .iter()
                .enumerate()
                .map(|(i, &value)| (i + 1, value))
                .collect(),
        )
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for ResultStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_store_listing() {
        let store = ResultStore::new();
        assert!(store.is_empty());
        assert_eq!(store.capacity(), DEFAULT_CAPACITY);
        assert_eq!(store.list(), Listing::Empty);
    }

    #[test]
    fn test_listing_is_one_based_in_order() {
        let mut store = ResultStore::new();
        store.append(3.5).unwrap();
        store.append(-2.0).unwrap();

        assert_eq!(store.list(), Listing::Entries(vec![(1, 3.5), (2, -2.0)]));
    }

    #[test]
    fn test_store_full() {
        let mut store = ResultStore::new();
        for i in 0..100 {
            store.append(i as f64).unwrap();
        }

        let result = store.append(100.0);
        assert!(matches!(result, Err(CalcError::StoreFull { capacity: 100 })));

        // Existing entries are untouched
        assert_eq!(store.len(), 100);
        let expected: Vec<f64> = (0..100).map(|i| i as f64).collect();
        assert_eq!(store.values(), expected.as_slice());
    }

    #[test]
    fn test_custom_capacity() {
        let mut store = ResultStore::with_capacity(1);
        store.append(1.0).unwrap();
        assert!(store.append(2.0).is_err());
        assert_eq!(store.values(), &[1.0]);
    }

    // Property-Based Tests

    #[test]
    fn prop_store_never_exceeds_capacity() {
        fn property(values: Vec<f64>, capacity: u8) -> bool {
            let capacity = usize::from(capacity);
            let mut store = ResultStore::with_capacity(capacity);
            let mut accepted = 0;
            for &value in &values {
                if store.append(value).is_ok() {
                    accepted += 1;
                }
            }
            store.len() == accepted && accepted == values.len().min(capacity)
        }

        let mut qc = quickcheck::QuickCheck::new().tests(50);
        qc.quickcheck(property as fn(Vec<f64>, u8) -> bool);
    }
}
