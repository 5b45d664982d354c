//! Sizing policy for `HashTable`.

use crate::error::TableError;

/// Bucket count used when zero is requested, and the floor a shrink never
/// goes below.
pub const DEFAULT_CAPACITY: usize = 101;

/// Grow before inserting once `size / capacity` reaches this.
pub const GROW_THRESHOLD: f64 = 0.75;

/// Shrink after deleting once `size / capacity` drops below this.
pub const SHRINK_THRESHOLD: f64 = 0.25;

/// Resize policy. `Default` gives the constants above.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TableConfig {
    pub min_capacity: usize,
    pub grow_threshold: f64,
    pub shrink_threshold: f64,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            min_capacity: DEFAULT_CAPACITY,
            grow_threshold: GROW_THRESHOLD,
            shrink_threshold: SHRINK_THRESHOLD,
        }
    }
}

impl TableConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Floor capacity; zero means `DEFAULT_CAPACITY`.
    pub fn with_min_capacity(mut self, min_capacity: usize) -> Self {
        self.min_capacity = min_capacity;
        self
    }

    pub fn with_grow_threshold(mut self, threshold: f64) -> Self {
        self.grow_threshold = threshold;
        self
    }

    pub fn with_shrink_threshold(mut self, threshold: f64) -> Self {
        self.shrink_threshold = threshold;
        self
    }

    /// Checks the thresholds and resolves a zero floor to the default.
    ///
    /// Both thresholds must be finite, the grow threshold must lie in
    /// `(0, 1]` and the shrink threshold in `[0, grow)`.
    pub fn validate(self) -> Result<Self, TableError> {
        let grow = self.grow_threshold;
        let shrink = self.shrink_threshold;
        if !grow.is_finite() || !shrink.is_finite() {
            return Err(TableError::InvalidInput);
        }
        if grow <= 0.0 || grow > 1.0 || shrink < 0.0 || shrink >= grow {
            return Err(TableError::InvalidInput);
        }
        let min_capacity = if self.min_capacity == 0 {
            DEFAULT_CAPACITY
        } else {
            self.min_capacity
        };
        Ok(Self {
            min_capacity,
            ..self
        })
    }
}
