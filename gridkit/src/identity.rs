//! Row identity resolution.
//!
//! Every row gets a [`RowKey`] that joins row data, selection membership and
//! hover tracking across renders. Precedence: an explicit key callback, then
//! the row's `id`, then the row's `key`, then its position.
//!
//! The positional fallback is fragile: when rows are reordered or filtered, a
//! position-keyed selection or hover follows the position, not the record.
//! Rows that can be reordered should expose an `id` or a key callback.

use std::fmt;

/// Stable identifier for a row.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RowKey {
    Int(i64),
    Str(String),
    /// Positional fallback when the row exposes no identity.
    Index(usize),
}

impl fmt::Display for RowKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(id) => write!(f, "{id}"),
            Self::Str(id) => f.write_str(id),
            Self::Index(index) => write!(f, "#{index}"),
        }
    }
}

impl From<i64> for RowKey {
    fn from(id: i64) -> Self {
        Self::Int(id)
    }
}

impl From<i32> for RowKey {
    fn from(id: i32) -> Self {
        Self::Int(i64::from(id))
    }
}

impl From<u32> for RowKey {
    fn from(id: u32) -> Self {
        Self::Int(i64::from(id))
    }
}

impl From<&str> for RowKey {
    fn from(id: &str) -> Self {
        Self::Str(id.to_string())
    }
}

impl From<String> for RowKey {
    fn from(id: String) -> Self {
        Self::Str(id)
    }
}

/// Trait for records displayed by the grid.
///
/// Both methods are optional; a row that implements neither is keyed by its
/// position.
///
/// # Example
///
/// ```
/// use gridkit::{GridRow, RowKey};
///
/// struct User {
///     id: i64,
///     name: String,
/// }
///
/// impl GridRow for User {
///     fn id(&self) -> Option<RowKey> {
///         Some(RowKey::Int(self.id))
///     }
/// }
/// ```
pub trait GridRow {
    /// Primary identity of the row.
    fn id(&self) -> Option<RowKey> {
        None
    }

    /// Secondary identity, used when `id` is absent.
    fn key(&self) -> Option<RowKey> {
        None
    }
}

/// Host callback producing a key for `(row, index)`.
pub type RowKeyFn<'a, R> = Box<dyn Fn(&R, usize) -> RowKey + 'a>;

/// Resolves the [`RowKey`] of each row.
pub struct KeyResolver<'a, R> {
    row_key: Option<RowKeyFn<'a, R>>,
}

impl<R> Default for KeyResolver<'_, R> {
    fn default() -> Self {
        Self { row_key: None }
    }
}

impl<R> fmt::Debug for KeyResolver<'_, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyResolver")
            .field("row_key", &self.row_key.is_some())
            .finish()
    }
}

impl<'a, R: GridRow> KeyResolver<'a, R> {
    /// Resolver using the row's own identity.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolver using an explicit key callback.
    pub fn with_row_key(row_key: impl Fn(&R, usize) -> RowKey + 'a) -> Self {
        Self {
            row_key: Some(Box::new(row_key)),
        }
    }

    /// Resolve the key of one row.
    pub fn resolve(&self, row: &R, index: usize) -> RowKey {
        if let Some(row_key) = &self.row_key {
            return row_key(row, index);
        }
        row.id()
            .or_else(|| row.key())
            .unwrap_or(RowKey::Index(index))
    }

    /// Build the row items for a dataset, in dataset order.
    pub fn items<'r>(&self, rows: &'r [R]) -> Vec<RowItem<'r, R>> {
        let items: Vec<_> = rows
            .iter()
            .enumerate()
            .map(|(index, row)| RowItem {
                row,
                key: self.resolve(row, index),
                index,
            })
            .collect();
        log::debug!("Keyed {} rows", items.len());
        items
    }
}

/// A row paired with its key and position.
#[derive(Debug)]
pub struct RowItem<'r, R> {
    pub row: &'r R,
    pub key: RowKey,
    pub index: usize,
}

impl<R> Clone for RowItem<'_, R> {
    fn clone(&self) -> Self {
        Self {
            row: self.row,
            key: self.key.clone(),
            index: self.index,
        }
    }
}
