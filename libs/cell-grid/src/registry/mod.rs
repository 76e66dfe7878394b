//! # Pattern Registry
//!
//! Ordered table of named generators. Order is the UI order and defines
//! what a numeric index means.
//!
//! ## Selection Rules
//!
//! | Input | Rule |
//! |-------|------|
//! | Index present | converted (invalid → 0), then clamped or wrapped |
//! | Name present | trimmed, lowercased, unknown → `"square"` |
//! | Neither | `"square"` |
//!
//! When a custom table has no `"square"` entry, the fallback is entry 0.

use crate::{
    error::{Result, TilingError},
    generators,
    geometry::Cell,
    params::{GridParams, IndexValue},
};
use config::constants::DEFAULT_PATTERN;
use tracing::debug;

/// Signature shared by every tessellation generator.
pub type GeneratorFn = fn(&GridParams) -> Vec<Cell>;

/// One named generator.
#[derive(Debug, Clone, Copy)]
pub struct RegistryEntry {
    /// Lowercase pattern name.
    pub name: &'static str,
    /// Generator for this pattern.
    pub generator: GeneratorFn,
}

impl RegistryEntry {
    /// Creates an entry.
    pub const fn new(name: &'static str, generator: GeneratorFn) -> Self {
        Self { name, generator }
    }
}

/// How out-of-range indices map onto the table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IndexPolicy {
    /// Clamp to `[0, N-1]`.
    #[default]
    Clamp,
    /// Wrap modulo `N`, so `-1` selects the last entry.
    Wrap,
}

/// What the caller asked for.
#[derive(Debug, Clone, PartialEq)]
pub enum PatternSelector {
    /// Select by position.
    Index(IndexValue),
    /// Select by name; `None` selects the default pattern.
    Name(Option<String>),
}

impl PatternSelector {
    /// Builds a selector where an index, when present, wins over the name.
    pub fn new(pattern: Option<&str>, index: Option<&IndexValue>) -> Self {
        match index {
            Some(index) => PatternSelector::Index(index.clone()),
            None => PatternSelector::Name(pattern.map(str::to_string)),
        }
    }
}

/// A resolved selection.
#[derive(Debug, Clone, Copy)]
pub struct Resolution {
    /// Position in the registry.
    pub index: usize,
    /// Selected entry.
    pub entry: RegistryEntry,
}

impl Resolution {
    /// Selected pattern name.
    pub fn name(&self) -> &'static str {
        self.entry.name
    }

    /// Runs the selected generator.
    pub fn generate(&self, params: &GridParams) -> Vec<Cell> {
        (self.entry.generator)(params)
    }
}

/// Ordered generator table.
///
/// # Examples
/// ```
/// use cell_grid::{IndexValue, PatternSelector, Registry};
///
/// let registry = Registry::standard();
/// let hex = registry.resolve(&PatternSelector::Name(Some(" HEX ".into()))).unwrap();
/// assert_eq!((hex.index, hex.name()), (2, "hex"));
///
/// let last = registry.resolve(&PatternSelector::Index(IndexValue::from(999))).unwrap();
/// assert_eq!(last.name(), "cairo");
/// ```
#[derive(Debug, Clone)]
pub struct Registry {
    entries: Vec<RegistryEntry>,
    policy: IndexPolicy,
}

const STANDARD_ENTRIES: [RegistryEntry; 5] = [
    RegistryEntry::new("square", generators::square),
    RegistryEntry::new("tri", generators::tri),
    RegistryEntry::new("hex", generators::hex),
    RegistryEntry::new("weave", generators::weave),
    RegistryEntry::new("cairo", generators::cairo),
];

impl Registry {
    /// The five built-in patterns in UI order.
    pub fn standard() -> Self {
        Self::with_entries(STANDARD_ENTRIES.to_vec())
    }

    /// A custom table. May be empty; resolution then fails.
    pub fn with_entries(entries: Vec<RegistryEntry>) -> Self {
        Self {
            entries,
            policy: IndexPolicy::default(),
        }
    }

    /// Returns the registry with a different index policy.
    pub fn with_policy(mut self, policy: IndexPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry names in order.
    pub fn names(&self) -> Vec<&'static str> {
        self.entries.iter().map(|e| e.name).collect()
    }

    /// All entries in order.
    pub fn entries(&self) -> &[RegistryEntry] {
        &self.entries
    }

    /// Position of `name` after trimming and lowercasing.
    pub fn position(&self, name: &str) -> Option<usize> {
        let key = name.trim().to_lowercase();
        self.entries.iter().position(|e| e.name == key)
    }

    /// Entry at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&RegistryEntry> {
        self.entries.get(index)
    }

    /// Resolves a selector to exactly one entry.
    ///
    /// # Errors
    /// [`TilingError::EmptyRegistry`] when the table has no entries.
    pub fn resolve(&self, selector: &PatternSelector) -> Result<Resolution> {
        if self.entries.is_empty() {
            return Err(TilingError::EmptyRegistry);
        }
        let index = match selector {
            PatternSelector::Index(value) => self.map_index(value.as_integer()),
            PatternSelector::Name(name) => name
                .as_deref()
                .and_then(|n| self.position(n))
                .unwrap_or_else(|| self.default_index()),
        };
        let entry = self.entries[index];
        debug!(?selector, index, name = entry.name, "resolved pattern");
        Ok(Resolution { index, entry })
    }

    fn map_index(&self, raw: i64) -> usize {
        let last = self.entries.len() as i64 - 1;
        let index = match self.policy {
            IndexPolicy::Clamp => raw.clamp(0, last),
            IndexPolicy::Wrap => raw.rem_euclid(last + 1),
        };
        index as usize
    }

    fn default_index(&self) -> usize {
        self.position(DEFAULT_PATTERN).unwrap_or(0)
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests;
