use std::collections::HashMap;

/// Key -> column number lookup owned by a worksheet
///
/// Holds column numbers rather than references; the worksheet resolves them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyTable {
    entries: HashMap<String, u32>,
}

impl KeyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Column number registered for a key
    pub fn owner(&self, key: &str) -> Option<u32> {
        self.entries.get(key).copied()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Register a key, returning the previous owner if any
    pub fn insert(&mut self, key: impl Into<String>, column: u32) -> Option<u32> {
        self.entries.insert(key.into(), column)
    }

    /// Drop a key, returning its owner
    pub fn remove(&mut self, key: &str) -> Option<u32> {
        self.entries.remove(key)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> + '_ {
        self.entries.iter().map(|(k, v)| (k.as_str(), *v))
    }
}
