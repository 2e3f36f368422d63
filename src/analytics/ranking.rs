use std::cmp::Ordering;
use std::collections::HashMap;

use super::NamedTotal;

/// Running totals keyed by label, remembering first-insertion order so ties
/// rank deterministically.
#[derive(Debug, Default, Clone)]
pub struct OrderedTotals {
    entries: Vec<NamedTotal>,
    index: HashMap<String, usize>,
}

impl OrderedTotals {
    pub fn add(&mut self, name: &str, amount: f64) {
        match self.index.get(name) {
            Some(&slot) => self.entries[slot].value += amount,
            None => {
                self.index.insert(name.to_string(), self.entries.len());
                self.entries.push(NamedTotal::new(name, amount));
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn into_top(self, limit: usize) -> Vec<NamedTotal> {
        top_n(self.entries, limit)
    }
}

/// Stable sort by descending value, then keep the first `limit` entries.
/// Anything past the cap is dropped, not merged.
pub fn top_n(mut entries: Vec<NamedTotal>, limit: usize) -> Vec<NamedTotal> {
    entries.sort_by(|a, b| b.value.partial_cmp(&a.value).unwrap_or(Ordering::Equal));
    entries.truncate(limit);
    entries
}
