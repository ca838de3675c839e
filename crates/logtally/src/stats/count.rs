//! Count — order-preserving frequency counter.

use std::collections::HashMap;

/// Counts string keys while remembering first-encounter order.
///
/// `top(n)` sorts by descending count with a stable sort, so keys with equal
/// counts come out in the order they were first seen.
#[derive(Debug, Default)]
pub struct Counter {
    counts: HashMap<String, u64>,
    order: Vec<String>,
}

impl Counter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, key: &str) {
        match self.counts.get_mut(key) {
            Some(n) => *n += 1,
            None => {
                self.counts.insert(key.to_string(), 1);
                self.order.push(key.to_string());
            }
        }
    }

    pub fn get(&self, key: &str) -> u64 {
        self.counts.get(key).copied().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Keys in first-encounter order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(|k| k.as_str())
    }

    /// The `n` most frequent keys with their counts, descending.
    pub fn top(&self, n: usize) -> Vec<(String, u64)> {
        let mut entries: Vec<(String, u64)> = self
            .order
            .iter()
            .map(|k| (k.clone(), self.counts[k]))
            .collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries.truncate(n);
        entries
    }
}

// ── Tests ───────────────────────────────────────────────────────
