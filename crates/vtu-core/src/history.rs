use std::collections::VecDeque;
use vtu_types::Transaction;

/// Bounded, most-recent-first transaction log.
#[derive(Debug, Clone)]
pub struct TransactionHistory {
    entries: VecDeque<Transaction>,
    capacity: usize,
}

impl TransactionHistory {
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    /// Prepend a record, evicting the oldest once over capacity.
    /// Returns the evicted record, if any.
    pub fn record(&mut self, tx: Transaction) -> Option<Transaction> {
        self.entries.push_front(tx);
        if self.entries.len() > self.capacity {
            self.entries.pop_back()
        } else {
            None
        }
    }

    pub fn latest(&self) -> Option<&Transaction> {
        self.entries.front()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Transaction> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn to_vec(&self) -> Vec<Transaction> {
        self.entries.iter().cloned().collect()
    }
}
