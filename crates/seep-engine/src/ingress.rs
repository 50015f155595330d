//! Bounded queue of pending point edits.
//!
//! [`EditQueue`] buffers edits between submission and the next tick. It
//! enforces a capacity limit and hands edits back in arrival order when
//! the world drains it ahead of running the phases.

use std::collections::VecDeque;

use seep_core::{Edit, EditError, EditReceipt};

/// Bounded FIFO of edits awaiting the next tick.
pub struct EditQueue {
    queue: VecDeque<Edit>,
    capacity: usize,
}

impl EditQueue {
    /// Create a new queue with the given capacity.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "EditQueue capacity must be at least 1");
        Self {
            queue: VecDeque::with_capacity(capacity.min(4096)),
            capacity,
        }
    }

    /// Enqueue one edit, or fail with [`EditError::QueueFull`].
    pub fn push(&mut self, edit: Edit) -> Result<(), EditError> {
        if self.queue.len() >= self.capacity {
            return Err(EditError::QueueFull);
        }
        self.queue.push_back(edit);
        Ok(())
    }

    /// Submit a batch of edits.
    ///
    /// Returns one [`EditReceipt`] per input edit, in input order. Edits
    /// are accepted until the queue is full; the rest are rejected with
    /// `QueueFull`. Bounds are not checked here, only when the edit is
    /// applied.
    pub fn submit(&mut self, edits: impl IntoIterator<Item = Edit>) -> Vec<EditReceipt> {
        edits
            .into_iter()
            .map(|edit| match self.push(edit) {
                Ok(()) => EditReceipt::queued(),
                Err(e) => EditReceipt::rejected(e),
            })
            .collect()
    }

    /// Remove and return every pending edit in arrival order.
    pub fn drain(&mut self) -> Vec<Edit> {
        self.queue.drain(..).collect()
    }

    /// Discard all pending edits.
    pub fn clear(&mut self) {
        self.queue.clear();
    }

    /// Number of pending edits.
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Whether nothing is pending.
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Maximum number of pending edits.
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl std::fmt::Debug for EditQueue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EditQueue")
            .field("len", &self.queue.len())
            .field("capacity", &self.capacity)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use seep_core::CellKind;

    fn edits(n: i32) -> Vec<Edit> {
        (0..n).map(|c| Edit::paint(0, c, CellKind::Liquid)).collect()
    }

    #[test]
    fn drain_preserves_arrival_order() {
        let mut q = EditQueue::new(8);
        q.submit(edits(3));
        q.push(Edit::erase(5, 5)).unwrap();
        let drained = q.drain();
        let cols: Vec<i32> = drained.iter().map(|e| e.col).collect();
        assert_eq!(cols, vec![0, 1, 2, 5]);
        assert!(q.is_empty());
    }

    #[test]
    fn overflow_rejects_tail_of_batch() {
        let mut q = EditQueue::new(2);
        let receipts = q.submit(edits(4));
        assert_eq!(receipts.len(), 4);
        assert!(receipts[0].accepted && receipts[1].accepted);
        assert_eq!(receipts[2], EditReceipt::rejected(EditError::QueueFull));
        assert_eq!(receipts[3].reason, Some(EditError::QueueFull));
        assert_eq!(q.len(), 2);
    }

    #[test]
    fn queued_receipts_have_no_tick_yet() {
        let mut q = EditQueue::new(1);
        let receipts = q.submit(edits(1));
        assert_eq!(receipts[0].applied_tick, None);
    }

    #[test]
    fn capacity_frees_after_drain() {
        let mut q = EditQueue::new(1);
        q.push(Edit::erase(0, 0)).unwrap();
        assert_eq!(q.push(Edit::erase(0, 1)), Err(EditError::QueueFull));
        q.drain();
        assert!(q.push(Edit::erase(0, 1)).is_ok());
    }

    #[test]
    fn out_of_bounds_edits_are_queued() {
        let mut q = EditQueue::new(4);
        let receipts = q.submit(vec![Edit::erase(-1, -1)]);
        assert!(receipts[0].accepted);
        q.clear();
        assert!(q.is_empty());
    }

    #[test]
    #[should_panic(expected = "capacity must be at least 1")]
    fn zero_capacity_panics() {
        let _ = EditQueue::new(0);
    }
}
