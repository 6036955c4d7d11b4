//! Per-call draining queues over a candidate pool.

use rand::Rng;
use rand::seq::SliceRandom;

/// A shuffled, consume-on-read copy of a pool.
///
/// Items are popped until the copy is exhausted; after that every read
/// picks a uniformly random pool item with replacement. The pool itself is
/// only borrowed and never reordered.
#[derive(Debug)]
pub(crate) struct DrainingQueue<'pool, T> {
    pool: &'pool [T],
    remaining: Vec<T>,
    reused: usize,
}

impl<'pool, T: Clone> DrainingQueue<'pool, T> {
    pub(crate) fn shuffled<R: Rng + ?Sized>(pool: &'pool [T], rng: &mut R) -> Self {
        let mut remaining = pool.to_vec();
        remaining.shuffle(rng);
        Self {
            pool,
            remaining,
            reused: 0,
        }
    }

    /// Return the next item, or `None` only when the pool is empty.
    pub(crate) fn next<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<T> {
        if let Some(item) = self.remaining.pop() {
            return Some(item);
        }
        let item = self.pool.choose(rng)?.clone();
        self.reused = self.reused.saturating_add(1);
        Some(item)
    }

    /// Return up to `count` items, fewer only when the pool is empty.
    pub(crate) fn take<R: Rng + ?Sized>(&mut self, count: usize, rng: &mut R) -> Vec<T> {
        (0..count).filter_map(|_| self.next(rng)).collect()
    }

    pub(crate) const fn reused(&self) -> usize {
        self.reused
    }
}
