//! Completion aggregates
//!
//! Counts are always derived by filtering the full collection at call time.
//! Nothing here caches a counter that could drift from the data.

use std::ops::Add;

use serde::{Deserialize, Serialize};

use crate::types::{ProgressItem, ProgressStatus, Subtask, TimelineStep};

/// Anything with a completion predicate
pub trait Completable {
    fn is_complete(&self) -> bool;
}

impl Completable for TimelineStep {
    fn is_complete(&self) -> bool {
        self.is_completed
    }
}

impl Completable for ProgressItem {
    fn is_complete(&self) -> bool {
        self.status == ProgressStatus::Completed
    }
}

impl Completable for Subtask {
    fn is_complete(&self) -> bool {
        self.completed
    }
}

impl Completable for bool {
    fn is_complete(&self) -> bool {
        *self
    }
}

impl<T: Completable + ?Sized> Completable for &T {
    fn is_complete(&self) -> bool {
        (**self).is_complete()
    }
}

/// Completed / total pair for a collection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Completion {
    pub completed: usize,
    pub total: usize,
}

impl Completion {
    pub fn of<I>(items: I) -> Self
    where
        I: IntoIterator,
        I::Item: Completable,
    {
        items
            .into_iter()
            .fold(Self::default(), |mut acc, item| {
                acc.total += 1;
                if item.is_complete() {
                    acc.completed += 1;
                }
                acc
            })
    }

    pub fn remaining(&self) -> usize {
        self.total.saturating_sub(self.completed)
    }

    /// Percentage rounded to the nearest integer, halves rounding up.
    /// An empty collection is 0%.
    pub fn percentage(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        let completed = self.completed.min(self.total) as u64;
        let total = self.total as u64;
        ((completed * 200 + total) / (total * 2)) as u32
    }

    /// 1-based step the user is currently on, capped at the last step
    pub fn current_step(&self) -> usize {
        (self.completed + 1).min(self.total.max(1))
    }

    pub fn is_done(&self) -> bool {
        self.total > 0 && self.completed >= self.total
    }
}

impl Add for Completion {
    type Output = Completion;

    fn add(self, rhs: Self) -> Self::Output {
        Completion {
            completed: self.completed + rhs.completed,
            total: self.total + rhs.total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn empty_collection_is_zero_percent() {
        let c = Completion::of(Vec::<bool>::new());
        assert_eq!(c.total, 0);
        assert_eq!(c.percentage(), 0);
        assert_eq!(c.remaining(), 0);
        assert_eq!(c.current_step(), 1);
        assert!(!c.is_done());
    }

    #[test]
    fn percentage_rounds_half_up() {
        // 1/8 = 12.5%
        assert_eq!(Completion { completed: 1, total: 8 }.percentage(), 13);
        // 1/3 = 33.3%
        assert_eq!(Completion { completed: 1, total: 3 }.percentage(), 33);
        // 2/3 = 66.6%
        assert_eq!(Completion { completed: 2, total: 3 }.percentage(), 67);
        assert_eq!(Completion { completed: 34, total: 34 }.percentage(), 100);
    }

    #[test]
    fn current_step_caps_at_total() {
        assert_eq!(Completion { completed: 0, total: 34 }.current_step(), 1);
        assert_eq!(Completion { completed: 10, total: 34 }.current_step(), 11);
        assert_eq!(Completion { completed: 34, total: 34 }.current_step(), 34);
    }

    #[test]
    fn completions_add() {
        let a = Completion { completed: 1, total: 2 };
        let b = Completion { completed: 3, total: 5 };
        assert_eq!(a + b, Completion { completed: 4, total: 7 });
    }

    proptest! {
        #[test]
        fn completed_plus_remaining_is_total(flags in proptest::collection::vec(any::<bool>(), 0..100)) {
            let c = Completion::of(&flags);
            prop_assert_eq!(c.total, flags.len());
            prop_assert_eq!(c.completed + c.remaining(), c.total);
            prop_assert_eq!(c.completed, flags.iter().filter(|f| **f).count());
        }

        #[test]
        fn percentage_stays_in_range(completed in 0usize..500, extra in 0usize..500) {
            let c = Completion { completed, total: completed + extra };
            let pct = c.percentage();
            prop_assert!(pct <= 100);
            if c.total > 0 {
                let exact = completed as f64 * 100.0 / c.total as f64;
                prop_assert!((pct as f64 - exact).abs() <= 0.5);
            }
        }
    }
}
