//! Distribution of the selection into weekly periods.
//!
//! # Algorithm
//!
//! 1. Stable-sort the selection by difficulty rank (easiest first). Ties
//!    keep the selector's pick order.
//! 2. Walk the sorted list with a single cursor. Each week takes items
//!    while they fit its remaining capacity; the first item that does not
//!    fit closes the week and is reconsidered by the next one.
//! 3. Every week `1..=weeks` is emitted, even when empty.
//!
//! The cursor never skips ahead, so an item too large for any week's
//! leftover capacity blocks everything after it. Items still pending
//! after the last week are not scheduled.

use crate::models::{ScoredItem, Week};

/// Outcome of packing.
#[derive(Debug, Clone, PartialEq)]
pub struct Packing {
    /// Weeks `1..=weeks`, in order.
    pub weeks: Vec<Week>,
    /// Items that did not fit any remaining week.
    pub unplaced: Vec<ScoredItem>,
}

/// Packs `selection` into `weeks` periods of `week_limit_minutes` each.
pub fn pack(mut selection: Vec<ScoredItem>, weeks: u32, week_limit_minutes: f64) -> Packing {
    selection.sort_by_key(|s| s.item.difficulty.rank());

    let mut pending = selection.into_iter().peekable();
    let mut packed = Vec::with_capacity(weeks as usize);

    for week_number in 1..=weeks {
        let mut week = Week::new(week_number);

        while let Some(item) = pending.next_if(|next| {
            (week.total_minutes + u64::from(next.duration())) as f64 <= week_limit_minutes
        }) {
            week.push(item);
        }

        packed.push(week);
    }

    Packing {
        weeks: packed,
        unplaced: pending.collect(),
    }
}
