//! Key-Parameterized Comparison Sort
//!
//! One generic O(n log n) primitive shared by both ordering policies, so the
//! record types stay decoupled from any sorting framework. Both variants are
//! unstable: relative order among equal keys is unspecified.

use crate::domain::entities::{TicketRecord, TicketRecordHistoric};
use crate::domain::value_objects::BlockHeight;
use rayon::slice::ParallelSliceMut;

/// Key policy: maturation height of a live ticket.
pub fn ticket_height_key(record: &TicketRecord) -> BlockHeight {
    record.ticket_height
}

/// Key policy: height at which a historic ticket's spend was mined.
pub fn spent_by_height_key(record: &TicketRecordHistoric) -> BlockHeight {
    record.spent_by_height
}

/// Sort records ascending by the extracted key.
///
/// Zero-length and single-element inputs are no-ops. Cannot fail: the key is
/// a plain ordered value.
pub fn sort_by_key<T, K, F>(records: &mut [T], key: F)
where
    K: Ord,
    F: FnMut(&T) -> K,
{
    records.sort_unstable_by_key(key);
}

/// Parallel variant of [`sort_by_key`] for large collections.
///
/// Same contract: the output is non-decreasing in the extracted key.
pub fn par_sort_by_key<T, K, F>(records: &mut [T], key: F)
where
    T: Send,
    K: Ord + Send,
    F: Fn(&T) -> K + Sync,
{
    records.par_sort_unstable_by_key(key);
}
