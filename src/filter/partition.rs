//! Row-range decomposition for the dispatcher.
//!
//! All functions here are pure and testable without images or threads.

use super::{FilterError, try_vec_with_capacity};

/// Half-open span of rows `[start, end)` owned by one worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowRange {
    pub start: usize,
    pub end: usize,
}

impl RowRange {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Number of rows; zero for degenerate ranges.
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Split `[0, height)` into `thread_count` contiguous ranges.
///
/// Every range but the last holds `height / thread_count` rows; the last one
/// also absorbs the remainder. With more threads than rows the leading ranges
/// come out empty.
///
/// The range list is reserved fallibly; a thread count too large to track
/// yields [`FilterError::Allocation`].
///
/// # Examples
/// ```
/// # use sobel_edges::filter::{partition_rows, RowRange};
/// let ranges = partition_rows(10, 3).unwrap();
/// assert_eq!(
///     ranges,
///     vec![RowRange::new(0, 3), RowRange::new(3, 6), RowRange::new(6, 10)]
/// );
///
/// // More threads than rows: only the last worker gets anything
/// let ranges = partition_rows(2, 4).unwrap();
/// assert_eq!(ranges[3], RowRange::new(0, 2));
/// assert!(ranges[..3].iter().all(|r| r.is_empty()));
/// ```
pub fn partition_rows(height: usize, thread_count: usize) -> Result<Vec<RowRange>, FilterError> {
    let mut ranges = try_vec_with_capacity(thread_count)?;
    if thread_count == 0 {
        return Ok(ranges);
    }
    let rows_per_thread = height / thread_count;
    ranges.extend((0..thread_count).map(|k| {
        let start = k * rows_per_thread;
        let end = if k == thread_count - 1 {
            height
        } else {
            (k + 1) * rows_per_thread
        };
        RowRange::new(start, end)
    }));
    Ok(ranges)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Ranges must tile `[0, height)` in order with no gaps or overlaps.
    fn assert_exact_cover(height: usize, ranges: &[RowRange]) {
        let mut next = 0;
        for r in ranges.iter().filter(|r| !r.is_empty()) {
            assert_eq!(r.start, next, "gap or overlap before {r:?}");
            next = r.end;
        }
        assert_eq!(next, height);
        let covered: usize = ranges.iter().map(RowRange::len).sum();
        assert_eq!(covered, height);
    }

    #[test]
    fn even_split() {
        let ranges = partition_rows(12, 4).unwrap();
        assert_eq!(ranges.len(), 4);
        assert!(ranges.iter().all(|r| r.len() == 3));
        assert_exact_cover(12, &ranges);
    }

    #[test]
    fn remainder_goes_to_last_worker() {
        let ranges = partition_rows(11, 4).unwrap();
        assert_eq!(ranges[0], RowRange::new(0, 2));
        assert_eq!(ranges[2], RowRange::new(4, 6));
        assert_eq!(ranges[3], RowRange::new(6, 11));
        assert_exact_cover(11, &ranges);
    }

    #[test]
    fn single_thread_takes_everything() {
        assert_eq!(partition_rows(7, 1).unwrap(), vec![RowRange::new(0, 7)]);
    }

    #[test]
    fn more_threads_than_rows() {
        let ranges = partition_rows(3, 8).unwrap();
        assert_eq!(ranges.len(), 8);
        assert_eq!(ranges.iter().filter(|r| !r.is_empty()).count(), 1);
        assert_exact_cover(3, &ranges);
    }

    #[test]
    fn zero_height_yields_empty_ranges() {
        let ranges = partition_rows(0, 3).unwrap();
        assert_eq!(ranges.len(), 3);
        assert!(ranges.iter().all(RowRange::is_empty));
    }

    #[test]
    fn zero_threads_yields_nothing() {
        assert!(partition_rows(10, 0).unwrap().is_empty());
    }

    #[test]
    fn exact_cover_for_all_small_pairs() {
        for height in 0..40 {
            for threads in 1..50 {
                let ranges = partition_rows(height, threads).unwrap();
                assert_eq!(ranges.len(), threads);
                assert_exact_cover(height, &ranges);
            }
        }
    }

    #[test]
    fn degenerate_range_has_no_rows() {
        let r = RowRange::new(5, 2);
        assert!(r.is_empty());
        assert_eq!(r.len(), 0);
    }

    #[test]
    fn untrackable_thread_count_is_an_error() {
        let err = partition_rows(10, usize::MAX).unwrap_err();
        assert!(err.is_resource());
    }
}
