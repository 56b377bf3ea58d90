use super::LogTable;

/// Sparse table of minimum positions.
///
/// `level(k)[i]` is the index of the minimum of `depths[i..i + 2^k]`. Ties
/// go to the smaller index, so every entry (and every query answer) is the
/// leftmost minimum of its range.
///
/// The table does not own the depth sequence; callers pass the same slice
/// that was used for [`SparseTable::build`] to each query.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub struct SparseTable {
    levels: Vec<Vec<usize>>,
    logs: LogTable,
}

impl SparseTable {
    /// Precompute all power-of-two windows over `depths`.
    pub fn build(depths: &[usize]) -> Self {
        let len = depths.len();
        let logs = LogTable::new(len);
        if len == 0 {
            return Self {
                levels: Vec::new(),
                logs,
            };
        }

        let top = logs.floor_log2(len);
        let mut levels: Vec<Vec<usize>> = Vec::with_capacity(top + 1);
        levels.push((0..len).collect());

        for k in 1..=top {
            let half = 1 << (k - 1);
            let width = 1 << k;
            let prev = &levels[k - 1];
            // Only windows with i + 2^k - 1 < len exist.
            let row = (0..=len - width)
                .map(|i| leftmost_min(depths, prev[i], prev[i + half]))
                .collect();
            levels.push(row);
        }

        tracing::trace!(len, levels = levels.len(), "sparse table built");
        Self { levels, logs }
    }

    /// Length of the indexed sequence.
    pub fn len(&self) -> usize {
        self.levels.first().map_or(0, Vec::len)
    }

    /// Whether the indexed sequence was empty.
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Number of levels, `floor(log2(len)) + 1`.
    pub fn num_levels(&self) -> usize {
        self.levels.len()
    }

    /// Row `k`: minimum positions of all windows of width `2^k`.
    pub fn level(&self, k: usize) -> &[usize] {
        &self.levels[k]
    }

    /// The log lookup owned by this table.
    pub fn log_table(&self) -> &LogTable {
        &self.logs
    }

    /// Index of the leftmost minimum of `depths[l..=r]`.
    ///
    /// `depths` must be the slice the table was built from and
    /// `l <= r < len` must hold.
    #[inline]
    pub fn argmin(&self, depths: &[usize], l: usize, r: usize) -> usize {
        debug_assert!(l <= r && r < self.len(), "range [{l}, {r}] out of bounds");
        debug_assert_eq!(depths.len(), self.len());

        let k = self.logs.floor_log2(r - l + 1);
        let row = &self.levels[k];
        leftmost_min(depths, row[l], row[r + 1 - (1 << k)])
    }
}

/// `a` unless `b` is strictly shallower.
#[inline]
fn leftmost_min(depths: &[usize], a: usize, b: usize) -> usize {
    if depths[a] <= depths[b] {
        a
    } else {
        b
    }
}
