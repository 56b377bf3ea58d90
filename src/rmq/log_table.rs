/// Lookup of `floor(log2(len))` for window lengths `1..=max_len`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub struct LogTable {
    logs: Vec<usize>,
}

impl LogTable {
    /// Build entries for lengths up to `max_len`.
    pub fn new(max_len: usize) -> Self {
        let mut logs = vec![0; max_len + 1];
        for len in 2..=max_len {
            logs[len] = logs[len / 2] + 1;
        }
        Self { logs }
    }

    /// Largest length covered.
    pub fn max_len(&self) -> usize {
        self.logs.len() - 1
    }

    /// `floor(log2(len))` for `1 <= len <= max_len`.
    #[inline]
    pub fn floor_log2(&self, len: usize) -> usize {
        debug_assert!(len >= 1 && len <= self.max_len(), "length {len} outside table");
        self.logs[len]
    }
}
