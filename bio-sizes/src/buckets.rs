//! Fixed I/O size buckets
//!
//! Request sizes are classified against an ascending table of exclusive upper
//! bounds. Anything at or above the largest bound lands in one extra overflow
//! bucket, so every byte count maps to exactly one bucket.

const KIB: u64 = 1024;
const MIB: u64 = 1024 * KIB;

/// Buckets used for biosnoop request sizes, `<4k` through `<256M` plus overflow
pub const IO_SIZE_BUCKETS: BucketTable = BucketTable::new(
    &[
        (4 * KIB, "<4k"),
        (16 * KIB, "<16k"),
        (64 * KIB, "<64k"),
        (256 * KIB, "<256k"),
        (MIB, "<1M"),
        (2 * MIB, "<2M"),
        (4 * MIB, "<4M"),
        (16 * MIB, "<16M"),
        (64 * MIB, "<64M"),
        (256 * MIB, "<256M"),
    ],
    "...",
);

/// Immutable table of `(exclusive upper bound, label)` pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BucketTable {
    bounds: &'static [(u64, &'static str)],
    overflow_label: &'static str,
}

impl BucketTable {
    /// Build a table, rejecting bounds that are not strictly increasing.
    ///
    /// Evaluated at compile time for `const` tables, so a bad table fails the
    /// build instead of misclassifying at run time.
    #[must_use]
    pub const fn new(bounds: &'static [(u64, &'static str)], overflow_label: &'static str) -> Self {
        let mut i = 1;
        while i < bounds.len() {
            assert!(bounds[i - 1].0 < bounds[i].0, "bucket bounds must be strictly increasing");
            i += 1;
        }
        Self { bounds, overflow_label }
    }

    /// Index of the first bucket whose bound is strictly greater than `bytes`,
    /// or the overflow index if none is.
    #[must_use]
    pub fn classify(&self, bytes: u64) -> usize {
        self.bounds.partition_point(|&(bound, _)| bound <= bytes)
    }

    /// Number of buckets including the overflow bucket
    #[must_use]
    pub fn len(&self) -> usize {
        self.bounds.len() + 1
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    #[must_use]
    pub fn overflow_index(&self) -> usize {
        self.bounds.len()
    }

    /// Label for a bucket index; out-of-range indices read as overflow.
    #[must_use]
    pub fn label(&self, index: usize) -> &'static str {
        self.bounds.get(index).map_or(self.overflow_label, |&(_, label)| label)
    }

    pub fn labels(&self) -> impl Iterator<Item = &'static str> + '_ {
        (0..self.len()).map(|i| self.label(i))
    }
}
