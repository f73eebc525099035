// domain analytics sorting utilities
use std::cmp::Ordering;

use crate::model::FileRecord;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    #[inline]
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }
}

impl From<bool> for SortOrder {
    #[inline]
    fn from(desc: bool) -> Self {
        if desc {
            Self::Descending
        } else {
            Self::Ascending
        }
    }
}

/// Orders records by their exact byte size.
///
/// The sort is stable in both directions: records of equal size keep the
/// order in which they were enumerated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SizeSort {
    order: SortOrder,
}

impl SizeSort {
    pub fn new(order: SortOrder) -> Self {
        Self { order }
    }

    pub fn order(&self) -> SortOrder {
        self.order
    }

    pub fn apply(&self, records: &mut [FileRecord]) {
        records.sort_by(|a, b| self.compare(a, b));
    }

    pub fn sorted(&self, mut records: Vec<FileRecord>) -> Vec<FileRecord> {
        self.apply(&mut records);
        records
    }

    #[inline]
    fn compare(&self, a: &FileRecord, b: &FileRecord) -> Ordering {
        self.order.apply(a.size.cmp(&b.size))
    }
}
