use serde::Serialize;
use std::{
    iter::Sum,
    ops::{Add, AddAssign},
};

/// Raw and brotli-compressed byte counts for an artifact, or for a chunk and
/// everything it imports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SizeInfo {
    pub original_size: u64,
    pub brotli_size: u64,
}

impl SizeInfo {
    pub const ZERO: SizeInfo = SizeInfo { original_size: 0, brotli_size: 0 };

    pub fn new(original_size: u64, brotli_size: u64) -> Self {
        Self { original_size, brotli_size }
    }
}

impl Add for SizeInfo {
    type Output = SizeInfo;

    fn add(self, rhs: SizeInfo) -> SizeInfo {
        SizeInfo {
            original_size: self.original_size + rhs.original_size,
            brotli_size: self.brotli_size + rhs.brotli_size,
        }
    }
}

impl AddAssign for SizeInfo {
    fn add_assign(&mut self, rhs: SizeInfo) {
        *self = *self + rhs;
    }
}

impl Sum for SizeInfo {
    fn sum<I: Iterator<Item = SizeInfo>>(iter: I) -> SizeInfo {
        iter.fold(SizeInfo::ZERO, Add::add)
    }
}
