use std::fmt::Display;
use std::ops::Range;

use serde::{
    Deserialize,
    Serialize,
};

use crate::data_structs::typedef::PosType;

/// Half-open span of residue positions `[start, end)` on a protein.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Region {
    start: PosType,
    end:   PosType,
}

impl Region {
    /// Builds a region from two alignment coordinates given in any order.
    ///
    /// Search tools report reverse alignments with `start > end`; the
    /// region always spans `[min, max)`.
    pub fn from_span(
        a: PosType,
        b: PosType,
    ) -> Self {
        Self {
            start: a.min(b),
            end:   a.max(b),
        }
    }

    /// Returns the start position.
    pub fn start(&self) -> PosType { self.start }

    /// Returns the end position (exclusive).
    pub fn end(&self) -> PosType { self.end }

    /// Returns the number of positions covered.
    pub fn length(&self) -> PosType { self.end - self.start }

    pub fn is_empty(&self) -> bool { self.start == self.end }

    /// Checks whether two regions share at least one position. An empty
    /// region shares none.
    pub fn overlaps(
        &self,
        other: &Self,
    ) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && self.start < other.end
            && other.start < self.end
    }

    pub fn contains(
        &self,
        position: PosType,
    ) -> bool {
        self.start <= position && position < self.end
    }

    /// Checks that the region lies inside `[0, length)`.
    pub fn fits_in(
        &self,
        length: PosType,
    ) -> bool {
        self.end <= length
    }

    pub fn positions(&self) -> Range<usize> {
        self.start as usize..self.end as usize
    }
}

impl From<Range<PosType>> for Region {
    fn from(value: Range<PosType>) -> Self {
        Region::from_span(value.start, value.end)
    }
}

impl Display for Region {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_span_orders_coordinates() {
        let region = Region::from_span(50, 10);
        assert_eq!(region.start(), 10);
        assert_eq!(region.end(), 50);
        assert_eq!(region.length(), 40);
        assert_eq!(region.to_string(), "[10, 50)");
    }

    #[test]
    fn test_overlaps() {
        let a = Region::from(10..50);
        assert!(a.overlaps(&Region::from(5..40)));
        assert!(a.overlaps(&Region::from(49..60)));
        assert!(a.overlaps(&Region::from(20..30)));
        // Half-open: touching ends do not overlap
        assert!(!a.overlaps(&Region::from(50..60)));
        assert!(!a.overlaps(&Region::from(0..10)));
        // Empty regions overlap nothing
        assert!(!a.overlaps(&Region::from(20..20)));
        assert!(!Region::from(20..20).overlaps(&a));
        assert!(!Region::from(20..20).overlaps(&Region::from(20..20)));
    }

    #[test]
    fn test_contains_and_fits() {
        let region = Region::from(3..6);
        assert!(!region.contains(2));
        assert!(region.contains(3));
        assert!(region.contains(5));
        assert!(!region.contains(6));
        assert!(region.fits_in(6));
        assert!(!region.fits_in(5));
        assert_eq!(region.positions().collect::<Vec<_>>(), vec![3, 4, 5]);
    }
}
