use std::ops::{BitAnd, BitOr, BitXor, Sub};

use super::PolygonSetData;


impl BitOr for &PolygonSetData {
    type Output = PolygonSetData;

    fn bitor(self, rhs: Self) -> PolygonSetData {
        self.union(rhs)
    }
}

impl BitAnd for &PolygonSetData {
    type Output = PolygonSetData;

    fn bitand(self, rhs: Self) -> PolygonSetData {
        self.intersection(rhs)
    }
}

impl Sub for &PolygonSetData {
    type Output = PolygonSetData;

    fn sub(self, rhs: Self) -> PolygonSetData {
        self.difference(rhs)
    }
}

impl BitXor for &PolygonSetData {
    type Output = PolygonSetData;

    fn bitxor(self, rhs: Self) -> PolygonSetData {
        self.xor(rhs)
    }
}
