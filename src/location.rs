use serde::*;

/// A tile coordinate on the world grid.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct MapPoint {
    x: u16,
    y: u16,
}

impl MapPoint {
    pub fn new(x: u16, y: u16) -> Self {
        MapPoint { x, y }
    }

    #[inline]
    pub fn x(self) -> u16 {
        self.x
    }

    #[inline]
    pub fn y(self) -> u16 {
        self.y
    }

    #[inline]
    pub fn packed_repr(self) -> u32 {
        ((self.x as u32) << 16) | (self.y as u32)
    }

    #[inline]
    pub fn from_packed(packed: u32) -> Self {
        MapPoint {
            x: ((packed >> 16) & 0xFFFF) as u16,
            y: (packed & 0xFFFF) as u16,
        }
    }

    /// Chebyshev distance on an unwrapped grid.
    pub fn distance_to(self, other: Self) -> u32 {
        let dx = (self.x as i32 - other.x as i32).unsigned_abs();
        let dy = (self.y as i32 - other.y as i32).unsigned_abs();

        dx.max(dy)
    }
}

impl Serialize for MapPoint {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.packed_repr().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for MapPoint {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        u32::deserialize(deserializer).map(MapPoint::from_packed)
    }
}

/// Width and height of the world grid in tiles.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Serialize, Deserialize)]
pub struct MapExtent {
    pub width: u16,
    pub height: u16,
}

impl MapExtent {
    pub fn new(width: u16, height: u16) -> Self {
        MapExtent { width, height }
    }

    #[inline]
    pub fn tile_count(self) -> usize {
        self.width as usize * self.height as usize
    }

    #[inline]
    pub fn contains(self, pt: MapPoint) -> bool {
        pt.x() < self.width && pt.y() < self.height
    }

    /// Row-major linear index. The point must lie inside the extent.
    #[inline]
    pub fn index_of(self, pt: MapPoint) -> usize {
        pt.y() as usize * self.width as usize + pt.x() as usize
    }

    #[inline]
    pub fn point_at(self, index: usize) -> MapPoint {
        let width = self.width as usize;
        MapPoint::new((index % width) as u16, (index / width) as u16)
    }

    /// All points in linear index order.
    pub fn points(self) -> impl Iterator<Item = MapPoint> {
        (0..self.tile_count()).map(move |i| self.point_at(i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packed_repr_round_trips_extremes() {
        let pt = MapPoint::new(u16::MAX, 7);
        assert_eq!(MapPoint::from_packed(pt.packed_repr()), pt);
    }

    #[test]
    fn index_is_row_major() {
        let extent = MapExtent::new(4, 3);
        assert_eq!(extent.index_of(MapPoint::new(1, 2)), 9);
        assert_eq!(extent.point_at(9), MapPoint::new(1, 2));
        assert_eq!(extent.points().count(), 12);
    }

    #[test]
    fn contains_excludes_edge() {
        let extent = MapExtent::new(4, 3);
        assert!(extent.contains(MapPoint::new(3, 2)));
        assert!(!extent.contains(MapPoint::new(4, 0)));
        assert!(!extent.contains(MapPoint::new(0, 3)));
    }

    #[test]
    fn chebyshev_distance() {
        let a = MapPoint::new(2, 2);
        assert_eq!(a.distance_to(MapPoint::new(5, 3)), 3);
        assert_eq!(a.distance_to(MapPoint::new(0, 0)), 2);
    }
}
