use crate::location::*;
use bitflags::*;
use serde::{Deserialize, Serialize};

bitflags! {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct TerrainFlags: u8 {
        const NONE = 0;
        const WATER = 1;
        const LAVA = 2;
        const SNOW = 4;
        const SWAMP = 8;
        const MOUNTAIN = 16;
    }
}

impl TerrainFlags {
    const UNUSEABLE: TerrainFlags = TerrainFlags::WATER
        .union(TerrainFlags::LAVA)
        .union(TerrainFlags::SNOW)
        .union(TerrainFlags::SWAMP);

    /// Whether settlers can walk on and build around this terrain.
    /// Mountains count as useable; they host mines.
    #[inline]
    pub fn is_useable(self) -> bool {
        !self.intersects(Self::UNUSEABLE)
    }
}

/// A flat row-major array holding one value per tile of a map.
#[derive(Clone, Debug, PartialEq)]
pub struct GridArray<T: Copy> {
    extent: MapExtent,
    data: Vec<T>,
}

impl<T: Copy> GridArray<T> {
    pub fn new(extent: MapExtent, initial: T) -> Self {
        GridArray {
            extent,
            data: vec![initial; extent.tile_count()],
        }
    }

    #[inline]
    pub fn extent(&self) -> MapExtent {
        self.extent
    }

    #[inline]
    pub fn get(&self, pt: MapPoint) -> &T {
        &self.data[self.extent.index_of(pt)]
    }

    #[inline]
    pub fn get_mut(&mut self, pt: MapPoint) -> &mut T {
        let index = self.extent.index_of(pt);
        &mut self.data[index]
    }

    #[inline]
    pub fn set(&mut self, pt: MapPoint, value: T) {
        *self.get_mut(pt) = value;
    }

    #[inline]
    pub fn get_index(&self, index: usize) -> &T {
        &self.data[index]
    }

    #[inline]
    pub fn get_index_mut(&mut self, index: usize) -> &mut T {
        &mut self.data[index]
    }

    pub fn iter(&self) -> impl Iterator<Item = (MapPoint, &T)> {
        let extent = self.extent;
        self.data
            .iter()
            .enumerate()
            .map(move |(i, v)| (extent.point_at(i), v))
    }
}

#[derive(Serialize)]
struct GridArrayRef<'a, T> {
    extent: MapExtent,
    data: &'a [T],
}

#[derive(Deserialize)]
struct GridArrayOwned<T> {
    extent: MapExtent,
    data: Vec<T>,
}

impl<T: Copy + Serialize> Serialize for GridArray<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        GridArrayRef {
            extent: self.extent,
            data: &self.data,
        }
        .serialize(serializer)
    }
}

impl<'de, T: Copy + Deserialize<'de>> Deserialize<'de> for GridArray<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let repr = GridArrayOwned::<T>::deserialize(deserializer)?;
        if repr.data.len() != repr.extent.tile_count() {
            return Err(serde::de::Error::custom("Invalid grid array size"));
        }
        Ok(GridArray {
            extent: repr.extent,
            data: repr.data,
        })
    }
}

/// Neighbor offsets for 8-directional movement.
pub const NEIGHBORS_8: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
];
