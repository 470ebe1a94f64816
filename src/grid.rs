//! The world grid as seen by the resource maps.
//!
//! Everything the maps know about the world comes through `GridService`:
//! coordinates, radius enumeration and the per-tile predicates used by the
//! placement searches. `WorldGrid` is the in-memory implementation.

use crate::buildings::BuildingQuality;
use crate::constants::MAX_RADIUS;
use crate::location::*;
use crate::resource::ResourceKind;
use crate::terrain::TerrainFlags;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GridError {
    #[error("grid extent must be non-empty")]
    EmptyExtent,
    #[error("expected {expected} tiles, got {actual}")]
    ExtentMismatch { expected: usize, actual: usize },
    #[error("point {0:?} lies outside the grid")]
    OutOfBounds(MapPoint),
    #[error("radius {0} exceeds {max}", max = MAX_RADIUS)]
    RadiusTooLarge(u32),
    #[error("invalid settings: {0}")]
    Settings(#[from] serde_json::Error),
}

pub trait GridService {
    fn extent(&self) -> MapExtent;

    fn tile_count(&self) -> usize {
        self.extent().tile_count()
    }

    fn index_of(&self, pt: MapPoint) -> usize {
        self.extent().index_of(pt)
    }

    fn point_at(&self, index: usize) -> MapPoint {
        self.extent().point_at(index)
    }

    /// Call `f(point, distance)` for every point with `1 <= distance <= radius`.
    ///
    /// The center is not visited. Points are visited ring by ring outward,
    /// row-major inside a ring, and every point at most once.
    fn for_each_in_radius<F>(&self, center: MapPoint, radius: u32, f: F)
    where
        F: FnMut(MapPoint, u32);

    /// Every point `for_each_in_radius` visits, in the same order. The center
    /// is not included.
    fn points_in_radius(&self, center: MapPoint, radius: u32) -> Vec<MapPoint> {
        let mut points = Vec::new();
        self.for_each_in_radius(center, radius, |pt, _| points.push(pt));
        points
    }

    fn neighbors(&self, pt: MapPoint) -> Vec<MapPoint>;

    fn is_border(&self, pt: MapPoint) -> bool;

    fn terrain(&self, pt: MapPoint) -> TerrainFlags;

    fn terrain_is_useable(&self, pt: MapPoint) -> bool {
        self.terrain(pt).is_useable()
    }

    fn building_quality(&self, pt: MapPoint) -> BuildingQuality;

    fn surface_resource(&self, pt: MapPoint) -> Option<ResourceKind>;

    fn subsurface_resource(&self, pt: MapPoint) -> Option<ResourceKind>;
}
