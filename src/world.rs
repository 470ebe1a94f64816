use crate::buildings::BuildingQuality;
use crate::grid::*;
use crate::location::*;
use crate::resource::ResourceKind;
use crate::terrain::*;
use fnv::FnvHashSet;
use itertools::Either;
use serde::{Deserialize, Serialize};

/// Whether the map edges connect to the opposite side.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub enum Topology {
    #[default]
    Bounded,
    Wrapping,
}

/// In-memory world grid with Chebyshev distances.
#[derive(Clone, Debug)]
pub struct WorldGrid {
    topology: Topology,
    terrain: GridArray<TerrainFlags>,
    border: GridArray<bool>,
    quality: GridArray<BuildingQuality>,
    surface: GridArray<Option<ResourceKind>>,
    subsurface: GridArray<Option<ResourceKind>>,
}

impl WorldGrid {
    /// A grid of plain buildable land: no border, castle quality everywhere.
    pub fn new(extent: MapExtent, topology: Topology) -> Result<Self, GridError> {
        if extent.tile_count() == 0 {
            return Err(GridError::EmptyExtent);
        }

        Ok(WorldGrid {
            topology,
            terrain: GridArray::new(extent, TerrainFlags::NONE),
            border: GridArray::new(extent, false),
            quality: GridArray::new(extent, BuildingQuality::Castle),
            surface: GridArray::new(extent, None),
            subsurface: GridArray::new(extent, None),
        })
    }

    /// Build a grid from a row-major terrain buffer.
    pub fn from_terrain(
        extent: MapExtent,
        topology: Topology,
        terrain: &[TerrainFlags],
    ) -> Result<Self, GridError> {
        if terrain.len() != extent.tile_count() {
            return Err(GridError::ExtentMismatch {
                expected: extent.tile_count(),
                actual: terrain.len(),
            });
        }

        let mut grid = WorldGrid::new(extent, topology)?;
        for (i, flags) in terrain.iter().enumerate() {
            *grid.terrain.get_index_mut(i) = *flags;
        }
        Ok(grid)
    }

    pub fn topology(&self) -> Topology {
        self.topology
    }

    fn check(&self, pt: MapPoint) -> Result<(), GridError> {
        if self.extent().contains(pt) {
            Ok(())
        } else {
            Err(GridError::OutOfBounds(pt))
        }
    }

    pub fn set_terrain(&mut self, pt: MapPoint, flags: TerrainFlags) -> Result<(), GridError> {
        self.check(pt)?;
        self.terrain.set(pt, flags);
        Ok(())
    }

    pub fn set_border(&mut self, pt: MapPoint, border: bool) -> Result<(), GridError> {
        self.check(pt)?;
        self.border.set(pt, border);
        Ok(())
    }

    pub fn set_building_quality(
        &mut self,
        pt: MapPoint,
        quality: BuildingQuality,
    ) -> Result<(), GridError> {
        self.check(pt)?;
        self.quality.set(pt, quality);
        Ok(())
    }

    pub fn set_surface_resource(
        &mut self,
        pt: MapPoint,
        resource: Option<ResourceKind>,
    ) -> Result<(), GridError> {
        self.check(pt)?;
        self.surface.set(pt, resource);
        Ok(())
    }

    pub fn set_subsurface_resource(
        &mut self,
        pt: MapPoint,
        resource: Option<ResourceKind>,
    ) -> Result<(), GridError> {
        self.check(pt)?;
        self.subsurface.set(pt, resource);
        Ok(())
    }

    /// Resolve an offset from `pt`, wrapping or clipping at the edges.
    fn offset(&self, pt: MapPoint, dx: i32, dy: i32) -> Option<MapPoint> {
        let extent = self.extent();
        let w = extent.width as i32;
        let h = extent.height as i32;
        let x = pt.x() as i32 + dx;
        let y = pt.y() as i32 + dy;

        match self.topology {
            Topology::Bounded => {
                if (0..w).contains(&x) && (0..h).contains(&y) {
                    Some(MapPoint::new(x as u16, y as u16))
                } else {
                    None
                }
            }
            Topology::Wrapping => Some(MapPoint::new(
                x.rem_euclid(w) as u16,
                y.rem_euclid(h) as u16,
            )),
        }
    }
}

impl GridService for WorldGrid {
    fn extent(&self) -> MapExtent {
        self.terrain.extent()
    }

    fn for_each_in_radius<F>(&self, center: MapPoint, radius: u32, mut f: F)
    where
        F: FnMut(MapPoint, u32),
    {
        let extent = self.extent();
        let r = radius.min(extent.width.max(extent.height) as u32) as i32;

        // Rings only overlap themselves once they wrap around the map.
        let overlaps = self.topology == Topology::Wrapping
            && 2 * r + 1 > extent.width.min(extent.height) as i32;
        let mut seen: FnvHashSet<MapPoint> = FnvHashSet::default();
        if overlaps {
            seen.insert(center);
        }

        for d in 1..=r {
            for dy in -d..=d {
                let dxs = if dy.abs() == d {
                    Either::Left(-d..=d)
                } else {
                    Either::Right([-d, d].into_iter())
                };

                for dx in dxs {
                    if let Some(pt) = self.offset(center, dx, dy) {
                        if overlaps && !seen.insert(pt) {
                            continue;
                        }
                        f(pt, d as u32);
                    }
                }
            }
        }
    }

    fn neighbors(&self, pt: MapPoint) -> Vec<MapPoint> {
        let mut result = Vec::with_capacity(NEIGHBORS_8.len());
        for &(dx, dy) in &NEIGHBORS_8 {
            if let Some(n) = self.offset(pt, dx, dy) {
                if n != pt && !result.contains(&n) {
                    result.push(n);
                }
            }
        }
        result
    }

    fn is_border(&self, pt: MapPoint) -> bool {
        *self.border.get(pt)
    }

    fn terrain(&self, pt: MapPoint) -> TerrainFlags {
        *self.terrain.get(pt)
    }

    fn building_quality(&self, pt: MapPoint) -> BuildingQuality {
        *self.quality.get(pt)
    }

    fn surface_resource(&self, pt: MapPoint) -> Option<ResourceKind> {
        *self.surface.get(pt)
    }

    fn subsurface_resource(&self, pt: MapPoint) -> Option<ResourceKind> {
        *self.subsurface.get(pt)
    }
}
