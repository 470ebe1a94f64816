//! Per-tile classification snapshot shared by every resource map of a player.

use crate::grid::*;
use crate::location::*;
use crate::resource::TileResource;
use bitflags::*;
use log::*;
use pathfinding::prelude::bfs_reach;

bitflags! {
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct NodeFlags: u8 {
        const NONE = 0;
        /// Inside the player's territory.
        const OWNED = 1;
        /// Already taken by a field or reserved for one.
        const FARMED = 2;
        /// Reachable over land from the player's headquarters.
        const REACHABLE = 4;
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Node {
    pub resource: TileResource,
    pub flags: NodeFlags,
}

impl Node {
    #[inline]
    pub fn owned(&self) -> bool {
        self.flags.contains(NodeFlags::OWNED)
    }

    #[inline]
    pub fn farmed(&self) -> bool {
        self.flags.contains(NodeFlags::FARMED)
    }

    #[inline]
    pub fn reachable(&self) -> bool {
        self.flags.contains(NodeFlags::REACHABLE)
    }
}

/// One `Node` per tile, indexed like the grid.
#[derive(Clone, Debug)]
pub struct NodeTable {
    extent: MapExtent,
    nodes: Vec<Node>,
}

impl NodeTable {
    pub fn new(extent: MapExtent) -> Self {
        NodeTable {
            extent,
            nodes: vec![Node::default(); extent.tile_count()],
        }
    }

    pub fn from_nodes(extent: MapExtent, nodes: Vec<Node>) -> Result<Self, GridError> {
        if nodes.len() != extent.tile_count() {
            return Err(GridError::ExtentMismatch {
                expected: extent.tile_count(),
                actual: nodes.len(),
            });
        }
        Ok(NodeTable { extent, nodes })
    }

    /// Classify every tile from the grid's surface and subsurface resources.
    /// Flags start cleared.
    pub fn classify<G: GridService>(grid: &G) -> Self {
        let extent = grid.extent();
        let nodes = extent
            .points()
            .map(|pt| Node {
                resource: TileResource::from_layers(
                    grid.surface_resource(pt),
                    grid.subsurface_resource(pt),
                ),
                flags: NodeFlags::NONE,
            })
            .collect();

        NodeTable { extent, nodes }
    }

    pub fn extent(&self) -> MapExtent {
        self.extent
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> &Node {
        &self.nodes[index]
    }

    #[inline]
    pub fn at(&self, pt: MapPoint) -> &Node {
        &self.nodes[self.extent.index_of(pt)]
    }

    fn node_mut(&mut self, pt: MapPoint) -> Result<&mut Node, GridError> {
        if !self.extent.contains(pt) {
            return Err(GridError::OutOfBounds(pt));
        }
        let index = self.extent.index_of(pt);
        Ok(&mut self.nodes[index])
    }

    pub fn set_resource(&mut self, pt: MapPoint, resource: TileResource) -> Result<(), GridError> {
        self.node_mut(pt)?.resource = resource;
        Ok(())
    }

    pub fn set_flag(&mut self, pt: MapPoint, flag: NodeFlags, value: bool) -> Result<(), GridError> {
        self.node_mut(pt)?.flags.set(flag, value);
        Ok(())
    }

    pub fn set_owned(&mut self, pt: MapPoint, owned: bool) -> Result<(), GridError> {
        self.set_flag(pt, NodeFlags::OWNED, owned)
    }

    pub fn set_farmed(&mut self, pt: MapPoint, farmed: bool) -> Result<(), GridError> {
        self.set_flag(pt, NodeFlags::FARMED, farmed)
    }

    /// Recompute `REACHABLE` by flooding useable terrain from `start`.
    /// Returns the number of reachable tiles, zero when `start` itself is
    /// not useable.
    pub fn mark_reachable_from<G: GridService>(
        &mut self,
        grid: &G,
        start: MapPoint,
    ) -> Result<usize, GridError> {
        if !self.extent.contains(start) {
            return Err(GridError::OutOfBounds(start));
        }
        if grid.tile_count() != self.nodes.len() {
            return Err(GridError::ExtentMismatch {
                expected: self.nodes.len(),
                actual: grid.tile_count(),
            });
        }

        for node in self.nodes.iter_mut() {
            node.flags.remove(NodeFlags::REACHABLE);
        }

        // Nothing is reachable from a tile units cannot stand on.
        if !grid.terrain_is_useable(start) {
            debug!("Reachability start {:?} is not useable terrain", start);
            return Ok(0);
        }

        let mut count = 0;
        let reachable = bfs_reach(start, move |pt| {
            grid.neighbors(*pt)
                .into_iter()
                .filter(move |n| grid.terrain_is_useable(*n))
        });
        for pt in reachable {
            let index = grid.index_of(pt);
            self.nodes[index].flags.insert(NodeFlags::REACHABLE);
            count += 1;
        }

        debug!(
            "Marked {} of {} tiles reachable from {:?}",
            count,
            self.nodes.len(),
            start
        );

        Ok(count)
    }
}
