//! Per-resource desirability map.
//!
//! Each tile carrying the map's resource adds a tent-shaped contribution
//! around itself: `radius` at the tile, falling off by one per step of
//! distance. Competing buildings subtract the same shape with their own
//! radius and weight. The two searches read the resulting scores together
//! with the live tile state to pick a building spot.

use crate::buildings::*;
use crate::constants::MAX_RADIUS;
use crate::grid::GridService;
use crate::location::*;
use crate::nodes::NodeTable;
use crate::resource::*;
use crate::settings::*;
use log::*;

pub struct ResourceMap<'a, G: GridService> {
    kind: ResourceKind,
    radius: u32,
    grid: &'a G,
    nodes: &'a NodeTable,
    settings: ResourceMapSettings,
    scores: Vec<i32>,
}

impl<'a, G: GridService> ResourceMap<'a, G> {
    pub fn new(kind: ResourceKind, grid: &'a G, nodes: &'a NodeTable) -> Self {
        Self::with_radius(kind, kind.radius(), grid, nodes)
    }

    /// Use a seed radius other than the kind's default.
    pub fn with_radius(kind: ResourceKind, radius: u32, grid: &'a G, nodes: &'a NodeTable) -> Self {
        assert_eq!(
            grid.tile_count(),
            nodes.len(),
            "node table does not match the grid"
        );

        ResourceMap {
            kind,
            radius,
            grid,
            nodes,
            settings: ResourceMapSettings::default(),
            scores: Vec::new(),
        }
    }

    pub fn with_settings(mut self, settings: ResourceMapSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn kind(&self) -> ResourceKind {
        self.kind
    }

    pub fn radius(&self) -> u32 {
        self.radius
    }

    pub fn settings(&self) -> &ResourceMapSettings {
        &self.settings
    }

    /// Scores indexed like the grid. Empty until the first `init`.
    pub fn scores(&self) -> &[i32] {
        &self.scores
    }

    pub fn score(&self, pt: MapPoint) -> i32 {
        self.scores[self.grid.index_of(pt)]
    }

    /// Rebuild the scores from the tile classification alone.
    pub fn init(&mut self) {
        let tile_count = self.grid.tile_count();

        self.scores.clear();
        self.scores.resize(tile_count, 0);

        let mut seeded = 0;
        for index in 0..tile_count {
            let pt = self.grid.point_at(index);
            if self.is_seed(pt, self.nodes.get(index).resource) {
                self.change(pt, 1);
                seeded += 1;
            }
        }

        debug!(
            "{:?} map: seeded {} of {} tiles (radius {})",
            self.kind, seeded, tile_count, self.radius
        );
    }

    /// Whether a tile contributes a unit seed to this map. A tile seeds at
    /// most once, whichever rule matches it.
    fn is_seed(&self, pt: MapPoint, resource: TileResource) -> bool {
        let kind = self.kind;

        match resource {
            TileResource::Single(res) if res == kind && kind == ResourceKind::Fish => true,
            TileResource::Single(res) if res == kind && kind != ResourceKind::Borderland => {
                self.grid.terrain_is_useable(pt)
            }
            TileResource::Multiple {
                subsurface,
                surface,
            } if subsurface == Some(kind) || surface == Some(kind) => {
                self.grid.terrain_is_useable(pt)
            }
            // Impassable border tiles do not count.
            _ if kind == ResourceKind::Borderland => {
                self.grid.is_border(pt) && self.grid.terrain_is_useable(pt)
            }
            _ => false,
        }
    }

    /// `init`, then lower the rating around competing buildings.
    pub fn recalc<B: BuildingRegistry + ?Sized>(&mut self, registry: &B) {
        self.init();

        let rules: Vec<SuppressionRule> = self.settings.rules_for(self.kind).copied().collect();
        for rule in rules {
            self.adjust_rating_for_buildings(registry, rule.building, rule.radius, rule.value);
        }
    }

    /// Apply `change_with_radius` at every building and building site of
    /// `building` for every player. Returns how many were applied.
    pub fn adjust_rating_for_buildings<B: BuildingRegistry + ?Sized>(
        &mut self,
        registry: &B,
        building: BuildingType,
        radius: u32,
        value: i32,
    ) -> usize {
        let mut applied = 0;

        for player in 0..registry.player_count() {
            for pos in registry.buildings_of_type(player, building) {
                self.change_with_radius(pos, radius, value);
                applied += 1;
            }
            for site in registry.building_sites(player) {
                if site.building_type == building {
                    self.change_with_radius(site.position, radius, value);
                    applied += 1;
                }
            }
        }

        trace!(
            "{:?} map: {} x {:?} adjusted by {} within {}",
            self.kind,
            applied,
            building,
            value,
            radius
        );

        applied
    }

    /// Add `value` around `center` with this map's seed radius.
    #[inline]
    pub fn change(&mut self, center: MapPoint, value: i32) {
        self.change_with_radius(center, self.radius, value);
    }

    /// Add `value * (radius - distance)` to every tile closer than `radius`.
    ///
    /// Panics if `radius` exceeds `MAX_RADIUS`. Sums saturate at the `i32`
    /// bounds.
    pub fn change_with_radius(&mut self, center: MapPoint, radius: u32, value: i32) {
        assert!(
            radius <= MAX_RADIUS,
            "radius {} exceeds {}",
            radius,
            MAX_RADIUS
        );

        let grid = self.grid;
        let scores = &mut self.scores;
        let weight = |steps: u32| value.saturating_mul(steps as i32);

        let index = grid.index_of(center);
        scores[index] = scores[index].saturating_add(weight(radius));
        if radius <= 1 {
            return;
        }

        grid.for_each_in_radius(center, radius - 1, |pt, distance| {
            let index = grid.index_of(pt);
            scores[index] = scores[index].saturating_add(weight(radius - distance));
        });
    }

    fn check_query(&self, center: MapPoint) {
        assert!(
            self.grid.extent().contains(center),
            "search center {:?} outside the map",
            center
        );
        debug_assert_eq!(
            self.scores.len(),
            self.grid.tile_count(),
            "resource map queried before init"
        );
    }

    /// First tile around `center` (in enumeration order) scoring at least
    /// `threshold` that can take a building of `size`.
    pub fn find_good_position(
        &self,
        center: MapPoint,
        threshold: i32,
        size: BuildingQuality,
        radius: Option<u32>,
        in_territory: bool,
    ) -> Option<MapPoint> {
        self.check_query(center);

        let radius = radius.unwrap_or(self.settings.default_search_radius);

        let found = self
            .grid
            .points_in_radius(center, radius)
            .into_iter()
            .find(|&pt| {
                let index = self.grid.index_of(pt);
                if self.scores[index] < threshold {
                    return false;
                }

                let node = self.nodes.get(index);
                if (in_territory && !node.owned()) || node.farmed() {
                    return false;
                }

                self.grid.building_quality(pt).can_host(size)
            });

        trace!(
            "{:?} map: good position near {:?} (>= {}): {:?}",
            self.kind,
            center,
            threshold,
            found
        );

        found
    }

    /// Highest-scoring reachable tile around `center` that can take a
    /// building of `size`, if its score is at least `minimum`. Equal scores
    /// keep the first tile enumerated.
    pub fn find_best_position(
        &self,
        center: MapPoint,
        size: BuildingQuality,
        minimum: i32,
        radius: Option<u32>,
        in_territory: bool,
    ) -> Option<MapPoint> {
        self.check_query(center);

        let radius = radius.unwrap_or(self.settings.default_search_radius);
        let mut best: Option<(MapPoint, i32)> = None;

        for pt in self.grid.points_in_radius(center, radius) {
            let index = self.grid.index_of(pt);
            let score = self.scores[index];
            if best.is_some_and(|(_, best_score)| score <= best_score) {
                continue;
            }

            let node = self.nodes.get(index);
            if !node.reachable() || (in_territory && !node.owned()) || node.farmed() {
                continue;
            }

            if self.grid.building_quality(pt).can_host(size) {
                best = Some((pt, score));
            }
        }

        trace!(
            "{:?} map: best position near {:?}: {:?} (minimum {})",
            self.kind,
            center,
            best,
            minimum
        );

        best.filter(|&(_, score)| score >= minimum).map(|(pt, _)| pt)
    }
}
