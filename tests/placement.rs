//! End-to-end placement scenarios: build a small world, classify it, and
//! drive the resource maps the way the AI does every few decision cycles.

use ai_resource_map::*;

const HQ: (u16, u16) = (10, 10);

/// A 24x24 world: a forest in the north-west, a lake in the east with fish,
/// a mountain with coal and granite in the south, territory of radius 8
/// around the headquarters.
fn build_world() -> WorldGrid {
    let mut grid = WorldGrid::new(MapExtent::new(24, 24), Topology::Bounded).unwrap();

    for y in 2..7 {
        for x in 2..7 {
            grid.set_surface_resource(MapPoint::new(x, y), Some(ResourceKind::Wood))
                .unwrap();
        }
    }

    for y in 8..13 {
        for x in 19..23 {
            let pt = MapPoint::new(x, y);
            grid.set_terrain(pt, TerrainFlags::WATER).unwrap();
            grid.set_building_quality(pt, BuildingQuality::Nothing)
                .unwrap();
            grid.set_surface_resource(pt, Some(ResourceKind::Fish)).unwrap();
        }
    }

    for y in 19..22 {
        for x in 8..12 {
            let pt = MapPoint::new(x, y);
            grid.set_terrain(pt, TerrainFlags::MOUNTAIN).unwrap();
            grid.set_building_quality(pt, BuildingQuality::Mine).unwrap();
            grid.set_subsurface_resource(pt, Some(ResourceKind::Coal))
                .unwrap();
        }
    }
    grid.set_surface_resource(MapPoint::new(9, 20), Some(ResourceKind::Granite))
        .unwrap();

    let hq = MapPoint::new(HQ.0, HQ.1);
    for pt in grid.extent().points().collect::<Vec<_>>() {
        if pt.distance_to(hq) == 8 {
            grid.set_border(pt, true).unwrap();
        }
    }

    grid
}

fn classify(grid: &WorldGrid) -> NodeTable {
    let hq = MapPoint::new(HQ.0, HQ.1);
    let mut nodes = NodeTable::classify(grid);
    for pt in grid.extent().points() {
        if pt.distance_to(hq) <= 8 {
            nodes.set_owned(pt, true).unwrap();
        }
    }
    nodes.mark_reachable_from(grid, hq).unwrap();
    nodes
}

#[test]
fn woodcutter_goes_into_the_forest() {
    let grid = build_world();
    let nodes = classify(&grid);
    let registry = PlayerBuildings::new(1);

    let mut wood = ResourceMap::new(ResourceKind::Wood, &grid, &nodes);
    wood.recalc(&registry);

    let hq = MapPoint::new(HQ.0, HQ.1);
    let spot = wood
        .find_best_position(hq, BuildingQuality::Hut, 20, None, true)
        .expect("forest lies inside the territory");

    assert_eq!(spot, MapPoint::new(4, 4));
    assert!(nodes.at(spot).owned());
}

#[test]
fn second_woodcutter_moves_away_from_the_first() {
    let grid = build_world();
    let nodes = classify(&grid);
    let mut registry = PlayerBuildings::new(2);

    let mut wood = ResourceMap::new(ResourceKind::Wood, &grid, &nodes);
    wood.recalc(&registry);
    let before = wood.scores().to_vec();

    let first = MapPoint::new(4, 4);
    registry.add_site(0, BuildingType::Woodcutter, first);
    wood.recalc(&registry);

    for pt in grid.extent().points() {
        let d = pt.distance_to(first);
        let expected = if d < 7 { -10 * (7 - d as i32) } else { 0 };
        assert_eq!(
            wood.score(pt) - before[grid.index_of(pt)],
            expected,
            "at {:?}",
            pt
        );
    }

    let hq = MapPoint::new(HQ.0, HQ.1);
    let second = wood.find_best_position(hq, BuildingQuality::Hut, 0, None, true);
    assert_ne!(second, Some(first));
}

#[test]
fn fishery_stays_on_land_next_to_the_lake() {
    let grid = build_world();
    let nodes = classify(&grid);

    let mut fish = ResourceMap::new(ResourceKind::Fish, &grid, &nodes);
    fish.init();

    let spot = fish
        .find_good_position(MapPoint::new(16, 10), 15, BuildingQuality::Hut, Some(6), false)
        .expect("shore tiles score well");

    assert!(grid.terrain_is_useable(spot));
    assert!(fish.score(spot) >= 15);
    assert!(spot.distance_to(MapPoint::new(16, 10)) <= 6);
}

#[test]
fn mines_need_mine_quality() {
    let grid = build_world();
    let nodes = classify(&grid);

    let mut coal = ResourceMap::new(ResourceKind::Coal, &grid, &nodes);
    coal.init();

    let hq = MapPoint::new(HQ.0, HQ.1);
    assert!(coal
        .find_good_position(hq, 1, BuildingQuality::Mine, None, true)
        .is_none());

    let spot = coal
        .find_best_position(hq, BuildingQuality::Mine, 1, None, false)
        .expect("the mountain is reachable");
    assert_eq!(grid.building_quality(spot), BuildingQuality::Mine);

    let mut granite = ResourceMap::new(ResourceKind::Granite, &grid, &nodes);
    granite.init();
    assert_eq!(granite.score(MapPoint::new(9, 20)), 2);
    assert_eq!(granite.score(MapPoint::new(10, 21)), 1);
}

#[test]
fn borderland_follows_the_border() {
    let grid = build_world();
    let nodes = classify(&grid);

    let mut border = ResourceMap::new(ResourceKind::Borderland, &grid, &nodes);
    border.init();

    let hq = MapPoint::new(HQ.0, HQ.1);
    assert_eq!(border.score(hq), 0);
    assert!(border.score(MapPoint::new(18, 10)) > border.score(MapPoint::new(17, 10)));
    assert!(border.score(MapPoint::new(18, 2)) >= 5);
}

#[test]
fn maps_are_independent() {
    let grid = build_world();
    let nodes = classify(&grid);
    let mut registry = PlayerBuildings::new(1);
    registry.add_building(0, BuildingType::Farm, MapPoint::new(14, 14));

    let mut maps: Vec<_> = ResourceKind::ALL
        .iter()
        .map(|&kind| ResourceMap::new(kind, &grid, &nodes))
        .collect();
    for map in maps.iter_mut() {
        map.recalc(&registry);
    }

    let plant = maps
        .iter()
        .find(|m| m.kind() == ResourceKind::PlantSpace)
        .unwrap();
    assert_eq!(plant.score(MapPoint::new(14, 14)), -75);

    let wood = maps
        .iter()
        .find(|m| m.kind() == ResourceKind::Wood)
        .unwrap();
    assert_eq!(wood.score(MapPoint::new(14, 14)), 0);
}

#[test]
fn wrapping_world_spreads_across_the_edge() {
    let mut grid = WorldGrid::new(MapExtent::new(12, 12), Topology::Wrapping).unwrap();
    grid.set_surface_resource(MapPoint::new(0, 0), Some(ResourceKind::Stones))
        .unwrap();
    let nodes = NodeTable::classify(&grid);

    let mut stones = ResourceMap::new(ResourceKind::Stones, &grid, &nodes);
    stones.init();

    assert_eq!(stones.score(MapPoint::new(0, 0)), 8);
    assert_eq!(stones.score(MapPoint::new(11, 11)), 7);
    assert_eq!(stones.score(MapPoint::new(6, 0)), 2);
}
