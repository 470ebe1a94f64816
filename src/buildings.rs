use crate::location::*;
use fnv::FnvHashMap;
use serde::{Deserialize, Serialize};

/// How large a building a tile can take.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub enum BuildingQuality {
    Nothing,
    Flag,
    Hut,
    House,
    Castle,
    Mine,
    Harbor,
}

impl BuildingQuality {
    /// Whether a tile of this quality can host a building of class `size`.
    pub fn can_host(self, size: BuildingQuality) -> bool {
        match size {
            BuildingQuality::Nothing => true,
            BuildingQuality::Flag => self != BuildingQuality::Nothing,
            BuildingQuality::Mine => self == BuildingQuality::Mine,
            BuildingQuality::Harbor => self == BuildingQuality::Harbor,
            BuildingQuality::Hut | BuildingQuality::House | BuildingQuality::Castle => {
                self != BuildingQuality::Mine && self >= size
            }
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum BuildingType {
    Headquarters,
    Woodcutter,
    Forester,
    Farm,
    Fishery,
    Quarry,
    GoldMine,
    IronMine,
    CoalMine,
    GraniteMine,
    Barracks,
    Guardhouse,
}

/// A building under construction.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct BuildingSite {
    pub position: MapPoint,
    pub building_type: BuildingType,
}

/// Read-only view of every player's buildings.
pub trait BuildingRegistry {
    fn player_count(&self) -> usize;

    /// Positions of finished buildings of `building_type` owned by `player`.
    fn buildings_of_type(&self, player: usize, building_type: BuildingType) -> Vec<MapPoint>;

    /// All building sites owned by `player`, whatever they will become.
    fn building_sites(&self, player: usize) -> Vec<BuildingSite>;
}

#[derive(Clone, Default, Debug)]
struct PlayerEntry {
    buildings: FnvHashMap<BuildingType, Vec<MapPoint>>,
    sites: Vec<BuildingSite>,
}

/// In-memory building registry.
#[derive(Clone, Default, Debug)]
pub struct PlayerBuildings {
    players: Vec<PlayerEntry>,
}

impl PlayerBuildings {
    pub fn new(player_count: usize) -> Self {
        PlayerBuildings {
            players: vec![PlayerEntry::default(); player_count],
        }
    }

    fn player_mut(&mut self, player: usize) -> &mut PlayerEntry {
        if player >= self.players.len() {
            self.players.resize_with(player + 1, PlayerEntry::default);
        }
        &mut self.players[player]
    }

    pub fn add_building(&mut self, player: usize, building_type: BuildingType, position: MapPoint) {
        self.player_mut(player)
            .buildings
            .entry(building_type)
            .or_default()
            .push(position);
    }

    pub fn add_site(&mut self, player: usize, building_type: BuildingType, position: MapPoint) {
        self.player_mut(player).sites.push(BuildingSite {
            position,
            building_type,
        });
    }
}

impl BuildingRegistry for PlayerBuildings {
    fn player_count(&self) -> usize {
        self.players.len()
    }

    fn buildings_of_type(&self, player: usize, building_type: BuildingType) -> Vec<MapPoint> {
        self.players
            .get(player)
            .and_then(|p| p.buildings.get(&building_type))
            .cloned()
            .unwrap_or_default()
    }

    fn building_sites(&self, player: usize) -> Vec<BuildingSite> {
        self.players
            .get(player)
            .map(|p| p.sites.clone())
            .unwrap_or_default()
    }
}
