use crate::constants::*;
use serde::{Deserialize, Serialize};

/// A resource or pseudo-resource the AI keeps a desirability map for.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum ResourceKind {
    Gold,
    IronOre,
    Coal,
    Granite,
    PlantSpace,
    Borderland,
    Wood,
    Stones,
    Fish,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 9] = [
        ResourceKind::Gold,
        ResourceKind::IronOre,
        ResourceKind::Coal,
        ResourceKind::Granite,
        ResourceKind::PlantSpace,
        ResourceKind::Borderland,
        ResourceKind::Wood,
        ResourceKind::Stones,
        ResourceKind::Fish,
    ];

    /// Decay radius of a single seed contribution.
    pub fn radius(self) -> u32 {
        match self {
            ResourceKind::Gold
            | ResourceKind::IronOre
            | ResourceKind::Coal
            | ResourceKind::Granite => RADIUS_MINERAL,
            ResourceKind::PlantSpace => RADIUS_PLANT_SPACE,
            ResourceKind::Borderland => RADIUS_BORDERLAND,
            ResourceKind::Wood => RADIUS_WOOD,
            ResourceKind::Stones => RADIUS_STONES,
            ResourceKind::Fish => RADIUS_FISH,
        }
    }
}

/// What the AI sees on a single tile.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
pub enum TileResource {
    #[default]
    Nothing,
    Single(ResourceKind),
    /// A tile carrying distinct resources above and below ground.
    Multiple {
        subsurface: Option<ResourceKind>,
        surface: Option<ResourceKind>,
    },
}

impl TileResource {
    /// Classify a tile from its raw surface and subsurface resources.
    pub fn from_layers(surface: Option<ResourceKind>, subsurface: Option<ResourceKind>) -> Self {
        match (surface, subsurface) {
            (None, None) => TileResource::Nothing,
            (Some(kind), None) | (None, Some(kind)) => TileResource::Single(kind),
            (Some(a), Some(b)) if a == b => TileResource::Single(a),
            (surface, subsurface) => TileResource::Multiple {
                subsurface,
                surface,
            },
        }
    }
}
