use crate::buildings::BuildingType;
use crate::constants::*;
use crate::grid::GridError;
use crate::resource::ResourceKind;
use serde::{Deserialize, Serialize};

/// Lowers the rating of one resource map around every building of a type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuppressionRule {
    pub resource: ResourceKind,
    pub building: BuildingType,
    pub radius: u32,
    pub value: i32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourceMapSettings {
    pub default_search_radius: u32,
    pub suppression: Vec<SuppressionRule>,
}

impl Default for ResourceMapSettings {
    fn default() -> Self {
        ResourceMapSettings {
            default_search_radius: DEFAULT_SEARCH_RADIUS,
            suppression: default_suppression(),
        }
    }
}

fn default_suppression() -> Vec<SuppressionRule> {
    vec![
        SuppressionRule {
            resource: ResourceKind::Wood,
            building: BuildingType::Woodcutter,
            radius: WOODCUTTER_SUPPRESSION_RADIUS,
            value: WOODCUTTER_SUPPRESSION_VALUE,
        },
        SuppressionRule {
            resource: ResourceKind::PlantSpace,
            building: BuildingType::Farm,
            radius: FARM_SUPPRESSION_RADIUS,
            value: PLANT_SPACE_SUPPRESSION_VALUE,
        },
        SuppressionRule {
            resource: ResourceKind::PlantSpace,
            building: BuildingType::Forester,
            radius: FORESTER_SUPPRESSION_RADIUS,
            value: PLANT_SPACE_SUPPRESSION_VALUE,
        },
    ]
}

impl ResourceMapSettings {
    /// Parse settings, rejecting suppression radii above `MAX_RADIUS`.
    pub fn from_json(json: &str) -> Result<Self, GridError> {
        let settings: ResourceMapSettings = serde_json::from_str(json)?;
        if let Some(rule) = settings.suppression.iter().find(|r| r.radius > MAX_RADIUS) {
            return Err(GridError::RadiusTooLarge(rule.radius));
        }
        Ok(settings)
    }

    /// Rules that apply to maps of `kind`, in declaration order.
    pub fn rules_for(&self, kind: ResourceKind) -> impl Iterator<Item = &SuppressionRule> {
        self.suppression.iter().filter(move |r| r.resource == kind)
    }
}
