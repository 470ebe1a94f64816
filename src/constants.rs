/// Search radius used when a position query does not name one.
pub const DEFAULT_SEARCH_RADIUS: u32 = 30;

/// Decay radius of the seed contribution for each resource kind.
pub const RADIUS_MINERAL: u32 = 2;
pub const RADIUS_PLANT_SPACE: u32 = 3;
pub const RADIUS_BORDERLAND: u32 = 5;
pub const RADIUS_WOOD: u32 = 8;
pub const RADIUS_STONES: u32 = 8;
pub const RADIUS_FISH: u32 = 5;

/// Existing woodcutters push new ones away.
pub const WOODCUTTER_SUPPRESSION_RADIUS: u32 = 7;
pub const WOODCUTTER_SUPPRESSION_VALUE: i32 = -10;

/// Farms and foresters both consume plant space.
pub const FARM_SUPPRESSION_RADIUS: u32 = 3;
pub const FORESTER_SUPPRESSION_RADIUS: u32 = 6;
pub const PLANT_SPACE_SUPPRESSION_VALUE: i32 = -25;

/// Largest seed or suppression radius a map accepts. Grid coordinates are
/// 16 bit, so nothing beyond this is ever reached.
pub const MAX_RADIUS: u32 = u16::MAX as u32;
