pub mod buildings;
pub mod constants;
pub mod grid;
pub mod location;
pub mod nodes;
pub mod resource;
pub mod resource_map;
pub mod settings;
pub mod terrain;
pub mod world;

pub use buildings::*;
pub use grid::*;
pub use location::*;
pub use nodes::*;
pub use resource::*;
pub use resource_map::*;
pub use settings::*;
pub use terrain::*;
pub use world::*;
