pub mod parser;
pub mod tiles;
pub mod world;

pub use parser::{parse_layout, read_map, Layout};
pub use tiles::TileMap;
pub use world::World;
