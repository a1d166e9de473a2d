pub mod pack;
pub mod scene;

pub use pack::{pack_lane, LaneLayout, PackedTask};
pub use scene::{Item, LaneBlock, LaneHeader, Scene, TaskBox};
