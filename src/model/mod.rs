pub mod task;
pub mod timeline;

pub use task::TaskRecord;
pub use timeline::{TimeAxis, RANGE_EPSILON};
