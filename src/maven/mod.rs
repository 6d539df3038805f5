pub mod coordinate;
pub mod version_map;

pub use coordinate::Coordinate;
pub use version_map::{PinnedDependency, VersionMap};
