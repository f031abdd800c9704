pub mod collisions;
pub mod goodness_of_fit;
pub mod util;

pub use collisions::collisions;
