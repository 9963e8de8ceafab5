/// Texture dimension planning.
pub mod dimensions;
