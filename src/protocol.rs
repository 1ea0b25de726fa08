mod collation;
pub mod wire;

pub use collation::Collation;
