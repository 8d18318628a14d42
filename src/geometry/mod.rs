mod angle;
mod angle_range;
pub(crate) mod sweep;

pub use angle::Angle;
pub use angle_range::AngleRange;
