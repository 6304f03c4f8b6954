//! ASME PTC 10-1997 기반 전압/정압·전온/정온 보정식 모음.

pub mod pressure;
pub mod temperature;

pub use pressure::*;
pub use temperature::*;
