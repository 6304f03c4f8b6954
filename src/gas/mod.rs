//! 가스 조성 및 GERG-2008 물성 경계 모듈 모음.

pub mod composition;
pub mod gerg;

pub use composition::{CompositionError, ComponentShare, GasComposition};
pub use gerg::{calculate_from_pt, GasPropertyError, GasState, Gerg2008Source, PropertySource};
