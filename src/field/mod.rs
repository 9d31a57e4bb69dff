//! Per-attribute mapping metadata.

mod descriptor;
pub mod logic;
mod strategy;
mod ty;

pub use descriptor::*;
pub use logic::{resolve_logic_delete, LogicMarkers, LogicState};
pub use strategy::*;
pub use ty::*;
