//! # Bestiary Data
//!
//! Plain data types shared by the generators and the export layer.
//!
//! Nothing in this crate draws random numbers; builders in `bestiary_core`
//! create these values and `bestiary_io` serializes them.

pub mod data;

pub use data::catalog::{RegionCatalog, RegionRecord, TraitCatalog};
pub use data::creature::{
    Creature, CreatureChain, CreatureId, PathSelection, ProgressionPath, Role, Stage, TraitPair,
};
pub use data::error::ValidationError;
pub use data::region::Region;
