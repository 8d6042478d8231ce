//! Bestiary generator: seeded creature lineages, taxonomies, food webs and
//! island maps, exported as CSV and Graphviz DOT.

pub mod app;

pub use app::{run, Artifact, Bestiary, RunSummary, Target};
