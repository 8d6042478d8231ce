//! # Bestiary Core
//!
//! Procedural generation of creature species for a game bestiary.
//!
//! This crate contains the deterministic generators:
//! - Random sampling primitives (uniform picks, inverse-weighted branch counts)
//! - Three-stage lineage chains with trait inheritance
//! - Region derivation, merging and affinity lookup
//! - Branching taxonomy graphs
//! - Regional predator/prey food webs
//!
//! Every builder takes the random generator explicitly, so a run is fully
//! reproducible from its seed.
//!
//! ## Example
//!
//! ```
//! use bestiary_core::lineage::{build_chain, ChainParams};
//! use bestiary_core::rng;
//! use bestiary_data::TraitCatalog;
//!
//! let catalog = TraitCatalog::new(["Fire", "Water", "Earth"], ["Feline", "Canine"]);
//! let mut rng = rng::seeded(42);
//! let chain = build_chain(&mut rng, &catalog, &ChainParams::default()).unwrap();
//! assert_eq!(chain.base().primary_affinity(), chain.final_stage().primary_affinity());
//! ```

/// Generator configuration loaded from TOML
pub mod config;
/// Error taxonomy shared by all generators
pub mod error;
/// Regional predator/prey food webs
pub mod food_web;
/// Arena-backed directed multigraph of creatures
pub mod graph;
/// Connectivity map of the island's regions
pub mod island;
/// Three-stage evolutionary chains
pub mod lineage;
/// Logging setup and per-run counters
pub mod metrics;
/// Region derivation, merging and catalog lookup
pub mod region;
/// Seeded random generator construction
pub mod rng;
/// Random sampling primitives
pub mod sampling;
/// Branching evolutionary taxonomies
pub mod taxonomy;

pub use config::BestiaryConfig;
pub use error::{GenError, Result};
pub use food_web::{build_food_web, FoodWeb, FoodWebParams, Hunt};
pub use graph::{SpeciesGraph, SpeciesNode};
pub use island::{simple_island, IslandMap};
pub use lineage::{build_chain, generate_chains, ChainParams};
pub use metrics::{init_logging, GenerationMetrics};
pub use region::{
    derive_region, lookup_affinities, lookup_region, merge_affinities, AffinityLookup,
    NotFoundWarning,
};
pub use taxonomy::{generate_taxonomy, Taxonomy, TaxonomyParams};
