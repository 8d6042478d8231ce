//! # Bestiary IO
//!
//! Collaborators that move generated data in and out of the process:
//! - Structured I/O errors
//! - JSON trait and region catalogs
//! - CSV rows for chains and food-web rosters
//! - Graphviz DOT text for taxonomies, food webs and the island map

/// CSV row export
pub mod csv;
/// Graphviz DOT export
pub mod dot;
/// Error types and result aliases for I/O operations
pub mod error;
/// JSON helpers and catalog loading
pub mod serialization;

pub use csv::{chain_rows, chains_csv, food_web_csv, CHAIN_HEADER, ROSTER_HEADER};
pub use dot::{food_web_to_dot, island_to_dot, taxonomy_to_dot};
pub use error::{IoError, Result};
pub use serialization::{
    from_json, parse_trait_catalog, read_json_file, read_region_catalog, read_trait_catalog,
    to_json_pretty, write_text_file,
};
