//! Trait vocabularies read from configuration files.

use super::dedup_labels;
use serde::{Deserialize, Serialize};

/// Affinity and family vocabularies used to generate creatures.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraitCatalog {
    pub affinity: Vec<String>,
    pub family: Vec<String>,
}

impl TraitCatalog {
    pub fn new<A, F, S, T>(affinity: A, family: F) -> Self
    where
        A: IntoIterator<Item = S>,
        F: IntoIterator<Item = T>,
        S: Into<String>,
        T: Into<String>,
    {
        Self {
            affinity: dedup_labels(affinity),
            family: dedup_labels(family),
        }
    }

    /// Drops repeated labels so every pool holds distinct values.
    pub fn normalized(self) -> Self {
        Self::new(self.affinity, self.family)
    }
}

/// Affinities associated with one region type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionRecord {
    pub name: String,
    pub affinities: Vec<String>,
}

/// The `{"region": [...]}` catalog of region-type affinities.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionCatalog {
    pub region: Vec<RegionRecord>,
}

impl RegionCatalog {
    pub fn find(&self, region_type: &str) -> Option<&RegionRecord> {
        self.region.iter().find(|r| r.name == region_type)
    }
}
