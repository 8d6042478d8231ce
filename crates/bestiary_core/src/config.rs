//! Configuration for generation runs.
//!
//! Maps to a `bestiary.toml` file. Every section is optional and falls back
//! to its `Default` impl.
//!
//! ## Example `bestiary.toml`
//!
//! ```toml
//! seed = 420
//!
//! [chains]
//! count = 100
//! progression_path = "Random"
//! secondary_affinity_chance = 0.5
//! secondary_family_chance = 0.5
//!
//! [taxonomy]
//! num_base = 1
//! max_middle_branches = 2
//! max_final_branches = 8
//!
//! [food_web]
//! region = "Meadow"
//! num_creatures = 10
//! ```

use crate::error::{GenError, Result};
use crate::food_web::FoodWebParams;
use crate::lineage::ChainParams;
use crate::rng::DEFAULT_SEED;
use crate::taxonomy::{TaxonomyParams, MAX_BRANCHES};
use bestiary_data::PathSelection;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Where catalogs are read from and outputs written to.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct DataConfig {
    pub traits_file: PathBuf,
    pub regions_file: PathBuf,
    pub output_dir: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            traits_file: PathBuf::from("res/creature_traits.json"),
            regions_file: PathBuf::from("res/region_affinities.json"),
            output_dir: PathBuf::from("out"),
        }
    }
}

/// Batch of random chains.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ChainsConfig {
    pub count: usize,
    pub progression_path: PathSelection,
    pub secondary_affinity_chance: f64,
    pub secondary_family_chance: f64,
}

impl Default for ChainsConfig {
    fn default() -> Self {
        Self {
            count: 100,
            progression_path: PathSelection::Random,
            secondary_affinity_chance: 0.5,
            secondary_family_chance: 0.5,
        }
    }
}

impl ChainsConfig {
    pub fn params(&self) -> ChainParams {
        ChainParams {
            progression_path: self.progression_path,
            secondary_affinity_chance: self.secondary_affinity_chance,
            secondary_family_chance: self.secondary_family_chance,
            name_prefix: String::new(),
        }
    }
}

/// Food web for one region type of the catalog.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct FoodWebConfig {
    pub region: String,
    pub num_creatures: usize,
    pub prey_families: Vec<String>,
    pub middle_families: Vec<String>,
    pub apex_families: Vec<String>,
}

impl Default for FoodWebConfig {
    fn default() -> Self {
        let params = FoodWebParams::default();
        Self {
            region: "Meadow".to_string(),
            num_creatures: params.num_creatures,
            prey_families: params.prey_families,
            middle_families: params.middle_families,
            apex_families: params.apex_families,
        }
    }
}

impl FoodWebConfig {
    pub fn params(&self) -> FoodWebParams {
        FoodWebParams {
            num_creatures: self.num_creatures,
            prey_families: self.prey_families.clone(),
            middle_families: self.middle_families.clone(),
            apex_families: self.apex_families.clone(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct BestiaryConfig {
    pub seed: u64,
    pub data: DataConfig,
    pub chains: ChainsConfig,
    pub taxonomy: TaxonomyParams,
    pub food_web: FoodWebConfig,
}

impl Default for BestiaryConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            data: DataConfig::default(),
            chains: ChainsConfig::default(),
            taxonomy: TaxonomyParams::default(),
            food_web: FoodWebConfig::default(),
        }
    }
}

impl BestiaryConfig {
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| GenError::config(format!("invalid TOML: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads `path`, falling back to defaults when the file does not exist.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(content) => Self::from_toml(&content),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::warn!(path = %path.display(), "Config file missing, using defaults");
                Ok(Self::default())
            }
            Err(e) => Err(GenError::config(format!(
                "reading {}: {e}",
                path.display()
            ))),
        }
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string(self).map_err(|e| GenError::config(format!("serializing config: {e}")))
    }

    pub fn validate(&self) -> Result<()> {
        for chance in [
            self.chains.secondary_affinity_chance,
            self.chains.secondary_family_chance,
        ] {
            if !(0.0..=1.0).contains(&chance) {
                return Err(GenError::InvalidProbability(chance));
            }
        }
        if self.taxonomy.max_middle_branches == 0 || self.taxonomy.max_final_branches == 0 {
            return Err(GenError::config("taxonomy branch maxima must be at least 1"));
        }
        if self.taxonomy.max_middle_branches > MAX_BRANCHES
            || self.taxonomy.max_final_branches > MAX_BRANCHES
        {
            return Err(GenError::config(format!(
                "taxonomy branch maxima must be at most {MAX_BRANCHES}"
            )));
        }
        Ok(())
    }
}
