pub mod macros;

use bestiary_core::BestiaryConfig;
use bestiary_data::{Region, RegionCatalog, RegionRecord, TraitCatalog};
use bestiary_lib::app::Bestiary;

/// Ten affinities and four families: enough for every default knob.
#[allow(dead_code)]
pub fn trait_catalog() -> TraitCatalog {
    TraitCatalog::new(
        [
            "Fire", "Water", "Earth", "Air", "Ice", "Bug", "Rock", "Grass", "Poison", "Ghost",
        ],
        ["Feline", "Canine", "Avian", "Reptilian"],
    )
}

#[allow(dead_code)]
pub fn region_catalog() -> RegionCatalog {
    let record = |name: &str, affinities: &[&str]| RegionRecord {
        name: name.to_string(),
        affinities: affinities.iter().map(|s| s.to_string()).collect(),
    };
    RegionCatalog {
        region: vec![
            record("Beach", &["Water", "Ground", "Flying"]),
            record("Cliffs", &["Rock", "Flying"]),
            record("Jungle", &["Grass", "Bug", "Poison"]),
            record("Meadow", &["Grass", "Normal", "Bug", "Flying"]),
            record("Swamp", &["Poison", "Water", "Grass"]),
            record("Desert", &["Ground", "Fire", "Rock"]),
            record("Volcano", &["Fire", "Rock", "Dragon"]),
            record("Tundra", &["Ice", "Ground"]),
            record("Glacier", &["Ice", "Water"]),
            record("Cave", &["Dark", "Rock", "Ghost"]),
        ],
    }
}

#[allow(dead_code)]
pub fn meadow() -> Region {
    Region::new("Meadow", "Meadow", ["Grass", "Normal", "Bug", "Flying"])
}

#[allow(dead_code)]
pub struct BestiaryBuilder {
    config: BestiaryConfig,
    traits: TraitCatalog,
    regions: RegionCatalog,
}

#[allow(dead_code)]
impl BestiaryBuilder {
    pub fn new() -> Self {
        Self {
            config: BestiaryConfig::default(),
            traits: trait_catalog(),
            regions: region_catalog(),
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    pub fn with_config<F>(mut self, modifier: F) -> Self
    where
        F: FnOnce(&mut BestiaryConfig),
    {
        modifier(&mut self.config);
        self
    }

    pub fn with_traits(mut self, traits: TraitCatalog) -> Self {
        self.traits = traits;
        self
    }

    pub fn build(self) -> Bestiary {
        Bestiary::with_catalogs(self.config, self.traits, self.regions)
    }
}
