//! One generation run: load catalogs, build the requested graphs from a
//! single seeded generator, and write CSV/DOT artifacts.

use anyhow::{Context, Result};
use bestiary_core::region::lookup_region;
use bestiary_core::rng::{seeded, GenRng};
use bestiary_core::{
    build_food_web, generate_chains, generate_taxonomy, simple_island, BestiaryConfig, FoodWeb,
    GenerationMetrics, IslandMap, Taxonomy,
};
use bestiary_data::{CreatureChain, RegionCatalog, TraitCatalog};
use bestiary_io as io;
use serde::Serialize;
use std::path::PathBuf;

/// What a run generates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Chains,
    Taxonomy,
    FoodWeb,
    Island,
    All,
}

impl Target {
    fn includes(self, part: Target) -> bool {
        self == Target::All || self == part
    }
}

/// A rendered output file, relative to the output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub file_name: &'static str,
    pub contents: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub seed: u64,
    pub chains: usize,
    pub creatures: usize,
    pub edges: usize,
    pub files: Vec<PathBuf>,
}

pub struct Bestiary {
    config: BestiaryConfig,
    traits: TraitCatalog,
    regions: RegionCatalog,
    rng: GenRng,
    metrics: GenerationMetrics,
}

impl Bestiary {
    /// Reads both catalogs named in the config.
    pub fn load(config: BestiaryConfig) -> Result<Self> {
        let traits = io::read_trait_catalog(&config.data.traits_file)
            .context("Failed to load trait catalog")?;
        let regions = io::read_region_catalog(&config.data.regions_file)
            .context("Failed to load region catalog")?;
        Ok(Self::with_catalogs(config, traits, regions))
    }

    pub fn with_catalogs(config: BestiaryConfig, traits: TraitCatalog, regions: RegionCatalog) -> Self {
        let seed = config.seed;
        Self {
            config,
            traits,
            regions,
            rng: seeded(seed),
            metrics: GenerationMetrics::new(seed),
        }
    }

    pub fn metrics(&self) -> &GenerationMetrics {
        &self.metrics
    }

    pub fn chains(&mut self) -> Result<Vec<CreatureChain>> {
        let chains = generate_chains(
            &mut self.rng,
            &self.traits,
            self.config.chains.count,
            &self.config.chains.params(),
        )
        .context("Chain generation failed")?;
        self.metrics.record_chains(&chains);
        Ok(chains)
    }

    pub fn taxonomy(&mut self) -> Result<Taxonomy> {
        let taxonomy = generate_taxonomy(&mut self.rng, &self.traits, &self.config.taxonomy)
            .context("Taxonomy generation failed")?;
        self.metrics.record_taxonomy(&taxonomy);
        Ok(taxonomy)
    }

    /// Food web for the configured region type.
    pub fn food_web(&mut self) -> Result<FoodWeb> {
        let cfg = &self.config.food_web;
        let (region, warning) = lookup_region(&self.regions, &cfg.region, &cfg.region);
        let web = build_food_web(&mut self.rng, &region, &cfg.params()).with_context(|| {
            match &warning {
                Some(warning) => format!("Food web generation failed: {warning}"),
                None => format!("Food web generation failed for region '{}'", cfg.region),
            }
        })?;
        self.metrics.record_food_web(&web);
        Ok(web)
    }

    pub fn island(&self) -> IslandMap {
        simple_island(&self.regions)
    }

    /// Generates every part `target` asks for, in a fixed order, drawing from
    /// the one generator.
    pub fn render(&mut self, target: Target) -> Result<Vec<Artifact>> {
        let mut artifacts = Vec::new();
        if target.includes(Target::Chains) {
            let chains = self.chains()?;
            artifacts.push(Artifact {
                file_name: "chains.csv",
                contents: io::chains_csv(&chains),
            });
        }
        if target.includes(Target::Taxonomy) {
            let taxonomy = self.taxonomy()?;
            artifacts.push(Artifact {
                file_name: "taxonomy.dot",
                contents: io::taxonomy_to_dot(&taxonomy),
            });
        }
        if target.includes(Target::FoodWeb) {
            let web = self.food_web()?;
            artifacts.push(Artifact {
                file_name: "food_web.csv",
                contents: io::food_web_csv(&web),
            });
            artifacts.push(Artifact {
                file_name: "food_web.dot",
                contents: io::food_web_to_dot(&web),
            });
        }
        if target.includes(Target::Island) {
            artifacts.push(Artifact {
                file_name: "island.dot",
                contents: io::island_to_dot(&self.island()),
            });
        }
        Ok(artifacts)
    }

    pub fn summary(&self, files: Vec<PathBuf>) -> RunSummary {
        RunSummary {
            seed: self.config.seed,
            chains: self.metrics.chains(),
            creatures: self.metrics.creatures(),
            edges: self.metrics.edges(),
            files,
        }
    }
}

/// Runs `target` and writes its artifacts plus `summary.json` to the
/// configured output directory.
pub fn run(config: BestiaryConfig, target: Target) -> Result<RunSummary> {
    let output_dir = config.data.output_dir.clone();
    let mut bestiary = Bestiary::load(config)?;
    let artifacts = bestiary.render(target)?;

    let mut files = Vec::with_capacity(artifacts.len());
    for artifact in artifacts {
        let path = output_dir.join(artifact.file_name);
        io::write_text_file(&path, &artifact.contents)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        tracing::info!(path = %path.display(), "Wrote artifact");
        files.push(path);
    }

    let summary = bestiary.summary(files);
    let summary_path = output_dir.join("summary.json");
    io::write_text_file(&summary_path, &io::to_json_pretty(&summary)?)
        .with_context(|| format!("Failed to write {}", summary_path.display()))?;
    bestiary.metrics().log_summary();
    Ok(summary)
}
