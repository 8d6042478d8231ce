//! Logging setup and per-run counters.

use crate::food_web::FoodWeb;
use crate::taxonomy::Taxonomy;
use bestiary_data::CreatureChain;
use std::time::{Duration, Instant};

/// Counts what a generation run produced.
#[derive(Debug, Clone)]
pub struct GenerationMetrics {
    seed: u64,
    chains: usize,
    creatures: usize,
    edges: usize,
    start_time: Instant,
}

impl GenerationMetrics {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            chains: 0,
            creatures: 0,
            edges: 0,
            start_time: Instant::now(),
        }
    }

    pub fn record_chains(&mut self, chains: &[CreatureChain]) {
        self.chains += chains.len();
        self.creatures += chains.len() * 3;
    }

    pub fn record_taxonomy(&mut self, taxonomy: &Taxonomy) {
        self.creatures += taxonomy.graph.node_count();
        self.edges += taxonomy.graph.edge_count();
    }

    pub fn record_food_web(&mut self, web: &FoodWeb) {
        self.creatures += web.graph.node_count();
        self.edges += web.graph.edge_count();
    }

    #[must_use]
    pub fn creatures(&self) -> usize {
        self.creatures
    }

    #[must_use]
    pub fn edges(&self) -> usize {
        self.edges
    }

    #[must_use]
    pub fn chains(&self) -> usize {
        self.chains
    }

    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    pub fn log_summary(&self) {
        tracing::info!(
            seed = self.seed,
            chains = self.chains,
            creatures = self.creatures,
            edges = self.edges,
            duration_ms = self.elapsed().as_millis() as u64,
            "Generation finished"
        );
    }
}

/// Initialize tracing subscriber for logging.
pub fn init_logging(level: tracing::Level) {
    tracing::subscriber::set_global_default(
        tracing_subscriber::FmtSubscriber::builder()
            .with_max_level(level)
            .finish(),
    )
    .ok();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lineage::{generate_chains, ChainParams};
    use crate::rng::seeded;
    use bestiary_data::TraitCatalog;

    #[test]
    fn test_metrics_new() {
        let metrics = GenerationMetrics::new(1);
        assert_eq!(metrics.creatures(), 0);
        assert_eq!(metrics.edges(), 0);
    }

    #[test]
    fn test_record_chains() {
        let catalog = TraitCatalog::new(["Fire", "Water", "Earth"], ["Feline", "Canine"]);
        let mut rng = seeded(4);
        let chains = generate_chains(&mut rng, &catalog, 5, &ChainParams::default()).unwrap();
        let mut metrics = GenerationMetrics::new(4);
        metrics.record_chains(&chains);
        assert_eq!(metrics.chains(), 5);
        assert_eq!(metrics.creatures(), 15);
    }

    #[test]
    fn test_init_logging_twice_is_harmless() {
        init_logging(tracing::Level::WARN);
        init_logging(tracing::Level::DEBUG);
    }
}
