//! Branching evolutionary taxonomies.
//!
//! Each base seed fixes a primary affinity and family, then grows one
//! base creature per progression path. Bases fan out into middle stages and
//! middle stages into final stages; both fan-outs use inverse-weighted counts
//! so most lines stay narrow.

use crate::error::{GenError, Result};
use crate::graph::SpeciesGraph;
use crate::sampling::{pick_one, sample_distinct, weighted_int_in_range};
use bestiary_data::{Creature, CreatureId, ProgressionPath, Stage, TraitCatalog, TraitPair};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Paths grown from every base seed, in generation order.
pub const TAXONOMY_PATHS: [ProgressionPath; 3] = [
    ProgressionPath::Natural,
    ProgressionPath::Mixed,
    ProgressionPath::Robotic,
];

/// Largest branch maximum a config may ask for.
pub const MAX_BRANCHES: usize = 64;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct TaxonomyParams {
    pub num_base: usize,
    pub max_middle_branches: usize,
    pub max_final_branches: usize,
}

impl Default for TaxonomyParams {
    fn default() -> Self {
        Self {
            num_base: 1,
            max_middle_branches: 2,
            max_final_branches: 8,
        }
    }
}

/// Marker edge: the source evolves into the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EvolvesInto;

/// Evolution graph with nodes tagged by stage.
#[derive(Debug, Clone, Default)]
pub struct Taxonomy {
    pub graph: SpeciesGraph<Stage, EvolvesInto>,
    bases: Vec<CreatureId>,
}

impl Taxonomy {
    /// Tier-1 creatures in generation order.
    pub fn bases(&self) -> &[CreatureId] {
        &self.bases
    }

    pub fn ids_at(&self, stage: Stage) -> Vec<CreatureId> {
        self.graph
            .nodes()
            .filter(|(_, tag, _)| **tag == stage)
            .map(|(id, _, _)| id)
            .collect()
    }

    fn add(&mut self, creature: Creature, stage: Stage, parent: Option<CreatureId>) -> CreatureId {
        let id = self.graph.add_creature(creature, stage);
        match parent {
            Some(parent) => {
                self.graph.add_edge(parent, id, EvolvesInto);
            }
            None => self.bases.push(id),
        }
        id
    }
}

struct Lineage<'a> {
    affinity: &'a str,
    family: &'a str,
    path: ProgressionPath,
}

impl Lineage<'_> {
    fn creature(&self, name: String, secondary: Option<String>) -> Creature {
        Creature::new(
            name,
            TraitPair {
                primary: self.affinity.to_string(),
                secondary,
            },
            TraitPair::single(self.family),
            self.path,
        )
    }
}

/// Grows `num_base` seeds into a taxonomy.
///
/// Names are `{seed}_{path}` for bases, then `_{k}` is appended per branch.
/// Fails when `max_final_branches` exceeds the affinities left once a seed's
/// primary is excluded.
pub fn generate_taxonomy<R: Rng + ?Sized>(
    rng: &mut R,
    catalog: &TraitCatalog,
    params: &TaxonomyParams,
) -> Result<Taxonomy> {
    if params.max_middle_branches == 0 || params.max_final_branches == 0 {
        return Err(GenError::InvalidRange {
            low: 1,
            high: params.max_middle_branches.min(params.max_final_branches),
        });
    }
    let mut taxonomy = Taxonomy::default();

    for seed in 0..params.num_base {
        let affinity = pick_one(rng, &catalog.affinity, "base affinity")?;
        let family = pick_one(rng, &catalog.family, "base family")?;
        let secondaries: Vec<String> = catalog
            .affinity
            .iter()
            .filter(|a| *a != affinity)
            .cloned()
            .collect();
        if params.max_final_branches > secondaries.len() {
            return Err(GenError::insufficient_pool(
                "final-stage secondary affinities",
                params.max_final_branches,
                secondaries.len(),
            ));
        }

        for path in TAXONOMY_PATHS {
            let lineage = Lineage {
                affinity,
                family,
                path,
            };
            let base_name = format!("{seed}_{path}");
            let base = taxonomy.add(lineage.creature(base_name.clone(), None), Stage::Base, None);

            let num_middle = weighted_int_in_range(rng, 1, params.max_middle_branches)?;
            for k in 0..num_middle {
                let middle_name = format!("{base_name}_{k}");
                let middle = taxonomy.add(
                    lineage.creature(middle_name.clone(), None),
                    Stage::Middle,
                    Some(base),
                );

                let num_final = weighted_int_in_range(rng, 1, params.max_final_branches)?;
                let sampled =
                    sample_distinct(rng, &secondaries, num_final, "final-stage secondary affinities")?;
                let finals = std::iter::once(None).chain(sampled.into_iter().map(Some));
                for (l, secondary) in finals.enumerate() {
                    taxonomy.add(
                        lineage.creature(format!("{middle_name}_{l}"), secondary),
                        Stage::Final,
                        Some(middle),
                    );
                }
            }
        }
        tracing::debug!(seed, affinity = %affinity, family = %family, "Grew taxonomy seed");
    }

    tracing::info!(
        bases = taxonomy.bases.len(),
        nodes = taxonomy.graph.node_count(),
        edges = taxonomy.graph.edge_count(),
        "Taxonomy generated"
    );
    Ok(taxonomy)
}
