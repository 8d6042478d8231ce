//! Three-stage evolutionary chains.
//!
//! The base stage fixes the primary affinity, primary family and progression
//! path. Later stages may only fill a secondary slot that is still empty,
//! drawing from pools that exclude the base's primary values.

use crate::error::{GenError, Result};
use crate::sampling::{pick_one, pick_one_or_two, pick_or_empty};
use bestiary_data::{
    Creature, CreatureChain, PathSelection, ProgressionPath, TraitCatalog, TraitPair,
};
use rand::seq::SliceRandom;
use rand::Rng;

/// Knobs for building one chain.
#[derive(Debug, Clone, PartialEq)]
pub struct ChainParams {
    pub progression_path: PathSelection,
    pub secondary_affinity_chance: f64,
    pub secondary_family_chance: f64,
    pub name_prefix: String,
}

impl Default for ChainParams {
    fn default() -> Self {
        Self {
            progression_path: PathSelection::Random,
            secondary_affinity_chance: 0.25,
            secondary_family_chance: 0.5,
            name_prefix: String::new(),
        }
    }
}

/// Pools left for secondary values once the base's primaries are removed.
struct ReducedPools {
    affinities: Vec<String>,
    families: Vec<String>,
}

impl ReducedPools {
    fn without(catalog: &TraitCatalog, base: &Creature) -> Self {
        let remove = |pool: &[String], taken: &str| {
            pool.iter()
                .filter(|label| label.as_str() != taken)
                .cloned()
                .collect::<Vec<_>>()
        };
        Self {
            affinities: remove(&catalog.affinity, base.primary_affinity()),
            families: remove(&catalog.family, base.primary_family()),
        }
    }
}

fn resolve_path<R: Rng + ?Sized>(rng: &mut R, selection: PathSelection) -> Result<ProgressionPath> {
    match selection {
        PathSelection::Fixed(path) => Ok(path),
        PathSelection::Random => ProgressionPath::ALL
            .choose(rng)
            .copied()
            .ok_or_else(|| GenError::insufficient_pool("progression path", 1, 0)),
    }
}

fn build_base<R: Rng + ?Sized>(
    rng: &mut R,
    catalog: &TraitCatalog,
    params: &ChainParams,
) -> Result<Creature> {
    let (primary, secondary) =
        pick_one_or_two(rng, &catalog.affinity, params.secondary_affinity_chance)?;
    let family = pick_one(rng, &catalog.family, "base family")?.clone();
    let path = resolve_path(rng, params.progression_path)?;
    Ok(Creature::new(
        format!("{}1", params.name_prefix),
        TraitPair { primary, secondary },
        TraitPair::single(family),
        path,
    ))
}

fn fill_if_empty<R: Rng + ?Sized>(
    rng: &mut R,
    slot: &mut Option<String>,
    pool: &[String],
    chance: f64,
    context: &str,
) -> Result<()> {
    if slot.is_some() {
        return Ok(());
    }
    if pool.is_empty() {
        return Err(GenError::insufficient_pool(context, 2, 1));
    }
    *slot = pick_or_empty(rng, pool, chance)?;
    Ok(())
}

fn next_stage<R: Rng + ?Sized>(
    rng: &mut R,
    previous: &Creature,
    pools: &ReducedPools,
    params: &ChainParams,
    name: String,
) -> Result<Creature> {
    let mut affinities = previous.affinities.clone();
    let mut family = previous.family.clone();
    fill_if_empty(
        rng,
        &mut affinities.secondary,
        &pools.affinities,
        params.secondary_affinity_chance,
        "secondary affinity",
    )?;
    fill_if_empty(
        rng,
        &mut family.secondary,
        &pools.families,
        params.secondary_family_chance,
        "secondary family",
    )?;
    Ok(Creature::new(
        name,
        affinities,
        family,
        previous.progression_path,
    ))
}

/// Builds a base, middle and final creature sharing one lineage.
///
/// Stage names are `{prefix}1`, `{prefix}2` and `{prefix}2`: the final stage
/// keeps the middle stage's suffix.
pub fn build_chain<R: Rng + ?Sized>(
    rng: &mut R,
    catalog: &TraitCatalog,
    params: &ChainParams,
) -> Result<CreatureChain> {
    let base = build_base(rng, catalog, params)?;
    let pools = ReducedPools::without(catalog, &base);
    let middle = next_stage(rng, &base, &pools, params, format!("{}2", params.name_prefix))?;
    let final_stage = next_stage(rng, &middle, &pools, params, format!("{}2", params.name_prefix))?;

    tracing::debug!(
        name = %base.name,
        affinity = %base.affinities.primary,
        family = %base.family.primary,
        path = %base.progression_path,
        "Built creature chain"
    );
    Ok(CreatureChain::new([base, middle, final_stage])?)
}

/// Builds `count` chains named `0_`, `1_`, ... in draw order.
pub fn generate_chains<R: Rng + ?Sized>(
    rng: &mut R,
    catalog: &TraitCatalog,
    count: usize,
    params: &ChainParams,
) -> Result<Vec<CreatureChain>> {
    (0..count)
        .map(|i| {
            let params = ChainParams {
                name_prefix: format!("{}{i}_", params.name_prefix),
                ..params.clone()
            };
            build_chain(rng, catalog, &params)
        })
        .collect()
}
