//! Regional predator/prey food webs.
//!
//! A region's population is split into prey, middle and apex roles. Middle
//! creatures hunt a weighted number of prey; apex creatures hunt a uniform
//! number of prey and of middle creatures. Edges point from predator to prey
//! and carry the hunter's name.

use crate::error::Result;
use crate::graph::SpeciesGraph;
use crate::sampling::{
    pick_one, pick_one_or_two, sample_distinct, uniform_int_in_range, weighted_int_in_range,
};
use bestiary_data::{Creature, CreatureId, ProgressionPath, Region, Role, TraitPair};
use rand::Rng;

/// Chance that a middle creature carries a second affinity.
pub const MIDDLE_SECONDARY_CHANCE: f64 = 0.25;
/// Chance that an apex creature carries a second affinity.
pub const APEX_SECONDARY_CHANCE: f64 = 0.75;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoodWebParams {
    pub num_creatures: usize,
    pub prey_families: Vec<String>,
    pub middle_families: Vec<String>,
    pub apex_families: Vec<String>,
}

impl Default for FoodWebParams {
    fn default() -> Self {
        let labels = |l: &[&str]| -> Vec<String> { l.iter().map(|s| s.to_string()).collect() };
        Self {
            num_creatures: 10,
            prey_families: labels(&["Cow-like", "Rabbit-like", "Rodent-like"]),
            middle_families: labels(&["Lizard-like", "Snake-like", "Feline"]),
            apex_families: labels(&["Crocodilian", "Canine"]),
        }
    }
}

/// Edge metadata: who is hunting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hunt {
    pub hunter: String,
}

/// Role counts for a population: `(prey, middle, apex)`.
///
/// Prey take a third, middle a half, apex whatever remains.
pub fn partition(num_creatures: usize) -> (usize, usize, usize) {
    let prey = num_creatures / 3;
    let middle = num_creatures / 2;
    (prey, middle, num_creatures - prey - middle)
}

#[derive(Debug, Clone, Default)]
pub struct FoodWeb {
    pub graph: SpeciesGraph<Role, Hunt>,
    prey: Vec<CreatureId>,
    middle: Vec<CreatureId>,
    apex: Vec<CreatureId>,
}

impl FoodWeb {
    pub fn members(&self, role: Role) -> &[CreatureId] {
        match role {
            Role::Prey => &self.prey,
            Role::Middle => &self.middle,
            Role::Apex => &self.apex,
        }
    }

    pub fn creature(&self, id: CreatureId) -> Option<&Creature> {
        self.graph.creature(id)
    }

    pub fn role(&self, id: CreatureId) -> Option<Role> {
        self.graph.tag(id).copied()
    }

    fn add(&mut self, creature: Creature, role: Role) -> CreatureId {
        let id = self.graph.add_creature(creature, role);
        match role {
            Role::Prey => self.prey.push(id),
            Role::Middle => self.middle.push(id),
            Role::Apex => self.apex.push(id),
        }
        id
    }

    /// Adds a predator -> prey edge and updates both back-reference sets.
    fn record_hunt(&mut self, predator: CreatureId, prey: CreatureId) {
        debug_assert!(matches!(
            (self.role(predator), self.role(prey)),
            (Some(a), Some(b)) if a.can_hunt(b)
        ));
        let Some(hunter) = self.graph.creature(predator).map(|c| c.name.clone()) else {
            return;
        };
        self.graph.add_edge(predator, prey, Hunt { hunter });
        if let Some(p) = self.graph.creature_mut(predator) {
            p.prey.insert(prey);
        }
        if let Some(p) = self.graph.creature_mut(prey) {
            p.predators.insert(predator);
        }
    }
}

fn wild_creature(name: String, affinities: (String, Option<String>), family: &str) -> Creature {
    let (primary, secondary) = affinities;
    Creature::new(
        name,
        TraitPair { primary, secondary },
        TraitPair::single(family),
        ProgressionPath::Natural,
    )
}

/// Populates `region` and links predators to the creatures they hunt.
pub fn build_food_web<R: Rng + ?Sized>(
    rng: &mut R,
    region: &Region,
    params: &FoodWebParams,
) -> Result<FoodWeb> {
    let affinities = region.affinities();
    let (num_prey, num_middle, num_apex) = partition(params.num_creatures);
    let mut web = FoodWeb::default();

    for i in 0..num_prey {
        let affinity = pick_one(rng, affinities, "prey affinity")?.clone();
        let family = pick_one(rng, &params.prey_families, "prey family")?;
        web.add(
            wild_creature(format!("Prey_{i}"), (affinity, None), family),
            Role::Prey,
        );
    }

    for i in 0..num_middle {
        let pair = pick_one_or_two(rng, affinities, MIDDLE_SECONDARY_CHANCE)?;
        let family = pick_one(rng, &params.middle_families, "middle family")?;
        let id = web.add(wild_creature(format!("Middle_{i}"), pair, family), Role::Middle);

        let count = weighted_int_in_range(rng, 1, num_prey)?;
        let hunted = sample_distinct(rng, &web.prey, count, "middle prey")?;
        for target in hunted {
            web.record_hunt(id, target);
        }
    }

    for i in 0..num_apex {
        let pair = pick_one_or_two(rng, affinities, APEX_SECONDARY_CHANCE)?;
        let family = pick_one(rng, &params.apex_families, "apex family")?;
        let id = web.add(wild_creature(format!("Apex_{i}"), pair, family), Role::Apex);

        let prey_count = uniform_int_in_range(rng, 1, num_prey)?;
        let mut hunted = sample_distinct(rng, &web.prey, prey_count, "apex prey")?;
        let middle_count = uniform_int_in_range(rng, 1, num_middle)?;
        hunted.extend(sample_distinct(rng, &web.middle, middle_count, "apex middle")?);
        for target in hunted {
            web.record_hunt(id, target);
        }
    }

    tracing::info!(
        region = %region,
        prey = num_prey,
        middle = num_middle,
        apex = num_apex,
        edges = web.graph.edge_count(),
        "Food web generated"
    );
    Ok(web)
}
