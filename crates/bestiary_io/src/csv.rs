//! Comma-separated exports.
//!
//! Labels are written as-is; catalogs are expected to be free of commas.

use bestiary_core::FoodWeb;
use bestiary_data::{CreatureChain, Role};

pub const CHAIN_HEADER: &str =
    "CreatureName,Family1,Family2,affinity1,affinity2,ProgressionPath,EvolvesFrom";

pub const ROSTER_HEADER: &str = "CreatureName,Role,Family1,Family2,affinity1,affinity2,Prey";

/// One row per stage, each followed by the name of the stage it evolved from.
pub fn chain_rows(chain: &CreatureChain) -> Vec<String> {
    chain
        .with_ancestors()
        .map(|(creature, parent)| {
            let from = parent.map_or("", |p| p.name.as_str());
            format!("{creature},{from}")
        })
        .collect()
}

pub fn chains_csv(chains: &[CreatureChain]) -> String {
    let mut out = String::from(CHAIN_HEADER);
    out.push('\n');
    for row in chains.iter().flat_map(chain_rows) {
        out.push_str(&row);
        out.push('\n');
    }
    out
}

/// Food-web roster, prey first. Hunted creatures are joined with `;`.
pub fn food_web_csv(web: &FoodWeb) -> String {
    let mut out = String::from(ROSTER_HEADER);
    out.push('\n');
    for role in [Role::Prey, Role::Middle, Role::Apex] {
        for &id in web.members(role) {
            let Some(creature) = web.creature(id) else {
                continue;
            };
            let prey: Vec<&str> = creature
                .prey
                .iter()
                .filter_map(|&p| web.creature(p).map(|c| c.name.as_str()))
                .collect();
            out.push_str(&format!(
                "{},{},{},{},{},{},{}\n",
                creature.name,
                role,
                creature.family.primary,
                creature.family.secondary_str(),
                creature.affinities.primary,
                creature.affinities.secondary_str(),
                prey.join(";")
            ));
        }
    }
    out
}
