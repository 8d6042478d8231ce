//! Graphviz DOT export.
//!
//! Creature nodes are keyed by arena id, since generated names may repeat.

use bestiary_core::{FoodWeb, IslandMap, SpeciesGraph, Taxonomy};
use bestiary_data::{Creature, Role, Stage};

fn escape(label: &str) -> String {
    label.replace('\\', "\\\\").replace('"', "\\\"")
}

fn creature_label(creature: &Creature) -> String {
    let mut affinities = escape(&creature.affinities.primary);
    if let Some(second) = &creature.affinities.secondary {
        affinities.push('/');
        affinities.push_str(&escape(second));
    }
    format!(
        "{}\\n{} {}\\n{}",
        escape(&creature.name),
        affinities,
        escape(&creature.family.primary),
        creature.progression_path
    )
}

fn stage_color(stage: Stage) -> &'static str {
    match stage {
        Stage::Base => "#e8f5e9",
        Stage::Middle => "#fff3e0",
        Stage::Final => "#fce4ec",
    }
}

fn role_color(role: Role) -> &'static str {
    match role {
        Role::Prey => "green",
        Role::Middle => "orange",
        Role::Apex => "red",
    }
}

fn species_dot<N, E>(
    title: &str,
    graph: &SpeciesGraph<N, E>,
    node_color: impl Fn(&N) -> &'static str,
    edge_label: impl Fn(&E) -> Option<String>,
) -> String {
    let mut dot = format!("digraph {title} {{\n");
    dot.push_str("  node [shape=box, style=filled, fontname=\"Arial\"];\n");

    for (id, tag, creature) in graph.nodes() {
        dot.push_str(&format!(
            "  \"{}\" [label=\"{}\", fillcolor=\"{}\"];\n",
            id.0,
            creature_label(creature),
            node_color(tag)
        ));
    }

    for (from, to, weight) in graph.edges() {
        match edge_label(weight) {
            Some(label) => dot.push_str(&format!(
                "  \"{}\" -> \"{}\" [label=\"{}\"];\n",
                from.0,
                to.0,
                escape(&label)
            )),
            None => dot.push_str(&format!("  \"{}\" -> \"{}\";\n", from.0, to.0)),
        }
    }

    dot.push_str("}\n");
    dot
}

pub fn taxonomy_to_dot(taxonomy: &Taxonomy) -> String {
    species_dot("Taxonomy", &taxonomy.graph, |s| stage_color(*s), |_| None)
}

/// Edges run predator to prey and are labelled with the hunter.
pub fn food_web_to_dot(web: &FoodWeb) -> String {
    species_dot(
        "FoodWeb",
        &web.graph,
        |r| role_color(*r),
        |hunt| Some(hunt.hunter.clone()),
    )
}

pub fn island_to_dot(island: &IslandMap) -> String {
    let mut dot = String::from("digraph Island {\n");
    dot.push_str("  node [shape=ellipse, fontname=\"Arial\"];\n");

    for idx in island.graph.node_indices() {
        let region = &island.graph[idx];
        dot.push_str(&format!(
            "  \"{}\" [label=\"{}\\n{}\"];\n",
            escape(region.name()),
            escape(region.name()),
            escape(&region.affinities().join(", "))
        ));
    }

    for edge in island.graph.edge_indices() {
        if let Some((from, to)) = island.graph.edge_endpoints(edge) {
            dot.push_str(&format!(
                "  \"{}\" -> \"{}\";\n",
                escape(island.graph[from].name()),
                escape(island.graph[to].name())
            ));
        }
    }

    dot.push_str("}\n");
    dot
}
