//! The island's regions and the travel routes between them.

use crate::region::{derive_region, merge_affinities, region_from_catalog};
use bestiary_data::{Region, RegionCatalog};
use petgraph::graph::{DiGraph, NodeIndex};
use std::collections::HashMap;

const BASE_TYPES: [&str; 10] = [
    "Beach", "Cliffs", "Jungle", "Meadow", "Swamp", "Desert", "Volcano", "Tundra", "Glacier",
    "Cave",
];

/// Named variants of a single base region.
const RENAMED: [(&str, &str); 8] = [
    ("Starting Beach", "Beach"),
    ("Haunted Jungle", "Jungle"),
    ("Open Meadow", "Meadow"),
    ("Toxic Swamp", "Swamp"),
    ("Barren Desert", "Desert"),
    ("Glacial Peak", "Glacier"),
    ("Sparse Tundra", "Tundra"),
    ("Steep Cliffs", "Cliffs"),
];

/// Mixed regions: `(name, type, merged base regions)`.
const MIXED: [(&str, &str, [&str; 2]); 9] = [
    ("Lush Cliffs", "Cliffs", ["Jungle", "Cliffs"]),
    ("Frozen Jungle", "Jungle", ["Jungle", "Glacier"]),
    ("Frozen Marsh", "Swamp", ["Swamp", "Glacier"]),
    ("Brackish Beach", "Beach", ["Beach", "Swamp"]),
    ("Volcanic Swamp", "Swamp", ["Volcano", "Swamp"]),
    ("Volcanic Beach", "Beach", ["Volcano", "Beach"]),
    ("Volcanic Cliffs", "Cliffs", ["Volcano", "Cliffs"]),
    ("Frosty Desert", "Desert", ["Tundra", "Desert"]),
    ("Muddy Mire", "Swamp", ["Swamp", "Desert"]),
];

/// Routes usable in both directions.
const TWO_WAY: [(&str, &str); 36] = [
    ("Starting Beach", "Haunted Jungle"),
    ("Starting Beach", "Open Meadow"),
    ("Starting Beach", "Lush Cliffs"),
    ("Starting Beach", "Brackish Beach"),
    ("Haunted Jungle", "Lush Cliffs"),
    ("Haunted Jungle", "Sparse Tundra"),
    ("Haunted Jungle", "Frozen Jungle"),
    ("Haunted Jungle", "Frozen Marsh"),
    ("Haunted Jungle", "Open Meadow"),
    ("Open Meadow", "Frozen Jungle"),
    ("Open Meadow", "Frozen Marsh"),
    ("Open Meadow", "Toxic Swamp"),
    ("Lush Cliffs", "Steep Cliffs"),
    ("Lush Cliffs", "Sparse Tundra"),
    ("Brackish Beach", "Toxic Swamp"),
    ("Brackish Beach", "Volcanic Swamp"),
    ("Brackish Beach", "Volcanic Beach"),
    ("Sparse Tundra", "Steep Cliffs"),
    ("Sparse Tundra", "Frozen Jungle"),
    ("Sparse Tundra", "Glacial Peak"),
    ("Sparse Tundra", "Frosty Desert"),
    ("Sparse Tundra", "Frozen Marsh"),
    ("Frozen Jungle", "Frozen Marsh"),
    ("Frozen Marsh", "Toxic Swamp"),
    ("Frozen Marsh", "Frosty Desert"),
    ("Toxic Swamp", "Muddy Mire"),
    ("Toxic Swamp", "Volcanic Swamp"),
    ("Steep Cliffs", "Frosty Desert"),
    ("Steep Cliffs", "Volcanic Cliffs"),
    ("Volcanic Swamp", "Muddy Mire"),
    ("Volcanic Swamp", "Volcanic Beach"),
    ("Volcanic Beach", "Barren Desert"),
    ("Volcanic Beach", "Volcanic Cliffs"),
    ("Frosty Desert", "Barren Desert"),
    ("Muddy Mire", "Barren Desert"),
    ("Barren Desert", "Volcanic Cliffs"),
];

/// Routes that can only be taken downhill.
const ONE_WAY: [(&str, &str); 2] = [
    ("Glacial Peak", "Frozen Jungle"),
    ("Glacial Peak", "Frozen Marsh"),
];

/// Directed multigraph of regions; an edge means creatures can travel that way.
#[derive(Debug, Clone, Default)]
pub struct IslandMap {
    pub graph: DiGraph<Region, ()>,
    index: HashMap<String, NodeIndex>,
}

impl IslandMap {
    pub fn region(&self, name: &str) -> Option<&Region> {
        self.index.get(name).map(|&idx| &self.graph[idx])
    }

    pub fn regions(&self) -> impl Iterator<Item = &Region> {
        self.graph.node_weights()
    }

    /// Regions reachable in one step from `name`.
    pub fn neighbours(&self, name: &str) -> Vec<&Region> {
        let Some(&idx) = self.index.get(name) else {
            return Vec::new();
        };
        let mut out: Vec<_> = self.graph.neighbors(idx).map(|n| &self.graph[n]).collect();
        out.reverse();
        out
    }

    pub fn has_route(&self, from: &str, to: &str) -> bool {
        match (self.index.get(from), self.index.get(to)) {
            (Some(&a), Some(&b)) => self.graph.contains_edge(a, b),
            _ => false,
        }
    }

    fn insert(&mut self, region: Region) {
        let name = region.name().to_string();
        let idx = self.graph.add_node(region);
        self.index.insert(name, idx);
    }

    fn connect(&mut self, from: &str, to: &str) {
        if let (Some(&a), Some(&b)) = (self.index.get(from), self.index.get(to)) {
            self.graph.add_edge(a, b, ());
        } else {
            tracing::warn!(from, to, "Route references an unknown region");
        }
    }
}

/// Builds the island from the catalog's base region types.
///
/// Base types missing from the catalog still get a region, with no affinities.
pub fn simple_island(catalog: &RegionCatalog) -> IslandMap {
    let base: HashMap<&str, Region> = BASE_TYPES
        .iter()
        .map(|&t| (t, region_from_catalog(catalog, t, t)))
        .collect();

    let mut island = IslandMap::default();
    for (name, source) in RENAMED {
        if let Some(region) = base.get(source) {
            island.insert(derive_region(region, Some(name), None, None));
        }
    }
    for (name, region_type, parts) in MIXED {
        let merged = merge_affinities(parts.iter().filter_map(|p| base.get(p)));
        island.insert(Region::new(name, region_type, merged));
    }

    for (a, b) in TWO_WAY {
        island.connect(a, b);
        island.connect(b, a);
    }
    for (a, b) in ONE_WAY {
        island.connect(a, b);
    }
    tracing::debug!(
        regions = island.graph.node_count(),
        routes = island.graph.edge_count(),
        "Island assembled"
    );
    island
}
