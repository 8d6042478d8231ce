mod common;

use bestiary_core::region::region_from_catalog;
use bestiary_core::{derive_region, lookup_affinities, merge_affinities, simple_island, NotFoundWarning};
use bestiary_data::Region;
use petgraph::algo::has_path_connecting;

#[test]
fn test_lookup_hit_and_miss() {
    let catalog = common::region_catalog();
    let hit = lookup_affinities(&catalog, "Glacier");
    assert_eq!(hit.affinities, ["Ice", "Water"]);
    assert!(hit.warning.is_none());

    let miss = lookup_affinities(&catalog, "Ocean");
    assert!(miss.affinities.is_empty());
    assert_eq!(
        miss.warning,
        Some(NotFoundWarning {
            region_type: "Ocean".to_string()
        })
    );
}

#[test]
fn test_derive_then_merge() {
    let catalog = common::region_catalog();
    let swamp = region_from_catalog(&catalog, "Swamp", "Swamp");
    let toxic = derive_region(&swamp, Some("Toxic Swamp"), None, None);
    assert_eq!(toxic.name(), "Toxic Swamp");
    assert_eq!(toxic.region_type(), "Swamp");
    assert_eq!(toxic.affinities(), swamp.affinities());

    let volcano = region_from_catalog(&catalog, "Volcano", "Volcano");
    let merged = merge_affinities([&volcano, &toxic]);
    assert_eq!(merged, ["Fire", "Rock", "Dragon", "Poison", "Water", "Grass"]);
}

#[test]
fn test_region_affinities_deduplicated() {
    let region = Region::new("Dupes", "Beach", ["Water", "Water", "Sand", "Water"]);
    assert_eq!(region.affinities(), ["Water", "Sand"]);
}

#[test]
fn test_island_reachable_from_start() {
    let island = simple_island(&common::region_catalog());
    assert_eq!(island.regions().count(), 17);
    let start = island
        .graph
        .node_indices()
        .find(|&idx| island.graph[idx].name() == "Starting Beach")
        .unwrap();
    for idx in island.graph.node_indices() {
        assert!(
            has_path_connecting(&island.graph, start, idx, None),
            "{} unreachable",
            island.graph[idx].name()
        );
    }
}

#[test]
fn test_glacial_peak_is_downhill_only() {
    let island = simple_island(&common::region_catalog());
    assert!(island.has_route("Glacial Peak", "Frozen Jungle"));
    assert!(!island.has_route("Frozen Jungle", "Glacial Peak"));
    assert!(island.has_route("Sparse Tundra", "Glacial Peak"));
    let peak = island.region("Glacial Peak").unwrap();
    assert_eq!(peak.region_type(), "Glacier");
    assert_eq!(peak.affinities(), ["Ice", "Water"]);
}
