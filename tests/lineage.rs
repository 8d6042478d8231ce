mod common;

use bestiary_core::lineage::{build_chain, generate_chains, ChainParams};
use bestiary_core::rng::seeded;
use bestiary_data::{PathSelection, ProgressionPath, TraitCatalog};

fn small_catalog() -> TraitCatalog {
    TraitCatalog::new(["Fire", "Water", "Earth"], ["Feline", "Canine"])
}

#[test]
fn test_zero_chances_keep_identical_pairs() {
    let params = ChainParams {
        secondary_affinity_chance: 0.0,
        secondary_family_chance: 0.0,
        ..ChainParams::default()
    };
    for seed in 0..20 {
        let mut rng = seeded(seed);
        let chain = build_chain(&mut rng, &small_catalog(), &params).unwrap();
        let base = chain.base();
        for stage in chain.stages() {
            assert_eq!(
                (&stage.affinities, &stage.family),
                (&base.affinities, &base.family),
                "Seed {seed}: stage {} drifted",
                stage.name
            );
            assert_eq!(stage.affinities.secondary, None);
            assert_eq!(stage.family.secondary, None);
        }
    }
}

#[test]
fn test_fixed_path_is_kept() {
    let params = ChainParams {
        progression_path: PathSelection::Fixed(ProgressionPath::Mixed),
        ..ChainParams::default()
    };
    let mut rng = seeded(420);
    let chains = generate_chains(&mut rng, &common::trait_catalog(), 25, &params).unwrap();
    for chain in &chains {
        assert_chain_inherits!(chain);
        assert_eq!(chain.base().progression_path, ProgressionPath::Mixed);
    }
}

#[test]
fn test_random_path_covers_all_paths() {
    let mut rng = seeded(7);
    let chains =
        generate_chains(&mut rng, &common::trait_catalog(), 60, &ChainParams::default()).unwrap();
    for path in ProgressionPath::ALL {
        assert!(
            chains.iter().any(|c| c.base().progression_path == path),
            "No chain took the {path} path"
        );
    }
}

#[test]
fn test_secondary_never_repeats_primary() {
    let params = ChainParams {
        secondary_affinity_chance: 1.0,
        secondary_family_chance: 1.0,
        ..ChainParams::default()
    };
    let mut rng = seeded(3);
    let chains = generate_chains(&mut rng, &common::trait_catalog(), 30, &params).unwrap();
    for chain in &chains {
        assert_chain_inherits!(chain);
        let last = chain.final_stage();
        assert!(last.affinities.has_secondary());
        assert!(last.family.has_secondary());
        assert_ne!(last.affinities.secondary_str(), last.affinities.primary);
        assert_ne!(last.family.secondary_str(), last.family.primary);
    }
}

#[test]
fn test_chain_names_and_ancestry() {
    let mut rng = seeded(11);
    let chains = generate_chains(&mut rng, &small_catalog(), 2, &ChainParams::default()).unwrap();
    let rows: Vec<_> = chains[1]
        .with_ancestors()
        .map(|(c, parent)| (c.name.as_str(), parent.map(|p| p.name.as_str())))
        .collect();
    assert_eq!(
        rows,
        [("1_1", None), ("1_2", Some("1_1")), ("1_2", Some("1_2"))]
    );
}
