mod common;

use bestiary_core::rng::seeded;
use bestiary_core::taxonomy::TAXONOMY_PATHS;
use bestiary_core::{generate_taxonomy, GenError, TaxonomyParams};
use bestiary_data::Stage;
use std::collections::HashSet;

fn params(num_base: usize) -> TaxonomyParams {
    TaxonomyParams {
        num_base,
        ..TaxonomyParams::default()
    }
}

#[test]
fn test_in_degree_zero_only_for_bases() {
    let mut rng = seeded(420);
    let taxonomy = generate_taxonomy(&mut rng, &common::trait_catalog(), &params(5)).unwrap();
    for (id, stage, creature) in taxonomy.graph.nodes() {
        let in_degree = taxonomy.graph.in_degree(id);
        match stage {
            Stage::Base => assert_eq!(in_degree, 0, "{} has a parent", creature.name),
            Stage::Middle | Stage::Final => {
                assert_eq!(in_degree, 1, "{} should have one parent", creature.name)
            }
        }
    }
}

#[test]
fn test_parent_is_previous_tier() {
    let mut rng = seeded(31);
    let taxonomy = generate_taxonomy(&mut rng, &common::trait_catalog(), &params(4)).unwrap();
    for (id, stage, _) in taxonomy.graph.nodes() {
        let parents: Vec<_> = taxonomy
            .graph
            .predecessors(id)
            .into_iter()
            .map(|p| *taxonomy.graph.tag(p).unwrap())
            .collect();
        match stage.previous() {
            Some(tier) => assert_eq!(parents, [tier]),
            None => assert!(parents.is_empty()),
        }
    }
}

#[test]
fn test_each_seed_grows_every_path() {
    let mut rng = seeded(9);
    let taxonomy = generate_taxonomy(&mut rng, &common::trait_catalog(), &params(3)).unwrap();
    assert_eq!(taxonomy.bases().len(), 3 * TAXONOMY_PATHS.len());
    for (seed, bases) in taxonomy.bases().chunks(TAXONOMY_PATHS.len()).enumerate() {
        let paths: Vec<_> = bases
            .iter()
            .map(|&id| taxonomy.graph.creature(id).unwrap().progression_path)
            .collect();
        assert_eq!(paths, TAXONOMY_PATHS);

        let first = taxonomy.graph.creature(bases[0]).unwrap();
        for &id in bases {
            let base = taxonomy.graph.creature(id).unwrap();
            assert_eq!(base.affinities.primary, first.affinities.primary);
            assert_eq!(base.family.primary, first.family.primary);
            assert!(base.name.starts_with(&format!("{seed}_")));
        }
    }
}

#[test]
fn test_branch_counts_within_maxima() {
    let params = TaxonomyParams {
        num_base: 4,
        max_middle_branches: 3,
        max_final_branches: 5,
    };
    let mut rng = seeded(77);
    let taxonomy = generate_taxonomy(&mut rng, &common::trait_catalog(), &params).unwrap();
    for &base in taxonomy.bases() {
        let middles = taxonomy.graph.successors(base);
        assert!((1..=3).contains(&middles.len()));
        for middle in middles {
            assert_eq!(taxonomy.graph.tag(middle), Some(&Stage::Middle));
            let finals = taxonomy.graph.successors(middle);
            // one plain final plus one per sampled secondary
            assert!((2..=6).contains(&finals.len()));
        }
    }
}

#[test]
fn test_names_are_unique() {
    let mut rng = seeded(5);
    let taxonomy = generate_taxonomy(&mut rng, &common::trait_catalog(), &params(6)).unwrap();
    let mut seen = HashSet::new();
    for creature in taxonomy.graph.creatures() {
        assert!(seen.insert(creature.name.clone()), "{} repeated", creature.name);
    }
}

#[test]
fn test_default_maxima_need_nine_affinities() {
    let catalog = bestiary_data::TraitCatalog::new(["Fire", "Water", "Earth"], ["Feline"]);
    let mut rng = seeded(1);
    let err = generate_taxonomy(&mut rng, &catalog, &params(1)).unwrap_err();
    assert!(matches!(
        err,
        GenError::InsufficientPool {
            needed: 8,
            available: 2,
            ..
        }
    ));
}
