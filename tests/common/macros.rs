/// Asserts that every stage of a chain keeps the base's primaries and path.
#[macro_export]
macro_rules! assert_chain_inherits {
    ($chain:expr) => {
        let base = $chain.base();
        for stage in $chain.stages() {
            assert_eq!(
                stage.affinities.primary, base.affinities.primary,
                "Stage {} changed primary affinity",
                stage.name
            );
            assert_eq!(
                stage.family.primary, base.family.primary,
                "Stage {} changed primary family",
                stage.name
            );
            assert_eq!(
                stage.progression_path, base.progression_path,
                "Stage {} changed progression path",
                stage.name
            );
        }
    };
}

/// Asserts that every edge of a food web runs from a higher role to a lower one.
#[macro_export]
macro_rules! assert_hunts_down {
    ($web:expr) => {
        for (from, to, _) in $web.graph.edges() {
            let hunter = $web.role(from).expect("Hunter has no role");
            let target = $web.role(to).expect("Target has no role");
            assert!(
                hunter.can_hunt(target),
                "{} ({}) should not hunt {} ({})",
                from,
                hunter,
                to,
                target
            );
        }
    };
}
