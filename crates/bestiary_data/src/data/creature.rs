use super::error::ValidationError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Arena handle of a creature inside a species graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CreatureId(pub usize);

impl fmt::Display for CreatureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Evolutionary flavour of a lineage. Fixed for every stage of a chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProgressionPath {
    Natural,
    Robotic,
    Mixed,
}

impl ProgressionPath {
    /// Draw order used when a path is picked at random.
    pub const ALL: [ProgressionPath; 3] = [Self::Natural, Self::Robotic, Self::Mixed];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Natural => "Natural",
            Self::Robotic => "Robotic",
            Self::Mixed => "Mixed",
        }
    }
}

impl fmt::Display for ProgressionPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProgressionPath {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "natural" => Ok(Self::Natural),
            "robotic" => Ok(Self::Robotic),
            "mixed" => Ok(Self::Mixed),
            other => Err(format!("unknown progression path '{other}'")),
        }
    }
}

/// Caller-side choice of progression path: either fixed, or resolved by a
/// uniform draw when the chain's base stage is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum PathSelection {
    #[default]
    Random,
    Fixed(ProgressionPath),
}

impl TryFrom<String> for PathSelection {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value.eq_ignore_ascii_case("random") {
            Ok(Self::Random)
        } else {
            value.parse().map(Self::Fixed)
        }
    }
}

impl From<PathSelection> for String {
    fn from(value: PathSelection) -> Self {
        match value {
            PathSelection::Random => "Random".to_string(),
            PathSelection::Fixed(path) => path.to_string(),
        }
    }
}

/// Tier of a creature inside an evolutionary line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stage {
    Base,
    Middle,
    Final,
}

impl Stage {
    pub fn previous(&self) -> Option<Stage> {
        match self {
            Self::Base => None,
            Self::Middle => Some(Self::Base),
            Self::Final => Some(Self::Middle),
        }
    }
}

/// Trophic role of a creature in a regional food web.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Role {
    Prey,
    Middle,
    Apex,
}

impl Role {
    /// A role may only hunt strictly lower roles.
    pub fn can_hunt(&self, target: Role) -> bool {
        *self > target
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Prey => "Prey",
            Self::Middle => "Middle",
            Self::Apex => "Apex",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A primary label plus an optional secondary one.
///
/// Used for both affinities and families. The secondary slot is `None` when
/// the creature has no second trait.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TraitPair {
    pub primary: String,
    pub secondary: Option<String>,
}

impl TraitPair {
    pub fn single(primary: impl Into<String>) -> Self {
        Self {
            primary: primary.into(),
            secondary: None,
        }
    }

    pub fn pair(primary: impl Into<String>, secondary: impl Into<String>) -> Self {
        Self {
            primary: primary.into(),
            secondary: Some(secondary.into()),
        }
    }

    /// Builds a pair from positional slots where an empty string marks the
    /// missing secondary. `min_slots..=2` slots are accepted.
    fn from_slots<S: AsRef<str>>(
        kind: &'static str,
        slots: &[S],
        min_slots: usize,
    ) -> Result<Self, ValidationError> {
        if slots.len() < min_slots || slots.len() > 2 {
            return Err(ValidationError::SlotCount {
                expected: if min_slots == 2 { "2" } else { "1 or 2" },
                actual: slots.len(),
            });
        }
        let primary = slots[0].as_ref();
        if primary.is_empty() {
            return Err(ValidationError::EmptyPrimary(kind));
        }
        let secondary = slots
            .get(1)
            .map(|s| s.as_ref())
            .filter(|s| !s.is_empty())
            .map(str::to_string);
        if secondary.as_deref() == Some(primary) {
            return Err(ValidationError::RepeatedSecondary(kind));
        }
        Ok(Self {
            primary: primary.to_string(),
            secondary,
        })
    }

    pub fn has_secondary(&self) -> bool {
        self.secondary.is_some()
    }

    pub fn secondary_str(&self) -> &str {
        self.secondary.as_deref().unwrap_or("")
    }

    pub fn contains(&self, label: &str) -> bool {
        self.primary == label || self.secondary.as_deref() == Some(label)
    }
}

/// One generated species.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Creature {
    pub name: String,
    pub affinities: TraitPair,
    pub family: TraitPair,
    pub progression_path: ProgressionPath,
    /// Creatures hunting this one. Filled only by the food-web builder.
    pub predators: BTreeSet<CreatureId>,
    /// Creatures this one hunts. Filled only by the food-web builder.
    pub prey: BTreeSet<CreatureId>,
}

impl Creature {
    pub fn new(
        name: impl Into<String>,
        affinities: TraitPair,
        family: TraitPair,
        progression_path: ProgressionPath,
    ) -> Self {
        Self {
            name: name.into(),
            affinities,
            family,
            progression_path,
            predators: BTreeSet::new(),
            prey: BTreeSet::new(),
        }
    }

    /// Builds a creature from positional slots.
    ///
    /// `affinities` must hold exactly two slots (primary, secondary) where an
    /// empty secondary means "none". `families` holds one or two slots.
    pub fn from_slots<A: AsRef<str>, F: AsRef<str>>(
        name: impl Into<String>,
        affinities: &[A],
        families: &[F],
        progression_path: ProgressionPath,
    ) -> Result<Self, ValidationError> {
        let affinities = TraitPair::from_slots("affinity", affinities, 2)?;
        let family = TraitPair::from_slots("family", families, 1)?;
        Ok(Self::new(name, affinities, family, progression_path))
    }

    pub fn primary_affinity(&self) -> &str {
        &self.affinities.primary
    }

    pub fn primary_family(&self) -> &str {
        &self.family.primary
    }
}

/// Canonical row: `name,family1,family2,affinity1,affinity2,path`.
impl fmt::Display for Creature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{},{},{},{}",
            self.name,
            self.family.primary,
            self.family.secondary_str(),
            self.affinities.primary,
            self.affinities.secondary_str(),
            self.progression_path
        )
    }
}

/// A base, middle and final stage of one evolutionary line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatureChain {
    creatures: [Creature; 3],
}

impl CreatureChain {
    /// Checks the inheritance rules before accepting the stages.
    pub fn new(creatures: [Creature; 3]) -> Result<Self, ValidationError> {
        let base = &creatures[0];
        for (prev, next) in creatures.iter().zip(creatures.iter().skip(1)) {
            if next.progression_path != base.progression_path {
                return Err(ValidationError::BrokenChain("progression path changed"));
            }
            if next.affinities.primary != base.affinities.primary
                || next.family.primary != base.family.primary
            {
                return Err(ValidationError::BrokenChain("primary trait changed"));
            }
            let overwritten = |a: &TraitPair, b: &TraitPair| {
                a.secondary.is_some() && a.secondary != b.secondary
            };
            if overwritten(&prev.affinities, &next.affinities)
                || overwritten(&prev.family, &next.family)
            {
                return Err(ValidationError::BrokenChain("secondary trait overwritten"));
            }
        }
        Ok(Self { creatures })
    }

    pub fn base(&self) -> &Creature {
        &self.creatures[0]
    }

    pub fn middle(&self) -> &Creature {
        &self.creatures[1]
    }

    pub fn final_stage(&self) -> &Creature {
        &self.creatures[2]
    }

    pub fn stages(&self) -> &[Creature; 3] {
        &self.creatures
    }

    /// Pairs each stage with the creature it evolves from.
    pub fn with_ancestors(&self) -> impl Iterator<Item = (&Creature, Option<&Creature>)> {
        self.creatures
            .iter()
            .enumerate()
            .map(|(i, c)| (c, i.checked_sub(1).map(|p| &self.creatures[p])))
    }
}
