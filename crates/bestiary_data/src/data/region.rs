use super::dedup_labels;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A named geographic area and the affinities creatures living there may carry.
///
/// The affinity list never contains duplicates, whichever constructor built it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawRegion")]
pub struct Region {
    name: String,
    #[serde(rename = "type")]
    region_type: String,
    affinities: Vec<String>,
}

#[derive(Deserialize)]
struct RawRegion {
    name: String,
    #[serde(rename = "type")]
    region_type: String,
    affinities: Vec<String>,
}

impl From<RawRegion> for Region {
    fn from(raw: RawRegion) -> Self {
        Region::new(raw.name, raw.region_type, raw.affinities)
    }
}

impl Region {
    pub fn new<I, S>(name: impl Into<String>, region_type: impl Into<String>, affinities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            region_type: region_type.into(),
            affinities: dedup_labels(affinities),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn region_type(&self) -> &str {
        &self.region_type
    }

    pub fn affinities(&self) -> &[String] {
        &self.affinities
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
