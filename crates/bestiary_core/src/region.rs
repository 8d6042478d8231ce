use bestiary_data::data::dedup_labels;
use bestiary_data::{Region, RegionCatalog};
use std::fmt;

/// Copies `source`, replacing the fields given as overrides.
///
/// Empty overrides count as unset.
pub fn derive_region(
    source: &Region,
    name: Option<&str>,
    region_type: Option<&str>,
    affinities: Option<&[String]>,
) -> Region {
    let name = name.filter(|n| !n.is_empty()).unwrap_or(source.name());
    let region_type = region_type
        .filter(|t| !t.is_empty())
        .unwrap_or(source.region_type());
    let affinities = affinities
        .filter(|a| !a.is_empty())
        .unwrap_or(source.affinities());
    Region::new(name, region_type, affinities.iter().cloned())
}

/// Union of all regions' affinities without duplicates.
pub fn merge_affinities<'a, I>(regions: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a Region>,
{
    dedup_labels(
        regions
            .into_iter()
            .flat_map(|r| r.affinities().iter().cloned()),
    )
}

/// Signals that a region type was missing from the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotFoundWarning {
    pub region_type: String,
}

impl fmt::Display for NotFoundWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "region type '{}' not found in catalog", self.region_type)
    }
}

/// Result of a catalog lookup. A miss yields an empty set plus a warning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AffinityLookup {
    pub affinities: Vec<String>,
    pub warning: Option<NotFoundWarning>,
}

pub fn lookup_affinities(catalog: &RegionCatalog, region_type: &str) -> AffinityLookup {
    match catalog.find(region_type) {
        Some(record) => AffinityLookup {
            affinities: dedup_labels(record.affinities.iter().cloned()),
            warning: None,
        },
        None => {
            let warning = NotFoundWarning {
                region_type: region_type.to_string(),
            };
            tracing::warn!(region_type, "{warning}");
            AffinityLookup {
                affinities: Vec::new(),
                warning: Some(warning),
            }
        }
    }
}

/// Builds a region whose type's affinities come from the catalog, along
/// with the warning of a missed lookup.
pub fn lookup_region(
    catalog: &RegionCatalog,
    name: &str,
    region_type: &str,
) -> (Region, Option<NotFoundWarning>) {
    let lookup = lookup_affinities(catalog, region_type);
    (
        Region::new(name, region_type, lookup.affinities),
        lookup.warning,
    )
}

/// Like [`lookup_region`], for callers that accept an empty region on a miss.
pub fn region_from_catalog(catalog: &RegionCatalog, name: &str, region_type: &str) -> Region {
    lookup_region(catalog, name, region_type).0
}
