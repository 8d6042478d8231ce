pub mod catalog;
pub mod creature;
pub mod error;
pub mod region;

/// Removes repeated labels while keeping the order of first occurrence.
pub fn dedup_labels<I, S>(labels: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut seen = std::collections::HashSet::new();
    labels
        .into_iter()
        .map(Into::into)
        .filter(|label| seen.insert(label.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dedup_keeps_first_occurrence() {
        let labels = dedup_labels(["Water", "Earth", "Water", "Grass", "Earth"]);
        assert_eq!(labels, vec!["Water", "Earth", "Grass"]);
    }
}
