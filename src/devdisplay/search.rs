use crate::model::{Criterion, ProfileRecord, SearchQuery};
use crate::normalize::normalize;

/// Filters `directory` down to the records matching `query`.
///
/// Matching is plain substring containment on normalized text. The result
/// keeps directory order; there is no ranking.
pub fn search(query: &SearchQuery, directory: &[ProfileRecord]) -> Vec<ProfileRecord> {
    if let Criterion::Unrecognized(_) = query.criterion {
        return Vec::new();
    }

    let needle = normalize(&query.value);
    directory
        .iter()
        .filter(|record| matches(record, &query.criterion, &needle))
        .cloned()
        .collect()
}

/// Whether `record` matches an already-normalized `needle`.
pub fn matches(record: &ProfileRecord, criterion: &Criterion, needle: &str) -> bool {
    match criterion {
        Criterion::Name => normalize(&record.name).contains(needle),
        Criterion::Location => normalize(&record.location).contains(needle),
        Criterion::Skill => record
            .skills
            .iter()
            .any(|skill| normalize(skill).contains(needle)),
        Criterion::Unrecognized(_) => false,
    }
}
