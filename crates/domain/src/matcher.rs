use std::collections::BTreeSet;

use crate::{Catalog, ExerciseRecord, Intimidation};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CandidateFilter {
    pub prefer_confidence_safe: bool,
    pub max_intimidation: Option<Intimidation>,
}

/// Catalog exercises for `muscle` that can be done with the given equipment.
///
/// An empty or missing equipment set does not restrict the result. The equipment constraint may
/// leave nothing, while the preferences of `filter` only narrow the result as long as at least
/// one exercise remains.
#[must_use]
pub fn find_candidates<'a>(
    catalog: &'a Catalog,
    muscle: &str,
    equipment: Option<&BTreeSet<String>>,
    filter: CandidateFilter,
) -> Vec<&'a ExerciseRecord> {
    let muscle = muscle.trim();
    let equipment = equipment.filter(|e| !e.is_empty());

    let mut candidates = catalog
        .exercises()
        .iter()
        .filter(|e| e.muscle.eq_ignore_ascii_case(muscle))
        .filter(|e| equipment.is_none_or(|equipment| !e.access_keys().is_disjoint(equipment)))
        .collect::<Vec<_>>();

    if filter.prefer_confidence_safe {
        narrow(&mut candidates, |e| e.confidence_safe);
    }

    if let Some(max_intimidation) = filter.max_intimidation {
        narrow(&mut candidates, |e| e.intimidation <= max_intimidation);
    }

    candidates
}

fn narrow(candidates: &mut Vec<&ExerciseRecord>, predicate: impl Fn(&ExerciseRecord) -> bool) {
    if candidates.iter().any(|e| predicate(e)) {
        candidates.retain(|e| predicate(e));
    }
}
