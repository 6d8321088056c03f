use std::collections::BTreeSet;

pub const BODYWEIGHT_KEY: &str = "bodyweight";

/// Lower-cased substrings of an equipment token and the access keys they imply.
const ACCESS_RULES: [(&str, &[&str]); 22] = [
    ("dumbbell", &["dumbbells"]),
    ("barbell", &["barbell"]),
    ("kettlebell", &["kettlebell"]),
    ("machine", &["machine"]),
    ("cable", &["cables"]),
    ("smith", &["smith machine"]),
    ("band", &["resistance bands", "bands"]),
    ("bike", &["bike"]),
    ("cycle", &["bike"]),
    ("rowing", &["rowing machine"]),
    ("rower", &["rowing machine"]),
    ("elliptical", &["elliptical"]),
    ("treadmill", &["treadmill"]),
    ("suspension", &["suspension trainer"]),
    ("trx", &["suspension trainer"]),
    ("stability", &["stability ball"]),
    ("bench", &["bench"]),
    ("bodyweight", &[BODYWEIGHT_KEY]),
    ("body weight", &[BODYWEIGHT_KEY]),
    ("pull-up", &["pull-up bar"]),
    ("pull up", &["pull-up bar"]),
    ("pullup", &["pull-up bar"]),
];

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct NormalizedSelection {
    pub equipment: BTreeSet<String>,
    pub muscles: Vec<String>,
}

#[must_use]
pub fn normalize<E: AsRef<str>, M: AsRef<str>>(
    raw_equipment: &[E],
    raw_muscles: &[M],
) -> NormalizedSelection {
    let equipment = split_tokens(raw_equipment)
        .iter()
        .flat_map(|t| access_keys(t))
        .collect();

    let mut muscles: Vec<String> = vec![];
    for muscle in split_tokens(raw_muscles) {
        if !muscles.contains(&muscle) {
            muscles.push(muscle);
        }
    }

    NormalizedSelection { equipment, muscles }
}

/// Split raw selections on `,` and `/` and drop empty tokens.
#[must_use]
pub fn split_tokens<S: AsRef<str>>(raw: &[S]) -> Vec<String> {
    raw.iter()
        .flat_map(|r| r.as_ref().split([',', '/']))
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(ToString::to_string)
        .collect()
}

/// The literal (lower-cased) token plus every key implied by the synonym table.
#[must_use]
pub fn access_keys(token: &str) -> BTreeSet<String> {
    let token = token.trim().to_lowercase();

    if token.is_empty() {
        return BTreeSet::new();
    }

    let mut keys = ACCESS_RULES
        .iter()
        .filter(|(pattern, _)| token.contains(pattern))
        .flat_map(|(_, keys)| keys.iter().map(ToString::to_string))
        .collect::<BTreeSet<_>>();
    keys.insert(token);
    keys
}

#[must_use]
pub fn access_keys_for<S: AsRef<str>>(equipment: &[S]) -> BTreeSet<String> {
    equipment
        .iter()
        .flat_map(|e| access_keys(e.as_ref()))
        .collect()
}
