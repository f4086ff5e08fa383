// src/resolve/dates.rs

use std::collections::HashSet;

/// Expand a date label into the spellings a header cell may use for it.
///
/// `"11/1"` and `"11/01"` both appear in the wild, often with a trailing
/// day-of-week annotation like `"11/1(土)"`; containment matching against
/// both variants tolerates all three. Labels without a `/` pass through
/// unchanged. Always returns a non-empty set.
pub fn candidates(label: &str) -> HashSet<String> {
    let label = label.trim();
    if let Some((month, day)) = label.split_once('/') {
        let stripped = day.trim_start_matches('0');
        let day_nz = if stripped.is_empty() { "0" } else { stripped };
        let day_z2 = if day.len() == 2 {
            day.to_string()
        } else {
            format!("{:0>2}", day)
        };
        return HashSet::from([format!("{month}/{day_nz}"), format!("{month}/{day_z2}")]);
    }
    HashSet::from([label.to_string()])
}
