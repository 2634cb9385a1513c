//! Version labels and their display ordering.

use std::cmp::Ordering;

/// Reserved label that always mirrors the most recently updated version.
pub const MASTER: &str = "master";

/// One integer component of a version label, of any length.
///
/// Holds the decimal digits without leading zeros, so a longer digit string is the
/// larger number and equal lengths compare lexicographically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumericPart<'a>(&'a str);

impl<'a> NumericPart<'a> {
    fn parse(part: &'a str) -> Option<Self> {
        if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        Some(NumericPart(part.trim_start_matches('0')))
    }
}

impl Ord for NumericPart<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0
            .len()
            .cmp(&other.0.len())
            .then_with(|| self.0.cmp(other.0))
    }
}

impl PartialOrd for NumericPart<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Split a label such as `0.7` or `1.10.2` into its integer components.
/// Returns `None` for anything that is not a dot-separated list of integers.
pub fn numeric_key(label: &str) -> Option<Vec<NumericPart<'_>>> {
    label.split('.').map(NumericPart::parse).collect()
}

/// Order labels for display: numeric labels descending, non-numeric after them.
/// Two non-numeric labels compare equal so a stable sort keeps their encountered order.
pub fn compare_labels(a: &str, b: &str) -> Ordering {
    match (numeric_key(a), numeric_key(b)) {
        (Some(ka), Some(kb)) => kb.cmp(&ka),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_key_parses_components() {
        assert_eq!(numeric_key("0.7").map(|k| k.len()), Some(2));
        assert_eq!(numeric_key("1.10.2").map(|k| k.len()), Some(3));
        assert_eq!(numeric_key("007"), numeric_key("7"));
        assert_eq!(numeric_key("0.0"), numeric_key("00.000"));
    }

    #[test]
    fn oversized_components_stay_numeric() {
        assert!(numeric_key("99999999999999999999").is_some());
        let mut labels = vec!["18446744073709551615", "nightly", "99999999999999999999", "0.7"];
        labels.sort_by(|a, b| compare_labels(a, b));
        assert_eq!(
            labels,
            vec!["99999999999999999999", "18446744073709551615", "0.7", "nightly"]
        );
    }

    #[test]
    fn leading_zeros_do_not_change_value() {
        assert_eq!(compare_labels("0.010", "0.9"), Ordering::Less);
        assert_eq!(compare_labels("1.02", "1.2"), Ordering::Equal);
    }

    #[test]
    fn numeric_key_rejects_other_labels() {
        assert_eq!(numeric_key("master"), None);
        assert_eq!(numeric_key("nightly"), None);
        assert_eq!(numeric_key("1.0-rc1"), None);
        assert_eq!(numeric_key("1..2"), None);
        assert_eq!(numeric_key("+1"), None);
        assert_eq!(numeric_key(""), None);
    }

    #[test]
    fn numeric_labels_sort_descending() {
        let mut labels = vec!["0.5", "0.10", "0.7", "1.0", "0.7.1"];
        labels.sort_by(|a, b| compare_labels(a, b));
        assert_eq!(labels, vec!["1.0", "0.10", "0.7.1", "0.7", "0.5"]);
    }

    #[test]
    fn non_numeric_after_numeric_in_encountered_order() {
        let mut labels = vec!["nightly", "0.6", "beta", "0.7"];
        labels.sort_by(|a, b| compare_labels(a, b));
        assert_eq!(labels, vec!["0.7", "0.6", "nightly", "beta"]);
    }
}
