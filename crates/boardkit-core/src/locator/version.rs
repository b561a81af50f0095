use std::cmp::Ordering;

/// Sort key for a KiCad version directory such as `7.0` or `10.0 beta`.
///
/// Only the first whitespace-separated token is parsed, as dotted unsigned
/// integers. Names that do not parse carry no key and sort below every
/// parsed version.
#[derive(Debug, Clone)]
pub(crate) struct VersionKey(Option<Vec<u64>>);

impl VersionKey {
    pub(crate) fn parse(name: &str) -> Self {
        let parts = name.split_whitespace().next().and_then(|token| {
            token
                .split('.')
                .map(|part| part.parse::<u64>().ok())
                .collect::<Option<Vec<_>>>()
        });
        Self(parts)
    }
}

impl Ord for VersionKey {
    fn cmp(&self, other: &Self) -> Ordering {
        match (&self.0, &other.0) {
            (Some(left), Some(right)) => compare_components(left, right),
            (Some(_), None) => Ordering::Greater,
            (None, Some(_)) => Ordering::Less,
            (None, None) => Ordering::Equal,
        }
    }
}

impl PartialEq for VersionKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for VersionKey {}

impl PartialOrd for VersionKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// Missing trailing components count as zero, so `8` == `8.0`.
fn compare_components(left: &[u64], right: &[u64]) -> Ordering {
    let len = left.len().max(right.len());
    for idx in 0..len {
        let l = left.get(idx).copied().unwrap_or(0);
        let r = right.get(idx).copied().unwrap_or(0);
        match l.cmp(&r) {
            Ordering::Equal => continue,
            other => return other,
        }
    }
    Ordering::Equal
}

/// Orders directory names newest first; ties fall back to the name.
pub(crate) fn sort_newest_first(names: &mut [String]) {
    names.sort_by(|a, b| {
        VersionKey::parse(b)
            .cmp(&VersionKey::parse(a))
            .then_with(|| a.cmp(b))
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_not_lexicographic_order() {
        let mut names = vec!["7.0".to_string(), "10.0".to_string(), "8.1".to_string()];
        sort_newest_first(&mut names);
        assert_eq!(names, vec!["10.0", "8.1", "7.0"]);
    }

    #[test]
    fn unparseable_names_sort_last() {
        let mut names = vec![
            "9nightly".to_string(),
            "6.0".to_string(),
            "8.0.1".to_string(),
            "8.0".to_string(),
        ];
        sort_newest_first(&mut names);
        assert_eq!(names, vec!["8.0.1", "8.0", "6.0", "9nightly"]);
    }

    #[test]
    fn only_leading_token_is_parsed() {
        assert_eq!(VersionKey::parse("9.0 rc1"), VersionKey::parse("9.0"));
        assert!(VersionKey::parse("9.0 rc1") > VersionKey::parse("8.99"));
    }

    #[test]
    fn missing_components_compare_as_zero() {
        assert_eq!(VersionKey::parse("8"), VersionKey::parse("8.0"));
        assert!(VersionKey::parse("8.0.1") > VersionKey::parse("8"));
    }
}
