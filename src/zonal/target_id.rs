use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

/// Leading integer of a string, the way JavaScript's `parseInt(value, 10)` reads it.
/// Skipped whitespace is JavaScript's set (WhiteSpace + LineTerminator), not Unicode's.
static INTEGER_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^[\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}]*",
        r"(?<sign>[+-]?)(?<digits>[0-9]+)"
    ))
    .expect("Should be a valid regex")
});

/// Normalize a client identifier into the canonical form used for lookups:
/// the leading integer of `value`, without leading zeros.
/// `None` when `value` doesn't start with a number.
///
/// `"0001234"`, `" 1234"` and `"1234abc"` all normalize to `"1234"`.
pub fn normalize_target_id(value: &str) -> Option<String> {
    let captures = INTEGER_PREFIX.captures(value)?;
    let digits = captures["digits"].trim_start_matches('0');
    if digits.is_empty() {
        return Some("0".to_owned());
    }

    match &captures["sign"] {
        "-" => Some(format!("-{digits}")),
        _ => Some(digits.to_owned()),
    }
}

/// A value to look up in a [TargetSet].
/// Client numbers come either as text or as numbers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetCandidate {
    Missing,
    Text(String),
    Number(i128),
}

impl TargetCandidate {
    /// Canonical form of the candidate, as used by `isTargetClient`.
    /// Empty values and the number zero are rejected before parsing.
    pub fn normalize(&self) -> Option<String> {
        match self {
            TargetCandidate::Number(0) => None,
            TargetCandidate::Text(text) if text.is_empty() => None,
            _ => self.parse_int(),
        }
    }

    /// Canonical form of the candidate, as used by `getZonalCoords`: no emptiness check.
    pub fn parse_int(&self) -> Option<String> {
        match self {
            TargetCandidate::Missing => None,
            TargetCandidate::Text(text) => normalize_target_id(text),
            TargetCandidate::Number(number) => Some(number.to_string()),
        }
    }
}

impl From<&str> for TargetCandidate {
    fn from(value: &str) -> Self {
        TargetCandidate::Text(value.to_owned())
    }
}

impl From<String> for TargetCandidate {
    fn from(value: String) -> Self {
        TargetCandidate::Text(value)
    }
}

impl From<&String> for TargetCandidate {
    fn from(value: &String) -> Self {
        TargetCandidate::Text(value.clone())
    }
}

impl<T: Into<TargetCandidate>> From<Option<T>> for TargetCandidate {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(TargetCandidate::Missing)
    }
}

macro_rules! impl_from_integer {
    ($($integer:ty),*) => {
        $(
            impl From<$integer> for TargetCandidate {
                fn from(value: $integer) -> Self {
                    TargetCandidate::Number(i128::from(value))
                }
            }
        )*
    };
}

impl_from_integer!(i32, i64, u32, u64);

/// Normalized client identifiers, built once from the targets list.
/// Identifiers that aren't numbers are left out.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TargetSet {
    ids: HashSet<String>,
}

impl TargetSet {
    pub fn contains<C: Into<TargetCandidate>>(&self, candidate: C) -> bool {
        candidate
            .into()
            .normalize()
            .is_some_and(|id| self.ids.contains(&id))
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for TargetSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let ids = iter
            .into_iter()
            .filter_map(|id| normalize_target_id(id.as_ref()))
            .collect();
        Self { ids }
    }
}

impl From<&[String]> for TargetSet {
    fn from(value: &[String]) -> Self {
        value.iter().collect()
    }
}
