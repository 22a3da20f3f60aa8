//! Timestamp-named application versions.
//!
//! The orchestrator names every application version after its creation time,
//! formatted as RFC 3339 with up to nanosecond precision. Versions are ordered
//! by the instant they denote, never by their string form.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, FixedOffset, Utc};

use crate::error::VersionError;

/// A single application version, ordered chronologically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VersionTimestamp(DateTime<FixedOffset>);

impl VersionTimestamp {
    /// The Unix epoch, used when no reference version is known.
    #[must_use]
    pub fn epoch() -> Self {
        Self(DateTime::<Utc>::UNIX_EPOCH.fixed_offset())
    }

    /// Parse an RFC 3339 timestamp. Surrounding whitespace is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`VersionError::MalformedTimestamp`] if the value is not a
    /// valid RFC 3339 timestamp.
    pub fn parse(value: &str) -> Result<Self, VersionError> {
        DateTime::parse_from_rfc3339(value.trim())
            .map(Self)
            .map_err(|source| VersionError::MalformedTimestamp {
                value: value.to_string(),
                source,
            })
    }

    #[must_use]
    pub fn as_datetime(&self) -> DateTime<FixedOffset> {
        self.0
    }
}

impl FromStr for VersionTimestamp {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Canonical form: fractional seconds with trailing zeros dropped, `Z` for
/// UTC and `+hh:mm` otherwise.
impl fmt::Display for VersionTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dt = self.0;
        write!(f, "{}", dt.format("%Y-%m-%dT%H:%M:%S"))?;

        let nanos = dt.timestamp_subsec_nanos();
        if nanos > 0 {
            let digits = format!("{nanos:09}");
            write!(f, ".{}", digits.trim_end_matches('0'))?;
        }

        if dt.offset().local_minus_utc() == 0 {
            f.write_str("Z")
        } else {
            write!(f, "{}", dt.format("%:z"))
        }
    }
}

/// Return every version at or after `reference`, oldest first.
///
/// An empty `reference` means "no reference" and selects every version.
/// Input order does not matter; equal instants keep their input order.
///
/// # Errors
///
/// - [`VersionError::MalformedTimestamp`] if any version or the reference
///   fails to parse. No partial result is returned.
/// - [`VersionError::ReferenceNotFound`] if the reference is after every
///   version (including when `versions` is empty).
pub fn newer_or_equal(versions: &[String], reference: &str) -> Result<Vec<String>, VersionError> {
    let mut parsed = versions
        .iter()
        .map(|v| VersionTimestamp::parse(v))
        .collect::<Result<Vec<_>, _>>()?;

    let needle = if reference.is_empty() {
        VersionTimestamp::epoch()
    } else {
        VersionTimestamp::parse(reference)?
    };

    // Stable: equal instants keep their input order.
    parsed.sort();

    let start = parsed.partition_point(|v| *v < needle);
    if start >= parsed.len() {
        return Err(VersionError::ReferenceNotFound {
            reference: reference.to_string(),
        });
    }

    Ok(parsed[start..].iter().map(ToString::to_string).collect())
}

/// Whether two version identifiers name the same version.
///
/// Timestamps are compared by instant so that differing precision
/// (`.020Z` vs `.02Z`) does not matter; anything else is compared verbatim.
#[must_use]
pub fn same_version(a: &str, b: &str) -> bool {
    match (VersionTimestamp::parse(a), VersionTimestamp::parse(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| (*v).to_string()).collect()
    }

    #[test]
    fn returns_versions_from_reference_inclusive() {
        let versions = strings(&[
            "2015-04-11T09:31:50.021Z",
            "2014-03-01T23:42:20.938Z",
            "2015-02-11T09:31:50.021Z",
        ]);
        let got = newer_or_equal(&versions, "2015-02-11T09:31:50.021Z").unwrap();
        assert_eq!(
            got,
            strings(&["2015-02-11T09:31:50.021Z", "2015-04-11T09:31:50.021Z"])
        );
    }

    #[test]
    fn reference_after_all_versions_is_not_found() {
        let versions = strings(&["2015-02-11T09:31:50.021Z"]);
        let err = newer_or_equal(&versions, "2015-04-11T09:31:50.021Z").unwrap_err();
        assert!(matches!(err, VersionError::ReferenceNotFound { .. }));
    }

    #[test]
    fn empty_reference_selects_everything_sorted() {
        let versions = strings(&[
            "2015-02-11T09:31:50.021Z",
            "2014-03-01T23:42:20.938Z",
        ]);
        let got = newer_or_equal(&versions, "").unwrap();
        assert_eq!(
            got,
            strings(&["2014-03-01T23:42:20.938Z", "2015-02-11T09:31:50.021Z"])
        );
    }

    #[test]
    fn reference_between_versions_starts_at_next() {
        let versions = strings(&[
            "2015-02-11T09:31:50.021Z",
            "2014-03-01T23:42:20.938Z",
        ]);
        let got = newer_or_equal(&versions, "2014-06-01T00:00:00Z").unwrap();
        assert_eq!(got, strings(&["2015-02-11T09:31:50.021Z"]));
    }

    #[test]
    fn malformed_version_fails_whole_call() {
        let versions = strings(&["2015-02-11T09:31:50.021Z", "yesterday"]);
        let err = newer_or_equal(&versions, "").unwrap_err();
        assert!(matches!(
            err,
            VersionError::MalformedTimestamp { ref value, .. } if value == "yesterday"
        ));
    }

    #[test]
    fn malformed_reference_fails() {
        let versions = strings(&["2015-02-11T09:31:50.021Z"]);
        let err = newer_or_equal(&versions, "2015-02-11").unwrap_err();
        assert!(matches!(err, VersionError::MalformedTimestamp { .. }));
    }

    #[test]
    fn empty_versions_is_not_found() {
        let err = newer_or_equal(&[], "").unwrap_err();
        assert!(matches!(err, VersionError::ReferenceNotFound { .. }));
    }

    #[test]
    fn ordering_is_chronological_not_lexical() {
        // Lexically "+02:00" sorts after "Z", chronologically it is earlier.
        let versions = strings(&["2015-02-11T09:00:00Z", "2015-02-11T10:00:00+02:00"]);
        let got = newer_or_equal(&versions, "").unwrap();
        assert_eq!(
            got,
            strings(&["2015-02-11T10:00:00+02:00", "2015-02-11T09:00:00Z"])
        );
    }

    #[test]
    fn equal_instants_keep_input_order() {
        let utc = "2015-02-11T09:00:00Z";
        let shifted = "2015-02-11T11:00:00+02:00";

        let got = newer_or_equal(&strings(&[utc, shifted]), "").unwrap();
        assert_eq!(got, strings(&[utc, shifted]));

        let got = newer_or_equal(&strings(&[shifted, utc]), "").unwrap();
        assert_eq!(got, strings(&[shifted, utc]));

        let got = newer_or_equal(&strings(&[shifted, "2015-02-11T10:00:00Z", utc]), utc).unwrap();
        assert_eq!(got, strings(&[shifted, utc, "2015-02-11T10:00:00Z"]));
    }

    #[test]
    fn display_trims_fraction_and_uses_z() {
        let v = VersionTimestamp::parse("2015-02-11T09:31:50.020000Z").unwrap();
        assert_eq!(v.to_string(), "2015-02-11T09:31:50.02Z");

        let v = VersionTimestamp::parse("2015-02-11T09:31:50+00:00").unwrap();
        assert_eq!(v.to_string(), "2015-02-11T09:31:50Z");

        let v = VersionTimestamp::parse("2015-02-11T09:31:50.123456789-05:30").unwrap();
        assert_eq!(v.to_string(), "2015-02-11T09:31:50.123456789-05:30");
    }

    #[test]
    fn whitespace_around_versions_is_ignored() {
        let versions = strings(&[" 2015-02-11T09:31:50.021Z\n"]);
        let got = newer_or_equal(&versions, "").unwrap();
        assert_eq!(got, strings(&["2015-02-11T09:31:50.021Z"]));
    }

    #[test]
    fn same_version_compares_instants() {
        assert!(same_version("2015-02-11T09:31:50.020Z", "2015-02-11T09:31:50.02Z"));
        assert!(!same_version("2015-02-11T09:31:50.021Z", "2015-02-11T09:31:50.02Z"));
        assert!(same_version("bar", "bar"));
        assert!(!same_version("bar", "baz"));
    }

    fn timestamp() -> impl Strategy<Value = String> {
        // 1971..2100, arbitrary nanoseconds, UTC.
        (31_536_000i64..4_102_444_800i64, 0u32..1_000_000_000u32).prop_map(|(secs, nanos)| {
            let dt = DateTime::<Utc>::from_timestamp(secs, nanos).unwrap_or_default();
            VersionTimestamp(dt.fixed_offset()).to_string()
        })
    }

    proptest! {
        #[test]
        fn empty_reference_returns_all_sorted(versions in prop::collection::vec(timestamp(), 1..20)) {
            let got = newer_or_equal(&versions, "").unwrap();
            prop_assert_eq!(got.len(), versions.len());

            let instants: Vec<_> = got.iter().map(|v| VersionTimestamp::parse(v).unwrap()).collect();
            prop_assert!(instants.windows(2).all(|w| w[0] <= w[1]));
        }

        #[test]
        fn result_starts_at_contained_reference(
            versions in prop::collection::vec(timestamp(), 1..20),
            pick in any::<prop::sample::Index>(),
        ) {
            let reference = pick.get(&versions).clone();
            let got = newer_or_equal(&versions, &reference).unwrap();
            prop_assert_eq!(&got[0], &reference);
        }

        #[test]
        fn output_round_trips_to_input_instants(versions in prop::collection::vec(timestamp(), 1..20)) {
            let got = newer_or_equal(&versions, "").unwrap();
            let mut expected: Vec<_> = versions.iter().map(|v| VersionTimestamp::parse(v).unwrap()).collect();
            expected.sort();
            let actual: Vec<_> = got.iter().map(|v| VersionTimestamp::parse(v).unwrap()).collect();
            prop_assert_eq!(actual, expected);
        }
    }
}
