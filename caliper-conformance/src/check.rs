//! Pure field validators.
//!
//! Each check inspects one staged value and returns the violation it found.
//! Nothing here touches shared state; builders call these in a fixed order
//! and stop at the first `Err`.

use crate::Violation;
use caliper_types::{EntityType, Status};
use url::Url;

/// Result of a single field check.
pub type CheckResult = Result<(), Violation>;

/// Fails with `InvalidArgument` unless `value` is present and not blank.
pub fn check_required(name: &str, value: Option<&str>) -> CheckResult {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(()),
        other => Err(Violation::invalid_argument(name, other)),
    }
}

/// Fails with `InvalidArgument` only if `value` is absent or empty.
///
/// Whitespace counts as a value here; the field's own check decides whether
/// it is acceptable.
pub fn check_present(name: &str, value: Option<&str>) -> CheckResult {
    match value {
        Some(v) if !v.is_empty() => Ok(()),
        other => Err(Violation::invalid_argument(name, other)),
    }
}

/// ASCII punctuation allowed in an IRI (RFC 3987 reserved and unreserved, plus `%`).
const IRI_PUNCT: &str = "-._~:/?#[]@!$&'()*+,;=%";

fn is_iri_char(c: char) -> bool {
    if c.is_ascii() {
        c.is_ascii_alphanumeric() || IRI_PUNCT.contains(c)
    } else {
        !c.is_whitespace() && !c.is_control()
    }
}

/// Fails with `InvalidArgument` unless `value` is a present, absolute IRI.
///
/// Identifiers must carry a scheme (`https:`, `urn:` and so on) and be
/// written exactly as they parse: no whitespace, no control characters, no
/// characters the parser would have to escape or drop, and no bare scheme.
/// Only case and the trailing `/` of an empty path may differ from the
/// parsed form.
pub fn check_id(name: &str, value: Option<&str>) -> CheckResult {
    check_required(name, value)?;
    let value = value.unwrap_or_default();
    let invalid = || Violation::invalid_argument(name, Some(value));

    if !value.chars().all(is_iri_char) {
        return Err(invalid());
    }
    let url = Url::parse(value).map_err(|_| invalid())?;
    if url.cannot_be_a_base() && url.path().is_empty() {
        return Err(invalid());
    }
    if value.is_ascii() {
        let parsed = url.as_str();
        let same = parsed.eq_ignore_ascii_case(value)
            || parsed
                .strip_suffix('/')
                .is_some_and(|p| p.eq_ignore_ascii_case(value));
        if !same {
            return Err(invalid());
        }
    }
    Ok(())
}

/// Like [`check_id`], but an absent value passes.
pub fn check_optional_id(name: &str, value: Option<&str>) -> CheckResult {
    match value {
        None => Ok(()),
        Some(_) => check_id(name, value),
    }
}

/// Fails with `TypeMismatch` unless `declared` is the canonical tag of `expected`.
pub fn check_type_uri(declared: &str, expected: EntityType) -> CheckResult {
    if declared == expected.uri() {
        Ok(())
    } else {
        Err(Violation::type_mismatch("type", expected.uri(), declared))
    }
}

/// Fails with `InvalidEnumValue` unless `value` is exactly one of `allowed`.
pub fn check_enum_member(name: &str, value: &str, allowed: &[&str]) -> CheckResult {
    if allowed.contains(&value) {
        Ok(())
    } else {
        Err(Violation::invalid_enum_value(name, allowed, value))
    }
}

/// Membership status must be one of the supported [`Status`] names.
pub fn check_membership_status(value: &str) -> CheckResult {
    check_enum_member("status", value, &Status::NAMES)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Conformance;

    #[test]
    fn blank_is_not_required_value() {
        let err = check_required("name", Some("   ")).unwrap_err();
        assert_eq!(err.kind(), Conformance::InvalidArgument);
        assert_eq!(err.field(), Some("name"));
    }

    #[test]
    fn padded_id_is_rejected() {
        assert!(check_id("id", Some(" https://example.edu/x")).is_err());
    }

    #[test]
    fn whitespace_status_is_present() {
        assert!(check_present("status", Some("   ")).is_ok());
        assert!(check_present("status", Some("")).is_err());
        assert!(check_present("status", None).is_err());
    }

    #[test]
    fn bare_scheme_is_not_an_id() {
        assert!(check_id("id", Some("urn:")).is_err());
        assert!(check_id("id", Some("a:")).is_err());
    }

    #[test]
    fn urn_is_a_valid_id() {
        assert!(check_id("id", Some("urn:uuid:3a648e68-f00d-4c08-aa59-8738e1884f2c")).is_ok());
    }
}
