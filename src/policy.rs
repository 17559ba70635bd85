//! Exception policy: which fields the trimming middleware must leave alone.
//!
//! The policy is the only part of trimming that differs between
//! applications, so it is the seam: [`TrimStrings`](crate::TrimStrings) is
//! generic over anything implementing [`ExceptionPolicy`], and
//! [`TrimExceptions`] is the statically-configured implementation almost
//! every application wants.

use std::collections::HashSet;

use tracing::debug;

/// Decides whether a field is exempt from trimming.
///
/// A policy is a pure, total lookup: any string in — including the empty
/// string — a `bool` out, the same answer every time, no side effects.
/// Field names are matched exactly as the host framework presents them
/// (case-sensitive; for nested payloads the host chooses the shape, e.g.
/// `"user.name"`).
///
/// Policies are consulted once per field on every in-flight request, from
/// however many tasks the host runs concurrently — hence `Send + Sync`.
pub trait ExceptionPolicy: Send + Sync {
    /// Returns `true` iff `field` must not be trimmed.
    fn is_exempt(&self, field: &str) -> bool;
}

impl<P: ExceptionPolicy + ?Sized> ExceptionPolicy for &P {
    fn is_exempt(&self, field: &str) -> bool {
        (**self).is_exempt(field)
    }
}

/// A plain set of field names is already a policy.
impl ExceptionPolicy for HashSet<String> {
    fn is_exempt(&self, field: &str) -> bool {
        self.contains(field)
    }
}

/// The statically-configured exception list.
///
/// Built once at middleware-registration time from a human-edited list of
/// field names; immutable afterwards. Entries naming fields the host never
/// sends are harmless no-ops. The default list is empty: everything gets
/// trimmed.
///
/// # Example
///
/// ```rust
/// use preen::{ExceptionPolicy, TrimExceptions};
///
/// let except = TrimExceptions::new(["password", "password_confirmation"]);
/// assert!(except.is_exempt("password_confirmation"));
/// assert!(!except.is_exempt("email"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct TrimExceptions {
    fields: HashSet<String>,
}

impl TrimExceptions {
    /// The empty exception list — every field gets trimmed.
    pub fn none() -> Self {
        Self::default()
    }

    /// Builds the exception list from the given field names.
    ///
    /// Duplicates collapse; order is irrelevant.
    pub fn new<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let fields: HashSet<String> = fields.into_iter().map(Into::into).collect();
        debug!(fields = fields.len(), "trim exceptions configured");
        Self { fields }
    }

    /// Number of configured field names.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl ExceptionPolicy for TrimExceptions {
    fn is_exempt(&self, field: &str) -> bool {
        self.fields.contains(field)
    }
}

impl<S: Into<String>> FromIterator<S> for TrimExceptions {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::{ExceptionPolicy, TrimExceptions};
    use std::collections::HashSet;

    #[test]
    fn configured_fields_are_exempt() {
        let except = TrimExceptions::new(["password", "password_confirmation"]);
        assert!(except.is_exempt("password"));
        assert!(except.is_exempt("password_confirmation"));
    }

    #[test]
    fn unconfigured_fields_are_not_exempt() {
        let except = TrimExceptions::new(["password_confirmation"]);
        assert!(!except.is_exempt("password"));
        assert!(!except.is_exempt("email"));
        assert!(!except.is_exempt(""));
    }

    #[test]
    fn empty_list_exempts_nothing() {
        let except = TrimExceptions::none();
        assert!(!except.is_exempt("anything"));
        assert!(!except.is_exempt(""));
        assert!(except.is_empty());
    }

    #[test]
    fn matching_is_case_sensitive_and_exact() {
        let except = TrimExceptions::new(["user.name"]);
        assert!(except.is_exempt("user.name"));
        assert!(!except.is_exempt("User.Name"));
        assert!(!except.is_exempt("user"));
        assert!(!except.is_exempt("name"));
    }

    #[test]
    fn lookup_is_idempotent() {
        let except = TrimExceptions::new(["password"]);
        for _ in 0..3 {
            assert!(except.is_exempt("password"));
            assert!(!except.is_exempt("email"));
        }
    }

    #[test]
    fn duplicates_collapse() {
        let except = TrimExceptions::new(["password", "password", "password"]);
        assert_eq!(except.len(), 1);
    }

    #[test]
    fn unicode_field_names_match_exactly() {
        let except = TrimExceptions::new(["contraseña"]);
        assert!(except.is_exempt("contraseña"));
        assert!(!except.is_exempt("contrasena"));
    }

    #[test]
    fn from_iterator_builds_the_list() {
        let except: TrimExceptions = ["a", "b"].into_iter().collect();
        assert!(except.is_exempt("a"));
        assert!(except.is_exempt("b"));
        assert_eq!(except.len(), 2);
    }

    #[test]
    fn a_bare_hash_set_is_a_policy() {
        let mut set = HashSet::new();
        set.insert("token".to_owned());
        assert!(set.is_exempt("token"));
        assert!(!set.is_exempt("email"));
    }

    #[test]
    fn policies_work_behind_a_reference() {
        fn takes_policy(p: impl ExceptionPolicy) -> bool {
            p.is_exempt("password")
        }
        let except = TrimExceptions::new(["password"]);
        assert!(takes_policy(&except));
        assert!(takes_policy(except));
    }
}
