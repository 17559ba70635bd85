//! The trim-strings middleware.
//!
//! [`TrimStrings`] strips leading and trailing whitespace from every parsed
//! form field, except the ones its injected [`ExceptionPolicy`] names. It
//! runs after the host framework has parsed the request into field/value
//! pairs and before validation sees them — so `" alice@example.com "` and
//! `"alice@example.com"` are the same input, while a password that really
//! does start with a space survives untouched.
//!
//! The middleware never parses, never fails, and never touches a value it
//! was told to leave alone.

use std::collections::HashMap;

use tracing::trace;

use crate::policy::ExceptionPolicy;

/// The trimming capability the host pipeline calls into.
///
/// Takes the parsed fields of one request and returns them with string
/// values trimmed. Hosts with their own trimming pass implement this
/// themselves and borrow only the [`ExceptionPolicy`]; everyone else uses
/// [`TrimStrings`].
pub trait Trimming {
    /// Returns `fields` with every non-exempt value trimmed.
    fn trim(&self, fields: HashMap<String, String>) -> HashMap<String, String>;
}

/// Trims string fields, skipping the ones the injected policy exempts.
///
/// Construct once at registration time and share across requests — the
/// middleware holds no per-request state, so concurrent use needs no
/// locking.
///
/// ```rust
/// use std::collections::HashMap;
/// use preen::{TrimExceptions, TrimStrings, Trimming};
///
/// let trim = TrimStrings::new(TrimExceptions::new(["password"]));
///
/// let mut form = HashMap::new();
/// form.insert("name".to_owned(), " alice \t".to_owned());
/// form.insert("password".to_owned(), " hunter2 ".to_owned());
///
/// let form = trim.trim(form);
/// assert_eq!(form["name"], "alice");
/// assert_eq!(form["password"], " hunter2 ");
/// ```
pub struct TrimStrings<P = crate::TrimExceptions> {
    except: P,
}

impl<P: ExceptionPolicy> TrimStrings<P> {
    /// Builds the middleware around an exception policy.
    pub fn new(except: P) -> Self {
        Self { except }
    }

    /// The injected policy.
    pub fn policy(&self) -> &P {
        &self.except
    }

    /// The per-field transform: one field name, one value, the value back.
    ///
    /// Returns `value` untouched when the policy exempts `field`, otherwise
    /// with leading and trailing whitespace removed. Always borrows from
    /// `value` — the untrimmed common case costs nothing.
    ///
    /// Hosts that walk their own payload representation call this directly
    /// on each string leaf instead of going through [`Trimming::trim`].
    pub fn transform<'v>(&self, field: &str, value: &'v str) -> &'v str {
        if self.except.is_exempt(field) {
            return value;
        }
        value.trim()
    }
}

impl<P: ExceptionPolicy> Trimming for TrimStrings<P> {
    fn trim(&self, mut fields: HashMap<String, String>) -> HashMap<String, String> {
        for (field, value) in fields.iter_mut() {
            let trimmed = self.transform(field, value);
            if trimmed.len() == value.len() {
                continue;
            }
            let trimmed = trimmed.to_owned();
            trace!(field = %field, "trimmed surrounding whitespace");
            *value = trimmed;
        }
        fields
    }
}
