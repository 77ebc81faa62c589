//! Predicates for filtering zone listings
//!
//! ```
//! use cloudbind_provider::predicates::name_equals;
//! use cloudbind_provider::{Zone, ZonePredicate};
//!
//! let zone = Zone {
//!     id: "Z1".into(),
//!     name: "example.com.".into(),
//!     caller_reference: "ref".into(),
//!     comment: None,
//!     resource_record_set_count: 2,
//! };
//! let pred = name_equals("example.com.");
//! assert!(pred.test(&zone));
//! assert_eq!(pred.to_string(), "nameEquals(example.com.)");
//! ```

use std::fmt;

use super::types::Zone;

/// A condition on a [`Zone`].
pub trait ZonePredicate {
    fn test(&self, zone: &Zone) -> bool;
}

impl<F> ZonePredicate for F
where
    F: Fn(&Zone) -> bool,
{
    fn test(&self, zone: &Zone) -> bool {
        self(zone)
    }
}

/// Matches zones whose name is exactly `name` (no trailing-dot or case folding).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameEquals {
    name: String,
}

impl NameEquals {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Borrow as a closure, e.g. for `Iterator::filter`.
    pub fn as_fn(&self) -> impl Fn(&&Zone) -> bool + '_ {
        move |zone| self.test(zone)
    }
}

impl ZonePredicate for NameEquals {
    fn test(&self, zone: &Zone) -> bool {
        zone.name == self.name
    }
}

impl fmt::Display for NameEquals {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "nameEquals({})", self.name)
    }
}

/// Zones named `name`.
pub fn name_equals(name: impl Into<String>) -> NameEquals {
    NameEquals { name: name.into() }
}
