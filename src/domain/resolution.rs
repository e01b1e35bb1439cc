//! Resolution results produced by the identifier resolver.

use std::fmt;

use crate::domain::Instance;

/// Which resolution strategy produced a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchStrategy {
    /// Exact instance name match.
    Name,
    /// Routing-rule match on a hostname shared by the deployment's
    /// replicas.
    RoutedHost,
    /// Project label match.
    Project,
}

impl fmt::Display for MatchStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Name => "name",
            Self::RoutedHost => "routed host",
            Self::Project => "project",
        })
    }
}

/// Outcome of resolving a target identifier against a directory snapshot.
///
/// An empty match set is meaningful (`NoMatch`), not an error; the caller
/// turns it into a not-found outcome.
#[derive(Debug, Clone)]
pub enum Resolution {
    Matched {
        strategy: MatchStrategy,
        instances: Vec<Instance>,
    },
    NoMatch,
}

impl Resolution {
    /// Wrap a strategy's matches, mapping an empty set to `NoMatch`.
    #[must_use]
    pub fn from_matches(strategy: MatchStrategy, instances: Vec<Instance>) -> Self {
        if instances.is_empty() {
            Self::NoMatch
        } else {
            Self::Matched {
                strategy,
                instances,
            }
        }
    }

    #[must_use]
    pub fn is_no_match(&self) -> bool {
        matches!(self, Self::NoMatch)
    }
}
