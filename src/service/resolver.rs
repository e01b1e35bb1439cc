//! Cascading identifier resolution.
//!
//! A removal target may name a single instance, a routed hostname shared
//! by several replicas, or a whole project. Three strategies are tried
//! strictly in order and the first non-empty result wins: name takes
//! precedence over routed host, which takes precedence over project. This
//! is a precedence policy, not an aggregation; later strategies are never
//! consulted once one matches.

use crate::domain::{Instance, MatchStrategy, Resolution};

/// Resolve `target` to the owner's matching instances.
///
/// Pure function over a directory snapshot. Instances belonging to other
/// owners are never matched, whatever the target string.
pub fn resolve(owner: &str, target: &str, instances: &[Instance]) -> Resolution {
    let owned: Vec<&Instance> = instances.iter().filter(|i| i.is_owned_by(owner)).collect();

    let strategies: [(MatchStrategy, fn(&str, &[&Instance]) -> Vec<Instance>); 3] = [
        (MatchStrategy::Name, by_name),
        (MatchStrategy::RoutedHost, by_routed_host),
        (MatchStrategy::Project, by_project),
    ];

    for (strategy, matcher) in strategies {
        match Resolution::from_matches(strategy, matcher(target, &owned)) {
            Resolution::NoMatch => continue,
            matched => return matched,
        }
    }

    Resolution::NoMatch
}

/// Exact name equality; no partial or prefix matching.
fn by_name(target: &str, owned: &[&Instance]) -> Vec<Instance> {
    owned
        .iter()
        .filter(|i| i.name() == target)
        .map(|i| (*i).clone())
        .collect()
}

/// All replicas whose routing rule serves the target hostname. A single
/// logical deployment spanning several replicas is one removal unit.
fn by_routed_host(target: &str, owned: &[&Instance]) -> Vec<Instance> {
    owned
        .iter()
        .filter(|i| i.serves_host(target))
        .map(|i| (*i).clone())
        .collect()
}

/// Every instance in the project, regardless of routing configuration.
fn by_project(target: &str, owned: &[&Instance]) -> Vec<Instance> {
    owned
        .iter()
        .filter(|i| i.project() == Some(target))
        .map(|i| (*i).clone())
        .collect()
}
