//! Resolution strategy properties: ownership isolation, precedence, and
//! completeness.

use berth::domain::{MatchStrategy, Resolution};
use berth::service::resolve;
use berth::testkit::instance::instance;

fn matched_names(resolution: &Resolution) -> Vec<String> {
    match resolution {
        Resolution::Matched { instances, .. } => {
            let mut names: Vec<String> = instances.iter().map(|i| i.name().to_string()).collect();
            names.sort();
            names
        }
        Resolution::NoMatch => Vec::new(),
    }
}

fn strategy(resolution: &Resolution) -> Option<MatchStrategy> {
    match resolution {
        Resolution::Matched { strategy, .. } => Some(*strategy),
        Resolution::NoMatch => None,
    }
}

/// Two owners with identically-named, identically-routed, identically-
/// grouped instances: resolution for one owner must never see the other's.
#[test]
fn resolution_never_crosses_owner_boundaries() {
    let directory = vec![
        instance("web-1", "alice")
            .deployment("g1")
            .routed_host("site.example")
            .project("proj1")
            .build(),
        instance("web-1", "bob")
            .deployment("g1")
            .routed_host("site.example")
            .project("proj1")
            .build(),
    ];

    for target in ["web-1", "site.example", "proj1"] {
        let resolution = resolve("alice", target, &directory);
        match &resolution {
            Resolution::Matched { instances, .. } => {
                assert!(
                    instances.iter().all(|i| i.owner() == Some("alice")),
                    "target {target} leaked a foreign instance"
                );
                assert_eq!(instances.len(), 1);
            }
            Resolution::NoMatch => panic!("target {target} should have matched for alice"),
        }
    }

    // An owner with no instances matches nothing, whatever the target.
    for target in ["web-1", "site.example", "proj1"] {
        assert!(resolve("carol", target, &directory).is_no_match());
    }
}

/// A target that matches by name, by routed host, and by project at once
/// must resolve to exactly the name match, never a union.
#[test]
fn name_match_takes_precedence_over_host_and_project() {
    let directory = vec![
        // The instance literally named like the hostname.
        instance("site.example", "alice").project("proj1").build(),
        // Replicas routed to that hostname.
        instance("web-1", "alice")
            .deployment("g1")
            .routed_host("site.example")
            .project("proj1")
            .build(),
        instance("web-2", "alice")
            .deployment("g2")
            .routed_host("site.example")
            .project("proj1")
            .build(),
    ];

    let resolution = resolve("alice", "site.example", &directory);

    assert_eq!(strategy(&resolution), Some(MatchStrategy::Name));
    assert_eq!(matched_names(&resolution), ["site.example"]);
}

#[test]
fn routed_host_takes_precedence_over_project() {
    let directory = vec![
        instance("web-1", "alice")
            .deployment("g1")
            .routed_host("proj1")
            .project("proj1")
            .build(),
        instance("worker-1", "alice").project("proj1").build(),
    ];

    let resolution = resolve("alice", "proj1", &directory);

    assert_eq!(strategy(&resolution), Some(MatchStrategy::RoutedHost));
    assert_eq!(matched_names(&resolution), ["web-1"]);
}

/// All replicas sharing a routed hostname form one removal unit.
#[test]
fn routed_host_matches_every_replica() {
    let directory = vec![
        instance("web-1", "alice")
            .deployment("g1")
            .routed_host("site.example")
            .build(),
        instance("web-2", "alice")
            .deployment("g2")
            .routed_host("site.example")
            .build(),
        instance("unrelated", "alice")
            .deployment("g3")
            .routed_host("other.example")
            .build(),
    ];

    let resolution = resolve("alice", "site.example", &directory);

    assert_eq!(strategy(&resolution), Some(MatchStrategy::RoutedHost));
    assert_eq!(matched_names(&resolution), ["web-1", "web-2"]);
}

#[test]
fn project_match_returns_every_instance_in_project() {
    let directory = vec![
        instance("web-1", "alice").project("proj1").build(),
        instance("worker-1", "alice").project("proj1").build(),
        instance("cron-1", "alice").project("proj1").build(),
        instance("other", "alice").project("proj2").build(),
    ];

    let resolution = resolve("alice", "proj1", &directory);

    assert_eq!(strategy(&resolution), Some(MatchStrategy::Project));
    assert_eq!(matched_names(&resolution), ["cron-1", "web-1", "worker-1"]);
}

#[test]
fn unmatched_target_is_no_match_not_an_error() {
    let directory = vec![instance("web-1", "alice").project("proj1").build()];

    assert!(resolve("alice", "no-such-thing", &directory).is_no_match());
}

/// The shared-route scenario end to end: a hostname spanning two
/// deployment groups, then the same instances reached via project, then a
/// single instance reached by exact name.
#[test]
fn shared_route_and_project_scenario() {
    let routed = vec![
        instance("web-1", "alice")
            .deployment("g1")
            .routed_host("site.example")
            .project("proj1")
            .build(),
        instance("web-2", "alice")
            .deployment("g2")
            .routed_host("site.example")
            .project("proj1")
            .build(),
    ];

    let by_host = resolve("alice", "site.example", &routed);
    assert_eq!(strategy(&by_host), Some(MatchStrategy::RoutedHost));
    assert_eq!(matched_names(&by_host), ["web-1", "web-2"]);

    // Same instances without routing rules: project strategy picks them up.
    let unrouted = vec![
        instance("web-1", "alice")
            .deployment("g1")
            .project("proj1")
            .build(),
        instance("web-2", "alice")
            .deployment("g2")
            .project("proj1")
            .build(),
    ];

    let by_project = resolve("alice", "proj1", &unrouted);
    assert_eq!(strategy(&by_project), Some(MatchStrategy::Project));
    assert_eq!(matched_names(&by_project), ["web-1", "web-2"]);

    // Exact name narrows to one instance even though both share the
    // route and the project.
    let by_name = resolve("alice", "web-1", &routed);
    assert_eq!(strategy(&by_name), Some(MatchStrategy::Name));
    assert_eq!(matched_names(&by_name), ["web-1"]);
}
