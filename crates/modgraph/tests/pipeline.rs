//! Integration tests driving the graph the way the bundling pipeline does:
//! a resolver pass, a deduplication pass, then a reporting pass.

use std::sync::Once;

use modgraph::{Connection, DependencyId, Error, ModuleGraph, ModuleId};
use serde::{Deserialize, Serialize};

static INIT: Once = Once::new();

fn init_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Stand-in for the resolver: import sites by (origin, target).
struct Fixture {
    graph: ModuleGraph,
    entry: ModuleId,
    router: ModuleId,
    lodash_a: ModuleId,
    lodash_b: ModuleId,
}

fn resolve_fixture() -> Fixture {
    let graph = ModuleGraph::new();
    let [entry, router, lodash_a, lodash_b] = [0, 1, 2, 3].map(ModuleId::from_raw);
    let imports = [
        (entry, router),
        (entry, lodash_a),
        (router, lodash_b),
        (router, lodash_a),
    ];

    graph.add_extra_reason(entry, "entry");
    for (raw, (origin, target)) in imports.into_iter().enumerate() {
        graph
            .set_resolved_module(Some(origin), DependencyId::from_raw(raw as u32), target)
            .expect("every import site resolves once");
    }

    Fixture {
        graph,
        entry,
        router,
        lodash_a,
        lodash_b,
    }
}

/// Stand-in for a deduplication pass: repoint everything targeting `from`.
fn merge_into(graph: &ModuleGraph, from: ModuleId, into: ModuleId) -> modgraph::Result<usize> {
    let dependencies: Vec<DependencyId> = graph
        .get_reasons(from)
        .iter()
        .filter_map(Connection::dependency)
        .collect();
    for &dependency in &dependencies {
        graph.update_module(dependency, into)?;
    }
    graph.get_meta(from).set("mergedInto", into.raw());
    Ok(dependencies.len())
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct InclusionReport {
    importers: Vec<u32>,
    is_entry: bool,
}

#[test]
fn dedup_pass_moves_reasons_and_preserves_resolution() {
    init_tracing();
    let Fixture {
        graph,
        entry,
        router,
        lodash_a,
        lodash_b,
    } = resolve_fixture();

    let moved = merge_into(&graph, lodash_b, lodash_a).unwrap();

    assert_eq!(moved, 1);
    assert!(graph.get_reasons(lodash_b).is_empty());
    assert_eq!(graph.reason_count(lodash_a), 3);
    assert_eq!(graph.incoming_modules(lodash_a), vec![entry, router]);
    // The resolver's answer is kept for the merged-away module.
    assert_eq!(graph.get_module(DependencyId::from_raw(2)), Some(lodash_b));
    assert_eq!(
        graph.get_meta(lodash_b).get_as::<u32>("mergedInto").unwrap(),
        Some(lodash_a.raw())
    );
}

#[test]
fn reporting_pass_records_reports_in_metadata() {
    init_tracing();
    let fixture = resolve_fixture();
    let graph = &fixture.graph;

    for module in [fixture.entry, fixture.router, fixture.lodash_a] {
        let reasons = graph.get_reasons(module);
        let report = InclusionReport {
            importers: graph
                .incoming_modules(module)
                .into_iter()
                .map(ModuleId::raw)
                .collect(),
            is_entry: reasons.iter().any(Connection::is_extra_reason),
        };
        graph.get_meta(module).set_as("inclusion", &report).unwrap();
    }

    let entry: InclusionReport = graph
        .get_meta(fixture.entry)
        .get_as("inclusion")
        .unwrap()
        .expect("report written above");
    assert_eq!(
        entry,
        InclusionReport {
            importers: vec![],
            is_entry: true
        }
    );

    let shared: InclusionReport = graph
        .get_meta(fixture.lodash_a)
        .get_as("inclusion")
        .unwrap()
        .expect("report written above");
    assert_eq!(shared.importers, vec![0, 1]);
    assert!(!shared.is_entry);
}

#[test]
fn resolver_contract_violations_surface_as_errors() {
    init_tracing();
    let fixture = resolve_fixture();
    let before = fixture.graph.statistics();

    let duplicate = fixture.graph.set_resolved_module(
        Some(fixture.router),
        DependencyId::from_raw(0),
        fixture.lodash_b,
    );
    let unknown = fixture
        .graph
        .update_module(DependencyId::from_raw(99), fixture.lodash_a);

    assert!(matches!(duplicate, Err(Error::DuplicateReference(_))));
    assert!(matches!(unknown, Err(Error::UnknownReference(_))));
    assert_eq!(fixture.graph.statistics(), before);
    assert_eq!(before.connection_count, 5);
    assert_eq!(before.extra_reason_count, 1);
    assert_eq!(before.target_module_count, 4);
}

#[test]
fn statistics_serialize_for_reports() {
    init_tracing();
    let fixture = resolve_fixture();

    let json = serde_json::to_value(fixture.graph.statistics()).unwrap();

    assert_eq!(json["connection_count"], 5);
    assert_eq!(json["target_module_count"], 4);
}
