//! Inclusion reasons example.
//!
//! This example demonstrates:
//! - Recording resolved dependencies the way a resolver would
//! - Marking entry points with extra reasons
//! - Retargeting dependencies after deduplication
//! - Reporting why each module is part of the build
//!
//! Run with: RUST_LOG=modgraph=debug cargo run --example inclusion_reasons

use modgraph::{DependencyId, ModuleGraph, ModuleId};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("modgraph=info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    let names = ["src/index.ts", "src/api.ts", "src/utils.ts", "vendor/utils.ts"];
    let [index, api, utils, vendored] = [0, 1, 2, 3].map(ModuleId::from_raw);

    let graph = ModuleGraph::new();

    // Resolver output: each import site resolves once
    graph.add_extra_reason(index, "entry");
    graph.set_resolved_module(Some(index), DependencyId::from_raw(0), api)?;
    graph.set_resolved_module(Some(index), DependencyId::from_raw(1), utils)?;
    graph.set_resolved_module(Some(api), DependencyId::from_raw(2), vendored)?;

    // Deduplication: `vendor/utils.ts` is identical to `src/utils.ts`
    graph.update_module(DependencyId::from_raw(2), utils)?;
    graph.get_meta(vendored).set("mergedInto", names[2]);

    for (raw, name) in names.iter().enumerate() {
        let module = ModuleId::from_raw(raw as u32);
        println!("{name}:");
        let reasons = graph.get_reasons(module);
        if reasons.is_empty() {
            println!("  (not included)");
        }
        for reason in reasons {
            match (reason.origin_module(), reason.explanation()) {
                (Some(origin), _) => println!("  imported by {}", names[origin.raw() as usize]),
                (None, Some(explanation)) => println!("  {explanation}"),
                (None, None) => println!("  (unattributed)"),
            }
        }
    }

    let stats = graph.statistics();
    println!("\nGraph statistics:");
    println!("  Connections: {}", stats.connection_count);
    println!("  Extra reasons: {}", stats.extra_reason_count);
    println!("  Included modules: {}", stats.target_module_count);

    Ok(())
}
