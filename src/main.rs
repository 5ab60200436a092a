//! Merit-dispatch entry point: CLI wiring and config-driven dispatcher construction.

use std::path::Path;
use std::process;

use clap::Parser;

use merit_dispatch::cli::Args;
use merit_dispatch::dispatch::{DispatchSummary, Dispatcher};
use merit_dispatch::io::export::export_csv;
use merit_dispatch::payload::{ProductionPlanRequest, plan_entries};
use merit_dispatch::telemetry::init_tracing;

/// Prints `message` to stderr and exits with status 1.
fn fail(message: impl std::fmt::Display) -> ! {
    eprintln!("error: {message}");
    process::exit(1);
}

/// Dispatches the production-plan request stored at `path`.
fn run_scenario(dispatcher: &Dispatcher, path: &Path, args: &Args) {
    let request = ProductionPlanRequest::from_json_path(path).unwrap_or_else(|e| fail(e));
    let scenario = request.into_scenario();

    let plan = dispatcher.dispatch(&scenario).unwrap_or_else(|e| {
        tracing::warn!(code = e.code(), "dispatch refused");
        fail(e)
    });
    tracing::info!(
        scenario = %path.display(),
        load_mw = plan.load_mw(),
        cost_model = dispatcher.cost_model().name(),
        "dispatch complete"
    );

    if args.json {
        match serde_json::to_string_pretty(&plan_entries(plan.allocations())) {
            Ok(body) => println!("{body}"),
            Err(e) => fail(format!("failed to encode plan: {e}")),
        }
    } else {
        for a in plan.allocations() {
            println!("{a}");
        }
        println!("\n{}", DispatchSummary::from_plan(&plan));
    }

    if let Some(ref out) = args.out {
        if let Err(e) = export_csv(plan.allocations(), out) {
            fail(format!("failed to write CSV: {e}"));
        }
        eprintln!("Allocation written to {}", out.display());
    }
}

fn main() {
    let args = Args::parse();
    init_tracing();

    // Load config: --config takes priority, then --preset, then fuel_only
    let config = args.load_config().unwrap_or_else(|e| fail(e));

    let errors = config.validate();
    if !errors.is_empty() {
        for e in &errors {
            eprintln!("{e}");
        }
        process::exit(1);
    }

    let cost_model = config.cost_model().unwrap_or_else(|e| fail(e));
    let dispatcher = Dispatcher::new(cost_model);
    tracing::debug!(%cost_model, "dispatcher configured");

    if args.scenario.is_none() && !args.serves() {
        fail("nothing to do: pass --scenario <PATH> (or --serve with the api feature)");
    }

    if let Some(ref path) = args.scenario {
        run_scenario(&dispatcher, path, &args);
    }

    #[cfg(feature = "api")]
    if args.serves() {
        use std::net::{IpAddr, SocketAddr};
        use std::sync::Arc;

        let ip: IpAddr = config.server.host.parse().unwrap_or_else(|e| {
            fail(format!(
                "server.host \"{}\" is not an IP address: {e}",
                config.server.host
            ))
        });
        let addr = SocketAddr::new(ip, config.server.port);
        let state = Arc::new(merit_dispatch::api::AppState { dispatcher });

        let rt = tokio::runtime::Runtime::new()
            .unwrap_or_else(|e| fail(format!("failed to create tokio runtime: {e}")));
        if let Err(e) = rt.block_on(merit_dispatch::api::serve(state, addr)) {
            fail(format!("API server failed: {e}"));
        }
    }
}
