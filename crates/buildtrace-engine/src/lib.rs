// Aggregation engine - folds an ordered build event stream into per-project
// analysis records. This layer sits between the event model (types) and any
// presentation or transport on top.
//
// The fold is single-threaded and strictly ordered by design: handler rules
// are first-wins / latest-wins, so reordering changes results. Independent
// runs own independent contexts and can execute in parallel freely.

mod analysis;
mod context;
mod handlers;
mod model;
mod pipeline;

pub use analysis::BuildAnalysis;
pub use context::AggregationContext;
pub use model::ProjectAnalysis;
pub use pipeline::analyze_events;
