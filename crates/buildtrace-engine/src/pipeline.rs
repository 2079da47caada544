use buildtrace_types::BuildEvent;

use crate::analysis::BuildAnalysis;
use crate::context::AggregationContext;

/// Fold an ordered event sequence into the per-project result collection.
///
/// Consumes the sequence exactly once, in delivery order. Events for a
/// given project instance must arrive in order: the handler rules are
/// first-wins / latest-wins, so reordering changes results.
///
/// For live transports, drive an [`AggregationContext`] directly with
/// [`AggregationContext::dispatch`] and finalize whenever the stream ends;
/// this function is that loop for an already-materialized sequence.
pub fn analyze_events<I>(events: I) -> BuildAnalysis
where
    I: IntoIterator<Item = BuildEvent>,
{
    let mut context = AggregationContext::new();
    for event in events {
        context.dispatch(event);
    }
    context.into_analysis()
}
