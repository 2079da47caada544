use buildtrace_types::{BuildEvent, CompilerDialect, EventPayload};

use super::{BuildEventHandler, command_base_dir, store_invocation};
use crate::context::AggregationContext;

/// Handles the Csc task command-line event.
pub(crate) struct CSharpCommandHandler;

impl BuildEventHandler for CSharpCommandHandler {
    fn handle(&self, event: &BuildEvent, context: &mut AggregationContext) -> bool {
        let EventPayload::TaskCommandLine(payload) = &event.payload else {
            return false;
        };
        if payload.command_line.is_empty()
            || !payload
                .task_name
                .eq_ignore_ascii_case(CompilerDialect::CSharp.task_name())
        {
            return false;
        }

        context.update(event, |analysis| {
            store_invocation(analysis, event, |analysis| {
                buildtrace_compiler::parse(
                    CompilerDialect::CSharp,
                    command_base_dir(analysis).as_deref(),
                    &payload.command_line,
                )
            })
        });
        true
    }
}
