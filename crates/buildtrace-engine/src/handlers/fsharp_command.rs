use buildtrace_types::{BuildEvent, CompilerDialect, EventPayload};

use super::{BuildEventHandler, command_base_dir, store_invocation};
use crate::context::AggregationContext;

/// Handles the Fsc compiler message event.
///
/// Fsc reports its invocation on the message channel. The tokenizing check
/// filters out messages similar to:
/// `Microsoft (R) F# Compiler version 13.9.300.0 for F# 9.0`
/// which are communicated during restore.
pub(crate) struct FSharpCommandHandler;

impl BuildEventHandler for FSharpCommandHandler {
    fn handle(&self, event: &BuildEvent, context: &mut AggregationContext) -> bool {
        let EventPayload::CompilerMessage(payload) = &event.payload else {
            return false;
        };
        if !payload
            .sender
            .eq_ignore_ascii_case(CompilerDialect::FSharp.task_name())
            || buildtrace_compiler::split_compiler_message(&payload.text).is_empty()
        {
            return false;
        }

        context.update(event, |analysis| {
            store_invocation(analysis, event, |analysis| {
                buildtrace_compiler::parse(
                    CompilerDialect::FSharp,
                    command_base_dir(analysis).as_deref(),
                    &payload.text,
                )
            })
        });
        true
    }
}
