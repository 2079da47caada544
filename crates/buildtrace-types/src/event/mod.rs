mod event;
mod payload;

pub use event::{BuildEvent, ProjectId};
pub use payload::*;
