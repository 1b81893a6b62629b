//! Core types - pure abstractions shared by the rewriters and the host.

mod context;
mod hook;
mod mode;
mod priority;
pub mod url;

pub use context::RenderContext;
pub use hook::{DocumentRewriter, HookPoint, HookRegistry};
pub use mode::Mode;
pub use priority::Priority;
