//! The turn protocol and command engine: selection state machine,
//! rejections, spend resolution, and the session that ties them together.

mod economy;
mod engine;
mod rejection;
mod selection;

pub use economy::resolve_spend;
pub use engine::GameSession;
pub use rejection::Rejection;
pub use selection::{GridTransition, Selection};
