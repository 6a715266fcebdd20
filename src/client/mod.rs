//! Client-side driver for the news proxy: request state, the single
//! in-flight guard, debounced search and pagination for a renderer.

pub mod debounce;
pub mod portal;
pub mod presenter;
pub mod source;

pub use portal::{LoadOutcome, NewsPortal, Phase, PortalState, ViewMode};
pub use presenter::{present, DisplayState, ViewModel};
pub use source::{HttpNewsSource, NewsSource};
