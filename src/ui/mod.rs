//! User interface rendering layer.
//!
//! The UI follows a declarative model:
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → render → ANSI Output
//! ```
//!
//! - [`presenter`]: turns a quote into display content
//! - [`viewmodel`]: view model types
//! - [`renderer`]: top-level rendering entry point
//! - [`components`]: per-panel renderers
//! - [`helpers`]: cursor positioning, wrapping and truncation
//! - [`theme`]: color schemes and ANSI escape sequences

pub mod components;
pub mod helpers;
pub mod presenter;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use presenter::{DisplaySurface, PLACEHOLDER};
pub use renderer::render;
pub use theme::Theme;
pub use viewmodel::UIViewModel;
