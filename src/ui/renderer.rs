//! Top-level rendering coordinator.
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → components::render_layout → stdout
//! ```

use crate::app::AppState;
use crate::ui::components;

/// Renders the plugin pane to stdout.
///
/// Prints ANSI-styled output positioned with absolute cursor moves; the host clears
/// the pane before each call.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let viewmodel = state.compute_viewmodel(rows, cols);
    components::render_layout(&viewmodel, &state.theme, rows, cols);
}
