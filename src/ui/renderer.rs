//! Top-level rendering coordinator.
//!
//! Rendering is two steps: compute a [`UIViewModel`](crate::ui::UIViewModel) from the page state,
//! then hand it to the components. Nothing in between touches the state.

use crate::app::PageState;
use crate::ui::components;

/// Renders the plugin UI for a `rows` x `cols` pane to stdout.
pub fn render(state: &PageState, rows: usize, cols: usize) {
    let viewmodel = state.compute_viewmodel(rows, cols);

    components::render_page(&viewmodel, &state.theme, cols, rows);
}
