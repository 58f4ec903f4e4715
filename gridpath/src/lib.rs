//! Grid pathfinding with animated output.
//!
//! A board is given as text (`.` open, `B` wall, `S` start, `X` goal),
//! searched with A* under 8-directional movement, and the resulting path is
//! drawn as a GIF with one frame per step.

pub use board::*;
pub use config::*;
pub use errors::*;
pub use grid::*;
pub use render::*;
pub use search::*;
pub use visualization::*;

#[cfg(test)]
mod arbitrary;
mod board;
mod config;
mod errors;
mod grid;
mod render;
mod search;
mod visualization;

/// Parses the board, finds a path and renders it with the default config.
///
/// An unreachable goal is not an error: the animation then shows the path to
/// the reachable cell closest to the goal.
pub fn draw_path(text: &str) -> Result<Vec<u8>, PathfindingError> {
    draw_path_with(text, &RenderConfig::default())
}

/// Like [`draw_path()`], with a custom [`RenderConfig`].
pub fn draw_path_with(text: &str, config: &RenderConfig) -> Result<Vec<u8>, PathfindingError> {
    let board = Board::parse(text)?;
    let outcome = board.solve();
    Ok(render_gif(&board, &outcome.path, config)?)
}
