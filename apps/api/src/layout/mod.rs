// Grid layout: breakpoints, filler stream, text/frame helpers, and the layout engine.
// Layout computation is pure and CPU-bound; request paths run ad-hoc layouts inside
// tokio::task::spawn_blocking.

pub mod breakpoint;
pub mod cell;
pub mod filler;
pub mod frame;
pub mod grid;
pub mod width;
pub mod wrap;

// Re-export the public API consumed by the site and route handlers.
pub use breakpoint::{resolve_breakpoint, BreakpointConfig, BREAKPOINT_COLUMNS};
pub use cell::GridLayout;
pub use filler::{load_filler, FillerSource};
pub use grid::compute_grid_layout;
