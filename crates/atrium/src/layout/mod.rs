//! # Layout — Placement of Everything Parametric
//!
//! - [`frame_row`]: shared-edge packing of the window frame row around an
//!   anchored frame.
//! - [`facade`]: auto-fitted window grids on building facades.
//! - [`shell`]: the lower wall, side/back walls, floor, ceiling and carpet
//!   derived from the frame row.

pub mod facade;
pub mod frame_row;
pub mod shell;

pub use facade::{Building, FacadeWindows, RoofLayer, WindowCell, WindowGrid, WindowStyle};
pub use frame_row::{FrameRow, FrameSlot, FrameSpec, RowLayout};
pub use shell::{RoomShell, WallConfig};
