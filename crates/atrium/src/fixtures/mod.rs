//! # Fixtures — Parametric Room Pieces
//!
//! Each fixture is a plain configuration struct with named fields. `build`
//! appends its draw commands to a [`CommandList`](crate::scene::CommandList)
//! and never reads global state.
//!
//! | Fixture            | Emits                                          |
//! |--------------------|------------------------------------------------|
//! | [`WindowFrame`]    | up to 5 boxes (borders, top/bottom, divider)   |
//! | [`GlassOverlay`]   | 1 blended textured quad                        |
//! | [`CurtainSegment`] | 2 boxes + 2 or 3 overlays                      |
//! | [`DrawString`]     | bead spheres + optional knob                   |
//! | [`ElectricalOutlet`] | 10 boxes                                     |

pub mod curtain;
pub mod draw_string;
pub mod glass;
pub mod outlet;
pub mod window_frame;

pub use curtain::{CurtainGeometry, CurtainPlan, CurtainSegment, CurtainStyle};
pub use draw_string::DrawString;
pub use glass::GlassOverlay;
pub use outlet::ElectricalOutlet;
pub use window_frame::{FramePiece, WindowFrame, FRAME_MATERIAL};
