//! Move catalogs, sticker colors, and the engine capability boundary for the
//! pocket cube (2×2×2) viewer.

mod color;
mod engine;
pub mod notation;
mod rgb;
mod turn;

pub use crate::color::{FaceletColor, facelet_rgb};
pub use crate::engine::{
    CUBIE_COLOR_COUNT, CubeEngine, EngineError, EngineResult, FRAME_BYTE_COUNT, FRAME_HEIGHT,
    FRAME_WIDTH,
};
pub use crate::rgb::Rgb;
pub use crate::turn::{Face, OrientationId, TurnId};
