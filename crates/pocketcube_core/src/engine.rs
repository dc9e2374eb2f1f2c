use std::fmt;

use crate::TurnId;

/// Number of bytes in a cube state color snapshot: 6 faces × 4 stickers.
pub const CUBIE_COLOR_COUNT: usize = 24;

/// Width of the rendered frame in pixels.
pub const FRAME_WIDTH: u32 = 300;
/// Height of the rendered frame in pixels.
pub const FRAME_HEIGHT: u32 = 300;
/// Number of bytes in the rendered RGBA frame buffer.
pub const FRAME_BYTE_COUNT: usize = (FRAME_WIDTH * FRAME_HEIGHT * 4) as usize;

/// Result of a call across the engine boundary.
pub type EngineResult<T = ()> = Result<T, EngineError>;

/// Error from the engine capability boundary.
///
/// Every variant is fatal to the view layer: the first error observed is
/// latched and displayed, and no further engine calls are made.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// The engine is missing, not yet initialized, or failed to start.
    #[error("cube engine is not available")]
    EngineUnavailable,
    /// A move byte outside the 12-turn catalog crossed the boundary.
    #[error("invalid turn ID {0}")]
    InvalidTurnId(u8),
    /// An engine buffer did not have the length its contract requires.
    #[error("buffer size mismatch: expected {expected} bytes, got {actual}")]
    BufferSizeMismatch {
        /// Length the contract requires.
        expected: usize,
        /// Length the engine actually returned.
        actual: usize,
    },
}

/// Cube engine reached through a fixed set of entry points.
///
/// The engine owns the authoritative cube state, the solver, and the 3D
/// rasterizer; the view layer holds it as a `Box<dyn CubeEngine>` and never
/// sees inside. Implementations are not expected to be internally
/// thread-safe: callers serialize access (see the crate-level docs of
/// `pocketcube_view`).
///
/// [`CubeEngine::init()`] must complete successfully before any other method
/// is called; everything else returns [`EngineError::EngineUnavailable`]
/// until it does.
pub trait CubeEngine: 'static + fmt::Debug + Send {
    /// Performs one-time engine setup.
    fn init(&mut self) -> EngineResult;

    /// Applies one face turn to the cube state.
    fn execute_turn(&mut self, turn: TurnId) -> EngineResult;

    /// Solves the cube from its current state and returns the number of moves
    /// in the solution. The moves themselves are read from
    /// [`CubeEngine::solve_buffer()`].
    fn solve_cube(&mut self) -> EngineResult<usize>;

    /// Returns the solution found by the most recent
    /// [`CubeEngine::solve_cube()`] call, one turn byte per move.
    fn solve_buffer(&self) -> EngineResult<&[u8]>;

    /// Returns the color snapshot of the current cube state: one
    /// [`FaceletColor`](crate::FaceletColor) byte per sticker, face-major in
    /// `U L F R B D` order, stickers row-major within each face.
    ///
    /// The snapshot always reflects the current state; there is no separate
    /// "recompute" step.
    fn cubie_colors(&self) -> EngineResult<&[u8]>;

    /// Sets the viewpoint rotation used by subsequent
    /// [`CubeEngine::draw()`] calls. Angles are in radians.
    fn set_rotation(&mut self, pitch: f64, yaw: f64) -> EngineResult;

    /// Renders the cube into the engine's frame buffer.
    fn draw(&mut self) -> EngineResult;

    /// Returns the rendered frame: [`FRAME_BYTE_COUNT`] bytes of RGBA pixel
    /// data, row-major from the top-left corner.
    fn image_data_buffer(&self) -> EngineResult<&[u8]>;
}
