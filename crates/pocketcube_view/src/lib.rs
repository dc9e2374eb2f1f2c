//! Interaction and presentation state for the pocket cube viewer.
//!
//! [`ViewController`] owns the engine plus everything derived from it: the
//! viewpoint rotation driven by pointer drags, the unfolded sticker mesh,
//! the solution text, and the latest rendered frame. The engine sees a
//! strictly sequential stream of calls: hosts either drive the controller
//! from a single thread, or share it as an `Arc<parking_lot::Mutex<_>>` so
//! the [`TickDriver`] thread and the host's event handling take turns.
//!
//! Engine failures are not recoverable here. The controller latches the
//! first [`pocketcube_core::EngineError`] it sees, swaps in a blank frame
//! and an error message, and refuses further engine work.

mod controller;
mod frame;
mod mesh;
mod prefs;
mod rotation;
mod solution;
mod tick;

pub use crate::controller::ViewController;
pub use crate::frame::FrameCompositor;
pub use crate::mesh::{FaceletMesh, MeshCell};
pub use crate::prefs::ViewPreferences;
pub use crate::rotation::{DragController, RotationState};
pub use crate::solution::{SOLVE_DISABLED_TEXT, SOLVED_TEXT, SolutionDisplay};
pub use crate::tick::TickDriver;
