//! Bindings to the native cube engine.
//!
//! The engine ships as a C static archive holding all of its state in
//! globals: the cube representation, the solver's move buffer, and the
//! rendered frame. [`NativeEngine`] wraps those entry points in the
//! [`CubeEngine`] contract and tracks the one piece of state the C side does
//! not report back: the length of the most recent solution.

use std::ffi::c_int;
use std::slice;

use pocketcube_core::{
    CUBIE_COLOR_COUNT, CubeEngine, EngineError, EngineResult, FRAME_BYTE_COUNT, TurnId,
};

mod ffi {
    #![allow(non_snake_case)]

    use std::ffi::{c_double, c_int};

    #[link(name = "cubeengine", kind = "static")]
    unsafe extern "C" {
        pub fn init();
        pub fn executeTurn(id: c_int);
        pub fn solveCube() -> c_int;
        pub fn getSolveBuffer() -> *const u8;
        pub fn getCubieColors() -> *const u8;
        pub fn setRotation(xRot: c_double, yRot: c_double);
        pub fn draw();
        pub fn getImageDataBuffer() -> *mut c_int;
    }
}

/// Adapter over the native C engine.
///
/// The C engine is a process-wide singleton, so at most one `NativeEngine`
/// should exist at a time; the view layer owns it exclusively and serializes
/// all calls.
#[derive(Debug)]
pub struct NativeEngine {
    initialized: bool,
    solve_len: usize,
}

impl NativeEngine {
    /// Constructs the adapter without touching the engine. Call
    /// [`CubeEngine::init()`] before anything else.
    pub fn new() -> Self {
        Self {
            initialized: false,
            solve_len: 0,
        }
    }

    fn check_init(&self) -> EngineResult {
        if self.initialized {
            Ok(())
        } else {
            Err(EngineError::EngineUnavailable)
        }
    }
}

impl Default for NativeEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl CubeEngine for NativeEngine {
    fn init(&mut self) -> EngineResult {
        // SAFETY: no arguments; `&mut self` gives exclusive access to the
        // engine globals.
        unsafe { ffi::init() };
        self.initialized = true;
        log::info!("native cube engine initialized");
        Ok(())
    }

    fn execute_turn(&mut self, turn: TurnId) -> EngineResult {
        self.check_init()?;
        // SAFETY: every `TurnId` discriminant is within the engine's move
        // catalog.
        unsafe { ffi::executeTurn(turn as u8 as c_int) };
        Ok(())
    }

    fn solve_cube(&mut self) -> EngineResult<usize> {
        self.check_init()?;
        // SAFETY: no arguments; exclusive access via `&mut self`.
        let count = unsafe { ffi::solveCube() };
        let count = usize::try_from(count).map_err(|_| {
            log::error!("native solve reported move count {count}");
            EngineError::EngineUnavailable
        })?;
        self.solve_len = count;
        Ok(count)
    }

    fn solve_buffer(&self) -> EngineResult<&[u8]> {
        self.check_init()?;
        // SAFETY: no arguments.
        let ptr = unsafe { ffi::getSolveBuffer() };
        if ptr.is_null() {
            return Err(EngineError::EngineUnavailable);
        }
        // SAFETY: the solve buffer holds at least as many bytes as the count
        // most recently returned by `solveCube`, and is not written again
        // until the next `&mut self` entry point ends the borrow.
        Ok(unsafe { slice::from_raw_parts(ptr, self.solve_len) })
    }

    fn cubie_colors(&self) -> EngineResult<&[u8]> {
        self.check_init()?;
        // SAFETY: no arguments.
        let ptr = unsafe { ffi::getCubieColors() };
        if ptr.is_null() {
            return Err(EngineError::EngineUnavailable);
        }
        // SAFETY: the color snapshot is a static 24-byte allocation, not
        // written again until the next `&mut self` entry point ends the
        // borrow.
        Ok(unsafe { slice::from_raw_parts(ptr, CUBIE_COLOR_COUNT) })
    }

    fn set_rotation(&mut self, pitch: f64, yaw: f64) -> EngineResult {
        self.check_init()?;
        // SAFETY: plain `double` arguments.
        unsafe { ffi::setRotation(pitch, yaw) };
        Ok(())
    }

    fn draw(&mut self) -> EngineResult {
        self.check_init()?;
        // SAFETY: no arguments; exclusive access via `&mut self`.
        unsafe { ffi::draw() };
        Ok(())
    }

    fn image_data_buffer(&self) -> EngineResult<&[u8]> {
        self.check_init()?;
        // SAFETY: no arguments.
        let ptr = unsafe { ffi::getImageDataBuffer() };
        if ptr.is_null() {
            return Err(EngineError::EngineUnavailable);
        }
        // The engine packs one pixel per `int`; viewed as bytes the layout
        // is the RGBA sequence the compositor consumes.
        // SAFETY: the frame buffer is a static allocation of exactly
        // `FRAME_BYTE_COUNT` bytes, not written again until the next `draw`.
        Ok(unsafe { slice::from_raw_parts(ptr.cast::<u8>(), FRAME_BYTE_COUNT) })
    }
}
