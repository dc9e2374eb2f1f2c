//! Cube engine adapters for the pocket cube viewer.
//!
//! [`FakeEngine`] is a deterministic in-process stand-in used by tests and by
//! the demo app when no real engine is linked. The `native` cargo feature
//! adds [`NativeEngine`], which binds the C engine's entry points.

mod fake;
#[cfg(feature = "native")]
mod native;

pub use crate::fake::FakeEngine;
#[cfg(feature = "native")]
pub use crate::native::NativeEngine;
