//! Execution context

/// Handle to a Hail execution context.
///
/// The context is created and managed by the engine; this crate only fixes
/// its place in the public API surface.
#[derive(Debug)]
pub struct HailContext {
    _priv: (),
}
