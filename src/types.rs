//! Engine type system

/// A type in the engine's type system.
#[derive(Debug)]
pub struct Type {
    _priv: (),
}
