//! Keyed tables

/// Handle to a keyed table.
#[derive(Debug)]
pub struct KeyTable {
    _priv: (),
}
