//! Shared utilities

/// Settings for importing text tables.
#[derive(Debug)]
pub struct TextTableConfig {
    _priv: (),
}
