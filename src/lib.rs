//! Hail client SDK
//!
//! Public API surface for the Hail client. Consumers import everything
//! they need from the crate root:
//! - `HailContext` for the execution context
//! - `VariantDataset` for variant data
//! - `KeyTable` for keyed tabular data
//! - `TextTableConfig` for text table import settings
//! - `Type` for the engine's type system

pub mod context;
pub mod dataset;
pub mod keytable;
pub mod types;
pub mod utils;

// Re-export main types
pub use context::HailContext;
pub use dataset::VariantDataset;
pub use keytable::KeyTable;
pub use utils::TextTableConfig;
pub use types::Type;
