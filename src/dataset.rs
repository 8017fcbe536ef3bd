//! Variant datasets

/// Handle to a dataset of genomic variants.
#[derive(Debug)]
pub struct VariantDataset {
    _priv: (),
}
