//! Parameter storage trait.

use crate::StoreError;
use agora_types::GovParams;

/// Trait for storing the scalar governance parameter set.
pub trait ParamsStore {
    fn get_params(&self) -> Result<GovParams, StoreError>;

    fn set_params(&self, params: &GovParams) -> Result<(), StoreError>;
}
