//! Bonded-power view consumed by the tally engine.

use agora_types::Address;

/// Read-only view of bonded stake at tally time.
pub trait Staking {
    /// Bonded power of one voter (0 for unknown voters).
    fn bonded_power(&self, voter: &Address) -> u128;

    /// Total bonded power, the quorum denominator.
    fn total_bonded(&self) -> u128;
}
