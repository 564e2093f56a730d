//! Marketplace configuration.

use serde::{Deserialize, Serialize};

use crate::Address;

/// Immutable configuration fixed at contract deployment.
///
/// Neither field is ever mutated after construction: the administrator is
/// the single identity allowed to trigger redemption, and the token
/// registry is the external contract that settles item transfers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketplaceConfig {
    /// Address of the external token registry contract.
    pub token_registry: Address,
    /// The identity authorized to redeem claims.
    pub administrator: Address,
}

impl MarketplaceConfig {
    #[must_use]
    pub fn new(token_registry: Address, administrator: Address) -> Self {
        Self {
            token_registry,
            administrator,
        }
    }
}
