//! Access policy: identity checks gating privileged entrypoints.

use claimvault_types::{Address, ClaimvaultError, MarketplaceConfig, Result};

/// Require that `sender` is the configured administrator.
///
/// # Errors
/// Returns [`ClaimvaultError::Unauthorized`] otherwise.
pub fn require_administrator(sender: Address, config: &MarketplaceConfig) -> Result<()> {
    if sender == config.administrator {
        Ok(())
    } else {
        Err(ClaimvaultError::Unauthorized { sender })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn administrator_passes() {
        let admin = Address::new();
        let config = MarketplaceConfig::new(Address::new(), admin);
        assert!(require_administrator(admin, &config).is_ok());
    }

    #[test]
    fn non_administrator_rejected() {
        let config = MarketplaceConfig::new(Address::new(), Address::new());
        let intruder = Address::new();
        let err = require_administrator(intruder, &config).unwrap_err();
        assert!(matches!(err, ClaimvaultError::Unauthorized { sender } if sender == intruder));
    }
}
