//! The token registry interface and an in-memory implementation.
//!
//! The registry is an external collaborator: claimvault consumes its
//! `transfer` entrypoint and nothing else. [`MockTokenRegistry`] exists so
//! scenarios can observe item ownership moving and can inject rejections.

use std::collections::HashMap;

use claimvault_types::{Address, ClaimvaultError, ItemId, Result, TransferBatch};

/// The consumed surface of the external token registry.
pub trait TokenRegistry {
    /// Execute a batch transfer. Must be all-or-nothing: either every line
    /// item applies or the whole request is rejected.
    ///
    /// # Errors
    /// Returns [`ClaimvaultError::ExternalCallRejected`] on any invalid
    /// line item.
    fn transfer(&mut self, batches: &[TransferBatch]) -> Result<()>;
}

/// In-memory registry tracking single ownership of each item.
#[derive(Debug, Clone, Default)]
pub struct MockTokenRegistry {
    owners: HashMap<ItemId, Address>,
}

impl MockTokenRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign initial ownership of an item (test setup).
    pub fn mint_item(&mut self, item: ItemId, owner: Address) {
        self.owners.insert(item, owner);
    }

    /// Current owner of `item`, if it exists.
    #[must_use]
    pub fn owner_of(&self, item: ItemId) -> Option<Address> {
        self.owners.get(&item).copied()
    }

    /// Number of items the registry knows about.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.owners.len()
    }
}

impl TokenRegistry for MockTokenRegistry {
    fn transfer(&mut self, batches: &[TransferBatch]) -> Result<()> {
        // Validate every line item before applying any, so a rejection
        // leaves the registry untouched.
        for batch in batches {
            for tx in &batch.txs {
                if tx.quantity != 1 {
                    return Err(ClaimvaultError::ExternalCallRejected {
                        reason: format!(
                            "unsupported quantity {} for {}",
                            tx.quantity, tx.item_id
                        ),
                    });
                }
                match self.owners.get(&tx.item_id) {
                    Some(owner) if *owner == batch.from => {}
                    Some(_) => {
                        return Err(ClaimvaultError::ExternalCallRejected {
                            reason: format!("{} not owned by {}", tx.item_id, batch.from),
                        });
                    }
                    None => {
                        return Err(ClaimvaultError::ExternalCallRejected {
                            reason: format!("unknown item {}", tx.item_id),
                        });
                    }
                }
            }
        }

        for batch in batches {
            for tx in &batch.txs {
                self.owners.insert(tx.item_id, tx.to);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claimvault_types::TransferTx;

    fn batch(from: Address, to: Address, ids: &[ItemId]) -> Vec<TransferBatch> {
        vec![TransferBatch {
            from,
            txs: ids
                .iter()
                .map(|&item_id| TransferTx {
                    to,
                    item_id,
                    quantity: 1,
                })
                .collect(),
        }]
    }

    #[test]
    fn transfer_moves_ownership() {
        let mut registry = MockTokenRegistry::new();
        let seller = Address::new();
        let buyer = Address::new();
        registry.mint_item(ItemId(1), seller);
        registry.mint_item(ItemId(2), seller);

        registry
            .transfer(&batch(seller, buyer, &[ItemId(1), ItemId(2)]))
            .unwrap();

        assert_eq!(registry.owner_of(ItemId(1)), Some(buyer));
        assert_eq!(registry.owner_of(ItemId(2)), Some(buyer));
    }

    #[test]
    fn transfer_of_unowned_item_rejected_without_partial_effect() {
        let mut registry = MockTokenRegistry::new();
        let seller = Address::new();
        let buyer = Address::new();
        registry.mint_item(ItemId(1), seller);
        // ItemId(2) belongs to someone else.
        let other = Address::new();
        registry.mint_item(ItemId(2), other);

        let err = registry
            .transfer(&batch(seller, buyer, &[ItemId(1), ItemId(2)]))
            .unwrap_err();
        assert!(matches!(err, ClaimvaultError::ExternalCallRejected { .. }));

        // Nothing moved, including the valid first line item.
        assert_eq!(registry.owner_of(ItemId(1)), Some(seller));
        assert_eq!(registry.owner_of(ItemId(2)), Some(other));
    }

    #[test]
    fn transfer_of_unknown_item_rejected() {
        let mut registry = MockTokenRegistry::new();
        let err = registry
            .transfer(&batch(Address::new(), Address::new(), &[ItemId(99)]))
            .unwrap_err();
        assert!(matches!(err, ClaimvaultError::ExternalCallRejected { .. }));
    }

    #[test]
    fn non_unit_quantity_rejected() {
        let mut registry = MockTokenRegistry::new();
        let seller = Address::new();
        registry.mint_item(ItemId(1), seller);

        let batches = vec![TransferBatch {
            from: seller,
            txs: vec![TransferTx {
                to: Address::new(),
                item_id: ItemId(1),
                quantity: 2,
            }],
        }];
        let err = registry.transfer(&batches).unwrap_err();
        assert!(matches!(err, ClaimvaultError::ExternalCallRejected { .. }));
    }
}
