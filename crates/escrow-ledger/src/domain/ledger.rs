//! The escrow state machine.
//!
//! Holds every listing and applies the seven transition operations. The
//! caller address is an explicit argument on every mutating operation;
//! the ledger is the sole authority on whether that caller may act.
//!
//! Custody and fund movement go through the outbound ports so the ledger
//! itself stays free of storage concerns.

use crate::domain::accounts::{UserAccount, UserDirectory};
use crate::domain::errors::EscrowError;
use crate::domain::listing::{Listing, ListingPhase, ListingStage};
use crate::events::EscrowEvent;
use crate::ports::outbound::{AssetRegistry, EventSink, FundsRail};
use shared_types::{format_address, Address, Amount, PropertyId, Role, ZERO_ADDRESS};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info};

/// The fixed party addresses of one ledger deployment.
///
/// Explicit configuration on the instance, shared by every listing it
/// manages. Nothing here precludes per-listing parties later.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PartyConfig {
    pub seller: Address,
    pub inspector: Address,
    pub lender: Address,
}

/// Authoritative escrow ledger for one deployment.
pub struct EscrowLedger {
    /// The ledger's own address: custodian of listed assets and holder
    /// of deposited funds.
    address: Address,
    parties: PartyConfig,
    assets: Arc<dyn AssetRegistry>,
    funds: Arc<dyn FundsRail>,
    sink: Arc<dyn EventSink>,
    listings: HashMap<PropertyId, Listing>,
    users: UserDirectory,
}

impl EscrowLedger {
    pub fn new(
        address: Address,
        parties: PartyConfig,
        assets: Arc<dyn AssetRegistry>,
        funds: Arc<dyn FundsRail>,
        sink: Arc<dyn EventSink>,
    ) -> Self {
        Self {
            address,
            parties,
            assets,
            funds,
            sink,
            listings: HashMap::new(),
            users: UserDirectory::new(),
        }
    }

    fn active(&self, id: PropertyId) -> Result<&Listing, EscrowError> {
        self.listings
            .get(&id)
            .filter(|l| l.is_listed())
            .ok_or(EscrowError::NotListed(id))
    }

    fn active_mut(&mut self, id: PropertyId) -> Result<&mut Listing, EscrowError> {
        self.listings
            .get_mut(&id)
            .filter(|l| l.is_listed())
            .ok_or(EscrowError::NotListed(id))
    }

    // === Transitions ===

    /// Lists a property for sale. Seller-only; pulls the asset into the
    /// ledger's custody.
    pub fn list(
        &mut self,
        caller: Address,
        id: PropertyId,
        buyer: Address,
        purchase_price: Amount,
        escrow_amount: Amount,
    ) -> Result<(), EscrowError> {
        if caller != self.parties.seller {
            return Err(EscrowError::Unauthorized {
                caller,
                required: "the seller",
            });
        }
        if self.listings.get(&id).is_some_and(Listing::is_listed) {
            return Err(EscrowError::AlreadyListed(id));
        }

        self.assets.transfer(caller, self.address, id)?;
        self.listings
            .insert(id, Listing::new(id, buyer, purchase_price, escrow_amount));

        info!(
            property_id = id,
            buyer = %format_address(&buyer),
            purchase_price = %purchase_price,
            escrow_amount = %escrow_amount,
            "property listed"
        );
        self.sink.emit(EscrowEvent::PropertyListed {
            id,
            buyer,
            purchase_price,
            escrow_amount,
        });
        Ok(())
    }

    /// Accepts the buyer's earnest deposit. The paid amount must equal
    /// the escrow amount exactly, above and below both fail.
    pub fn deposit_earnest(
        &mut self,
        caller: Address,
        id: PropertyId,
        amount: Amount,
    ) -> Result<(), EscrowError> {
        let (buyer, required) = {
            let listing = self.active(id)?;
            (listing.buyer, listing.escrow_amount)
        };
        if caller != buyer {
            return Err(EscrowError::Unauthorized {
                caller,
                required: "the designated buyer",
            });
        }
        if amount != required {
            return Err(EscrowError::AmountMismatch {
                paid: amount,
                required,
            });
        }

        self.funds.transfer(caller, self.address, amount)?;
        let listing = self.active_mut(id)?;
        listing.deposited_funds = listing.deposited_funds.saturating_add(amount);

        info!(property_id = id, amount = %amount, "earnest deposited");
        self.sink.emit(EscrowEvent::EarnestDeposited {
            id,
            from: caller,
            amount,
        });
        Ok(())
    }

    /// Records the caller's approval. Any of the four parties may
    /// approve; finalization only checks the buyer/seller/lender bits,
    /// while the inspector's bit feeds the two-step inspection signal.
    /// Re-approving is a no-op.
    pub fn approve_transaction(
        &mut self,
        caller: Address,
        id: PropertyId,
    ) -> Result<(), EscrowError> {
        let seller = self.parties.seller;
        let lender = self.parties.lender;
        let inspector = self.parties.inspector;
        let listing = self.active_mut(id)?;

        if caller != listing.buyer
            && caller != seller
            && caller != lender
            && caller != inspector
        {
            return Err(EscrowError::Unauthorized {
                caller,
                required: "a party to this transaction",
            });
        }

        if listing.approve(caller) {
            info!(property_id = id, by = %format_address(&caller), "transaction approved");
            self.sink
                .emit(EscrowEvent::TransactionApproved { id, by: caller });
        } else {
            debug!(property_id = id, by = %format_address(&caller), "repeat approval ignored");
        }
        Ok(())
    }

    /// Sets the inspection verdict. Inspector-only; latest write wins,
    /// so the inspector retains retraction power until finalization.
    pub fn update_inspection_status(
        &mut self,
        caller: Address,
        id: PropertyId,
        passed: bool,
    ) -> Result<(), EscrowError> {
        self.active(id)?;
        if caller != self.parties.inspector {
            return Err(EscrowError::Unauthorized {
                caller,
                required: "the inspector",
            });
        }
        let listing = self.active_mut(id)?;
        listing.inspection_passed = passed;

        info!(property_id = id, passed, "inspection status updated");
        self.sink.emit(EscrowEvent::InspectionUpdated { id, passed });
        Ok(())
    }

    /// Completes the sale: asset to buyer, purchase price to seller.
    ///
    /// Requires unanimous approval from buyer, seller, and lender, a
    /// passed inspection, and deposited funds covering the price. Each
    /// missing condition fails with its own error so the seller knows
    /// which party is outstanding.
    pub fn finalize_sale(&mut self, caller: Address, id: PropertyId) -> Result<(), EscrowError> {
        let listing = self.active(id)?;
        if caller != self.parties.seller {
            return Err(EscrowError::Unauthorized {
                caller,
                required: "the seller",
            });
        }

        let mut missing = Vec::new();
        for (addr, role) in [
            (listing.buyer, Role::Buyer),
            (self.parties.seller, Role::Seller),
            (self.parties.lender, Role::Lender),
        ] {
            if !listing.has_approved(&addr) {
                missing.push(role);
            }
        }
        if !missing.is_empty() {
            return Err(EscrowError::IncompleteApprovals { missing });
        }
        if !listing.inspection_passed {
            return Err(EscrowError::InspectionNotPassed(id));
        }
        if listing.deposited_funds < listing.purchase_price {
            return Err(EscrowError::InsufficientFunds {
                required: listing.purchase_price,
                available: listing.deposited_funds,
            });
        }

        let buyer = listing.buyer;
        let price = listing.purchase_price;
        self.assets.transfer(self.address, buyer, id)?;
        self.funds.transfer(self.address, self.parties.seller, price)?;

        let listing = self.active_mut(id)?;
        listing.deposited_funds = listing.deposited_funds.saturating_sub(price);
        listing.phase = ListingPhase::Finalized;

        info!(property_id = id, buyer = %format_address(&buyer), amount = %price, "sale finalized");
        self.sink.emit(EscrowEvent::SaleFinalized {
            id,
            buyer,
            amount: price,
        });
        Ok(())
    }

    /// Aborts the sale: full refund of deposited funds to the buyer,
    /// asset back to the seller, every mutable field cleared.
    pub fn cancel_sale(&mut self, caller: Address, id: PropertyId) -> Result<(), EscrowError> {
        let (buyer, refund) = {
            let listing = self.active(id)?;
            (listing.buyer, listing.deposited_funds)
        };
        if caller != buyer && caller != self.parties.seller {
            return Err(EscrowError::Unauthorized {
                caller,
                required: "the buyer or seller",
            });
        }

        if refund > 0 {
            self.funds.transfer(self.address, buyer, refund)?;
        }
        self.assets.transfer(self.address, self.parties.seller, id)?;

        let listing = self.active_mut(id)?;
        listing.clear_on_cancel();

        info!(property_id = id, by = %format_address(&caller), refunded = %refund, "sale cancelled");
        self.sink.emit(EscrowEvent::SaleCancelled {
            id,
            by: caller,
            refunded: refund,
        });
        Ok(())
    }

    /// Accepts a raw fund transfer attributed to a listing, the lender's
    /// funding path. No role check and no amount check: the sender is
    /// trusted to send the right amount, and under-funding surfaces only
    /// at `finalize_sale`.
    pub fn receive_funds(
        &mut self,
        from: Address,
        id: PropertyId,
        amount: Amount,
    ) -> Result<(), EscrowError> {
        self.active(id)?;
        self.funds.transfer(from, self.address, amount)?;
        let listing = self.active_mut(id)?;
        listing.deposited_funds = listing.deposited_funds.saturating_add(amount);

        info!(property_id = id, from = %format_address(&from), amount = %amount, "funds received");
        self.sink.emit(EscrowEvent::FundsReceived { id, from, amount });
        Ok(())
    }

    // === User accounts ===

    /// Registers a user profile for the caller's address.
    pub fn create_account(
        &mut self,
        caller: Address,
        username: String,
        last_name: String,
        email: String,
    ) -> Result<(), EscrowError> {
        let account = UserAccount {
            username,
            last_name,
            email,
        };
        self.users.create(caller, account.clone())?;

        info!(owner = %format_address(&caller), username = %account.username, "user created");
        self.sink.emit(EscrowEvent::UserCreated {
            owner: caller,
            username: account.username,
            last_name: account.last_name,
            email: account.email,
        });
        Ok(())
    }

    pub fn user_exists(&self, owner: Address) -> bool {
        self.users.exists(&owner)
    }

    pub fn user_info(&self, owner: Address) -> Result<UserAccount, EscrowError> {
        self.users.get(&owner).cloned()
    }

    // === Queries ===
    //
    // Absent or cleared listings read back as zero/empty/false, matching
    // the reference ledger's mapping semantics.

    pub fn is_listed(&self, id: PropertyId) -> bool {
        self.listings.get(&id).is_some_and(Listing::is_listed)
    }

    pub fn buyer_of(&self, id: PropertyId) -> Address {
        self.listings.get(&id).map_or(ZERO_ADDRESS, |l| l.buyer)
    }

    pub fn purchase_price(&self, id: PropertyId) -> Amount {
        self.listings.get(&id).map_or(0, |l| l.purchase_price)
    }

    pub fn escrow_amount(&self, id: PropertyId) -> Amount {
        self.listings.get(&id).map_or(0, |l| l.escrow_amount)
    }

    pub fn approval(&self, id: PropertyId, who: Address) -> bool {
        self.listings
            .get(&id)
            .is_some_and(|l| l.has_approved(&who))
    }

    pub fn inspection_passed(&self, id: PropertyId) -> bool {
        self.listings.get(&id).is_some_and(|l| l.inspection_passed)
    }

    pub fn deposited_funds(&self, id: PropertyId) -> Amount {
        self.listings.get(&id).map_or(0, |l| l.deposited_funds)
    }

    /// Funds currently held at the ledger's own address.
    pub fn balance(&self) -> Amount {
        self.funds.balance_of(self.address)
    }

    pub fn address(&self) -> Address {
        self.address
    }

    pub fn seller(&self) -> Address {
        self.parties.seller
    }

    pub fn inspector(&self) -> Address {
        self.parties.inspector
    }

    pub fn lender(&self) -> Address {
        self.parties.lender
    }

    /// Derived progress of an active listing; `None` once terminal.
    pub fn stage(&self, id: PropertyId) -> Option<ListingStage> {
        let listing = self.listings.get(&id).filter(|l| l.is_listed())?;
        let unanimous = listing.has_approved(&listing.buyer)
            && listing.has_approved(&self.parties.seller)
            && listing.has_approved(&self.parties.lender);

        Some(if unanimous && listing.inspection_passed {
            ListingStage::ReadyToFinalize
        } else if !listing.approvals.is_empty() {
            ListingStage::PartiallyApproved
        } else if listing.deposited_funds > 0 {
            ListingStage::Deposited
        } else {
            ListingStage::NoDeposit
        })
    }
}
