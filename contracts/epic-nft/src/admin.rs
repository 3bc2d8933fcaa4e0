use crate::*;
use near_sdk::json_types::{U64, U128};
use near_sdk::{NearToken, Promise};

#[near]
impl Contract {
    #[init]
    pub fn new(
        owner_id: Option<AccountId>,
        contract_metadata: Option<NftContractMetadata>,
    ) -> Self {
        let owner_id = owner_id.unwrap_or_else(env::predecessor_account_id);
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            royalty_receiver: owner_id.clone(),
            owner_id,
            total_supply: 0,
            max_supply: DEFAULT_MAX_SUPPLY,
            minting_fee: DEFAULT_MINTING_FEE.as_yoctonear(),
            collected_fees: 0,
            royalty_percentage: DEFAULT_ROYALTY_PERCENTAGE,
            tokens_by_id: IterableMap::new(StorageKey::TokensById),
            tokens_per_owner: LookupMap::new(StorageKey::TokensPerOwner),
            contract_metadata: contract_metadata.unwrap_or_default(),
        }
    }

    #[handle_result]
    pub fn set_max_supply(&mut self, max_supply: U64) -> Result<(), MintError> {
        self.check_contract_owner(&env::predecessor_account_id())?;
        let old_max_supply = self.max_supply;
        self.max_supply = max_supply.0;
        MintEvent::MaxSupplySet {
            owner_id: self.owner_id.clone(),
            old_max_supply,
            new_max_supply: self.max_supply,
        }
        .emit();
        Ok(())
    }

    #[handle_result]
    pub fn set_minting_fee(&mut self, minting_fee: U128) -> Result<(), MintError> {
        self.check_contract_owner(&env::predecessor_account_id())?;
        let old_fee = self.minting_fee;
        self.minting_fee = minting_fee.0;
        MintEvent::MintingFeeSet {
            owner_id: self.owner_id.clone(),
            old_fee: U128(old_fee),
            new_fee: minting_fee,
        }
        .emit();
        Ok(())
    }

    // Address validity is checked before ownership so a bad receiver is
    // rejected as such regardless of caller.
    #[handle_result]
    pub fn set_royalty_receiver(&mut self, receiver: String) -> Result<(), MintError> {
        let receiver: AccountId = receiver
            .parse()
            .map_err(|_| MintError::invalid_receiver(&receiver))?;
        if receiver.as_str() == BURN_ACCOUNT {
            return Err(MintError::invalid_receiver(receiver.as_str()));
        }
        self.check_contract_owner(&env::predecessor_account_id())?;
        let old_receiver = self.royalty_receiver.clone();
        self.royalty_receiver = receiver;
        MintEvent::RoyaltyReceiverSet {
            owner_id: self.owner_id.clone(),
            old_receiver,
            new_receiver: self.royalty_receiver.clone(),
        }
        .emit();
        Ok(())
    }

    #[handle_result]
    pub fn set_royalty_percentage(&mut self, percentage: u32) -> Result<(), MintError> {
        self.check_contract_owner(&env::predecessor_account_id())?;
        if percentage > MAX_ROYALTY_PERCENTAGE {
            return Err(MintError::InvalidInput(format!(
                "Royalty percentage {} exceeds max {}",
                percentage, MAX_ROYALTY_PERCENTAGE
            )));
        }
        let old_percentage = self.royalty_percentage;
        self.royalty_percentage = percentage;
        MintEvent::RoyaltyPercentageSet {
            owner_id: self.owner_id.clone(),
            old_percentage,
            new_percentage: percentage,
        }
        .emit();
        Ok(())
    }

    /// Transfer the whole collected-fee balance to the owner and zero the ledger.
    #[handle_result]
    pub fn withdraw(&mut self) -> Result<Promise, MintError> {
        self.check_contract_owner(&env::predecessor_account_id())?;
        let amount = self.collected_fees;
        self.collected_fees = 0;
        MintEvent::FeesWithdrawn {
            owner_id: self.owner_id.clone(),
            amount: U128(amount),
        }
        .emit();
        Ok(Promise::new(self.owner_id.clone()).transfer(NearToken::from_yoctonear(amount)))
    }

    #[handle_result]
    pub fn transfer_ownership(&mut self, new_owner: AccountId) -> Result<(), MintError> {
        self.check_contract_owner(&env::predecessor_account_id())?;
        if new_owner == self.owner_id {
            return Err(MintError::InvalidInput(
                "New owner must differ from current owner".to_string(),
            ));
        }
        let old_owner = self.owner_id.clone();
        self.owner_id = new_owner;
        MintEvent::OwnerTransferred {
            old_owner,
            new_owner: self.owner_id.clone(),
        }
        .emit();
        Ok(())
    }

    pub fn get_owner(&self) -> &AccountId {
        &self.owner_id
    }

    pub fn get_version(&self) -> &str {
        &self.version
    }
}
