use crate::*;

pub(crate) fn hash_account_id(account_id: &AccountId) -> Vec<u8> {
    env::sha256(account_id.as_bytes())
}

impl Contract {
    pub(crate) fn check_contract_owner(&self, actor_id: &AccountId) -> Result<(), MintError> {
        if actor_id != &self.owner_id {
            return Err(MintError::only_owner("contract owner"));
        }
        Ok(())
    }

    // Owner mints are fee-exempt; everyone else must attach at least the fee.
    pub(crate) fn check_minting_fee(&self, minter_id: &AccountId) -> Result<(), MintError> {
        if minter_id == &self.owner_id {
            return Ok(());
        }
        if env::attached_deposit().as_yoctonear() < self.minting_fee {
            return Err(MintError::insufficient_fee());
        }
        Ok(())
    }
}
