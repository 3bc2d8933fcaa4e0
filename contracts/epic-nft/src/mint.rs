use crate::*;
use near_sdk::json_types::U64;

#[near]
impl Contract {
    /// Mint one randomly-composed three-word NFT to the caller.
    ///
    /// Non-owner callers must attach at least `minting_fee`; the whole
    /// attached deposit is credited to `collected_fees`.
    #[payable]
    #[handle_result]
    pub fn make_an_epic_nft(&mut self) -> Result<TokenView, MintError> {
        if self.total_supply >= self.max_supply {
            return Err(MintError::max_supply_reached());
        }

        let minter_id = env::predecessor_account_id();
        self.check_minting_fee(&minter_id)?;

        self.collected_fees = self
            .collected_fees
            .checked_add(env::attached_deposit().as_yoctonear())
            .ok_or_else(|| MintError::InternalError("Fee ledger overflow".into()))?;

        let token_id = self
            .total_supply
            .checked_add(1)
            .ok_or_else(|| MintError::InternalError("Token ID counter overflow".into()))?;
        self.total_supply = token_id;

        let seed = self.mint_seed(token_id, &minter_id);
        let token = EpicToken {
            owner_id: minter_id.clone(),
            minter_id: minter_id.clone(),
            first_word: self.pick_random_first_word(U64(seed)),
            second_word: self.pick_random_second_word(U64(seed)),
            third_word: self.pick_random_third_word(U64(seed)),
            minted_at: env::block_timestamp(),
        };
        let view = self.token_view(token_id, &token);

        self.tokens_by_id.insert(token_id, token);
        self.add_token_to_owner(&minter_id, token_id);

        MintEvent::EpicNftMinted {
            minter_id,
            token_id,
            name: view.name.clone(),
        }
        .emit();

        Ok(view)
    }
}

impl Contract {
    // Weak demo entropy: validator-supplied randomness mixed with the token id
    // and the minter account. Trivially predictable.
    pub(crate) fn mint_seed(&self, token_id: u64, minter_id: &AccountId) -> u64 {
        let mut bytes = env::random_seed();
        bytes.extend_from_slice(&token_id.to_le_bytes());
        bytes.extend_from_slice(minter_id.as_bytes());
        let hash = env::sha256(&bytes);
        let mut head = [0u8; 8];
        head.copy_from_slice(&hash[..8]);
        u64::from_le_bytes(head)
    }

    pub(crate) fn add_token_to_owner(&mut self, owner_id: &AccountId, token_id: u64) {
        if let Some(tokens) = self.tokens_per_owner.get_mut(owner_id) {
            tokens.insert(token_id);
            return;
        }
        let mut tokens = IterableSet::new(StorageKey::TokensPerOwnerInner {
            account_id_hash: crate::guards::hash_account_id(owner_id),
        });
        tokens.insert(token_id);
        self.tokens_per_owner.insert(owner_id.clone(), tokens);
    }
}
