use crate::*;
use near_sdk::json_types::{U64, U128};

#[near]
impl Contract {
    pub fn max_supply(&self) -> U64 {
        U64(self.max_supply)
    }

    pub fn total_supply(&self) -> U64 {
        U64(self.total_supply)
    }

    pub fn minting_fee(&self) -> U128 {
        U128(self.minting_fee)
    }

    pub fn collected_fees(&self) -> U128 {
        U128(self.collected_fees)
    }

    pub fn royalty_receiver(&self) -> &AccountId {
        &self.royalty_receiver
    }

    pub fn royalty_percentage(&self) -> u32 {
        self.royalty_percentage
    }

    pub fn get_token(&self, token_id: U64) -> Option<TokenView> {
        self.tokens_by_id
            .get(&token_id.0)
            .map(|token| self.token_view(token_id.0, token))
    }

    pub fn token_svg(&self, token_id: U64) -> Option<String> {
        self.tokens_by_id
            .get(&token_id.0)
            .map(|token| token.render_svg())
    }

    pub fn nft_metadata(&self) -> &NftContractMetadata {
        &self.contract_metadata
    }

    pub fn nft_tokens(&self, from_index: Option<U64>, limit: Option<u64>) -> Vec<TokenView> {
        let start = from_index.map(|i| i.0 as usize).unwrap_or(0);
        let limit = limit
            .unwrap_or(DEFAULT_ENUMERATION_LIMIT)
            .min(MAX_ENUMERATION_LIMIT) as usize;

        self.tokens_by_id
            .iter()
            .skip(start)
            .take(limit)
            .map(|(token_id, token)| self.token_view(*token_id, token))
            .collect()
    }

    pub fn nft_supply_for_owner(&self, account_id: AccountId) -> U64 {
        self.tokens_per_owner
            .get(&account_id)
            .map(|tokens| U64(tokens.len() as u64))
            .unwrap_or(U64(0))
    }

    pub fn nft_tokens_for_owner(
        &self,
        account_id: AccountId,
        from_index: Option<U64>,
        limit: Option<u64>,
    ) -> Vec<TokenView> {
        let Some(tokens) = self.tokens_per_owner.get(&account_id) else {
            return vec![];
        };

        let start = from_index.map(|i| i.0 as usize).unwrap_or(0);
        let limit = limit
            .unwrap_or(DEFAULT_ENUMERATION_LIMIT)
            .min(MAX_ENUMERATION_LIMIT) as usize;

        tokens
            .iter()
            .skip(start)
            .take(limit)
            .filter_map(|token_id| {
                self.tokens_by_id
                    .get(token_id)
                    .map(|token| self.token_view(*token_id, token))
            })
            .collect()
    }
}
