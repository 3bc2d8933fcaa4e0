use near_sdk::json_types::U64;
use near_sdk::{AccountId, BorshStorageKey, near};

#[near]
#[derive(BorshStorageKey)]
pub enum StorageKey {
    TokensById,
    TokensPerOwner,
    TokensPerOwnerInner { account_id_hash: Vec<u8> },
}

/// A minted token. Immutable once stored; there is no burn.
#[near(serializers = [borsh, json])]
#[derive(Clone)]
pub struct EpicToken {
    pub owner_id: AccountId,
    pub minter_id: AccountId,
    pub first_word: String,
    pub second_word: String,
    pub third_word: String,
    pub minted_at: u64,
}

impl EpicToken {
    pub fn name(&self) -> String {
        format!("{}{}{}", self.first_word, self.second_word, self.third_word)
    }

    /// The demo SVG card: three concatenated words centered on a black square.
    pub fn render_svg(&self) -> String {
        format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" preserveAspectRatio=\"xMinYMin meet\" viewBox=\"0 0 350 350\"><style>.base {{ fill: white; font-family: serif; font-size: 24px; }}</style><rect width=\"100%\" height=\"100%\" fill=\"black\" /><text x=\"50%\" y=\"50%\" class=\"base\" dominant-baseline=\"middle\" text-anchor=\"middle\">{}</text></svg>",
            self.name()
        )
    }
}

#[near(serializers = [json])]
#[derive(Clone, Debug)]
pub struct TokenView {
    pub token_id: U64,
    pub owner_id: AccountId,
    pub minter_id: AccountId,
    pub name: String,
    pub first_word: String,
    pub second_word: String,
    pub third_word: String,
    pub minted_at: U64,
}

#[near(serializers = [json])]
#[derive(Clone, Debug)]
pub struct RoyaltyInfo {
    pub receiver: AccountId,
    pub amount: near_sdk::json_types::U128,
}

#[near(serializers = [borsh, json])]
#[derive(Clone)]
pub struct NftContractMetadata {
    pub spec: String,
    pub name: String,
    pub symbol: String,
    pub icon: Option<String>,
    pub base_uri: Option<String>,
}

impl Default for NftContractMetadata {
    fn default() -> Self {
        Self {
            spec: "nft-1.0.0".to_string(),
            name: "EpicNFT".to_string(),
            symbol: "EPIC".to_string(),
            icon: None,
            base_uri: None,
        }
    }
}

impl crate::Contract {
    pub(crate) fn token_view(&self, token_id: u64, token: &EpicToken) -> TokenView {
        TokenView {
            token_id: U64(token_id),
            owner_id: token.owner_id.clone(),
            minter_id: token.minter_id.clone(),
            name: token.name(),
            first_word: token.first_word.clone(),
            second_word: token.second_word.clone(),
            third_word: token.third_word.clone(),
            minted_at: U64(token.minted_at),
        }
    }
}
