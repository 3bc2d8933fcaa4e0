use crate::*;
use near_sdk::json_types::{U64, U128};

#[near]
impl Contract {
    /// Royalty quote for a secondary sale: `(royalty_receiver, sale_price * percentage / 100)`.
    /// The receiver and percentage are collection-wide, so the token id does
    /// not affect the result.
    #[handle_result]
    pub fn royalty_info(&self, token_id: U64, sale_price: U128) -> Result<RoyaltyInfo, MintError> {
        let _ = token_id;
        let amount = sale_price
            .0
            .checked_mul(self.royalty_percentage as u128)
            .ok_or_else(|| MintError::InternalError("Royalty amount overflow".into()))?
            / 100;
        Ok(RoyaltyInfo {
            receiver: self.royalty_receiver.clone(),
            amount: U128(amount),
        })
    }
}
