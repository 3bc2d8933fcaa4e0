use near_sdk_macros::NearSchema;

#[derive(NearSchema, near_sdk::FunctionError)]
#[abi(json)]
#[derive(Debug, Clone, serde::Serialize)]
pub enum MintError {
    Unauthorized(String),
    SupplyExceeded(String),
    InsufficientFee(String),
    InvalidAddress(String),
    InvalidInput(String),
    InternalError(String),
}

impl std::fmt::Display for MintError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            Self::SupplyExceeded(msg) => write!(f, "Supply exceeded: {}", msg),
            Self::InsufficientFee(msg) => write!(f, "Insufficient fee: {}", msg),
            Self::InvalidAddress(msg) => write!(f, "Invalid address: {}", msg),
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            Self::InternalError(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl MintError {
    pub fn only_owner(what: &str) -> Self {
        Self::Unauthorized(format!("Only {} can perform this action", what))
    }
    pub fn max_supply_reached() -> Self {
        Self::SupplyExceeded("Maximum NFT supply reached.".into())
    }
    pub fn insufficient_fee() -> Self {
        Self::InsufficientFee("Insufficient minting fee provided".into())
    }
    pub fn invalid_receiver(addr: &str) -> Self {
        Self::InvalidAddress(format!("{} is not a valid royalty receiver", addr))
    }
}
