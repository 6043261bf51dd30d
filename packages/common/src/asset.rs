//! Escrowed asset descriptor.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::Addr;
use std::fmt;

/// The asset a bridge instance holds in custody.
#[cw_serde]
pub enum AssetInfo {
    /// Native bank denomination (e.g. "uluna")
    Native { denom: String },
    /// CW20 token contract
    Cw20 { contract_addr: Addr },
}

impl AssetInfo {
    pub fn native(denom: impl Into<String>) -> Self {
        AssetInfo::Native {
            denom: denom.into(),
        }
    }

    pub fn is_native(&self) -> bool {
        matches!(self, AssetInfo::Native { .. })
    }

    /// Denom for native assets, contract address for CW20.
    pub fn identifier(&self) -> &str {
        match self {
            AssetInfo::Native { denom } => denom,
            AssetInfo::Cw20 { contract_addr } => contract_addr.as_str(),
        }
    }
}

impl fmt::Display for AssetInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetInfo::Native { denom } => write!(f, "native:{denom}"),
            AssetInfo::Cw20 { contract_addr } => write!(f, "cw20:{contract_addr}"),
        }
    }
}
