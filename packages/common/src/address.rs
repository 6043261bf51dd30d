//! EVM recipient address handling.
//!
//! The bridge stores destination addresses as raw 20-byte buffers. Clients
//! usually hold them as `0x`-prefixed hex strings; these helpers convert
//! between the two.

use cosmwasm_std::{StdError, StdResult};

/// Length of an EVM address in bytes
pub const EVM_ADDRESS_LEN: usize = 20;

/// Parse a hex EVM address (optionally `0x`-prefixed) to 20 bytes
pub fn parse_evm_address(addr: &str) -> StdResult<[u8; EVM_ADDRESS_LEN]> {
    let hex_str = addr
        .strip_prefix("0x")
        .or_else(|| addr.strip_prefix("0X"))
        .unwrap_or(addr);

    if hex_str.len() != EVM_ADDRESS_LEN * 2 {
        return Err(StdError::generic_err(format!(
            "Invalid EVM address length: expected 40 hex chars, got {}",
            hex_str.len()
        )));
    }

    let bytes =
        hex::decode(hex_str).map_err(|e| StdError::generic_err(format!("Invalid hex: {e}")))?;

    let mut result = [0u8; EVM_ADDRESS_LEN];
    result.copy_from_slice(&bytes);
    Ok(result)
}

/// Encode 20 bytes to EVM hex string with 0x prefix
pub fn encode_evm_address(bytes: &[u8; EVM_ADDRESS_LEN]) -> String {
    format!("0x{}", hex::encode(bytes))
}
