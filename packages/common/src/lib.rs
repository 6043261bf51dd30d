//! Common - Shared Types and Utilities for Lock Bridge
//!
//! This package provides the types shared between the bridge contract and
//! the off-chain collaborators (submitter, oracle, dashboards): the escrowed
//! asset descriptor, EVM recipient parsing and the well-known destination
//! chain metadata.

pub mod address;
pub mod asset;
pub mod chains;

pub use address::{encode_evm_address, parse_evm_address, EVM_ADDRESS_LEN};
pub use asset::AssetInfo;
pub use chains::{chain_info, KnownChain, KNOWN_CHAINS};
