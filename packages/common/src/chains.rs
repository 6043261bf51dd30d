//! Well-known destination chains.
//!
//! This is display metadata for clients and the default allow-list seeded at
//! instantiation. The contract's stored allow-list is authoritative.

/// Static metadata for a destination chain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KnownChain {
    /// EVM chain ID
    pub id: u64,
    /// Human-readable chain name
    pub name: &'static str,
    /// Block explorer base URL
    pub explorer_url: &'static str,
}

pub const POLYGON_MAINNET: KnownChain = KnownChain {
    id: 137,
    name: "Polygon Mainnet",
    explorer_url: "https://polygonscan.com",
};

pub const POLYGON_MUMBAI: KnownChain = KnownChain {
    id: 80001,
    name: "Polygon Mumbai",
    explorer_url: "https://mumbai.polygonscan.com",
};

pub const KNOWN_CHAINS: &[KnownChain] = &[POLYGON_MAINNET, POLYGON_MUMBAI];

/// Look up metadata for a chain id.
pub fn chain_info(chain_id: u64) -> Option<&'static KnownChain> {
    KNOWN_CHAINS.iter().find(|c| c.id == chain_id)
}
