use serde::{Deserialize, Serialize};

/// A payment network tolls can be settled on -- from `GET /networks`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Network {
    /// Identifier used as `assetNetwork` in toll requirements.
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub chain_id: Option<u64>,
    #[serde(default)]
    pub testnet: bool,
}

/// An asset accepted on a network -- from `GET /networks/{id}/assets`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkAsset {
    /// Used as `assetAddress` in toll requirements.
    pub address: String,
    pub symbol: String,
    /// Scale between display units and toll `amount` units.
    pub decimals: u8,
    #[serde(default)]
    pub name: Option<String>,
}
