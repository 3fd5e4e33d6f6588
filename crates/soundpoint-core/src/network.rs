use serde::{Deserialize, Serialize};

/// Chain ids with a fixed human-readable label.
const KNOWN_NETWORKS: &[(u64, &str)] = &[
    (1, "Ethereum Mainnet"),
    (11155111, "Sepolia Testnet"),
    (10, "Optimism"),
    (137, "Polygon"),
    (42161, "Arbitrum One"),
];

/// Label for `chain_id`, or `Unknown (chain ID X)` if it is not in the table.
pub fn network_label(chain_id: u64) -> String {
    KNOWN_NETWORKS
        .iter()
        .find(|(id, _)| *id == chain_id)
        .map(|(_, name)| (*name).to_string())
        .unwrap_or_else(|| format!("Unknown (chain ID {})", chain_id))
}

/// Chain a checkpoint was built against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainIdentity {
    /// Numeric chain id reported by the node.
    pub chain_id: u64,
    /// Human-readable network name.
    pub network_label: String,
}

impl ChainIdentity {
    /// Resolves the label for `chain_id`.
    pub fn resolve(chain_id: u64) -> Self {
        Self {
            chain_id,
            network_label: network_label(chain_id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_chain_ids_have_labels() {
        assert_eq!(network_label(1), "Ethereum Mainnet");
        assert_eq!(network_label(11155111), "Sepolia Testnet");
        assert_eq!(network_label(10), "Optimism");
        assert_eq!(network_label(137), "Polygon");
        assert_eq!(network_label(42161), "Arbitrum One");
    }

    #[test]
    fn unknown_chain_id_falls_back() {
        assert_eq!(network_label(31337), "Unknown (chain ID 31337)");
        assert_eq!(ChainIdentity::resolve(0).network_label, "Unknown (chain ID 0)");
    }
}
