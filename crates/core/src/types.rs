//! Deployment parameter types

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One playable item type. The roster position of an item doubles as the
/// on-chain item type index consumed by mint calls.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemSpec {
    pub name: String,
    pub attack_power: u64,
    pub health: u64,
    pub image_uri: String,
}

/// The boss all minted items end up fighting. One per deployment.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BossSpec {
    pub name: String,
    pub image_uri: String,
    pub health: u64,
    pub attack_power: u64,
}

/// Parameter validation failures. All of these are raised before anything
/// touches the network.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error(
        "item columns have mismatched lengths: {names} names, {attacks} attack values, \
         {healths} health values, {images} image uris"
    )]
    LengthMismatch {
        names: usize,
        attacks: usize,
        healths: usize,
        images: usize,
    },
    #[error("item roster is empty")]
    EmptyRoster,
    #[error(
        "mint plan entry {position} references item index {index}, but the roster has {roster} items"
    )]
    MintIndexOutOfRange {
        position: usize,
        index: u64,
        roster: usize,
    },
}

/// Complete constructor payload for one contract deployment: the item
/// roster plus the boss descriptor. Built once, consumed once.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeploymentRequest {
    pub items: Vec<ItemSpec>,
    pub boss: BossSpec,
}

impl DeploymentRequest {
    /// Build a request from an already-zipped roster.
    pub fn new(items: Vec<ItemSpec>, boss: BossSpec) -> Result<Self, ConfigurationError> {
        if items.is_empty() {
            return Err(ConfigurationError::EmptyRoster);
        }
        Ok(Self { items, boss })
    }

    /// Build a request from the four parallel item columns the contract
    /// constructor takes. The columns must all have the same length; index i
    /// across the columns describes one item.
    pub fn from_columns(
        names: Vec<String>,
        attack_powers: Vec<u64>,
        healths: Vec<u64>,
        image_uris: Vec<String>,
        boss: BossSpec,
    ) -> Result<Self, ConfigurationError> {
        if names.len() != attack_powers.len()
            || names.len() != healths.len()
            || names.len() != image_uris.len()
        {
            return Err(ConfigurationError::LengthMismatch {
                names: names.len(),
                attacks: attack_powers.len(),
                healths: healths.len(),
                images: image_uris.len(),
            });
        }

        let items = names
            .into_iter()
            .zip(attack_powers)
            .zip(healths)
            .zip(image_uris)
            .map(|(((name, attack_power), health), image_uri)| ItemSpec {
                name,
                attack_power,
                health,
                image_uri,
            })
            .collect();

        Self::new(items, boss)
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }
}

/// Ordered item-type indices to mint after deployment. Entries are checked
/// against the roster length up front so a bad plan never reaches the chain.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MintPlan(Vec<u64>);

impl MintPlan {
    pub fn new(indices: Vec<u64>, roster_len: usize) -> Result<Self, ConfigurationError> {
        for (position, &index) in indices.iter().enumerate() {
            if index >= roster_len as u64 {
                return Err(ConfigurationError::MintIndexOutOfRange {
                    position,
                    index,
                    roster: roster_len,
                });
            }
        }
        Ok(Self(indices))
    }

    pub fn indices(&self) -> &[u64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn boss() -> BossSpec {
        BossSpec {
            name: "Test Boss".to_string(),
            image_uri: "https://example.com/boss.png".to_string(),
            health: 100,
            attack_power: 5,
        }
    }

    #[test]
    fn test_from_columns_zips_items() {
        let request = DeploymentRequest::from_columns(
            vec!["A".to_string(), "B".to_string()],
            vec![10, 1],
            vec![10, 20],
            vec!["a.png".to_string(), "b.png".to_string()],
            boss(),
        )
        .unwrap();

        assert_eq!(request.item_count(), 2);
        assert_eq!(request.items[1].name, "B");
        assert_eq!(request.items[1].attack_power, 1);
        assert_eq!(request.items[1].health, 20);
        assert_eq!(request.items[1].image_uri, "b.png");
    }

    #[test]
    fn test_from_columns_rejects_mismatched_lengths() {
        let err = DeploymentRequest::from_columns(
            vec!["A".to_string(), "B".to_string()],
            vec![10],
            vec![10, 20],
            vec!["a.png".to_string(), "b.png".to_string()],
            boss(),
        )
        .unwrap_err();

        assert_eq!(
            err,
            ConfigurationError::LengthMismatch {
                names: 2,
                attacks: 1,
                healths: 2,
                images: 2,
            }
        );
    }

    #[test]
    fn test_empty_roster_rejected() {
        let err = DeploymentRequest::new(vec![], boss()).unwrap_err();
        assert_eq!(err, ConfigurationError::EmptyRoster);
    }

    #[test]
    fn test_mint_plan_checks_bounds() {
        let plan = MintPlan::new(vec![0, 1, 1, 2], 3).unwrap();
        assert_eq!(plan.indices(), &[0, 1, 1, 2]);
        assert_eq!(plan.len(), 4);

        let err = MintPlan::new(vec![0, 3], 3).unwrap_err();
        assert_eq!(
            err,
            ConfigurationError::MintIndexOutOfRange {
                position: 1,
                index: 3,
                roster: 3,
            }
        );
    }
}
