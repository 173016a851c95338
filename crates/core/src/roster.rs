//! Launch roster for the bootstrap run
//!
//! Three playable items, the boss they all fight, and the mint order the
//! launch seeds the contract with.

use crate::types::{BossSpec, ConfigurationError, DeploymentRequest, MintPlan};

/// Item-type indices minted at bootstrap. Item 1 appears twice: the launch
/// plan seeds two Bandages and one of everything else.
const BOOTSTRAP_MINTS: [u64; 4] = [0, 1, 1, 2];

/// The compiled-in deployment parameters.
pub fn bootstrap_request() -> Result<DeploymentRequest, ConfigurationError> {
    DeploymentRequest::from_columns(
        vec![
            "Stethoscope".to_string(),
            "Bandage".to_string(),
            "Ibuprofen".to_string(),
        ],
        vec![10, 1, 5],
        vec![10, 20, 30],
        vec![
            "https://i.imgur.com/u7N7fPy.jpeg".to_string(),
            "https://i.imgur.com/NwkAoPm.jpg".to_string(),
            "https://i.imgur.com/FavIJ2V.png".to_string(),
        ],
        BossSpec {
            name: "Spongebob Squarepants".to_string(),
            image_uri: "https://i.imgur.com/a4BzksN.jpg".to_string(),
            health: 100,
            attack_power: 5,
        },
    )
}

/// The compiled-in mint sequence, validated against `request`'s roster.
pub fn bootstrap_plan(request: &DeploymentRequest) -> Result<MintPlan, ConfigurationError> {
    MintPlan::new(BOOTSTRAP_MINTS.to_vec(), request.item_count())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bootstrap_request_is_valid() {
        let request = bootstrap_request().unwrap();
        assert_eq!(request.item_count(), 3);
        assert_eq!(request.items[0].name, "Stethoscope");
        assert_eq!(request.items[0].attack_power, 10);
        assert_eq!(request.items[2].health, 30);
        assert_eq!(request.boss.name, "Spongebob Squarepants");
        assert_eq!(request.boss.health, 100);
    }

    #[test]
    fn test_bootstrap_plan_matches_launch_order() {
        let request = bootstrap_request().unwrap();
        let plan = bootstrap_plan(&request).unwrap();
        assert_eq!(plan.indices(), &[0, 1, 1, 2]);
    }
}
