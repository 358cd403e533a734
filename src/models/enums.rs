//! Enumeration types for the Whistle API.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Animal family used by the breed catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Animal {
    /// Dog breeds
    #[default]
    Dogs,
    /// Cat breeds
    Cats,
}

impl Animal {
    /// The path segment the API expects.
    pub fn as_str(&self) -> &'static str {
        match self {
            Animal::Dogs => "dogs",
            Animal::Cats => "cats",
        }
    }
}

impl fmt::Display for Animal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category of pet food listed by the food catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FoodType {
    /// Regular meals
    #[default]
    DogFood,
    /// Treats
    DogTreat,
}

impl FoodType {
    /// The query value the API expects.
    pub fn as_str(&self) -> &'static str {
        match self {
            FoodType::DogFood => "dog_food",
            FoodType::DogTreat => "dog_treat",
        }
    }
}

impl fmt::Display for FoodType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Weight unit reported on a pet profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum WeightType {
    /// Pounds
    #[default]
    Pounds,
    /// Kilograms
    Kilograms,
    /// Any unit this crate does not know about
    #[serde(other)]
    Unknown,
}
