//! Primitive types and newtypes for type-safe API interactions.
//!
//! The Whistle API is not consistent about identifier types: the same id
//! may arrive as a JSON number in one response and a string in another.
//! The identifier newtypes here accept both and always hold a string.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::Error;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new identifier.
            pub fn new(s: impl Into<String>) -> Self {
                Self(s.into())
            }

            /// Get the identifier as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl From<u64> for $name {
            fn from(n: u64) -> Self {
                Self(n.to_string())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                deserialize_number_or_string(deserializer).map(Self)
            }
        }
    };
}

string_id! {
    /// Identifier of a pet.
    ///
    /// # Example
    ///
    /// ```
    /// use whistle_rs::PetId;
    ///
    /// let pet = PetId::from(12345u64);
    /// assert_eq!(pet.as_str(), "12345");
    /// ```
    PetId
}

string_id! {
    /// Identifier of a user account.
    UserId
}

string_id! {
    /// Serial number of a tracking collar.
    DeviceSerial
}

string_id! {
    /// Identifier of a subscription.
    SubscriptionId
}

fn deserialize_number_or_string<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<String, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Int(i64),
        U64(u64),
        Float(f64),
        Str(String),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Int(n) => n.to_string(),
        Raw::U64(n) => n.to_string(),
        Raw::Float(n) => n.to_string(),
        Raw::Str(s) => s,
    })
}

/// Environment configuration for the Whistle API.
///
/// # Example
///
/// ```
/// use whistle_rs::Environment;
///
/// let env = Environment::Staging;
/// println!("API URL: {}", env.api_base_url());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    /// Production deployment backing the consumer app.
    #[default]
    Production,
    /// Staging deployment.
    Staging,
}

impl Environment {
    /// Get the base URL for REST API requests.
    pub fn api_base_url(&self) -> &'static str {
        match self {
            Environment::Production => "https://app.whistle.com",
            Environment::Staging => "https://app-staging.whistle.com",
        }
    }

    /// Returns `true` if this is the production environment.
    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Environment::Production => write!(f, "production"),
            Environment::Staging => write!(f, "staging"),
        }
    }
}

impl FromStr for Environment {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "production" | "prod" => Ok(Environment::Production),
            "staging" | "stage" => Ok(Environment::Staging),
            other => Err(Error::Config(format!("unknown environment: {:?}", other))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pet_id_from_number_and_string() {
        let from_number: PetId = serde_json::from_str("12345").unwrap();
        let from_string: PetId = serde_json::from_str("\"12345\"").unwrap();
        assert_eq!(from_number, from_string);
        assert_eq!(from_number.to_string(), "12345");
    }

    #[test]
    fn test_large_numeric_id_keeps_every_digit() {
        let id: DeviceSerial = serde_json::from_str("18446744073709551615").unwrap();
        assert_eq!(id.as_str(), "18446744073709551615");

        let id: PetId = serde_json::from_str("9223372036854775808").unwrap();
        assert_eq!(id.as_str(), "9223372036854775808");
    }

    #[test]
    fn test_id_serializes_as_string() {
        let id = UserId::new("u-1");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"u-1\"");
    }

    #[test]
    fn test_environment_urls() {
        assert_eq!(
            Environment::Production.api_base_url(),
            "https://app.whistle.com"
        );
        assert_eq!(
            Environment::Staging.api_base_url(),
            "https://app-staging.whistle.com"
        );
    }

    #[test]
    fn test_environment_from_str() {
        assert_eq!("prod".parse::<Environment>().unwrap(), Environment::Production);
        assert_eq!("Staging".parse::<Environment>().unwrap(), Environment::Staging);
        assert!("sandbox".parse::<Environment>().is_err());
    }
}
