//! The pantheon: god identifiers, affinities, and god records
//!
//! God identity is a closed enum rather than a string so that an unmatched
//! or newly added god is a compile error instead of a silently skipped
//! bonus. The affinity graph is likewise fixed at compile time.

use crate::core::CardTemplate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The closed set of god identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GodName {
    Mesin,
    Beroan,
    Tecton,
    Gul,
}

impl GodName {
    pub const ALL: [GodName; 4] = [GodName::Mesin, GodName::Beroan, GodName::Tecton, GodName::Gul];

    /// The fixed affinity pair for this god
    ///
    /// Invariant: a god is never its own positive or negative affinity.
    pub fn affinity(self) -> Affinity {
        match self {
            // Likes Stone, dislikes Whispers
            GodName::Mesin => Affinity {
                positive: GodName::Tecton,
                negative: GodName::Gul,
            },
            // Likes Whispers, dislikes Stone
            GodName::Beroan => Affinity {
                positive: GodName::Gul,
                negative: GodName::Tecton,
            },
            // Likes Storms, dislikes Wilds
            GodName::Tecton => Affinity {
                positive: GodName::Mesin,
                negative: GodName::Beroan,
            },
            // Likes Wilds, dislikes Storms
            GodName::Gul => Affinity {
                positive: GodName::Beroan,
                negative: GodName::Mesin,
            },
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            GodName::Mesin => "Mesin",
            GodName::Beroan => "Beroan",
            GodName::Tecton => "Tecton",
            GodName::Gul => "Gul",
        }
    }
}

impl fmt::Display for GodName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for GodName {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mesin" => Ok(GodName::Mesin),
            "beroan" => Ok(GodName::Beroan),
            "tecton" => Ok(GodName::Tecton),
            "gul" => Ok(GodName::Gul),
            _ => Err(format!(
                "unknown god '{s}' (expected: mesin, beroan, tecton, gul)"
            )),
        }
    }
}

/// A god's fixed relationship to two other gods
///
/// Used once, at Trial setup, to scale the stats of player units whose
/// owning god matches one side of the pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Affinity {
    pub positive: GodName,
    pub negative: GodName,
}

/// A god record: identity, theme text, and the avatar fielded in every Trial
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct God {
    pub name: GodName,
    pub theme: String,
    pub avatar: CardTemplate,
}

impl God {
    pub fn new(name: GodName, theme: impl Into<String>, avatar: CardTemplate) -> Self {
        God {
            name,
            theme: theme.into(),
            avatar,
        }
    }

    pub fn affinity(&self) -> Affinity {
        self.name.affinity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_god_is_its_own_affinity() {
        for god in GodName::ALL {
            let affinity = god.affinity();
            assert_ne!(god, affinity.positive, "{god} likes itself");
            assert_ne!(god, affinity.negative, "{god} dislikes itself");
        }
    }

    #[test]
    fn test_affinity_graph() {
        assert_eq!(GodName::Mesin.affinity().positive, GodName::Tecton);
        assert_eq!(GodName::Mesin.affinity().negative, GodName::Gul);
        assert_eq!(GodName::Beroan.affinity().positive, GodName::Gul);
        assert_eq!(GodName::Beroan.affinity().negative, GodName::Tecton);
        assert_eq!(GodName::Tecton.affinity().positive, GodName::Mesin);
        assert_eq!(GodName::Gul.affinity().negative, GodName::Mesin);
    }

    #[test]
    fn test_parse_god_name() {
        assert_eq!("mesin".parse::<GodName>(), Ok(GodName::Mesin));
        assert_eq!("TECTON".parse::<GodName>(), Ok(GodName::Tecton));
        assert!("zeus".parse::<GodName>().is_err());
    }

    #[test]
    fn test_display_roundtrip() {
        for god in GodName::ALL {
            assert_eq!(god.to_string().parse::<GodName>(), Ok(god));
        }
    }
}
