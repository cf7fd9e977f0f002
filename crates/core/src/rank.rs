//! Rank policy: ninja rank ordering, mission rank requirements, and the
//! eligibility check run before an assignment is persisted.
//!
//! Ranks are stored verbatim as text, so every function here accepts the raw
//! string and treats unrecognized values conservatively: an unknown ninja rank
//! is worth nothing and an unknown requirement can never be met.

use std::fmt;

use crate::error::CoreError;

/// Value assigned to a ninja rank that is not recognized.
pub const UNKNOWN_NINJA_RANK_VALUE: u32 = 0;

/// Value assigned to a required rank that is not recognized.
///
/// Larger than any real rank value, so the requirement is unsatisfiable.
pub const UNSATISFIABLE_RANK_VALUE: u32 = u32::MAX;

// ---------------------------------------------------------------------------
// Ninja ranks
// ---------------------------------------------------------------------------

/// Skill tier of a ninja, ordered `Genin < Chunin < Jonin`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NinjaRank {
    Genin,
    Chunin,
    Jonin,
}

impl NinjaRank {
    /// All ninja ranks in ascending order.
    pub const ALL: [NinjaRank; 3] = [NinjaRank::Genin, NinjaRank::Chunin, NinjaRank::Jonin];

    /// Parse the canonical spelling (`Genin`, `Chūnin`, `Jōnin`).
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Genin" => Some(Self::Genin),
            "Chūnin" => Some(Self::Chunin),
            "Jōnin" => Some(Self::Jonin),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Genin => "Genin",
            Self::Chunin => "Chūnin",
            Self::Jonin => "Jōnin",
        }
    }

    /// Ordinal value used for eligibility comparisons.
    pub fn value(self) -> u32 {
        match self {
            Self::Genin => 1,
            Self::Chunin => 2,
            Self::Jonin => 3,
        }
    }
}

impl fmt::Display for NinjaRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Mission ranks
// ---------------------------------------------------------------------------

/// Difficulty tier of a mission, `D` (easiest) through `S`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MissionRank {
    D,
    C,
    B,
    A,
    S,
}

impl MissionRank {
    pub const ALL: [MissionRank; 5] = [
        MissionRank::D,
        MissionRank::C,
        MissionRank::B,
        MissionRank::A,
        MissionRank::S,
    ];

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "D" => Some(Self::D),
            "C" => Some(Self::C),
            "B" => Some(Self::B),
            "A" => Some(Self::A),
            "S" => Some(Self::S),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::D => "D",
            Self::C => "C",
            Self::B => "B",
            Self::A => "A",
            Self::S => "S",
        }
    }

    /// Lowest ninja rank allowed to take a mission of this tier.
    pub fn minimum_ninja_rank(self) -> NinjaRank {
        match self {
            Self::D | Self::C => NinjaRank::Genin,
            Self::B => NinjaRank::Chunin,
            Self::A | Self::S => NinjaRank::Jonin,
        }
    }
}

impl fmt::Display for MissionRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Policy functions
// ---------------------------------------------------------------------------

/// Minimum ninja rank for a raw mission rank. Unrecognized ranks map to the
/// most restrictive tier.
pub fn minimum_rank_for(mission_rank: &str) -> NinjaRank {
    MissionRank::parse(mission_rank)
        .map(MissionRank::minimum_ninja_rank)
        .unwrap_or(NinjaRank::Jonin)
}

/// Rank value of a ninja's own rank.
pub fn ninja_rank_value(rank: &str) -> u32 {
    NinjaRank::parse(rank)
        .map(NinjaRank::value)
        .unwrap_or(UNKNOWN_NINJA_RANK_VALUE)
}

/// Rank value of a mission's required minimum rank.
pub fn required_rank_value(rank: &str) -> u32 {
    NinjaRank::parse(rank)
        .map(NinjaRank::value)
        .unwrap_or(UNSATISFIABLE_RANK_VALUE)
}

pub fn is_eligible(ninja_rank: &str, minimum_rank: &str) -> bool {
    ninja_rank_value(ninja_rank) >= required_rank_value(minimum_rank)
}

/// Like [`is_eligible`], but returns `CoreError::Ineligible` on failure.
pub fn check_eligibility(ninja_rank: &str, minimum_rank: &str) -> Result<(), CoreError> {
    if is_eligible(ninja_rank, minimum_rank) {
        Ok(())
    } else {
        Err(CoreError::Ineligible {
            ninja_rank: ninja_rank.to_string(),
            required_rank: minimum_rank.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn minimum_rank_table_matches() {
        assert_eq!(minimum_rank_for("D"), NinjaRank::Genin);
        assert_eq!(minimum_rank_for("C"), NinjaRank::Genin);
        assert_eq!(minimum_rank_for("B"), NinjaRank::Chunin);
        assert_eq!(minimum_rank_for("A"), NinjaRank::Jonin);
        assert_eq!(minimum_rank_for("S"), NinjaRank::Jonin);
    }

    #[test]
    fn unknown_mission_rank_requires_jonin() {
        assert_eq!(minimum_rank_for("Z"), NinjaRank::Jonin);
        assert_eq!(minimum_rank_for(""), NinjaRank::Jonin);
        assert_eq!(minimum_rank_for("d"), NinjaRank::Jonin);
    }

    #[test]
    fn rank_values_are_ordinal() {
        assert_eq!(ninja_rank_value("Genin"), 1);
        assert_eq!(ninja_rank_value("Chūnin"), 2);
        assert_eq!(ninja_rank_value("Jōnin"), 3);
        assert!(NinjaRank::Genin < NinjaRank::Chunin);
        assert!(NinjaRank::Chunin < NinjaRank::Jonin);
    }

    #[test]
    fn unknown_ninja_rank_is_zero() {
        assert_eq!(ninja_rank_value("Kage"), UNKNOWN_NINJA_RANK_VALUE);
        // ASCII spellings are not the canonical ones.
        assert_eq!(ninja_rank_value("Chunin"), UNKNOWN_NINJA_RANK_VALUE);
    }

    #[test]
    fn unknown_required_rank_is_unsatisfiable() {
        assert_eq!(required_rank_value("Kage"), UNSATISFIABLE_RANK_VALUE);
        for rank in NinjaRank::ALL {
            assert!(!is_eligible(rank.as_str(), "Kage"));
        }
    }

    #[test]
    fn eligibility_matches_rank_values_for_all_pairs() {
        for ninja in NinjaRank::ALL {
            for required in NinjaRank::ALL {
                assert_eq!(
                    is_eligible(ninja.as_str(), required.as_str()),
                    ninja.value() >= required.value(),
                    "{ninja} vs {required}"
                );
            }
        }
    }

    #[test]
    fn genin_cannot_take_chunin_mission() {
        let required = minimum_rank_for("B");
        assert_matches!(
            check_eligibility("Genin", required.as_str()),
            Err(CoreError::Ineligible { .. })
        );
    }

    #[test]
    fn jonin_can_take_any_mission() {
        for mission in MissionRank::ALL {
            let required = mission.minimum_ninja_rank();
            assert!(check_eligibility("Jōnin", required.as_str()).is_ok());
        }
    }

    #[test]
    fn unknown_ninja_rank_is_never_eligible() {
        assert!(!is_eligible("Academy", "Genin"));
    }

    #[test]
    fn parse_round_trips_canonical_spelling() {
        for rank in NinjaRank::ALL {
            assert_eq!(NinjaRank::parse(rank.as_str()), Some(rank));
        }
        for rank in MissionRank::ALL {
            assert_eq!(MissionRank::parse(&rank.to_string()), Some(rank));
        }
    }

    #[test]
    fn ninja_rank_displays_with_macrons() {
        assert_eq!(NinjaRank::Chunin.to_string(), "Chūnin");
        assert_eq!(NinjaRank::Jonin.to_string(), "Jōnin");
    }
}
