use crate::catalog::FactionId;

/// Roster defaults and tunable limits.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RosterConfig {
    /// Faction selected when a new roster is created.
    pub default_faction: FactionId,
    /// Points ceiling for a new roster, and the fallback for unusable input.
    pub default_points_limit: u32,
    /// Lowest points ceiling a roster may be set to.
    pub min_points_limit: u32,
}

impl RosterConfig {
    // ===== runtime-tunable defaults =====
    pub const DEFAULT_FACTION: &'static str = "british_army";
    pub const DEFAULT_POINTS_LIMIT: u32 = 250;
    pub const MIN_POINTS_LIMIT: u32 = 50;

    pub fn new() -> Self {
        Self {
            default_faction: FactionId::from(Self::DEFAULT_FACTION),
            default_points_limit: Self::DEFAULT_POINTS_LIMIT,
            min_points_limit: Self::MIN_POINTS_LIMIT,
        }
    }

    /// Resolves a requested points ceiling.
    ///
    /// Missing or zero input falls back to the default ceiling, anything else
    /// is raised to at least the minimum.
    pub fn resolve_points_limit(&self, requested: Option<i64>) -> u32 {
        match requested {
            None | Some(0) => self.default_points_limit.max(self.min_points_limit),
            Some(value) => {
                let clamped = value.clamp(i64::from(self.min_points_limit), i64::from(u32::MAX));
                u32::try_from(clamped).unwrap_or(u32::MAX)
            }
        }
    }
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self::new()
    }
}
