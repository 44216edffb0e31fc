//! Display hints for severity tiers.
//!
//! A plain lookup table from tier name to color and badge identifier, with a
//! neutral fallback for names it does not recognize. Colors follow the
//! dashboard palette (green, amber, red).

use serde::Serialize;

use crate::classifier::SeverityTier;

/// Presentation hint for one tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TierBadge {
    /// Short label shown to moderators.
    pub label: &'static str,
    /// Hex color.
    pub color: &'static str,
    /// Badge style identifier.
    pub badge: &'static str,
}

/// Badge used for unrecognized tier names.
pub const UNKNOWN_BADGE: TierBadge = TierBadge {
    label: "Unknown",
    color: "#6b7280", // gray
    badge: "secondary",
};

const BADGES: &[(SeverityTier, TierBadge)] = &[
    (
        SeverityTier::Clean,
        TierBadge {
            label: "Clean",
            color: "#22c55e", // green
            badge: "success",
        },
    ),
    (
        SeverityTier::Mild,
        TierBadge {
            label: "Mild",
            color: "#eab308", // yellow
            badge: "info",
        },
    ),
    (
        SeverityTier::Moderate,
        TierBadge {
            label: "Moderate",
            color: "#f59e0b", // amber
            badge: "warning",
        },
    ),
    (
        SeverityTier::Severe,
        TierBadge {
            label: "Severe",
            color: "#f97316", // orange
            badge: "danger",
        },
    ),
    (
        SeverityTier::Blocked,
        TierBadge {
            label: "Blocked",
            color: "#ef4444", // red
            badge: "dark",
        },
    ),
];

/// Looks up the badge for a tier name, falling back to [`UNKNOWN_BADGE`].
pub fn badge_for(tier: &str) -> TierBadge {
    tier.parse::<SeverityTier>()
        .map(|t| t.badge())
        .unwrap_or(UNKNOWN_BADGE)
}

impl SeverityTier {
    /// Returns the presentation hint for this tier.
    pub fn badge(&self) -> TierBadge {
        BADGES
            .iter()
            .find(|(tier, _)| tier == self)
            .map(|(_, badge)| *badge)
            .unwrap_or(UNKNOWN_BADGE)
    }
}
