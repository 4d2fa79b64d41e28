// Canonical role vocabulary and free-text role label normalization.
//
// Source listings carry the Mantra multi-role position codes ("Dc", "Dd/Ds",
// "E;W", ...). Every label is reduced to a set of canonical roles; tokens we
// do not recognize are dropped without complaint.

use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;

/// Tactical roles a player can be eligible for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Role {
    Goalkeeper,
    CentralDefender,
    RightBack,
    LeftBack,
    WingBack,
    Mezzala,
    CentralMidfielder,
    Trequartista,
    Winger,
    Forward,
    PureStriker,
}

/// Deduplicated set of roles held by a single player.
pub type RoleSet = BTreeSet<Role>;

/// Whole-label values meaning "no role", checked before tokenizing.
const NOT_APPLICABLE: &[&str] = &["n/a", "na", "nd", "n.d.", "-", "--"];

impl Role {
    /// All roles in canonical order.
    pub const ALL: [Role; 11] = [
        Role::Goalkeeper,
        Role::CentralDefender,
        Role::RightBack,
        Role::LeftBack,
        Role::WingBack,
        Role::Mezzala,
        Role::CentralMidfielder,
        Role::Trequartista,
        Role::Winger,
        Role::Forward,
        Role::PureStriker,
    ];

    /// Parse a single position token.
    ///
    /// Matching is case-insensitive:
    /// - "Por", "P", "GK" -> Goalkeeper
    /// - "Dc" -> CentralDefender, "Dd" -> RightBack, "Ds" -> LeftBack
    /// - "E" -> WingBack, "M" -> Mezzala, "C" -> CentralMidfielder
    /// - "T" -> Trequartista, "W" -> Winger, "A" -> Forward, "Pc" -> PureStriker
    pub fn from_token(token: &str) -> Option<Self> {
        match token.to_ascii_lowercase().as_str() {
            "por" | "p" | "gk" => Some(Role::Goalkeeper),
            "dc" => Some(Role::CentralDefender),
            "dd" => Some(Role::RightBack),
            "ds" => Some(Role::LeftBack),
            "e" => Some(Role::WingBack),
            "m" => Some(Role::Mezzala),
            "c" => Some(Role::CentralMidfielder),
            "t" => Some(Role::Trequartista),
            "w" => Some(Role::Winger),
            "a" => Some(Role::Forward),
            "pc" => Some(Role::PureStriker),
            _ => None,
        }
    }

    /// Short code as it appears in source listings.
    pub fn code(&self) -> &'static str {
        match self {
            Role::Goalkeeper => "Por",
            Role::CentralDefender => "Dc",
            Role::RightBack => "Dd",
            Role::LeftBack => "Ds",
            Role::WingBack => "E",
            Role::Mezzala => "M",
            Role::CentralMidfielder => "C",
            Role::Trequartista => "T",
            Role::Winger => "W",
            Role::Forward => "A",
            Role::PureStriker => "Pc",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Reduce a free-text role label to the set of canonical roles it names.
///
/// Tokens are separated by any non-alphanumeric character, so "Dc/Dd",
/// "DD,DC" and "dc; dd" all yield {CentralDefender, RightBack}. Missing,
/// blank and "not applicable" labels yield an empty set.
pub fn normalize_roles(label: Option<&str>) -> RoleSet {
    let Some(label) = label.map(str::trim) else {
        return RoleSet::new();
    };
    if label.is_empty() || NOT_APPLICABLE.iter().any(|na| label.eq_ignore_ascii_case(na)) {
        return RoleSet::new();
    }

    label
        .split(|c: char| !c.is_alphanumeric())
        .filter(|token| !token.is_empty())
        .filter_map(Role::from_token)
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
