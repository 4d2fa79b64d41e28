// Formation template registry.
//
// Five fixed formations, each an ordered list of slots: goalkeeper, back line
// (right to left), midfield line(s), attack. Every slot lists the roles that
// may occupy it; the order of that list matters, because the first role a
// player shares with the slot is the one reported for the assignment.
//
// Slot coordinates are cosmetic (percent of pitch width / length, own goal at
// y = 0) and are only carried through for rendering.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};
use thiserror::Error;

use super::role::{Role, RoleSet};
use super::role::Role::{
    CentralDefender, CentralMidfielder, Forward, Goalkeeper, LeftBack, Mezzala, PureStriker,
    RightBack, Trequartista, WingBack, Winger,
};

// ---------------------------------------------------------------------------
// Formation keys
// ---------------------------------------------------------------------------

/// The closed set of supported formations, in enumeration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormationKey {
    F433,
    F442,
    F352,
    F343,
    F4231,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown formation `{0}` (expected one of 4-3-3, 4-4-2, 3-5-2, 3-4-3, 4-2-3-1)")]
pub struct FormationKeyError(pub String);

impl FormationKey {
    /// Enumeration order, also the final tie-break when selecting formations.
    pub const ALL: [FormationKey; 5] = [
        FormationKey::F433,
        FormationKey::F442,
        FormationKey::F352,
        FormationKey::F343,
        FormationKey::F4231,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FormationKey::F433 => "4-3-3",
            FormationKey::F442 => "4-4-2",
            FormationKey::F352 => "3-5-2",
            FormationKey::F343 => "3-4-3",
            FormationKey::F4231 => "4-2-3-1",
        }
    }

    /// The static template for this formation.
    pub fn template(&self) -> &'static FormationTemplate {
        match self {
            FormationKey::F433 => &F433,
            FormationKey::F442 => &F442,
            FormationKey::F352 => &F352,
            FormationKey::F343 => &F343,
            FormationKey::F4231 => &F4231,
        }
    }
}

impl fmt::Display for FormationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FormationKey {
    type Err = FormationKeyError;

    /// Accepts the dashed label "4-3-3" or the compact "433" spelling.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        FormationKey::ALL
            .into_iter()
            .find(|key| key.as_str() == text || key.as_str().replace('-', "") == text)
            .ok_or_else(|| FormationKeyError(text.to_string()))
    }
}

impl Serialize for FormationKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Slots and templates
// ---------------------------------------------------------------------------

/// One position within a formation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Slot {
    /// Position within the formation's slot list.
    pub index: usize,
    /// Display label only.
    pub label: &'static str,
    /// Roles that may occupy the slot, in preference order.
    pub allowed_roles: &'static [Role],
    pub x: f32,
    pub y: f32,
}

impl Slot {
    pub const fn new(
        index: usize,
        label: &'static str,
        allowed_roles: &'static [Role],
        x: f32,
        y: f32,
    ) -> Self {
        Slot {
            index,
            label,
            allowed_roles,
            x,
            y,
        }
    }

    /// First role, in the slot's declared order, that the player also holds.
    pub fn matching_role(&self, roles: &RoleSet) -> Option<Role> {
        self.allowed_roles
            .iter()
            .copied()
            .find(|allowed| roles.contains(allowed))
    }

    /// Whether a player holding `roles` may occupy this slot.
    pub fn accepts(&self, roles: &RoleSet) -> bool {
        self.matching_role(roles).is_some()
    }
}

/// A named formation and its ordered slots.
#[derive(Debug, PartialEq)]
pub struct FormationTemplate {
    pub key: FormationKey,
    pub slots: &'static [Slot],
}

impl FormationTemplate {
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }
}

/// All registered templates in enumeration order.
pub fn templates() -> [&'static FormationTemplate; 5] {
    FormationKey::ALL.map(|key| key.template())
}

// ---------------------------------------------------------------------------
// Role sets shared across formations
// ---------------------------------------------------------------------------

const GK: &[Role] = &[Goalkeeper];
const CD: &[Role] = &[CentralDefender];
const RB_CD: &[Role] = &[RightBack, CentralDefender];
const LB_CD: &[Role] = &[LeftBack, CentralDefender];
const CD_FB: &[Role] = &[CentralDefender, RightBack, LeftBack];

const MID_FOUR: &[Role] = &[Mezzala, CentralMidfielder, Trequartista, WingBack];
const MID_CENTRAL: &[Role] = &[Mezzala, CentralMidfielder, Trequartista];
const MID_WIDE: &[Role] = &[WingBack, Winger, Trequartista];
const WB_W: &[Role] = &[WingBack, Winger];
const M_C: &[Role] = &[Mezzala, CentralMidfielder];

const W_F: &[Role] = &[Winger, Forward];
const PS_F: &[Role] = &[PureStriker, Forward];
const PS_F_W: &[Role] = &[PureStriker, Forward, Winger];

const AM_WIDE: &[Role] = &[Winger, WingBack, Trequartista, Forward];
const AM_CENTRAL: &[Role] = &[Trequartista, Forward, Winger];

// ---------------------------------------------------------------------------
// Templates
// ---------------------------------------------------------------------------

static F433: FormationTemplate = FormationTemplate {
    key: FormationKey::F433,
    slots: &[
        Slot::new(0, "GK", GK, 50.0, 5.0),
        Slot::new(1, "RB", RB_CD, 85.0, 25.0),
        Slot::new(2, "CB", CD, 62.0, 20.0),
        Slot::new(3, "CB", CD, 38.0, 20.0),
        Slot::new(4, "LB", LB_CD, 15.0, 25.0),
        Slot::new(5, "CM", MID_FOUR, 72.0, 50.0),
        Slot::new(6, "CM", MID_FOUR, 50.0, 45.0),
        Slot::new(7, "CM", MID_FOUR, 28.0, 50.0),
        Slot::new(8, "RW", W_F, 82.0, 80.0),
        Slot::new(9, "ST", PS_F, 50.0, 88.0),
        Slot::new(10, "LW", W_F, 18.0, 80.0),
    ],
};

static F442: FormationTemplate = FormationTemplate {
    key: FormationKey::F442,
    slots: &[
        Slot::new(0, "GK", GK, 50.0, 5.0),
        Slot::new(1, "RB", RB_CD, 85.0, 25.0),
        Slot::new(2, "CB", CD, 62.0, 20.0),
        Slot::new(3, "CB", CD, 38.0, 20.0),
        Slot::new(4, "LB", LB_CD, 15.0, 25.0),
        Slot::new(5, "RM", MID_WIDE, 85.0, 55.0),
        Slot::new(6, "CM", MID_CENTRAL, 62.0, 50.0),
        Slot::new(7, "CM", MID_CENTRAL, 38.0, 50.0),
        Slot::new(8, "LM", MID_WIDE, 15.0, 55.0),
        Slot::new(9, "ST", PS_F_W, 62.0, 85.0),
        Slot::new(10, "ST", PS_F_W, 38.0, 85.0),
    ],
};

static F352: FormationTemplate = FormationTemplate {
    key: FormationKey::F352,
    slots: &[
        Slot::new(0, "GK", GK, 50.0, 5.0),
        Slot::new(1, "RCB", CD_FB, 72.0, 22.0),
        Slot::new(2, "CB", CD, 50.0, 20.0),
        Slot::new(3, "LCB", CD_FB, 28.0, 22.0),
        Slot::new(4, "RWB", WB_W, 90.0, 52.0),
        Slot::new(5, "CM", MID_CENTRAL, 70.0, 48.0),
        Slot::new(6, "CM", MID_CENTRAL, 50.0, 44.0),
        Slot::new(7, "CM", MID_CENTRAL, 30.0, 48.0),
        Slot::new(8, "LWB", WB_W, 10.0, 52.0),
        Slot::new(9, "ST", PS_F_W, 62.0, 85.0),
        Slot::new(10, "ST", PS_F_W, 38.0, 85.0),
    ],
};

static F343: FormationTemplate = FormationTemplate {
    key: FormationKey::F343,
    slots: &[
        Slot::new(0, "GK", GK, 50.0, 5.0),
        Slot::new(1, "RCB", CD_FB, 72.0, 22.0),
        Slot::new(2, "CB", CD, 50.0, 20.0),
        Slot::new(3, "LCB", CD_FB, 28.0, 22.0),
        Slot::new(4, "RWB", WB_W, 88.0, 52.0),
        Slot::new(5, "CM", MID_CENTRAL, 62.0, 48.0),
        Slot::new(6, "CM", MID_CENTRAL, 38.0, 48.0),
        Slot::new(7, "LWB", WB_W, 12.0, 52.0),
        Slot::new(8, "RW", W_F, 80.0, 80.0),
        Slot::new(9, "ST", PS_F, 50.0, 88.0),
        Slot::new(10, "LW", W_F, 20.0, 80.0),
    ],
};

static F4231: FormationTemplate = FormationTemplate {
    key: FormationKey::F4231,
    slots: &[
        Slot::new(0, "GK", GK, 50.0, 5.0),
        Slot::new(1, "RB", RB_CD, 85.0, 25.0),
        Slot::new(2, "CB", CD, 62.0, 20.0),
        Slot::new(3, "CB", CD, 38.0, 20.0),
        Slot::new(4, "LB", LB_CD, 15.0, 25.0),
        Slot::new(5, "DM", M_C, 62.0, 42.0),
        Slot::new(6, "DM", M_C, 38.0, 42.0),
        Slot::new(7, "RAM", AM_WIDE, 80.0, 68.0),
        Slot::new(8, "CAM", AM_CENTRAL, 50.0, 66.0),
        Slot::new(9, "LAM", AM_WIDE, 20.0, 68.0),
        Slot::new(10, "ST", PS_F, 50.0, 88.0),
    ],
};

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
