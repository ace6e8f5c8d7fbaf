//! Button and modifier-key condition masks.

use std::fmt;
use std::ops::{BitAnd, BitOr, BitOrAssign};
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::PivotcamError;

/// Bitwise combination of pointer buttons and keyboard modifiers.
///
/// One type serves two roles: the *active* state carried by every
/// [`PointerEvent`](crate::input::PointerEvent), and the *condition masks*
/// configured on the controller that decide which combination triggers
/// rotate, move, and quick-zoom. A gesture starts only when the active
/// state equals a mask bit-for-bit — `LEFT_BUTTON | CONTROL` does not
/// trigger a mask of plain `LEFT_BUTTON`.
///
/// The string form used by TOML presets joins lowercase flag names with
/// `+`: `"left"`, `"left+control"`, `"left+right"`, `"disabled"`. The
/// empty set spells `"none"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PointerConditions(u8);

impl PointerConditions {
    /// Empty set: no buttons, no modifiers.
    pub const NONE: Self = Self(0);
    /// Primary (left) pointer button.
    pub const LEFT_BUTTON: Self = Self(1);
    /// Middle pointer button (wheel click).
    pub const MIDDLE_BUTTON: Self = Self(1 << 1);
    /// Secondary (right) pointer button.
    pub const RIGHT_BUTTON: Self = Self(1 << 2);
    /// Shift key.
    pub const SHIFT: Self = Self(1 << 3);
    /// Control key.
    pub const CONTROL: Self = Self(1 << 4);
    /// Alt key.
    pub const ALT: Self = Self(1 << 5);
    /// Marks a condition mask as never matching. Only meaningful on
    /// masks; never present in the active state built from events.
    pub const DISABLED: Self = Self(1 << 6);

    /// All flags in canonical display order.
    const FLAGS: [(Self, &'static str); 7] = [
        (Self::LEFT_BUTTON, "left"),
        (Self::MIDDLE_BUTTON, "middle"),
        (Self::RIGHT_BUTTON, "right"),
        (Self::SHIFT, "shift"),
        (Self::CONTROL, "control"),
        (Self::ALT, "alt"),
        (Self::DISABLED, "disabled"),
    ];

    /// Whether every flag in `other` is also set in `self`.
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Whether no flags are set.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Whether the [`DISABLED`](Self::DISABLED) flag is set.
    #[must_use]
    pub const fn is_disabled(self) -> bool {
        self.contains(Self::DISABLED)
    }

    /// Whether this mask, used as a gesture condition, is triggered by
    /// the given active button/modifier state.
    ///
    /// Matching is exact bitwise equality; empty and disabled masks
    /// never match anything.
    #[must_use]
    pub const fn matches(self, active: Self) -> bool {
        !self.is_empty() && !self.is_disabled() && self.0 == active.0
    }

    /// Set or clear a flag.
    #[must_use]
    pub const fn with(self, flag: Self, set: bool) -> Self {
        if set {
            Self(self.0 | flag.0)
        } else {
            Self(self.0 & !flag.0)
        }
    }
}

impl BitOr for PointerConditions {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for PointerConditions {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for PointerConditions {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl fmt::Display for PointerConditions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("none");
        }
        let mut first = true;
        for (flag, name) in Self::FLAGS {
            if self.contains(flag) {
                if !first {
                    f.write_str("+")?;
                }
                f.write_str(name)?;
                first = false;
            }
        }
        Ok(())
    }
}

impl FromStr for PointerConditions {
    type Err = PivotcamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || s == "none" {
            return Ok(Self::NONE);
        }
        let mut conditions = Self::NONE;
        for token in s.split('+') {
            let token = token.trim();
            let flag = Self::FLAGS
                .iter()
                .find(|(_, name)| *name == token)
                .map(|(flag, _)| *flag)
                .ok_or_else(|| {
                    PivotcamError::ConditionsParse(format!(
                        "unknown flag '{token}' in '{s}'"
                    ))
                })?;
            conditions |= flag;
        }
        Ok(conditions)
    }
}

impl Serialize for PointerConditions {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for PointerConditions {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(D::Error::custom)
    }
}
