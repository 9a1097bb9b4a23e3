//! Bounded counter with optional cyclic wraparound.
//!
//! Every dial-like quantity on the panel (temperatures, fan speeds, seat
//! conditioning levels, seat contour axes) is a [`RangedValue`].  The value
//! only ever moves one step at a time through [`RangedValue::increase`] and
//! [`RangedValue::decrease`]; at a bound it either clamps or wraps to the
//! opposite bound.  No call ever fails.
//!
//! ```text
//!   non-cyclic:  min ─▶ … ─▶ range ─▶ range   (clamp)
//!   cyclic:      min ─▶ … ─▶ range ─▶ min     (wrap)
//! ```

use serde::{Deserialize, Serialize};

/// A counter that always satisfies `min_value <= value <= range`.
///
/// Deserialization goes through [`RangedValue::new`], so a stored value
/// outside its bounds is clamped on load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawRangedValue")]
pub struct RangedValue {
    value: i32,
    min_value: i32,
    range: i32,
    cyclic: bool,
}

/// Wire form of [`RangedValue`] before the bounds are enforced.
#[derive(Deserialize)]
struct RawRangedValue {
    value: i32,
    min_value: i32,
    range: i32,
    cyclic: bool,
}

impl From<RawRangedValue> for RangedValue {
    fn from(raw: RawRangedValue) -> Self {
        Self::new(raw.value, raw.min_value, raw.range, raw.cyclic)
    }
}

impl RangedValue {
    /// Build a counter.  `value` is clamped into `[min_value, range]`; a
    /// `range` below `min_value` collapses to a single-step counter.
    pub const fn new(value: i32, min_value: i32, range: i32, cyclic: bool) -> Self {
        let range = if range < min_value { min_value } else { range };
        let value = if value < min_value {
            min_value
        } else if value > range {
            range
        } else {
            value
        };
        Self {
            value,
            min_value,
            range,
            cyclic,
        }
    }

    /// Non-cyclic counter starting at `value`.
    pub const fn bounded(value: i32, min_value: i32, range: i32) -> Self {
        Self::new(value, min_value, range, false)
    }

    /// Cyclic counter starting at `value`.
    pub const fn cyclic(value: i32, min_value: i32, range: i32) -> Self {
        Self::new(value, min_value, range, true)
    }

    pub fn value(&self) -> i32 {
        self.value
    }

    pub fn min_value(&self) -> i32 {
        self.min_value
    }

    /// Maximum attainable value (inclusive).
    pub fn range(&self) -> i32 {
        self.range
    }

    pub fn is_cyclic(&self) -> bool {
        self.cyclic
    }

    pub fn at_min(&self) -> bool {
        self.value == self.min_value
    }

    pub fn at_max(&self) -> bool {
        self.value == self.range
    }

    /// Step up by one.  Returns `true` if the value changed.
    pub fn increase(&mut self) -> bool {
        let before = self.value;
        if self.value < self.range {
            self.value += 1;
        } else if self.cyclic {
            self.value = self.min_value;
        }
        self.value != before
    }

    /// Step down by one.  Returns `true` if the value changed.
    pub fn decrease(&mut self) -> bool {
        let before = self.value;
        if self.value > self.min_value {
            self.value -= 1;
        } else if self.cyclic {
            self.value = self.range;
        }
        self.value != before
    }

    /// Step toward `target` until reached, clamping the target into bounds
    /// first.  Returns `true` if the value changed.
    ///
    /// The target is always inside the bounds, so a cyclic counter never
    /// wraps on the way.
    pub fn approach(&mut self, target: i32) -> bool {
        let target = target.clamp(self.min_value, self.range);
        let before = self.value;
        while self.value < target {
            self.increase();
        }
        while self.value > target {
            self.decrease();
        }
        self.value != before
    }
}
