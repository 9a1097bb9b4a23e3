//! Multi-contour seat data: driver/passenger × nine contour axes.
//!
//! Pure data aggregate.  Each cell is a non-cyclic [`RangedValue`] starting
//! at zero; the axis → range table is fixed and shared by both occupants.

use serde::Serialize;

use crate::ranged::RangedValue;

/// Number of contour axes per seat.
pub const CONTOUR_AXES: usize = 9;

/// Maximum step per axis.  Axes 0–4 are the lumbar/bolster bladders,
/// 5–8 the massage and cushion controls.
pub const AXIS_RANGES: [i32; CONTOUR_AXES] = [10, 10, 10, 10, 10, 4, 3, 4, 3];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Occupant {
    Driver,
    Passenger,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeatContourStore {
    driver: [RangedValue; CONTOUR_AXES],
    passenger: [RangedValue; CONTOUR_AXES],
}

impl Default for SeatContourStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SeatContourStore {
    pub fn new() -> Self {
        Self {
            driver: Self::seat(),
            passenger: Self::seat(),
        }
    }

    fn seat() -> [RangedValue; CONTOUR_AXES] {
        AXIS_RANGES.map(|range| RangedValue::bounded(0, 0, range))
    }

    /// Read one cell.  `None` for an axis outside `0..CONTOUR_AXES`.
    pub fn axis(&self, occupant: Occupant, axis: usize) -> Option<&RangedValue> {
        self.seat_ref(occupant).get(axis)
    }

    /// Step one cell up.  Returns `true` if the value changed; an unknown
    /// axis is a no-op.
    pub fn increase(&mut self, occupant: Occupant, axis: usize) -> bool {
        self.seat_mut(occupant)
            .get_mut(axis)
            .is_some_and(RangedValue::increase)
    }

    /// Step one cell down.
    pub fn decrease(&mut self, occupant: Occupant, axis: usize) -> bool {
        self.seat_mut(occupant)
            .get_mut(axis)
            .is_some_and(RangedValue::decrease)
    }

    fn seat_ref(&self, occupant: Occupant) -> &[RangedValue; CONTOUR_AXES] {
        match occupant {
            Occupant::Driver => &self.driver,
            Occupant::Passenger => &self.passenger,
        }
    }

    fn seat_mut(&mut self, occupant: Occupant) -> &mut [RangedValue; CONTOUR_AXES] {
        match occupant {
            Occupant::Driver => &mut self.driver,
            Occupant::Passenger => &mut self.passenger,
        }
    }
}
