//! Derived display flags.
//!
//! Each flag is a row in a fixed table: its declared source fields and a
//! pure compute function over [`ClimateState`].  After every mutation the
//! controller hands the changed [`FieldSet`] to
//! [`DerivedFlags::on_fields_changed`], which recomputes exactly the flags
//! whose sources intersect it, in the same step as the write.
//!
//! | Flag               | Sources                                    |
//! |--------------------|--------------------------------------------|
//! | `isMyTemp`         | driver temp, my temp, power                |
//! | `isOff`            | power, the four seat heat/cool levels      |
//! | `isRearFullCooled` | rear temp                                  |
//! | `isRearFullHeated` | rear temp                                  |
//!
//! Flag values are private: the only way to change one is to change its
//! sources.

use log::debug;
use serde::Serialize;

use crate::model::{ClimateState, Field, FieldSet};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[repr(u8)]
pub enum FlagId {
    IsMyTemp = 0,
    IsOff = 1,
    IsRearFullCooled = 2,
    IsRearFullHeated = 3,
}

impl FlagId {
    pub const COUNT: usize = 4;

    pub const ALL: [FlagId; FlagId::COUNT] = [
        FlagId::IsMyTemp,
        FlagId::IsOff,
        FlagId::IsRearFullCooled,
        FlagId::IsRearFullHeated,
    ];

    /// Name as the view layer binds it.
    pub const fn name(self) -> &'static str {
        match self {
            Self::IsMyTemp => "isMyTemp",
            Self::IsOff => "isOff",
            Self::IsRearFullCooled => "isRearFullCooled",
            Self::IsRearFullHeated => "isRearFullHeated",
        }
    }
}

pub type FlagComputeFn = fn(&ClimateState) -> bool;

/// One row in the flag table.
pub struct FlagDescriptor {
    pub id: FlagId,
    pub sources: FieldSet,
    pub compute: FlagComputeFn,
}

/// Build the flag table.  Row order matches `FlagId as usize`.
pub fn build_flag_table() -> [FlagDescriptor; FlagId::COUNT] {
    [
        FlagDescriptor {
            id: FlagId::IsMyTemp,
            sources: FieldSet::of(&[Field::DriverTemp, Field::MyTemp, Field::On]),
            compute: is_my_temp,
        },
        FlagDescriptor {
            id: FlagId::IsOff,
            sources: FieldSet::of(&[
                Field::On,
                Field::DriverHeatedSeat,
                Field::DriverCooledSeat,
                Field::PassengerHeatedSeat,
                Field::PassengerCooledSeat,
            ]),
            compute: is_off,
        },
        FlagDescriptor {
            id: FlagId::IsRearFullCooled,
            sources: FieldSet::of(&[Field::RearTemp]),
            compute: is_rear_full_cooled,
        },
        FlagDescriptor {
            id: FlagId::IsRearFullHeated,
            sources: FieldSet::of(&[Field::RearTemp]),
            compute: is_rear_full_heated,
        },
    ]
}

fn is_my_temp(s: &ClimateState) -> bool {
    s.driver_temp().value() == s.my_temp().value() && s.is_on()
}

fn is_off(s: &ClimateState) -> bool {
    !s.is_on() && !s.any_seat_conditioning()
}

/// Lowest heating step above the bottom of the scale.
fn is_rear_full_cooled(s: &ClimateState) -> bool {
    let rear = s.rear_temp();
    rear.value() == rear.min_value() + 1
}

fn is_rear_full_heated(s: &ClimateState) -> bool {
    s.rear_temp().at_max()
}

/// A flag whose value flipped during recomputation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlagChange {
    pub flag: FlagId,
    pub value: bool,
}

/// Current values of all derived flags plus their dependency table.
pub struct DerivedFlags {
    table: [FlagDescriptor; FlagId::COUNT],
    values: [bool; FlagId::COUNT],
}

impl DerivedFlags {
    /// Compute every flag from `state`.
    pub fn new(state: &ClimateState) -> Self {
        let table = build_flag_table();
        let values = table.each_ref().map(|row| (row.compute)(state));
        Self { table, values }
    }

    /// Recompute the flags that read any of `changed`.  Returns the flags
    /// whose value actually flipped; unchanged inputs yield an empty list.
    pub fn on_fields_changed(
        &mut self,
        state: &ClimateState,
        changed: FieldSet,
    ) -> heapless::Vec<FlagChange, { FlagId::COUNT }> {
        let mut flipped = heapless::Vec::new();
        for (row, value) in self.table.iter().zip(self.values.iter_mut()) {
            if !row.sources.intersects(changed) {
                continue;
            }
            let next = (row.compute)(state);
            if next != *value {
                *value = next;
                debug!("flag {} -> {}", row.id.name(), next);
                // capacity equals the table size, so this cannot overflow
                let _ = flipped.push(FlagChange {
                    flag: row.id,
                    value: next,
                });
            }
        }
        flipped
    }

    pub fn get(&self, flag: FlagId) -> bool {
        self.values[flag as usize]
    }

    pub fn is_my_temp(&self) -> bool {
        self.get(FlagId::IsMyTemp)
    }

    pub fn is_off(&self) -> bool {
        self.get(FlagId::IsOff)
    }

    pub fn is_rear_full_cooled(&self) -> bool {
        self.get(FlagId::IsRearFullCooled)
    }

    pub fn is_rear_full_heated(&self) -> bool {
        self.get(FlagId::IsRearFullHeated)
    }
}
