//! Climate domain model.
//!
//! [`ClimateState`] holds the authoritative actuator state and encodes the
//! business rules for every operation in [`ModelOp`].  Each operation
//! returns the [`FieldSet`] it actually changed, which drives the derived
//! flag engine and the live backend's write-through.
//!
//! Two interchangeable [`ClimateModel`] implementations share the state:
//!
//! | Variant          | Module       | Side effects                      |
//! |------------------|--------------|-----------------------------------|
//! | `EmulatedClimate`| `emulated`   | none, in-memory only              |
//! | `CanClimate`     | `can`        | write-through to the vehicle bus  |
//!
//! The variant is picked once at startup by [`from_config`].

pub mod can;
pub mod emulated;
pub mod seat_contour;

use log::info;
use serde::Serialize;

use crate::app::ports::{DiagnosticsPort, VehicleBusPort};
use crate::config::PanelConfig;
use crate::ranged::RangedValue;

pub use can::CanClimate;
pub use emulated::EmulatedClimate;

// ---------------------------------------------------------------------------
// Actuator limits (°F for temperatures, steps otherwise)
// ---------------------------------------------------------------------------

pub const TEMP_MIN_F: i32 = 60;
pub const TEMP_MAX_F: i32 = 85;
pub const TEMP_DEFAULT_F: i32 = 72;
pub const MY_TEMP_DEFAULT_F: i32 = 70;

pub const FAN_SPEED_MAX: i32 = 7;
pub const FAN_SPEED_DEFAULT: i32 = 3;

pub const REAR_FAN_SPEED_MAX: i32 = 6;
pub const REAR_FAN_SPEED_DEFAULT: i32 = 3;

pub const REAR_TEMP_MAX: i32 = 10;
pub const REAR_TEMP_DEFAULT: i32 = 5;

/// Seat heating / cooling levels: off, low, medium, high.
pub const SEAT_LEVEL_MAX: i32 = 3;

// ---------------------------------------------------------------------------
// Airflow
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[repr(u8)]
pub enum Airflow {
    Defrost = 0,
    #[default]
    Panel = 1,
    Feet = 2,
    Both = 3,
}

// ---------------------------------------------------------------------------
// Field identity
// ---------------------------------------------------------------------------

/// Every observable field of [`ClimateState`].  Used as the source
/// identity for derived flags and as the signal identity on the bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[repr(u8)]
pub enum Field {
    On = 0,
    DualMode = 1,
    Auto = 2,
    Ac = 3,
    MaxAc = 4,
    Recirculation = 5,
    WindShield = 6,
    RearDefrost = 7,
    DriverTemp = 8,
    PassengerTemp = 9,
    MyTemp = 10,
    FanSpeed = 11,
    Airflow = 12,
    DriverHeatedSeat = 13,
    DriverCooledSeat = 14,
    PassengerHeatedSeat = 15,
    PassengerCooledSeat = 16,
    DriverHeatedSteer = 17,
    RearPower = 18,
    RearControl = 19,
    RearFanSpeed = 20,
    RearTemp = 21,
}

impl Field {
    pub const COUNT: usize = 22;

    pub const ALL: [Field; Field::COUNT] = [
        Field::On,
        Field::DualMode,
        Field::Auto,
        Field::Ac,
        Field::MaxAc,
        Field::Recirculation,
        Field::WindShield,
        Field::RearDefrost,
        Field::DriverTemp,
        Field::PassengerTemp,
        Field::MyTemp,
        Field::FanSpeed,
        Field::Airflow,
        Field::DriverHeatedSeat,
        Field::DriverCooledSeat,
        Field::PassengerHeatedSeat,
        Field::PassengerCooledSeat,
        Field::DriverHeatedSteer,
        Field::RearPower,
        Field::RearControl,
        Field::RearFanSpeed,
        Field::RearTemp,
    ];

    /// Bit for this field inside a [`FieldSet`].
    pub const fn mask(self) -> u32 {
        1 << (self as u32)
    }
}

/// Bitset of [`Field`]s.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize)]
pub struct FieldSet(u32);

impl FieldSet {
    pub const fn empty() -> Self {
        Self(0)
    }

    pub const fn of(fields: &[Field]) -> Self {
        let mut bits = 0;
        let mut i = 0;
        while i < fields.len() {
            bits |= fields[i].mask();
            i += 1;
        }
        Self(bits)
    }

    pub fn insert(&mut self, field: Field) {
        self.0 |= field.mask();
    }

    pub fn contains(self, field: Field) -> bool {
        self.0 & field.mask() != 0
    }

    pub fn intersects(self, other: FieldSet) -> bool {
        self.0 & other.0 != 0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn bits(self) -> u32 {
        self.0
    }

    pub fn iter(self) -> impl Iterator<Item = Field> {
        Field::ALL.into_iter().filter(move |f| self.contains(*f))
    }
}

impl core::ops::BitOr for FieldSet {
    type Output = FieldSet;

    fn bitor(self, rhs: FieldSet) -> FieldSet {
        FieldSet(self.0 | rhs.0)
    }
}

impl core::ops::BitOrAssign for FieldSet {
    fn bitor_assign(&mut self, rhs: FieldSet) {
        self.0 |= rhs.0;
    }
}

// ---------------------------------------------------------------------------
// Operations
// ---------------------------------------------------------------------------

/// Every mutation the model accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ModelOp {
    SetDefaults,
    Activate,
    IncreaseDriverTemp,
    DecreaseDriverTemp,
    IncreasePassengerTemp,
    DecreasePassengerTemp,
    ToggleDualMode,
    ActivateMyTemp,
    StoreMyTemp,
    ChangeDriverHeatedSeat,
    ChangeDriverCooledSeat,
    ChangeDriverHeatedSteer,
    ChangePassengerHeatedSeat,
    ChangePassengerCooledSeat,
    ToggleWindShield,
    ToggleRearDefrost,
    ToggleAuto,
    ToggleAc,
    ToggleMaxAc,
    ToggleRecirculation,
    IncreaseFanSpeed,
    DecreaseFanSpeed,
    SetAirflow(Airflow),
    ToggleRearControl,
    ToggleRearPower,
    IncreaseRearFanSpeed,
    DecreaseRearFanSpeed,
    IncreaseRearTemp,
    DecreaseRearTemp,
}

// ---------------------------------------------------------------------------
// ClimateState
// ---------------------------------------------------------------------------

/// Authoritative climate actuator state.  Mutated only through
/// [`ClimateState::apply`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClimateState {
    on: bool,
    dual_mode: bool,
    auto: bool,
    ac: bool,
    max_ac: bool,
    recirculation: bool,
    wind_shield: bool,
    rear_defrost: bool,
    driver_temp: RangedValue,
    passenger_temp: RangedValue,
    /// Snapshot of a driver temperature, never the live value itself.
    my_temp: RangedValue,
    fan_speed: RangedValue,
    airflow: Airflow,
    driver_heated_seat: RangedValue,
    driver_cooled_seat: RangedValue,
    passenger_heated_seat: RangedValue,
    passenger_cooled_seat: RangedValue,
    driver_heated_steer: bool,
    rear_power: bool,
    rear_control: bool,
    rear_fan_speed: RangedValue,
    rear_temp: RangedValue,
}

impl Default for ClimateState {
    fn default() -> Self {
        let temp = RangedValue::bounded(TEMP_DEFAULT_F, TEMP_MIN_F, TEMP_MAX_F);
        let seat = RangedValue::cyclic(0, 0, SEAT_LEVEL_MAX);
        Self {
            on: true,
            dual_mode: false,
            auto: false,
            ac: true,
            max_ac: false,
            recirculation: false,
            wind_shield: false,
            rear_defrost: false,
            driver_temp: temp,
            passenger_temp: temp,
            my_temp: RangedValue::bounded(MY_TEMP_DEFAULT_F, TEMP_MIN_F, TEMP_MAX_F),
            fan_speed: RangedValue::bounded(FAN_SPEED_DEFAULT, 0, FAN_SPEED_MAX),
            airflow: Airflow::Panel,
            driver_heated_seat: seat,
            driver_cooled_seat: seat,
            passenger_heated_seat: seat,
            passenger_cooled_seat: seat,
            driver_heated_steer: false,
            rear_power: false,
            rear_control: false,
            rear_fan_speed: RangedValue::bounded(REAR_FAN_SPEED_DEFAULT, 0, REAR_FAN_SPEED_MAX),
            rear_temp: RangedValue::bounded(REAR_TEMP_DEFAULT, 0, REAR_TEMP_MAX),
        }
    }
}

impl ClimateState {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Mutation ──────────────────────────────────────────────

    /// Apply one operation and return the fields it changed.
    pub fn apply(&mut self, op: ModelOp) -> FieldSet {
        let mut changed = FieldSet::empty();
        match op {
            ModelOp::SetDefaults => {
                let defaults = Self::default();
                changed = self.diff(&defaults);
                *self = defaults;
            }
            ModelOp::Activate => flip(&mut self.on, Field::On, &mut changed),
            ModelOp::IncreaseDriverTemp => {
                step(&mut self.driver_temp, true, Field::DriverTemp, &mut changed);
                self.follow_driver_temp(&mut changed);
            }
            ModelOp::DecreaseDriverTemp => {
                step(&mut self.driver_temp, false, Field::DriverTemp, &mut changed);
                self.follow_driver_temp(&mut changed);
            }
            ModelOp::IncreasePassengerTemp => {
                step(&mut self.passenger_temp, true, Field::PassengerTemp, &mut changed);
                self.enter_dual_mode(&mut changed);
            }
            ModelOp::DecreasePassengerTemp => {
                step(&mut self.passenger_temp, false, Field::PassengerTemp, &mut changed);
                self.enter_dual_mode(&mut changed);
            }
            ModelOp::ToggleDualMode => {
                flip(&mut self.dual_mode, Field::DualMode, &mut changed);
                self.follow_driver_temp(&mut changed);
            }
            ModelOp::ActivateMyTemp => {
                if self.driver_temp.approach(self.my_temp.value()) {
                    changed.insert(Field::DriverTemp);
                }
                self.follow_driver_temp(&mut changed);
            }
            ModelOp::StoreMyTemp => {
                if self.my_temp.value() != self.driver_temp.value() {
                    changed.insert(Field::MyTemp);
                }
                self.my_temp = self.driver_temp;
            }
            ModelOp::ChangeDriverHeatedSeat => change_seat(
                &mut self.driver_heated_seat,
                Field::DriverHeatedSeat,
                &mut self.driver_cooled_seat,
                Field::DriverCooledSeat,
                &mut changed,
            ),
            ModelOp::ChangeDriverCooledSeat => change_seat(
                &mut self.driver_cooled_seat,
                Field::DriverCooledSeat,
                &mut self.driver_heated_seat,
                Field::DriverHeatedSeat,
                &mut changed,
            ),
            ModelOp::ChangePassengerHeatedSeat => change_seat(
                &mut self.passenger_heated_seat,
                Field::PassengerHeatedSeat,
                &mut self.passenger_cooled_seat,
                Field::PassengerCooledSeat,
                &mut changed,
            ),
            ModelOp::ChangePassengerCooledSeat => change_seat(
                &mut self.passenger_cooled_seat,
                Field::PassengerCooledSeat,
                &mut self.passenger_heated_seat,
                Field::PassengerHeatedSeat,
                &mut changed,
            ),
            ModelOp::ChangeDriverHeatedSteer => {
                flip(&mut self.driver_heated_steer, Field::DriverHeatedSteer, &mut changed);
            }
            ModelOp::ToggleWindShield => {
                flip(&mut self.wind_shield, Field::WindShield, &mut changed);
            }
            ModelOp::ToggleRearDefrost => {
                flip(&mut self.rear_defrost, Field::RearDefrost, &mut changed);
            }
            ModelOp::ToggleAuto => flip(&mut self.auto, Field::Auto, &mut changed),
            ModelOp::ToggleAc => {
                flip(&mut self.ac, Field::Ac, &mut changed);
                if !self.ac && self.max_ac {
                    self.max_ac = false;
                    changed.insert(Field::MaxAc);
                }
            }
            ModelOp::ToggleMaxAc => {
                flip(&mut self.max_ac, Field::MaxAc, &mut changed);
                if self.max_ac {
                    if !self.ac {
                        self.ac = true;
                        changed.insert(Field::Ac);
                    }
                    if !self.recirculation {
                        self.recirculation = true;
                        changed.insert(Field::Recirculation);
                    }
                }
            }
            ModelOp::ToggleRecirculation => {
                flip(&mut self.recirculation, Field::Recirculation, &mut changed);
            }
            ModelOp::IncreaseFanSpeed => {
                step(&mut self.fan_speed, true, Field::FanSpeed, &mut changed);
            }
            ModelOp::DecreaseFanSpeed => {
                step(&mut self.fan_speed, false, Field::FanSpeed, &mut changed);
            }
            ModelOp::SetAirflow(airflow) => {
                if self.airflow != airflow {
                    self.airflow = airflow;
                    changed.insert(Field::Airflow);
                }
            }
            ModelOp::ToggleRearControl => {
                flip(&mut self.rear_control, Field::RearControl, &mut changed);
            }
            ModelOp::ToggleRearPower => {
                flip(&mut self.rear_power, Field::RearPower, &mut changed);
            }
            ModelOp::IncreaseRearFanSpeed => {
                step(&mut self.rear_fan_speed, true, Field::RearFanSpeed, &mut changed);
            }
            ModelOp::DecreaseRearFanSpeed => {
                step(&mut self.rear_fan_speed, false, Field::RearFanSpeed, &mut changed);
            }
            ModelOp::IncreaseRearTemp => {
                step(&mut self.rear_temp, true, Field::RearTemp, &mut changed);
            }
            ModelOp::DecreaseRearTemp => {
                step(&mut self.rear_temp, false, Field::RearTemp, &mut changed);
            }
        }
        changed
    }

    /// Single-zone mode: the passenger zone tracks the driver zone.
    fn follow_driver_temp(&mut self, changed: &mut FieldSet) {
        if !self.dual_mode && self.passenger_temp.approach(self.driver_temp.value()) {
            changed.insert(Field::PassengerTemp);
        }
    }

    /// Touching the passenger zone splits the zones.
    fn enter_dual_mode(&mut self, changed: &mut FieldSet) {
        if !self.dual_mode {
            self.dual_mode = true;
            changed.insert(Field::DualMode);
        }
    }

    /// Fields whose value differs from `other`.
    pub fn diff(&self, other: &ClimateState) -> FieldSet {
        let mut set = FieldSet::empty();
        for field in Field::ALL {
            if self.field_value(field) != other.field_value(field) {
                set.insert(field);
            }
        }
        set
    }

    // ── Queries ───────────────────────────────────────────────

    /// Integer encoding of one field: booleans as 0/1, counters as their
    /// value, airflow as its discriminant.
    pub fn field_value(&self, field: Field) -> i32 {
        match field {
            Field::On => i32::from(self.on),
            Field::DualMode => i32::from(self.dual_mode),
            Field::Auto => i32::from(self.auto),
            Field::Ac => i32::from(self.ac),
            Field::MaxAc => i32::from(self.max_ac),
            Field::Recirculation => i32::from(self.recirculation),
            Field::WindShield => i32::from(self.wind_shield),
            Field::RearDefrost => i32::from(self.rear_defrost),
            Field::DriverTemp => self.driver_temp.value(),
            Field::PassengerTemp => self.passenger_temp.value(),
            Field::MyTemp => self.my_temp.value(),
            Field::FanSpeed => self.fan_speed.value(),
            Field::Airflow => i32::from(self.airflow as u8),
            Field::DriverHeatedSeat => self.driver_heated_seat.value(),
            Field::DriverCooledSeat => self.driver_cooled_seat.value(),
            Field::PassengerHeatedSeat => self.passenger_heated_seat.value(),
            Field::PassengerCooledSeat => self.passenger_cooled_seat.value(),
            Field::DriverHeatedSteer => i32::from(self.driver_heated_steer),
            Field::RearPower => i32::from(self.rear_power),
            Field::RearControl => i32::from(self.rear_control),
            Field::RearFanSpeed => self.rear_fan_speed.value(),
            Field::RearTemp => self.rear_temp.value(),
        }
    }

    pub fn is_on(&self) -> bool {
        self.on
    }

    pub fn dual_mode(&self) -> bool {
        self.dual_mode
    }

    pub fn auto(&self) -> bool {
        self.auto
    }

    pub fn ac(&self) -> bool {
        self.ac
    }

    pub fn max_ac(&self) -> bool {
        self.max_ac
    }

    pub fn recirculation(&self) -> bool {
        self.recirculation
    }

    pub fn wind_shield(&self) -> bool {
        self.wind_shield
    }

    pub fn rear_defrost(&self) -> bool {
        self.rear_defrost
    }

    pub fn driver_temp(&self) -> &RangedValue {
        &self.driver_temp
    }

    pub fn passenger_temp(&self) -> &RangedValue {
        &self.passenger_temp
    }

    pub fn my_temp(&self) -> &RangedValue {
        &self.my_temp
    }

    pub fn fan_speed(&self) -> &RangedValue {
        &self.fan_speed
    }

    pub fn airflow(&self) -> Airflow {
        self.airflow
    }

    pub fn driver_heated_seat(&self) -> &RangedValue {
        &self.driver_heated_seat
    }

    pub fn driver_cooled_seat(&self) -> &RangedValue {
        &self.driver_cooled_seat
    }

    pub fn passenger_heated_seat(&self) -> &RangedValue {
        &self.passenger_heated_seat
    }

    pub fn passenger_cooled_seat(&self) -> &RangedValue {
        &self.passenger_cooled_seat
    }

    /// True if any of the four seat heating/cooling levels is above off.
    pub fn any_seat_conditioning(&self) -> bool {
        [
            &self.driver_heated_seat,
            &self.driver_cooled_seat,
            &self.passenger_heated_seat,
            &self.passenger_cooled_seat,
        ]
        .iter()
        .any(|level| !level.at_min())
    }

    pub fn driver_heated_steer(&self) -> bool {
        self.driver_heated_steer
    }

    pub fn rear_power(&self) -> bool {
        self.rear_power
    }

    pub fn rear_control(&self) -> bool {
        self.rear_control
    }

    pub fn rear_fan_speed(&self) -> &RangedValue {
        &self.rear_fan_speed
    }

    pub fn rear_temp(&self) -> &RangedValue {
        &self.rear_temp
    }
}

fn flip(flag: &mut bool, field: Field, changed: &mut FieldSet) {
    *flag = !*flag;
    changed.insert(field);
}

fn step(value: &mut RangedValue, up: bool, field: Field, changed: &mut FieldSet) {
    let moved = if up { value.increase() } else { value.decrease() };
    if moved {
        changed.insert(field);
    }
}

/// Cycle a seat heat/cool level; a seat is never heated and cooled at once.
fn change_seat(
    level: &mut RangedValue,
    field: Field,
    opposite: &mut RangedValue,
    opposite_field: Field,
    changed: &mut FieldSet,
) {
    step(level, true, field, changed);
    if !level.at_min() && opposite.approach(opposite.min_value()) {
        changed.insert(opposite_field);
    }
}

// ---------------------------------------------------------------------------
// ClimateModel capability
// ---------------------------------------------------------------------------

/// Capability contract shared by the emulated and live-backend models.
///
/// Implementors provide [`state`](Self::state) and [`apply`](Self::apply);
/// the named operations are thin wrappers so callers can speak in panel
/// terms.
pub trait ClimateModel {
    /// Current state (read-only).
    fn state(&self) -> &ClimateState;

    /// Apply one operation; returns the fields that changed.
    fn apply(&mut self, op: ModelOp) -> FieldSet;

    fn set_defaults(&mut self) -> FieldSet {
        self.apply(ModelOp::SetDefaults)
    }

    fn activate(&mut self) -> FieldSet {
        self.apply(ModelOp::Activate)
    }

    fn increase_driver_temp(&mut self) -> FieldSet {
        self.apply(ModelOp::IncreaseDriverTemp)
    }

    fn decrease_driver_temp(&mut self) -> FieldSet {
        self.apply(ModelOp::DecreaseDriverTemp)
    }

    fn increase_passenger_temp(&mut self) -> FieldSet {
        self.apply(ModelOp::IncreasePassengerTemp)
    }

    fn decrease_passenger_temp(&mut self) -> FieldSet {
        self.apply(ModelOp::DecreasePassengerTemp)
    }

    fn toggle_dual_mode(&mut self) -> FieldSet {
        self.apply(ModelOp::ToggleDualMode)
    }

    fn activate_my_temp(&mut self) -> FieldSet {
        self.apply(ModelOp::ActivateMyTemp)
    }

    fn store_my_temp(&mut self) -> FieldSet {
        self.apply(ModelOp::StoreMyTemp)
    }

    fn change_driver_heated_seat(&mut self) -> FieldSet {
        self.apply(ModelOp::ChangeDriverHeatedSeat)
    }

    fn change_driver_cooled_seat(&mut self) -> FieldSet {
        self.apply(ModelOp::ChangeDriverCooledSeat)
    }

    fn change_driver_heated_steer(&mut self) -> FieldSet {
        self.apply(ModelOp::ChangeDriverHeatedSteer)
    }

    fn change_passenger_heated_seat(&mut self) -> FieldSet {
        self.apply(ModelOp::ChangePassengerHeatedSeat)
    }

    fn change_passenger_cooled_seat(&mut self) -> FieldSet {
        self.apply(ModelOp::ChangePassengerCooledSeat)
    }

    fn toggle_wind_shield(&mut self) -> FieldSet {
        self.apply(ModelOp::ToggleWindShield)
    }

    fn toggle_rear_defrost(&mut self) -> FieldSet {
        self.apply(ModelOp::ToggleRearDefrost)
    }

    fn toggle_auto(&mut self) -> FieldSet {
        self.apply(ModelOp::ToggleAuto)
    }

    fn toggle_ac(&mut self) -> FieldSet {
        self.apply(ModelOp::ToggleAc)
    }

    fn toggle_max_ac(&mut self) -> FieldSet {
        self.apply(ModelOp::ToggleMaxAc)
    }

    fn toggle_recirculation(&mut self) -> FieldSet {
        self.apply(ModelOp::ToggleRecirculation)
    }

    fn increase_fan_speed(&mut self) -> FieldSet {
        self.apply(ModelOp::IncreaseFanSpeed)
    }

    fn decrease_fan_speed(&mut self) -> FieldSet {
        self.apply(ModelOp::DecreaseFanSpeed)
    }

    fn set_defrost_airflow(&mut self) -> FieldSet {
        self.apply(ModelOp::SetAirflow(Airflow::Defrost))
    }

    fn set_panel_airflow(&mut self) -> FieldSet {
        self.apply(ModelOp::SetAirflow(Airflow::Panel))
    }

    fn set_feet_airflow(&mut self) -> FieldSet {
        self.apply(ModelOp::SetAirflow(Airflow::Feet))
    }

    fn set_both_airflow(&mut self) -> FieldSet {
        self.apply(ModelOp::SetAirflow(Airflow::Both))
    }

    fn toggle_rear_control(&mut self) -> FieldSet {
        self.apply(ModelOp::ToggleRearControl)
    }

    fn toggle_rear_power(&mut self) -> FieldSet {
        self.apply(ModelOp::ToggleRearPower)
    }

    fn increase_rear_fan_speed(&mut self) -> FieldSet {
        self.apply(ModelOp::IncreaseRearFanSpeed)
    }

    fn decrease_rear_fan_speed(&mut self) -> FieldSet {
        self.apply(ModelOp::DecreaseRearFanSpeed)
    }

    fn increase_rear_temp(&mut self) -> FieldSet {
        self.apply(ModelOp::IncreaseRearTemp)
    }

    fn decrease_rear_temp(&mut self) -> FieldSet {
        self.apply(ModelOp::DecreaseRearTemp)
    }
}

impl<M: ClimateModel + ?Sized> ClimateModel for Box<M> {
    fn state(&self) -> &ClimateState {
        (**self).state()
    }

    fn apply(&mut self, op: ModelOp) -> FieldSet {
        (**self).apply(op)
    }
}

/// Build the model variant selected by `config.emulate_can_climate`.
///
/// Called once at startup.  The bus and diagnostics adapters are dropped
/// when the emulated variant is chosen.
pub fn from_config<B, D>(config: &PanelConfig, bus: B, diagnostics: D) -> Box<dyn ClimateModel>
where
    B: VehicleBusPort + 'static,
    D: DiagnosticsPort + 'static,
{
    if config.emulate_can_climate {
        info!("Climate model: emulated");
        Box::new(EmulatedClimate::new())
    } else {
        info!("Climate model: live CAN backend");
        Box::new(CanClimate::new(bus, diagnostics))
    }
}
