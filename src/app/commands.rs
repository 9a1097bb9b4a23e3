//! Inbound UI commands.
//!
//! One variant per button/gesture the climate panel exposes.  The
//! [`ClimateController`](super::service::ClimateController) runs each one
//! through help-mode interception and then dispatches it to the model, the
//! navigation machine, or the seat contour store.

use core::fmt;
use core::str::FromStr;

use crate::model::seat_contour::Occupant;
use crate::model::{Airflow, ModelOp};

/// Commands the view layer can send into the climate core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClimateCommand {
    // ── Front panel ───────────────────────────────────────────
    SetDefaults,
    /// Climate power on/off.
    Activate,
    /// Show/hide the rear panel.
    ToggleRear,
    IncDriverTemp,
    DecDriverTemp,
    IncPassengerTemp,
    DecPassengerTemp,
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
    IncFanSpeed,
    DecFanSpeed,
    DefrostAirflow,
    PanelAirflow,
    FeetAirflow,
    BothAirflow,

    // ── Rear panel ────────────────────────────────────────────
    ToggleRearControl,
    ToggleRearPower,
    IncRearFanSpeed,
    DecRearFanSpeed,
    /// Tap on the rear temperature indicator (help video only).
    RearTempAction,
    IncRearTemp,
    DecRearTemp,

    // ── Seat settings ─────────────────────────────────────────
    IncSeatContour { occupant: Occupant, axis: u8 },
    DecSeatContour { occupant: Occupant, axis: u8 },
}

impl ClimateCommand {
    /// Model operation this command drives, if any.
    ///
    /// The fan-speed and rear-temperature buttons are wired inverted on
    /// this panel: the "increase" button drives the model's decrease and
    /// vice versa.
    pub fn model_op(self) -> Option<ModelOp> {
        use ClimateCommand as C;

        let op = match self {
            C::SetDefaults => ModelOp::SetDefaults,
            C::Activate => ModelOp::Activate,
            C::IncDriverTemp => ModelOp::IncreaseDriverTemp,
            C::DecDriverTemp => ModelOp::DecreaseDriverTemp,
            C::IncPassengerTemp => ModelOp::IncreasePassengerTemp,
            C::DecPassengerTemp => ModelOp::DecreasePassengerTemp,
            C::ToggleDualMode => ModelOp::ToggleDualMode,
            C::ActivateMyTemp => ModelOp::ActivateMyTemp,
            C::StoreMyTemp => ModelOp::StoreMyTemp,
            C::ChangeDriverHeatedSeat => ModelOp::ChangeDriverHeatedSeat,
            C::ChangeDriverCooledSeat => ModelOp::ChangeDriverCooledSeat,
            C::ChangeDriverHeatedSteer => ModelOp::ChangeDriverHeatedSteer,
            C::ChangePassengerHeatedSeat => ModelOp::ChangePassengerHeatedSeat,
            C::ChangePassengerCooledSeat => ModelOp::ChangePassengerCooledSeat,
            C::ToggleWindShield => ModelOp::ToggleWindShield,
            C::ToggleRearDefrost => ModelOp::ToggleRearDefrost,
            C::ToggleAuto => ModelOp::ToggleAuto,
            C::ToggleAc => ModelOp::ToggleAc,
            C::ToggleMaxAc => ModelOp::ToggleMaxAc,
            C::ToggleRecirculation => ModelOp::ToggleRecirculation,
            C::IncFanSpeed => ModelOp::DecreaseFanSpeed,
            C::DecFanSpeed => ModelOp::IncreaseFanSpeed,
            C::DefrostAirflow => ModelOp::SetAirflow(Airflow::Defrost),
            C::PanelAirflow => ModelOp::SetAirflow(Airflow::Panel),
            C::FeetAirflow => ModelOp::SetAirflow(Airflow::Feet),
            C::BothAirflow => ModelOp::SetAirflow(Airflow::Both),
            C::ToggleRearControl => ModelOp::ToggleRearControl,
            C::ToggleRearPower => ModelOp::ToggleRearPower,
            C::IncRearFanSpeed => ModelOp::DecreaseRearFanSpeed,
            C::DecRearFanSpeed => ModelOp::IncreaseRearFanSpeed,
            C::IncRearTemp => ModelOp::DecreaseRearTemp,
            C::DecRearTemp => ModelOp::IncreaseRearTemp,
            C::ToggleRear
            | C::RearTempAction
            | C::IncSeatContour { .. }
            | C::DecSeatContour { .. } => return None,
        };
        Some(op)
    }
}

// ---------------------------------------------------------------------------
// Text form (used by the host binary)
// ---------------------------------------------------------------------------

/// A command name that does not match any [`ClimateCommand`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseCommandError(pub String);

impl fmt::Display for ParseCommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown climate command '{}'", self.0)
    }
}

impl core::error::Error for ParseCommandError {}

impl FromStr for ClimateCommand {
    type Err = ParseCommandError;

    /// Kebab-case command names; seat contour commands take
    /// `inc-contour:<driver|passenger>:<axis>`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        use ClimateCommand as C;

        let err = || ParseCommandError(s.to_owned());

        if let Some((head, rest)) = s.split_once(':') {
            let (who, axis) = rest.split_once(':').ok_or_else(err)?;
            let occupant = match who {
                "driver" => Occupant::Driver,
                "passenger" => Occupant::Passenger,
                _ => return Err(err()),
            };
            let axis: u8 = axis.parse().map_err(|_| err())?;
            return match head {
                "inc-contour" => Ok(C::IncSeatContour { occupant, axis }),
                "dec-contour" => Ok(C::DecSeatContour { occupant, axis }),
                _ => Err(err()),
            };
        }

        let cmd = match s {
            "set-defaults" => C::SetDefaults,
            "activate" => C::Activate,
            "toggle-rear" => C::ToggleRear,
            "inc-driver-temp" => C::IncDriverTemp,
            "dec-driver-temp" => C::DecDriverTemp,
            "inc-passenger-temp" => C::IncPassengerTemp,
            "dec-passenger-temp" => C::DecPassengerTemp,
            "toggle-dual-mode" => C::ToggleDualMode,
            "activate-my-temp" => C::ActivateMyTemp,
            "store-my-temp" => C::StoreMyTemp,
            "driver-heated-seat" => C::ChangeDriverHeatedSeat,
            "driver-cooled-seat" => C::ChangeDriverCooledSeat,
            "driver-heated-steer" => C::ChangeDriverHeatedSteer,
            "passenger-heated-seat" => C::ChangePassengerHeatedSeat,
            "passenger-cooled-seat" => C::ChangePassengerCooledSeat,
            "toggle-wind-shield" => C::ToggleWindShield,
            "toggle-rear-defrost" => C::ToggleRearDefrost,
            "toggle-auto" => C::ToggleAuto,
            "toggle-ac" => C::ToggleAc,
            "toggle-max-ac" => C::ToggleMaxAc,
            "toggle-recirculation" => C::ToggleRecirculation,
            "inc-fan-speed" => C::IncFanSpeed,
            "dec-fan-speed" => C::DecFanSpeed,
            "defrost-airflow" => C::DefrostAirflow,
            "panel-airflow" => C::PanelAirflow,
            "feet-airflow" => C::FeetAirflow,
            "both-airflow" => C::BothAirflow,
            "toggle-rear-control" => C::ToggleRearControl,
            "toggle-rear-power" => C::ToggleRearPower,
            "inc-rear-fan-speed" => C::IncRearFanSpeed,
            "dec-rear-fan-speed" => C::DecRearFanSpeed,
            "rear-temp-action" => C::RearTempAction,
            "inc-rear-temp" => C::IncRearTemp,
            "dec-rear-temp" => C::DecRearTemp,
            _ => return Err(err()),
        };
        Ok(cmd)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fan_and_rear_temp_buttons_are_inverted() {
        assert_eq!(ClimateCommand::IncFanSpeed.model_op(), Some(ModelOp::DecreaseFanSpeed));
        assert_eq!(ClimateCommand::DecFanSpeed.model_op(), Some(ModelOp::IncreaseFanSpeed));
        assert_eq!(
            ClimateCommand::IncRearFanSpeed.model_op(),
            Some(ModelOp::DecreaseRearFanSpeed)
        );
        assert_eq!(ClimateCommand::IncRearTemp.model_op(), Some(ModelOp::DecreaseRearTemp));
        assert_eq!(ClimateCommand::DecRearTemp.model_op(), Some(ModelOp::IncreaseRearTemp));
    }

    #[test]
    fn navigation_and_help_only_commands_have_no_model_op() {
        assert_eq!(ClimateCommand::ToggleRear.model_op(), None);
        assert_eq!(ClimateCommand::RearTempAction.model_op(), None);
    }

    #[test]
    fn parses_kebab_names() {
        assert_eq!("toggle-dual-mode".parse(), Ok(ClimateCommand::ToggleDualMode));
        assert_eq!("store-my-temp".parse(), Ok(ClimateCommand::StoreMyTemp));
        assert_eq!(
            "inc-contour:passenger:6".parse(),
            Ok(ClimateCommand::IncSeatContour {
                occupant: Occupant::Passenger,
                axis: 6
            })
        );
    }

    #[test]
    fn rejects_unknown_names() {
        assert!("warp-drive".parse::<ClimateCommand>().is_err());
        assert!("inc-contour:pilot:1".parse::<ClimateCommand>().is_err());
        assert!("inc-contour:driver:x".parse::<ClimateCommand>().is_err());
    }
}
