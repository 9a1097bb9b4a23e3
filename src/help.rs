//! Help-mode interception.
//!
//! While the externally owned help flag is set, commands listed in the
//! topic table below never reach the model or the navigation machine;
//! the controller plays the command's instructional video instead.
//! Commands missing from the table are exempt and always pass through.
//!
//! | Command                                 | Topic                   |
//! |-----------------------------------------|-------------------------|
//! | `ToggleDualMode`                        | `climate_Dual`          |
//! | `ActivateMyTemp`                        | `climate_My_temp`       |
//! | `Change{Driver,Passenger}HeatedSeat`    | `climate_Heated_seats`  |
//! | `Change{Driver,Passenger}CooledSeat`    | `climate_Cooled_seats`  |
//! | `ToggleAuto`                            | `climate_Auto`          |
//! | `ToggleMaxAc`                           | `climate_Max_AC`        |
//! | `ToggleRecirculation`                   | `climate_Recirculation` |
//! | `ToggleRearControl`                     | `climate_rear_Control`  |
//! | `{Inc,Dec}RearTemp`, `RearTempAction`   | `climate_rear_Temp`     |
//! | `ToggleRear` (from front only)          | `climate_rear_Climate`  |

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use log::info;

use crate::app::commands::ClimateCommand;
use crate::app::ports::HelpModeSource;
use crate::fsm::StateId;

// ---------------------------------------------------------------------------
// Help flag
// ---------------------------------------------------------------------------

/// Owning handle of the process-wide help flag.  Held by the demo/help
/// subsystem; the core only ever sees a [`HelpModeView`].
#[derive(Debug, Clone, Default)]
pub struct HelpModeFlag(Arc<AtomicBool>);

impl HelpModeFlag {
    pub fn new(active: bool) -> Self {
        Self(Arc::new(AtomicBool::new(active)))
    }

    pub fn set(&self, active: bool) {
        self.0.store(active, Ordering::Release);
    }

    /// Read-only handle for the core.
    pub fn view(&self) -> HelpModeView {
        HelpModeView(Arc::clone(&self.0))
    }
}

/// Read-only view of the help flag.
#[derive(Debug, Clone)]
pub struct HelpModeView(Arc<AtomicBool>);

impl HelpModeSource for HelpModeView {
    fn is_active(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

// ---------------------------------------------------------------------------
// Topic table
// ---------------------------------------------------------------------------

/// Video to play instead of executing a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HelpTopic {
    pub key: &'static str,
    /// Navigation state to land on after playback.
    pub target_state: Option<&'static str>,
}

impl HelpTopic {
    const fn key(key: &'static str) -> Self {
        Self {
            key,
            target_state: None,
        }
    }
}

/// Topic for `cmd` while help mode is on, or `None` if the command is on
/// the exemption list.  `ToggleRear` is only intercepted from `front`;
/// returning from `rear` always goes through.
pub fn help_topic(cmd: ClimateCommand, nav: StateId) -> Option<HelpTopic> {
    use ClimateCommand as C;

    let topic = match cmd {
        C::ToggleDualMode => HelpTopic::key("climate_Dual"),
        C::ActivateMyTemp => HelpTopic::key("climate_My_temp"),
        C::ChangeDriverHeatedSeat | C::ChangePassengerHeatedSeat => {
            HelpTopic::key("climate_Heated_seats")
        }
        C::ChangeDriverCooledSeat | C::ChangePassengerCooledSeat => {
            HelpTopic::key("climate_Cooled_seats")
        }
        C::ToggleAuto => HelpTopic::key("climate_Auto"),
        C::ToggleMaxAc => HelpTopic::key("climate_Max_AC"),
        C::ToggleRecirculation => HelpTopic::key("climate_Recirculation"),
        C::ToggleRearControl => HelpTopic::key("climate_rear_Control"),
        C::IncRearTemp | C::DecRearTemp | C::RearTempAction => HelpTopic::key("climate_rear_Temp"),
        C::ToggleRear if nav == StateId::Front => HelpTopic {
            key: "climate_rear_Climate",
            target_state: Some(StateId::Rear.host_name()),
        },
        C::ToggleRear
        | C::SetDefaults
        | C::Activate
        | C::IncDriverTemp
        | C::DecDriverTemp
        | C::IncPassengerTemp
        | C::DecPassengerTemp
        | C::StoreMyTemp
        | C::ChangeDriverHeatedSteer
        | C::ToggleWindShield
        | C::ToggleRearDefrost
        | C::ToggleAc
        | C::IncFanSpeed
        | C::DecFanSpeed
        | C::DefrostAirflow
        | C::PanelAirflow
        | C::FeetAirflow
        | C::BothAirflow
        | C::ToggleRearPower
        | C::IncRearFanSpeed
        | C::DecRearFanSpeed
        | C::IncSeatContour { .. }
        | C::DecSeatContour { .. } => return None,
    };
    Some(topic)
}

// ---------------------------------------------------------------------------
// Interceptor
// ---------------------------------------------------------------------------

/// Decorator in front of the controller's dispatch table.
pub struct HelpInterceptor<H: HelpModeSource> {
    source: H,
    intercepted: u64,
}

impl<H: HelpModeSource> HelpInterceptor<H> {
    pub fn new(source: H) -> Self {
        Self {
            source,
            intercepted: 0,
        }
    }

    pub fn is_active(&self) -> bool {
        self.source.is_active()
    }

    /// Decide whether `cmd` is diverted to video playback.
    pub fn intercept(&mut self, cmd: ClimateCommand, nav: StateId) -> Option<HelpTopic> {
        if !self.source.is_active() {
            return None;
        }
        let topic = help_topic(cmd, nav)?;
        self.intercepted = self.intercepted.wrapping_add(1);
        info!("HELP: {:?} -> video '{}'", cmd, topic.key);
        Some(topic)
    }

    /// Commands diverted since startup.
    pub fn intercepted(&self) -> u64 {
        self.intercepted
    }
}
