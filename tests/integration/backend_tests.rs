//! Live-backend model behind the controller: write-through and
//! optimistic failure handling.

use std::sync::{Arc, Mutex};

use climate_core::adapters::bus::LoopbackBus;
use climate_core::app::commands::ClimateCommand;
use climate_core::app::ports::BusError;
use climate_core::app::service::ClimateController;
use climate_core::config::PanelConfig;
use climate_core::diagnostics::FaultLog;
use climate_core::help::{HelpModeFlag, HelpModeView};
use climate_core::model::can::{CanClimate, signal_id};
use climate_core::model::{self, ClimateModel, Field};

use super::mock_host::{MockHost, RecordingSink, SharedBus};

type LiveController = ClimateController<CanClimate<SharedBus, FaultLog>, HelpModeView>;

fn live_panel(help: bool) -> (LiveController, SharedBus, HelpModeFlag, MockHost, RecordingSink) {
    let bus = SharedBus::new();
    let flag = HelpModeFlag::new(help);
    let model = CanClimate::new(bus.clone(), FaultLog::new());
    let config = PanelConfig {
        emulate_can_climate: false,
        ..PanelConfig::default()
    };
    let mut ctrl = ClimateController::new(model, flag.view(), &config);
    let mut sink = RecordingSink::new();
    ctrl.start(&mut sink);
    (ctrl, bus, flag, MockHost::new(), sink)
}

#[test]
fn mutation_writes_each_changed_field() {
    let (mut ctrl, bus, _flag, mut host, mut sink) = live_panel(false);

    ctrl.handle_command(ClimateCommand::IncPassengerTemp, &mut host, &mut sink);

    let frames = bus.frames();
    let fields: Vec<Field> = frames.iter().map(|f| f.field).collect();
    assert_eq!(fields, vec![Field::DualMode, Field::PassengerTemp]);
    assert_eq!(frames[1].signal_id, signal_id(Field::PassengerTemp));
    assert_eq!(frames[1].value, ctrl.climate().passenger_temp().value());
}

#[test]
fn intercepted_commands_never_reach_the_bus() {
    let (mut ctrl, bus, _flag, mut host, mut sink) = live_panel(true);
    ctrl.handle_command(ClimateCommand::ToggleMaxAc, &mut host, &mut sink);
    ctrl.handle_command(ClimateCommand::ToggleRecirculation, &mut host, &mut sink);
    assert!(bus.frames().is_empty());
    assert_eq!(host.videos(), vec!["climate_Max_AC", "climate_Recirculation"]);
}

#[test]
fn bus_failure_is_optimistic() {
    let (mut ctrl, bus, _flag, mut host, mut sink) = live_panel(false);
    bus.fail(Some(BusError::Timeout));

    ctrl.handle_command(ClimateCommand::ToggleWindShield, &mut host, &mut sink);

    assert!(ctrl.climate().wind_shield(), "local state must not roll back");
    let faults = ctrl.model().diagnostics();
    assert_eq!(faults.total(), 1);
    let last = faults.last().copied().unwrap();
    assert_eq!(last.field, Field::WindShield);
    assert_eq!(last.error, BusError::Timeout);
    assert_eq!(ctrl.metrics(faults).bus_failures, 1);

    bus.fail(None);
    ctrl.handle_command(ClimateCommand::ToggleWindShield, &mut host, &mut sink);
    assert!(!ctrl.climate().wind_shield());
    assert_eq!(bus.frames().len(), 1);
}

#[test]
fn set_defaults_writes_only_fields_that_differ() {
    let (mut ctrl, bus, _flag, mut host, mut sink) = live_panel(false);
    ctrl.handle_command(ClimateCommand::ToggleAuto, &mut host, &mut sink);
    ctrl.handle_command(ClimateCommand::IncRearFanSpeed, &mut host, &mut sink);
    let before = bus.frames().len();

    ctrl.handle_command(ClimateCommand::SetDefaults, &mut host, &mut sink);

    let reset: Vec<Field> = bus.frames()[before..].iter().map(|f| f.field).collect();
    assert_eq!(reset, vec![Field::Auto, Field::RearFanSpeed]);
}

#[test]
fn from_config_selects_live_backend() {
    let faults = Arc::new(Mutex::new(FaultLog::new()));
    let bus = LoopbackBus::new();
    let link = bus.link();
    link.set_offline(true);
    let config = PanelConfig {
        emulate_can_climate: false,
        ..PanelConfig::default()
    };

    let mut model = model::from_config(&config, bus, Arc::clone(&faults));
    model.toggle_ac();

    assert!(!model.state().ac());
    assert_eq!(faults.lock().unwrap().total(), 1);

    link.set_offline(false);
    model.toggle_ac();
    assert!(model.state().ac());
    assert_eq!(link.accepted(), 1);
    assert_eq!(faults.lock().unwrap().total(), 1);
}

#[test]
fn from_config_emulated_ignores_bus() {
    let faults = Arc::new(Mutex::new(FaultLog::new()));
    let bus = LoopbackBus::new();
    let link = bus.link();
    link.set_offline(true);

    let mut model = model::from_config(&PanelConfig::default(), bus, Arc::clone(&faults));
    model.toggle_ac();

    assert!(faults.lock().unwrap().is_empty());
    assert_eq!(link.accepted(), 0);
}
