//! Command → help interception → model / navigation → flags pipeline.

use climate_core::app::commands::ClimateCommand;
use climate_core::app::events::PanelEvent;
use climate_core::app::service::ClimateController;
use climate_core::config::PanelConfig;
use climate_core::derived::FlagId;
use climate_core::fsm::StateId;
use climate_core::help::{HelpModeFlag, HelpModeView};
use climate_core::model::emulated::EmulatedClimate;
use climate_core::model::seat_contour::Occupant;
use climate_core::model::{FAN_SPEED_DEFAULT, TEMP_DEFAULT_F};
use climate_core::queue::CommandQueue;

use super::mock_host::{HostCall, MockHost, RecordingSink};

type Controller = ClimateController<EmulatedClimate, HelpModeView>;

fn make_panel(help: bool) -> (Controller, HelpModeFlag, MockHost, RecordingSink) {
    let flag = HelpModeFlag::new(help);
    let mut ctrl =
        ClimateController::new(EmulatedClimate::new(), flag.view(), &PanelConfig::default());
    let mut sink = RecordingSink::new();
    ctrl.start(&mut sink);
    (ctrl, flag, MockHost::new(), sink)
}

// ── Help mode ─────────────────────────────────────────────────

#[test]
fn help_mode_dual_toggle_plays_video_only() {
    let (mut ctrl, _flag, mut host, mut sink) = make_panel(true);
    let before = ctrl.climate().clone();

    ctrl.handle_command(ClimateCommand::ToggleDualMode, &mut host, &mut sink);

    assert_eq!(ctrl.climate(), &before, "help mode must not mutate the model");
    assert_eq!(host.videos(), vec!["climate_Dual"]);
    assert_eq!(
        sink.count(|e| matches!(e, PanelEvent::ModelChanged(_))),
        0
    );
}

#[test]
fn dual_toggle_without_help_mutates_and_plays_nothing() {
    let (mut ctrl, _flag, mut host, mut sink) = make_panel(false);
    let dual = ctrl.climate().dual_mode();

    ctrl.handle_command(ClimateCommand::ToggleDualMode, &mut host, &mut sink);

    assert_eq!(ctrl.climate().dual_mode(), !dual);
    assert!(host.calls.is_empty());
}

#[test]
fn exempt_commands_mutate_under_help() {
    let (mut ctrl, _flag, mut host, mut sink) = make_panel(true);

    ctrl.handle_command(ClimateCommand::IncDriverTemp, &mut host, &mut sink);
    assert_eq!(ctrl.climate().driver_temp().value(), TEMP_DEFAULT_F + 1);

    ctrl.handle_command(ClimateCommand::DecDriverTemp, &mut host, &mut sink);
    ctrl.handle_command(ClimateCommand::DecDriverTemp, &mut host, &mut sink);
    assert_eq!(ctrl.climate().driver_temp().value(), TEMP_DEFAULT_F - 1);

    let steer = ctrl.climate().driver_heated_steer();
    ctrl.handle_command(ClimateCommand::ChangeDriverHeatedSteer, &mut host, &mut sink);
    assert_eq!(ctrl.climate().driver_heated_steer(), !steer);

    assert!(host.videos().is_empty());
}

#[test]
fn help_flag_is_read_live() {
    let (mut ctrl, flag, mut host, mut sink) = make_panel(false);
    ctrl.handle_command(ClimateCommand::ToggleAuto, &mut host, &mut sink);
    assert!(host.videos().is_empty());

    flag.set(true);
    assert!(ctrl.help_active());
    ctrl.handle_command(ClimateCommand::ToggleAuto, &mut host, &mut sink);
    assert_eq!(host.videos(), vec!["climate_Auto"]);
}

#[test]
fn rear_toggle_under_help_from_front_plays_rear_climate() {
    let (mut ctrl, _flag, mut host, mut sink) = make_panel(true);

    ctrl.handle_command(ClimateCommand::ToggleRear, &mut host, &mut sink);

    assert_eq!(ctrl.navigation(), StateId::Front);
    assert_eq!(
        host.calls,
        vec![HostCall::StartTopic {
            topic: "climate_rear_Climate",
            target_state: Some("climate.rear"),
        }]
    );
}

#[test]
fn rear_toggle_under_help_from_rear_returns_front() {
    let (mut ctrl, flag, mut host, mut sink) = make_panel(false);
    ctrl.handle_command(ClimateCommand::ToggleRear, &mut host, &mut sink);
    assert_eq!(ctrl.navigation(), StateId::Rear);

    flag.set(true);
    ctrl.handle_command(ClimateCommand::ToggleRear, &mut host, &mut sink);
    assert_eq!(ctrl.navigation(), StateId::Front);
    assert_eq!(host.navigations(), vec!["climate.rear", "climate.front"]);
}

#[test]
fn rear_temp_tap_is_help_only() {
    let (mut ctrl, flag, mut host, mut sink) = make_panel(false);
    let before = ctrl.climate().clone();
    ctrl.handle_command(ClimateCommand::RearTempAction, &mut host, &mut sink);
    assert_eq!(ctrl.climate(), &before);
    assert!(host.calls.is_empty());

    flag.set(true);
    ctrl.handle_command(ClimateCommand::RearTempAction, &mut host, &mut sink);
    assert_eq!(host.videos(), vec!["climate_rear_Temp"]);
}

// ── Navigation ────────────────────────────────────────────────

#[test]
fn navigation_round_trip() {
    let (mut ctrl, _flag, mut host, mut sink) = make_panel(false);

    ctrl.handle_command(ClimateCommand::ToggleRear, &mut host, &mut sink);
    assert_eq!(ctrl.navigation(), StateId::Rear);
    assert!(ctrl.nav_context().hide_front);
    assert!(!ctrl.nav_context().hide_rear);

    ctrl.handle_command(ClimateCommand::ToggleRear, &mut host, &mut sink);
    assert_eq!(ctrl.navigation(), StateId::Front);
    assert!(!ctrl.nav_context().hide_front);
    assert!(ctrl.nav_context().hide_rear);

    assert_eq!(
        sink.count(|e| matches!(e, PanelEvent::NavigationChanged { .. })),
        2
    );
}

// ── Model and flags ───────────────────────────────────────────

#[test]
fn store_and_recall_my_temp_round_trip() {
    let (mut ctrl, _flag, mut host, mut sink) = make_panel(false);
    ctrl.handle_command(ClimateCommand::IncDriverTemp, &mut host, &mut sink);
    let stored = ctrl.climate().driver_temp().value();

    ctrl.handle_command(ClimateCommand::StoreMyTemp, &mut host, &mut sink);
    ctrl.handle_command(ClimateCommand::ActivateMyTemp, &mut host, &mut sink);

    assert_eq!(ctrl.climate().driver_temp().value(), stored);
    assert!(ctrl.flags().is_my_temp());
}

#[test]
fn power_off_clears_is_my_temp_in_same_step() {
    let (mut ctrl, _flag, mut host, mut sink) = make_panel(false);
    ctrl.handle_command(ClimateCommand::StoreMyTemp, &mut host, &mut sink);
    assert!(ctrl.flags().is_my_temp());
    sink.events.clear();

    ctrl.handle_command(ClimateCommand::Activate, &mut host, &mut sink);

    assert!(!ctrl.flags().is_my_temp());
    assert!(ctrl.flags().is_off());
    assert!(sink.events.contains(&PanelEvent::FlagChanged {
        flag: FlagId::IsMyTemp,
        value: false
    }));
    assert!(sink.events.contains(&PanelEvent::FlagChanged {
        flag: FlagId::IsOff,
        value: true
    }));
}

#[test]
fn fan_buttons_drive_model_inverted() {
    let (mut ctrl, _flag, mut host, mut sink) = make_panel(false);
    ctrl.handle_command(ClimateCommand::IncFanSpeed, &mut host, &mut sink);
    assert_eq!(ctrl.climate().fan_speed().value(), FAN_SPEED_DEFAULT - 1);
    ctrl.handle_command(ClimateCommand::DecFanSpeed, &mut host, &mut sink);
    ctrl.handle_command(ClimateCommand::DecFanSpeed, &mut host, &mut sink);
    assert_eq!(ctrl.climate().fan_speed().value(), FAN_SPEED_DEFAULT + 1);
}

#[test]
fn store_ack_pulse_restarts_on_second_store() {
    let (mut ctrl, _flag, mut host, mut sink) = make_panel(false);
    ctrl.handle_command(ClimateCommand::StoreMyTemp, &mut host, &mut sink);
    ctrl.tick(1500, &mut sink);
    ctrl.handle_command(ClimateCommand::StoreMyTemp, &mut host, &mut sink);
    ctrl.tick(1500, &mut sink);
    assert!(ctrl.store_ack_visible());
    ctrl.tick(500, &mut sink);
    assert!(!ctrl.store_ack_visible());
    assert_eq!(sink.count(|e| *e == PanelEvent::StoreAckShown), 2);
    assert_eq!(sink.count(|e| *e == PanelEvent::StoreAckHidden), 1);
}

#[test]
fn seat_contour_commands_bypass_help_and_clamp() {
    let (mut ctrl, _flag, mut host, mut sink) = make_panel(true);
    let inc = ClimateCommand::IncSeatContour {
        occupant: Occupant::Passenger,
        axis: 8,
    };
    for _ in 0..10 {
        ctrl.handle_command(inc, &mut host, &mut sink);
    }
    assert_eq!(
        ctrl.seat_contour()
            .axis(Occupant::Passenger, 8)
            .map(|v| v.value()),
        Some(3)
    );
    // unknown axis is ignored
    ctrl.handle_command(
        ClimateCommand::DecSeatContour {
            occupant: Occupant::Driver,
            axis: 42,
        },
        &mut host,
        &mut sink,
    );
    assert!(host.videos().is_empty());
}

// ── Queue ─────────────────────────────────────────────────────

#[test]
fn drain_applies_queued_commands_in_order() {
    let (mut ctrl, _flag, mut host, mut sink) = make_panel(false);
    let queue = CommandQueue::new();
    queue.push(ClimateCommand::ToggleRear);
    queue.push(ClimateCommand::IncRearTemp);
    queue.push(ClimateCommand::ToggleRear);

    assert_eq!(ctrl.drain(&queue, &mut host, &mut sink), 3);
    assert!(queue.is_empty());
    assert_eq!(ctrl.navigation(), StateId::Front);
    assert_eq!(host.navigations(), vec!["climate.rear", "climate.front"]);
}

#[test]
fn snapshot_reflects_panel() {
    let (mut ctrl, _flag, mut host, mut sink) = make_panel(false);
    ctrl.handle_command(ClimateCommand::ToggleRear, &mut host, &mut sink);
    let snap = ctrl.snapshot();
    assert_eq!(snap.navigation, StateId::Rear);
    assert!(snap.hide_front);
    assert!(!snap.help_mode);

    let json = serde_json::to_value(&snap).unwrap();
    assert_eq!(json["navigation"], "Rear");
    assert_eq!(json["is_off"], false);
}
