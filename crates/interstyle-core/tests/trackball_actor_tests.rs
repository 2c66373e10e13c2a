//! Trackball-actor style integration tests

mod common;

use common::{Call, TrackballHarness};
use interstyle_core::{DevicePosition, EngineEvent, EventHandler, EventKind, StyleConfig};
use rstest::rstest;

#[test]
fn test_left_press_reports_actor_under_pointer() {
    let h = TrackballHarness::new();
    let actor = h.scene.place_actor(7, 7, 0xa11);
    h.style.set_callback_id(EventKind::LeftPress, 5).unwrap();

    h.interactor.at(7, 7);
    h.style.on_left_button_down();

    assert_eq!(
        h.invoker.calls(),
        vec![Call::Actor {
            kind: EventKind::LeftPress,
            id: 5,
            position: DevicePosition::new(7, 7),
            actor: Some(actor),
        }]
    );
    assert_eq!(h.defaults.count(EngineEvent::LeftButtonDown), 1);
}

#[test]
fn test_left_press_over_empty_space_reports_no_actor() {
    let h = TrackballHarness::new();
    h.style.set_callback_id(EventKind::LeftPress, 5).unwrap();

    h.interactor.at(7, 7);
    h.style.on_left_button_down();

    assert_eq!(
        h.invoker.calls(),
        vec![Call::Actor {
            kind: EventKind::LeftPress,
            id: 5,
            position: DevicePosition::new(7, 7),
            actor: None,
        }]
    );
    assert_eq!(h.defaults.count(EngineEvent::LeftButtonDown), 1);
}

#[test]
fn test_non_actor_prop_reports_no_actor() {
    let h = TrackballHarness::new();
    h.scene.place_prop(4, 4, 0xb0b);
    h.style.set_callback_id(EventKind::LeftRelease, 2).unwrap();

    h.interactor.at(4, 4);
    h.style.on_left_button_up();

    assert!(matches!(
        h.invoker.calls().as_slice(),
        [Call::Actor {
            kind: EventKind::LeftRelease,
            actor: None,
            ..
        }]
    ));
    assert_eq!(h.scene.picks.get(), 1);
}

#[test]
fn test_missing_renderer_is_a_miss() {
    let h = TrackballHarness::new();
    h.scene.place_actor(1, 1, 0xa11);
    h.interactor.renderer.set(None);
    h.style.set_callback_id(EventKind::LeftPress, 5).unwrap();

    h.interactor.at(1, 1);
    h.style.on_left_button_down();

    assert!(matches!(
        h.invoker.calls().as_slice(),
        [Call::Actor { actor: None, .. }]
    ));
    assert_eq!(h.scene.picks.get(), 0);
    assert_eq!(h.defaults.count(EngineEvent::LeftButtonDown), 1);
}

#[test]
fn test_no_pick_without_callback() {
    let h = TrackballHarness::new();
    h.scene.place_actor(1, 1, 0xa11);

    h.interactor.at(1, 1);
    h.style.on_left_button_down();
    h.style.on_mouse_move();
    h.style.on_left_button_up();

    assert_eq!(h.scene.picks.get(), 0);
    assert_eq!(h.defaults.total(), 3);
}

#[test]
fn test_mouse_move_tracks_actor() {
    let h = TrackballHarness::new();
    let actor = h.scene.place_actor(10, 10, 0xa11);
    h.style.set_callback_id(EventKind::MouseMove, 8).unwrap();

    h.interactor.at(9, 10);
    h.style.on_mouse_move();
    h.interactor.at(10, 10);
    h.style.on_mouse_move();

    let actors: Vec<_> = h
        .invoker
        .calls()
        .into_iter()
        .map(|call| match call {
            Call::Actor { actor, .. } => actor,
            other => panic!("unexpected call {:?}", other),
        })
        .collect();
    assert_eq!(actors, vec![None, Some(actor)]);
    assert_eq!(h.defaults.count(EngineEvent::MouseMove), 2);
}

#[test]
fn test_pick_on_move_disabled() {
    let h = TrackballHarness::with_config(StyleConfig::default().with_pick_on_move(false));
    h.scene.place_actor(10, 10, 0xa11);
    h.style.set_callback_id(EventKind::MouseMove, 8).unwrap();
    h.style.set_callback_id(EventKind::LeftPress, 9).unwrap();

    h.interactor.at(10, 10);
    h.style.on_mouse_move();
    h.style.on_left_button_down();

    let calls = h.invoker.calls();
    assert!(matches!(
        calls[0],
        Call::Actor {
            kind: EventKind::MouseMove,
            actor: None,
            ..
        }
    ));
    assert!(matches!(
        calls[1],
        Call::Actor {
            kind: EventKind::LeftPress,
            actor: Some(_),
            ..
        }
    ));
    assert_eq!(h.scene.picks.get(), 1);
}

#[rstest]
#[case(EngineEvent::MiddleButtonDown, EventKind::MiddlePress)]
#[case(EngineEvent::MiddleButtonUp, EventKind::MiddleRelease)]
#[case(EngineEvent::RightButtonDown, EventKind::RightPress)]
#[case(EngineEvent::RightButtonUp, EventKind::RightRelease)]
fn test_middle_and_right_never_pick(#[case] event: EngineEvent, #[case] kind: EventKind) {
    let h = TrackballHarness::new();
    h.scene.place_actor(3, 3, 0xa11);
    h.style.set_callback_id(kind, 12).unwrap();

    h.interactor.at(3, 3);
    h.style.dispatch(event);

    assert_eq!(
        h.invoker.calls(),
        vec![Call::Position {
            kind,
            id: 12,
            position: DevicePosition::new(3, 3),
        }]
    );
    assert_eq!(h.scene.picks.get(), 0);
    assert_eq!(h.defaults.count(event), 1);
}

#[test]
fn test_keys_go_straight_to_engine() {
    let h = TrackballHarness::new();
    h.interactor.press_key("f");

    h.style.on_char();
    h.style.on_key_press();

    assert!(h.invoker.calls().is_empty());
    assert_eq!(
        *h.defaults.events.borrow(),
        vec![EngineEvent::Char, EngineEvent::KeyPress]
    );
    assert_eq!(h.interactor.renders.get(), 0);
}

#[test]
fn test_detached_style_ignores_events() {
    let h = TrackballHarness::new();
    h.style.set_callback_id(EventKind::LeftPress, 1).unwrap();
    h.style.set_interactor(None);

    for event in EngineEvent::ALL {
        h.style.dispatch(event);
    }

    assert!(h.invoker.calls().is_empty());
    assert_eq!(h.defaults.total(), 0);
    assert_eq!(h.scene.picks.get(), 0);
}
