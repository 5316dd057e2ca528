// SPDX-License-Identifier: MPL-2.0
//! End-to-end scenarios for the toast engine, driven entirely through
//! the public API the way a host loop would drive it.

use iced_toast::confirm::ConfirmGate;
use iced_toast::notifications::{Engine, LiveRequest, Phase, Request};

/// Drives the engine with small frames until it goes quiet.
fn settle(engine: &mut Engine) {
    for _ in 0..1000 {
        if engine.phase() == Phase::Hidden && engine.queued_count() == 0 {
            return;
        }
        engine.tick(0.05, false);
    }
    panic!("engine did not settle");
}

/// Drives the engine until the current toast has fully slid out.
fn fade_out(engine: &mut Engine) {
    for _ in 0..1000 {
        if engine.phase() != Phase::Exiting {
            return;
        }
        engine.tick(0.05, false);
    }
    panic!("toast never finished exiting");
}

#[test]
fn single_toast_full_lifecycle_returns_to_hidden() {
    let mut engine = Engine::new();
    engine.show(Request::info("s1", "A").with_duration(1.0));

    // Ten 0.1s frames burn the duration, then the slide-out settles.
    for _ in 0..10 {
        engine.tick(0.1, false);
    }
    settle(&mut engine);

    assert_eq!(engine.phase(), Phase::Hidden);
    assert_eq!(engine.animation_progress(), 0.0);
    assert_eq!(engine.queued_count(), 0);
    assert!(engine.current_message().is_none());
    assert!(engine.render_data(false, false).is_none());
}

#[test]
fn double_show_in_one_frame_is_idempotent_on_the_queue() {
    let mut engine = Engine::new();
    engine.show(Request::info("status", "first").with_duration(1.0));
    engine.tick(0.016, false);

    // Same frame, same source, no live request: both calls coalesce.
    engine.show(Request::info("status", "second").with_duration(1.0));
    engine.show(Request::info("status", "third").with_duration(1.0));

    assert_eq!(engine.queued_count(), 0);
    assert_eq!(engine.current_message(), Some("third"));
}

#[test]
fn three_queued_requests_display_in_fifo_order() {
    let mut engine = Engine::new();
    engine.show(Request::info("blocker", "showing").with_duration(0.3));
    engine.show(Request::info("a", "A").with_duration(0.3));
    engine.show(Request::info("b", "B").with_duration(0.3));
    engine.show(Request::info("c", "C").with_duration(0.3));

    let mut order = Vec::new();
    let mut previous = engine.current_source().map(str::to_string);
    for _ in 0..1000 {
        engine.tick(0.05, false);
        let current = engine.current_source().map(str::to_string);
        if current != previous {
            if let Some(source) = &current {
                order.push(source.clone());
            }
            previous = current;
        }
        if engine.phase() == Phase::Hidden && engine.queued_count() == 0 {
            break;
        }
    }

    assert_eq!(order, vec!["a", "b", "c"]);
}

#[test]
fn hide_retracts_current_and_queued_entries_for_a_source() {
    let mut engine = Engine::new();
    engine.show(Request::info("x", "current").with_duration(5.0));
    engine.show(Request::info("y", "other").with_duration(0.5));
    engine.show(Request::info("x", "stale duplicate").with_duration(0.5));
    engine.tick(0.1, false);

    engine.hide("x");
    assert_eq!(engine.phase(), Phase::Exiting);

    fade_out(&mut engine);
    assert_eq!(engine.current_source(), Some("y"));

    settle(&mut engine);
    // The retracted source never resurfaced.
    assert_eq!(engine.last_source(), Some("y"));
}

#[test]
fn paused_ticks_change_nothing() {
    let mut engine = Engine::new();
    engine.show_live(LiveRequest::new("t", 2.0, |remaining| {
        format!("T={:.1}", remaining)
    }));
    engine.tick(0.4, false);

    let timer = engine.timer();
    let progress = engine.animation_progress();
    let message = engine.current_message().map(str::to_string);

    for _ in 0..100 {
        engine.tick(1.0, true);
    }

    assert_eq!(engine.timer(), timer);
    assert_eq!(engine.animation_progress(), progress);
    assert_eq!(engine.current_message().map(str::to_string), message);
    assert_eq!(engine.phase(), Phase::Showing);
}

#[test]
fn live_text_tracks_remaining_time() {
    let mut engine = Engine::new();
    engine.show_live(LiveRequest::new("t", 2.0, |remaining| {
        format!("T={:.1}", remaining)
    }));

    engine.tick(0.4, false);
    assert_eq!(engine.current_message(), Some("T=1.6"));
}

#[test]
fn confirm_gate_drives_countdown_toast_end_to_end() {
    let mut engine = Engine::new();
    let mut gate = ConfirmGate::new(1.0);

    // First press: arm the gate and show the countdown.
    assert!(!gate.confirm());
    gate.arm();
    engine.show_confirm("skip", "Press again", gate.timeout());
    assert!(engine.has_live());

    // The window lapses without a second press; the host retracts the
    // toast.
    let mut expired = false;
    for _ in 0..40 {
        engine.tick(0.05, false);
        if gate.tick(0.05) {
            expired = true;
            engine.hide("skip");
        }
    }
    assert!(expired);
    assert!(!engine.has_live());

    settle(&mut engine);
    assert_eq!(engine.phase(), Phase::Hidden);
    assert!(engine.current_message().is_none());
}

#[test]
fn live_preemption_discards_visible_toast_without_requeueing() {
    let mut engine = Engine::new();
    engine.show(Request::success("save", "Saved!").with_duration(5.0));
    engine.tick(0.2, false);
    assert_eq!(engine.animation_progress(), 1.0);

    engine.show_live(LiveRequest::countdown("skip", "Press again", 2.0));

    // The countdown restarts the slide-in from zero.
    assert_eq!(engine.animation_progress(), 0.0);
    assert_eq!(engine.current_source(), Some("skip"));
    assert_eq!(engine.queued_count(), 0);

    settle(&mut engine);
    // The preempted toast is gone for good.
    assert!(engine.current_message().is_none());
}
