// Host-side tests for the reveal sequencer and the typewriter.

use tars_web::core::*;

fn sequencer(keys: &[&'static str]) -> RevealSequencer<&'static str> {
    let mut seq = RevealSequencer::default();
    for k in keys {
        seq.register(*k);
    }
    seq
}

#[test]
fn elements_start_pending() {
    let seq = sequencer(&["h1", "card"]);
    assert_eq!(seq.len(), 2);
    assert_eq!(seq.state(&"h1"), Some(RevealState::Pending));
    assert_eq!(seq.state(&"card"), Some(RevealState::Pending));
    assert_eq!(seq.revealed_count(), 0);
    assert!(!seq.typing_started());
}

#[test]
fn reveal_fires_once_despite_repeated_intersections() {
    let mut seq = sequencer(&["card"]);
    assert_eq!(seq.observe(&"card", true, 0.5), RevealAction::Activate);
    for visible in [false, true, false, true, true] {
        assert_eq!(seq.observe(&"card", visible, 1.0), RevealAction::None);
    }
    assert_eq!(seq.state(&"card"), Some(RevealState::Revealed));
    assert_eq!(seq.revealed_count(), 1);
}

#[test]
fn ratio_below_threshold_does_nothing() {
    let mut seq = sequencer(&["card"]);
    assert_eq!(seq.observe(&"card", true, 0.1), RevealAction::None);
    assert_eq!(seq.observe(&"card", true, 0.149), RevealAction::None);
    assert_eq!(seq.state(&"card"), Some(RevealState::Pending));
    assert_eq!(seq.observe(&"card", true, 0.15), RevealAction::Activate);
}

#[test]
fn not_intersecting_does_nothing() {
    let mut seq = sequencer(&["card"]);
    assert_eq!(seq.observe(&"card", false, 0.9), RevealAction::None);
    assert_eq!(seq.state(&"card"), Some(RevealState::Pending));
}

#[test]
fn unknown_elements_are_ignored() {
    let mut seq = sequencer(&["card"]);
    assert_eq!(seq.observe(&"footer", true, 1.0), RevealAction::None);
    assert_eq!(seq.state(&"footer"), None);
    assert_eq!(seq.len(), 1);
}

#[test]
fn heading_types_exactly_once() {
    let mut seq = sequencer(&["h1", "h2"]);
    seq.set_heading("h1");
    assert_eq!(seq.observe(&"h2", true, 1.0), RevealAction::Activate);
    assert!(!seq.typing_started());
    assert_eq!(seq.observe(&"h1", true, 1.0), RevealAction::ActivateAndType);
    assert!(seq.typing_started());
    // leaving and re-entering the viewport never restarts typing
    assert_eq!(seq.observe(&"h1", false, 0.0), RevealAction::None);
    assert_eq!(seq.observe(&"h1", true, 1.0), RevealAction::None);
}

#[test]
fn only_the_first_heading_is_used() {
    let mut seq = sequencer(&["a", "b"]);
    seq.set_heading("a");
    seq.set_heading("b");
    assert_eq!(seq.observe(&"b", true, 1.0), RevealAction::Activate);
    assert_eq!(seq.observe(&"a", true, 1.0), RevealAction::ActivateAndType);
}

#[test]
fn heading_is_tracked_even_if_not_registered() {
    let mut seq: RevealSequencer<u32> = RevealSequencer::new(RevealConfig { threshold: 0.5 });
    seq.set_heading(0);
    assert_eq!(seq.state(&0), Some(RevealState::Pending));
    assert_eq!(seq.observe(&0, true, 0.4), RevealAction::None);
    assert_eq!(seq.observe(&0, true, 0.5), RevealAction::ActivateAndType);
}

#[test]
fn reregistering_keeps_revealed_state() {
    let mut seq = sequencer(&["card"]);
    seq.observe(&"card", true, 1.0);
    seq.register("card");
    assert_eq!(seq.state(&"card"), Some(RevealState::Revealed));
}

#[test]
fn typewriter_emits_one_char_per_step() {
    let mut tw = Typewriter::new("TARS");
    assert_eq!(tw.len(), 4);
    assert_eq!(tw.shown(), "");
    let mut shown = Vec::new();
    for _ in 0..3 {
        assert_eq!(tw.step(), TypewriterStep::Emitted { finished: false });
        shown.push(tw.shown().to_string());
    }
    assert_eq!(tw.step(), TypewriterStep::Emitted { finished: true });
    assert_eq!(shown, vec!["T", "TA", "TAR"]);
    assert_eq!(tw.shown(), "TARS");
    assert!(tw.is_finished());
    assert_eq!(tw.remaining(), 0);
}

#[test]
fn typewriter_stops_after_finishing() {
    let mut tw = Typewriter::new("ok");
    tw.step();
    tw.step();
    for _ in 0..5 {
        assert_eq!(tw.step(), TypewriterStep::Done);
    }
    assert_eq!(tw.shown(), "ok");
}

#[test]
fn typewriter_counts_characters_not_bytes() {
    let text = "Ünïcødé ✓";
    let mut tw = Typewriter::new(text);
    assert_eq!(tw.len(), text.chars().count());
    let mut steps = 0;
    while let TypewriterStep::Emitted { .. } = tw.step() {
        steps += 1;
    }
    assert_eq!(steps, 9);
    assert_eq!(tw.shown(), text);
}

#[test]
fn empty_text_is_done_immediately() {
    let mut tw = Typewriter::new("");
    assert!(tw.is_empty());
    assert!(tw.is_finished());
    assert_eq!(tw.step(), TypewriterStep::Done);
    assert_eq!(tw.shown(), "");
}

#[test]
fn payload_attribute_wins_over_rendered_text() {
    assert_eq!(
        resolve_source(Some("HELLO, COOPER"), "Hello"),
        "HELLO, COOPER"
    );
    assert_eq!(resolve_source(None, "Hello"), "Hello");
    assert_eq!(resolve_source(Some(""), "Hello"), "Hello");
}
