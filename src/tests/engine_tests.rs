use strum::IntoEnumIterator;

use crate::callingcode::{
    Field, InputErrorKind, PhoneInputEngine, Selection, SessionState, ValidationOutcome,
    PHONE_INPUT_ENGINE,
};
use crate::i18n::RegionCode;
use crate::interfaces::FocusRequester;

static ONCE: std::sync::Once = std::sync::Once::new();

fn get_engine() -> &'static PhoneInputEngine {
    ONCE.call_once(|| {
        let _ = colog::default_builder()
            .filter_level(log::LevelFilter::Trace)
            .try_init();
    });
    &PHONE_INPUT_ENGINE
}

struct CountingFocus {
    requests: usize,
}

impl FocusRequester for CountingFocus {
    fn request_number_field_focus(&mut self) {
        self.requests += 1;
    }
}

/// Runs a text change that is expected to be accepted and applies it.
fn commit(engine: &PhoneInputEngine, state: &mut SessionState, raw_text: &str) {
    let raw_selection = Selection::caret(raw_text.chars().count() + 1);
    match engine.apply_text_change(raw_text, state, raw_selection) {
        ValidationOutcome::Accepted { patch } => state.apply(patch),
        ValidationOutcome::Rejected { kind, .. } => {
            panic!("expected {:?} to be accepted, got {}", raw_text, kind)
        }
    }
}

fn expect_rejection(
    engine: &PhoneInputEngine,
    state: &SessionState,
    raw_text: &str,
) -> InputErrorKind {
    match engine.apply_text_change(raw_text, state, Selection::caret(1)) {
        ValidationOutcome::Rejected { kind, .. } => kind,
        ValidationOutcome::Accepted { .. } => {
            panic!("expected {:?} to be rejected", raw_text)
        }
    }
}

#[test]
fn rejects_forbidden_character() {
    let engine = get_engine();
    let state = SessionState::new();
    assert_eq!(
        expect_rejection(engine, &state, "h"),
        InputErrorKind::ForbiddenCharacter
    );
    // Rule order: a forbidden character wins over the bad first position.
    assert_eq!(
        expect_rejection(engine, &state, "(358"),
        InputErrorKind::ForbiddenCharacter
    );
}

#[test]
fn rejects_bad_first_character() {
    let engine = get_engine();
    let state = SessionState::new();
    assert_eq!(
        expect_rejection(engine, &state, " 123"),
        InputErrorKind::MustStartWithDigitOrPlus
    );
    assert_eq!(
        expect_rejection(engine, &state, "-123"),
        InputErrorKind::MustStartWithDigitOrPlus
    );
}

#[test]
fn rejects_double_separators() {
    let engine = get_engine();
    let state = SessionState::new();
    assert_eq!(
        expect_rejection(engine, &state, "1  2"),
        InputErrorKind::DoubleSeparator
    );
    assert_eq!(
        expect_rejection(engine, &state, "1- 2"),
        InputErrorKind::DoubleSeparator
    );
}

#[test]
fn rejects_misplaced_plus_signs() {
    let engine = get_engine();
    let state = SessionState::new();
    assert_eq!(
        expect_rejection(engine, &state, "1+"),
        InputErrorKind::PlusNotFirst
    );
    assert_eq!(
        expect_rejection(engine, &state, "+1+2"),
        InputErrorKind::MultiplePlus
    );
    assert_eq!(
        expect_rejection(engine, &state, "++1"),
        InputErrorKind::MultiplePlus
    );
    assert_eq!(
        expect_rejection(engine, &state, "+a"),
        InputErrorKind::PlusNotFollowedByDigit
    );
    assert_eq!(
        expect_rejection(engine, &state, "+ 358"),
        InputErrorKind::PlusNotFollowedByDigit
    );
}

#[test]
fn lone_plus_is_accepted_with_full_candidate_pool() {
    let engine = get_engine();
    let mut state = SessionState::new();
    commit(engine, &mut state, "+");

    assert_eq!(state.text, "+");
    assert_eq!(state.significant_digits, "");
    assert_eq!(state.detected_country, None);
    let set = state.candidate_set.as_ref().unwrap();
    assert_eq!(set.candidates.len(), engine.table().len());
}

#[test]
fn detects_finland_from_pasted_number() {
    let engine = get_engine();
    let mut state = SessionState::new();
    commit(engine, &mut state, "+358 451234567");

    assert_eq!(state.text, "+358 451234567");
    assert_eq!(state.significant_digits, "358");
    assert_eq!(state.detected_code_digits, "358");
    assert_eq!(
        state.detected_country.as_ref().unwrap().iso_code,
        RegionCode::fi()
    );
    let set = state.candidate_set.as_ref().unwrap();
    assert_eq!(set.digits_considered, "358");
    // Finland and the Åland Islands both survive the narrowing.
    assert_eq!(set.candidates.len(), 2);
}

#[test]
fn accepted_changes_are_idempotent() {
    let engine = get_engine();
    let mut state = SessionState::new();
    commit(engine, &mut state, "+358 45");

    let raw_selection = Selection::caret(8);
    let first = engine.apply_text_change("+358 45", &state, raw_selection);
    let second = engine.apply_text_change("+358 45", &state, raw_selection);
    assert_eq!(first, second);
}

#[test]
fn detection_sticks_while_a_longer_code_narrows() {
    let engine = get_engine();
    let mut state = SessionState::new();
    commit(engine, &mut state, "+358");
    assert_eq!(
        state.detected_country.as_ref().unwrap().iso_code,
        RegionCode::fi()
    );

    // No code equals 3581, but 35818 (Åland Islands) is still reachable:
    // the candidate set narrows while the detection stays put.
    commit(engine, &mut state, "+3581");
    assert_eq!(state.detected_code_digits, "358");
    assert_eq!(
        state.detected_country.as_ref().unwrap().iso_code,
        RegionCode::fi()
    );
    let set = state.candidate_set.as_ref().unwrap();
    assert_eq!(set.digits_considered, "3581");
    assert_eq!(set.candidates.len(), 1);
    assert_eq!(state.significant_digits, "3581");

    commit(engine, &mut state, "+35818");
    assert_eq!(state.detected_code_digits, "35818");
    assert_eq!(
        state.detected_country.as_ref().unwrap().iso_code,
        RegionCode::ax()
    );
}

#[test]
fn backspacing_below_the_narrowed_minimum_redetects_a_short_code() {
    let engine = get_engine();
    let mut state = SessionState::new();
    commit(engine, &mut state, "+1242");
    assert_eq!(
        state.detected_country.as_ref().unwrap().iso_code,
        RegionCode::bs()
    );

    commit(engine, &mut state, "+124");
    assert_eq!(state.detected_code_digits, "1");
    assert_eq!(
        state.detected_country.as_ref().unwrap().iso_code,
        RegionCode::ca()
    );
}

#[test]
fn removing_the_plus_clears_detection() {
    let engine = get_engine();
    let mut state = SessionState::new();
    commit(engine, &mut state, "+358 451234567");
    assert!(state.detected_country.is_some());

    commit(engine, &mut state, "358 451234567");
    assert_eq!(state.text, "358 451234567");
    assert_eq!(state.significant_digits, "");
    assert_eq!(state.detected_code_digits, "");
    assert_eq!(state.detected_country, None);
    assert_eq!(state.candidate_set, None);
}

#[test]
fn unknown_prefix_clears_detection() {
    let engine = get_engine();
    let mut state = SessionState::new();
    commit(engine, &mut state, "+358");
    assert!(state.detected_country.is_some());

    // Editing the code span into something no calling code starts with.
    commit(engine, &mut state, "+058");
    assert_eq!(state.detected_country, None);
    assert_eq!(state.candidate_set, None);
    assert_eq!(state.significant_digits, "");
}

#[test]
fn selection_is_corrected_on_accept_and_reject() {
    let engine = get_engine();
    let state = SessionState::new();

    match engine.apply_text_change("h", &state, Selection { start: 1, end: 1 }) {
        ValidationOutcome::Rejected { selection, .. } => {
            assert_eq!(selection, Selection::caret(0));
        }
        outcome => panic!("unexpected outcome {:?}", outcome),
    }

    match engine.apply_text_change("12", &state, Selection { start: 3, end: 3 }) {
        ValidationOutcome::Accepted { patch } => {
            assert_eq!(patch.selection, Field::Set(Selection::caret(2)));
        }
        outcome => panic!("unexpected outcome {:?}", outcome),
    }

    // Clamped at the field start.
    match engine.apply_text_change("1", &state, Selection { start: 0, end: 0 }) {
        ValidationOutcome::Accepted { patch } => {
            assert_eq!(patch.selection, Field::Set(Selection::caret(0)));
        }
        outcome => panic!("unexpected outcome {:?}", outcome),
    }
}

#[test]
fn selecting_a_country_splices_its_code() {
    let engine = get_engine();
    let mut state = SessionState::new();
    commit(engine, &mut state, "123456");

    let fiji = engine.table().entry_for_iso(RegionCode::fj()).unwrap();
    let mut focus = CountingFocus { requests: 0 };
    let patch = engine.select_country(fiji, &state, &mut focus);
    state.apply(patch);

    assert_eq!(state.text, "+679 123456");
    assert_eq!(state.detected_code_digits, "679");
    assert_eq!(
        state.detected_country.as_ref().unwrap().iso_code,
        RegionCode::fj()
    );
    assert_eq!(state.selection, Selection::caret(11));
    assert_eq!(focus.requests, 1);
}

#[test]
fn selecting_strips_leading_zeros() {
    let engine = get_engine();
    let mut state = SessionState::new();
    commit(engine, &mut state, "0451234567");

    let finland = engine.table().entry_for_iso(RegionCode::fi()).unwrap();
    let mut focus = CountingFocus { requests: 0 };
    let patch = engine.select_country(finland, &state, &mut focus);
    state.apply(patch);

    assert_eq!(state.text, "+358 451234567");
}

#[test]
fn selecting_replaces_a_previously_detected_code() {
    let engine = get_engine();
    let mut state = SessionState::new();
    commit(engine, &mut state, "+358-45 1234567");

    let fiji = engine.table().entry_for_iso(RegionCode::fj()).unwrap();
    let mut focus = CountingFocus { requests: 0 };
    let patch = engine.select_country(fiji, &state, &mut focus);
    state.apply(patch);

    assert_eq!(state.text, "+679 45 1234567");
}

#[test]
fn select_then_clear_round_trips_the_remainder() {
    let engine = get_engine();
    let mut state = SessionState::new();
    commit(engine, &mut state, "451234567");

    let finland = engine.table().entry_for_iso(RegionCode::fi()).unwrap();
    let mut focus = CountingFocus { requests: 0 };
    let patch = engine.select_country(finland, &state, &mut focus);
    state.apply(patch);
    assert_eq!(state.text, "+358 451234567");

    let patch = engine.clear_country(&state);
    state.apply(patch);
    assert_eq!(state.text, "451234567");
    assert_eq!(state.significant_digits, "");
    assert_eq!(state.detected_code_digits, "");
    assert_eq!(state.detected_country, None);
    assert_eq!(state.candidate_set, None);
}

#[test]
fn clearing_without_detection_leaves_the_text_alone() {
    let engine = get_engine();
    let mut state = SessionState::new();
    commit(engine, &mut state, "123456");

    let patch = engine.clear_country(&state);
    state.apply(patch);
    assert_eq!(state.text, "123456");
    assert_eq!(state.detected_country, None);
}

#[test]
fn every_error_kind_has_a_message() {
    for kind in InputErrorKind::iter() {
        assert!(!kind.to_string().is_empty());
    }
}
