// Copyright (C) 2025 The rphonefield Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::time::{Duration, Instant};

use log::warn;

use crate::callingcode::candidates::CandidateSet;
use crate::callingcode::engine::PhoneInputEngine;
use crate::callingcode::errors::InputErrorKind;
use crate::callingcode::helper_constants::DEFAULT_ERROR_DISPLAY_SECONDS;
use crate::callingcode::selection::{Selection, SelectionTracker};
use crate::callingcode::table::CountryEntry;
use crate::interfaces::{CursorHost, FocusRequester};

/// One field of a state patch: either left untouched or replaced.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Field<T> {
    #[default]
    Keep,
    Set(T),
}

impl<T> Field<T> {
    fn apply_to(self, slot: &mut T) {
        if let Field::Set(value) = self {
            *slot = value;
        }
    }
}

/// The complete editing state of one phone-field widget instance. Created
/// on mount, destroyed on unmount, owned exclusively by that instance and
/// mutated only through patches.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SessionState {
    /// The committed field text. Rejected input never lands here.
    pub text: String,
    /// The digit prefix the resolver has considered for detection
    /// (`CandidateSet::digits_considered`), not the full typed digits.
    pub significant_digits: String,
    /// Digit string of the currently detected calling code, empty while
    /// nothing is detected.
    pub detected_code_digits: String,
    pub detected_country: Option<CountryEntry>,
    pub candidate_set: Option<CandidateSet>,
    pub selection: Selection,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, patch: StatePatch) {
        patch.text.apply_to(&mut self.text);
        patch.significant_digits.apply_to(&mut self.significant_digits);
        patch
            .detected_code_digits
            .apply_to(&mut self.detected_code_digits);
        patch.detected_country.apply_to(&mut self.detected_country);
        patch.candidate_set.apply_to(&mut self.candidate_set);
        patch.selection.apply_to(&mut self.selection);
    }
}

/// Partial update of a `SessionState`, produced by the processors and
/// applied by the host. Defaults to keeping every field.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StatePatch {
    pub text: Field<String>,
    pub significant_digits: Field<String>,
    pub detected_code_digits: Field<String>,
    pub detected_country: Field<Option<CountryEntry>>,
    pub candidate_set: Field<Option<CandidateSet>>,
    pub selection: Field<Selection>,
}

impl StatePatch {
    /// Resets every country-code related field to its empty state.
    pub(super) fn clear_code_fields(&mut self) {
        self.significant_digits = Field::Set(String::new());
        self.detected_code_digits = Field::Set(String::new());
        self.detected_country = Field::Set(None);
        self.candidate_set = Field::Set(None);
    }
}

/// Outcome of a text-change event: either a soft rejection (text not
/// committed, selection corrected) or a patch to merge into the state.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationOutcome {
    Rejected {
        kind: InputErrorKind,
        selection: Selection,
    },
    Accepted {
        patch: StatePatch,
    },
}

/// Why the country picker reported a change. Hosts are not guaranteed to
/// report a null entry for a clear action, which is why `Clear` never
/// inspects the entry value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerChangeReason {
    Select,
    Clear,
    Other,
}

/// Recognized configuration of an input session.
pub struct InputOptions {
    /// How long a validation error message stays up.
    pub error_display_duration: Duration,
    /// Initial field value for uncontrolled usage.
    pub default_value: Option<String>,
    /// External callback fired on every rejected text change.
    pub on_error: Option<Box<dyn FnMut(InputErrorKind)>>,
    /// External callback fired with the committed text on every accepted
    /// change.
    pub on_change: Option<Box<dyn FnMut(&str)>>,
}

impl Default for InputOptions {
    fn default() -> Self {
        Self {
            error_display_duration: Duration::from_secs(DEFAULT_ERROR_DISPLAY_SECONDS),
            default_value: None,
            on_error: None,
            on_change: None,
        }
    }
}

struct PendingError {
    kind: InputErrorKind,
    expires_at: Instant,
}

/// Host-side wiring of one widget instance: owns the `SessionState`,
/// applies patches, runs the callbacks and keeps the error-message
/// deadline. At most one error deadline is outstanding at any time; a new
/// error replaces the previous one, it is never queued behind it.
pub struct InputSession<'a> {
    engine: &'a PhoneInputEngine,
    state: SessionState,
    options: InputOptions,
    pending_error: Option<PendingError>,
}

impl<'a> InputSession<'a> {
    pub fn new(engine: &'a PhoneInputEngine) -> Self {
        Self::with_options(engine, InputOptions::default())
    }

    pub fn with_options(engine: &'a PhoneInputEngine, options: InputOptions) -> Self {
        let mut session = Self {
            engine,
            state: SessionState::new(),
            options,
            pending_error: None,
        };
        if let Some(value) = session.options.default_value.clone() {
            // Seeding runs through the regular processor so detection state
            // is consistent with the text; the caret lands at the end.
            let raw_selection = Selection::caret(value.chars().count() + 1);
            match session.engine.apply_text_change(&value, &session.state, raw_selection) {
                ValidationOutcome::Accepted { patch } => session.state.apply(patch),
                ValidationOutcome::Rejected { kind, .. } => {
                    warn!("Discarding invalid default value {:?}: {}", value, kind);
                }
            }
        }
        session
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Text-change entry point. On rejection the text is not committed;
    /// the corrected selection is stored either way.
    pub fn handle_text_change(
        &mut self,
        raw_text: &str,
        raw_selection: Selection,
        now: Instant,
    ) -> Result<(), InputErrorKind> {
        match self
            .engine
            .apply_text_change(raw_text, &self.state, raw_selection)
        {
            ValidationOutcome::Accepted { patch } => {
                self.state.apply(patch);
                if let Some(on_change) = self.options.on_change.as_mut() {
                    on_change(&self.state.text);
                }
                Ok(())
            }
            ValidationOutcome::Rejected { kind, selection } => {
                self.state.selection = selection;
                self.pending_error = Some(PendingError {
                    kind,
                    expires_at: now + self.options.error_display_duration,
                });
                if let Some(on_error) = self.options.on_error.as_mut() {
                    on_error(kind);
                }
                Err(kind)
            }
        }
    }

    /// Picker-change entry point. A clear is a clear no matter what entry
    /// value the host reported alongside it; a missing entry likewise
    /// clears.
    pub fn handle_picker_change(
        &mut self,
        entry: Option<&CountryEntry>,
        reason: PickerChangeReason,
        focus: &mut dyn FocusRequester,
    ) {
        let patch = match (reason, entry) {
            (PickerChangeReason::Clear, _) | (_, None) => self.engine.clear_country(&self.state),
            (_, Some(entry)) => self.engine.select_country(entry, &self.state, focus),
        };
        self.state.apply(patch);
        if let Some(on_change) = self.options.on_change.as_mut() {
            on_change(&self.state.text);
        }
    }

    pub fn has_pending_error(&self, now: Instant) -> bool {
        self.pending_error(now).is_some()
    }

    pub fn pending_error(&self, now: Instant) -> Option<InputErrorKind> {
        self.pending_error
            .as_ref()
            .filter(|pending| now < pending.expires_at)
            .map(|pending| pending.kind)
    }

    /// Explicitly takes the error message down, canceling its deadline.
    pub fn clear_error_message(&mut self) {
        self.pending_error = None;
    }

    /// To be called by the host on every render of the number field.
    pub fn restore_selection(&self, is_focused: bool, host: &mut dyn CursorHost) {
        SelectionTracker::restore(self.state.selection, is_focused, host);
    }
}
