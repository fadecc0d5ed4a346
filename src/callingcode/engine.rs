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

use log::trace;

use crate::callingcode::candidates::{is_stale, resolve, CandidateSet, ResolveOutcome};
use crate::callingcode::errors::InputErrorKind;
use crate::callingcode::helper_constants::{PLUS_SIGN, PLUS_SIGN_CHAR};
use crate::callingcode::input_regexps::InputRegExpsAndMappings;
use crate::callingcode::selection::Selection;
use crate::callingcode::session::{Field, SessionState, StatePatch, ValidationOutcome};
use crate::callingcode::table::{CallingCodeTable, CountryEntry};
use crate::digit_util::significant_digits;
use crate::interfaces::FocusRequester;
use crate::regex_util::RegexConsume;

/// The engine behind a phone-number input field: structural validation of
/// free-typed text, incremental calling-code detection and calling-code
/// splicing for explicit country selection. Owns the immutable table and
/// the compiled patterns; all per-widget state lives in `SessionState` and
/// is only ever changed through the patches these operations return.
pub struct PhoneInputEngine {
    table: CallingCodeTable,

    /// Helper struct holding useful regular expressions.
    reg_exps: InputRegExpsAndMappings,
}

impl PhoneInputEngine {
    /// Builds the engine over the compiled-in territory registry.
    pub fn new() -> Self {
        let table = match CallingCodeTable::from_embedded() {
            Err(err) => {
                let err_message =
                    format!("Could not parse compiled-in territory registry: {}", err);
                log::error!("{}", err_message);
                panic!("{}", err_message);
            }
            Ok(table) => table,
        };
        Self::with_table(table)
    }

    /// Builds the engine over an injected table (tests, custom registries).
    pub fn with_table(table: CallingCodeTable) -> Self {
        Self {
            table,
            reg_exps: InputRegExpsAndMappings::new(),
        }
    }

    pub fn table(&self) -> &CallingCodeTable {
        &self.table
    }

    /// Re-runs candidate narrowing for `digits` against a previous set.
    pub fn resolve(&self, digits: &str, previous: Option<&CandidateSet>) -> ResolveOutcome {
        resolve(&self.table, digits, previous)
    }

    /// Entry point for "the number field's text changed".
    ///
    /// Runs structural validation and, when the text is accepted, decides
    /// whether calling-code detection has to be re-run, producing either a
    /// soft error or a state patch. The corrected selection is part of the
    /// result either way.
    pub fn apply_text_change(
        &self,
        raw_text: &str,
        prior: &SessionState,
        raw_selection: Selection,
    ) -> ValidationOutcome {
        let selection = Selection::corrected_from_raw(raw_selection);
        if let Some(kind) = self.check_structure(raw_text) {
            trace!("rejected {:?}: {}", raw_text, kind);
            return ValidationOutcome::Rejected { kind, selection };
        }

        let mut patch = StatePatch {
            text: Field::Set(raw_text.to_owned()),
            selection: Field::Set(selection),
            ..StatePatch::default()
        };

        let digits = significant_digits(raw_text);
        if !prior.detected_code_digits.is_empty() && !raw_text.starts_with(PLUS_SIGN) {
            // The international prefix is gone, and with it the detection.
            patch.clear_code_fields();
        } else if raw_text.starts_with(PLUS_SIGN) && self.should_redetect(prior, &digits) {
            let outcome = self.resolve(&digits, prior.candidate_set.as_ref());
            if outcome.candidate_set.is_empty() {
                patch.clear_code_fields();
            } else {
                patch.significant_digits =
                    Field::Set(outcome.candidate_set.digits_considered.clone());
                if let Some(index) = outcome.exact_match {
                    let entry = self.table.entry(index);
                    // Detection only moves when the matched code actually
                    // changed; an equal code keeps whatever entry is
                    // already detected (several territories share codes).
                    if entry.calling_code != prior.detected_code_digits {
                        patch.detected_code_digits = Field::Set(entry.calling_code.clone());
                        patch.detected_country = Field::Set(Some(entry.clone()));
                    }
                }
                patch.candidate_set = Field::Set(Some(outcome.candidate_set));
            }
        }
        ValidationOutcome::Accepted { patch }
    }

    /// Entry point for "the user cleared the country picker". Removes the
    /// detected code's span from the front of the text and resets every
    /// country-code field. A no-op removal when nothing was detected.
    pub fn clear_country(&self, prior: &SessionState) -> StatePatch {
        let mut patch = StatePatch::default();
        if !prior.detected_code_digits.is_empty() {
            patch.text = Field::Set(self.strip_code_span(&prior.text, &prior.detected_code_digits));
        }
        patch.clear_code_fields();
        patch
    }

    /// Entry point for "the user picked a country from the list". Splices
    /// the entry's calling code onto the front of the preserved
    /// local-number remainder, moves the caret to the end and asks the
    /// host to focus the number field.
    pub fn select_country(
        &self,
        entry: &CountryEntry,
        prior: &SessionState,
        focus: &mut dyn FocusRequester,
    ) -> StatePatch {
        let remainder = if prior.text.starts_with('0') {
            prior.text.trim_start_matches('0').to_owned()
        } else {
            self.strip_code_span(&prior.text, &prior.detected_code_digits)
        };
        let text = fast_cat::concat_str!(PLUS_SIGN, &entry.calling_code, " ", &remainder);
        let caret = Selection::caret(text.chars().count());

        let patch = StatePatch {
            text: Field::Set(text),
            detected_code_digits: Field::Set(
                significant_digits(&entry.calling_code).into_owned(),
            ),
            detected_country: Field::Set(Some(entry.clone())),
            selection: Field::Set(caret),
            ..StatePatch::default()
        };
        focus.request_number_field_focus();
        patch
    }

    /// Structural validation, first matching rule wins. The order is part
    /// of the contract; the rules are mutually exclusive by construction.
    fn check_structure(&self, text: &str) -> Option<InputErrorKind> {
        if self.reg_exps.plus_then_non_digit_pattern.matches_start(text) {
            return Some(if text.starts_with("++") {
                InputErrorKind::MultiplePlus
            } else {
                InputErrorKind::PlusNotFollowedByDigit
            });
        }
        if self.reg_exps.forbidden_char_pattern.is_match(text) {
            return Some(InputErrorKind::ForbiddenCharacter);
        }
        if let Some(first) = text.chars().next() {
            if !first.is_ascii_digit() && first != PLUS_SIGN_CHAR {
                return Some(InputErrorKind::MustStartWithDigitOrPlus);
            }
        }
        if self.reg_exps.double_separator_pattern.is_match(text) {
            return Some(InputErrorKind::DoubleSeparator);
        }
        if text.matches(PLUS_SIGN_CHAR).count() > 1 {
            return Some(InputErrorKind::MultiplePlus);
        }
        if text
            .char_indices()
            .any(|(position, c)| c == PLUS_SIGN_CHAR && position > 0)
        {
            return Some(InputErrorKind::PlusNotFirst);
        }
        None
    }

    /// Whether a text change warrants re-running detection: nothing is
    /// detected yet, the digits under the detected code changed, or a
    /// strictly longer code is still reachable per the previous candidate
    /// set.
    fn should_redetect(&self, prior: &SessionState, digits: &str) -> bool {
        if prior.detected_code_digits.is_empty() {
            return true;
        }
        let code_len = prior.detected_code_digits.len();
        if digits.len() < code_len || digits[..code_len] != prior.detected_code_digits {
            return true;
        }
        is_stale(digits, prior.candidate_set.as_ref())
    }

    /// Removes the calling-code span from the front of `text`, tolerating
    /// interleaved separators, an optional leading `+` included. Text
    /// without the span at its front comes back unchanged.
    fn strip_code_span(&self, text: &str, code_digits: &str) -> String {
        let pattern = self.reg_exps.code_span_regex(code_digits);
        match pattern.find_start(text) {
            Some(matched) => text[matched.end()..].to_owned(),
            None => text.to_owned(),
        }
    }
}

impl Default for PhoneInputEngine {
    fn default() -> Self {
        Self::new()
    }
}
