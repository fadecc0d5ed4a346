pub mod callingcode;
pub mod i18n;
pub mod interfaces;
/// This module is regenerated from the upstream territory registry;
/// do not edit the data rows by hand.
mod generated;
mod regexp_cache;
pub(crate) mod digit_util;
pub(crate) mod regex_util;

#[cfg(test)]
mod tests;

pub use callingcode::{
    CallingCodeTable, CandidateSet, CountryEntry, Field, InputErrorKind, InputOptions,
    InputSession, PhoneInputEngine, PickerChangeReason, ResolveOutcome, Selection,
    SelectionTracker, SessionState, StatePatch, TableError, ValidationOutcome,
    PHONE_INPUT_ENGINE,
};
