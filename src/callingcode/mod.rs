mod candidates;
mod engine;
pub mod errors;
mod input_regexps;
mod selection;
mod session;
mod table;
pub(crate) mod helper_constants;

use std::sync::LazyLock;

pub use candidates::{is_stale, resolve, CandidateSet, ResolveOutcome};
pub use engine::PhoneInputEngine;
pub use errors::{InputErrorKind, TableError};
pub use selection::{Selection, SelectionTracker};
pub use session::{
    Field, InputOptions, InputSession, PickerChangeReason, SessionState, StatePatch,
    ValidationOutcome,
};
pub use table::{CallingCodeTable, CountryEntry};

/// Process-wide engine over the compiled-in territory registry. Widget
/// hosts that don't inject their own table create sessions against this
/// one.
pub static PHONE_INPUT_ENGINE: LazyLock<PhoneInputEngine> =
    LazyLock::new(|| PhoneInputEngine::new());
