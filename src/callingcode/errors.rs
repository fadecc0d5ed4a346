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

use strum::EnumIter;
use thiserror::Error;

/// Soft rejection kinds produced by structural validation of field text.
///
/// These are rejected input, not exceptions: the processor hands the kind
/// back to its caller together with the corrected selection, and the
/// rejected text is never committed into the session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Error)]
pub enum InputErrorKind {
    /// A character other than a digit, `+`, space or hyphen.
    #[error("Only digits, spaces, hyphens and a leading plus sign are allowed")]
    ForbiddenCharacter,
    /// The first character is neither a digit nor `+`.
    #[error("A phone number must start with a digit or a plus sign")]
    MustStartWithDigitOrPlus,
    /// Two adjacent separator characters in any combination.
    #[error("Two separators in a row are not allowed")]
    DoubleSeparator,
    /// More than one `+` in the text.
    #[error("Only one plus sign is allowed")]
    MultiplePlus,
    /// A `+` somewhere other than the first position.
    #[error("A plus sign is only allowed at the very beginning")]
    PlusNotFirst,
    /// A leading `+` followed by something that is not a digit.
    #[error("A plus sign must be followed by a digit")]
    PlusNotFollowedByDigit,
}

/// Construction-time failures of the calling-code table. The one fatal
/// condition of the engine: malformed registry data aborts startup.
#[derive(Debug, PartialEq, Error)]
pub enum TableError {
    #[error("Territory registry contains no rows")]
    Empty,
    #[error("Malformed territory row at line {line}: {row:?}")]
    MalformedRow { line: usize, row: String },
    #[error("Calling code of territory {iso} at line {line} is not a digit string")]
    NonDigitCallingCode { line: usize, iso: String },
    #[error("Duplicate ISO code {iso} at line {line}")]
    DuplicateIso { line: usize, iso: String },
}
