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

use std::borrow::Cow;

use crate::callingcode::helper_constants::{HYPHEN, PLUS_SIGN_CHAR, SPACE};

/// Strips the plus sign and the separator characters (space, hyphen) from
/// raw field text, leaving the digits significant for calling-code
/// detection. Assumes the text already passed structural validation; any
/// other character is kept as-is.
///
/// Returns a borrowed slice when nothing had to be removed.
pub fn significant_digits(text: &str) -> Cow<'_, str> {
    if !text
        .chars()
        .any(|c| c == PLUS_SIGN_CHAR || c == SPACE || c == HYPHEN)
    {
        return Cow::Borrowed(text);
    }
    Cow::Owned(
        text.chars()
            .filter(|&c| c != PLUS_SIGN_CHAR && c != SPACE && c != HYPHEN)
            .collect(),
    )
}
