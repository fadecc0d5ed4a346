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

use std::sync::Arc;

use regex::Regex;

use crate::callingcode::helper_constants::{
    DOUBLE_SEPARATOR_PATTERN, FORBIDDEN_CHAR_PATTERN, PLUS_THEN_NON_DIGIT_PATTERN, SEPARATOR_CLASS,
};
use crate::regexp_cache::RegexCache;

/// Helper struct holding the compiled structural-validation patterns and the
/// cache of per-calling-code span patterns.
pub(super) struct InputRegExpsAndMappings {
    /// A leading `+` followed by a non-digit.
    pub plus_then_non_digit_pattern: Regex,
    /// Any character outside digits, `+`, space, hyphen.
    pub forbidden_char_pattern: Regex,
    /// Two adjacent separators in any combination.
    pub double_separator_pattern: Regex,

    pub regexp_cache: RegexCache,
}

impl InputRegExpsAndMappings {
    pub fn new() -> Self {
        Self {
            plus_then_non_digit_pattern: Regex::new(PLUS_THEN_NON_DIGIT_PATTERN)
                .expect("Invalid constant pattern!"),
            forbidden_char_pattern: Regex::new(FORBIDDEN_CHAR_PATTERN)
                .expect("Invalid constant pattern!"),
            double_separator_pattern: Regex::new(DOUBLE_SEPARATOR_PATTERN)
                .expect("Invalid constant pattern!"),
            regexp_cache: RegexCache::with_capacity(16),
        }
    }

    /// Compiled pattern matching the given calling code at the front of
    /// field text, tolerating an optional leading `+` and arbitrary
    /// interleaved separator characters within the span. An empty code
    /// yields a pattern that only swallows a stray `+` and leading
    /// separators, which makes span removal a graceful no-op.
    pub fn code_span_regex(&self, code_digits: &str) -> Arc<Regex> {
        let mut pattern =
            String::with_capacity(3 + (1 + SEPARATOR_CLASS.len() + 1) * (code_digits.len() + 1));
        pattern.push_str("\\+?");
        pattern.push_str(SEPARATOR_CLASS);
        pattern.push('*');
        for digit in code_digits.chars() {
            pattern.push(digit);
            pattern.push_str(SEPARATOR_CLASS);
            pattern.push('*');
        }
        // The pattern is assembled from a digit string, so it always
        // compiles.
        self.regexp_cache
            .get_regex(&pattern)
            .expect("Invalid constant pattern!")
    }
}
