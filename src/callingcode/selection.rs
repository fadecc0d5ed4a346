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

use crate::interfaces::CursorHost;

/// A text-cursor range, in characters. `start == end` is a plain caret.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection {
    pub start: usize,
    pub end: usize,
}

impl Selection {
    pub fn caret(position: usize) -> Self {
        Self {
            start: position,
            end: position,
        }
    }

    /// The host reports the post-insertion caret; the stored selection is
    /// one position to the left of it, clamped to the field start,
    /// compensating for the leading character the host's validation
    /// bookkeeping has already consumed. Applied on accept and reject
    /// alike.
    pub fn corrected_from_raw(raw: Selection) -> Self {
        Self {
            start: raw.start.saturating_sub(1),
            end: raw.end.saturating_sub(1),
        }
    }
}

/// Re-applies the stored cursor range to the live widget. Host UI layers
/// move the caret to end-of-text whenever a controlled value is replaced
/// programmatically, and several state patches may land between re-renders,
/// so the restore has to run on every render while the field is focused.
/// Repeated restores are intentional, never deduplicated.
pub struct SelectionTracker {}

impl SelectionTracker {
    pub fn restore(selection: Selection, is_focused: bool, host: &mut dyn CursorHost) {
        if !is_focused {
            return;
        }
        host.set_cursor_range(selection);
    }
}
