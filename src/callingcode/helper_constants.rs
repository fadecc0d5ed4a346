pub const PLUS_SIGN: &'static str = "+";
pub const PLUS_SIGN_CHAR: char = '+';
pub const SPACE: char = ' ';
pub const HYPHEN: char = '-';

/// Character class of the separator characters tolerated inside a number,
/// as used inside the validation and splice patterns.
pub const SEPARATOR_CLASS: &'static str = "[ \\-]";

/// A `+` followed by something that is not a digit. Matched anchored at the
/// field start; a lone `+` is fine (the user is still typing).
pub const PLUS_THEN_NON_DIGIT_PATTERN: &'static str = "\\+[^0-9]";

/// Any character outside the accepted alphabet of digits, plus, space and
/// hyphen.
pub const FORBIDDEN_CHAR_PATTERN: &'static str = "[^0-9+ \\-]";

/// Two adjacent separator characters in any combination.
pub const DOUBLE_SEPARATOR_PATTERN: &'static str = "[ \\-]{2}";

/// The default display duration of a validation error message.
pub const DEFAULT_ERROR_DISPLAY_SECONDS: u64 = 3;
