#![forbid(unsafe_code)]

//! "General"-style number rendering for calculator displays.
//!
//! Integral values render without a fractional part (`3`, not `3.0`);
//! everything else uses the default decimal form with the locale's decimal
//! separator substituted. Kept separate from the engine so UI hosts can
//! format display values without pulling in the evaluation machinery.

/// A locale definition used for formatting separators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Locale {
    /// Decimal separator (e.g. `.` in `en-US`, `,` in many EU locales).
    pub decimal_sep: char,
}

impl Locale {
    pub const fn en_us() -> Self {
        Self { decimal_sep: '.' }
    }

    pub const fn de_de() -> Self {
        Self { decimal_sep: ',' }
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::en_us()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormatOptions {
    pub locale: Locale,
}

/// Format a number the way a calculator display expects.
///
/// Non-finite values fall back to [`f64`]'s `Display` (`inf`, `NaN`);
/// integral values drop the fractional part entirely.
pub fn format_number(value: f64, options: &FormatOptions) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    if value == value.trunc() {
        return format!("{value:.0}");
    }
    let mut s = value.to_string();
    if options.locale.decimal_sep != '.' {
        s = s.replace('.', &options.locale.decimal_sep.to_string());
    }
    s
}

/// en-US shorthand used for operand labels in formula logs.
pub fn general(value: f64) -> String {
    format_number(value, &FormatOptions::default())
}
