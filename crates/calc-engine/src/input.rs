//! Digit-entry accumulation for the numeric display.
//!
//! The engine receives whole operands; assembling one keypress at a time is
//! the display's job. `DigitBuffer` is that state, kept here because it is
//! pure (no widget glue): the first keypress replaces the display, later
//! keypresses append only while the text still parses as a number.

use calc_format::general;

#[derive(Debug, Clone, PartialEq)]
pub struct DigitBuffer {
    text: String,
    typing: bool,
}

impl Default for DigitBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl DigitBuffer {
    pub fn new() -> Self {
        Self {
            text: "0".to_string(),
            typing: false,
        }
    }

    /// Handle a digit or decimal-point keypress. Anything else, or a press
    /// that would stop the text parsing as a number (such as a second
    /// decimal point), is ignored.
    pub fn push(&mut self, ch: char) {
        if !ch.is_ascii_digit() && ch != '.' {
            return;
        }
        if self.typing {
            let mut candidate = self.text.clone();
            candidate.push(ch);
            if candidate.parse::<f64>().is_ok() {
                self.text = candidate;
            }
        } else {
            self.text = if ch == '.' {
                "0.".to_string()
            } else {
                ch.to_string()
            };
            self.typing = true;
        }
    }

    /// Whether the user is mid-entry (the next keypress appends rather than
    /// replaces).
    pub fn is_typing(&self) -> bool {
        self.typing
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// The buffered operand. The buffer only ever holds parseable text.
    pub fn value(&self) -> f64 {
        self.text.parse().unwrap_or(0.0)
    }

    /// Show an evaluation result; the next keypress starts a new entry.
    pub fn reset(&mut self, value: f64) {
        self.text = general(value);
        self.typing = false;
    }

    /// End the current entry without changing the display, after the operand
    /// has been handed to the engine.
    pub fn end_typing(&mut self) {
        self.typing = false;
    }

    pub fn clear(&mut self) {
        *self = Self::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn first_keypress_replaces_the_display() {
        let mut buffer = DigitBuffer::new();
        buffer.push('7');
        assert_eq!(buffer.text(), "7");
        assert!(buffer.is_typing());
    }

    #[test]
    fn digits_accumulate_while_typing() {
        let mut buffer = DigitBuffer::new();
        for ch in "12.5".chars() {
            buffer.push(ch);
        }
        assert_eq!(buffer.text(), "12.5");
        assert_eq!(buffer.value(), 12.5);
    }

    #[test]
    fn leading_decimal_point_seeds_zero() {
        let mut buffer = DigitBuffer::new();
        buffer.push('.');
        assert_eq!(buffer.text(), "0.");
        buffer.push('5');
        assert_eq!(buffer.value(), 0.5);
    }

    #[test]
    fn second_decimal_point_is_rejected() {
        let mut buffer = DigitBuffer::new();
        for ch in "1.2.".chars() {
            buffer.push(ch);
        }
        assert_eq!(buffer.text(), "1.2");
    }

    #[test]
    fn non_numeric_keys_are_ignored() {
        let mut buffer = DigitBuffer::new();
        buffer.push('x');
        assert_eq!(buffer.text(), "0");
        assert!(!buffer.is_typing());
    }

    #[test]
    fn reset_shows_a_result_and_ends_the_entry() {
        let mut buffer = DigitBuffer::new();
        buffer.push('9');
        buffer.reset(14.0);
        assert_eq!(buffer.text(), "14");
        assert!(!buffer.is_typing());

        // The next keypress starts over rather than appending.
        buffer.push('2');
        assert_eq!(buffer.text(), "2");
    }
}
