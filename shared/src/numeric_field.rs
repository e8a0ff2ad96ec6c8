//! Core of the numeric text field: display formatting, input cleaning and the
//! two-state edit machine shared by every money/quantity input.
//!
//! Nothing in here can fail. Input that does not resolve to a finite number
//! falls back to the configured [`EmptyPolicy`] value.

use serde::{Deserialize, Serialize};

use crate::locale::NumberLocale;

/// What an empty or unparseable field reports to the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyPolicy {
    /// Report `Some(0.0)`.
    Zero,
    /// Report `None`, leaving the form field unset.
    #[default]
    Empty,
}

impl EmptyPolicy {
    pub fn fallback(self) -> Option<f64> {
        match self {
            EmptyPolicy::Zero => Some(0.0),
            EmptyPolicy::Empty => None,
        }
    }
}

/// Full configuration of a numeric field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NumberFormat {
    pub locale: NumberLocale,
    pub empty_policy: EmptyPolicy,
    /// Accept a leading `-` while typing.
    pub allow_negative: bool,
    /// `None` keeps every typed fraction digit; `Some(0)` makes the field integer-only.
    pub max_fraction_digits: Option<u8>,
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self {
            locale: NumberLocale::default(),
            empty_policy: EmptyPolicy::default(),
            allow_negative: false,
            max_fraction_digits: None,
        }
    }
}

/// Integer digits a field accepts. Up to 10^15 every integer is exact in `f64`.
pub const MAX_INTEGER_DIGITS: usize = 15;

/// Inserts `separator` every three digits counting from the right.
pub fn group_digits(digits: &str, separator: char) -> String {
    let len = digits.chars().count();
    let mut out = String::with_capacity(digits.len() + (len / 3) * separator.len_utf8());
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (len - idx) % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }
    out
}

impl NumberFormat {
    pub fn with_locale(mut self, locale: NumberLocale) -> Self {
        self.locale = locale;
        self
    }

    pub fn with_empty_policy(mut self, empty_policy: EmptyPolicy) -> Self {
        self.empty_policy = empty_policy;
        self
    }

    pub fn with_negative(mut self, allow_negative: bool) -> Self {
        self.allow_negative = allow_negative;
        self
    }

    pub fn with_max_fraction_digits(mut self, digits: Option<u8>) -> Self {
        self.max_fraction_digits = digits;
        self
    }

    fn fraction_allowed(&self) -> bool {
        self.max_fraction_digits != Some(0)
    }

    /// Display text for an external value. Absent or non-finite values render empty.
    pub fn format_value(&self, value: Option<f64>) -> String {
        let Some(value) = value.filter(|v| v.is_finite()) else {
            return String::new();
        };
        // Collapse -0.0 so it never renders as "-0".
        let value = if value == 0.0 { 0.0 } else { value };

        let text = match self.max_fraction_digits {
            Some(digits) => format!("{:.*}", usize::from(digits), value),
            None => value.to_string(),
        };
        let (sign, unsigned) = match text.strip_prefix('-') {
            Some(rest) => ("-", rest),
            None => ("", text.as_str()),
        };

        let mut out = String::from(sign);
        match unsigned.split_once('.') {
            Some((integer, fraction)) => {
                out.push_str(&group_digits(integer, self.locale.grouping()));
                out.push(self.locale.decimal());
                out.push_str(fraction);
            }
            None => out.push_str(&group_digits(unsigned, self.locale.grouping())),
        }
        out
    }

    /// Reduces raw typed text to digits, at most one decimal separator and,
    /// when negatives are allowed, one leading `-`. Grouping separators and any
    /// other character are dropped; leading integer zeros collapse. Integer
    /// digits past [`MAX_INTEGER_DIGITS`] are dropped.
    pub fn clean(&self, raw: &str) -> String {
        let decimal = self.locale.decimal();
        let mut negative = false;
        let mut leading_zero = false;
        let mut integer = String::new();
        let mut fraction: Option<String> = None;

        for ch in raw.chars() {
            if ch.is_ascii_digit() {
                match fraction.as_mut() {
                    Some(frac) => {
                        let room = self
                            .max_fraction_digits
                            .map_or(true, |max| frac.len() < usize::from(max));
                        if room {
                            frac.push(ch);
                        }
                    }
                    None if integer.is_empty() && ch == '0' => leading_zero = true,
                    None if integer.len() < MAX_INTEGER_DIGITS => integer.push(ch),
                    None => {}
                }
            } else if ch == decimal && fraction.is_none() && self.fraction_allowed() {
                fraction = Some(String::new());
            } else if (ch == '-' || ch == '\u{2212}')
                && self.allow_negative
                && !negative
                && !leading_zero
                && integer.is_empty()
                && fraction.is_none()
            {
                negative = true;
            }
        }

        let mut out = String::new();
        if negative {
            out.push('-');
        }
        if !integer.is_empty() {
            out.push_str(&integer);
        } else if leading_zero || fraction.is_some() {
            out.push('0');
        }
        if let Some(frac) = fraction {
            out.push(decimal);
            out.push_str(&frac);
        }
        out
    }

    /// Parses text produced by [`NumberFormat::clean`]. `None` when empty or unparseable.
    pub fn parse_clean(&self, clean: &str) -> Option<f64> {
        let decimal = self.locale.decimal();
        let normalized: String = clean
            .chars()
            .map(|ch| if ch == decimal { '.' } else { ch })
            .collect();
        normalized
            .trim_end_matches('.')
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
    }

    /// Applies the empty policy to a parse result.
    pub fn resolve(&self, parsed: Option<f64>) -> Option<f64> {
        parsed
            .map(|v| if v == 0.0 { 0.0 } else { v })
            .or_else(|| self.empty_policy.fallback())
    }

    /// Groups clean text as typed, keeping a trailing separator or trailing
    /// fraction zeros that reformatting the parsed number would lose.
    pub fn format_clean(&self, clean: &str) -> String {
        let (sign, unsigned) = match clean.strip_prefix('-') {
            Some(rest) => ("-", rest),
            None => ("", clean),
        };
        let mut out = String::from(sign);
        match unsigned.split_once(self.locale.decimal()) {
            Some((integer, fraction)) => {
                out.push_str(&group_digits(integer, self.locale.grouping()));
                out.push(self.locale.decimal());
                out.push_str(fraction);
            }
            None => out.push_str(&group_digits(unsigned, self.locale.grouping())),
        }
        out
    }

    /// Reads a value back from display or raw text.
    pub fn parse_display(&self, text: &str) -> Option<f64> {
        self.resolve(self.parse_clean(&self.clean(text)))
    }
}

/// Observable state of a [`NumericField`] for a given external value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldState {
    Idle,
    Editing,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FieldMode {
    Idle,
    /// `text` is the grouped draft; `reported` is what the last edit sent to the form.
    Editing {
        text: String,
        reported: Option<f64>,
    },
}

/// Transient display state of one mounted field. The form owns the value.
#[derive(Debug, Clone, PartialEq)]
pub struct NumericField {
    format: NumberFormat,
    mode: FieldMode,
}

impl NumericField {
    pub fn new(format: NumberFormat) -> Self {
        Self {
            format,
            mode: FieldMode::Idle,
        }
    }

    pub fn format(&self) -> &NumberFormat {
        &self.format
    }

    /// Swapping the configuration drops any draft.
    pub fn set_format(&mut self, format: NumberFormat) {
        if self.format != format {
            self.format = format;
            self.mode = FieldMode::Idle;
        }
    }

    pub fn mode(&self) -> &FieldMode {
        &self.mode
    }

    pub fn state(&self, external: Option<f64>) -> FieldState {
        match &self.mode {
            FieldMode::Editing { reported, .. } if *reported == external => FieldState::Editing,
            _ => FieldState::Idle,
        }
    }

    /// Text to show for the current external value.
    pub fn display(&self, external: Option<f64>) -> String {
        match &self.mode {
            FieldMode::Editing { text, reported } if *reported == external => text.clone(),
            _ => self.format.format_value(external),
        }
    }

    /// Handles one edit event and returns the value to report to the form.
    pub fn edit(&mut self, raw: &str) -> Option<f64> {
        let clean = self.format.clean(raw);
        let parsed = self.format.parse_clean(&clean);
        let value = self.format.resolve(parsed);
        // Digits that did not parse must not stay on screen next to the fallback value.
        let text = if parsed.is_none() && clean.chars().any(|c| c.is_ascii_digit()) {
            self.format.format_value(value)
        } else {
            self.format.format_clean(&clean)
        };
        tracing::trace!(raw, clean = %clean, display = %text, ?value, "numeric field edited");

        self.mode = FieldMode::Editing {
            text,
            reported: value,
        };
        value
    }

    /// Drops the draft once the form holds a value this field did not report.
    pub fn sync(&mut self, external: Option<f64>) {
        if let FieldMode::Editing { reported, .. } = &self.mode {
            if *reported != external {
                tracing::trace!(?external, reported = ?reported, "numeric field updated externally");
                self.mode = FieldMode::Idle;
            }
        }
    }

    pub fn reset(&mut self) {
        self.mode = FieldMode::Idle;
    }
}
