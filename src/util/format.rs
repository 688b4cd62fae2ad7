// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Inline style value formatting and text layout helpers.
//!
//! The slider communicates visual state through style properties written on
//! page elements. These helpers produce those values and read them back.

use std::time::Duration;

/// Formats a percentage, e.g. `500%` or `33.333333333333336%`.
pub(crate) fn format_percent(value: f64) -> String {
    format!("{}%", value)
}

/// Reads back a value written by [`format_percent`].
pub(crate) fn parse_percent(value: &str) -> Option<f64> {
    value.trim().strip_suffix('%')?.trim().parse().ok()
}

/// Formats a horizontal translation in pixels, e.g. `translateX(-2000px)`.
pub(crate) fn format_translate_x(px: f64) -> String {
    // Avoid printing "-0px" for the origin.
    let px = if px == 0.0 { 0.0 } else { px };
    format!("translateX({}px)", px)
}

/// Extracts the pixel offset from a `translateX(...)` transform.
///
/// Like the browser's `parseFloat`, only the leading numeric part after the
/// opening parenthesis is considered, so a missing unit is accepted.
pub(crate) fn parse_translate_x(transform: &str) -> Option<f64> {
    let start = transform.find("translateX(")? + "translateX(".len();
    let rest = &transform[start..];
    let end = rest
        .find(|c: char| !(c.is_ascii_digit() || c == '-' || c == '+' || c == '.' || c == 'e'))
        .unwrap_or(rest.len());
    rest[..end].parse().ok()
}

/// Formats a transition declaration, `none` when the change is immediate.
pub(crate) fn format_transition(duration: Option<Duration>) -> String {
    match duration {
        Some(d) => format!("all {}s", d.as_secs_f64()),
        None => "none".to_string(),
    }
}

/// Reads back a value written by [`format_transition`].
pub(crate) fn parse_transition(value: &str) -> Option<Duration> {
    let secs: f64 = value
        .split_whitespace()
        .find_map(|part| part.strip_suffix('s'))?
        .parse()
        .ok()?;
    (secs > 0.0).then(|| Duration::from_secs_f64(secs))
}

/// Greedy word wrap to lines of at most `width` characters. Words longer
/// than a line are split.
pub(crate) fn wrap_words(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut line = String::new();

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();
        while word.len() > width {
            if !line.is_empty() {
                lines.push(std::mem::take(&mut line));
            }
            lines.push(word.drain(..width).collect());
        }
        let word: String = word.into_iter().collect();

        let needed = line.chars().count() + usize::from(!line.is_empty()) + word.chars().count();
        if needed > width && !line.is_empty() {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(&word);
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

/// Pads `text` on the left so it sits in the middle of `width` columns.
pub(crate) fn center(text: &str, width: usize) -> String {
    let pad = width.saturating_sub(text.chars().count()) / 2;
    format!("{}{}", " ".repeat(pad), text)
}
