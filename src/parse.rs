// viacaa – validation of DNS CAA property tags and values
// Copyright © 2022–2023 David Bürgin <dbuergin@gluet.ch>
//
// This program is free software: you can redistribute it and/or modify it under
// the terms of the GNU General Public License as published by the Free Software
// Foundation, either version 3 of the License, or (at your option) any later
// version.
//
// This program is distributed in the hope that it will be useful, but WITHOUT
// ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS
// FOR A PARTICULAR PURPOSE. See the GNU General Public License for more
// details.
//
// You should have received a copy of the GNU General Public License along with
// this program. If not, see <https://www.gnu.org/licenses/>.

//! Common parsing utilities.

pub fn strip_suffix<'a>(s: &'a str, suffix: &str) -> &'a str {
    debug_assert!(s.ends_with(suffix));
    &s[..(s.len() - suffix.len())]
}

// RFC 5234, appendix B.1

/// Strips a run of at least one whitespace character.
pub fn strip_wsp(input: &str) -> Option<&str> {
    input
        .strip_prefix(is_wsp)
        .map(|s| s.trim_start_matches(is_wsp))
}

/// Strips any amount of whitespace, including none.
pub fn skip_wsp(input: &str) -> &str {
    strip_wsp(input).unwrap_or(input)
}

pub fn is_wsp(c: char) -> bool {
    matches!(c, ' ' | '\t')
}

// label = (ALPHA / DIGIT) *( *("-") (ALPHA / DIGIT))

/// Strips one LDH label: alphanumerics with internal runs of hyphens.
pub fn strip_label(input: &str) -> Option<&str> {
    let mut s = input.strip_prefix(is_let_dig)?.trim_start_matches(is_let_dig);

    while let Some(snext) = s
        .strip_prefix('-')
        .map(|s| s.trim_start_matches('-'))
        .and_then(|s| s.strip_prefix(is_let_dig))
    {
        s = snext.trim_start_matches(is_let_dig);
    }

    Some(s)
}

/// Strips a dot-separated sequence of labels.
pub fn strip_domain(input: &str) -> Option<&str> {
    let mut s = strip_label(input)?;

    while let Some(snext) = s.strip_prefix('.').and_then(strip_label) {
        s = snext;
    }

    Some(s)
}

pub fn is_let_dig(c: char) -> bool {
    c.is_ascii_alphanumeric()
}
