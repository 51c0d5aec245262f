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


//! Web URI validation.

use tracing::trace;
use url::Url;

/// Checks whether the given string is an absolute `http` or `https` URI.
pub fn is_web_uri(s: &str) -> bool {
    parse_web_uri(s).is_some()
}

/// Parses an absolute `http` or `https` URI.
///
/// Besides parsing with the `url` crate, which is lenient about a number of
/// deviations that browsers tolerate, the raw string must consist of
/// printable ASCII only, must spell out the `//` authority prefix, and must
/// not use backslashes in place of slashes.
pub fn parse_web_uri(s: &str) -> Option<Url> {
    if !s.chars().all(|c| c.is_ascii_graphic() && c != '\\') {
        return None;
    }

    let rest = match s.split_once(':') {
        Some((scheme, rest))
            if scheme.eq_ignore_ascii_case("http") || scheme.eq_ignore_ascii_case("https") =>
        {
            rest
        }
        _ => return None,
    };

    if !rest.starts_with("//") {
        return None;
    }

    match Url::parse(s) {
        Ok(url) if matches!(url.host_str(), Some(host) if !host.is_empty()) => Some(url),
        Ok(_) => None,
        Err(e) => {
            trace!("could not parse web URI {s:?}: {e}");
            None
        }
    }
}
