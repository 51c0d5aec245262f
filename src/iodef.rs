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


//! The `iodef` property value.
//!
//! RFC 6844, §5.4: the value is a URL, and incident reports are submitted
//! either by web service (`http` or `https`) or by email (`mailto`).

use crate::{email, trusted::Trusted, uri};
use std::{
    error::Error,
    fmt::{self, Display, Formatter},
};
use tracing::trace;
use url::Url;

const MAILTO_SCHEME: &str = "mailto:";

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ParseIodefValueError {
    InvalidEmail,
    UnsupportedUri,
}

impl Display for ParseIodefValueError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEmail => write!(f, "invalid mailto email address"),
            Self::UnsupportedUri => write!(f, "neither web URI nor mailto URI"),
        }
    }
}

impl Error for ParseIodefValueError {}

/// A parsed `iodef` property value.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum IodefValue {
    /// An `http` or `https` URL to report to.
    Url(Url),
    /// An email address to report to, without the `mailto:` prefix.
    Mailto(Box<str>),
}

impl IodefValue {
    pub fn parse(value: &str) -> Result<Self, ParseIodefValueError> {
        if let Some(url) = uri::parse_web_uri(value) {
            trace!("iodef value is a web URI");
            return Ok(Self::Url(url));
        }

        if has_mailto_form(value) {
            // Only the lowercase spelling of the scheme is stripped; other
            // spellings leave the prefix in place and fail the address check.
            let address = value.strip_prefix(MAILTO_SCHEME).unwrap_or(value);

            return if email::is_email(address) {
                trace!("iodef value is a mailto URI");
                Ok(Self::Mailto(address.into()))
            } else {
                Err(ParseIodefValueError::InvalidEmail)
            };
        }

        Err(ParseIodefValueError::UnsupportedUri)
    }
}

// mailto:<non-whitespace>@<non-whitespace>, scheme case-insensitive
fn has_mailto_form(value: &str) -> bool {
    let rest = match value.get(..MAILTO_SCHEME.len()) {
        Some(scheme) if scheme.eq_ignore_ascii_case(MAILTO_SCHEME) => &value[MAILTO_SCHEME.len()..],
        _ => return false,
    };

    let word = rest.split(char::is_whitespace).next().unwrap_or_default();

    word.char_indices()
        .any(|(i, c)| c == '@' && i > 0 && i + 1 < word.len())
}

/// Validates an `iodef` property value.
///
/// A web URI is returned as given; for a `mailto` URI, the email address
/// without the scheme prefix is returned.
pub fn is_caa_iodef(value: &str) -> Option<Trusted> {
    match IodefValue::parse(value) {
        Ok(IodefValue::Url(_)) => Some(Trusted::new(value)),
        Ok(IodefValue::Mailto(address)) => Some(Trusted::new(&address)),
        Err(e) => {
            trace!("rejected iodef value {value:?}: {e}");
            None
        }
    }
}
