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


//! CAA property tags.

use crate::{trusted::Trusted, util::CanonicalStr};
use std::{
    error::Error,
    fmt::{self, Display, Formatter},
    str::FromStr,
};
use tracing::trace;

/// A CAA property tag supported by this crate.
///
/// RFC 6844 registers a few more tags, but only these three have value
/// syntax that can be validated here. Matching of tags is case-insensitive.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Property {
    /// Authorises an issuer to issue certificates for the domain.
    Issue,
    /// Authorises an issuer to issue wildcard certificates for the domain.
    IssueWild,
    /// Names a URL or email address to which issuers may report violations.
    Iodef,
}

impl Property {
    pub fn as_str(self) -> &'static str {
        self.canonical_str()
    }

    /// Whether values of this property follow the `issue` value syntax.
    pub fn is_issue_kind(self) -> bool {
        matches!(self, Self::Issue | Self::IssueWild)
    }
}

impl CanonicalStr for Property {
    fn canonical_str(&self) -> &'static str {
        match self {
            Self::Issue => "issue",
            Self::IssueWild => "issuewild",
            Self::Iodef => "iodef",
        }
    }
}

impl Display for Property {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.canonical_str())
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ParsePropertyErrorKind {
    Syntax,
    Unsupported,
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct ParsePropertyError {
    pub kind: ParsePropertyErrorKind,
}

impl Display for ParsePropertyError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.kind {
            ParsePropertyErrorKind::Syntax => write!(f, "ill-formed property tag"),
            ParsePropertyErrorKind::Unsupported => write!(f, "unsupported property tag"),
        }
    }
}

impl Error for ParsePropertyError {}

impl FromStr for Property {
    type Err = ParsePropertyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("issue") {
            Ok(Self::Issue)
        } else if s.eq_ignore_ascii_case("issuewild") {
            Ok(Self::IssueWild)
        } else if s.eq_ignore_ascii_case("iodef") {
            Ok(Self::Iodef)
        } else {
            let kind = if is_tag_syntax(s) {
                ParsePropertyErrorKind::Unsupported
            } else {
                ParsePropertyErrorKind::Syntax
            };
            Err(ParsePropertyError { kind })
        }
    }
}

/// Options for tag validation.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TagOptions {
    /// Accept only the tags this crate can validate values for (`issue`,
    /// `issuewild`, and `iodef`). When unset, any syntactically well-formed
    /// tag is accepted, without consulting a registry.
    pub strict: bool,
}

impl Default for TagOptions {
    fn default() -> Self {
        Self { strict: true }
    }
}

/// Validates a CAA property tag in strict mode.
pub fn is_caa_tag(value: &str) -> Option<Trusted> {
    is_caa_tag_with(value, &TagOptions::default())
}

/// Validates a CAA property tag.
///
/// On success the tag is returned as given, not case-normalised.
pub fn is_caa_tag_with(value: &str, opts: &TagOptions) -> Option<Trusted> {
    let valid = if opts.strict {
        value.parse::<Property>().is_ok()
    } else {
        is_tag_syntax(value)
    };

    if valid {
        Some(Trusted::new(value))
    } else {
        trace!(strict = opts.strict, "rejected property tag {value:?}");
        None
    }
}

// tag = 1*(ALPHA / DIGIT)
fn is_tag_syntax(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_alphanumeric())
}
