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


//! The `issue` and `issuewild` property values.
//!
//! The value syntax follows RFC 6844, §5.2, with `;` between parameters:
//!
//! ```text
//! issuevalue = *WSP [domain] *WSP [";" *WSP [parameters]]
//! domain     = label *("." label)
//! label      = (ALPHA / DIGIT) *( *("-") (ALPHA / DIGIT))
//! parameters = parameter *WSP *(";" *WSP parameter *WSP) [";" *WSP]
//! parameter  = 1*(ALPHA / DIGIT) "=" *(%x21-7E)
//! ```
//!
//! Parameter values may themselves contain `;`. A `;` is taken as a separator
//! only where it is followed, after optional whitespace, by another `tag=` or
//! by the end of the input.

use crate::{
    parse::{is_let_dig, skip_wsp, strip_domain, strip_suffix},
    trusted::Trusted,
};
use std::{
    error::Error,
    fmt::{self, Display, Formatter},
};
use tracing::trace;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ParseIssueValueError {
    InvalidIssuerDomain,
    InvalidParameter,
    TrailingCharacters,
}

impl Display for ParseIssueValueError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidIssuerDomain => write!(f, "invalid issuer domain name"),
            Self::InvalidParameter => write!(f, "invalid issuer parameter"),
            Self::TrailingCharacters => write!(f, "unexpected characters in issue value"),
        }
    }
}

impl Error for ParseIssueValueError {}

/// An issuer parameter, `tag=value`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Parameter<'a> {
    pub tag: &'a str,
    pub value: &'a str,  // may be empty
}

/// A parsed `issue` or `issuewild` property value.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct IssueValue<'a> {
    pub issuer: Option<&'a str>,
    pub parameters: Vec<Parameter<'a>>,
}

impl<'a> IssueValue<'a> {
    /// Parses the whole of the given string as an issue value.
    pub fn parse(value: &'a str) -> Result<Self, ParseIssueValueError> {
        let s = skip_wsp(value);

        let (s, issuer) = match strip_domain(s) {
            Some(rest) => (rest, Some(strip_suffix(s, rest))),
            None => (s, None),
        };

        if s.starts_with(|c: char| is_let_dig(c) || matches!(c, '.' | '-')) {
            return Err(ParseIssueValueError::InvalidIssuerDomain);
        }

        let s = skip_wsp(s);

        let mut parameters = vec![];

        if !s.is_empty() {
            let mut s = s
                .strip_prefix(';')
                .map(skip_wsp)
                .ok_or(ParseIssueValueError::TrailingCharacters)?;

            while !s.is_empty() {
                let (rest, param) =
                    parse_parameter(s).ok_or(ParseIssueValueError::InvalidParameter)?;

                parameters.push(param);

                let rest = skip_wsp(rest);

                s = match rest.strip_prefix(';') {
                    Some(rest) => skip_wsp(rest),
                    None if rest.is_empty() => rest,
                    None => return Err(ParseIssueValueError::TrailingCharacters),
                };
            }
        }

        Ok(Self { issuer, parameters })
    }

    /// Whether this value forbids issuance, that is, names no issuer.
    ///
    /// Parameters are irrelevant here: without an issuer domain the value
    /// authorises nobody.
    pub fn forbids_issuance(&self) -> bool {
        self.issuer.is_none()
    }

    /// Returns the value of the first parameter with the given tag.
    pub fn parameter(&self, tag: &str) -> Option<&'a str> {
        self.parameters
            .iter()
            .find(|p| p.tag.eq_ignore_ascii_case(tag))
            .map(|p| p.value)
    }
}

fn parse_parameter(input: &str) -> Option<(&str, Parameter<'_>)> {
    let (s, tag) = parse_parameter_tag(input)?;

    let s = s.strip_prefix('=')?;

    let mut rest = s;
    loop {
        rest = rest.trim_start_matches(|c: char| is_value_char(c) && c != ';');
        match rest.strip_prefix(';') {
            Some(after) if !is_separator_tail(after) => rest = after,
            _ => break,
        }
    }

    let value = strip_suffix(s, rest);

    Some((rest, Parameter { tag, value }))
}

fn parse_parameter_tag(input: &str) -> Option<(&str, &str)> {
    let s = input
        .strip_prefix(is_let_dig)?
        .trim_start_matches(is_let_dig);
    Some((s, strip_suffix(input, s)))
}

// What follows a `;` that separates parameters.
fn is_separator_tail(s: &str) -> bool {
    let s = skip_wsp(s);
    s.is_empty() || matches!(parse_parameter_tag(s), Some((rest, _)) if rest.starts_with('='))
}

fn is_value_char(c: char) -> bool {
    matches!(c, '!'..='~')
}

/// Validates an `issue` property value.
pub fn is_caa_issue(value: &str) -> Option<Trusted> {
    match IssueValue::parse(value) {
        Ok(_) => Some(Trusted::new(value)),
        Err(e) => {
            trace!("rejected issue value {value:?}: {e}");
            None
        }
    }
}

/// Validates an `issuewild` property value.
///
/// The syntax is the same as for `issue` values.
pub fn is_caa_issuewild(value: &str) -> Option<Trusted> {
    is_caa_issue(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn param<'a>(tag: &'a str, value: &'a str) -> Parameter<'a> {
        Parameter { tag, value }
    }

    #[test]
    fn issue_value_parse_ok() {
        assert_eq!(IssueValue::parse(""), Ok(IssueValue::default()));
        assert_eq!(IssueValue::parse(" \t "), Ok(IssueValue::default()));
        assert_eq!(IssueValue::parse(";"), Ok(IssueValue::default()));

        assert_eq!(
            IssueValue::parse("ca.example.net"),
            Ok(IssueValue { issuer: Some("ca.example.net"), parameters: vec![] })
        );
        assert_eq!(
            IssueValue::parse("  ca.example.net  ;  "),
            Ok(IssueValue { issuer: Some("ca.example.net"), parameters: vec![] })
        );
        assert_eq!(
            IssueValue::parse("ca.example.net; account=230123"),
            Ok(IssueValue {
                issuer: Some("ca.example.net"),
                parameters: vec![param("account", "230123")],
            })
        );
        assert_eq!(
            IssueValue::parse("ca.example.net; policy=ev; account=123"),
            Ok(IssueValue {
                issuer: Some("ca.example.net"),
                parameters: vec![param("policy", "ev"), param("account", "123")],
            })
        );
        assert_eq!(
            IssueValue::parse("; policy=ev"),
            Ok(IssueValue { issuer: None, parameters: vec![param("policy", "ev")] })
        );
        assert_eq!(
            IssueValue::parse("x--y.net;a=;b=2 "),
            Ok(IssueValue {
                issuer: Some("x--y.net"),
                parameters: vec![param("a", ""), param("b", "2")],
            })
        );
    }

    #[test]
    fn issue_value_parse_semicolon_in_value() {
        assert_eq!(
            IssueValue::parse("ca.net; a=b;c"),
            Ok(IssueValue { issuer: Some("ca.net"), parameters: vec![param("a", "b;c")] })
        );
        assert_eq!(
            IssueValue::parse("ca.net; a=b; ; c=d"),
            Ok(IssueValue {
                issuer: Some("ca.net"),
                parameters: vec![param("a", "b;"), param("c", "d")],
            })
        );
        assert_eq!(
            IssueValue::parse("ca.net; a=b;c=d;"),
            Ok(IssueValue {
                issuer: Some("ca.net"),
                parameters: vec![param("a", "b"), param("c", "d")],
            })
        );
        assert_eq!(
            IssueValue::parse("ca.net; url=https://ca.net/x?y=1"),
            Ok(IssueValue {
                issuer: Some("ca.net"),
                parameters: vec![param("url", "https://ca.net/x?y=1")],
            })
        );
    }

    #[test]
    fn issue_value_parse_invalid() {
        use ParseIssueValueError::*;

        assert_eq!(IssueValue::parse("not a domain!!!"), Err(TrailingCharacters));
        assert_eq!(IssueValue::parse("ca.example.net."), Err(InvalidIssuerDomain));
        assert_eq!(IssueValue::parse("-ca.example.net"), Err(InvalidIssuerDomain));
        assert_eq!(IssueValue::parse("ca-.example.net"), Err(InvalidIssuerDomain));
        assert_eq!(IssueValue::parse("ca..example.net"), Err(InvalidIssuerDomain));
        assert_eq!(IssueValue::parse("ca_1.example.net"), Err(TrailingCharacters));
        assert_eq!(IssueValue::parse("ca.net account=1"), Err(TrailingCharacters));
        assert_eq!(IssueValue::parse("ca.net; =1"), Err(InvalidParameter));
        assert_eq!(IssueValue::parse("ca.net; a-b=1"), Err(InvalidParameter));
        assert_eq!(IssueValue::parse("ca.net; a = 1"), Err(InvalidParameter));
        assert_eq!(IssueValue::parse("ca.net; a=1 b=2"), Err(TrailingCharacters));
        assert_eq!(IssueValue::parse("ca.net; a=ü"), Err(TrailingCharacters));
        assert_eq!(IssueValue::parse("ca.net;; a=1"), Err(InvalidParameter));
        assert_eq!(IssueValue::parse("ca.net\r\n"), Err(TrailingCharacters));
    }

    #[test]
    fn issue_value_accessors() {
        let value = IssueValue::parse("ca.net; Account=42; policy=ev").unwrap();
        assert!(!value.forbids_issuance());
        assert_eq!(value.parameter("account"), Some("42"));
        assert_eq!(value.parameter("validationmethods"), None);

        assert!(IssueValue::parse(";").unwrap().forbids_issuance());
    }

    #[test]
    fn is_caa_issue_ok() {
        assert_eq!(is_caa_issue("").unwrap(), "");
        assert_eq!(is_caa_issue("ca.example.com").unwrap(), "ca.example.com");
        assert_eq!(
            is_caa_issue("ca.example.com; policy=ev").unwrap(),
            "ca.example.com; policy=ev"
        );
        assert_eq!(is_caa_issue("not a domain!!!"), None);
    }

    #[test]
    fn is_caa_issuewild_same_as_issue() {
        for s in ["", ";", "ca.net", "ca.net; a=1", "%%%%%", "ca.net.", " x ; y=z "] {
            assert_eq!(is_caa_issuewild(s), is_caa_issue(s));
        }
    }
}
