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


//! A library for validating the fields of DNS *Certification Authority
//! Authorization* (CAA) records as described in [RFC 6844].
//!
//! This library checks untrusted input strings against the syntax of CAA
//! property tags and of the values of the three standard properties,
//! `issue`, `issuewild`, and `iodef`. It does not parse DNS messages or
//! resource records, and does no DNS lookups of its own.
//!
//! # Usage
//!
//! The validation functions [`is_caa_tag`], [`is_caa_value`],
//! [`is_caa_issue`], [`is_caa_issuewild`], and [`is_caa_iodef`] return the
//! validated value as a [`Trusted`] string, or `None` if the input does not
//! conform. The same functions are available as methods on [`Validator`].
//!
//! ```
//! use viacaa::{is_caa_tag, is_caa_value};
//!
//! let tag = is_caa_tag("Issue").unwrap();
//! assert_eq!(tag, "Issue");
//!
//! let value = is_caa_value(&tag, "ca.example.net; account=230123").unwrap();
//! assert_eq!(value, "ca.example.net; account=230123");
//!
//! assert!(is_caa_value("iodef", "ftp://example.com").is_none());
//! ```
//!
//! Where more than a yes or no is wanted, [`IssueValue`] and [`IodefValue`]
//! parse the values into their parts.
//!
//! [RFC 6844]: https://www.rfc-editor.org/rfc/rfc6844

pub mod email;
pub mod iodef;
pub mod issue;
mod parse;
pub mod tag;
mod trusted;
pub mod uri;
mod util;
pub mod validator;
pub mod value;

pub use crate::{
    iodef::{is_caa_iodef, IodefValue, ParseIodefValueError},
    issue::{is_caa_issue, is_caa_issuewild, IssueValue, Parameter, ParseIssueValueError},
    tag::{is_caa_tag, is_caa_tag_with, ParsePropertyError, Property, TagOptions},
    trusted::Trusted,
    util::CanonicalStr,
    validator::Validator,
    value::is_caa_value,
};
