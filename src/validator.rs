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


//! Validator handle.

use crate::{
    iodef, issue,
    tag::{self, TagOptions},
    trusted::Trusted,
    value::is_caa_value,
};
use std::collections::BTreeMap;

/// A handle exposing the validation functions as methods.
///
/// Validation carries no state, and the methods behave exactly like the free
/// functions of the same name. A validator may nevertheless be given
/// arbitrary configuration entries, which are kept for the caller but do not
/// influence validation.
///
/// # Examples
///
/// ```
/// use viacaa::Validator;
///
/// let validator = Validator::with_config([("zone", "example.com")]);
///
/// assert_eq!(validator.get("zone"), Some("example.com"));
/// assert!(validator.is_caa_value("issue", "ca.example.net; account=230123").is_some());
/// assert!(validator.is_caa_iodef("ftp://example.com").is_none());
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Validator {
    config: BTreeMap<Box<str>, Box<str>>,
}

impl Validator {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn with_config<I, K, V>(config: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<Box<str>>,
        V: Into<Box<str>>,
    {
        let config = config
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self { config }
    }

    pub fn config(&self) -> &BTreeMap<Box<str>, Box<str>> {
        &self.config
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.config.get(key).map(|v| &**v)
    }

    pub fn is_caa_tag(&self, value: &str) -> Option<Trusted> {
        tag::is_caa_tag(value)
    }

    pub fn is_caa_tag_with(&self, value: &str, opts: &TagOptions) -> Option<Trusted> {
        tag::is_caa_tag_with(value, opts)
    }

    pub fn is_caa_value(&self, tag: &str, value: &str) -> Option<Trusted> {
        is_caa_value(tag, value)
    }

    pub fn is_caa_issue(&self, value: &str) -> Option<Trusted> {
        issue::is_caa_issue(value)
    }

    pub fn is_caa_issuewild(&self, value: &str) -> Option<Trusted> {
        issue::is_caa_issuewild(value)
    }

    pub fn is_caa_iodef(&self, value: &str) -> Option<Trusted> {
        iodef::is_caa_iodef(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validator_config_is_inert() {
        let plain = Validator::new();
        let configured = Validator::with_config([
            ("strict".to_owned(), "false".to_owned()),
            ("x".to_owned(), "y".to_owned()),
        ]);

        assert!(plain.config().is_empty());
        assert_eq!(configured.config().len(), 2);
        assert_eq!(configured.get("strict"), Some("false"));
        assert_eq!(configured.get("missing"), None);

        for v in [&plain, &configured] {
            assert_eq!(v.is_caa_tag("tbs"), None);
            assert_eq!(v.is_caa_tag("Iodef").unwrap(), "Iodef");
        }
    }

    #[test]
    fn validator_methods_match_functions() {
        let validator = Validator::default();

        assert_eq!(
            validator.is_caa_tag_with("tbs", &TagOptions { strict: false }),
            tag::is_caa_tag_with("tbs", &TagOptions { strict: false })
        );
        assert_eq!(
            validator.is_caa_issue("ca.net; a=1"),
            issue::is_caa_issue("ca.net; a=1")
        );
        assert_eq!(
            validator.is_caa_issuewild("ca.net; a=1"),
            issue::is_caa_issue("ca.net; a=1")
        );
        assert_eq!(
            validator.is_caa_iodef("mailto:a@example.com").unwrap(),
            "a@example.com"
        );
        assert_eq!(validator.is_caa_value("bogus", "x"), None);
    }

    #[test]
    fn validator_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Validator>();
    }
}
