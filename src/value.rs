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


//! Validation of property values by tag.

use crate::{iodef, issue, tag::Property, trusted::Trusted};
use tracing::trace;

/// Validates a property value according to the syntax for the given tag.
///
/// The tag is matched case-insensitively. Values for tags other than `issue`,
/// `issuewild`, and `iodef` are always rejected. The tag itself is not
/// returned; use [`is_caa_tag`][crate::is_caa_tag] to validate it separately.
pub fn is_caa_value(tag: &str, value: &str) -> Option<Trusted> {
    match tag.parse() {
        Ok(Property::Issue) => issue::is_caa_issue(value),
        Ok(Property::IssueWild) => issue::is_caa_issuewild(value),
        Ok(Property::Iodef) => iodef::is_caa_iodef(value),
        Err(e) => {
            trace!("no value syntax for property tag {tag:?}: {e}");
            None
        }
    }
}
