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


//! Validated values.

use std::{
    fmt::{self, Display, Formatter},
    ops::Deref,
};

/// A value that has passed validation.
///
/// All validation functions in this crate hand out their result wrapped in
/// this type. The wrapped string is an owned copy of (a part of) the input,
/// unchanged byte for byte; the type itself is the mark that the value was
/// checked and may be used without further sanitisation.
///
/// Values of this type can only be created by this crate.
#[derive(Clone, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Trusted(Box<str>);

impl Trusted {
    pub(crate) fn new(s: &str) -> Self {
        Self(s.into())
    }

    /// Returns the validated value as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Converts this value into an owned string, dropping the mark.
    pub fn into_string(self) -> String {
        self.0.into()
    }
}

impl Display for Trusted {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl fmt::Debug for Trusted {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", &self.0)
    }
}

impl AsRef<str> for Trusted {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Deref for Trusted {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Trusted> for String {
    fn from(value: Trusted) -> Self {
        value.into_string()
    }
}

impl PartialEq<str> for Trusted {
    fn eq(&self, other: &str) -> bool {
        &*self.0 == other
    }
}

impl PartialEq<&str> for Trusted {
    fn eq(&self, other: &&str) -> bool {
        &*self.0 == *other
    }
}

impl PartialEq<String> for Trusted {
    fn eq(&self, other: &String) -> bool {
        *self.0 == **other
    }
}
