/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 *
 * This source code is dual-licensed under either the MIT license found in the
 * LICENSE-MIT file in the root directory of this source tree or the Apache
 * License, Version 2.0 found in the LICENSE-APACHE file in the root directory
 * of this source tree. You may select, at your option, one of the
 * above-listed licenses.
 */

use std::borrow::Borrow;
use std::fmt;
use std::fmt::Display;
use std::ops::Deref;

use allocative::Allocative;
use ref_cast::RefCast;

use crate::ascii_pattern::AsciiCharSet;
use crate::paths::verify_normalized;
use crate::paths::PathNormalizationError;

#[derive(Debug, thiserror::Error)]
enum TargetNameError {
    #[error("Target name is empty")]
    Empty,
    #[error("Invalid target name `{0}`: {1}")]
    NotNormalized(String, PathNormalizationError),
    #[error("Invalid target name `{0}`: character `{1}` is not allowed")]
    InvalidChar(String, char),
}

/// Everything printable except `:`, which separates the package from the target name.
const TARGET_NAME_CHARS: AsciiCharSet =
    AsciiCharSet::ALPHANUMERIC.union(AsciiCharSet::new("!%-@^_\"#$&'()*+,;<=>?[]{|}~/. "));

/// Borrowed target name, like `foo` in `//some/package:foo`.
///
/// Target names may contain `/` but are otherwise path-normalized: no leading or trailing
/// `/`, no empty segments, no `.` or `..` segments.
#[derive(Debug, Hash, Eq, PartialEq, Ord, PartialOrd, RefCast)]
#[repr(transparent)]
pub struct TargetNameRef(str);

impl TargetNameRef {
    pub fn new(name: &str) -> anyhow::Result<&TargetNameRef> {
        verify_target_name(name)?;
        Ok(TargetNameRef::unchecked_new(name))
    }

    #[inline]
    pub fn unchecked_new(name: &str) -> &TargetNameRef {
        TargetNameRef::ref_cast(name)
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn to_owned(&self) -> TargetName {
        TargetName(Box::from(&self.0))
    }
}

fn verify_target_name(name: &str) -> Result<(), TargetNameError> {
    if name.is_empty() {
        return Err(TargetNameError::Empty);
    }
    if let Some(c) = TARGET_NAME_CHARS.find_not_contained(name) {
        return Err(TargetNameError::InvalidChar(name.to_owned(), c));
    }
    verify_normalized(name).map_err(|e| TargetNameError::NotNormalized(name.to_owned(), e))
}

impl Display for TargetNameRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Owned target name.
#[derive(Clone, Debug, Hash, Eq, PartialEq, Ord, PartialOrd, Allocative)]
pub struct TargetName(Box<str>);

impl TargetName {
    pub fn new(name: &str) -> anyhow::Result<TargetName> {
        Ok(TargetNameRef::new(name)?.to_owned())
    }

    pub fn testing_new(name: &str) -> TargetName {
        TargetName::new(name).unwrap()
    }
}

impl Deref for TargetName {
    type Target = TargetNameRef;

    #[inline]
    fn deref(&self) -> &TargetNameRef {
        TargetNameRef::unchecked_new(&self.0)
    }
}

impl Borrow<TargetNameRef> for TargetName {
    #[inline]
    fn borrow(&self) -> &TargetNameRef {
        self
    }
}

impl AsRef<TargetNameRef> for TargetName {
    #[inline]
    fn as_ref(&self) -> &TargetNameRef {
        self
    }
}

impl Display for TargetName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use crate::target::name::TargetName;
    use crate::target::name::TargetNameRef;

    #[test]
    fn test_valid() -> anyhow::Result<()> {
        for name in [
            "foo",
            "x1",
            "bar/x3",
            "_/.-+/abcXYZ019",
            "lib$(CONFIG)@v2",
            ".hidden",
            "a b",
        ] {
            assert_eq!(name, TargetNameRef::new(name)?.as_str());
        }
        Ok(())
    }

    #[test]
    fn test_invalid() {
        fn err(name: &str) -> String {
            TargetName::new(name).unwrap_err().to_string()
        }

        assert_eq!("Target name is empty", err(""));
        assert_eq!(
            "Invalid target name `a:b`: character `:` is not allowed",
            err("a:b")
        );
        assert_eq!("Invalid target name `/x1`: must not start with `/`", err("/x1"));
        assert_eq!("Invalid target name `x1/`: must not end with `/`", err("x1/"));
        assert_eq!(
            "Invalid target name `x1//x2`: must not contain empty segments (`//`)",
            err("x1//x2")
        );
        assert_eq!(
            "Invalid target name `x1/./x2`: must not contain `.` segments",
            err("x1/./x2")
        );
        assert_eq!(
            "Invalid target name `../x1`: must not contain `..` segments",
            err("../x1")
        );
        assert_eq!(
            "Invalid target name `x1/..`: must not contain `..` segments",
            err("x1/..")
        );
    }

    #[test]
    fn test_owned_and_borrowed_agree() -> anyhow::Result<()> {
        let owned = TargetName::new("bar/x3")?;
        let borrowed: &TargetNameRef = &owned;
        assert_eq!(TargetNameRef::new("bar/x3")?, borrowed);
        assert_eq!(owned, borrowed.to_owned());
        Ok(())
    }
}
