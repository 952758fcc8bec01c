/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 *
 * This source code is dual-licensed under either the MIT license found in the
 * LICENSE-MIT file in the root directory of this source tree or the Apache
 * License, Version 2.0 found in the LICENSE-APACHE file in the root directory
 * of this source tree. You may select, at your option, one of the
 * above-listed licenses.
 */

use std::fmt;
use std::fmt::Debug;
use std::fmt::Display;
use std::sync::Arc;

use allocative::Allocative;
use dupe::Dupe;
use serde::Serialize;
use serde::Serializer;

use crate::package::PackageLabel;
use crate::parse::parse_label;
use crate::target::name::TargetName;
use crate::target::name::TargetNameRef;

#[derive(Hash, Eq, PartialEq, Ord, PartialOrd, Allocative)]
struct TargetLabelData {
    pkg: PackageLabel,
    name: TargetName,
}

/// 'TargetLabel' is the canonical identifier of a build target: a package and a target
/// name within it. Displays as `//some/package:target` or `@repo//some/package:target`.
///
/// Equality, hashing and ordering are by package, then target name.
#[derive(Clone, Dupe, Hash, Eq, PartialEq, Ord, PartialOrd, Allocative)]
pub struct TargetLabel(Arc<TargetLabelData>);

static_assertions::assert_eq_size!(TargetLabel, usize);
static_assertions::assert_impl_all!(TargetLabel: Send, Sync);

impl TargetLabel {
    #[inline]
    pub fn new(pkg: PackageLabel, name: &TargetNameRef) -> TargetLabel {
        TargetLabel(Arc::new(TargetLabelData {
            pkg,
            name: name.to_owned(),
        }))
    }

    #[inline]
    pub fn pkg(&self) -> &PackageLabel {
        &self.0.pkg
    }

    #[inline]
    pub fn name(&self) -> &TargetNameRef {
        &self.0.name
    }

    /// Parse an absolute label like `//foo/bar:baz`. Panics on invalid input.
    pub fn testing_parse(label: &str) -> TargetLabel {
        assert!(
            label.starts_with("//") || label.starts_with('@'),
            "label must be absolute: `{}`",
            label
        );
        parse_label(label, &PackageLabel::testing_new("")).unwrap()
    }
}

impl Display for TargetLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.0.pkg, self.0.name)
    }
}

impl Debug for TargetLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TargetLabel")
            .field(&format_args!("{}", self))
            .finish()
    }
}

impl Serialize for TargetLabel {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use dupe::Dupe;

    use crate::package::PackageLabel;
    use crate::package::PackagePath;
    use crate::repository::RepositoryName;
    use crate::target::label::TargetLabel;
    use crate::target::name::TargetNameRef;

    #[test]
    fn test_display_and_parts() -> anyhow::Result<()> {
        let label = TargetLabel::new(
            PackageLabel::testing_new("foo/bar"),
            TargetNameRef::new("baz")?,
        );
        assert_eq!("//foo/bar:baz", label.to_string());
        assert_eq!("foo/bar", label.pkg().path().as_str());
        assert_eq!("baz", label.name().as_str());
        assert_eq!("TargetLabel(//foo/bar:baz)", format!("{:?}", label));

        let external = TargetLabel::new(
            PackageLabel::new(RepositoryName::new("repo")?, PackagePath::root()),
            TargetNameRef::new("x")?,
        );
        assert_eq!("@repo//:x", external.to_string());
        Ok(())
    }

    #[test]
    fn test_equality_is_by_value() {
        let a = TargetLabel::testing_parse("//foo:x1");
        let b = TargetLabel::testing_parse("//foo:x1");
        let c = TargetLabel::testing_parse("@//foo:x1");
        assert_eq!(a, b);
        assert_eq!(a, c);
        assert_ne!(a, TargetLabel::testing_parse("//foo:x11"));
        assert_ne!(a, TargetLabel::testing_parse("@other//foo:x1"));

        let set: HashSet<TargetLabel> = [a.dupe(), b, c].into_iter().collect();
        assert_eq!(1, set.len());
    }

    #[test]
    fn test_ordering() {
        let mut labels = vec![
            TargetLabel::testing_parse("//foo:b"),
            TargetLabel::testing_parse("//bar:z"),
            TargetLabel::testing_parse("//foo:a"),
        ];
        labels.sort();
        assert_eq!(
            vec!["//bar:z", "//foo:a", "//foo:b"],
            labels.iter().map(|l| l.to_string()).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_serialize() -> anyhow::Result<()> {
        let label = TargetLabel::testing_parse("//foo:bar/x3");
        assert_eq!("\"//foo:bar/x3\"", serde_json::to_string(&label)?);
        Ok(())
    }
}
