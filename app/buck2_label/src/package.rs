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
use std::fmt::Display;
use std::sync::Arc;

use allocative::Allocative;
use anyhow::Context;
use dupe::Dupe;

use crate::ascii_pattern::AsciiCharSet;
use crate::paths::file_name;
use crate::paths::verify_normalized;
use crate::repository::RepositoryName;

#[derive(Debug, thiserror::Error)]
enum PackagePathError {
    #[error("Package path `{0}` contains invalid character `{1}`")]
    InvalidChar(String, char),
}

const PACKAGE_PATH_CHARS: AsciiCharSet =
    AsciiCharSet::ALPHANUMERIC.union(AsciiCharSet::new("/-._ $()+@="));

/// A normalized, `/`-separated path of a package relative to the root of its repository.
/// The empty path is the root package.
#[derive(
    Clone,
    Dupe,
    derive_more::Display,
    Debug,
    Hash,
    Eq,
    PartialEq,
    Ord,
    PartialOrd,
    Allocative
)]
pub struct PackagePath(Arc<str>);

impl PackagePath {
    /// Creates a `PackagePath` if the given path is forward and normalized, otherwise error.
    ///
    /// ```
    /// use buck2_label::package::PackagePath;
    ///
    /// assert!(PackagePath::new("foo/bar").is_ok());
    /// assert!(PackagePath::new("").is_ok());
    /// assert!(PackagePath::new("/abs/bar").is_err());
    /// assert!(PackagePath::new("foo/").is_err());
    /// assert!(PackagePath::new("normalize/./bar").is_err());
    /// assert!(PackagePath::new("normalize/../bar").is_err());
    /// ```
    pub fn new(path: &str) -> anyhow::Result<PackagePath> {
        verify_normalized(path).with_context(|| format!("Invalid package path `{}`", path))?;
        if let Some(c) = PACKAGE_PATH_CHARS.find_not_contained(path) {
            return Err(PackagePathError::InvalidChar(path.to_owned(), c).into());
        }
        Ok(PackagePath(Arc::from(path)))
    }

    pub fn root() -> PackagePath {
        PackagePath(Arc::from(""))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The last path segment, `None` for the root package.
    pub fn file_name(&self) -> Option<&str> {
        file_name(&self.0)
    }
}

/// A package: a repository and a path within it, like `//foo/bar` or `@repo//foo/bar`.
#[derive(Clone, Dupe, Debug, Hash, Eq, PartialEq, Ord, PartialOrd, Allocative)]
pub struct PackageLabel {
    repository: RepositoryName,
    path: PackagePath,
}

impl PackageLabel {
    pub fn new(repository: RepositoryName, path: PackagePath) -> PackageLabel {
        PackageLabel { repository, path }
    }

    /// Package `path` in the main repository. Panics if the path is invalid.
    pub fn testing_new(path: &str) -> PackageLabel {
        PackageLabel::new(RepositoryName::main(), PackagePath::new(path).unwrap())
    }

    pub fn repository(&self) -> &RepositoryName {
        &self.repository
    }

    pub fn path(&self) -> &PackagePath {
        &self.path
    }
}

impl Display for PackageLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}//{}", self.repository, self.path)
    }
}
