/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 *
 * This source code is dual-licensed under either the MIT license found in the
 * LICENSE-MIT file in the root directory of this source tree or the Apache
 * License, Version 2.0 found in the LICENSE-APACHE file in the root directory
 * of this source tree. You may select, at your option, one of the
 * above-listed licenses.
 */

use std::borrow::Cow;
use std::fmt;
use std::fmt::Display;
use std::sync::Arc;

use allocative::Allocative;
use anyhow::Context;
use dupe::Dupe;

use crate::paths::verify_normalized;

#[derive(Debug, thiserror::Error)]
enum ArtifactError {
    #[error("Artifact path is empty")]
    EmptyPath,
    #[error("Output root of a derived artifact is empty")]
    EmptyRoot,
}

/// Anything that can stand in for an output file when a label is expanded to a path.
pub trait ArtifactLike {
    /// Path of the artifact relative to its root, e.g. `foo/x1` for an output of `//foo:x1`.
    fn root_relative_path(&self) -> &str;
}

impl<A: ArtifactLike + ?Sized> ArtifactLike for &A {
    fn root_relative_path(&self) -> &str {
        (**self).root_relative_path()
    }
}

impl<A: ArtifactLike + ?Sized> ArtifactLike for Arc<A> {
    fn root_relative_path(&self) -> &str {
        (**self).root_relative_path()
    }
}

/// Where an artifact lives relative to the execution root.
#[derive(Clone, Dupe, Debug, Hash, Eq, PartialEq, Ord, PartialOrd, Allocative)]
pub enum ArtifactRoot {
    /// A file checked into the source tree.
    Source,
    /// A file produced by an action, under an output directory like `buck-out/v2/gen`.
    Derived(Arc<str>),
}

#[derive(Debug, Hash, Eq, PartialEq, Ord, PartialOrd, Allocative)]
struct ArtifactData {
    root: ArtifactRoot,
    path: Box<str>,
}

/// A build artifact: a root and a normalized path relative to it.
#[derive(Clone, Dupe, Debug, Hash, Eq, PartialEq, Ord, PartialOrd, Allocative)]
pub struct Artifact(Arc<ArtifactData>);

impl Artifact {
    fn new(root: ArtifactRoot, path: &str) -> anyhow::Result<Artifact> {
        if path.is_empty() {
            return Err(ArtifactError::EmptyPath.into());
        }
        verify_normalized(path).with_context(|| format!("Invalid artifact path `{}`", path))?;
        Ok(Artifact(Arc::new(ArtifactData {
            root,
            path: Box::from(path),
        })))
    }

    pub fn source(path: &str) -> anyhow::Result<Artifact> {
        Artifact::new(ArtifactRoot::Source, path)
    }

    pub fn derived(root: &str, path: &str) -> anyhow::Result<Artifact> {
        if root.is_empty() {
            return Err(ArtifactError::EmptyRoot.into());
        }
        verify_normalized(root).with_context(|| format!("Invalid output root `{}`", root))?;
        Artifact::new(ArtifactRoot::Derived(Arc::from(root)), path)
    }

    pub fn root(&self) -> &ArtifactRoot {
        &self.0.root
    }

    pub fn is_source(&self) -> bool {
        matches!(self.0.root, ArtifactRoot::Source)
    }

    /// Path relative to the execution root: the root-relative path prefixed with the
    /// output root for derived artifacts.
    pub fn exec_path(&self) -> Cow<'_, str> {
        match &self.0.root {
            ArtifactRoot::Source => Cow::Borrowed(&*self.0.path),
            ArtifactRoot::Derived(root) => Cow::Owned(format!("{}/{}", root, self.0.path)),
        }
    }
}

impl ArtifactLike for Artifact {
    fn root_relative_path(&self) -> &str {
        &self.0.path
    }
}

impl Display for Artifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0.root {
            ArtifactRoot::Source => write!(f, "<source {}>", self.0.path),
            ArtifactRoot::Derived(root) => {
                write!(f, "<build artifact {} in {}>", self.0.path, root)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::artifact::Artifact;
    use crate::artifact::ArtifactLike;
    use crate::artifact::ArtifactRoot;

    #[test]
    fn test_source() -> anyhow::Result<()> {
        let a = Artifact::source("foo/x1")?;
        assert!(a.is_source());
        assert_eq!(&ArtifactRoot::Source, a.root());
        assert_eq!("foo/x1", a.root_relative_path());
        assert_eq!("foo/x1", a.exec_path());
        assert_eq!("<source foo/x1>", a.to_string());
        Ok(())
    }

    #[test]
    fn test_derived() -> anyhow::Result<()> {
        let a = Artifact::derived("buck-out/v2/gen", "foo/bar/x3")?;
        assert!(!a.is_source());
        assert_eq!("foo/bar/x3", a.root_relative_path());
        assert_eq!("buck-out/v2/gen/foo/bar/x3", a.exec_path());
        assert_eq!(
            "<build artifact foo/bar/x3 in buck-out/v2/gen>",
            a.to_string()
        );
        Ok(())
    }

    #[test]
    fn test_invalid() {
        assert_eq!(
            "Artifact path is empty",
            Artifact::source("").unwrap_err().to_string()
        );
        assert_eq!(
            "Invalid artifact path `foo/../x1`: must not contain `..` segments",
            format!("{:#}", Artifact::source("foo/../x1").unwrap_err())
        );
        assert_eq!(
            "Output root of a derived artifact is empty",
            Artifact::derived("", "foo").unwrap_err().to_string()
        );
        assert_eq!(
            "Invalid output root `/abs`: must not start with `/`",
            format!("{:#}", Artifact::derived("/abs", "foo").unwrap_err())
        );
    }

    #[test]
    fn test_artifact_like_through_references() -> anyhow::Result<()> {
        fn path_of<A: ArtifactLike>(a: A) -> String {
            a.root_relative_path().to_owned()
        }

        let a = Artifact::source("foo/x1")?;
        assert_eq!("foo/x1", path_of(&a));
        assert_eq!("foo/x1", path_of(std::sync::Arc::new(a)));
        Ok(())
    }
}
