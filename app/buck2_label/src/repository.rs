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
use dupe::Dupe;

use crate::ascii_pattern::AsciiCharSet;

#[derive(Debug, thiserror::Error)]
enum RepositoryNameError {
    #[error("Repository name `{0}` must start with a letter")]
    MustStartWithLetter(String),
    #[error("Repository name `{0}` contains invalid character `{1}`")]
    InvalidChar(String, char),
}

const REPOSITORY_NAME_CHARS: AsciiCharSet =
    AsciiCharSet::ALPHANUMERIC.union(AsciiCharSet::new("_-."));

/// The repository a label points into.
///
/// The repository within `@foo//some:target` is `foo`. Labels without a `@` prefix, and
/// labels with an empty prefix like `@//some:target`, point into the main repository.
#[derive(Clone, Dupe, Debug, Hash, Eq, PartialEq, Ord, PartialOrd, Allocative)]
pub struct RepositoryName(Option<Arc<str>>);

impl RepositoryName {
    pub fn main() -> RepositoryName {
        RepositoryName(None)
    }

    /// Validate a repository name as written between `@` and `//`. The empty name is the
    /// main repository.
    pub fn new(name: &str) -> anyhow::Result<RepositoryName> {
        let Some(first) = name.chars().next() else {
            return Ok(RepositoryName::main());
        };
        if !first.is_ascii_alphabetic() {
            return Err(RepositoryNameError::MustStartWithLetter(name.to_owned()).into());
        }
        if let Some(c) = REPOSITORY_NAME_CHARS.find_not_contained(name) {
            return Err(RepositoryNameError::InvalidChar(name.to_owned(), c).into());
        }
        Ok(RepositoryName(Some(Arc::from(name))))
    }

    pub fn testing_new(name: &str) -> RepositoryName {
        RepositoryName::new(name).unwrap()
    }

    pub fn is_main(&self) -> bool {
        self.0.is_none()
    }

    pub fn as_str(&self) -> &str {
        self.0.as_deref().unwrap_or_default()
    }
}

impl Display for RepositoryName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(name) => write!(f, "@{}", name),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::repository::RepositoryName;

    #[test]
    fn test_new() -> anyhow::Result<()> {
        assert!(RepositoryName::new("")?.is_main());
        assert_eq!("rules_cc", RepositoryName::new("rules_cc")?.as_str());
        assert_eq!("@my-repo.v2", RepositoryName::new("my-repo.v2")?.to_string());
        assert_eq!("", RepositoryName::main().to_string());
        Ok(())
    }

    #[test]
    fn test_invalid() {
        assert_eq!(
            "Repository name `1repo` must start with a letter",
            RepositoryName::new("1repo").unwrap_err().to_string()
        );
        assert_eq!(
            "Repository name `re/po` contains invalid character `/`",
            RepositoryName::new("re/po").unwrap_err().to_string()
        );
    }
}
