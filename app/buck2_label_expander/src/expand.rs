/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 *
 * This source code is dual-licensed under either the MIT license found in the
 * LICENSE-MIT file in the root directory of this source tree or the Apache
 * License, Version 2.0 found in the LICENSE-APACHE file in the root directory
 * of this source tree. You may select, at your option, one of the
 * above-listed licenses.
 */

use buck2_label::artifact::ArtifactLike;
use buck2_label::mapping::LabelArtifactMapping;
use buck2_label::parse::parse_label;
use buck2_label::target::label::TargetLabel;

use crate::scan::LabelRuns;
use crate::scan::StringWithLabelsPart;

/// A label referenced from an expanded string resolved to a number of artifacts other than
/// one, so there is no single path to substitute.
#[derive(Debug, thiserror::Error)]
#[error("Label `{label}` expanded to {count} artifacts, expected exactly one")]
pub struct NotUniqueExpansionError {
    label: TargetLabel,
    count: usize,
}

impl NotUniqueExpansionError {
    pub fn label(&self) -> &TargetLabel {
        &self.label
    }

    pub fn count(&self) -> usize {
        self.count
    }
}

/// Expands label references in strings owned by the target `anchor`.
///
/// Every maximal run of label characters is parsed as a label relative to the package of
/// `anchor`. If that label is a key of `mapping`, the run is replaced by the root-relative
/// path of its only artifact. Runs which are not labels, or not in the mapping, are kept
/// as written.
pub struct LabelExpander<'a, M: ?Sized> {
    mapping: &'a M,
    anchor: &'a TargetLabel,
}

impl<'a, M: LabelArtifactMapping + ?Sized> LabelExpander<'a, M> {
    pub fn new(mapping: &'a M, anchor: &'a TargetLabel) -> Self {
        LabelExpander { mapping, anchor }
    }

    pub fn expand(&self, expression: &str) -> Result<String, NotUniqueExpansionError> {
        if expression.is_empty() {
            return Ok(String::new());
        }

        let mut result = String::with_capacity(expression.len());
        for part in LabelRuns::new(expression) {
            match part {
                StringWithLabelsPart::Literal(s) => result.push_str(s),
                StringWithLabelsPart::Candidate(s) => match self.resolve(s)? {
                    Some(path) => result.push_str(path),
                    None => result.push_str(s),
                },
            }
        }
        Ok(result)
    }

    /// Expand each string, e.g. the elements of a list attribute. Stops at the first error.
    pub fn expand_all<'s>(
        &self,
        expressions: impl IntoIterator<Item = &'s str>,
    ) -> Result<Vec<String>, NotUniqueExpansionError> {
        expressions.into_iter().map(|e| self.expand(e)).collect()
    }

    /// The path to substitute for `candidate`, or `None` to keep it unchanged.
    fn resolve(&self, candidate: &str) -> Result<Option<&'a str>, NotUniqueExpansionError> {
        let label = match parse_label(candidate, self.anchor.pkg()) {
            Ok(label) => label,
            Err(e) => {
                tracing::debug!("Not expanding `{}`: {:#}", candidate, e);
                return Ok(None);
            }
        };

        let Some(artifacts) = self.mapping.artifacts(&label) else {
            tracing::debug!("Not expanding `{}`: no artifacts for `{}`", candidate, label);
            return Ok(None);
        };

        match artifacts {
            [artifact] => {
                let path = artifact.root_relative_path();
                tracing::trace!("Expanded `{}` to `{}`", candidate, path);
                Ok(Some(path))
            }
            _ => {
                let count = artifacts.len();
                tracing::debug!(
                    "Cannot expand `{}` in target `{}`: {} artifacts",
                    candidate,
                    self.anchor,
                    count
                );
                Err(NotUniqueExpansionError { label, count })
            }
        }
    }
}

/// Expand the label references in `expression`. An absent expression expands to the empty
/// string.
///
/// ```
/// use buck2_label::artifact::Artifact;
/// use buck2_label::target::label::TargetLabel;
/// use std::collections::HashMap;
///
/// let anchor = TargetLabel::testing_parse("//foo:foo");
/// let mut mapping = HashMap::new();
/// mapping.insert(
///     TargetLabel::testing_parse("//foo:x1"),
///     vec![Artifact::source("foo/x1")?],
/// );
///
/// assert_eq!(
///     "cat foo/x1 > out",
///     buck2_label_expander::expand(Some("cat :x1 > out"), &mapping, &anchor)?
/// );
/// assert_eq!("", buck2_label_expander::expand(None, &mapping, &anchor)?);
/// # anyhow::Ok(())
/// ```
pub fn expand<M: LabelArtifactMapping + ?Sized>(
    expression: Option<&str>,
    mapping: &M,
    anchor: &TargetLabel,
) -> Result<String, NotUniqueExpansionError> {
    match expression {
        Some(expression) => LabelExpander::new(mapping, anchor).expand(expression),
        None => Ok(String::new()),
    }
}
