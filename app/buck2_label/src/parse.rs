/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 *
 * This source code is dual-licensed under either the MIT license found in the
 * LICENSE-MIT file in the root directory of this source tree or the Apache
 * License, Version 2.0 found in the LICENSE-APACHE file in the root directory
 * of this source tree. You may select, at your option, one of the
 * above-listed licenses.
 */

use anyhow::Context;
use dupe::Dupe;

use crate::ascii_pattern::split1_opt_ascii;
use crate::ascii_pattern::strip_prefix_ascii;
use crate::ascii_pattern::AsciiChar;
use crate::ascii_pattern::AsciiStr2;
use crate::package::PackageLabel;
use crate::package::PackagePath;
use crate::repository::RepositoryName;
use crate::target::label::TargetLabel;
use crate::target::name::TargetNameRef;

#[derive(Debug, thiserror::Error)]
enum LabelParseError {
    #[error("Label is empty")]
    Empty,
    #[error(
        "Package-qualified labels must be absolute. Start with `//` for a package or `:` for a target in the current package"
    )]
    RelativePackage,
    #[error("Repository name must be followed by `//`")]
    MissingSlashesAfterRepository,
    #[error("Cannot infer a target name for the root package, write `//:name`")]
    RootPackageWithoutTarget,
}

/// The pieces of a label, before validation.
#[derive(Debug, Eq, PartialEq)]
enum LabelParts<'a> {
    /// `@repo//package:target`, `//package:target` or `//package`.
    Absolute {
        repository: &'a str,
        package: &'a str,
        target: Option<&'a str>,
    },
    /// `:target` or `target`, in the package of whoever refers to it.
    Relative { target: &'a str },
}

fn lex_label(label: &str) -> anyhow::Result<LabelParts<'_>> {
    if label.is_empty() {
        return Err(LabelParseError::Empty.into());
    }

    let absolute = match strip_prefix_ascii(label, AsciiChar::new('@')) {
        Some(rest) => Some(
            split1_opt_ascii(rest, AsciiStr2::new("//"))
                .ok_or(LabelParseError::MissingSlashesAfterRepository)?,
        ),
        None => strip_prefix_ascii(label, AsciiStr2::new("//")).map(|rest| ("", rest)),
    };

    match absolute {
        Some((repository, rest)) => {
            let (package, target) = match split1_opt_ascii(rest, AsciiChar::new(':')) {
                Some((package, target)) => (package, Some(target)),
                None => (rest, None),
            };
            Ok(LabelParts::Absolute {
                repository,
                package,
                target,
            })
        }
        None => match strip_prefix_ascii(label, AsciiChar::new(':')) {
            Some(target) => Ok(LabelParts::Relative { target }),
            None if split1_opt_ascii(label, AsciiChar::new(':')).is_some() => {
                Err(LabelParseError::RelativePackage.into())
            }
            None => Ok(LabelParts::Relative { target: label }),
        },
    }
}

/// Parse a label, resolving relative forms (`:name` and `name`) against `current_package`.
///
/// `//foo/bar` is shorthand for `//foo/bar:bar`. A second `:` is never valid since target
/// names may not contain one.
pub fn parse_label(label: &str, current_package: &PackageLabel) -> anyhow::Result<TargetLabel> {
    parse_label_impl(label, current_package).with_context(|| format!("Invalid label `{}`", label))
}

fn parse_label_impl(label: &str, current_package: &PackageLabel) -> anyhow::Result<TargetLabel> {
    match lex_label(label)? {
        LabelParts::Absolute {
            repository,
            package,
            target,
        } => {
            let repository = RepositoryName::new(repository)?;
            let path = PackagePath::new(package)?;
            let name = match target {
                Some(target) => TargetNameRef::new(target)?,
                None => TargetNameRef::new(
                    path.file_name()
                        .ok_or(LabelParseError::RootPackageWithoutTarget)?,
                )?,
            };
            Ok(TargetLabel::new(PackageLabel::new(repository, path.dupe()), name))
        }
        LabelParts::Relative { target } => Ok(TargetLabel::new(
            current_package.dupe(),
            TargetNameRef::new(target)?,
        )),
    }
}
