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
use std::iter::FusedIterator;

use buck2_label::ascii_pattern::AsciiCharSet;

/// Characters of a label reference as recognised inside free-form strings.
///
/// A subset of what labels allow: `,` and `=` are left out because they commonly separate
/// labels. `:` is included so that `:name` and `//pkg:name` stay in one run; label parsing
/// rejects any other colon, which leaves the whole run unexpanded.
pub const LABEL_REFERENCE_CHARS: AsciiCharSet =
    AsciiCharSet::ALPHANUMERIC.union(AsciiCharSet::new("_/.-+:"));

/// A piece of a string being expanded. Concatenating all parts gives back the string.
#[derive(Debug, Eq, PartialEq, Clone, Copy)]
pub enum StringWithLabelsPart<'a> {
    /// Characters which cannot be part of a label reference.
    Literal(&'a str),
    /// A maximal run of [`LABEL_REFERENCE_CHARS`], which may or may not name a label.
    Candidate(&'a str),
}

impl<'a> StringWithLabelsPart<'a> {
    pub fn as_str(&self) -> &'a str {
        match *self {
            StringWithLabelsPart::Literal(s) | StringWithLabelsPart::Candidate(s) => s,
        }
    }
}

impl Display for StringWithLabelsPart<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Splits a string into alternating literal and candidate parts.
///
/// Candidates are always maximal: `x11` is never split into `x1` and `1`.
pub struct LabelRuns<'a> {
    rest: &'a str,
}

impl<'a> LabelRuns<'a> {
    pub fn new(s: &'a str) -> LabelRuns<'a> {
        LabelRuns { rest: s }
    }
}

impl<'a> Iterator for LabelRuns<'a> {
    type Item = StringWithLabelsPart<'a>;

    fn next(&mut self) -> Option<StringWithLabelsPart<'a>> {
        let first = self.rest.chars().next()?;
        let in_run = LABEL_REFERENCE_CHARS.contains(first);
        let end = self
            .rest
            .find(|c: char| LABEL_REFERENCE_CHARS.contains(c) != in_run)
            .unwrap_or(self.rest.len());
        let (part, rest) = self.rest.split_at(end);
        self.rest = rest;
        Some(if in_run {
            StringWithLabelsPart::Candidate(part)
        } else {
            StringWithLabelsPart::Literal(part)
        })
    }
}

impl FusedIterator for LabelRuns<'_> {}
