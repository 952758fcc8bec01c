/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 *
 * This source code is dual-licensed under either the MIT license found in the
 * LICENSE-MIT file in the root directory of this source tree or the Apache
 * License, Version 2.0 found in the LICENSE-APACHE file in the root directory
 * of this source tree. You may select, at your option, one of the
 * above-listed licenses.
 */

use std::collections::BTreeMap;
use std::collections::HashMap;
use std::hash::BuildHasher;

use starlark_map::small_map::SmallMap;

use crate::artifact::ArtifactLike;
use crate::target::label::TargetLabel;

/// Artifacts produced by each label a rule depends on.
///
/// A label may map to no artifacts, one, or several; callers decide what is acceptable.
pub trait LabelArtifactMapping {
    type Artifact: ArtifactLike;

    /// `None` if the label is not a key of this mapping.
    fn artifacts(&self, label: &TargetLabel) -> Option<&[Self::Artifact]>;
}

impl<A: ArtifactLike, S: BuildHasher> LabelArtifactMapping for HashMap<TargetLabel, Vec<A>, S> {
    type Artifact = A;

    fn artifacts(&self, label: &TargetLabel) -> Option<&[A]> {
        self.get(label).map(Vec::as_slice)
    }
}

impl<A: ArtifactLike> LabelArtifactMapping for BTreeMap<TargetLabel, Vec<A>> {
    type Artifact = A;

    fn artifacts(&self, label: &TargetLabel) -> Option<&[A]> {
        self.get(label).map(Vec::as_slice)
    }
}

impl<A: ArtifactLike> LabelArtifactMapping for SmallMap<TargetLabel, Vec<A>> {
    type Artifact = A;

    fn artifacts(&self, label: &TargetLabel) -> Option<&[A]> {
        self.get(label).map(Vec::as_slice)
    }
}

impl<M: LabelArtifactMapping + ?Sized> LabelArtifactMapping for &M {
    type Artifact = M::Artifact;

    fn artifacts(&self, label: &TargetLabel) -> Option<&[M::Artifact]> {
        (**self).artifacts(label)
    }
}
