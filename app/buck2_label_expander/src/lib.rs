/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 *
 * This source code is dual-licensed under either the MIT license found in the
 * LICENSE-MIT file in the root directory of this source tree or the Apache
 * License, Version 2.0 found in the LICENSE-APACHE file in the root directory
 * of this source tree. You may select, at your option, one of the
 * above-listed licenses.
 */

//! Expansion of label references in strings, like `x1,x2=bar/x3` or `//foo:x1`, to the
//! root-relative paths of the single artifact each label produces.

pub mod expand;
pub mod logging;
pub mod scan;

pub use crate::expand::expand;
pub use crate::expand::LabelExpander;
pub use crate::expand::NotUniqueExpansionError;
