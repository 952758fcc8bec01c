/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 *
 * This source code is dual-licensed under either the MIT license found in the
 * LICENSE-MIT file in the root directory of this source tree or the Apache
 * License, Version 2.0 found in the LICENSE-APACHE file in the root directory
 * of this source tree. You may select, at your option, one of the
 * above-listed licenses.
 */

//! Labels of build targets, the packages they live in and the artifacts they produce.
//!
//! Labels are written as `//some/package:target`, `@repo//some/package:target`, or
//! relative to a package as `:target` or `target`.

#[cfg(test)]
#[macro_use]
extern crate maplit;

pub mod artifact;
pub mod ascii_pattern;
pub mod mapping;
pub mod package;
pub mod parse;
pub(crate) mod paths;
pub mod repository;
pub mod target;
