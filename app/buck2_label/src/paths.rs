/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 *
 * This source code is dual-licensed under either the MIT license found in the
 * LICENSE-MIT file in the root directory of this source tree or the Apache
 * License, Version 2.0 found in the LICENSE-APACHE file in the root directory
 * of this source tree. You may select, at your option, one of the
 * above-listed licenses.
 */

/// Why a `/`-separated path is not forward and normalized.
#[derive(Debug, thiserror::Error, Copy, Clone, Eq, PartialEq)]
pub enum PathNormalizationError {
    #[error("must not start with `/`")]
    LeadingSlash,
    #[error("must not end with `/`")]
    TrailingSlash,
    #[error("must not contain empty segments (`//`)")]
    EmptySegment,
    #[error("must not contain `.` segments")]
    DotSegment,
    #[error("must not contain `..` segments")]
    DotDotSegment,
}

/// Check that `path` is a forward, normalized relative path. The empty path is accepted.
pub(crate) fn verify_normalized(path: &str) -> Result<(), PathNormalizationError> {
    if path.is_empty() {
        return Ok(());
    }
    if path.starts_with('/') {
        return Err(PathNormalizationError::LeadingSlash);
    }
    if path.ends_with('/') {
        return Err(PathNormalizationError::TrailingSlash);
    }
    for segment in path.split('/') {
        match segment {
            "" => return Err(PathNormalizationError::EmptySegment),
            "." => return Err(PathNormalizationError::DotSegment),
            ".." => return Err(PathNormalizationError::DotDotSegment),
            _ => {}
        }
    }
    Ok(())
}

/// Last `/`-separated segment of a non-empty path.
#[inline]
pub(crate) fn file_name(path: &str) -> Option<&str> {
    if path.is_empty() {
        None
    } else {
        Some(path.rsplit('/').next().unwrap_or(path))
    }
}

#[cfg(test)]
mod tests {
    use crate::paths::file_name;
    use crate::paths::verify_normalized;
    use crate::paths::PathNormalizationError;

    #[test]
    fn test_verify_normalized() {
        assert_eq!(Ok(()), verify_normalized(""));
        assert_eq!(Ok(()), verify_normalized("foo"));
        assert_eq!(Ok(()), verify_normalized("foo/bar.txt"));
        assert_eq!(Ok(()), verify_normalized("foo/.hidden/...x"));
        assert_eq!(
            Err(PathNormalizationError::LeadingSlash),
            verify_normalized("/foo")
        );
        assert_eq!(
            Err(PathNormalizationError::TrailingSlash),
            verify_normalized("foo/")
        );
        assert_eq!(
            Err(PathNormalizationError::EmptySegment),
            verify_normalized("foo//bar")
        );
        assert_eq!(
            Err(PathNormalizationError::DotSegment),
            verify_normalized("foo/./bar")
        );
        assert_eq!(
            Err(PathNormalizationError::DotDotSegment),
            verify_normalized("foo/..")
        );
    }

    #[test]
    fn test_file_name() {
        assert_eq!(None, file_name(""));
        assert_eq!(Some("foo"), file_name("foo"));
        assert_eq!(Some("baz"), file_name("foo/bar/baz"));
    }
}
