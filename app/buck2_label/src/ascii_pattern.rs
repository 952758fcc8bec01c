/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 *
 * This source code is dual-licensed under either the MIT license found in the
 * LICENSE-MIT file in the root directory of this source tree or the Apache
 * License, Version 2.0 found in the LICENSE-APACHE file in the root directory
 * of this source tree. You may select, at your option, one of the
 * above-listed licenses.
 */

/// Set of ASCII characters, buildable in `const` context.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct AsciiCharSet {
    bits: [u64; 2],
}

impl AsciiCharSet {
    pub const EMPTY: AsciiCharSet = AsciiCharSet { bits: [0, 0] };

    /// `A-Z`, `a-z` and `0-9`.
    pub const ALPHANUMERIC: AsciiCharSet = AsciiCharSet::range(b'a', b'z')
        .union(AsciiCharSet::range(b'A', b'Z'))
        .union(AsciiCharSet::range(b'0', b'9'));

    /// Panics (at compile time when used in a constant) if `chars` is not ASCII.
    pub const fn new(chars: &str) -> AsciiCharSet {
        let bytes = chars.as_bytes();
        let mut set = AsciiCharSet::EMPTY;
        let mut i = 0;
        while i < bytes.len() {
            set = set.with_byte(bytes[i]);
            i += 1;
        }
        set
    }

    /// Inclusive range.
    pub const fn range(first: u8, last: u8) -> AsciiCharSet {
        let mut set = AsciiCharSet::EMPTY;
        let mut b = first;
        while b <= last {
            set = set.with_byte(b);
            b += 1;
        }
        set
    }

    pub const fn union(self, other: AsciiCharSet) -> AsciiCharSet {
        AsciiCharSet {
            bits: [self.bits[0] | other.bits[0], self.bits[1] | other.bits[1]],
        }
    }

    const fn with_byte(self, b: u8) -> AsciiCharSet {
        assert!(b < 128, "not an ASCII character");
        let mut bits = self.bits;
        bits[(b / 64) as usize] |= 1u64 << (b % 64);
        AsciiCharSet { bits }
    }

    #[inline]
    pub fn contains_byte(&self, b: u8) -> bool {
        b < 128 && self.bits[(b / 64) as usize] & (1u64 << (b % 64)) != 0
    }

    #[inline]
    pub fn contains(&self, c: char) -> bool {
        c.is_ascii() && self.contains_byte(c as u8)
    }

    /// First character of `s` not in this set.
    pub fn find_not_contained(&self, s: &str) -> Option<char> {
        s.chars().find(|c| !self.contains(*c))
    }
}

/// Single ASCII character, matched bytewise.
#[derive(Copy, Clone, Debug)]
pub struct AsciiChar(u8);

impl AsciiChar {
    pub const fn new(c: char) -> AsciiChar {
        assert!(c.is_ascii(), "not an ASCII character");
        AsciiChar(c as u8)
    }
}

/// Two ASCII characters, like `//`.
#[derive(Copy, Clone, Debug)]
pub struct AsciiStr2([u8; 2]);

impl AsciiStr2 {
    pub const fn new(s: &str) -> AsciiStr2 {
        let b = s.as_bytes();
        assert!(b.len() == 2 && b[0].is_ascii() && b[1].is_ascii());
        AsciiStr2([b[0], b[1]])
    }
}

/// Needle for the `*_ascii` helpers. Matches always start and end on a char boundary.
pub trait AsciiPattern: Copy {
    fn first_index_in(self, s: &str) -> Option<usize>;

    fn byte_len(self) -> usize;

    fn is_prefix_of(self, s: &str) -> bool;
}

impl AsciiPattern for AsciiChar {
    #[inline]
    fn first_index_in(self, s: &str) -> Option<usize> {
        s.bytes().position(|b| b == self.0)
    }

    #[inline]
    fn byte_len(self) -> usize {
        1
    }

    #[inline]
    fn is_prefix_of(self, s: &str) -> bool {
        s.as_bytes().first() == Some(&self.0)
    }
}

impl AsciiPattern for AsciiStr2 {
    #[inline]
    fn first_index_in(self, s: &str) -> Option<usize> {
        s.as_bytes().windows(2).position(|w| w == self.0)
    }

    #[inline]
    fn byte_len(self) -> usize {
        2
    }

    #[inline]
    fn is_prefix_of(self, s: &str) -> bool {
        s.as_bytes().starts_with(&self.0)
    }
}

/// Split at the first occurrence of `pat`, dropping it.
pub fn split1_opt_ascii(s: &str, pat: impl AsciiPattern) -> Option<(&str, &str)> {
    let i = pat.first_index_in(s)?;
    Some((&s[..i], &s[i + pat.byte_len()..]))
}

pub fn strip_prefix_ascii(s: &str, pat: impl AsciiPattern) -> Option<&str> {
    if pat.is_prefix_of(s) {
        Some(&s[pat.byte_len()..])
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use crate::ascii_pattern::split1_opt_ascii;
    use crate::ascii_pattern::strip_prefix_ascii;
    use crate::ascii_pattern::AsciiChar;
    use crate::ascii_pattern::AsciiCharSet;
    use crate::ascii_pattern::AsciiStr2;

    #[test]
    fn test_contains() {
        const SET: AsciiCharSet = AsciiCharSet::ALPHANUMERIC.union(AsciiCharSet::new("_/"));
        for c in ['a', 'z', 'A', 'Z', '0', '9', '_', '/'] {
            assert!(SET.contains(c), "{c}");
        }
        for c in [':', ' ', '\0', '\x7f', 'é', '='] {
            assert!(!SET.contains(c), "{c}");
        }
    }

    #[test]
    fn test_find_not_contained() {
        let set = AsciiCharSet::new("abc");
        assert_eq!(None, set.find_not_contained("cab"));
        assert_eq!(Some('d'), set.find_not_contained("abdc"));
        assert_eq!(None, AsciiCharSet::EMPTY.find_not_contained(""));
    }

    #[test]
    fn test_split1_opt_ascii() {
        assert_eq!(Some(("a", "b:c")), split1_opt_ascii("a:b:c", AsciiChar::new(':')));
        assert_eq!(Some(("", "x")), split1_opt_ascii(":x", AsciiChar::new(':')));
        assert_eq!(None, split1_opt_ascii("abc", AsciiChar::new(':')));
        assert_eq!(
            Some(("repo", "a//b")),
            split1_opt_ascii("repo//a//b", AsciiStr2::new("//"))
        );
        assert_eq!(None, split1_opt_ascii("a/b/", AsciiStr2::new("//")));
        assert_eq!(Some(("é", "ü")), split1_opt_ascii("é:ü", AsciiChar::new(':')));
    }

    #[test]
    fn test_strip_prefix_ascii() {
        assert_eq!(Some("repo"), strip_prefix_ascii("@repo", AsciiChar::new('@')));
        assert_eq!(None, strip_prefix_ascii("", AsciiChar::new('@')));
        assert_eq!(Some("a:b"), strip_prefix_ascii("//a:b", AsciiStr2::new("//")));
        assert_eq!(None, strip_prefix_ascii("/a", AsciiStr2::new("//")));
    }
}
