//! Concatenation of fixed-length texts.
//!
//! The length of a [`FixedText`] is part of its type, so joining texts has
//! to produce a new type whose length is the sum of its inputs. Two flavors
//! are provided:
//!
//! - the [`cat!`](crate::cat!) macro, which works on constant operands and
//!   computes the output length for you;
//! - [`FixedText::concat`] and [`FixedText::push`], which work on run-time
//!   values and check an output length taken from the surrounding context.
//!
//! Neither adds separators or truncates: the output is the operands, in
//! order, back to back.
//!
//! ## Examples
//!
//! ```
//! use car::{FixedText, car, cat};
//!
//! const HELLO: FixedText<5> = car!("hello");
//! const WORLD: FixedText<5> = car!("world");
//!
//! let greeting = cat!(HELLO, ", ", WORLD, '!');
//! assert_eq!(greeting.len(), 13);
//! assert_eq!(greeting, "hello, world!");
//!
//! let hello: FixedText<5> = "hello".parse()?;
//! let shout: FixedText<6> = hello.push(b'!');
//! assert_eq!(shout, "hello!");
//! # Ok::<(), car::InvalidInitializer>(())
//! ```

use crate::FixedText;

/// Sums the lengths of `parts`.
///
/// Used by [`cat!`](crate::cat!) to compute the output length at compile
/// time.
pub const fn total_len(parts: &[&[u8]]) -> usize {
  let mut total = 0;
  let mut i = 0;
  while i < parts.len() {
    total += parts[i].len();
    i += 1;
  }
  total
}

impl<const N: usize> FixedText<N> {
  /// Builds a text from the concatenation of `parts`, left to right.
  ///
  /// # Panics
  ///
  /// Panics if the parts do not add up to exactly `N` characters. In a
  /// `const` context this is a compile-time error.
  pub const fn from_parts(parts: &[&[u8]]) -> Self {
    let mut buf = [0u8; N];
    let mut len = 0;
    let mut p = 0;
    while p < parts.len() {
      let part = parts[p];
      assert!(len + part.len() <= N, "parts are longer than the text");
      let mut i = 0;
      while i < part.len() {
        buf[len + i] = part[i];
        i += 1;
      }
      len += part.len();
      p += 1;
    }
    assert!(len == N, "parts are shorter than the text");
    Self::from_array(buf)
  }

  /// Appends `other`, producing a text of length `R`, which must equal
  /// `N + M`. `R` is normally inferred from the binding:
  ///
  /// ```rust
  /// # use car::*;
  /// let key = car!("key");
  /// let value = car!("=value");
  /// let pair: FixedText<9> = key.concat(&value);
  /// assert_eq!(pair, "key=value");
  /// ```
  ///
  /// A length that does not add up is rejected at compile time:
  ///
  /// ```compile_fail
  /// # use car::*;
  /// let pair: FixedText<8> = car!("key").concat(&car!("=value"));
  /// ```
  pub const fn concat<const M: usize, const R: usize>(
    &self,
    other: &FixedText<M>,
  ) -> FixedText<R> {
    const {
      assert!(R == N + M, "concat length must be the sum of its inputs")
    };
    FixedText::from_parts(&[self.as_bytes(), other.as_bytes()])
  }

  /// Appends a single character, producing a text of length `R`, which must
  /// equal `N + 1`.
  pub const fn push<const R: usize>(&self, c: u8) -> FixedText<R> {
    const {
      assert!(R == N + 1, "push length must be one more than the input")
    };
    FixedText::from_parts(&[self.as_bytes(), &[c]])
  }
}

/// Creates a [`FixedText`] from a string or character literal, deducing its
/// length from the literal's visible characters.
///
/// ```rust
/// use car::{FixedText, car};
///
/// const HELLO: FixedText<5> = car!("hello");
/// let nul = car!("");
/// let colon = car!(':');
///
/// assert_eq!(HELLO, "hello");
/// assert_eq!(nul.len(), 0);
/// assert_eq!(colon.len(), 1);
/// ```
#[macro_export]
macro_rules! car {
  ($lit:literal) => {{
    const BYTES: &[u8] = ::core::concat!($lit).as_bytes();
    $crate::FixedText::<{ BYTES.len() }>::from_parts(&[BYTES])
  }};
}

/// Concatenates constant operands into one [`FixedText`] whose length is the
/// sum of the operand lengths.
///
/// Operands are separated by commas and may be:
///
/// - `FixedText` constants (or any constant expression evaluating to one);
/// - `&str` constants;
/// - string or character literals. An ASCII character contributes one
///   character to the output; other characters contribute their UTF-8
///   encoding.
///
/// Operands must be usable in a `const` item, because the output length is
/// computed at compile time. For run-time values, use
/// [`FixedText::concat`] and [`FixedText::push`].
///
/// ```rust
/// use car::{FixedText, car, cat};
///
/// const NAME: FixedText<3> = car!("i32");
/// const KIND: &str = "value";
/// const LABEL: FixedText<9> = cat!(NAME, ':', KIND);
///
/// assert_eq!(LABEL, "i32:value");
/// assert_eq!(cat!().len(), 0);
/// ```
#[macro_export]
macro_rules! cat {
  () => {
    $crate::FixedText::<0>::new()
  };
  ($($parts:tt)+) => {
    $crate::__cat_parts!([] $($parts)+)
  };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __cat_parts {
  ([$($done:expr,)*] $(,)?) => {{
    const PARTS: &[&[u8]] = &[$($done),*];
    $crate::FixedText::<{ $crate::cat::total_len(PARTS) }>::from_parts(PARTS)
  }};
  ([$($done:expr,)*] $lit:literal $(, $($rest:tt)*)?) => {
    $crate::__cat_parts!(
      [$($done,)* ::core::concat!($lit).as_bytes(),] $($($rest)*)?
    )
  };
  ([$($done:expr,)*] $part:expr $(, $($rest:tt)*)?) => {
    $crate::__cat_parts!([$($done,)* $part.as_bytes(),] $($($rest)*)?)
  };
}

#[cfg(test)]
mod tests {
  use pretty_assertions::assert_eq;

  use crate::FixedText;

  const HELLO: FixedText<5> = crate::car!("hello");
  const WORLD: FixedText<5> = crate::car!("world");

  #[test]
  fn total_len_sums_parts() {
    assert_eq!(super::total_len(&[]), 0);
    assert_eq!(super::total_len(&[b"ab", b"", b"c"]), 3);
  }

  #[test]
  fn cat_length_is_sum_of_operands() {
    let joined = crate::cat!(HELLO, ' ', WORLD);
    assert_eq!(joined.len(), HELLO.len() + 1 + WORLD.len());
    assert_eq!(joined, "hello world");
  }

  #[test]
  fn cat_preserves_operand_order() {
    let ab = crate::cat!('a', 'b');
    let ba = crate::cat!('b', 'a');
    assert_eq!(ab, "ab");
    assert_eq!(ba, "ba");
    assert_eq!(crate::cat!(WORLD, HELLO), "worldhello");
  }

  #[test]
  fn cat_in_const_item() {
    const LINES: FixedText<12> = crate::cat!(HELLO, '\n', "dear", '\n', 'x');
    assert_eq!(LINES, "hello\ndear\nx");
    const _: () = assert!(LINES.eq_text(&crate::car!("hello\ndear\nx")));
  }

  #[test]
  fn cat_accepts_str_constants_and_trailing_comma() {
    const SEP: &str = ": ";
    let text = crate::cat!(HELLO, SEP, WORLD,);
    assert_eq!(text, "hello: world");
  }

  #[test]
  fn cat_handles_empty_operands() {
    const EMPTY: FixedText<0> = crate::car!("");
    assert_eq!(crate::cat!(EMPTY, EMPTY), FixedText::<0>::new());
    assert_eq!(crate::cat!(EMPTY, HELLO, ""), HELLO);
    assert_eq!(crate::cat!(), FixedText::<0>::new());
  }

  #[test]
  fn non_ascii_char_contributes_utf8_length() {
    let text = crate::cat!('é');
    assert_eq!(text.len(), 2);
    assert_eq!(text.as_str(), Ok("é"));
  }

  #[test]
  fn concat_and_push_match_cat() {
    let hello = HELLO;
    let world = WORLD;
    let spaced: FixedText<6> = hello.push(b' ');
    let joined: FixedText<11> = spaced.concat(&world);
    assert_eq!(joined, crate::cat!(HELLO, ' ', WORLD));
  }

  #[test]
  fn from_parts_joins_slices() {
    let text = FixedText::<4>::from_parts(&[b"ab", b"", b"cd"]);
    assert_eq!(text, "abcd");
  }

  #[test]
  #[should_panic(expected = "parts are shorter than the text")]
  fn from_parts_rejects_short_input() {
    let parts: &[&[u8]] = &[b"abc"];
    let _ = FixedText::<4>::from_parts(parts);
  }

  #[test]
  #[should_panic(expected = "parts are longer than the text")]
  fn from_parts_rejects_long_input() {
    let parts: &[&[u8]] = &[b"abcde"];
    let _ = FixedText::<4>::from_parts(parts);
  }
}
