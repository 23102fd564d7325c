use core::borrow::Borrow;
use core::borrow::BorrowMut;
use core::cmp::Ordering;
use core::convert::AsMut;
use core::convert::AsRef;
use core::convert::From;
use core::convert::TryFrom;
use core::ffi::CStr;
use core::fmt;
use core::fmt::Debug;
use core::fmt::Display;
use core::fmt::Formatter;
use core::fmt::Write;
use core::hash::Hash;
use core::hash::Hasher;
use core::ops::Deref;
use core::ops::DerefMut;
use core::ops::Range;
use core::ptr;
use core::str;
use core::str::FromStr;

/// Error returned when an initializer cannot be turned into a
/// [`FixedText`] of the requested length.
///
/// # Example
///
/// ```rust
/// # use car::*;
/// let result = FixedText::<4>::from_literal(b"hello");
/// assert_eq!(result, Err(InvalidInitializer::NotZeroTerminated));
///
/// let result = FixedText::<5>::try_from_bytes(b"hi");
/// assert_eq!(
///   result,
///   Err(InvalidInitializer::LengthMismatch { expected: 5, found: 2 }),
/// );
/// ```
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error,
)]
#[cfg_attr(feature = "is_variant", derive(derive_more::IsVariant))]
pub enum InvalidInitializer {
  /// A literal-style initializer has a non-zero value in its trailing
  /// terminator slot.
  #[display("not zero terminated")]
  NotZeroTerminated,
  /// The initializer does not hold the number of characters the target
  /// length requires.
  #[display("expected {expected} characters, found {found}")]
  LengthMismatch { expected: usize, found: usize },
}

/// A fixed-length array of `N` characters, usable as a compile-time string.
///
/// `FixedText<N>` is `repr(transparent)` over `[u8; N]`, so it can be viewed
/// as (and compared against) a plain byte array of the same length without
/// copying. The length is part of the type: a `FixedText<5>` never becomes a
/// `FixedText<6>`, and no conversions exist between the two.
///
/// Every constructor and read accessor is a `const fn`, which makes the type
/// usable in `const` items, array lengths and const generic arguments.
///
/// # Example
///
/// ```rust
/// use car::{FixedText, car};
///
/// const HELLO: FixedText<5> = car!("hello");
///
/// assert_eq!(HELLO.len(), 5);
/// assert_eq!(HELLO, "hello");
/// assert_eq!(HELLO.to_string(), "hello");
///
/// let [h, e, l, _, o] = HELLO.into_array();
/// assert_eq!([h, e, l, o], *b"helo");
/// ```
#[derive(Clone, Copy)]
#[cfg_attr(
  feature = "index",
  derive(derive_more::Index, derive_more::IndexMut)
)]
#[repr(transparent)]
pub struct FixedText<const N: usize>([u8; N]);

impl<const N: usize> FixedText<N> {
  /// The number of characters held by every `FixedText<N>`.
  pub const LEN: usize = N;

  /// Creates a `FixedText` with every slot set to zero.
  #[inline]
  pub const fn new() -> Self {
    Self([0u8; N])
  }

  /// Creates a `FixedText` from an explicit list of characters.
  ///
  /// No terminator is expected or checked: all `N` values are stored.
  #[inline]
  pub const fn from_array(array: [u8; N]) -> Self {
    Self(array)
  }

  /// Views a plain byte array as a `FixedText` of the same length, without
  /// copying.
  #[inline]
  pub const fn from_array_ref(array: &[u8; N]) -> &Self {
    // SAFETY: `FixedText<N>` is `repr(transparent)` over `[u8; N]`.
    unsafe { &*ptr::from_ref(array).cast::<Self>() }
  }

  /// Creates a `FixedText` from a zero-terminated, literal-style array.
  ///
  /// The array must hold exactly `N + 1` values and the last one must be
  /// zero. The first `N` values are copied; the terminator is not stored.
  ///
  /// # Errors
  ///
  /// - [`InvalidInitializer::LengthMismatch`] if `M != N + 1`.
  /// - [`InvalidInitializer::NotZeroTerminated`] if `lit[N]` is non-zero.
  ///
  /// # Example
  ///
  /// ```rust
  /// # use car::*;
  /// let text = FixedText::<2>::from_literal(b"hi\0")?;
  /// assert_eq!(text, *b"hi");
  ///
  /// let err = FixedText::<1>::from_literal(&[b'a', b'b']);
  /// assert_eq!(err, Err(InvalidInitializer::NotZeroTerminated));
  /// # Ok::<(), InvalidInitializer>(())
  /// ```
  pub const fn from_literal<const M: usize>(
    lit: &[u8; M],
  ) -> Result<Self, InvalidInitializer> {
    if M != N + 1 {
      return Err(InvalidInitializer::LengthMismatch {
        expected: N + 1,
        found:    M,
      });
    }
    if lit[N] != 0 {
      return Err(InvalidInitializer::NotZeroTerminated);
    }
    let mut buf = [0u8; N];
    let mut i = 0;
    while i < N {
      buf[i] = lit[i];
      i += 1;
    }
    Ok(Self(buf))
  }

  /// Creates a `FixedText` from a slice of exactly `N` characters.
  ///
  /// # Errors
  ///
  /// Returns [`InvalidInitializer::LengthMismatch`] if `bytes.len() != N`.
  pub const fn try_from_bytes(
    bytes: &[u8],
  ) -> Result<Self, InvalidInitializer> {
    if bytes.len() != N {
      return Err(InvalidInitializer::LengthMismatch {
        expected: N,
        found:    bytes.len(),
      });
    }
    let mut buf = [0u8; N];
    let mut i = 0;
    while i < N {
      buf[i] = bytes[i];
      i += 1;
    }
    Ok(Self(buf))
  }

  /// Returns the number of characters, which is always `N`.
  #[inline]
  pub const fn len(&self) -> usize {
    N
  }

  /// Returns `true` if `N` is zero.
  #[inline]
  pub const fn is_empty(&self) -> bool {
    N == 0
  }

  /// Returns the character at `index`.
  ///
  /// # Panics
  ///
  /// Panics if `index >= N`.
  #[inline]
  pub const fn at(&self, index: usize) -> u8 {
    self.0[index]
  }

  /// Returns the character at position `I`, checked at compile time.
  ///
  /// ```rust
  /// # use car::*;
  /// const A: FixedText<1> = car!("a");
  /// const FIRST: u8 = A.slot::<0>();
  /// assert_eq!(FIRST, b'a');
  /// ```
  ///
  /// Asking for a slot past the end fails to compile:
  ///
  /// ```compile_fail
  /// # use car::*;
  /// const A: FixedText<1> = car!("a");
  /// const SECOND: u8 = A.slot::<1>();
  /// ```
  #[inline]
  pub const fn slot<const I: usize>(&self) -> u8 {
    const { assert!(I < N, "slot index out of bounds") };
    self.0[I]
  }

  /// Returns the first character, or `None` if `N` is zero.
  #[inline]
  pub const fn first(&self) -> Option<&u8> {
    self.as_bytes().first()
  }

  /// Returns the last character, or `None` if `N` is zero.
  #[inline]
  pub const fn last(&self) -> Option<&u8> {
    self.as_bytes().last()
  }

  /// Returns the characters as a slice.
  #[inline]
  pub const fn as_bytes(&self) -> &[u8] {
    &self.0
  }

  /// Returns the characters as a mutable slice.
  #[inline]
  pub const fn as_mut_bytes(&mut self) -> &mut [u8] {
    &mut self.0
  }

  /// Views the text as a plain array. The returned reference points at the
  /// same storage as `self`.
  #[inline]
  pub const fn as_array(&self) -> &[u8; N] {
    &self.0
  }

  /// Views the text as a plain mutable array.
  #[inline]
  pub const fn as_mut_array(&mut self) -> &mut [u8; N] {
    &mut self.0
  }

  /// Consumes the text and returns its characters, ready to be
  /// destructured into `N` bindings.
  #[inline]
  pub const fn into_array(self) -> [u8; N] {
    self.0
  }

  /// Returns a raw pointer to the first character.
  #[inline]
  pub const fn as_ptr(&self) -> *const u8 {
    self.0.as_ptr()
  }

  /// Returns the half-open `begin..end` pointer range spanning the text.
  #[inline]
  pub const fn as_ptr_range(&self) -> Range<*const u8> {
    self.as_bytes().as_ptr_range()
  }

  /// Returns the text as a string slice if it is valid UTF-8.
  ///
  /// # Errors
  ///
  /// Returns the [`str::Utf8Error`] describing the first invalid sequence.
  #[inline]
  pub const fn as_str(&self) -> Result<&str, str::Utf8Error> {
    str::from_utf8(&self.0)
  }

  /// Compares against a text of any length. Texts of different lengths are
  /// never equal; texts of the same length compare character by character.
  ///
  /// This is the `const` counterpart of the [`PartialEq`] implementation.
  ///
  /// ```rust
  /// # use car::*;
  /// const HI: FixedText<2> = car!("hi");
  /// const _: () = assert!(HI.eq_text(&car!("hi")));
  /// const _: () = assert!(!HI.eq_text(&car!("hi!")));
  /// ```
  pub const fn eq_text<const M: usize>(&self, other: &FixedText<M>) -> bool {
    if N != M {
      return false;
    }
    let mut i = 0;
    while i < N {
      if self.0[i] != other.0[i] {
        return false;
      }
      i += 1;
    }
    true
  }

  /// Writes the raw characters to `writer`, with no separator and no
  /// terminator.
  ///
  /// # Errors
  ///
  /// Propagates any error returned by the writer.
  #[cfg(feature = "std")]
  pub fn write_to<W>(&self, writer: &mut W) -> std::io::Result<()>
  where
    W: std::io::Write + ?Sized,
  {
    writer.write_all(&self.0)
  }
}

impl<const N: usize> Default for FixedText<N> {
  #[inline(always)]
  fn default() -> Self {
    Self::new()
  }
}

impl<const N: usize> Display for FixedText<N> {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    for chunk in self.0.utf8_chunks() {
      f.write_str(chunk.valid())?;
      if !chunk.invalid().is_empty() {
        f.write_char(char::REPLACEMENT_CHARACTER)?;
      }
    }
    Ok(())
  }
}

impl<const N: usize> Debug for FixedText<N> {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "FixedText(\"{}\")", self.0.escape_ascii())
  }
}

impl<const N: usize> Deref for FixedText<N> {
  type Target = [u8; N];

  #[inline(always)]
  fn deref(&self) -> &[u8; N] {
    &self.0
  }
}

impl<const N: usize> DerefMut for FixedText<N> {
  #[inline(always)]
  fn deref_mut(&mut self) -> &mut [u8; N] {
    &mut self.0
  }
}

impl<const N: usize> AsRef<[u8; N]> for FixedText<N> {
  #[inline(always)]
  fn as_ref(&self) -> &[u8; N] {
    &self.0
  }
}

impl<const N: usize> AsRef<[u8]> for FixedText<N> {
  #[inline(always)]
  fn as_ref(&self) -> &[u8] {
    &self.0
  }
}

impl<const N: usize> AsMut<[u8]> for FixedText<N> {
  #[inline(always)]
  fn as_mut(&mut self) -> &mut [u8] {
    &mut self.0
  }
}

impl<const N: usize> Borrow<[u8]> for FixedText<N> {
  #[inline(always)]
  fn borrow(&self) -> &[u8] {
    &self.0
  }
}

impl<const N: usize> BorrowMut<[u8]> for FixedText<N> {
  #[inline(always)]
  fn borrow_mut(&mut self) -> &mut [u8] {
    &mut self.0
  }
}

impl<const N: usize> From<[u8; N]> for FixedText<N> {
  #[inline(always)]
  fn from(array: [u8; N]) -> Self {
    Self(array)
  }
}

impl<const N: usize> From<FixedText<N>> for [u8; N] {
  #[inline(always)]
  fn from(text: FixedText<N>) -> Self {
    text.0
  }
}

impl<const N: usize, const M: usize> TryFrom<&[u8; M]> for FixedText<N> {
  type Error = InvalidInitializer;

  #[inline(always)]
  fn try_from(lit: &[u8; M]) -> Result<Self, InvalidInitializer> {
    Self::from_literal(lit)
  }
}

impl<const N: usize> TryFrom<&str> for FixedText<N> {
  type Error = InvalidInitializer;

  #[inline(always)]
  fn try_from(s: &str) -> Result<Self, InvalidInitializer> {
    Self::try_from_bytes(s.as_bytes())
  }
}

impl<const N: usize> TryFrom<&CStr> for FixedText<N> {
  type Error = InvalidInitializer;

  #[inline(always)]
  fn try_from(s: &CStr) -> Result<Self, InvalidInitializer> {
    Self::try_from_bytes(s.to_bytes())
  }
}

impl<const N: usize> FromStr for FixedText<N> {
  type Err = InvalidInitializer;

  #[inline(always)]
  fn from_str(s: &str) -> Result<Self, InvalidInitializer> {
    Self::try_from_bytes(s.as_bytes())
  }
}

impl<const N: usize> IntoIterator for FixedText<N> {
  type IntoIter = core::array::IntoIter<u8, N>;
  type Item = u8;

  #[inline(always)]
  fn into_iter(self) -> Self::IntoIter {
    self.0.into_iter()
  }
}

impl<'t, const N: usize> IntoIterator for &'t FixedText<N> {
  type IntoIter = core::slice::Iter<'t, u8>;
  type Item = &'t u8;

  #[inline(always)]
  fn into_iter(self) -> Self::IntoIter {
    self.0.iter()
  }
}

impl<'t, const N: usize> IntoIterator for &'t mut FixedText<N> {
  type IntoIter = core::slice::IterMut<'t, u8>;
  type Item = &'t mut u8;

  #[inline(always)]
  fn into_iter(self) -> Self::IntoIter {
    self.0.iter_mut()
  }
}

impl<const N: usize> Hash for FixedText<N> {
  #[inline(always)]
  fn hash<H: Hasher>(&self, state: &mut H) {
    self.0.hash(state);
  }
}

impl<const N: usize, const M: usize> PartialEq<FixedText<M>> for FixedText<N> {
  #[inline(always)]
  fn eq(&self, other: &FixedText<M>) -> bool {
    self.eq_text(other)
  }
}

impl<const N: usize> Eq for FixedText<N> {}

impl<const N: usize, const M: usize> PartialEq<[u8; M]> for FixedText<N> {
  #[inline(always)]
  fn eq(&self, other: &[u8; M]) -> bool {
    self.eq_text(FixedText::from_array_ref(other))
  }
}

impl<const N: usize, const M: usize> PartialEq<FixedText<M>> for [u8; N] {
  #[inline(always)]
  fn eq(&self, other: &FixedText<M>) -> bool {
    FixedText::from_array_ref(self).eq_text(other)
  }
}

impl<const N: usize> PartialEq<str> for FixedText<N> {
  #[inline(always)]
  fn eq(&self, other: &str) -> bool {
    self.as_bytes() == other.as_bytes()
  }
}

impl<const N: usize> PartialEq<&str> for FixedText<N> {
  #[inline(always)]
  fn eq(&self, other: &&str) -> bool {
    self.as_bytes() == other.as_bytes()
  }
}

impl<const N: usize> PartialEq<FixedText<N>> for str {
  #[inline(always)]
  fn eq(&self, other: &FixedText<N>) -> bool {
    self.as_bytes() == other.as_bytes()
  }
}

impl<const N: usize> PartialEq<FixedText<N>> for &str {
  #[inline(always)]
  fn eq(&self, other: &FixedText<N>) -> bool {
    self.as_bytes() == other.as_bytes()
  }
}

impl<const N: usize> PartialOrd for FixedText<N> {
  #[inline(always)]
  fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
    Some(self.cmp(other))
  }
}

impl<const N: usize> Ord for FixedText<N> {
  #[inline(always)]
  fn cmp(&self, other: &Self) -> Ordering {
    self.0.cmp(&other.0)
  }
}

#[cfg(feature = "serde")]
mod serde_impl {
  use core::fmt;

  use serde::Deserialize;
  use serde::Deserializer;
  use serde::Serialize;
  use serde::Serializer;
  use serde::de;
  use serde::de::Error as _;

  use super::*;

  impl<const N: usize> Serialize for FixedText<N> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
      S: Serializer,
    {
      match self.as_str() {
        Ok(s) => serializer.serialize_str(s),
        Err(_) => serializer.serialize_bytes(self.as_bytes()),
      }
    }
  }

  struct FixedTextVisitor<const N: usize>;

  impl<'de, const N: usize> de::Visitor<'de> for FixedTextVisitor<N> {
    type Value = FixedText<N>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
      write!(formatter, "a string or byte sequence of length {N}")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
      E: de::Error,
    {
      self.visit_bytes(v.as_bytes())
    }

    fn visit_bytes<E>(self, v: &[u8]) -> Result<Self::Value, E>
    where
      E: de::Error,
    {
      FixedText::try_from_bytes(v)
        .map_err(|_| E::invalid_length(v.len(), &self))
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
      A: de::SeqAccess<'de>,
    {
      let mut buf = [0u8; N];
      for (i, slot) in buf.iter_mut().enumerate() {
        *slot = seq
          .next_element()?
          .ok_or_else(|| A::Error::invalid_length(i, &self))?;
      }
      if seq.next_element::<u8>()?.is_some() {
        return Err(A::Error::invalid_length(N + 1, &self));
      }
      Ok(FixedText(buf))
    }
  }

  impl<'de, const N: usize> Deserialize<'de> for FixedText<N> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
      D: Deserializer<'de>,
    {
      deserializer.deserialize_bytes(FixedTextVisitor::<N>)
    }
  }
}
