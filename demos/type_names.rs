//! Builds `type:access` labels at compile time and prints them.
//!
//! Each label joins the name of a type with the way a value of that type
//! is held (owned, borrowed or behind a raw pointer). All labels are
//! concatenated into one constant before anything runs.
//!
//! ```text
//! i32:value
//! i32:shared borrow
//! i32:unique borrow
//! i32:raw pointer
//! u8:value
//! ```

use car::FixedText;
use car::cat;

/// A short list of type names.
trait TypeName {
  const NAME: &'static str;
}

impl TypeName for i32 {
  const NAME: &'static str = "i32";
}

impl TypeName for u8 {
  const NAME: &'static str = "u8";
}

impl<T: TypeName> TypeName for &T {
  const NAME: &'static str = T::NAME;
}

impl<T: TypeName> TypeName for &mut T {
  const NAME: &'static str = T::NAME;
}

impl<T: TypeName> TypeName for *const T {
  const NAME: &'static str = T::NAME;
}

/// How a value is held, from owned to least-checked.
trait Access {
  const KIND: &'static str;
}

impl Access for i32 {
  const KIND: &'static str = "value";
}

impl Access for u8 {
  const KIND: &'static str = "value";
}

impl<T> Access for &T {
  const KIND: &'static str = "shared borrow";
}

impl<T> Access for &mut T {
  const KIND: &'static str = "unique borrow";
}

impl<T> Access for *const T {
  const KIND: &'static str = "raw pointer";
}

macro_rules! label {
  ($ty:ty) => {
    cat!(<$ty as TypeName>::NAME, ':', <$ty as Access>::KIND)
  };
}

const VALUE: FixedText<9> = label!(i32);
const SHARED: FixedText<17> = label!(&'static i32);
const UNIQUE: FixedText<17> = label!(&'static mut i32);
const RAW: FixedText<15> = label!(*const i32);
const BYTE: FixedText<8> = label!(u8);

fn main() {
  let output = cat!(VALUE, '\n', SHARED, '\n', UNIQUE, '\n', RAW, '\n', BYTE);
  println!("{output}");
}
