//! # car
//!
//! ### Fixed-length character arrays for compile-time strings
//!
//! `std`'s `[u8; N]` works as a compile-time string, but it is painful to
//! initialize from a string literal and has no notion of text. This crate
//! provides [`FixedText<N>`], a character array that can be built from
//! literals in `const` contexts, compared, printed, iterated and
//! destructured, plus a concatenation facility whose output length is the
//! sum of its inputs.
//!
//! ---
//!
//! ## [`FixedText`]
//!
//! ```rust
//! use car::{FixedText, car};
//!
//! // length deduced from the literal
//! const HELLO: FixedText<5> = car!("hello");
//!
//! // literal-style arrays must carry a zero terminator
//! let hi = FixedText::<2>::from_literal(b"hi\0")?;
//! assert!(FixedText::<2>::from_literal(b"hi!").is_err());
//!
//! assert_eq!(HELLO.to_string(), "hello");
//! assert_eq!(hi, *b"hi");
//! assert!(HELLO != hi);
//! # Ok::<(), car::InvalidInitializer>(())
//! ```
//!
//! ## Concatenation
//!
//! ```rust
//! use car::{FixedText, car, cat};
//!
//! const TYPE: FixedText<3> = car!("i32");
//! const LABEL: FixedText<9> = cat!(TYPE, ':', "value");
//!
//! assert_eq!(LABEL, "i32:value");
//! ```
//!
//! See the [`cat`] module for details.
//!
//! ---
//!
//! ## `no_std` Support
//!
//! The crate has no runtime requirements and works in `no_std`
//! environments.
//!
//! ---
//!
//! ## Features
//!
//! - `std`: Enables integration with the Rust standard library, including
//!   `FixedText::write_to` for `std::io` sinks. When disabled, which is the
//!   default, the crate operates in `no_std` mode.
//! - `serde`†: Enables serialization and deserialization support via Serde.
//! - `index`†: Implements `Index` and `IndexMut` for [`FixedText`].
//! - `is_variant`†: Adds `is_*` predicates to [`InvalidInitializer`].
//!
//! > † enabled by default

#![cfg_attr(not(any(test, feature = "std")), no_std)]

extern crate core;

pub mod cat;
pub mod fixed_text;

pub use fixed_text::*;
