//! Thread-backed generators: write an iterator as a routine that `yield`s.
//!
//! A [`Producer`] pushes values out through an [`Emitter`], at its own pace and
//! with its own control flow (loops, recursion, blocking I/O…); a [`Generator`]
//! turns that into a plain pull-based [`Iterator`]. Each generator runs its
//! producer on a dedicated worker thread, and hands values over one at a time
//! through a rendezvous of capacity one: the producer is never more than one
//! value ahead of the consumer.
//!
//! ```rust
//! use ::yield_gen::prelude::*;
//!
//! #[generator(String)]
//! fn deck ()
//! {
//!     for suit in ["Clubs", "Diamonds", "Hearts", "Spades"].iter() {
//!         for rank in (2 ..= 10).map(|n| n.to_string())
//!             .chain(["Jack", "Queen", "King", "Ace"].iter().map(|&s| String::from(s)))
//!         {
//!             yield_!(format!("{} of {}", rank, suit));
//!         }
//!     }
//! }
//!
//! let cards: Vec<String> = deck().collect();
//! assert_eq!(cards.len(), 52);
//! assert_eq!(cards[12], "Ace of Clubs");
//! ```
//!
//! Dropping a [`Generator`] early cancels its producer cooperatively: its next
//! `emit` returns `false`. [`active_workers()`] tells how many worker threads
//! are alive in the process.
//!
//! Ready-made producers for lines of files and command outputs, and for regex
//! matches, live in [`sources`].

#![cfg_attr(feature = "better-docs",
    feature(doc_cfg),
)]
#![warn(
    future_incompatible,
    rust_2018_compatibility,
    missing_docs,
    clippy::cargo,
    clippy::pedantic,
)]
#![deny(
    unused_must_use,
)]
#![doc(test(attr(deny(warnings))))]

// So that `#[generator]` expansions resolve within this crate too.
extern crate self as yield_gen;

#[path = "public_prelude.rs"]
pub
mod prelude;

#[macro_use]
mod utils;

pub use self::builder::Builder;
mod builder;

pub use self::counter::active_workers;
mod counter;

pub use self::error::{GeneratorError, Result};
mod error;

pub use self::generator::Generator;
mod generator;

pub use self::producer::Producer;
mod producer;

pub
mod sources;

pub use self::worker::Emitter;
mod worker;

pub use ::yield_gen_proc_macros::generator;

#[cfg(test)]
mod tests;

/// `#[generator]` needs the type of the yielded items.
/// ```compile_fail
/// use ::yield_gen::prelude::*;
///
/// #[generator]
/// fn naturals ()
/// {
///     for n in 0_u32 .. {
///         yield_!(n);
///     }
/// }
/// ```
///
/// Methods taking `self` are not supported.
/// ```compile_fail
/// use ::yield_gen::prelude::*;
///
/// struct Range(u8, u8);
///
/// impl Range {
///     #[generator(u8)]
///     fn iter (&self)
///     {
///         for n in self.0 .. self.1 {
///             yield_!(n);
///         }
///     }
/// }
/// ```
///
/// Nor are `async fn`s.
/// ```compile_fail
/// use ::yield_gen::prelude::*;
///
/// #[generator(u8)]
/// async fn countdown ()
/// {
///     for n in (0 .. 3).rev() {
///         yield_!(n);
///     }
/// }
/// ```
///
/// The return type is the macro's to write.
/// ```compile_fail
/// use ::yield_gen::prelude::*;
///
/// #[generator(u8)]
/// fn countdown ()
///   -> ::yield_gen::Generator<u8>
/// {
///     for n in (0 .. 3).rev() {
///         yield_!(n);
///     }
/// }
/// ```
fn _compile_error_test() {}
