//! # `inlay` - Inline-Storage Optional Container
//!
//! A single-purpose data-structure crate: [`Optional<T>`], a value holder
//! that may or may not contain a `T`, keeping the payload **inline** in a
//! fixed-size slot sized and aligned for the payload type. No separate heap
//! allocation, no "null" sentinel, and no default-construction requirement
//! on the payload: the container constructs the payload in place when it
//! engages and destroys it in place when it disengages.
//!
//! ## Design
//!
//! - **Two states**: engaged (slot holds exactly one live payload) and
//!   disengaged (slot holds nothing). Every transition runs the payload's
//!   own construction or destruction; nothing is bypassed.
//! - **Stratified layout**: an unsafe storage layer (`RawSlot`, crate
//!   private) beneath the safe lifecycle API, concentrating the unsafe code
//!   in one small module.
//! - **Four-way assignment contract**: copy-assignment
//!   ([`Clone::clone_from`]) and move-assignment
//!   ([`Optional::move_from`]) handle all four combinations of
//!   source/destination occupancy — assign payload-to-payload, construct in
//!   place, destroy, or no-op.
//! - **Checked and unchecked access**: [`Optional::value`] validates
//!   occupancy and reports [`BadOptionalAccess`] on a disengaged container;
//!   the `unsafe` accessors ([`Optional::get_unchecked`] and friends)
//!   perform zero checks and leave occupancy as a caller-guaranteed
//!   precondition.
//!
//! ## Example
//!
//! ```rust
//! use inlay::Optional;
//!
//! let mut opt: Optional<String> = Optional::new();
//! assert!(!opt.has_value());
//!
//! opt.set(String::from("hello"));
//! assert_eq!(opt.value().unwrap(), "hello");
//!
//! // Emplace always destroys the old payload and constructs a fresh one.
//! let payload = opt.emplace_with(|| String::from("fresh"));
//! payload.push_str(" payload");
//! assert_eq!(opt.take(), Some(String::from("fresh payload")));
//! assert!(!opt.has_value());
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod optional;

pub use optional::{BadOptionalAccess, Optional};
