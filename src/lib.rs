// The engine cannot use unwraps.
#![deny(clippy::unwrap_used)]

// Asserts need to have a reason.
#![deny(clippy::missing_assert_message)]

// Gotta use all the results.
#![deny(unused_results)]

// Everything in here is read-only. There is no writer anywhere in this
// crate; v6 images are historical artifacts and we do not touch them.

pub mod error_types;
pub mod volume;
pub mod walk;
pub mod archive;
pub mod helpers;
