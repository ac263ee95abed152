//! Uplift arbitrary errors into domain-specific error types.
//!
//! A domain error type implements [`Uplifting`] to declare how any underlying error is absorbed into
//! its own representation. The provided [`Uplifting::uplift`] and [`Uplifting::uplift_async`] helpers
//! run a unit of work and perform that conversion when it fails, so the failure channel at the call
//! site is statically the domain type.
//!
//! # Example
//!
//! ```
//! use std::num::ParseIntError;
//! use uplift::{BoxError, Uplifting};
//!
//! #[derive(Debug)]
//! enum ParityError {
//!     OddNumber,
//!     Uplifted(BoxError),
//! }
//!
//! impl Uplifting for ParityError {
//!     fn uplifted(error: BoxError) -> Self {
//!         Self::Uplifted(error)
//!     }
//! }
//!
//! fn even(text: &str) -> Result<i32, ParityError> {
//!     let number = ParityError::uplift(|| text.parse::<i32>())?;
//!
//!     if number % 2 != 0 {
//!         return Err(ParityError::OddNumber);
//!     }
//!
//!     Ok(number)
//! }
//!
//! assert_eq!(even("2").unwrap(), 2);
//! assert!(matches!(even("21"), Err(ParityError::OddNumber)));
//!
//! if let Err(ParityError::Uplifted(error)) = even("not a number") {
//!     assert!(error.downcast_ref::<ParseIntError>().is_some());
//! } else {
//!     panic!("expected an uplifted error");
//! }
//! ```

mod ext;
mod future;
mod uplifting;

pub use ext::{UpliftFutureExt, UpliftResultExt};
pub use future::{Uplift, UpliftErr};
pub use uplifting::{BoxError, Uplifting};

use cfg_if::cfg_if;

cfg_if! {
    if #[cfg(feature = "derive")] {
        /// Derives [`Uplifting`] for an enumeration or a single-field structure.
        ///
        /// # Remarks
        ///
        /// Exactly one enumeration variant must be marked `#[uplifted]`. The variant may be a unit
        /// variant, which discards the underlying error, or hold a single field constructed with
        /// [`From::from`] from a [`BoxError`]. A structure must have exactly one field.
        ///
        /// By default, an underlying error that is already the domain type is returned as-is rather
        /// than wrapped again, which requires the type to implement [`std::error::Error`]. Specify
        /// `#[uplifted(rewrap)]` on the variant, or `#[uplifting(rewrap)]` on a structure, to always
        /// wrap.
        pub use uplift_macros::Uplifting;
    }
}
