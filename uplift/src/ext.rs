use crate::{uplifting::convert, BoxError, UpliftErr, Uplifting};
use futures::{TryFuture, TryFutureExt};

/// Provides extension methods to uplift the error of a [`Result`].
pub trait UpliftResultExt<T, E> {
    /// Uplifts the error, if any, into the specified domain error type.
    ///
    /// # Remarks
    ///
    /// This is equivalent to [`Uplifting::uplift`] for a result that has already been produced.
    fn uplift_err<D: Uplifting>(self) -> Result<T, D>;
}

impl<T, E: Into<BoxError>> UpliftResultExt<T, E> for Result<T, E> {
    #[inline]
    fn uplift_err<D: Uplifting>(self) -> Result<T, D> {
        self.map_err(convert)
    }
}

/// Provides extension methods to uplift the error of a fallible [future](std::future::Future).
pub trait UpliftFutureExt: TryFuture + Sized {
    /// Uplifts the error, if any, into the specified domain error type when the future completes.
    ///
    /// # Remarks
    ///
    /// This is equivalent to [`Uplifting::uplift_async`] for a future that has already been created.
    fn uplift_err<D: Uplifting>(self) -> UpliftErr<Self, Self::Error, D>;
}

impl<F> UpliftFutureExt for F
where
    F: TryFuture,
    F::Error: Into<BoxError>,
{
    #[inline]
    fn uplift_err<D: Uplifting>(self) -> UpliftErr<Self, Self::Error, D> {
        self.map_err(convert::<D, Self::Error> as fn(Self::Error) -> D)
    }
}
