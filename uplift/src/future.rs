use crate::{uplifting::convert, BoxError, Uplifting};
use futures::{future::MapErr, TryFutureExt};
use std::{
    fmt::{self, Debug, Formatter},
    future::Future,
    pin::Pin,
    task::{Context, Poll},
};

/// Represents a future that uplifts the error of an existing fallible future.
///
/// # Remarks
///
/// The wrapped future is the only point of suspension. When it completes with an error `E`, the
/// error is converted into the domain error type `D` before the future itself completes. Dropping
/// the future cancels the wrapped future and performs no conversion.
pub type UpliftErr<Fut, E, D> = MapErr<Fut, fn(E) -> D>;

/// Represents a future that runs an asynchronous operation and uplifts its error, if any.
///
/// # Remarks
///
/// The operation is not invoked until the future is first polled. Dropping the future before then
/// never invokes the operation; dropping it afterward cancels the operation. In either case, no
/// conversion is performed.
#[must_use = "futures do nothing unless you `.await` or poll them"]
pub struct Uplift<F, Fut, E, D> {
    operation: Option<F>,
    future: Option<Pin<Box<UpliftErr<Fut, E, D>>>>,
}

impl<F, Fut, E, D> Uplift<F, Fut, E, D> {
    pub(crate) fn new(operation: F) -> Self {
        Self {
            operation: Some(operation),
            future: None,
        }
    }
}

// the operation is never pinned and the running future is boxed
impl<F, Fut, E, D> Unpin for Uplift<F, Fut, E, D> {}

impl<F, Fut, E, D> Debug for Uplift<F, Fut, E, D> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Uplift")
            .field("started", &self.operation.is_none())
            .finish()
    }
}

impl<F, Fut, T, E, D> Future for Uplift<F, Fut, E, D>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Into<BoxError>,
    D: Uplifting,
{
    type Output = Result<T, D>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.get_mut();

        if let Some(operation) = this.operation.take() {
            let future = operation().map_err(convert::<D, E> as fn(E) -> D);
            this.future = Some(Box::pin(future));
        }

        match this.future.as_mut() {
            Some(future) => future.as_mut().poll(cx),
            None => unreachable!("the operation always starts on first poll"),
        }
    }
}
