use crate::future::Uplift;
use std::{error::Error, future::Future};

/// Represents an opaque, underlying error.
///
/// # Remarks
///
/// The original error is retained as a trait object and can be recovered with
/// [`downcast_ref`](Box::downcast_ref) or [`downcast`](Box::downcast).
pub type BoxError = Box<dyn Error + Send + Sync>;

/// Defines the behavior of a domain error type that can uplift arbitrary errors into itself.
pub trait Uplifting: Sized + Send + Sync {
    /// Converts the specified error into the domain error type.
    ///
    /// # Arguments
    ///
    /// * `error` - the underlying [error](BoxError) to uplift
    ///
    /// # Remarks
    ///
    /// This function must always produce a value and should never block.
    fn uplifted(error: BoxError) -> Self;

    /// Runs the specified operation and uplifts its error, if any.
    ///
    /// # Arguments
    ///
    /// * `operation` - the function to invoke
    ///
    /// # Returns
    ///
    /// The value produced by `operation` if it succeeds; otherwise, the result of
    /// [`uplifted`](Uplifting::uplifted) for the error it returned.
    fn uplift<T, E, F>(operation: F) -> Result<T, Self>
    where
        F: FnOnce() -> Result<T, E>,
        E: Into<BoxError>,
    {
        operation().map_err(convert)
    }

    /// Runs the specified asynchronous operation and uplifts its error, if any.
    ///
    /// # Arguments
    ///
    /// * `operation` - the function that creates the future to await
    ///
    /// # Returns
    ///
    /// A [future](Uplift) that resolves to the value produced by `operation` if it succeeds;
    /// otherwise, the result of [`uplifted`](Uplifting::uplifted) for the error it returned.
    ///
    /// # Remarks
    ///
    /// `operation` is not invoked until the returned future is first polled, and is invoked at most
    /// once. Dropping the future before it completes cancels the operation and never invokes
    /// [`uplifted`](Uplifting::uplifted).
    fn uplift_async<T, E, F, Fut>(operation: F) -> Uplift<F, Fut, E, Self>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: Into<BoxError>,
    {
        Uplift::new(operation)
    }
}

/// The single point through which every helper uplifts an error.
pub(crate) fn convert<D: Uplifting, E: Into<BoxError>>(error: E) -> D {
    let error = error.into();

    cfg_if::cfg_if! {
        if #[cfg(feature = "tracing")] {
            tracing::trace!(
                domain = std::any::type_name::<D>(),
                error = %error,
                "uplifting error"
            );
        }
    }

    D::uplifted(error)
}

#[cfg(test)]
mod test {
    use super::*;
    use std::{cell::Cell, fmt, num::ParseIntError};

    thread_local! {
        static INVOCATIONS: Cell<usize> = Cell::new(0);
    }

    #[derive(Debug)]
    enum TestError {
        Odd,
        Wrapped(BoxError),
    }

    impl fmt::Display for TestError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match self {
                Self::Odd => f.write_str("odd"),
                Self::Wrapped(error) => fmt::Display::fmt(error, f),
            }
        }
    }

    impl Error for TestError {}

    impl Uplifting for TestError {
        fn uplifted(error: BoxError) -> Self {
            INVOCATIONS.with(|count| count.set(count.get() + 1));
            Self::Wrapped(error)
        }
    }

    fn invocations() -> usize {
        INVOCATIONS.with(Cell::get)
    }

    #[test]
    fn uplift_should_return_value_when_operation_succeeds() {
        // arrange
        let before = invocations();

        // act
        let result = TestError::uplift(|| "2".parse::<i32>());

        // assert
        assert_eq!(result.unwrap(), 2);
        assert_eq!(invocations(), before);
    }

    #[test]
    fn uplift_should_wrap_error_when_operation_fails() {
        // arrange
        let before = invocations();

        // act
        let result = TestError::uplift(|| "x".parse::<i32>());

        // assert
        match result {
            Err(TestError::Wrapped(error)) => assert!(error.is::<ParseIntError>()),
            other => panic!("unexpected result: {other:?}"),
        }

        assert_eq!(invocations(), before + 1);
    }

    #[test]
    fn uplift_should_invoke_operation_once() {
        // arrange
        let mut calls = 0;

        // act
        let _ = TestError::uplift(|| {
            calls += 1;
            Err::<(), _>("failed")
        });

        // assert
        assert_eq!(calls, 1);
    }

    #[test]
    fn uplift_should_accept_string_errors() {
        // arrange
        let operation = || Err::<(), _>(String::from("boom"));

        // act
        let error = TestError::uplift(operation).unwrap_err();

        // assert
        assert_eq!(error.to_string(), "boom");
    }

    #[test]
    fn uplifted_should_not_be_invoked_when_future_is_dropped() {
        // arrange
        let before = invocations();
        let future = TestError::uplift_async(futures::future::pending::<Result<(), TestError>>);

        // act
        let outcome = futures::FutureExt::now_or_never(future);

        // assert
        assert!(outcome.is_none());
        assert_eq!(invocations(), before);
    }

    #[test]
    fn uplift_async_should_wrap_error_when_operation_fails() {
        // arrange
        let future = TestError::uplift_async(|| async { Err::<i32, _>(TestError::Odd) });

        // act
        let outcome = futures::executor::block_on(future);

        // assert
        match outcome {
            Err(TestError::Wrapped(error)) => {
                assert!(matches!(error.downcast_ref::<TestError>(), Some(TestError::Odd)))
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
