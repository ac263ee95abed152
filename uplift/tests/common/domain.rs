use std::{future::Future, time::Duration};
use thiserror::Error;
use uplift::{BoxError, Uplifting};

/// Represents the possible parity errors.
#[derive(Error, Debug, Uplifting)]
pub enum ParityError {
    /// Indicates the number is odd.
    #[error("the number {0} is odd")]
    OddNumber(i32),

    /// Indicates an uplifted error.
    #[uplifted]
    #[error(transparent)]
    Uplifted(BoxError),
}

pub fn is_even(number: i32) -> bool {
    number % 2 == 0
}

pub fn even(text: &str) -> Result<i32, ParityError> {
    let number = ParityError::uplift(|| text.trim().parse::<i32>())?;

    if !is_even(number) {
        return Err(ParityError::OddNumber(number));
    }

    Ok(number)
}

pub async fn even_async(text: &str) -> Result<i32, ParityError> {
    let text = text.to_owned();
    let number = ParityError::uplift_async(|| parse_later(text)).await?;

    if !is_even(number) {
        return Err(ParityError::OddNumber(number));
    }

    Ok(number)
}

fn parse_later(text: String) -> impl Future<Output = Result<i32, std::num::ParseIntError>> {
    async move {
        tokio::time::sleep(Duration::from_millis(1)).await;
        text.trim().parse::<i32>()
    }
}
