//! Forms of the ingestion test harness.

use serde::Deserialize;

use crate::domain::ingester::PublishRequest;
use crate::domain::types::NonEmptyString;
use crate::forms::FormError;

#[derive(Debug, Default, Deserialize)]
pub struct GetByIdForm {
    #[serde(default)]
    pub id: String,
}

impl TryFrom<GetByIdForm> for NonEmptyString {
    type Error = FormError;

    fn try_from(form: GetByIdForm) -> Result<Self, Self::Error> {
        NonEmptyString::new(form.id).map_err(|_| FormError::MissingId)
    }
}

/// Comma separated numbers typed by the user.
#[derive(Debug, Default, Deserialize)]
pub struct PublishForm {
    #[serde(default)]
    pub numbers: String,
}

impl TryFrom<PublishForm> for PublishRequest {
    type Error = FormError;

    fn try_from(form: PublishForm) -> Result<Self, Self::Error> {
        let numbers = parse_numbers(&form.numbers)?;
        Ok(PublishRequest { numbers })
    }
}

/// Parses `"1, 2.5, -3"` into numbers, skipping blank tokens.
///
/// The first token that is not a finite number rejects the whole input.
pub fn parse_numbers(input: &str) -> Result<Vec<f64>, FormError> {
    let numbers = input
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| {
            token
                .parse::<f64>()
                .ok()
                .filter(|number| number.is_finite())
                .ok_or_else(|| FormError::InvalidNumber(token.to_string()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    if numbers.is_empty() {
        return Err(FormError::NoNumbers);
    }
    Ok(numbers)
}
