//! Strongly-typed value objects shared by the listing layer and the screens.
//!
//! These wrappers enforce the few invariants the console relies on (allowed
//! page sizes, sort directions) so that once a value reaches the controller it
//! can be treated as trusted.
use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Requested page size is not one of [`PageSize::ALLOWED`].
    #[error("page size must be one of 10, 20 or 50, got {0}")]
    InvalidPageSize(u32),
    /// Provided string contained no non-whitespace characters.
    #[error("value cannot be empty")]
    EmptyString,
}

/// Number of rows requested per page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct PageSize(u32);

impl PageSize {
    /// Sizes offered by the page size selector.
    pub const ALLOWED: [u32; 3] = [10, 20, 50];
    /// Size used when a screen is first opened.
    pub const DEFAULT: PageSize = PageSize(10);

    /// Creates a page size, rejecting anything outside [`Self::ALLOWED`].
    pub fn new(value: u32) -> Result<Self, TypeConstraintError> {
        if Self::ALLOWED.contains(&value) {
            Ok(Self(value))
        } else {
            Err(TypeConstraintError::InvalidPageSize(value))
        }
    }

    /// Returns the raw size.
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl Display for PageSize {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u32> for PageSize {
    type Error = TypeConstraintError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PageSize> for u32 {
    fn from(value: PageSize) -> Self {
        value.0
    }
}

/// Sort order sent along with every paginated request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub const fn as_str(self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

impl Display for SortDirection {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Non-blank, trimmed text value.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct NonEmptyString(String);

impl NonEmptyString {
    /// Trims the input and rejects it when nothing is left.
    pub fn new<S: AsRef<str>>(value: S) -> Result<Self, TypeConstraintError> {
        let trimmed = value.as_ref().trim();
        if trimmed.is_empty() {
            Err(TypeConstraintError::EmptyString)
        } else {
            Ok(Self(trimmed.to_string()))
        }
    }

    /// Borrow the value as a `&str`.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the owned inner `String`.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for NonEmptyString {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for NonEmptyString {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<NonEmptyString> for String {
    fn from(value: NonEmptyString) -> Self {
        value.0
    }
}
