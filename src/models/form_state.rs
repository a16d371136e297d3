use crate::models::review::{Rating, RatingError, Review};
use std::fmt;
use thiserror::Error;

/// Shortest review text accepted on submit, in UTF-16 code units (the unit a
/// browser reports as the length of a textarea value).
pub const MIN_REVIEW_LENGTH: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReviewError {
    #[error("Review must be at least {min} characters long")]
    TextTooShort { min: usize, len: usize },
}

pub fn validate_text(text: &str) -> Result<(), ReviewError> {
    let len = text.encode_utf16().count();
    if len < MIN_REVIEW_LENGTH {
        return Err(ReviewError::TextTooShort {
            min: MIN_REVIEW_LENGTH,
            len,
        });
    }
    Ok(())
}

/// The three draft inputs of the review form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Email,
    Rating,
    Text,
}

impl FormField {
    /// DOM id of the control bound to this field.
    pub fn id(self) -> &'static str {
        match self {
            FormField::Email => "email",
            FormField::Rating => "rating",
            FormField::Text => "text",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// State owned by one mounted review form: the drafts, the message of the
/// last failed submit and every review committed so far.
///
/// `reviews` only grows, always at the end, and only through [`submit`].
///
/// [`submit`]: ReviewFormState::submit
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReviewFormState {
    email: String,
    rating: Option<Rating>,
    text: String,
    text_error: Option<ReviewError>,
    reviews: Vec<Review>,
}

impl ReviewFormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn rating(&self) -> Option<Rating> {
        self.rating
    }

    /// Value for the rating select: "" for the placeholder, otherwise the digit.
    pub fn rating_value(&self) -> String {
        self.rating.map(|r| r.to_string()).unwrap_or_default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn text_error_message(&self) -> String {
        self.text_error
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_default()
    }

    pub fn reviews(&self) -> &[Review] {
        &self.reviews
    }

    /// Overwrites one draft field. Nothing is validated here except that a
    /// rating must be a value the select can actually produce; a rejected
    /// rating leaves the previous draft in place, so the caller has to put
    /// the control back to [`rating_value`]. The text error is never touched
    /// by editing.
    ///
    /// [`rating_value`]: ReviewFormState::rating_value
    pub fn input(&mut self, field: FormField, value: String) -> Result<(), RatingError> {
        match field {
            FormField::Email => self.email = value,
            FormField::Rating => self.rating = Rating::parse_selection(&value)?,
            FormField::Text => self.text = value,
        }
        Ok(())
    }

    /// Commits the drafts as a new review if the text is long enough, then
    /// clears the drafts and the error. On failure only the error changes.
    pub fn submit(&mut self) -> Result<&Review, ReviewError> {
        if let Err(err) = validate_text(&self.text) {
            self.text_error = Some(err.clone());
            return Err(err);
        }

        self.reviews.push(Review {
            email: std::mem::take(&mut self.email),
            rating: self.rating.take(),
            text: std::mem::take(&mut self.text),
        });
        self.text_error = None;

        let committed = self.reviews.len() - 1;
        Ok(&self.reviews[committed])
    }
}
