//! Reservation payload validation
//!
//! Two stages, always in this order:
//! 1. Field presence (`gameId != 0`, every string field non-null)
//! 2. Email shape (contains `@`, ends with `.com` or `.cl`)
//!
//! The email rule is a blunt suffix check and nothing more.

use super::models::{NewReservation, ReservationPayload};

/// Accepted email suffixes, compared ignoring ASCII case
const EMAIL_SUFFIXES: [&str; 2] = [".com", ".cl"];

/// Which request a payload arrived on. Only changes the error wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    Creation,
    Update,
}

impl RequestKind {
    pub fn as_str(self) -> &'static str {
        match self {
            RequestKind::Creation => "creation",
            RequestKind::Update => "update",
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Empty field on {} request", .0.as_str())]
    EmptyField(RequestKind),

    #[error("Invalid email on {} request", .0.as_str())]
    InvalidEmail(RequestKind),
}

/// `email` contains `@` and ends with `.com` or `.cl`.
pub fn email_is_valid(email: &str) -> bool {
    email.contains('@') && EMAIL_SUFFIXES.iter().any(|suffix| ends_with_ignore_case(email, suffix))
}

fn ends_with_ignore_case(s: &str, suffix: &str) -> bool {
    let (s, suffix) = (s.as_bytes(), suffix.as_bytes());
    s.len() >= suffix.len() && s[s.len() - suffix.len()..].eq_ignore_ascii_case(suffix)
}

/// Validate a payload and take its fields.
pub fn validate(
    payload: ReservationPayload,
    kind: RequestKind,
) -> Result<NewReservation, ValidationError> {
    let game_id = payload.game_id();
    let ReservationPayload {
        document_number,
        name,
        last_name,
        email,
        ..
    } = payload;

    let (Some(document_number), Some(name), Some(last_name), Some(email)) =
        (document_number, name, last_name, email)
    else {
        return Err(ValidationError::EmptyField(kind));
    };
    if game_id == 0 {
        return Err(ValidationError::EmptyField(kind));
    }

    if !email_is_valid(&email) {
        return Err(ValidationError::InvalidEmail(kind));
    }

    Ok(NewReservation {
        game_id,
        document_number,
        name,
        last_name,
        email,
    })
}
