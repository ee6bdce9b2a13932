use std::sync::LazyLock;

use regex::Regex;

use crate::models::{NewRegistration, RawSubmission};

/// Clubs offered on the registration form.
pub const CLUBS: [&str; 6] = [
    "Art Club",
    "Science Club",
    "Music Club",
    "Drama Club",
    "Programming Club",
    "Sports Club",
];

/// Interest tags offered on the registration form.
pub const INTERESTS: [&str; 5] = ["Art", "Science", "Music", "Sports", "Technology"];

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Check every rule and collect all violations; no rule short-circuits
/// another. On success the returned record is HTML-escaped, ready for
/// storage and display.
///
/// Club membership in [`CLUBS`] is deliberately not enforced here; the form
/// restricts choices and the server only requires a non-empty selection.
pub fn validate(raw: &RawSubmission) -> Result<NewRegistration, Vec<String>> {
    let mut errors = Vec::new();

    if raw.name.is_empty() {
        errors.push("Name is required.".to_string());
    } else if raw.name.chars().count() < 2 {
        errors.push("Name must be at least 2 characters long.".to_string());
    }

    if raw.email.is_empty() {
        errors.push("Email is required.".to_string());
    } else if !EMAIL_RE.is_match(&raw.email) {
        errors.push("Please enter a valid email address.".to_string());
    }

    if raw.club.is_empty() {
        errors.push("Please select a club.".to_string());
    }

    if !raw.phone.is_empty() && !valid_phone(&raw.phone) {
        errors.push("Please enter a valid phone number.".to_string());
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(NewRegistration {
        name: escape_html(&raw.name),
        email: escape_html(&raw.email),
        club: escape_html(&raw.club),
        phone: escape_html(&raw.phone),
        interests: raw.interests.iter().map(|i| escape_html(i)).collect(),
        experience: escape_html(&raw.experience),
    })
}

fn valid_phone(phone: &str) -> bool {
    phone
        .chars()
        .all(|c| c.is_ascii_digit() || c.is_whitespace() || matches!(c, '+' | '-' | '(' | ')'))
}

/// Escape text for embedding in HTML bodies and double-quoted attributes.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
