use crate::state::form::{ErrorState, Field, FormState};

pub fn validate(form: &FormState) -> ErrorState {
    let mut errors = ErrorState::new();

    if form.name.trim().is_empty() {
        errors.insert(Field::Name, "Name is required".to_string());
    }
    if form.email.trim().is_empty() {
        errors.insert(Field::Email, "Email is required".to_string());
    } else if !looks_like_email(&form.email) {
        errors.insert(Field::Email, "Invalid email address".to_string());
    }
    if form.question.trim().is_empty() {
        errors.insert(Field::Question, "Question is required".to_string());
    }
    if form.region.is_empty() {
        errors.insert(Field::Region, "Region is required".to_string());
    }
    if !form.subscribed {
        errors.insert(Field::Subscribed, "You must subscribe to the newsletter".to_string());
    }

    errors
}

/// True when the text contains `local@domain.tld`: a non-space character
/// right before an `@`, followed by a non-space run with a `.` that has at
/// least one character on each side.
pub fn looks_like_email(text: &str) -> bool {
    let chars: Vec<char> = text.chars().collect();
    chars.iter().enumerate().any(|(at, c)| {
        if *c != '@' || at == 0 || chars[at - 1].is_whitespace() {
            return false;
        }
        let domain: Vec<char> = chars[at + 1..]
            .iter()
            .take_while(|c| !c.is_whitespace())
            .copied()
            .collect();
        domain
            .iter()
            .enumerate()
            .any(|(i, c)| *c == '.' && i > 0 && i + 1 < domain.len())
    })
}
