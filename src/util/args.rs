//! Shell-like splitting of message text into an argument vector.
//!
//! Words are separated by whitespace. Single quotes preserve their contents literally,
//! double quotes allow `\"` and `\\` escapes, and a backslash outside quotes escapes the
//! next character. `!roll "good luck everyone"` therefore yields two arguments.

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SplitError {
    #[error("No closing quotation")]
    UnclosedQuote,
    #[error("No escaped character")]
    TrailingEscape,
}

#[derive(Clone, Copy, PartialEq)]
enum State {
    Unquoted,
    Single,
    Double,
}

/// Splits `input` into words using POSIX shell quoting rules.
pub fn split(input: &str) -> Result<Vec<String>, SplitError> {
    let mut words = Vec::new();
    let mut word = String::new();
    let mut in_word = false;
    let mut state = State::Unquoted;
    let mut chars = input.chars();

    while let Some(c) = chars.next() {
        match state {
            State::Unquoted => match c {
                c if c.is_whitespace() => {
                    if in_word {
                        words.push(std::mem::take(&mut word));
                        in_word = false;
                    }
                }
                '\'' => {
                    state = State::Single;
                    in_word = true;
                }
                '"' => {
                    state = State::Double;
                    in_word = true;
                }
                '\\' => {
                    word.push(chars.next().ok_or(SplitError::TrailingEscape)?);
                    in_word = true;
                }
                c => {
                    word.push(c);
                    in_word = true;
                }
            },
            State::Single => match c {
                '\'' => state = State::Unquoted,
                c => word.push(c),
            },
            State::Double => match c {
                '"' => state = State::Unquoted,
                '\\' => match chars.next() {
                    Some(escaped @ ('"' | '\\')) => word.push(escaped),
                    Some(other) => {
                        word.push('\\');
                        word.push(other);
                    }
                    None => return Err(SplitError::UnclosedQuote),
                },
                c => word.push(c),
            },
        }
    }

    if state != State::Unquoted {
        return Err(SplitError::UnclosedQuote);
    }
    if in_word {
        words.push(word);
    }

    Ok(words)
}
