//! Case Renderer Module
//!
//! Renders a `WordSequence` under one `Convention`. Word-joined conventions
//! apply a per-word casing (one for the first word, one for the rest) and join
//! with a separator; the lowercase/uppercase/nocase/mockingcase family works on
//! the space-joined normalized string instead.

use flexkey_data::Convention;

use crate::normalize::{WordSequence, normalize};

/// Casing applied to a single word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WordCase {
    Lower,
    Upper,
    /// First character uppercase, the rest lowercase.
    Capitalized,
}

impl WordCase {
    fn apply(self, word: &str) -> String {
        match self {
            WordCase::Lower => word.to_ascii_lowercase(),
            WordCase::Upper => word.to_ascii_uppercase(),
            WordCase::Capitalized => capitalize(word),
        }
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::with_capacity(word.len());
            out.push(first.to_ascii_uppercase());
            out.extend(chars.map(|c| c.to_ascii_lowercase()));
            out
        },
        None => String::new(),
    }
}

/// Case each word and join them; zero words give an empty string.
fn join_words(words: &WordSequence, separator: &str, first: WordCase, rest: WordCase) -> String {
    words
        .iter()
        .enumerate()
        .map(|(idx, word)| if idx == 0 { first.apply(word) } else { rest.apply(word) })
        .collect::<Vec<_>>()
        .join(separator)
}

/// Alternate lower/upper over non-space characters, starting lower.
/// Spaces pass through and do not advance the alternation.
fn mocking(normalized: &str) -> String {
    let mut out = String::with_capacity(normalized.len());
    let mut counter = 0usize;
    for ch in normalized.chars() {
        if ch.is_whitespace() {
            out.push(ch);
            continue;
        }
        out.push(if counter % 2 == 0 {
            ch.to_ascii_lowercase()
        } else {
            ch.to_ascii_uppercase()
        });
        counter += 1;
    }
    out
}

/// Render `words` in the given naming convention.
pub fn render(words: &WordSequence, convention: Convention) -> String {
    use WordCase::{Capitalized, Lower, Upper};

    match convention {
        Convention::LowerCase | Convention::NoCase => words.joined().to_ascii_lowercase(),
        Convention::UpperCase => words.joined().to_ascii_uppercase(),
        Convention::MockingCase => mocking(&words.joined()),
        Convention::CamelCase => join_words(words, "", Lower, Capitalized),
        Convention::PascalCase | Convention::CapitalCase => join_words(words, "", Capitalized, Capitalized),
        Convention::SnakeCase => join_words(words, "_", Lower, Lower),
        Convention::KebabCase | Convention::ParamCase => join_words(words, "-", Lower, Lower),
        Convention::ConstantCase => join_words(words, "_", Upper, Upper),
        Convention::DotCase => join_words(words, ".", Lower, Lower),
        Convention::PathCase => join_words(words, "/", Lower, Lower),
        Convention::SentenceCase => join_words(words, " ", Capitalized, Lower),
        Convention::TitleCase => join_words(words, " ", Capitalized, Capitalized),
        Convention::HeaderCase => join_words(words, "-", Capitalized, Capitalized),
    }
}

/// Normalize `raw` and render it in one convention.
pub fn convert(raw: &str, convention: Convention) -> String {
    render(&normalize(raw), convention)
}
