use finl_unicode::categories::CharacterCategories;
use std::fmt::{self, Display, Formatter};
use std::iter::FusedIterator;
use std::ops::Range;
use std::str::CharIndices;

/// Returns true iff the character can be part of a word, meaning its Unicode general category is
/// a letter (`L*`) or a number (`N*`). Marks, punctuation, symbols and separators all split words.
pub fn is_word_char(c: char) -> bool {
    c.is_letter() || c.is_number()
}

/// A maximal run of word characters (see [`is_word_char`]) within a phrase.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Token<'a> {
    text: &'a str,
    /// Byte offset of `text` in the phrase it came from.
    start: usize,
}

impl<'a> Token<'a> {
    pub fn as_str(&self) -> &'a str {
        self.text
    }

    /// Byte offset of the first character.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Byte offset one past the last character.
    pub fn end(&self) -> usize {
        self.start + self.text.len()
    }

    /// Byte range of the token in the phrase it was extracted from.
    pub fn span(&self) -> Range<usize> {
        self.start..self.end()
    }
}

impl AsRef<str> for Token<'_> {
    fn as_ref(&self) -> &str {
        self.text
    }
}

impl PartialEq<str> for Token<'_> {
    fn eq(&self, other: &str) -> bool {
        self.text == other
    }
}

impl PartialEq<&str> for Token<'_> {
    fn eq(&self, other: &&str) -> bool {
        self.text == *other
    }
}

impl Display for Token<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.text)
    }
}

/// Iterator over the [`Token`]s of a phrase, left to right. Created by [`tokenize`].
#[derive(Clone, Debug)]
pub struct Tokens<'a> {
    phrase: &'a str,
    chars: CharIndices<'a>,
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let start = loop {
            let (i, c) = self.chars.next()?;
            if is_word_char(c) {
                break i;
            }
        };

        // The separator that ends a token can never start the next one, so consuming it is fine.
        let end = loop {
            match self.chars.next() {
                Some((i, c)) if !is_word_char(c) => break i,
                Some(_) => {}
                None => break self.phrase.len(),
            }
        };

        Some(Token {
            text: &self.phrase[start..end],
            start,
        })
    }
}

impl FusedIterator for Tokens<'_> {}

/// Splits `phrase` into maximal runs of letters and numbers. Everything else is a separator and
/// is discarded. An empty phrase (or one made only of separators) yields no tokens.
pub fn tokenize(phrase: &str) -> Tokens<'_> {
    Tokens {
        phrase,
        chars: phrase.char_indices(),
    }
}

/// Like [`tokenize`], but yields only the text of each token.
pub fn words(phrase: &str) -> impl Iterator<Item = &str> + '_ {
    tokenize(phrase).map(|token| token.as_str())
}
