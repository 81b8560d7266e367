use crate::token::{tokenize, Token};
use crate::{mask, Denylist};
use tracing::trace;

/// Controls how far a match reaches once a token is found in the denylist.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Boundaries {
    /// Every literal occurrence of the matched token's text is masked, including occurrences
    /// inside longer words. With `ass` forbidden, `"ass class"` becomes `"*** cl***"`.
    #[default]
    Substring,
    /// Only the span of each matched token is masked. `"ass class"` becomes `"*** class"`.
    Token,
}

/// Censor rewrites phrases, masking the tokens that appear in a [`Denylist`].
///
/// Tokens are looked up case-insensitively, but in [`Boundaries::Substring`] mode (the default)
/// the text being replaced is the token exactly as written. `"Damn damn"` is therefore rewritten
/// in two passes, one per casing.
///
/// A mask has as many characters as the token it replaces, which is not always the length of its
/// lowercase denylist entry (`"İ"` lowercases to two characters).
#[derive(Copy, Clone, Debug)]
pub struct Censor<'a> {
    denylist: &'a Denylist,
    boundaries: Boundaries,
}

impl<'a> Censor<'a> {
    pub fn new(denylist: &'a Denylist) -> Self {
        Self {
            denylist,
            boundaries: Boundaries::default(),
        }
    }

    /// Selects substring (default) or whole-token replacement.
    pub fn with_boundaries(&mut self, boundaries: Boundaries) -> &mut Self {
        self.boundaries = boundaries;
        self
    }

    pub fn boundaries(&self) -> Boundaries {
        self.boundaries
    }

    pub fn denylist(&self) -> &'a Denylist {
        self.denylist
    }

    /// Tokens of `phrase` that are forbidden, in order of appearance, alongside their masks.
    pub fn matches<'p>(&self, phrase: &'p str) -> impl Iterator<Item = (Token<'p>, String)> + use<'p, 'a> {
        let denylist = self.denylist;
        tokenize(phrase).filter_map(move |token| {
            denylist
                .contains(token.as_str())
                .then(|| (token, mask(token.as_str(), denylist.mask_char())))
        })
    }

    /// Returns `true` if no token of `phrase` is forbidden.
    pub fn is_clean(&self, phrase: &str) -> bool {
        self.matches(phrase).next().is_none()
    }

    /// The output is a newly allocated, censored phrase. Everything that is not masked
    /// (punctuation, spacing, clean words) is kept as is.
    pub fn censor(&self, phrase: &str) -> String {
        match self.boundaries {
            Boundaries::Substring => self.censor_substrings(phrase),
            Boundaries::Token => self.censor_tokens(phrase),
        }
    }

    fn censor_substrings(&self, phrase: &str) -> String {
        // Tokens come from the input phrase, the working copy is never re-tokenized.
        let mut censored = phrase.to_owned();
        for (token, masked) in self.matches(phrase) {
            trace!(start = token.start(), len = token.as_str().len(), "masking occurrences");
            censored = censored.replace(token.as_str(), &masked);
        }
        censored
    }

    fn censor_tokens(&self, phrase: &str) -> String {
        let mut censored = String::with_capacity(phrase.len());
        let mut last = 0;
        for (token, masked) in self.matches(phrase) {
            trace!(start = token.start(), len = token.as_str().len(), "masking token");
            censored.push_str(&phrase[last..token.start()]);
            censored.push_str(&masked);
            last = token.end();
        }
        censored.push_str(&phrase[last..]);
        censored
    }
}

/// Censors `phrase` against `denylist` with default options.
pub fn censor(denylist: &Denylist, phrase: &str) -> String {
    Censor::new(denylist).censor(phrase)
}

/// CensorStr makes it easy to sanitize a `String` or `&str` by calling `.censor(&denylist)`.
pub trait CensorStr: Sized {
    /// The output is a newly allocated, censored string.
    fn censor(self, denylist: &Denylist) -> String;

    /// Returns `true` if no word of the text is in `denylist`.
    fn is_clean(self, denylist: &Denylist) -> bool;

    /// Returns `true` if some word of the text is in `denylist`.
    fn is_forbidden(self, denylist: &Denylist) -> bool {
        !self.is_clean(denylist)
    }
}

impl CensorStr for &str {
    fn censor(self, denylist: &Denylist) -> String {
        Censor::new(denylist).censor(self)
    }

    fn is_clean(self, denylist: &Denylist) -> bool {
        Censor::new(denylist).is_clean(self)
    }
}
