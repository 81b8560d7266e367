use crate::{is_word_char, Error, Map, Result};
use std::borrow::Cow;
use std::fs::File;
use std::io::{self, Read};
use std::iter::FromIterator;
use std::path::Path;
use tracing::{debug, warn};

/// The character masks are made of, unless overridden with [`Denylist::with_mask_char`].
pub const DEFAULT_MASK: char = '*';

/// Returns `mask_char` repeated once per character (not byte) of `word`.
pub fn mask(word: &str, mask_char: char) -> String {
    word.chars().map(|_| mask_char).collect()
}

/// Set of forbidden words, each mapped to the mask that replaces it.
///
/// Keys are lowercase, so lookups via [`Denylist::lookup`] are case-insensitive. Every mask has
/// exactly as many characters as its key.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Denylist {
    entries: Map<String, String>,
    mask_char: char,
}

impl Default for Denylist {
    fn default() -> Self {
        Self::new()
    }
}

impl Denylist {
    /// Empty, masking with [`DEFAULT_MASK`].
    pub fn new() -> Self {
        Self {
            entries: Map::default(),
            mask_char: DEFAULT_MASK,
        }
    }

    /// Changes the mask character, rebuilding the mask of every existing entry.
    ///
    /// # Panics
    ///
    /// Panics if `mask_char` is a letter or number, since masks made of word characters would
    /// turn into new words when censored text is censored again.
    pub fn with_mask_char(mut self, mask_char: char) -> Self {
        assert!(
            !is_word_char(mask_char),
            "mask character {:?} must not be a letter or number",
            mask_char
        );
        self.mask_char = mask_char;
        for (word, masked) in self.entries.iter_mut() {
            *masked = mask(word, mask_char);
        }
        self
    }

    /// Reads a word list from `source`.
    ///
    /// Words are separated by any whitespace and otherwise kept verbatim (so `"foo,"` is an entry
    /// distinct from `"foo"`) apart from being lowercased. Invalid UTF-8 is replaced rather than
    /// rejected. An empty source yields an empty denylist.
    pub fn load<R: Read>(mut source: R) -> io::Result<Self> {
        let mut bytes = Vec::new();
        source.read_to_end(&mut bytes)?;
        let text = String::from_utf8_lossy(&bytes);
        if matches!(text, Cow::Owned(_)) {
            warn!("word list is not valid UTF-8, invalid sequences were replaced");
        }
        Ok(text.split_whitespace().collect())
    }

    /// Opens and reads the word list at `path`. The file is closed before this returns.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file_access = |source| Error::FileAccess {
            path: path.to_owned(),
            source,
        };

        let file = File::open(path).map_err(file_access)?;
        let denylist = Self::load(file).map_err(file_access)?;

        debug!(path = %path.display(), entries = denylist.len(), "loaded word list");
        Ok(denylist)
    }

    /// Adds a word. If its lowercase form is already present, the entry is overwritten.
    pub fn insert(&mut self, word: &str) {
        let lowered = word.to_lowercase();
        let masked = mask(&lowered, self.mask_char);
        self.entries.insert(lowered, masked);
    }

    /// Removes a word (after lowercasing it), returning whether it was present.
    pub fn remove(&mut self, word: &str) -> bool {
        self.entries.remove(&word.to_lowercase()).is_some()
    }

    /// Returns the mask for exactly `key`, which must already be lowercase to match.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Lowercases `word` and returns its mask if it is forbidden.
    pub fn lookup(&self, word: &str) -> Option<&str> {
        self.get(&word.to_lowercase())
    }

    pub fn contains(&self, word: &str) -> bool {
        self.lookup(word).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn mask_char(&self) -> char {
        self.mask_char
    }

    /// Iterates `(word, mask)` pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(word, masked)| (word.as_str(), masked.as_str()))
    }
}

impl<S: AsRef<str>> FromIterator<S> for Denylist {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        let mut ret = Self::new();
        ret.extend(iter);
        ret
    }
}

impl<S: AsRef<str>> Extend<S> for Denylist {
    fn extend<T: IntoIterator<Item = S>>(&mut self, iter: T) {
        for word in iter {
            self.insert(word.as_ref());
        }
    }
}
