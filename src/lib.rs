//! censory masks the words of a user supplied word list wherever they show up in text.
//!
//! The pipeline is a [`Denylist`] (lowercased words mapped to equal-length masks), a tokenizer
//! that splits phrases into runs of letters and numbers, a [`Censor`] that looks every token up
//! and rewrites the phrase, and a [`Session`] that drives the interactive prompt.
//!
//! ```
//! use censory::{Censor, Denylist};
//!
//! let denylist: Denylist = "foo bar baz".split_whitespace().collect();
//! assert_eq!(Censor::new(&denylist).censor("This is foo."), "This is ***.");
//! ```

mod censor;
mod denylist;
mod error;
mod session;
mod token;

#[cfg(feature = "cli")]
pub mod cli;
#[cfg(feature = "cli")]
pub mod logging;

pub use censor::{censor, Boundaries, Censor, CensorStr};
pub use denylist::{mask, Denylist, DEFAULT_MASK};
pub use error::{Error, Result};
pub use session::{ask_wordlist_path, is_exit, Session, State, FAREWELL, SENTINEL, WORDLIST_PROMPT};
pub use token::{is_word_char, tokenize, words, Token, Tokens};

pub(crate) type Map<K, V> = rustc_hash::FxHashMap<K, V>;

use doc_comment::doctest;
doctest!("../README.md");
