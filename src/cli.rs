//! Command line arguments of the `censory` binary.

use crate::logging::DEFAULT_LOG_LEVEL;
use crate::{is_word_char, Boundaries, DEFAULT_MASK};
use clap::Parser;
use std::path::PathBuf;

/// Masks words from a word list in the phrases you type.
#[derive(Parser, Debug)]
#[command(name = "censory")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Word list file, words separated by whitespace. Asked for interactively if omitted
    #[arg(env = "CENSORY_WORDLIST")]
    pub wordlist: Option<PathBuf>,

    /// Character that replaces each character of a censored word
    #[arg(short, long, default_value_t = DEFAULT_MASK, value_parser = parse_mask, env = "CENSORY_MASK")]
    pub mask: char,

    /// Mask whole words only, never the same letters inside longer words
    #[arg(short, long)]
    pub whole_words: bool,

    /// Log level, logs go to stderr
    #[arg(
        short,
        long,
        default_value = DEFAULT_LOG_LEVEL,
        env = "CENSORY_LOG_LEVEL",
        value_parser = ["trace", "debug", "info", "warn", "error", "off"]
    )]
    pub log_level: String,
}

impl Cli {
    pub fn boundaries(&self) -> Boundaries {
        if self.whole_words {
            Boundaries::Token
        } else {
            Boundaries::Substring
        }
    }
}

/// A mask must be one character that can't be mistaken for part of a word, or censored text
/// would have new words in it.
fn parse_mask(s: &str) -> Result<char, String> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if is_word_char(c) => {
            Err(format!("'{}' is a letter or number, and can't be a mask", c))
        }
        (Some(c), None) => Ok(c),
        _ => Err(String::from("mask must be exactly one character")),
    }
}
