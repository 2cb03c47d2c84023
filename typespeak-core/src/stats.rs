//! Word and sentence counting over finished text

use crate::classify::{char_class, ByteClass};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

/// Word and sentence counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statistics {
    /// Number of words
    pub words: u32,
    /// Number of sentences
    pub sentences: u32,
}

impl Statistics {
    /// Count words and sentences in a finished text.
    ///
    /// A sentence ends where punctuation other than a comma is followed by
    /// whitespace, and at the last character. A word ends at every sentence
    /// end, at whitespace following a word character, and where a run of
    /// hyphens starts.
    pub fn count(text: &str) -> Self {
        let mut count = Statistics::default();
        let mut chars = text.chars().peekable();
        let mut prev = '\0';

        while let Some(ch) = chars.next() {
            let is_last = chars.peek().is_none();
            let prev_class = char_class(prev);
            let class = char_class(ch);

            if (prev_class == ByteClass::Punctuation && class == ByteClass::Whitespace) || is_last
            {
                // ",," style endings still leave at least one sentence
                if prev != ',' || (is_last && count.sentences == 0) {
                    count.sentences += 1;
                }
                count.words += 1;
            } else if (class == ByteClass::Whitespace && prev_class == ByteClass::Text)
                || (ch == '-' && prev != '-')
            {
                count.words += 1;
            }

            prev = ch;
        }

        count
    }

    /// Whether nothing has been counted
    pub fn is_empty(&self) -> bool {
        self.words == 0 && self.sentences == 0
    }
}

impl Add for Statistics {
    type Output = Statistics;

    fn add(self, rhs: Self) -> Self::Output {
        Statistics {
            words: self.words.saturating_add(rhs.words),
            sentences: self.sentences.saturating_add(rhs.sentences),
        }
    }
}

impl AddAssign for Statistics {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sum for Statistics {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Statistics::default(), Add::add)
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sentences={} words={}", self.sentences, self.words)
    }
}
