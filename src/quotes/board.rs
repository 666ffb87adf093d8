//! In-memory quote collection with non-repeating random picks

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One quote from the feed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub text: String,
    pub author: String,
}

/// Holds the session's quotes and the index shown last
#[derive(Debug, Clone, Default)]
pub struct QuoteBoard {
    quotes: Vec<Quote>,
    last_shown: Option<usize>,
}

impl QuoteBoard {
    pub fn new(quotes: Vec<Quote>) -> Self {
        Self {
            quotes,
            last_shown: None,
        }
    }

    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    /// The quote shown by the most recent draw
    pub fn current(&self) -> Option<&Quote> {
        self.last_shown.and_then(|index| self.quotes.get(index))
    }

    /// Draw a random quote, never the same one twice in a row
    pub fn draw(&mut self) -> Option<&Quote> {
        self.draw_with(&mut rand::thread_rng())
    }

    /// Draw using the given generator (tests pass a seeded one)
    pub fn draw_with(&mut self, rng: &mut impl Rng) -> Option<&Quote> {
        if self.quotes.is_empty() {
            debug!("no quotes available to draw");
            return None;
        }

        let mut index = rng.gen_range(0..self.quotes.len());
        while self.quotes.len() > 1 && Some(index) == self.last_shown {
            index = rng.gen_range(0..self.quotes.len());
        }

        self.last_shown = Some(index);
        self.quotes.get(index)
    }
}
