//! Ordered sentence storage for one paragraph

/// Sentences of the current paragraph, oldest first
///
/// The last element is the in-progress slot and is never missing. A queued
/// sentence overwrites the slot while it is empty and is appended after it
/// otherwise, so the buffer only grows until it is explicitly reset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentenceBuffer {
    sentences: Vec<String>,
}

impl Default for SentenceBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl SentenceBuffer {
    /// Create a buffer holding a single empty sentence
    pub fn new() -> Self {
        Self {
            sentences: vec![String::new()],
        }
    }

    /// Index of the in-progress slot
    fn last_index(&self) -> usize {
        self.sentences.len() - 1
    }

    /// Store a finished sentence
    pub fn queue(&mut self, sentence: String) {
        let last = self.last_index();
        if self.sentences[last].is_empty() {
            self.sentences[last] = sentence;
        } else {
            self.sentences.push(sentence);
        }
    }

    /// Join all sentences with single spaces
    pub fn paragraph(&self) -> String {
        self.sentences.join(" ")
    }

    /// Join all sentences and reset to a single empty sentence
    pub fn take_paragraph(&mut self) -> String {
        let paragraph = self.paragraph();
        self.reset();
        paragraph
    }

    /// Drop every sentence
    pub fn reset(&mut self) {
        self.sentences.clear();
        self.sentences.push(String::new());
    }

    /// All sentences, including the in-progress slot
    pub fn sentences(&self) -> &[String] {
        &self.sentences
    }

    /// Number of stored slots
    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    /// Check if nothing has been queued since the last reset
    pub fn is_empty(&self) -> bool {
        self.sentences.len() == 1 && self.sentences[0].is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_buffer_has_one_empty_sentence() {
        let buffer = SentenceBuffer::new();
        assert_eq!(buffer.sentences(), &[String::new()]);
        assert!(buffer.is_empty());
        assert_eq!(buffer.paragraph(), "");
    }

    #[test]
    fn test_queue_fills_empty_slot_first() {
        let mut buffer = SentenceBuffer::new();
        buffer.queue("Hello.".to_string());
        assert_eq!(buffer.len(), 1);

        buffer.queue("World.".to_string());
        assert_eq!(buffer.len(), 2);
        assert_eq!(buffer.sentences(), &["Hello.", "World."]);
        assert_eq!(buffer.paragraph(), "Hello. World.");
    }

    #[test]
    fn test_take_paragraph_resets() {
        let mut buffer = SentenceBuffer::new();
        buffer.queue("One.".to_string());
        buffer.queue("Two!".to_string());

        assert_eq!(buffer.take_paragraph(), "One. Two!");
        assert_eq!(buffer.sentences(), &[String::new()]);
        assert_eq!(buffer.take_paragraph(), "");
    }
}
