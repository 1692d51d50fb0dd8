use std::time::Duration;

pub const TYPEWRITER_INTERVAL: Duration = Duration::from_millis(100);

/// Character-by-character reveal of a fixed string
#[derive(Debug, Clone)]
pub struct Typewriter {
    text: &'static str,
    shown: usize,
}

impl Typewriter {
    pub fn new(text: &'static str) -> Self {
        Self { text, shown: 0 }
    }

    /// Reveals one more character and returns the visible prefix, or `None`
    /// once the whole text is already shown.
    pub fn advance(&mut self) -> Option<&'static str> {
        if self.shown >= self.text.len() {
            return None;
        }
        let step = self.text[self.shown..]
            .chars()
            .next()
            .map_or(1, char::len_utf8);
        self.shown += step;
        Some(&self.text[..self.shown])
    }

    pub fn is_done(&self) -> bool {
        self.shown >= self.text.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveals_one_character_at_a_time() {
        let mut typewriter = Typewriter::new("Ana");
        assert_eq!(typewriter.advance(), Some("A"));
        assert_eq!(typewriter.advance(), Some("An"));
        assert_eq!(typewriter.advance(), Some("Ana"));
        assert!(typewriter.is_done());
        assert_eq!(typewriter.advance(), None);
    }

    #[test]
    fn respects_multibyte_boundaries() {
        let mut typewriter = Typewriter::new("Zoë");
        assert_eq!(typewriter.advance(), Some("Z"));
        assert_eq!(typewriter.advance(), Some("Zo"));
        assert_eq!(typewriter.advance(), Some("Zoë"));
        assert_eq!(typewriter.advance(), None);
    }

    #[test]
    fn empty_text_is_done_immediately() {
        let mut typewriter = Typewriter::new("");
        assert!(typewriter.is_done());
        assert_eq!(typewriter.advance(), None);
    }
}
