/// Definitions bucketed by part of speech.
///
/// Buckets keep the order in which their part of speech was first seen, and
/// each bucket keeps its definitions in encounter order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Grouped {
    buckets: Vec<(String, Vec<String>)>,
}

impl Grouped {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `text` to the bucket for `part_of_speech`. Blank text is dropped.
    pub fn push(&mut self, part_of_speech: &str, text: &str) {
        if text.trim().is_empty() {
            return;
        }
        match self
            .buckets
            .iter_mut()
            .find(|(pos, _)| pos == part_of_speech)
        {
            Some((_, texts)) => texts.push(text.to_string()),
            None => self
                .buckets
                .push((part_of_speech.to_string(), vec![text.to_string()])),
        }
    }

    pub fn get(&self, part_of_speech: &str) -> Option<&[String]> {
        self.buckets
            .iter()
            .find(|(pos, _)| pos == part_of_speech)
            .map(|(_, texts)| texts.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.buckets
            .iter()
            .map(|(pos, texts)| (pos.as_str(), texts.as_slice()))
    }

    /// Number of part-of-speech buckets.
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Total number of definitions across all buckets.
    pub fn definition_count(&self) -> usize {
        self.buckets.iter().map(|(_, texts)| texts.len()).sum()
    }
}
