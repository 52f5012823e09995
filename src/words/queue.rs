/// Submitted-but-unapproved words, in submission order. In-memory only: the
/// queue belongs to the running process and is lost on restart.
#[derive(Debug, Default)]
pub struct CandidateQueue {
    words: Vec<String>,
}

impl CandidateQueue {
    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }

    /// No-op if the word is already queued.
    pub fn add(&mut self, word: String) {
        if !self.contains(&word) {
            self.words.push(word);
        }
    }

    /// Drop every queued word that appears in `words`.
    pub fn remove_all(&mut self, words: &[String]) {
        self.words.retain(|w| !words.contains(w));
    }

    pub fn clear(&mut self) {
        self.words.clear();
    }

    pub fn list(&self) -> &[String] {
        &self.words
    }
}
