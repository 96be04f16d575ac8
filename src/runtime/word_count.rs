use super::normalize::{CaseFold, WordFilter};
use super::tokenizer::tokenize;
use super::Runtime;

/// The built-in runtime: tokenize, case-fold, filter.
#[derive(Debug, Clone, Copy, Default)]
pub struct WordCountRuntime {
    case: CaseFold,
    filter: WordFilter,
}

impl WordCountRuntime {
    pub fn new(case: CaseFold, filter: WordFilter) -> Self {
        Self { case, filter }
    }
}

impl Runtime for WordCountRuntime {
    fn map(&self, line: &str) -> Vec<String> {
        tokenize(line)
            .map(|token| self.case.fold(token))
            .filter(|word| self.filter.accepts(word))
            .collect()
    }
}
