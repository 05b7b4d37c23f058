//! Shared data model: the pattern set and the counts vector.

/// An ordered set of patterns. Ordering defines pattern ids; patterns may
/// be empty or repeated, neither is an error.
#[derive(Debug, Clone, Default)]
pub struct PatternSet {
    patterns: Vec<Vec<u8>>,
}

impl PatternSet {
    pub fn new(patterns: Vec<Vec<u8>>) -> Self {
        Self { patterns }
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn get(&self, id: usize) -> &[u8] {
        &self.patterns[id]
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &[u8])> {
        self.patterns.iter().enumerate().map(|(i, p)| (i, p.as_slice()))
    }

    pub fn as_slice(&self) -> &[Vec<u8>] {
        &self.patterns
    }
}

/// Per-pattern occurrence counts, indexed by pattern id.
pub type Counts = Vec<u64>;
