use indexmap::IndexMap;
use std::collections::HashMap;

/// Per-term counters accumulated while scanning the training corpus.
#[derive(Debug, Clone, Copy, Default)]
struct TermStats {
    total_count: u64,
    doc_count: u64,
}

/// Fixed ordered term list defining the feature-space basis for a classifier.
///
/// Built once from a training corpus and reused unchanged for every later
/// projection (train, test, inference), which is what keeps the feature space
/// consistent across partitions. Terms are ordered by descending total
/// frequency; ties keep first-seen corpus order.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    terms: Vec<String>,
    index: HashMap<String, usize>,
}

impl Vocabulary {
    /// Builds the vocabulary from tokenized training documents.
    ///
    /// A term survives pruning iff it appears in at least `min_doc_fraction`
    /// of the documents (inclusive boundary: a term present in exactly that
    /// fraction is kept). An empty corpus yields an empty vocabulary;
    /// downstream projections then produce zero-length rows.
    pub fn build(corpus: &[Vec<String>], min_doc_fraction: f64) -> Vocabulary {
        let mut stats: IndexMap<&str, TermStats> = IndexMap::new();
        for tokens in corpus {
            let mut seen_in_doc: Vec<&str> = Vec::new();
            for token in tokens {
                let entry = stats.entry(token.as_str()).or_default();
                entry.total_count += 1;
                if !seen_in_doc.contains(&token.as_str()) {
                    entry.doc_count += 1;
                    seen_in_doc.push(token.as_str());
                }
            }
        }

        let num_docs = corpus.len() as f64;
        let mut surviving: Vec<(&str, TermStats)> = stats
            .into_iter()
            .filter(|(_, s)| s.doc_count as f64 / num_docs >= min_doc_fraction)
            .collect();

        // Stable sort keeps the IndexMap's first-seen order among ties.
        surviving.sort_by(|a, b| b.1.total_count.cmp(&a.1.total_count));

        Vocabulary::from_terms(surviving.into_iter().map(|(t, _)| t.to_string()).collect())
    }

    /// Builds a vocabulary directly from an already-ordered term list.
    pub fn from_terms(terms: Vec<String>) -> Vocabulary {
        let index = terms
            .iter()
            .enumerate()
            .map(|(i, t)| (t.clone(), i))
            .collect();
        Vocabulary { terms, index }
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Column index of `term`, or `None` if it was pruned or never seen.
    #[inline]
    pub fn position(&self, term: &str) -> Option<usize> {
        self.index.get(term).copied()
    }
}
