//! # Term Normalization
//!
//! Terms are matched against node names only after normalization. The real
//! normalizer (case-folding plus lemmatization) lives outside this crate and
//! is injected through the [`Normalizer`] trait.

/// Maps a raw term to the form used in the node-name table.
pub trait Normalizer {
    fn normalize(&self, term: &str) -> String;
}

impl<F> Normalizer for F
where
    F: Fn(&str) -> String,
{
    fn normalize(&self, term: &str) -> String {
        self(term)
    }
}

/// Trims and lower-cases. No lemmatization.
#[derive(Debug, Clone, Copy, Default)]
pub struct CaseFoldNormalizer;

impl Normalizer for CaseFoldNormalizer {
    fn normalize(&self, term: &str) -> String {
        term.trim().to_lowercase()
    }
}

/// Normalizes ConceptNet concept URIs such as `/c/en/ice_cream/n`.
///
/// Strips the `/c/en/` prefix and any part-of-speech segments, turns
/// underscores into spaces and lower-cases. Plain terms pass through with
/// only the case-folding applied.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConceptUriNormalizer;

/// Prefix of English concept URIs.
pub const CONCEPT_PREFIX: &str = "/c/en/";

impl Normalizer for ConceptUriNormalizer {
    fn normalize(&self, term: &str) -> String {
        let term = term.strip_prefix(CONCEPT_PREFIX).unwrap_or(term);
        let term = term.split('/').next().unwrap_or(term);
        term.replace('_', " ").trim().to_lowercase()
    }
}
