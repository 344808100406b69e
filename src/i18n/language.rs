//! Language type: a destination or source language resolved against the registry.
//!
//! Callers may pass a code ("fr", "pt-BR"), an English name ("French") or a
//! native name ("Français"). Anything else is fuzzy-matched; close enough
//! matches are accepted, the rest fail with [`UnknownLanguage`] carrying the
//! best guess. Region-tagged input is never fuzzy-matched.

use crate::i18n::{LanguageConfig, LanguageRegistry};

/// Similarity (in percent) a fuzzy match needs before it is accepted.
pub const SIMILARITY_THRESHOLD: f64 = 93.0;

/// The caller-supplied language could not be matched to a registry entry.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error(
    "Couldn't recognize the given language ({input}). Did you mean: {guess} (Similarity: {similarity:.2}%)?"
)]
pub struct UnknownLanguage {
    /// The raw input as received
    pub input: String,
    /// English name of the closest registry entry
    pub guess: &'static str,
    /// Similarity of the closest entry, 0-100
    pub similarity: f64,
}

/// A validated language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    /// Registry code (e.g., "en", "pt-BR")
    code: &'static str,
}

impl Language {
    /// Resolve free-form caller input to a registry language.
    ///
    /// # Returns
    /// * `Ok(Language)` on an exact match, a tag whose primary subtag matches
    ///   exactly ("fr-CA" -> "fr"), or an untagged fuzzy match at or above
    ///   [`SIMILARITY_THRESHOLD`]
    /// * `Err(UnknownLanguage)` with the best guess otherwise
    pub fn resolve(input: &str) -> Result<Language, UnknownLanguage> {
        let registry = LanguageRegistry::get();
        let trimmed = input.trim();

        if let Some(config) = registry.find_exact(trimmed) {
            return Ok(Language { code: config.code });
        }

        let primary = primary_subtag(trimmed);
        if let Some(config) = primary.and_then(|tag| registry.find_exact(tag)) {
            return Ok(Language { code: config.code });
        }

        let needle = trimmed.to_lowercase();
        let mut best: Option<(&LanguageConfig, f64)> = None;
        for config in registry.list_all() {
            let score = [config.code, config.name, config.native_name]
                .iter()
                .map(|candidate| similarity(&needle, &candidate.to_lowercase()))
                .fold(0.0_f64, f64::max);
            if best.map_or(true, |(_, top)| score > top) {
                best = Some((config, score));
            }
        }

        match best {
            Some((config, score)) if primary.is_none() && score >= SIMILARITY_THRESHOLD => {
                Ok(Language { code: config.code })
            }
            Some((config, score)) => Err(UnknownLanguage {
                input: input.to_string(),
                guess: config.name,
                similarity: score,
            }),
            None => Err(UnknownLanguage {
                input: input.to_string(),
                guess: "",
                similarity: 0.0,
            }),
        }
    }

    /// Get the registry code.
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Get the full language configuration from the registry.
    ///
    /// # Panics
    /// Panics if the language code is not found in the registry. This cannot
    /// happen for a Language built by `resolve`.
    pub fn config(&self) -> &'static LanguageConfig {
        LanguageRegistry::get()
            .get_by_code(self.code)
            .expect("Language code should always be valid")
    }

    /// Get the English name of the language.
    pub fn name(&self) -> &'static str {
        self.config().name
    }
}

/// Primary subtag of a BCP 47 style tag ("pt" for "pt-BR" or "pt_br").
///
/// `None` when the input is not shaped like a tag.
fn primary_subtag(input: &str) -> Option<&str> {
    let (primary, subtags) = input.split_once(['-', '_'])?;

    let primary_ok = (2..=3).contains(&primary.len())
        && primary.chars().all(|c| c.is_ascii_alphabetic());
    let subtags_ok = subtags
        .split(['-', '_'])
        .all(|part| !part.is_empty() && part.chars().all(|c| c.is_ascii_alphanumeric()));

    (primary_ok && subtags_ok).then_some(primary)
}

/// Normalized Levenshtein similarity in percent.
fn similarity(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let longest = a.len().max(b.len());
    if longest == 0 {
        return 100.0;
    }
    let distance = levenshtein(&a, &b);
    (1.0 - distance as f64 / longest as f64) * 100.0
}

fn levenshtein(a: &[char], b: &[char]) -> usize {
    let mut previous: Vec<usize> = (0..=b.len()).collect();
    let mut current = vec![0; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        current[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let substitution = previous[j] + usize::from(ca != cb);
            current[j + 1] = substitution.min(previous[j + 1] + 1).min(current[j] + 1);
        }
        std::mem::swap(&mut previous, &mut current);
    }

    previous[b.len()]
}
