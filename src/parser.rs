use rayon::prelude::*;

use crate::error::{Error, Result};

/// Matomo's word-boundary-like prefix applied to all device-detector regexes.
/// Matches: start of string, or a non-alphanumeric boundary, or special prefixes.
const MATOMO_BOUNDARY_PREFIX: &str = r"(?:^|[^A-Z0-9_\-]|[^A-Z0-9\-]_|sprd\-|MZ\-)";

/// Build the full Matomo-prefixed, case-insensitive regex string.
pub(crate) fn full_pattern(pattern: &str) -> String {
    format!("(?i){}(?:{})", MATOMO_BOUNDARY_PREFIX, pattern)
}

/// uap-core patterns are used as written; `regex_flag: 'i'` turns on
/// case-insensitive matching.
pub(crate) fn uap_pattern(pattern: &str, flag: Option<&str>) -> String {
    match flag {
        Some(f) if f.contains('i') => format!("(?i){}", pattern),
        _ => pattern.to_string(),
    }
}

/// Helper: compile a regex with Matomo's boundary prefix and case-insensitive flag
/// using fancy_regex (needed for patterns with PCRE features).
pub(crate) fn compile_regex(pattern: &str) -> Result<fancy_regex::Regex> {
    let full = full_pattern(pattern);
    Ok(fancy_regex::Regex::new(&full)?)
}

// ---------------------------------------------------------------------------
// Captures: one type over regex::Captures and fancy_regex::Captures
// ---------------------------------------------------------------------------

/// Lightweight wrapper so callers (substitute, capture_or_empty) don't need
/// to know which regex engine produced the match.
pub(crate) enum Captures<'a> {
    Standard(regex::Captures<'a>),
    Fancy(fancy_regex::Captures<'a>),
}

impl<'a> Captures<'a> {
    /// Get the matched text for capture group `i`, or `None` if the group
    /// didn't participate in the match.
    pub fn get_str(&self, i: usize) -> Option<&'a str> {
        match self {
            Captures::Standard(c) => c.get(i).map(|m| m.as_str()),
            Captures::Fancy(c) => c.get(i).map(|m| m.as_str()),
        }
    }
}

// ---------------------------------------------------------------------------
// Shared result types
// ---------------------------------------------------------------------------

/// A compiled entry: one fancy_regex rule plus its associated data.
/// Used for model sub-regexes within a brand (small count, not on hot path).
pub(crate) struct CompiledEntry<T> {
    pub regex: fancy_regex::Regex,
    pub data: T,
}

/// Result of a successful match.
pub(crate) struct MatchResult<'a, T> {
    pub data: &'a T,
    pub captures: Captures<'a>,
}

/// Patterns split by the engine that can run them.
struct PatternSplit {
    filtered: regex_filtered::Regexes,
    /// Maps regex-filtered index → item index.
    filtered_to_item: Vec<usize>,
    /// Items whose patterns require PCRE features, sorted by item index.
    fancy: Vec<(usize, fancy_regex::Regex)>,
}

impl PatternSplit {
    /// Patterns that compile with the `regex` crate go through regex-filtered
    /// for fast Thompson-NFA matching; the rest fall back to fancy_regex.
    fn build(patterns: &[String]) -> Result<Self> {
        let is_standard: Vec<bool> = patterns
            .par_iter()
            .map(|p| regex::Regex::new(p).is_ok())
            .collect();

        let mut builder = regex_filtered::Builder::new();
        let mut filtered_to_item: Vec<usize> = Vec::new();

        for (idx, pattern) in patterns.iter().enumerate() {
            if is_standard[idx] {
                builder = builder.push(pattern).map_err(|e| Error::Pattern {
                    pattern: pattern.clone(),
                    reason: e.to_string(),
                })?;
                filtered_to_item.push(idx);
            }
        }

        let filtered = builder.build().map_err(|e| Error::Pattern {
            pattern: format!("<set of {} patterns>", filtered_to_item.len()),
            reason: e.to_string(),
        })?;

        let fancy_indices: Vec<usize> = (0..patterns.len()).filter(|&i| !is_standard[i]).collect();
        let fancy_regexes: Vec<fancy_regex::Regex> = fancy_indices
            .par_iter()
            .map(|&idx| fancy_regex::Regex::new(&patterns[idx]).map_err(Error::from))
            .collect::<Result<Vec<_>>>()?;

        tracing::debug!(
            standard = filtered_to_item.len(),
            fancy = fancy_regexes.len(),
            "compiled pattern set"
        );

        Ok(Self {
            filtered,
            filtered_to_item,
            fancy: fancy_indices.into_iter().zip(fancy_regexes).collect(),
        })
    }

    /// Lowest-index item matching `ua`, with its captures.
    ///
    /// `filtered_to_item` is monotonically increasing and `matching()`
    /// yields in ascending order, so the first filtered hit is the lowest
    /// standard item. Fancy items below it are tried first.
    fn match_first<'a>(&'a self, ua: &'a str) -> Option<(usize, Captures<'a>)> {
        let best_filtered: Option<(usize, &regex::Regex)> = self
            .filtered
            .matching(ua)
            .next()
            .map(|(filtered_idx, re)| (self.filtered_to_item[filtered_idx], re));

        let cutoff = best_filtered.map(|(idx, _)| idx).unwrap_or(usize::MAX);

        for (idx, re) in &self.fancy {
            if *idx >= cutoff {
                break;
            }
            if let Ok(Some(caps)) = re.captures(ua) {
                return Some((*idx, Captures::Fancy(caps)));
            }
        }

        if let Some((idx, re)) = best_filtered {
            if let Some(caps) = re.captures(ua) {
                return Some((idx, Captures::Standard(caps)));
            }
        }

        // The filtered hit did not produce captures; fall through to the
        // remaining fancy items.
        if cutoff < usize::MAX {
            for (idx, re) in &self.fancy {
                if *idx <= cutoff {
                    continue;
                }
                if let Ok(Some(caps)) = re.captures(ua) {
                    return Some((*idx, Captures::Fancy(caps)));
                }
            }
        }

        None
    }
}

// ---------------------------------------------------------------------------
// CompiledParser: flat first-match lists (bots, OS, clients, engines, uap)
// ---------------------------------------------------------------------------

/// Core matching engine: regex-filtered prefilter + fancy-regex fallback.
///
/// `T` is the associated data for each entry (e.g. bot name, OS name, etc.).
pub(crate) struct CompiledParser<T> {
    patterns: PatternSplit,
    /// Entry data indexed by entry index.
    data: Vec<T>,
}

impl<T> CompiledParser<T> {
    /// Build from `(full_pattern, data)` pairs. Callers wrap their patterns
    /// with [`full_pattern`] or [`uap_pattern`] first.
    pub fn build(items: impl IntoIterator<Item = (String, T)>) -> Result<Self> {
        let (full_patterns, data): (Vec<String>, Vec<T>) = items.into_iter().unzip();
        Ok(Self {
            patterns: PatternSplit::build(&full_patterns)?,
            data,
        })
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Entry data in file order.
    pub fn data(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    /// First matching entry, in file order.
    pub fn match_first<'a>(&'a self, ua: &'a str) -> Option<MatchResult<'a, T>> {
        self.patterns
            .match_first(ua)
            .map(|(idx, captures)| MatchResult {
                data: &self.data[idx],
                captures,
            })
    }
}

// ---------------------------------------------------------------------------
// DeviceBrandParser: brand gate, then model list (device files)
// ---------------------------------------------------------------------------

/// Brand entry: data + model sub-regexes (gate regex handled by regex-filtered).
pub(crate) struct BrandEntry<B, M> {
    pub data: B,
    pub models: Vec<CompiledEntry<M>>,
}

/// Result of a device brand match.
pub(crate) struct BrandMatchResult<'a, B, M> {
    pub brand_data: &'a B,
    /// Captures from the brand regex (used if no model matches).
    pub brand_captures: Captures<'a>,
    /// If a model regex matched, its data and captures.
    pub model_match: Option<MatchResult<'a, M>>,
}

/// Two-level matching engine for device brand/model detection.
///
/// Brand gate regexes use regex-filtered for fast prefiltering;
/// model regexes within a matched brand stay as fancy_regex.
pub(crate) struct DeviceBrandParser<B, M> {
    gates: PatternSplit,
    /// Brand data + models, indexed by brand index.
    brands: Vec<BrandEntry<B, M>>,
}

impl<B, M> DeviceBrandParser<B, M> {
    /// Each item is `(full_matomo_pattern, brand_data, compiled_model_entries)`.
    pub fn build(items: Vec<(String, B, Vec<CompiledEntry<M>>)>) -> Result<Self> {
        let mut full_patterns: Vec<String> = Vec::with_capacity(items.len());
        let mut brands: Vec<BrandEntry<B, M>> = Vec::with_capacity(items.len());

        for (pattern, data, models) in items {
            full_patterns.push(pattern);
            brands.push(BrandEntry { data, models });
        }

        Ok(Self {
            gates: PatternSplit::build(&full_patterns)?,
            brands,
        })
    }

    /// Find the first matching brand, then try model regexes within it.
    pub fn match_first<'a>(&'a self, ua: &'a str) -> Option<BrandMatchResult<'a, B, M>> {
        let (brand_idx, brand_captures) = self.gates.match_first(ua)?;
        let brand = &self.brands[brand_idx];
        Some(BrandMatchResult {
            brand_data: &brand.data,
            brand_captures,
            model_match: match_model(ua, &brand.models),
        })
    }
}

/// Try model regexes within a matched brand (stays as fancy_regex).
fn match_model<'a, M>(ua: &'a str, models: &'a [CompiledEntry<M>]) -> Option<MatchResult<'a, M>> {
    models.iter().find_map(|model| match model.regex.captures(ua) {
        Ok(Some(caps)) => Some(MatchResult {
            data: &model.data,
            captures: Captures::Fancy(caps),
        }),
        _ => None,
    })
}
