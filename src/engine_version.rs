use crate::error::Result;
use std::collections::HashMap;

/// Engines whose version sits behind a token other than their own name.
const ENGINE_TOKENS: [(&str, &str); 3] = [
    ("Blink", r"Chr[o0]me|Chromium|Cr(?:iOS|Mo)"),
    ("Arachne", r"Arachne/5\."),
    ("LibWeb", r"LibWeb\+LibJs"),
];

/// Gecko-family engines carry their version in `rv:` next to a dated token.
const GECKO_ENGINES: [&str; 2] = ["Gecko", "Clecko"];
const GECKO_RV: &str = r"(?i) (?:rv[: ]([0-9.]+)).*(?:g|cl)ecko/[0-9]{8,10}";

/// A dotted version is taken whole; a bare number only up to seven digits
/// and only where it ends.
const VERSION_TAIL: &str = r"\s*[/_]?\s*(\d+\.\d[.\d]*|\d{1,7}(?=\D|$))";

/// Reads a rendering engine's version from the user agent once the engine
/// name is known.
pub(crate) struct EngineVersionParser {
    gecko_rv: fancy_regex::Regex,
    /// Lowercased engine name → version regex.
    by_engine: HashMap<String, fancy_regex::Regex>,
}

impl EngineVersionParser {
    pub fn build<'a>(engines: impl IntoIterator<Item = &'a str>) -> Result<Self> {
        let mut by_engine = HashMap::new();
        for engine in engines {
            let key = engine.to_ascii_lowercase();
            if engine.is_empty() || by_engine.contains_key(&key) {
                continue;
            }
            let token = ENGINE_TOKENS
                .iter()
                .find(|(name, _)| name.eq_ignore_ascii_case(engine))
                .map_or_else(|| regex::escape(engine), |(_, token)| token.to_string());
            let re = fancy_regex::Regex::new(&format!("(?i)(?:{}){}", token, VERSION_TAIL))?;
            by_engine.insert(key, re);
        }

        Ok(Self {
            gecko_rv: fancy_regex::Regex::new(GECKO_RV)?,
            by_engine,
        })
    }

    pub fn len(&self) -> usize {
        self.by_engine.len()
    }

    /// Version of `engine` in `ua`, if the user agent carries one.
    pub fn parse<'a>(&self, engine: &str, ua: &'a str) -> Option<&'a str> {
        if GECKO_ENGINES.iter().any(|g| g.eq_ignore_ascii_case(engine)) {
            if let Ok(Some(caps)) = self.gecko_rv.captures(ua) {
                if let Some(version) = caps.get(1) {
                    return Some(version.as_str());
                }
            }
        }

        let re = self.by_engine.get(&engine.to_ascii_lowercase())?;
        let caps = re.captures(ua).ok()??;
        caps.get(1).map(|m| m.as_str())
    }
}
