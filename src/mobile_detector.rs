use super::adapter::MobileTabletParser;
use super::db;
use super::error::{Error, Result};
use super::literal::extract_literals;
use super::types::MobileClassification;
use aho_corasick::AhoCorasick;
use std::path::Path;

pub(crate) const ADAPTER: &str = "mobile detector";

/// Literal prefixes shorter than this are too common to prefilter on.
const MIN_LITERAL_LEN: usize = 3;

/// Mobile/tablet detection over a Mobile-Detect style rule file.
///
/// A user agent is mobile when any phone, tablet, mobile OS or mobile
/// browser rule matches, and a tablet when any tablet rule matches.
pub struct MobileDetector {
    mobile_rules: RuleSet,
    tablet_rules: RuleSet,
}

impl MobileDetector {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        let rules: db::MobileRules = serde_yaml::from_str(content)?;

        let tablet_rules = RuleSet::build(&rules.tablets)?;
        let mobile_rules = RuleSet::build(
            rules
                .phones
                .iter()
                .chain(&rules.tablets)
                .chain(&rules.operating_systems)
                .chain(&rules.browsers),
        )?;

        tracing::debug!(
            mobile_rules = mobile_rules.rules.len(),
            always_tried = mobile_rules.always.len(),
            tablet_rules = tablet_rules.rules.len(),
            "mobile detector loaded"
        );

        Ok(Self {
            mobile_rules,
            tablet_rules,
        })
    }

    pub fn parse(&self, ua: &str) -> MobileClassification {
        MobileClassification {
            is_mobile: self.mobile_rules.first_match(ua).is_some(),
            is_tablet: self.tablet_rules.first_match(ua).is_some(),
        }
    }

    /// Name of the first rule that makes `ua` mobile, if any.
    pub fn mobile_rule(&self, ua: &str) -> Option<&str> {
        self.mobile_rules.first_match(ua)
    }
}

impl MobileTabletParser for MobileDetector {
    fn parse_mobile_tablet(&self, ua: &str) -> Result<MobileClassification> {
        if ua.trim().is_empty() {
            return Err(Error::MalformedInput { adapter: ADAPTER });
        }
        Ok(self.parse(ua))
    }
}

struct Rule {
    name: String,
    regex: fancy_regex::Regex,
}

impl Rule {
    fn is_match(&self, ua: &str) -> bool {
        self.regex.is_match(ua).unwrap_or(false)
    }
}

/// Rules behind an Aho-Corasick prefilter over their literal prefixes.
struct RuleSet {
    rules: Vec<Rule>,
    prefilter: AhoCorasick,
    /// Prefilter pattern index → rule index.
    literal_owner: Vec<usize>,
    /// Rules with no usable literal; tried on every input.
    always: Vec<usize>,
}

impl RuleSet {
    fn build<'a>(items: impl IntoIterator<Item = (&'a String, &'a String)>) -> Result<Self> {
        let mut rules = Vec::new();
        let mut literals: Vec<String> = Vec::new();
        let mut literal_owner = Vec::new();
        let mut always = Vec::new();

        for (idx, (name, pattern)) in items.into_iter().enumerate() {
            let lits = extract_literals(pattern, MIN_LITERAL_LEN);
            if lits.is_empty() {
                always.push(idx);
            }
            for lit in lits {
                literals.push(lit);
                literal_owner.push(idx);
            }
            rules.push(Rule {
                name: name.clone(),
                regex: fancy_regex::Regex::new(&format!("(?is){}", pattern))?,
            });
        }

        let prefilter = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .build(&literals)?;

        Ok(Self {
            rules,
            prefilter,
            literal_owner,
            always,
        })
    }

    /// Lowest-index rule matching `ua`.
    fn first_match(&self, ua: &str) -> Option<&str> {
        // The automaton folds ASCII case only; other input goes to every rule.
        if !ua.is_ascii() {
            return self
                .rules
                .iter()
                .find(|rule| rule.is_match(ua))
                .map(|rule| rule.name.as_str());
        }

        let hits = self
            .prefilter
            .find_overlapping_iter(ua)
            .map(|m| self.literal_owner[m.pattern().as_usize()]);

        let mut best: Option<usize> = None;
        for idx in self.always.iter().copied().chain(hits) {
            if best.is_some_and(|b| idx >= b) {
                continue;
            }
            if self.rules[idx].is_match(ua) {
                best = Some(idx);
            }
        }
        best.map(|idx| self.rules[idx].name.as_str())
    }
}
