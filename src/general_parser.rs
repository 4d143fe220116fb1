use super::adapter::GeneralParser;
use super::db;
use super::error::{Error, Result};
use super::parser::{uap_pattern, CompiledParser, MatchResult};
use super::parser_data::{UapOsData, UapUserAgentData};
use super::substitution::substitute;
use super::types::{ClientInfo, GeneralClassification};
use super::version::VersionInfo;
use std::path::Path;

pub(crate) const ADAPTER: &str = "general parser";

/// Family reported by uap-core when no entry matches.
const OTHER: &str = "Other";

/// General-purpose parser over a uap-core `regexes.yaml` database.
///
/// Answers "which software, which OS" with split version components.
pub struct UaParser {
    user_agent_parser: CompiledParser<UapUserAgentData>,
    os_parser: CompiledParser<UapOsData>,
}

impl UaParser {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        let regexes: db::UapRegexes = serde_yaml::from_str(content)?;

        let (user_agent_parser, os_parser) = rayon::join(
            || {
                CompiledParser::build(regexes.user_agent_parsers.into_iter().map(|e| {
                    (
                        uap_pattern(&e.regex, e.regex_flag.as_deref()),
                        UapUserAgentData {
                            replacements: [
                                e.family_replacement,
                                e.v1_replacement,
                                e.v2_replacement,
                                e.v3_replacement,
                            ],
                        },
                    )
                }))
            },
            || {
                CompiledParser::build(regexes.os_parsers.into_iter().map(|e| {
                    (
                        uap_pattern(&e.regex, e.regex_flag.as_deref()),
                        UapOsData {
                            replacements: [
                                e.os_replacement,
                                e.os_v1_replacement,
                                e.os_v2_replacement,
                                e.os_v3_replacement,
                                e.os_v4_replacement,
                            ],
                        },
                    )
                }))
            },
        );

        Ok(Self {
            user_agent_parser: user_agent_parser?,
            os_parser: os_parser?,
        })
    }

    pub fn parse(&self, ua: &str) -> GeneralClassification {
        let user_agent = match self.user_agent_parser.match_first(ua) {
            Some(m) => {
                let [family, major, minor, patch] = resolve(&m, &m.data.replacements);
                client_info(family, major, minor, patch, None)
            }
            None => client_info(None, None, None, None, None),
        };
        let os = match self.os_parser.match_first(ua) {
            Some(m) => {
                let [family, major, minor, patch, patch_minor] = resolve(&m, &m.data.replacements);
                client_info(family, major, minor, patch, patch_minor)
            }
            None => client_info(None, None, None, None, None),
        };

        let summary = match (user_agent.summary(), os.summary()) {
            (Some(ua), Some(os)) => Some(format!("{}/{}", ua, os)),
            _ => None,
        };

        GeneralClassification {
            user_agent,
            os,
            summary,
        }
    }
}

impl GeneralParser for UaParser {
    fn parse_general(&self, ua: &str) -> Result<GeneralClassification> {
        if ua.trim().is_empty() {
            return Err(Error::MalformedInput { adapter: ADAPTER });
        }
        Ok(self.parse(ua))
    }
}

/// Field `i` is its replacement template when one is set, otherwise capture
/// group `i + 1`. Empty values are absent.
fn resolve<T, const N: usize>(
    m: &MatchResult<'_, T>,
    replacements: &[Option<String>; N],
) -> [Option<String>; N] {
    std::array::from_fn(|i| {
        let value = match &replacements[i] {
            Some(template) => substitute(template, &m.captures).trim().to_string(),
            None => m
                .captures
                .get_str(i + 1)
                .map(|s| s.trim().to_string())
                .unwrap_or_default(),
        };
        (!value.is_empty()).then_some(value)
    })
}

fn client_info(
    family: Option<String>,
    major: Option<String>,
    minor: Option<String>,
    patch: Option<String>,
    patch_minor: Option<String>,
) -> ClientInfo {
    let family = family.unwrap_or_else(|| OTHER.to_string());

    let mut version = String::new();
    if let Some(major) = &major {
        version.push_str(major);
        if let Some(minor) = &minor {
            version.push('.');
            version.push_str(minor);
            if let Some(patch) = &patch {
                let starts_numeric = patch.starts_with(|c: char| c.is_ascii_digit());
                version.push(if starts_numeric { '.' } else { ' ' });
                version.push_str(patch);
                if let Some(patch_minor) = &patch_minor {
                    version.push('.');
                    version.push_str(patch_minor);
                }
            }
        }
    }

    let summary = if version.is_empty() {
        family.clone()
    } else {
        format!("{} {}", family, version)
    };

    ClientInfo {
        version: VersionInfo::from_parts(
            major.as_deref(),
            minor.as_deref(),
            patch.as_deref(),
            summary,
        ),
        family: Some(family),
    }
}
