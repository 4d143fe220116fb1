use indexmap::IndexMap;
use serde::Deserialize;

// ---------------------------------------------------------------------------
// Bots  (regexes/bots.yml)
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub(crate) struct BotEntry {
    pub regex: String,
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub producer: Option<BotProducer>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct BotProducer {
    pub name: Option<String>,
    pub url: Option<String>,
}

// ---------------------------------------------------------------------------
// Operating Systems  (regexes/oss.yml)
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub(crate) struct OsEntry {
    pub regex: String,
    pub name: String,
    #[serde(default)]
    pub version: Option<String>,
}

// ---------------------------------------------------------------------------
// Clients  (regexes/client/*.yml)
//
// All client files share the browser schema; `engine` only appears in
// browsers.yml.
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub(crate) struct ClientEntry {
    pub regex: String,
    pub name: String,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub engine: Option<EngineRef>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct EngineRef {
    pub default: Option<String>,
    #[serde(default)]
    pub versions: Option<IndexMap<String, String>>,
}

// ---------------------------------------------------------------------------
// Browser Engines  (regexes/client/browser_engine.yml)
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub(crate) struct EngineEntry {
    pub regex: String,
    pub name: String,
}

// ---------------------------------------------------------------------------
// Device files  (regexes/device/*.yml)
//
// Format: top-level mapping  brand_name → DeviceBrandEntry
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub(crate) struct DeviceBrandEntry {
    pub regex: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub models: Option<Vec<ModelEntry>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ModelEntry {
    pub regex: String,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub brand: Option<String>,
}

/// Raw deserialization target for a device YAML file.
/// Uses IndexMap to preserve YAML insertion order (first-match-wins).
pub(crate) type DeviceBrandMap = IndexMap<String, DeviceBrandEntry>;

// ---------------------------------------------------------------------------
// Vendor Fragments  (regexes/vendorfragments.yml)
// ---------------------------------------------------------------------------

/// brand_name → [regex_pattern, ...], in file order.
pub(crate) type VendorFragmentMap = IndexMap<String, Vec<String>>;

// ---------------------------------------------------------------------------
// uap-core  (regexes.yaml)
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Deserialize)]
pub(crate) struct UapRegexes {
    #[serde(default)]
    pub user_agent_parsers: Vec<UapUserAgentEntry>,
    #[serde(default)]
    pub os_parsers: Vec<UapOsEntry>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct UapUserAgentEntry {
    pub regex: String,
    #[serde(default)]
    pub regex_flag: Option<String>,
    #[serde(default)]
    pub family_replacement: Option<String>,
    #[serde(default)]
    pub v1_replacement: Option<String>,
    #[serde(default)]
    pub v2_replacement: Option<String>,
    #[serde(default)]
    pub v3_replacement: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct UapOsEntry {
    pub regex: String,
    #[serde(default)]
    pub regex_flag: Option<String>,
    #[serde(default)]
    pub os_replacement: Option<String>,
    #[serde(default)]
    pub os_v1_replacement: Option<String>,
    #[serde(default)]
    pub os_v2_replacement: Option<String>,
    #[serde(default)]
    pub os_v3_replacement: Option<String>,
    #[serde(default)]
    pub os_v4_replacement: Option<String>,
}

// ---------------------------------------------------------------------------
// Mobile-Detect rules  (rules.yml)
//
// Each section maps a rule name to a regex, in file order.
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Deserialize)]
pub(crate) struct MobileRules {
    #[serde(default)]
    pub phones: IndexMap<String, String>,
    #[serde(default)]
    pub tablets: IndexMap<String, String>,
    #[serde(default)]
    pub operating_systems: IndexMap<String, String>,
    #[serde(default)]
    pub browsers: IndexMap<String, String>,
}
