use super::adapter::DeviceAndBotParser;
use super::db;
use super::device_prefilter::DevicePrefilter;
use super::engine_version::EngineVersionParser;
use super::error::{Error, Result};
use super::helpers::*;
use super::os_meta::{os_short_name, PlatformRegexes};
use super::parser::{
    compile_regex, full_pattern, CompiledEntry, CompiledParser, DeviceBrandParser,
};
use super::parser_data::*;
use super::substitution::substitute;
use super::types::*;
use super::version::VersionInfo;
use rayon::prelude::*;
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::Path;

pub(crate) const ADAPTER: &str = "device detector";

/// Client parsers are tried in this order; the first hit wins.
const CLIENT_TYPES: [ClientType; 6] = [
    ClientType::Browser,
    ClientType::FeedReader,
    ClientType::MobileApp,
    ClientType::Library,
    ClientType::MediaPlayer,
    ClientType::Pim,
];

const APPLE_OSES: [&str; 5] = ["iPadOS", "tvOS", "watchOS", "iOS", "Mac"];

/// How a device file decides whether it is worth running at all.
#[derive(Clone, Copy)]
enum PrefilterKind {
    /// UA must match a hardcoded regex.
    Specific(&'static str),
    /// UA must match one of the file's brand regexes.
    Overall,
    /// Always run.
    None,
}

/// Device files in Matomo's order: `(file, prefilter, claims)`.
///
/// `claims`: a prefilter match alone ends device detection even if no brand
/// regex matches (HbbTv/ShellTv), so later files can't produce false positives.
const DEVICE_FILES: [(&str, PrefilterKind, bool); 8] = [
    (
        "shell_tv.yml",
        PrefilterKind::Specific(r"(?i)[a-z]+[ _]Shell[ _]\w{6}|tclwebkit"),
        true,
    ),
    (
        "televisions.yml",
        PrefilterKind::Specific(r"(?i)(?:HbbTV|SmartTvA)/"),
        true,
    ),
    ("consoles.yml", PrefilterKind::Overall, false),
    ("car_browsers.yml", PrefilterKind::Overall, false),
    ("cameras.yml", PrefilterKind::Overall, false),
    ("portable_media_player.yml", PrefilterKind::Overall, false),
    ("notebooks.yml", PrefilterKind::Specific(r"FBMD/"), false),
    ("mobiles.yml", PrefilterKind::None, false),
];

type DeviceParser = (
    DevicePrefilter,
    bool,
    DeviceBrandParser<DeviceBrandData, DeviceModelData>,
);

/// Bot, OS, client, engine and brand/model detection over a Matomo
/// device-detector `regexes/` directory.
pub struct DeviceDetector {
    bot_parser: CompiledParser<BotData>,
    os_parser: CompiledParser<OsData>,
    /// One parser per entry of `CLIENT_TYPES`, same order.
    client_parsers: Vec<CompiledParser<ClientData>>,
    engine_parser: CompiledParser<EngineData>,
    engine_version_parser: EngineVersionParser,
    vendor_fragment_parser: CompiledParser<VendorFragmentData>,
    device_parsers: Vec<DeviceParser>,
    platforms: PlatformRegexes,
}

impl DeviceDetector {
    /// Load the regex files from `dir` and build the detector.
    ///
    /// `dir` should point to the `regexes/` directory of a Matomo
    /// device-detector checkout. `bots.yml`, `oss.yml`, `client/browsers.yml`
    /// and `client/browser_engine.yml` are required; every other file is
    /// optional and treated as empty when missing.
    pub fn from_dir(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        let client_dir = dir.join("client");
        let device_dir = dir.join("device");

        // Build flat-list parsers and device parsers concurrently.
        let (flat_result, device_parsers_result) = rayon::join(
            || -> Result<_> {
                let bots: Vec<db::BotEntry> = load_yaml(&dir.join("bots.yml"))?;
                let bot_parser = CompiledParser::build(bots.into_iter().map(|b| {
                    (
                        full_pattern(&b.regex),
                        BotData {
                            name: b.name,
                            category: b.category,
                            url: b.url,
                            producer: b.producer,
                        },
                    )
                }))?;

                let oss: Vec<db::OsEntry> = load_yaml(&dir.join("oss.yml"))?;
                let os_parser = CompiledParser::build(oss.into_iter().map(|o| {
                    (
                        full_pattern(&o.regex),
                        OsData {
                            name: o.name,
                            version_template: o.version,
                        },
                    )
                }))?;

                let client_parsers = CLIENT_TYPES
                    .into_par_iter()
                    .map(|kind| build_client_parser(&client_dir, kind))
                    .collect::<Result<Vec<_>>>()?;

                let engines: Vec<db::EngineEntry> =
                    load_yaml(&client_dir.join("browser_engine.yml"))?;
                let engine_parser = CompiledParser::build(
                    engines
                        .into_iter()
                        .map(|e| (full_pattern(&e.regex), EngineData { name: e.name })),
                )?;

                // Every engine name either database can produce.
                let engine_version_parser = EngineVersionParser::build(
                    engine_parser.data().map(|e| e.name.as_str()).chain(
                        client_parsers
                            .iter()
                            .flat_map(|p| p.data())
                            .flat_map(|c| {
                                c.engine_default.iter().chain(
                                    c.engine_versions.iter().flat_map(|v| v.values()),
                                )
                            })
                            .map(String::as_str),
                    ),
                )?;

                let vf_map: db::VendorFragmentMap =
                    load_optional_yaml(&dir.join("vendorfragments.yml"))?;
                let vendor_fragment_parser =
                    CompiledParser::build(vf_map.into_iter().flat_map(|(brand, patterns)| {
                        // Each fragment must be followed by a non-alphanumeric character.
                        patterns.into_iter().map(move |pat| {
                            (
                                full_pattern(&format!("{}[^a-z0-9]+", pat)),
                                VendorFragmentData {
                                    brand: brand.clone(),
                                },
                            )
                        })
                    }))?;

                Ok((
                    bot_parser,
                    os_parser,
                    client_parsers,
                    engine_parser,
                    engine_version_parser,
                    vendor_fragment_parser,
                ))
            },
            || -> Result<Vec<DeviceParser>> {
                // Order preserved by par_iter collect.
                let parsers = DEVICE_FILES
                    .into_par_iter()
                    .map(|(file, prefilter_kind, claims)| -> Result<_> {
                        let Some((parser, brand_regexes)) =
                            build_device_brand_parser(&device_dir.join(file))?
                        else {
                            return Ok(None);
                        };

                        let prefilter = match prefilter_kind {
                            PrefilterKind::Specific(pat) => {
                                DevicePrefilter::Regex(fancy_regex::Regex::new(pat)?)
                            }
                            PrefilterKind::Overall => {
                                DevicePrefilter::build_overall_prefilter(&brand_regexes)?
                            }
                            PrefilterKind::None => DevicePrefilter::None,
                        };

                        Ok(Some((prefilter, claims, parser)))
                    })
                    .collect::<Result<Vec<_>>>()?;
                Ok(parsers.into_iter().flatten().collect())
            },
        );

        let (
            bot_parser,
            os_parser,
            client_parsers,
            engine_parser,
            engine_version_parser,
            vendor_fragment_parser,
        ) = flat_result?;
        let device_parsers = device_parsers_result?;

        tracing::debug!(
            dir = %dir.display(),
            bots = bot_parser.len(),
            oss = os_parser.len(),
            engines = engine_version_parser.len(),
            device_files = device_parsers.len(),
            "device detector loaded"
        );

        Ok(Self {
            bot_parser,
            os_parser,
            client_parsers,
            engine_parser,
            engine_version_parser,
            vendor_fragment_parser,
            device_parsers,
            platforms: PlatformRegexes::compile()?,
        })
    }

    /// Parse a User-Agent string and return detection results.
    ///
    /// The returned `Detection` borrows from both `self` (detector data) and `ua`,
    /// avoiding heap allocations for fields that can reference existing data.
    pub fn parse<'a>(&'a self, ua: &'a str) -> Detection<'a> {
        // 1. Bot check: a bot carries nothing else.
        if let Some(m) = self.bot_parser.match_first(ua) {
            return Detection {
                bot: Some(Bot {
                    name: substitute(&m.data.name, &m.captures),
                    category: m.data.category.as_deref(),
                    url: m.data.url.as_deref(),
                    producer: m.data.producer.as_ref().map(|p| BotProducer {
                        name: p.name.as_deref(),
                        url: p.url.as_deref(),
                    }),
                }),
                ..Detection::default()
            };
        }

        // 2. OS detection
        let os = self.os_parser.match_first(ua).map(|m| {
            let version = match &m.data.version_template {
                Some(tpl) => substitute(tpl, &m.captures),
                None => capture_or_empty(&m.captures, 1),
            };
            let name = substitute(&m.data.name, &m.captures);
            Os {
                short_name: os_short_name(&name),
                platform: self.platforms.detect(ua),
                version: normalize_version(version),
                name,
            }
        });

        // 3. Client detection (try each client parser in order)
        let client = self.detect_client(ua);

        // 4. Device brand/model
        let (mut brand, mut model) = match self.detect_device(ua) {
            Some(d) => (d.brand, d.model),
            None => (Cow::Borrowed(""), Cow::Borrowed("")),
        };

        // "Unknown" is a placeholder brand, not a brand.
        if brand == "Unknown" {
            brand = Cow::Borrowed("");
        }

        // 5. Vendor fragment fallback.
        if brand.is_empty() {
            if let Some(m) = self.vendor_fragment_parser.match_first(ua) {
                brand = Cow::Borrowed(m.data.brand.as_str());
            }
        }

        // 6. Apple hardware only runs Apple OSes, and vice versa.
        let is_apple_os = os
            .as_ref()
            .map_or(false, |o| APPLE_OSES.iter().any(|apple| *apple == o.name));
        if brand == "Apple" && !is_apple_os {
            brand = Cow::Borrowed("");
            model = Cow::Borrowed("");
        }
        if brand.is_empty() && is_apple_os {
            brand = Cow::Borrowed("Apple");
        }

        let device = if !brand.is_empty() || !model.is_empty() {
            Some(Device { brand, model })
        } else {
            None
        };

        Detection {
            bot: None,
            os,
            client,
            device,
        }
    }

    fn detect_client<'a>(&'a self, ua: &'a str) -> Option<Client<'a>> {
        self.client_parsers.iter().find_map(|parser| {
            let m = parser.match_first(ua)?;
            let version = match &m.data.version_template {
                Some(tpl) => substitute(tpl, &m.captures),
                None => capture_or_empty(&m.captures, 1),
            };
            let version = normalize_version(version);

            let (engine, engine_version) = self.resolve_engine(ua, m.data, &version);

            Some(Client {
                kind: m.data.kind,
                name: substitute(&m.data.name, &m.captures),
                version,
                engine,
                engine_version,
            })
        })
    }

    /// Only browsers have an engine. The browser's own default (moved by
    /// version thresholds) wins over the engine database; the version is
    /// always read from the user agent by engine name.
    fn resolve_engine<'a>(
        &'a self,
        ua: &'a str,
        client_data: &'a ClientData,
        browser_version: &str,
    ) -> (Cow<'a, str>, Cow<'a, str>) {
        if client_data.kind != ClientType::Browser {
            return (Cow::Borrowed(""), Cow::Borrowed(""));
        }

        let mut engine: &'a str = client_data.engine_default.as_deref().unwrap_or("");
        if !browser_version.is_empty() {
            if let Some(versions) = &client_data.engine_versions {
                // Last threshold the browser version reaches wins.
                for (threshold, name) in versions {
                    if version_ge(browser_version, threshold) {
                        engine = name.as_str();
                    }
                }
            }
        }

        if engine.is_empty() {
            engine = self
                .engine_parser
                .match_first(ua)
                .map_or("", |m| m.data.name.as_str());
        }
        if engine.is_empty() {
            return (Cow::Borrowed(""), Cow::Borrowed(""));
        }

        let version = self.engine_version_parser.parse(engine, ua).unwrap_or("");
        (Cow::Borrowed(engine), Cow::Borrowed(version))
    }

    fn detect_device<'a>(&'a self, ua: &'a str) -> Option<Device<'a>> {
        for (prefilter, claims, parser) in &self.device_parsers {
            if !prefilter.matches(ua) {
                continue;
            }

            if let Some(m) = parser.match_first(ua) {
                let brand_data = m.brand_data;

                return Some(match &m.model_match {
                    // Model regex matched; its brand overrides the file brand.
                    Some(model_match) => Device {
                        brand: Cow::Borrowed(
                            model_match
                                .data
                                .brand
                                .as_deref()
                                .unwrap_or(&brand_data.brand),
                        ),
                        model: match &model_match.data.model_template {
                            Some(tpl) => substitute(tpl, &model_match.captures),
                            None => Cow::Borrowed(""),
                        },
                    },
                    // Only brand regex matched, no specific model.
                    None => Device {
                        brand: Cow::Borrowed(&brand_data.brand),
                        model: match &brand_data.model_template {
                            Some(tpl) => substitute(tpl, &m.brand_captures),
                            None => Cow::Borrowed(""),
                        },
                    },
                });
            }

            if *claims {
                return Some(Device {
                    brand: Cow::Borrowed(""),
                    model: Cow::Borrowed(""),
                });
            }
        }

        None
    }
}

impl DeviceAndBotParser for DeviceDetector {
    fn parse_device_and_bot(&self, ua: &str) -> Result<DeviceClassification> {
        if ua.trim().is_empty() {
            return Err(Error::MalformedInput { adapter: ADAPTER });
        }
        Ok(self.parse(ua).into())
    }
}

impl From<Detection<'_>> for DeviceClassification {
    fn from(detection: Detection<'_>) -> Self {
        if let Some(bot) = detection.bot {
            let producer = bot.producer.as_ref();
            return Self {
                is_bot: true,
                bot_info: Some(BotInfo {
                    name: non_empty(&bot.name),
                    category: bot.category.and_then(non_empty),
                    url: bot.url.and_then(non_empty),
                    vendor: BotVendor {
                        name: producer.and_then(|p| p.name).and_then(non_empty),
                        url: producer.and_then(|p| p.url).and_then(non_empty),
                    },
                }),
                ..Self::default()
            };
        }

        let mut out = Self::default();

        if let Some(client) = &detection.client {
            out.client_type = Some(client.kind.as_str().to_string());
            out.client_name = non_empty(&client.name);
            if !client.engine.is_empty() {
                out.rendering_engine = RenderingEngine {
                    name: Some(client.engine.to_string()),
                    version: VersionInfo::parse(
                        &client.engine_version,
                        display_name(&client.engine, &client.engine_version),
                    ),
                };
            }
        }

        if let Some(device) = &detection.device {
            out.client_brand = non_empty(&device.brand);
            out.client_model = non_empty(&device.model);
        }

        if let Some(os) = &detection.os {
            out.os = OsMeta {
                name: non_empty(&os.name),
                short_name: Some(os.short_name.to_string()),
                version: non_empty(&os.version),
                platform: os.platform.map(str::to_string),
            };
        }

        out
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn load_yaml<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_yaml::from_str(&content)?)
}

fn load_optional_yaml<T: DeserializeOwned + Default>(path: &Path) -> Result<T> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "optional database file missing, using empty");
        return Ok(T::default());
    }
    load_yaml(path)
}

fn build_client_parser(client_dir: &Path, kind: ClientType) -> Result<CompiledParser<ClientData>> {
    let path = client_dir.join(kind.file_name());
    let entries: Vec<db::ClientEntry> = match kind {
        ClientType::Browser => load_yaml(&path)?,
        _ => load_optional_yaml(&path)?,
    };
    CompiledParser::build(entries.into_iter().map(|e| {
        let (engine_default, engine_versions) = match e.engine {
            Some(eng) => (eng.default, eng.versions),
            None => (None, None),
        };
        (
            full_pattern(&e.regex),
            ClientData {
                kind,
                name: e.name,
                version_template: e.version,
                engine_default,
                engine_versions,
            },
        )
    }))
}

/// Returns `(parser, brand_regex_strings)`, or `None` when the file is
/// missing or empty. The raw brand regexes feed the `Overall` prefilter.
fn build_device_brand_parser(
    path: &Path,
) -> Result<
    Option<(
        DeviceBrandParser<DeviceBrandData, DeviceModelData>,
        Vec<String>,
    )>,
> {
    let brands: db::DeviceBrandMap = load_optional_yaml(path)?;

    // Keep brands that have a regex, in file order.
    let brand_items: Vec<(String, String, db::DeviceBrandEntry)> = brands
        .into_iter()
        .filter_map(|(brand_name, mut entry)| {
            let brand_regex_str = entry.regex.take()?;
            Some((brand_name, brand_regex_str, entry))
        })
        .collect();

    if brand_items.is_empty() {
        return Ok(None);
    }

    let brand_regex_strings: Vec<String> = brand_items.iter().map(|(_, r, _)| r.clone()).collect();

    // Brand gate regexes are compiled by DeviceBrandParser::build(); only
    // model regexes are compiled here.
    let built_items: Vec<(String, DeviceBrandData, Vec<CompiledEntry<DeviceModelData>>)> =
        brand_items
            .into_par_iter()
            .map(|(brand_name, brand_regex_str, entry)| {
                let model_entries: Vec<CompiledEntry<DeviceModelData>> = entry
                    .models
                    .unwrap_or_default()
                    .into_iter()
                    .map(|model| {
                        Ok(CompiledEntry {
                            regex: compile_regex(&model.regex)?,
                            data: DeviceModelData {
                                brand: model.brand,
                                model_template: model.model,
                            },
                        })
                    })
                    .collect::<Result<Vec<_>>>()?;

                Ok((
                    full_pattern(&brand_regex_str),
                    DeviceBrandData {
                        brand: brand_name,
                        model_template: entry.model,
                    },
                    model_entries,
                ))
            })
            .collect::<Result<Vec<_>>>()?;

    Ok(Some((
        DeviceBrandParser::build(built_items)?,
        brand_regex_strings,
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::OnceLock;

    const CHROME_WINDOWS: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";
    const SAMSUNG_CHROME: &str = "Mozilla/5.0 (Linux; Android 13; SM-G991B) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/119.0.6045.163 Mobile Safari/537.36";

    fn detector() -> &'static DeviceDetector {
        static DETECTOR: OnceLock<DeviceDetector> = OnceLock::new();
        DETECTOR.get_or_init(|| {
            DeviceDetector::from_dir(concat!(
                env!("CARGO_MANIFEST_DIR"),
                "/tests/data/device-detector"
            ))
            .unwrap()
        })
    }

    #[test]
    fn bot_carries_only_bot_identity() {
        let d = detector().parse("Mozilla/5.0 (compatible; Googlebot/2.1; +http://www.google.com/bot.html)");
        assert!(d.is_bot());
        let bot = d.bot().unwrap();
        assert_eq!(bot.name, "Googlebot");
        assert_eq!(bot.category, Some("Search bot"));
        assert_eq!(bot.producer.as_ref().unwrap().name, Some("Google Inc."));
        assert!(d.os().is_none());
        assert!(d.client().is_none());
        assert!(d.device().is_none());
    }

    #[test]
    fn chrome_on_windows() {
        let d = detector().parse(CHROME_WINDOWS);
        let os = d.os().unwrap();
        assert_eq!(os.name, "Windows");
        assert_eq!(os.version, "10");
        assert_eq!(os.short_name, "WIN");
        assert_eq!(os.platform, Some("x64"));

        let client = d.client().unwrap();
        assert_eq!(client.kind, ClientType::Browser);
        assert_eq!(client.name, "Chrome");
        assert_eq!(client.version, "120.0.0.0");
        // Chrome >= 28 switches the default engine to Blink.
        assert_eq!(client.engine, "Blink");
        assert_eq!(client.engine_version, "120.0.0.0");
        assert!(d.device().is_none());
    }

    #[test]
    fn brand_and_model_from_device_file() {
        let d = detector().parse(SAMSUNG_CHROME);
        let device = d.device().unwrap();
        assert_eq!(device.brand, "Samsung");
        assert_eq!(device.model, "Galaxy S21 5G");
        assert_eq!(d.os().unwrap().name, "Android");
        assert_eq!(d.os().unwrap().version, "13");
    }

    #[test]
    fn ios_version_underscores_are_normalized() {
        let d = detector().parse(
            "Mozilla/5.0 (iPhone; CPU iPhone OS 17_1 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.1 Mobile/15E148 Safari/604.1",
        );
        let os = d.os().unwrap();
        assert_eq!(os.name, "iOS");
        assert_eq!(os.version, "17.1");
        let client = d.client().unwrap();
        assert_eq!(client.name, "Mobile Safari");
        assert_eq!(client.engine, "WebKit");
        assert_eq!(client.engine_version, "605.1.15");
        let device = d.device().unwrap();
        assert_eq!(device.brand, "Apple");
        assert_eq!(device.model, "iPhone");
    }

    #[test]
    fn apple_os_implies_apple_brand() {
        let d = detector().parse(
            "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/14.1.2 Safari/605.1.15",
        );
        assert_eq!(d.os().unwrap().name, "Mac");
        assert_eq!(d.os().unwrap().version, "10.15.7");
        let device = d.device().unwrap();
        assert_eq!(device.brand, "Apple");
        assert_eq!(device.model, "");
    }

    #[test]
    fn vendor_fragment_supplies_brand() {
        let d = detector()
            .parse("Mozilla/5.0 (Windows NT 10.0; Win64; x64; Trident/7.0; MDDRJS; rv:11.0) like Gecko");
        assert_eq!(d.device().unwrap().brand, "Dell");
    }

    #[test]
    fn library_without_engine() {
        let d = detector().parse("curl/8.4.0");
        let client = d.client().unwrap();
        assert_eq!(client.kind, ClientType::Library);
        assert_eq!(client.version, "8.4.0");
        assert_eq!(client.engine, "");
        assert!(d.os().is_none());
    }

    #[test]
    fn engine_from_database_when_browser_has_none() {
        let d = detector().parse(
            "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:109.0) Gecko/20100101 SeaMonkey/2.53.17",
        );
        let client = d.client().unwrap();
        assert_eq!(client.name, "SeaMonkey");
        assert_eq!(client.version, "2.53.17");
        assert_eq!(client.engine, "Gecko");
        assert_eq!(client.engine_version, "109.0");
    }

    #[test]
    fn engine_version_comes_from_the_user_agent() {
        // The engine database only names engines; it has no capture groups.
        let d = detector().parse(
            "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/14.1.2 Safari/605.1.15",
        );
        let client = d.client().unwrap();
        assert_eq!(client.engine, "WebKit");
        assert_eq!(client.engine_version, "605.1.15");
    }

    #[test]
    fn oversized_browser_version_still_crosses_thresholds() {
        let d = detector().parse("Mozilla/5.0 (Windows NT 10.0) Chrome/99999999999.0 Safari/537.36");
        assert_eq!(d.client().unwrap().engine, "Blink");
    }

    #[test]
    fn classification_mapping_parses_engine_version() {
        let c = DeviceClassification::from(detector().parse(CHROME_WINDOWS));
        assert!(!c.is_bot);
        assert_eq!(c.client_type.as_deref(), Some("browser"));
        assert_eq!(c.client_name.as_deref(), Some("Chrome"));
        assert_eq!(c.rendering_engine.name.as_deref(), Some("Blink"));
        assert_eq!(
            c.rendering_engine.version,
            VersionInfo {
                major: Some(120),
                minor: Some(0),
                patch: Some(0),
                summary: Some("Blink 120.0.0.0".into()),
            }
        );
        assert_eq!(c.os.short_name.as_deref(), Some("WIN"));
        assert!(c.check_consistency(ADAPTER).is_ok());
    }

    #[test]
    fn bot_mapping_leaves_human_fields_default() {
        let c = DeviceClassification::from(detector().parse("MysteryCrawler/1.0"));
        assert!(c.is_bot);
        let bot = c.bot_info.as_ref().unwrap();
        assert_eq!(bot.name.as_deref(), Some("Mystery Crawler"));
        assert_eq!(bot.category, None);
        assert_eq!(c.client_type, None);
        assert_eq!(c.os, OsMeta::default());
        assert!(c.check_consistency(ADAPTER).is_ok());
    }

    #[test]
    fn blank_input_is_malformed() {
        assert!(matches!(
            detector().parse_device_and_bot(""),
            Err(Error::MalformedInput { .. })
        ));
    }

    #[test]
    fn missing_required_file_fails_to_load() {
        let dir = std::env::temp_dir().join("ua-classifier-missing-device-db");
        assert!(DeviceDetector::from_dir(dir).is_err());
    }
}
