use crate::adapter::{DeviceAndBotParser, GeneralParser, MobileTabletParser};
use crate::config::ClassifierConfig;
use crate::device_detector::{self, DeviceDetector};
use crate::error::{Error, Result};
use crate::general_parser::{self, UaParser};
use crate::mobile_detector::{self, MobileDetector};
use crate::sanitize::sanitize;
use crate::types::*;
use rayon::prelude::*;
use std::path::Path;

/// Runs every available classifier on a user agent and merges their answers.
///
/// Each output field has exactly one source:
///
/// | field | source |
/// |---|---|
/// | `client_summary`, `ua_family`, `ua_version`, `os_family`, `os_version` | [`GeneralParser`] |
/// | `ua_type`, `bot_info`, `os_meta`, `ua_rendering_engine(_version)`, `device.brand/model`, `client` | [`DeviceAndBotParser`] |
/// | `device.is_mobile/is_tablet/is_desktop` | [`MobileTabletParser`] |
///
/// A missing or failing classifier only blanks its own fields;
/// [`classify`](Self::classify) always returns a result.
pub struct Classifier {
    general: Option<Box<dyn GeneralParser>>,
    device: Option<Box<dyn DeviceAndBotParser>>,
    mobile: Option<Box<dyn MobileTabletParser>>,
}

impl Classifier {
    pub fn builder() -> ClassifierBuilder {
        ClassifierBuilder::default()
    }

    /// Load the bundled database-backed classifiers, in parallel.
    ///
    /// A database that is not configured or fails to load leaves its
    /// classifier out; the failure is logged, not returned.
    pub fn from_config(config: &ClassifierConfig) -> Self {
        let (general, (device, mobile)) = rayon::join(
            || {
                load(general_parser::ADAPTER, config.general_regexes.as_deref(), |p| {
                    UaParser::from_file(p)
                })
            },
            || {
                rayon::join(
                    || {
                        load(
                            device_detector::ADAPTER,
                            config.device_detector_dir.as_deref(),
                            |p| DeviceDetector::from_dir(p),
                        )
                    },
                    || {
                        load(mobile_detector::ADAPTER, config.mobile_rules.as_deref(), |p| {
                            MobileDetector::from_file(p)
                        })
                    },
                )
            },
        );

        let mut builder = Self::builder();
        if let Some(general) = general {
            builder = builder.general(general);
        }
        if let Some(device) = device {
            builder = builder.device(device);
        }
        if let Some(mobile) = mobile {
            builder = builder.mobile(mobile);
        }
        builder.build()
    }

    /// Classify one user agent.
    pub fn classify(&self, ua: &str) -> UnifiedResult {
        let general = run(general_parser::ADAPTER, self.general.as_deref(), |p| {
            p.parse_general(ua)
        });
        let mut device = run(device_detector::ADAPTER, self.device.as_deref(), |p| {
            p.parse_device_and_bot(ua)
        });
        let mobile = run(mobile_detector::ADAPTER, self.mobile.as_deref(), |p| {
            p.parse_mobile_tablet(ua)
        });

        if let Err(e) = device.check_consistency(device_detector::ADAPTER) {
            tracing::warn!(error = %e, ua, "keeping the bot identity");
            device.prefer_bot();
        }

        let mut result = assemble(general, device, mobile);
        sanitize(&mut result);
        result
    }

    /// Classify many user agents in parallel, preserving input order.
    pub fn classify_batch<S: AsRef<str> + Sync>(&self, uas: &[S]) -> Vec<UnifiedResult> {
        uas.par_iter().map(|ua| self.classify(ua.as_ref())).collect()
    }

    pub fn has_general_parser(&self) -> bool {
        self.general.is_some()
    }

    pub fn has_device_parser(&self) -> bool {
        self.device.is_some()
    }

    pub fn has_mobile_parser(&self) -> bool {
        self.mobile.is_some()
    }
}

#[derive(Default)]
pub struct ClassifierBuilder {
    general: Option<Box<dyn GeneralParser>>,
    device: Option<Box<dyn DeviceAndBotParser>>,
    mobile: Option<Box<dyn MobileTabletParser>>,
}

impl ClassifierBuilder {
    pub fn general(mut self, parser: impl GeneralParser + 'static) -> Self {
        self.general = Some(Box::new(parser));
        self
    }

    pub fn device(mut self, parser: impl DeviceAndBotParser + 'static) -> Self {
        self.device = Some(Box::new(parser));
        self
    }

    pub fn mobile(mut self, parser: impl MobileTabletParser + 'static) -> Self {
        self.mobile = Some(Box::new(parser));
        self
    }

    pub fn build(self) -> Classifier {
        Classifier {
            general: self.general,
            device: self.device,
            mobile: self.mobile,
        }
    }
}

fn load<T>(
    adapter: &'static str,
    path: Option<&Path>,
    open: impl FnOnce(&Path) -> Result<T>,
) -> Option<T> {
    let Some(path) = path else {
        tracing::warn!(adapter, "no database configured, classifier disabled");
        return None;
    };
    match open(path) {
        Ok(parser) => Some(parser),
        Err(e) => {
            let e = Error::unavailable(adapter, e);
            tracing::warn!(error = %e, path = %path.display(), "classifier disabled");
            None
        }
    }
}

/// One classifier's answer, or its default when it is missing or fails.
fn run<P: ?Sized, T: Default>(
    adapter: &'static str,
    parser: Option<&P>,
    classify: impl FnOnce(&P) -> Result<T>,
) -> T {
    let Some(parser) = parser else {
        return T::default();
    };
    classify(parser).unwrap_or_else(|e| {
        tracing::debug!(adapter, error = %e, "classifier gave no answer");
        T::default()
    })
}

/// Pin every field to its single source.
fn assemble(
    general: GeneralClassification,
    device: DeviceClassification,
    mobile: MobileClassification,
) -> UnifiedResult {
    let mut device_info = DeviceInfo::from_mobile(mobile);
    device_info.brand = device.client_brand;
    device_info.model = device.client_model;

    UnifiedResult {
        client_summary: general.summary,
        ua_family: general.user_agent.family,
        ua_version: general.user_agent.version,
        os_family: general.os.family,
        os_version: general.os.version,
        ua_type: device.client_type,
        bot_info: device.bot_info.unwrap_or_default(),
        os_meta: device.os,
        ua_rendering_engine: device.rendering_engine.name,
        ua_rendering_engine_version: device.rendering_engine.version,
        device: device_info,
        client: ClientFlags::from_is_bot(device.is_bot),
    }
}
