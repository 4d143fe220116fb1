mod adapter;
mod aggregator;
mod config;
mod db;
mod device_detector;
mod device_prefilter;
mod engine_version;
mod error;
mod general_parser;
mod helpers;
mod literal;
mod mobile_detector;
mod os_meta;
mod parser;
mod parser_data;
mod sanitize;
mod substitution;
mod types;
mod version;

pub use adapter::{DeviceAndBotParser, GeneralParser, MobileTabletParser};
pub use aggregator::{Classifier, ClassifierBuilder};
pub use config::ClassifierConfig;
pub use device_detector::DeviceDetector;
pub use error::{Error, Result};
pub use general_parser::UaParser;
pub use mobile_detector::MobileDetector;
pub use sanitize::{fill_fallbacks, sanitize, Sanitize};
pub use types::*;
pub use version::VersionInfo;
