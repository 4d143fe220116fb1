use super::error::Result;
use super::parser::full_pattern;

/// Prefilter applied before running a device brand parser.
///
/// Certain device files (TV, console, etc.) are only consulted when the UA
/// carries specific markers.
pub(crate) enum DevicePrefilter {
    /// No prefilter, always run (mobiles).
    None,
    /// UA must match this regex to proceed (used for shell_tv, televisions, notebooks).
    Regex(fancy_regex::Regex),
    /// UA must match any of the brand regexes (OR'd into one mega-regex).
    /// Used for consoles, cameras, car_browsers, portable_media_player.
    OverallMatch(fancy_regex::Regex),
}

impl DevicePrefilter {
    /// OR all brand regexes into one mega-regex. If it doesn't match the UA,
    /// none of the individual brand regexes can match either.
    pub fn build_overall_prefilter(brand_regexes: &[String]) -> Result<DevicePrefilter> {
        if brand_regexes.is_empty() {
            return Ok(DevicePrefilter::None);
        }
        let re = fancy_regex::Regex::new(&full_pattern(&brand_regexes.join("|")))?;
        Ok(DevicePrefilter::OverallMatch(re))
    }

    pub fn matches(&self, ua: &str) -> bool {
        match self {
            Self::None => true,
            Self::Regex(re) | Self::OverallMatch(re) => re.is_match(ua).unwrap_or(false),
        }
    }
}
