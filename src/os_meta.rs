use crate::error::Result;
use crate::parser::compile_regex;

/// Matomo's OS short codes for the names its `oss.yml` produces.
const OS_SHORT_NAMES: &[(&str, &str)] = &[
    ("AIX", "AIX"),
    ("Android", "AND"),
    ("Android TV", "ADR"),
    ("Arch Linux", "ARL"),
    ("BlackBerry OS", "BLB"),
    ("Chrome OS", "COS"),
    ("Chromium OS", "COS"),
    ("CentOS", "CES"),
    ("Debian", "DEB"),
    ("Fedora", "FED"),
    ("Fire OS", "FIR"),
    ("FreeBSD", "BSD"),
    ("GNU/Linux", "LIN"),
    ("HarmonyOS", "HAR"),
    ("iOS", "IOS"),
    ("iPadOS", "IPA"),
    ("Java ME", "JME"),
    ("KaiOS", "KOS"),
    ("Linux Mint", "MIN"),
    ("Mac", "MAC"),
    ("NetBSD", "NBS"),
    ("OpenBSD", "OBS"),
    ("Red Hat", "RHT"),
    ("Solaris", "SOS"),
    ("SUSE", "SSE"),
    ("Symbian OS", "SYS"),
    ("Tizen", "TIZ"),
    ("tvOS", "ATV"),
    ("Ubuntu", "UBT"),
    ("watchOS", "WAS"),
    ("webOS", "WOS"),
    ("Windows", "WIN"),
    ("Windows CE", "WCE"),
    ("Windows IoT", "WIO"),
    ("Windows Mobile", "WMO"),
    ("Windows Phone", "WPH"),
    ("Windows RT", "WRT"),
];

const UNKNOWN_SHORT_NAME: &str = "UNK";

/// Short code for an OS name, `"UNK"` when the name is not in the table.
pub(crate) fn os_short_name(name: &str) -> &'static str {
    OS_SHORT_NAMES
        .iter()
        .find(|(full, _)| full.eq_ignore_ascii_case(name))
        .map(|(_, short)| *short)
        .unwrap_or(UNKNOWN_SHORT_NAME)
}

/// Architecture regexes, checked in order; first hit wins.
pub(crate) struct PlatformRegexes {
    platforms: Vec<(&'static str, fancy_regex::Regex)>,
}

impl PlatformRegexes {
    pub fn compile() -> Result<Self> {
        let specs: [(&'static str, &str); 7] = [
            ("ARM", r"arm[ _;)ev]|.*arm$|.*arm64|aarch64|Apple ?TV|Watch ?OS|Watch1,[12]"),
            ("LoongArch64", r"loongarch64"),
            ("MIPS", r"mips"),
            ("SuperH", r"sh4"),
            ("SPARC64", r"sparc64"),
            ("x64", r"64-?bit|WOW64|(?:Intel)?x64|WINDOWS_64|win64|.*amd64|.*x86_?64"),
            ("x86", r".+32bit|.+win32|(?:i[0-9]|x)86|i86pc"),
        ];
        let platforms = specs
            .into_iter()
            .map(|(name, pattern)| Ok((name, compile_regex(pattern)?)))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { platforms })
    }

    pub fn detect(&self, ua: &str) -> Option<&'static str> {
        self.platforms
            .iter()
            .find(|(_, re)| re.is_match(ua).unwrap_or(false))
            .map(|(name, _)| *name)
    }
}
