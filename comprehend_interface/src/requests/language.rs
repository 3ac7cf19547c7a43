use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Languages accepted by the Comprehend batch detection operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LanguageCode {
    #[serde(rename = "en")]
    En,
    #[serde(rename = "es")]
    Es,
    #[serde(rename = "fr")]
    Fr,
    #[serde(rename = "de")]
    De,
    #[serde(rename = "it")]
    It,
    #[serde(rename = "pt")]
    Pt,
    #[serde(rename = "ar")]
    Ar,
    #[serde(rename = "hi")]
    Hi,
    #[serde(rename = "ja")]
    Ja,
    #[serde(rename = "ko")]
    Ko,
    #[serde(rename = "zh")]
    Zh,
    #[serde(rename = "zh-TW")]
    ZhTw,
}

impl LanguageCode {
    pub const ALL: [LanguageCode; 12] = [
        Self::En,
        Self::Es,
        Self::Fr,
        Self::De,
        Self::It,
        Self::Pt,
        Self::Ar,
        Self::Hi,
        Self::Ja,
        Self::Ko,
        Self::Zh,
        Self::ZhTw,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Es => "es",
            Self::Fr => "fr",
            Self::De => "de",
            Self::It => "it",
            Self::Pt => "pt",
            Self::Ar => "ar",
            Self::Hi => "hi",
            Self::Ja => "ja",
            Self::Ko => "ko",
            Self::Zh => "zh",
            Self::ZhTw => "zh-TW",
        }
    }

    /// Maps a transcription locale such as `en-US` or `pt-BR` to its Comprehend code.
    ///
    /// Only `zh-TW` keeps its region; every other locale reduces to the language subtag.
    pub fn from_locale(locale: &str) -> Option<Self> {
        let locale = locale.trim();
        if let Ok(code) = locale.parse() {
            return Some(code);
        }
        if locale.eq_ignore_ascii_case("zh-TW") || locale.eq_ignore_ascii_case("zh_TW") {
            return Some(Self::ZhTw);
        }
        let language = locale.split(['-', '_']).next()?;
        language.to_ascii_lowercase().parse().ok()
    }
}

impl FromStr for LanguageCode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|code| code.as_str() == s)
            .ok_or_else(|| format!("unsupported language code: {s}"))
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
