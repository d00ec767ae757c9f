use crate::model::FormatError;
use crate::utils::{epoch_to_utc, split_locale_tag};
use chrono::format::{Item, StrftimeItems};
use chrono::{FixedOffset, Locale};
use serde::Deserialize;
use std::fmt::Write;

pub const DEFAULT_LOCALE: &str = "en-US";

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateStyle {
    /// Numeric day, month and year in the locale's order.
    #[default]
    Short,
    /// Day, localized month name and year.
    Long,
    /// Any strftime pattern; month and weekday names are localized.
    Custom(String),
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct DateFormatOptions {
    pub style: DateStyle,
    pub utc_offset_minutes: i32,
}

impl DateStyle {
    fn pattern_for(&self, locale: Locale) -> String {
        match self {
            DateStyle::Short => short_pattern(locale).to_string(),
            DateStyle::Long => long_pattern(locale).to_string(),
            DateStyle::Custom(pattern) => pattern.clone(),
        }
    }
}

fn short_pattern(locale: Locale) -> &'static str {
    match locale {
        Locale::en_US => "%-m/%-d/%Y",
        Locale::en_GB | Locale::fr_FR | Locale::it_IT | Locale::es_ES => "%d/%m/%Y",
        Locale::de_DE | Locale::de_AT | Locale::de_CH => "%-d.%-m.%Y",
        Locale::nl_NL => "%-d-%-m-%Y",
        _ => "%x",
    }
}

fn long_pattern(locale: Locale) -> &'static str {
    match locale {
        Locale::en_US => "%B %-d, %Y",
        Locale::de_DE | Locale::de_AT | Locale::de_CH => "%-d. %B %Y",
        _ => "%-d %B %Y",
    }
}

/// Region used when a tag names only a language, or a language/region pair
/// chrono has no data for.
fn default_region(language: &str) -> String {
    match language {
        "en" => "US",
        "cs" => "CZ",
        "da" => "DK",
        "el" => "GR",
        "ja" => "JP",
        "ko" => "KR",
        "nb" | "nn" => "NO",
        "sl" => "SI",
        "sv" => "SE",
        "uk" => "UA",
        "zh" => "CN",
        _ => return language.to_ascii_uppercase(),
    }
    .to_string()
}

/// Resolves a BCP-47 style tag (`en-US`, `en`, `EN-us`, `zh-Hans-CN`) to a
/// chrono locale.
pub fn parse_locale(tag: &str) -> Result<Locale, FormatError> {
    let unknown = || FormatError::UnknownLocale(tag.to_string());
    let (language, region) = split_locale_tag(tag).ok_or_else(unknown)?;

    let mut candidates = Vec::with_capacity(3);
    if let Some(region) = region {
        candidates.push(format!("{}_{}", language, region));
    }
    candidates.push(format!("{}_{}", language, default_region(&language)));
    candidates.push(language);

    candidates
        .iter()
        .find_map(|name| Locale::try_from(name.as_str()).ok())
        .ok_or_else(unknown)
}

/// Formats Unix seconds as a calendar date.
///
/// Defaults to `en-US`, short numeric style and UTC, so `1633046400`
/// becomes `10/1/2021`. Bad locale tags, patterns or offsets are returned as
/// errors rather than replaced with a fallback string.
pub fn format_date(
    epoch_seconds: i64,
    locale: Option<&str>,
    options: Option<&DateFormatOptions>,
) -> Result<String, FormatError> {
    let locale = parse_locale(locale.unwrap_or(DEFAULT_LOCALE))?;
    let defaults = DateFormatOptions::default();
    let options = options.unwrap_or(&defaults);

    let offset = options
        .utc_offset_minutes
        .checked_mul(60)
        .and_then(FixedOffset::east_opt)
        .ok_or(FormatError::InvalidOffset(options.utc_offset_minutes))?;
    let date = epoch_to_utc(epoch_seconds)
        .ok_or(FormatError::OutOfRange(epoch_seconds))?
        .with_timezone(&offset);

    let pattern = options.style.pattern_for(locale);
    if StrftimeItems::new(&pattern).any(|item| matches!(item, Item::Error)) {
        return Err(FormatError::InvalidPattern(pattern));
    }

    let mut out = String::new();
    write!(out, "{}", date.format_localized(&pattern, locale))
        .map_err(|_| FormatError::InvalidPattern(pattern.clone()))?;
    Ok(out)
}
