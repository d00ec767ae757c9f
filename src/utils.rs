// Utility functions
use chrono::{DateTime, Utc};

/// Converts Unix seconds into `DateTime<Utc>`, if representable.
pub fn epoch_to_utc(epoch_seconds: i64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp(epoch_seconds, 0)
}

/// Splits a BCP-47 style tag into a lowercase language and an uppercase
/// region. Script subtags (`Hans`), numeric regions (`419`), variants and
/// extensions are dropped. `None` when the language subtag is malformed.
pub fn split_locale_tag(tag: &str) -> Option<(String, Option<String>)> {
    let mut subtags = tag.trim().split(['-', '_']);
    let language = subtags.next()?;
    if !(2..=3).contains(&language.len()) || !language.chars().all(|c| c.is_ascii_alphabetic()) {
        return None;
    }

    let mut region = None;
    for subtag in subtags {
        // Singleton starts an extension (`-u-...`, `-x-...`).
        if subtag.len() == 1 {
            break;
        }
        if subtag.len() == 2 && subtag.chars().all(|c| c.is_ascii_alphabetic()) {
            region = Some(subtag.to_ascii_uppercase());
            break;
        }
    }

    Some((language.to_ascii_lowercase(), region))
}

/// Case-insensitive substring match.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_epoch_to_utc() {
        let dt = epoch_to_utc(1_633_046_400).unwrap();
        assert_eq!(dt.to_rfc3339(), "2021-10-01T00:00:00+00:00");
        let dt = epoch_to_utc(1_633_036_800).unwrap();
        assert_eq!(dt.to_rfc3339(), "2021-09-30T21:20:00+00:00");
        assert!(epoch_to_utc(i64::MAX).is_none());
    }

    #[test]
    fn test_split_locale_tag() {
        assert_eq!(split_locale_tag("en-US"), Some(("en".into(), Some("US".into()))));
        assert_eq!(split_locale_tag(" de_DE "), Some(("de".into(), Some("DE".into()))));
        assert_eq!(split_locale_tag("EN-us"), Some(("en".into(), Some("US".into()))));
        assert_eq!(split_locale_tag("zh-Hans-CN"), Some(("zh".into(), Some("CN".into()))));
        assert_eq!(split_locale_tag("es-419"), Some(("es".into(), None)));
        assert_eq!(split_locale_tag("de-u-co-phonebk"), Some(("de".into(), None)));
        assert_eq!(split_locale_tag("fr"), Some(("fr".into(), None)));
        assert_eq!(split_locale_tag(""), None);
        assert_eq!(split_locale_tag("e1-US"), None);
    }

    #[test]
    fn test_contains_ignore_case() {
        assert!(contains_ignore_case("Germany, Luxembourg", "LUX"));
        assert!(contains_ignore_case("DE-LU", "de-"));
        assert!(!contains_ignore_case("France", "fx"));
    }
}
