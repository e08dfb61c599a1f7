//! The one place transport DTOs become domain objects.
//!
//! Every conversion is a total `From` impl. Nullable server fields collapse to
//! the sentinels documented on [`crate::model`]; unrecognized enum values land
//! on the domain `Unknown` variant.

mod enums;
mod media;
mod notification;
mod people;

pub use media::tag_definition;
pub use people::{character_biography, staff_biography};
pub(crate) use people::{
    character_appearance, media_character, media_staff, staff_appearance, studio_production,
};

use once_cell::sync::Lazy;
use regex::Regex;

use crate::model::{FuzzyDate, UNKNOWN};
use crate::query::dto::{FuzzyDateDto, ImageDto, List};

static SPOILER: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)~!.*?!~").expect("valid regex"));
static LINE_BREAK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)<br\s*/?>").expect("valid regex"));
static TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]+>").expect("valid regex"));
static BLANK_LINES: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{3,}").expect("valid regex"));

pub(crate) fn number(value: Option<i32>) -> i32 {
    value.unwrap_or(UNKNOWN)
}

pub(crate) fn timestamp(value: Option<i64>) -> i64 {
    value.unwrap_or(UNKNOWN as i64)
}

pub(crate) fn text(value: Option<String>) -> String {
    value.unwrap_or_default()
}

/// Drops null items and a null list alike.
pub(crate) fn list<T>(value: List<T>) -> Vec<T> {
    value.into_iter().flatten().flatten().collect()
}

pub(crate) fn image(value: Option<ImageDto>) -> String {
    value
        .and_then(|image| image.large.or(image.medium))
        .unwrap_or_default()
}

pub(crate) fn date(value: Option<FuzzyDateDto>) -> FuzzyDate {
    value.map(FuzzyDate::from).unwrap_or_default()
}

impl From<FuzzyDateDto> for FuzzyDate {
    fn from(dto: FuzzyDateDto) -> Self {
        FuzzyDate::new(number(dto.year), number(dto.month), number(dto.day))
    }
}

/// Normalizes server description markup into plain text.
///
/// Spoiler blocks (`~!...!~`) are removed, `<br>` becomes a newline, other
/// tags are stripped and common entities decoded.
pub fn clean_description(raw: &str) -> String {
    let text = SPOILER.replace_all(raw, "");
    let text = LINE_BREAK.replace_all(&text, "\n");
    let text = TAG.replace_all(&text, "");
    let text = text
        .replace("\r\n", "\n")
        .replace("&quot;", "\"")
        .replace("&#039;", "'")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&");
    BLANK_LINES.replace_all(&text, "\n\n").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn description_markup_is_normalized() {
        let raw = "Line one<br>Line two<br/><br />\n\n\n~!He dies.!~<i>Fin</i> &amp; more";
        assert_eq!(clean_description(raw), "Line one\nLine two\n\nFin & more");
    }

    #[test]
    fn null_lists_and_items_flatten() {
        assert!(list::<i32>(None).is_empty());
        assert_eq!(list(Some(vec![Some(1), None, Some(3)])), vec![1, 3]);
    }

    #[test]
    fn missing_date_parts_become_unknown() {
        let date = date(Some(FuzzyDateDto {
            year: Some(2001),
            month: None,
            day: None,
        }));
        assert_eq!(date, FuzzyDate::new(2001, UNKNOWN, UNKNOWN));
        assert!(super::date(None).is_unknown());
    }
}
