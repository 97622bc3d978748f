//! HTML character reference decoding.
//!
//! Wikipedia dumps escape markup once for XML and article authors escape
//! again inside the wikitext, so the pipeline decodes twice. Unknown named
//! references are kept verbatim.

use std::borrow::Cow;

use quick_xml::escape::resolve_predefined_entity;

use crate::patterns::ENTITY_RE;

/// Named references beyond the XML predefined set.
const HTML_ENTITIES: &[(&str, &str)] = &[
    ("nbsp", " "),
    ("ensp", " "),
    ("emsp", " "),
    ("thinsp", " "),
    ("shy", ""),
    ("ndash", "\u{2013}"),
    ("mdash", "\u{2014}"),
    ("minus", "\u{2212}"),
    ("hellip", "\u{2026}"),
    ("lsquo", "\u{2018}"),
    ("rsquo", "\u{2019}"),
    ("ldquo", "\u{201C}"),
    ("rdquo", "\u{201D}"),
    ("laquo", "\u{00AB}"),
    ("raquo", "\u{00BB}"),
    ("middot", "\u{00B7}"),
    ("bull", "\u{2022}"),
    ("times", "\u{00D7}"),
    ("deg", "\u{00B0}"),
    ("copy", "\u{00A9}"),
    ("reg", "\u{00AE}"),
    ("trade", "\u{2122}"),
    ("euro", "\u{20AC}"),
    ("pound", "\u{00A3}"),
    ("sect", "\u{00A7}"),
    ("frac12", "\u{00BD}"),
];

/// Resolve a single reference name (the text between `&` and `;`).
pub fn resolve_entity(entity: &str) -> Option<Cow<'static, str>> {
    if let Some(resolved) = resolve_predefined_entity(entity) {
        return Some(Cow::Borrowed(resolved));
    }

    if let Some(hex) = entity
        .strip_prefix("#x")
        .or_else(|| entity.strip_prefix("#X"))
    {
        return u32::from_str_radix(hex, 16)
            .ok()
            .and_then(char::from_u32)
            .map(|c| Cow::Owned(c.to_string()));
    }

    if let Some(dec) = entity.strip_prefix('#') {
        return dec
            .parse::<u32>()
            .ok()
            .and_then(char::from_u32)
            .map(|c| Cow::Owned(c.to_string()));
    }

    HTML_ENTITIES
        .iter()
        .find(|(name, _)| *name == entity)
        .map(|(_, value)| Cow::Borrowed(*value))
}

/// Decode every recognized character reference in `text` once.
pub fn decode_entities(text: &str) -> String {
    ENTITY_RE
        .replace_all(text, |caps: &regex_lite::Captures<'_>| {
            resolve_entity(&caps[1]).unwrap_or_else(|| Cow::Owned(caps[0].to_string()))
        })
        .into_owned()
}
