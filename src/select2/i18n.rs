//! Message translation for user-visible option labels.
//!
//! Translation is an explicit capability handed to the renderer; nothing in
//! here is global. Messages use `%(name)s` placeholders, filled in after the
//! translated template has been looked up.

use std::borrow::Cow;
use std::collections::HashMap;

/// Label template of the queryset-mode create option.
pub const CREATE_MESSAGE: &str = "Create \"%(new_value)s\"";

pub trait Translate: Send + Sync {
    /// Translated template for `msgid`, or `msgid` itself when unknown.
    fn gettext<'a>(&'a self, msgid: &'a str) -> Cow<'a, str>;
}

/// Returns every message as written.
#[derive(Debug, Clone, Copy, Default)]
pub struct Untranslated;

impl Translate for Untranslated {
    fn gettext<'a>(&'a self, msgid: &'a str) -> Cow<'a, str> {
        Cow::Borrowed(msgid)
    }
}

/// Substitute `%(name)s` placeholders in a single pass.
///
/// Unknown placeholders are left untouched, and substituted values are never
/// re-scanned.
pub fn interpolate(template: &str, args: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("%(") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find(")s") else {
            out.push_str(&rest[start..]);
            return out;
        };
        let name = &after[..end];
        match args.iter().find(|(key, _)| *key == name) {
            Some((_, value)) => out.push_str(value),
            None => out.push_str(&rest[start..start + 2 + end + 2]),
        }
        rest = &after[end + 2..];
    }

    out.push_str(rest);
    out
}

/// In-memory message catalogs keyed by lowercase language tag.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    locales: HashMap<String, HashMap<String, String>>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog with the translations shipped with the crate.
    pub fn builtin() -> Self {
        let mut catalog = Self::new();
        catalog.insert("fr", CREATE_MESSAGE, "Créer « %(new_value)s »");
        catalog.insert("de", CREATE_MESSAGE, "„%(new_value)s“ erstellen");
        catalog.insert("es", CREATE_MESSAGE, "Crear \"%(new_value)s\"");
        catalog
    }

    pub fn insert(&mut self, locale: &str, msgid: &str, msgstr: &str) {
        self.locales
            .entry(locale.to_ascii_lowercase())
            .or_default()
            .insert(msgid.to_owned(), msgstr.to_owned());
    }

    /// Pick the best locale for an `Accept-Language` header value.
    ///
    /// Ranges are tried in descending `q` order (ties keep header order); for
    /// each, the full tag is tried before its primary subtag. Falls back to
    /// untranslated messages when nothing matches.
    pub fn negotiate(&self, accept_language: Option<&str>) -> Locale<'_> {
        let messages = accept_language
            .map(parse_accept_language)
            .unwrap_or_default()
            .into_iter()
            .find_map(|tag| {
                self.locales.get(&tag).or_else(|| {
                    let primary = tag.split('-').next()?;
                    self.locales.get(primary)
                })
            });
        Locale { messages }
    }
}

/// A single negotiated locale borrowed from a [`Catalog`].
#[derive(Debug, Clone, Copy)]
pub struct Locale<'a> {
    messages: Option<&'a HashMap<String, String>>,
}

impl Translate for Locale<'_> {
    fn gettext<'a>(&'a self, msgid: &'a str) -> Cow<'a, str> {
        match self.messages.and_then(|m| m.get(msgid)) {
            Some(msgstr) => Cow::Borrowed(msgstr.as_str()),
            None => Cow::Borrowed(msgid),
        }
    }
}

/// Language ranges from an `Accept-Language` value, best first. `*` and
/// ranges with `q=0` are dropped.
fn parse_accept_language(header: &str) -> Vec<String> {
    let mut ranges: Vec<(String, f32)> = header
        .split(',')
        .filter_map(|part| {
            let mut pieces = part.split(';');
            let tag = pieces.next()?.trim().to_ascii_lowercase();
            if tag.is_empty() || tag == "*" {
                return None;
            }
            let quality = pieces
                .filter_map(|p| p.trim().strip_prefix("q="))
                .find_map(|q| q.trim().parse::<f32>().ok())
                .unwrap_or(1.0);
            (quality > 0.0).then_some((tag, quality))
        })
        .collect();

    // Stable sort keeps header order among equal weights.
    ranges.sort_by(|a, b| b.1.total_cmp(&a.1));
    ranges.into_iter().map(|(tag, _)| tag).collect()
}
