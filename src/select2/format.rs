//! Conversion of result objects into `{id, text}` pairs.

use std::fmt::Display;

use crate::select2::response::Select2Result;

/// A domain object that can be offered as an option.
///
/// The label defaults to the object's `Display` output, the way most records
/// already know how to present themselves.
pub trait ResultItem: Display {
    /// Stable identifier submitted back by the widget (usually the primary key).
    fn result_value(&self) -> String;

    fn result_label(&self) -> String {
        self.to_string()
    }
}

/// Per-view strategy for pulling the id and label out of an item.
///
/// Views that need a different presentation than the item's own (a longer
/// label, a slug instead of a numeric key) supply their own implementation.
pub trait Extract<T: ?Sized>: Send + Sync {
    fn value(&self, item: &T) -> String;
    fn label(&self, item: &T) -> String;
}

/// Defers to the item's [`ResultItem`] implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct Natural;

impl<T: ResultItem + ?Sized> Extract<T> for Natural {
    fn value(&self, item: &T) -> String {
        item.result_value()
    }

    fn label(&self, item: &T) -> String {
        item.result_label()
    }
}

/// Extraction from a pair of closures.
pub struct WithFns<V, L> {
    value: V,
    label: L,
}

impl<V, L> WithFns<V, L> {
    pub fn new(value: V, label: L) -> Self {
        Self { value, label }
    }
}

impl<T, V, L> Extract<T> for WithFns<V, L>
where
    T: ?Sized,
    V: Fn(&T) -> String + Send + Sync,
    L: Fn(&T) -> String + Send + Sync,
{
    fn value(&self, item: &T) -> String {
        (self.value)(item)
    }

    fn label(&self, item: &T) -> String {
        (self.label)(item)
    }
}

/// Map every item to a result, preserving order.
pub fn format_results<T, E>(items: &[T], extract: &E) -> Vec<Select2Result>
where
    E: Extract<T> + ?Sized,
{
    items
        .iter()
        .map(|item| Select2Result::new(extract.value(item), extract.label(item)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt;

    struct Language {
        pk: u64,
        name: &'static str,
    }

    impl fmt::Display for Language {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str(self.name)
        }
    }

    impl ResultItem for Language {
        fn result_value(&self) -> String {
            self.pk.to_string()
        }
    }

    fn languages() -> Vec<Language> {
        vec![
            Language { pk: 3, name: "Rust" },
            Language { pk: 1, name: "OCaml" },
            Language { pk: 2, name: "Zig" },
        ]
    }

    #[test]
    fn natural_uses_pk_and_display() {
        let results = format_results(&languages(), &Natural);
        let pairs: Vec<(&str, &str)> = results
            .iter()
            .map(|r| (r.id.as_str(), r.text.as_str()))
            .collect();
        assert_eq!(pairs, vec![("3", "Rust"), ("1", "OCaml"), ("2", "Zig")]);
        assert!(results.iter().all(|r| r.create_id.is_none()));
    }

    #[test]
    fn closures_override_extraction() {
        let extract = WithFns::new(
            |l: &Language| l.name.to_lowercase(),
            |l: &Language| format!("{} (#{})", l.name, l.pk),
        );
        let results = format_results(&languages(), &extract);
        assert_eq!(results[0].id, "rust");
        assert_eq!(results[0].text, "Rust (#3)");
    }

    #[test]
    fn empty_page_formats_to_nothing() {
        assert!(format_results::<Language, _>(&[], &Natural).is_empty());
    }
}
