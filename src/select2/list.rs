//! Autocomplete over a plain list of strings.
//!
//! Every candidate is its own id and label. Values can be added through a
//! POST when the view has a create hook; where the value ends up is entirely
//! up to the hook.

use std::sync::Arc;

use tracing::debug;

use crate::select2::create::list_create_option;
use crate::select2::error::AutocompleteError;
use crate::select2::response::{CreatedResponse, ListResponse, Select2Result};

/// Supplies the candidates for a list view.
pub trait ListSource: Send + Sync {
    fn list(&self) -> Vec<String>;
}

impl ListSource for Vec<String> {
    fn list(&self) -> Vec<String> {
        self.clone()
    }
}

/// Adds a value to wherever the list comes from.
pub trait CreateHook: Send + Sync {
    /// Returns the value as stored (possibly normalized), or `None` to reject it.
    fn create(&self, text: &str) -> Option<String>;
}

/// Keep the candidates containing `q`, ignoring case, in their original order.
/// An empty `q` keeps everything.
pub fn filter_candidates(candidates: Vec<String>, q: &str) -> Vec<String> {
    if q.is_empty() {
        return candidates;
    }
    let needle = q.to_lowercase();
    candidates
        .into_iter()
        .filter(|candidate| candidate.to_lowercase().contains(&needle))
        .collect()
}

/// A list-backed view. Without a source it offers nothing; without a create
/// hook it never offers or accepts new values.
#[derive(Clone, Default)]
pub struct ListView {
    source: Option<Arc<dyn ListSource>>,
    create: Option<Arc<dyn CreateHook>>,
}

impl ListView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_source(mut self, source: Arc<dyn ListSource>) -> Self {
        self.source = Some(source);
        self
    }

    pub fn with_create(mut self, hook: Arc<dyn CreateHook>) -> Self {
        self.create = Some(hook);
        self
    }

    pub fn can_create(&self) -> bool {
        self.create.is_some()
    }

    fn candidates(&self) -> Vec<String> {
        self.source
            .as_ref()
            .map(|source| source.list())
            .unwrap_or_default()
    }

    /// Options matching `q`, followed by the create option when applicable.
    pub fn get(&self, q: Option<&str>) -> ListResponse {
        let q = q.unwrap_or_default();
        let mut results: Vec<Select2Result> = filter_candidates(self.candidates(), q)
            .into_iter()
            .map(|value| Select2Result::new(value.clone(), value))
            .collect();
        results.extend(list_create_option(self.can_create(), Some(q)));
        ListResponse { results }
    }

    /// Pass `text` to the create hook and echo back what it stored.
    ///
    /// A missing hook is a configuration fault and is reported before the
    /// request body is looked at.
    pub fn post(&self, text: Option<&str>) -> Result<CreatedResponse, AutocompleteError> {
        let Some(hook) = self.create.as_ref() else {
            return Err(AutocompleteError::ImproperlyConfigured(
                "missing create hook".to_owned(),
            ));
        };
        let text = text.ok_or(AutocompleteError::BadRequest("missing text"))?;

        let created = hook
            .create(text)
            .filter(|value| !value.is_empty())
            .ok_or(AutocompleteError::BadRequest("create hook rejected value"))?;

        debug!(input = text, created = %created, "list value created");
        Ok(CreatedResponse {
            id: created.clone(),
            text: created,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    fn fruits() -> Vec<String> {
        ["Apple", "banana", "Avocado"]
            .into_iter()
            .map(String::from)
            .collect()
    }

    /// Records calls and answers with a fixed value.
    struct FixedHook {
        answer: Option<&'static str>,
        seen: Mutex<Vec<String>>,
    }

    impl FixedHook {
        fn new(answer: Option<&'static str>) -> Arc<Self> {
            Arc::new(Self {
                answer,
                seen: Mutex::new(Vec::new()),
            })
        }
    }

    impl CreateHook for FixedHook {
        fn create(&self, text: &str) -> Option<String> {
            self.seen.lock().unwrap().push(text.to_owned());
            self.answer.map(String::from)
        }
    }

    fn texts(response: &ListResponse) -> Vec<&str> {
        response.results.iter().map(|r| r.text.as_str()).collect()
    }

    #[test]
    fn filter_is_case_insensitive_and_ordered() {
        assert_eq!(filter_candidates(fruits(), "av"), vec!["Avocado"]);
        assert_eq!(filter_candidates(fruits(), "A"), fruits());
        assert_eq!(filter_candidates(fruits(), "AN"), vec!["banana"]);
        assert!(filter_candidates(fruits(), "kiwi").is_empty());
    }

    #[test]
    fn empty_query_returns_whole_list_without_create_option() {
        let view = ListView::new()
            .with_source(Arc::new(fruits()))
            .with_create(FixedHook::new(Some("x")));
        for q in [None, Some("")] {
            let response = view.get(q);
            assert_eq!(texts(&response), vec!["Apple", "banana", "Avocado"]);
            assert!(response.results.iter().all(|r| r.create_id.is_none()));
        }
    }

    #[test]
    fn create_option_is_last_and_unlocalized() {
        let view = ListView::new()
            .with_source(Arc::new(fruits()))
            .with_create(FixedHook::new(Some("x")));
        let response = view.get(Some("av"));
        assert_eq!(response.results.len(), 2);
        assert_eq!(response.results[0], Select2Result::new("Avocado", "Avocado"));
        assert_eq!(
            response.results[1],
            Select2Result::create_option("av", "Create \"av\"")
        );
    }

    #[test]
    fn no_create_option_without_hook() {
        let view = ListView::new().with_source(Arc::new(fruits()));
        let response = view.get(Some("a"));
        assert!(response.results.iter().all(|r| !r.is_create_option()));
    }

    #[test]
    fn default_list_is_empty() {
        let view = ListView::new();
        assert!(view.get(Some("anything")).results.is_empty());
    }

    #[test]
    fn post_without_hook_is_configuration_fault() {
        let view = ListView::new().with_source(Arc::new(fruits()));
        for text in [None, Some("Foo")] {
            assert!(matches!(
                view.post(text),
                Err(AutocompleteError::ImproperlyConfigured(_))
            ));
        }
    }

    #[test]
    fn post_without_text_is_bad_request() {
        let hook = FixedHook::new(Some("Foo"));
        let view = ListView::new().with_create(hook.clone());
        assert!(matches!(view.post(None), Err(AutocompleteError::BadRequest(_))));
        assert!(hook.seen.lock().unwrap().is_empty());
    }

    #[test]
    fn post_echoes_hook_result() {
        let hook = FixedHook::new(Some("Foo"));
        let view = ListView::new().with_create(hook.clone());
        let created = view.post(Some("Foo")).unwrap();
        assert_eq!(
            created,
            CreatedResponse {
                id: "Foo".into(),
                text: "Foo".into()
            }
        );
        assert_eq!(*hook.seen.lock().unwrap(), vec!["Foo".to_owned()]);
    }

    #[test]
    fn post_uses_normalized_value() {
        let view = ListView::new().with_create(FixedHook::new(Some("foo")));
        let created = view.post(Some("  FOO ")).unwrap();
        assert_eq!(created.id, "foo");
        assert_eq!(created.text, "foo");
    }

    #[test]
    fn post_rejected_by_hook_is_bad_request() {
        for answer in [None, Some("")] {
            let view = ListView::new().with_create(FixedHook::new(answer));
            assert!(matches!(
                view.post(Some("Foo")),
                Err(AutocompleteError::BadRequest(_))
            ));
        }
    }
}
