//! Autocomplete over a filterable, paginated record source.

use std::sync::Arc;

use tracing::debug;

use crate::select2::create::queryset_create_option;
use crate::select2::error::{AutocompleteError, CreateError, PermissionError};
use crate::select2::format::{Extract, format_results};
use crate::select2::i18n::Translate;
use crate::select2::page::{PageInfo, Paginator};
use crate::select2::response::{CreatedResponse, Pagination, Select2Response};

/// Who is asking. Anonymous requests carry no user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Requester {
    pub user: Option<String>,
}

impl Requester {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn user(name: impl Into<String>) -> Self {
        Self {
            user: Some(name.into()),
        }
    }
}

/// The record collection a queryset view searches.
pub trait QuerySource: Send + Sync {
    type Item: Send + Sync + 'static;

    /// Records matching `q` in display order. An empty `q` matches everything.
    fn filter(&self, q: &str) -> Vec<Self::Item>;

    /// Fetch or create the record whose `field` equals `text`.
    fn get_or_create(&self, field: &str, text: &str) -> Result<Self::Item, CreateError>;
}

/// Decides whether a requester may add records.
pub trait AddPermission: Send + Sync {
    fn has_add_permission(&self, requester: &Requester) -> Result<bool, PermissionError>;
}

/// Objects for the current request, plus the page they belong to when the
/// view paginates.
#[derive(Debug, Clone)]
pub struct PageContext<T> {
    pub object_list: Vec<T>,
    pub page: Option<PageInfo>,
}

impl<T> PageContext<T> {
    pub fn has_more(&self) -> bool {
        self.page.is_some_and(|p| p.has_next)
    }
}

pub struct QuerySetView<S: QuerySource> {
    source: Arc<S>,
    extract: Arc<dyn Extract<S::Item>>,
    permission: Arc<dyn AddPermission>,
    paginator: Option<Paginator>,
    create_field: Option<String>,
}

impl<S: QuerySource> QuerySetView<S> {
    /// A non-paginating view with creation disabled.
    pub fn new(
        source: Arc<S>,
        extract: Arc<dyn Extract<S::Item>>,
        permission: Arc<dyn AddPermission>,
    ) -> Self {
        Self {
            source,
            extract,
            permission,
            paginator: None,
            create_field: None,
        }
    }

    pub fn paginate_by(mut self, per_page: usize) -> Self {
        self.paginator = Some(Paginator::new(per_page));
        self
    }

    /// Enable creation through `field`. An empty name leaves it disabled.
    pub fn create_field(mut self, field: impl Into<String>) -> Self {
        let field = field.into();
        self.create_field = (!field.is_empty()).then_some(field);
        self
    }

    pub fn source(&self) -> &Arc<S> {
        &self.source
    }

    /// Filter the source by `q` and cut out the requested page.
    pub fn context(
        &self,
        q: Option<&str>,
        page: Option<&str>,
    ) -> Result<PageContext<S::Item>, AutocompleteError> {
        let items = self.source.filter(q.unwrap_or_default());
        match &self.paginator {
            Some(paginator) => {
                let page = paginator.page(items, page)?;
                let info = page.info();
                Ok(PageContext {
                    object_list: page.object_list,
                    page: Some(info),
                })
            }
            None => Ok(PageContext {
                object_list: items,
                page: None,
            }),
        }
    }

    /// Build the response body for an already computed page.
    pub fn render(
        &self,
        context: &PageContext<S::Item>,
        q: Option<&str>,
        requester: &Requester,
        translator: &dyn Translate,
    ) -> Result<Select2Response, AutocompleteError> {
        let mut results = format_results(&context.object_list, self.extract.as_ref());
        let create_option = queryset_create_option(
            self.create_field.is_some(),
            q,
            context.page,
            || self.permission.has_add_permission(requester),
            translator,
        )?;
        results.extend(create_option);

        Ok(Select2Response {
            results,
            pagination: Pagination {
                more: context.has_more(),
            },
        })
    }

    /// `context` followed by `render`.
    pub fn get(
        &self,
        q: Option<&str>,
        page: Option<&str>,
        requester: &Requester,
        translator: &dyn Translate,
    ) -> Result<Select2Response, AutocompleteError> {
        let context = self.context(q, page)?;
        self.render(&context, q, requester, translator)
    }

    /// Create (or fetch) the record named by `text`.
    ///
    /// Checks run in order: create field configured, requester allowed,
    /// `text` present, store accepts it.
    pub fn post(
        &self,
        text: Option<&str>,
        requester: &Requester,
    ) -> Result<CreatedResponse, AutocompleteError> {
        let Some(field) = self.create_field.as_deref() else {
            return Err(AutocompleteError::ImproperlyConfigured(
                "missing create field".to_owned(),
            ));
        };
        if !self.permission.has_add_permission(requester)? {
            return Err(AutocompleteError::PermissionDenied);
        }
        let text = text.ok_or(AutocompleteError::BadRequest("missing text"))?;

        let item = self.source.get_or_create(field, text)?;
        let created = CreatedResponse {
            id: self.extract.value(&item),
            text: self.extract.label(&item),
        };
        debug!(field, id = %created.id, text = %created.text, "record created");
        Ok(created)
    }
}
