//! Application state shared by the web handlers.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::config::Config;
use crate::data::lists::MemoryList;
use crate::data::permissions::PermissionPolicy;
use crate::data::tags::TagStore;
use crate::select2::{Catalog, ListView, Natural, QuerySetView};

#[derive(Clone)]
pub struct AppState {
    pub tags: Arc<QuerySetView<TagStore>>,
    /// List views by URL name.
    pub lists: Arc<BTreeMap<String, ListView>>,
    pub catalog: Arc<Catalog>,
}

impl AppState {
    pub fn new(
        tags: QuerySetView<TagStore>,
        lists: BTreeMap<String, ListView>,
        catalog: Catalog,
    ) -> Self {
        Self {
            tags: Arc::new(tags),
            lists: Arc::new(lists),
            catalog: Arc::new(catalog),
        }
    }

    /// Build the bundled views from configuration:
    ///
    /// - `tags`: queryset view over a [`TagStore`], creation gated by the
    ///   editor/blocked lists;
    /// - `colors`: list view that accepts new values;
    /// - `countries`: read-only list view.
    pub fn from_config(config: &Config) -> Self {
        let permission = Arc::new(PermissionPolicy::new(
            config.editors.iter().cloned(),
            config.blocked_users.iter().cloned(),
        ));
        let tags = QuerySetView::new(
            Arc::new(TagStore::seeded(&config.seed_tags)),
            Arc::new(Natural),
            permission,
        )
        .paginate_by(config.page_size)
        .create_field(config.create_field.clone());

        let colors = Arc::new(MemoryList::new(config.seed_colors.iter().cloned()));
        let countries = Arc::new(config.seed_countries.clone());

        let mut lists = BTreeMap::new();
        lists.insert(
            "colors".to_owned(),
            ListView::new().with_source(colors.clone()).with_create(colors),
        );
        lists.insert(
            "countries".to_owned(),
            ListView::new().with_source(countries),
        );

        Self::new(tags, lists, Catalog::builtin())
    }
}
