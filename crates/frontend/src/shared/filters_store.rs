use contracts::shared::filters::{FilterPatch, FilterSet};
use contracts::shared::query_params::QueryParams;
use leptos::prelude::*;

/// Dashboard-wide filter state.
///
/// Created once in `App` and handed to pages through context; every page
/// reads the same `FilterSet`.
#[derive(Clone, Copy)]
pub struct FiltersStore {
    filters: RwSignal<FilterSet>,
}

impl FiltersStore {
    pub fn new() -> Self {
        Self {
            filters: RwSignal::new(FilterSet::default()),
        }
    }

    /// Tracked snapshot of the current filters
    pub fn filters(&self) -> FilterSet {
        self.filters.get()
    }

    pub fn filters_untracked(&self) -> FilterSet {
        self.filters.get_untracked()
    }

    /// Tracked read without cloning the whole set
    pub fn with_filters<R>(&self, f: impl FnOnce(&FilterSet) -> R) -> R {
        self.filters.with(f)
    }

    /// Merge `patch` into the current filters; fields absent from the patch
    /// keep their values.
    pub fn set_filters(&self, patch: FilterPatch) {
        log::debug!("set_filters: {:?}", patch);
        self.filters.update(|filters| filters.apply(patch));
    }

    /// Back to the baseline range (2024-01-01 .. today) with every other
    /// filter cleared.
    pub fn reset_filters(&self) {
        self.filters.update(|filters| {
            filters.reset();
            log::debug!(
                "reset_filters: {} .. {}",
                filters.date_from,
                filters.date_to
            );
        });
    }

    /// Reset only when no date range has been chosen yet.
    pub fn ensure_date_range(&self) {
        let missing = self
            .filters
            .with_untracked(|f| f.date_from.is_empty() || f.date_to.is_empty());
        if missing {
            self.reset_filters();
        }
    }

    /// Request parameters derived from the current filters (tracked)
    pub fn query_params(&self) -> QueryParams {
        self.filters.with(QueryParams::from_filters)
    }
}

impl Default for FiltersStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Create the store and put it into context. Call once, at the app root.
pub fn provide_filters_store() -> FiltersStore {
    let store = FiltersStore::new();
    provide_context(store);
    store
}

pub fn use_filters_store() -> FiltersStore {
    use_context::<FiltersStore>().expect("FiltersStore context not found")
}
