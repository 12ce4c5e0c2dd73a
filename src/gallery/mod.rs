use thiserror::Error;

use crate::catalog::{Catalog, CatalogItem};
use crate::config::GalleryConfig;
use crate::error::AppResult;
use crate::input::{Bindings, Control, GalleryAction, UiEvent};
use crate::render::{
    cards_for, result_count_text, CardLabels, LazyImageLoader, Surface, Viewport,
};
use crate::state::{Category, CategoryMachine, Favorites, FilterEvent, FilterState, SortKey};
use crate::storage::{
    load_favorites, load_last_filter, save_favorites, save_last_filter, KeyValueStore,
    StorageKeys,
};
use crate::view::{compute_view, ViewOptions};

#[derive(Debug, Error)]
pub enum GalleryError {
    #[error("favorite id is empty")]
    EmptyFavoriteId,
}

/// What a handled action produced for the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Rendered { shown: usize },
    Details(String),
}

/// Owns the gallery session: catalog, favorites, filter selection and the
/// presentation surface. Every state change re-renders through the surface.
pub struct GalleryController<S, R> {
    catalog: Catalog,
    favorites: Favorites,
    filter: FilterState,
    categories: CategoryMachine,
    options: ViewOptions,
    keys: StorageKeys,
    persist_last_filter: bool,
    store: S,
    surface: R,
    lazy_images: LazyImageLoader,
    labels: CardLabels,
    bindings: Bindings,
}

impl<S: KeyValueStore, R: Surface> GalleryController<S, R> {
    /// Loads persisted state and renders the initial view.
    ///
    /// The first render always shows the full catalog. A restored last filter
    /// only refills the controls and takes effect with the next action.
    pub fn new(catalog: Catalog, config: &GalleryConfig, store: S, surface: R) -> Self {
        let favorites = load_favorites(&store, &config.storage_keys.favorites);
        let stale = favorites.iter().filter(|id| !catalog.contains(id)).count();
        tracing::info!(
            items = catalog.len(),
            favorites = favorites.len(),
            stale,
            "gallery initialised"
        );

        let mut controller = Self {
            catalog,
            favorites,
            filter: FilterState::default(),
            categories: CategoryMachine::new(&config.categories),
            options: config.view_options(),
            keys: config.storage_keys.clone(),
            persist_last_filter: config.persist_last_filter,
            store,
            surface,
            lazy_images: LazyImageLoader::new(config.lazy_images),
            labels: config.card_labels.clone(),
            bindings: Bindings::new(),
        };
        controller.render();
        if controller.persist_last_filter {
            controller.restore_last_filter();
        }
        controller
    }

    fn restore_last_filter(&mut self) {
        let Some(saved) = load_last_filter(&self.store, &self.keys.last_filter) else {
            return;
        };
        if saved.category != Category::All {
            if let Err(err) = self.categories.transition(FilterEvent::Select(saved.category)) {
                tracing::warn!(%err, "ignoring stored category");
            }
        }
        self.filter = FilterState {
            category: self.categories.state(),
            sort: Some(saved.sort.unwrap_or(SortKey::NameAsc)),
            query: saved.query.trim().to_string(),
        };
        tracing::debug!(filter = ?self.filter, "restored last filter");
    }

    /// Registers page handlers once; repeated calls add nothing.
    pub fn wire(&mut self, controls: &[Control]) -> usize {
        self.bindings.register_gallery(controls)
    }

    pub fn bindings(&self) -> &Bindings {
        &self.bindings
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn favorites(&self) -> &Favorites {
        &self.favorites
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn category(&self) -> Category {
        self.categories.state()
    }

    pub fn surface(&self) -> &R {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut R {
        &mut self.surface
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn keys(&self) -> &StorageKeys {
        &self.keys
    }

    pub fn view(&self) -> Vec<&CatalogItem> {
        compute_view(&self.catalog, &self.filter, &self.favorites, self.options)
    }

    /// Replaces the surface contents with the current view. Returns the item count.
    pub fn render(&mut self) -> usize {
        let view = compute_view(&self.catalog, &self.filter, &self.favorites, self.options);
        let cards = cards_for(&view, &self.favorites, &self.labels);
        let shown = cards.len();

        if !self.surface.replace_cards(&cards) {
            tracing::debug!("gallery container missing; skipping cards");
        }
        self.surface.set_result_count(&result_count_text(shown));
        self.surface.set_favorite_count(self.favorites.len());

        let immediate = self
            .lazy_images
            .observe(cards.iter().map(|card| card.id.as_str()));
        for id in immediate {
            self.surface.resolve_image(&id);
        }
        shown
    }

    /// Resolves images that came within the loading margin of `viewport`.
    pub fn on_viewport(&mut self, viewport: Viewport) -> usize {
        let near = self.lazy_images.on_viewport(viewport);
        near.iter()
            .filter(|id| self.surface.resolve_image(id))
            .count()
    }

    pub fn handle(&mut self, event: &UiEvent) -> AppResult<Option<Outcome>> {
        match self.bindings.dispatch(event) {
            Some(action) => self.apply(action).map(Some),
            None => Ok(None),
        }
    }

    pub fn apply(&mut self, action: GalleryAction) -> AppResult<Outcome> {
        tracing::debug!(?action, "apply gallery action");
        match action {
            GalleryAction::ShowDetails(id) => return Ok(Outcome::Details(self.details(&id))),
            GalleryAction::ToggleFavorite(id) => {
                self.toggle_favorite(&id)?;
            }
            GalleryAction::SelectCategory(category) => {
                self.select_category(category)?;
            }
            GalleryAction::ToggleFavoritesOnly => {
                self.toggle_favorites_only()?;
            }
            GalleryAction::ApplySearch(text) => self.apply_search(&text),
            GalleryAction::ClearSearch => self.apply_search(""),
            GalleryAction::SetSort(key) => self.set_sort(key),
        }
        Ok(Outcome::Rendered {
            shown: self.view().len(),
        })
    }

    /// Flips membership of `id`, persists the whole set, then re-renders.
    ///
    /// Ids missing from the catalog are accepted and kept in storage.
    pub fn toggle_favorite(&mut self, id: &str) -> AppResult<bool> {
        if id.is_empty() {
            return Err(GalleryError::EmptyFavoriteId.into());
        }
        let now_favorite = self.favorites.toggle(id);
        if self.catalog.position(id).is_none() {
            tracing::debug!(id, "toggled favorite for id outside the catalog");
        }
        tracing::info!(
            id,
            name = self.catalog.display_name(id),
            now_favorite,
            total = self.favorites.len(),
            "favorite toggled"
        );

        let persisted = save_favorites(&mut self.store, &self.keys.favorites, &self.favorites);
        self.render();
        persisted?;
        Ok(now_favorite)
    }

    pub fn select_category(&mut self, category: Category) -> AppResult<Category> {
        self.transition(FilterEvent::Select(category))
    }

    pub fn toggle_favorites_only(&mut self) -> AppResult<Category> {
        self.transition(FilterEvent::ToggleFavoritesOnly)
    }

    fn transition(&mut self, event: FilterEvent) -> AppResult<Category> {
        let category = self.categories.transition(event)?;
        tracing::debug!(
            category = category.as_str(),
            transitions = self.categories.history().len(),
            "category selected"
        );
        self.filter.category = category;
        self.filter_changed();
        Ok(category)
    }

    pub fn apply_search(&mut self, text: &str) {
        self.filter.set_query(text);
        self.filter_changed();
    }

    pub fn set_sort(&mut self, key: Option<SortKey>) {
        self.filter.sort = key;
        self.filter_changed();
    }

    fn filter_changed(&mut self) {
        if self.persist_last_filter {
            let saved = save_last_filter(&mut self.store, &self.keys.last_filter, &self.filter);
            if let Err(err) = saved {
                tracing::warn!(%err, "failed to persist last filter");
            }
        }
        self.render();
    }

    pub fn details(&self, id: &str) -> String {
        self.catalog.details_text(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{album_catalog, gallery_catalog};
    use crate::input::{EventKind, ShortcutKey};
    use crate::render::{HtmlSurface, LazyImageSettings, PlainSurface};
    use crate::storage::{MemoryStore, StorageError, StorageResult};

    const FAVORITES: &str = "templeAlbumFavorites";

    fn controller(store: MemoryStore) -> GalleryController<MemoryStore, HtmlSurface> {
        GalleryController::new(gallery_catalog(), &GalleryConfig::default(), store, HtmlSurface::new())
    }

    #[test]
    fn initial_render_shows_full_catalog() {
        let gallery = controller(MemoryStore::new());
        assert_eq!(gallery.category(), Category::All);
        assert_eq!(gallery.surface().result_count(), Some("6 temples shown"));
        assert_eq!(gallery.surface().favorite_count(), Some("0"));
        let html = gallery.surface().grid_html().unwrap();
        assert_eq!(html.matches("<article").count(), 6);
    }

    #[test]
    fn malformed_favorites_start_empty() {
        let gallery = controller(MemoryStore::new().with_entry(FAVORITES, "not-json"));
        assert!(gallery.favorites().is_empty());
    }

    #[test]
    fn toggle_persists_whole_set_and_rerenders() {
        let mut gallery = controller(MemoryStore::new());
        assert!(gallery.toggle_favorite("lagos").expect("toggle should work"));
        assert!(gallery.toggle_favorite("laie").expect("toggle should work"));

        assert_eq!(gallery.store().get(FAVORITES).as_deref(), Some(r#"["lagos","laie"]"#));
        assert_eq!(gallery.surface().favorite_count(), Some("2"));
        assert!(gallery
            .surface()
            .grid_html()
            .unwrap()
            .contains("data-id=\"lagos\" aria-pressed=\"true\">★ Favorite"));

        assert!(!gallery.toggle_favorite("lagos").unwrap());
        assert_eq!(gallery.store().get(FAVORITES).as_deref(), Some(r#"["laie"]"#));
    }

    #[test]
    fn toggling_twice_is_an_involution_and_moves_favorites_view_by_one() {
        let mut gallery = controller(MemoryStore::new().with_entry(FAVORITES, r#"["manila"]"#));
        gallery.select_category(Category::FavoritesOnly).unwrap();
        let before = gallery.favorites().clone();
        assert_eq!(gallery.view().len(), 1);

        gallery.toggle_favorite("hongkong").unwrap();
        assert_eq!(gallery.view().len(), 2);
        assert_eq!(gallery.surface().result_count(), Some("2 temples shown"));

        gallery.toggle_favorite("hongkong").unwrap();
        assert_eq!(gallery.favorites(), &before);
        assert_eq!(gallery.surface().result_count(), Some("1 temple shown"));
    }

    #[test]
    fn unknown_ids_are_kept_in_storage_but_never_shown() {
        let mut gallery = controller(MemoryStore::new());
        gallery.toggle_favorite("retired-temple").unwrap();
        gallery.select_category(Category::FavoritesOnly).unwrap();

        assert!(gallery.view().is_empty());
        assert_eq!(gallery.store().get(FAVORITES).as_deref(), Some(r#"["retired-temple"]"#));
        assert_eq!(gallery.details("retired-temple"), "retired-temple");
    }

    #[test]
    fn empty_favorite_id_is_rejected() {
        let mut gallery = controller(MemoryStore::new());
        let err = gallery.toggle_favorite("").unwrap_err();
        assert!(matches!(err, crate::AppError::Gallery(GalleryError::EmptyFavoriteId)));
        assert!(gallery.store().get(FAVORITES).is_none());
    }

    #[test]
    fn search_combines_with_category_and_sort() {
        let mut gallery = controller(MemoryStore::new());
        gallery.select_category(Category::Historic).unwrap();
        gallery.apply_search("  TEMPLE ");
        gallery.set_sort(Some(SortKey::YearDesc));

        let years: Vec<i32> = gallery.view().iter().map(|item| item.year).collect();
        assert_eq!(years, vec![1984, 1983, 1919]);
        assert_eq!(gallery.filter().query, "TEMPLE");
    }

    #[test]
    fn disabled_category_leaves_view_untouched() {
        let config = GalleryConfig {
            categories: vec![Category::Before1900, Category::After2000],
            ..GalleryConfig::default()
        };
        let mut gallery =
            GalleryController::new(album_catalog(), &config, MemoryStore::new(), HtmlSurface::new());

        assert!(gallery.select_category(Category::Largest).is_err());
        assert_eq!(gallery.category(), Category::All);
        assert_eq!(gallery.select_category(Category::After2000).unwrap(), Category::After2000);
        assert_eq!(gallery.view().len(), 2);
    }

    #[test]
    fn last_filter_is_persisted_and_restored_when_enabled() {
        let config = GalleryConfig {
            persist_last_filter: true,
            ..GalleryConfig::default()
        };
        let mut gallery =
            GalleryController::new(gallery_catalog(), &config, MemoryStore::new(), PlainSurface::new());
        gallery.select_category(Category::After2000).unwrap();
        gallery.apply_search("lagos");

        let store = gallery.store().clone();
        assert_eq!(
            store.get("templeAlbumLastFilter").as_deref(),
            Some(r#"{"category":"after2000","sort":null,"query":"lagos"}"#)
        );

        let restored = GalleryController::new(gallery_catalog(), &config, store, PlainSurface::new());
        assert_eq!(restored.category(), Category::After2000);
        assert_eq!(restored.filter().query, "lagos");
        assert_eq!(restored.view().len(), 1);
    }

    #[test]
    fn restored_filter_waits_for_next_action_before_rendering() {
        let config = GalleryConfig {
            persist_last_filter: true,
            ..GalleryConfig::default()
        };
        let store = MemoryStore::new().with_entry(
            "templeAlbumLastFilter",
            r#"{"category":"after2000","sort":null,"query":"lagos"}"#,
        );
        let mut gallery =
            GalleryController::new(gallery_catalog(), &config, store, HtmlSurface::new());

        assert_eq!(gallery.surface().result_count(), Some("6 temples shown"));
        assert_eq!(gallery.filter().sort, Some(SortKey::NameAsc));
        assert_eq!(gallery.category(), Category::After2000);

        gallery.apply_search("lagos");
        assert_eq!(gallery.surface().result_count(), Some("1 temple shown"));
    }

    #[test]
    fn configured_labels_appear_on_cards() {
        let config = GalleryConfig {
            card_labels: CardLabels {
                favorite: "★ Saved".to_string(),
                add_favorite: "☆ Save".to_string(),
            },
            ..GalleryConfig::default()
        };
        let mut gallery =
            GalleryController::new(gallery_catalog(), &config, MemoryStore::new(), HtmlSurface::new());
        gallery.toggle_favorite("lagos").unwrap();

        let html = gallery.surface().grid_html().unwrap();
        assert!(html.contains("data-id=\"lagos\" aria-pressed=\"true\">★ Saved"));
        assert!(html.contains(">☆ Save</button>"));
    }

    #[test]
    fn events_flow_through_bindings_once_wired() {
        let mut gallery = controller(MemoryStore::new());
        let click = UiEvent::CardClick {
            action: "fav".to_string(),
            id: "papeete".to_string(),
        };
        assert_eq!(gallery.handle(&click).unwrap(), None);

        gallery.wire(&[Control::GalleryGrid, Control::SearchInput, Control::ShowFavorites]);
        gallery.wire(&[Control::GalleryGrid]);
        assert!(gallery.bindings().is_bound(Control::GalleryGrid, EventKind::Click));
        assert_eq!(gallery.bindings().len(), 4);

        assert_eq!(
            gallery.handle(&click).unwrap(),
            Some(Outcome::Rendered { shown: 6 })
        );
        assert!(gallery.favorites().contains("papeete"));

        let shown = gallery.handle(&UiEvent::ShowFavoritesClick).unwrap();
        assert_eq!(shown, Some(Outcome::Rendered { shown: 1 }));

        let search = UiEvent::SearchKey {
            text: "zzz".to_string(),
            key: ShortcutKey::Enter,
        };
        assert_eq!(gallery.handle(&search).unwrap(), Some(Outcome::Rendered { shown: 0 }));
        assert_eq!(gallery.surface().result_count(), Some("0 temples shown"));
    }

    #[test]
    fn details_action_reports_text_without_rendering_changes() {
        let mut gallery = controller(MemoryStore::new());
        let outcome = gallery
            .apply(GalleryAction::ShowDetails("lagos".to_string()))
            .unwrap();
        assert_eq!(
            outcome,
            Outcome::Details(
                "Lagos Nigeria Temple\nLagos, Nigeria\nDedicated: 2019\n\nFirst temple in Nigeria."
                    .to_string()
            )
        );
    }

    #[test]
    fn missing_containers_do_not_break_rendering() {
        let mut gallery = GalleryController::new(
            gallery_catalog(),
            &GalleryConfig::default(),
            MemoryStore::new(),
            HtmlSurface::with_containers(false, false, true),
        );
        gallery.toggle_favorite("saltlake").unwrap();
        assert_eq!(gallery.surface().grid_html(), None);
        assert_eq!(gallery.surface().favorite_count(), Some("1"));
    }

    #[test]
    fn lazy_images_load_as_viewport_moves() {
        let config = GalleryConfig {
            lazy_images: LazyImageSettings {
                margin_px: 0,
                observer_available: true,
                row_height_px: 100,
                columns: 1,
            },
            ..GalleryConfig::default()
        };
        let mut gallery =
            GalleryController::new(gallery_catalog(), &config, MemoryStore::new(), HtmlSurface::new());
        assert!(!gallery.surface().grid_html().unwrap().contains("<img src="));

        assert_eq!(gallery.on_viewport(Viewport::new(0, 150)), 2);
        assert_eq!(gallery.on_viewport(Viewport::new(0, 150)), 0);
        assert_eq!(gallery.surface().grid_html().unwrap().matches("<img src=").count(), 2);
    }

    #[test]
    fn without_observer_all_images_load_at_render() {
        let config = GalleryConfig {
            lazy_images: LazyImageSettings {
                observer_available: false,
                ..LazyImageSettings::default()
            },
            ..GalleryConfig::default()
        };
        let gallery =
            GalleryController::new(gallery_catalog(), &config, MemoryStore::new(), HtmlSurface::new());
        let html = gallery.surface().grid_html().unwrap();
        assert_eq!(html.matches("<img src=").count(), 6);
        assert!(!html.contains("data-src"));
    }

    struct ReadOnlyStore(MemoryStore);

    impl KeyValueStore for ReadOnlyStore {
        fn get(&self, key: &str) -> Option<String> {
            self.0.get(key)
        }

        fn set(&mut self, _key: &str, _value: &str) -> StorageResult<()> {
            Err(StorageError::EmptyKey)
        }

        fn remove(&mut self, _key: &str) -> StorageResult<()> {
            Ok(())
        }
    }

    #[test]
    fn storage_failure_is_reported_after_rendering() {
        let mut gallery = GalleryController::new(
            gallery_catalog(),
            &GalleryConfig::default(),
            ReadOnlyStore(MemoryStore::new()),
            HtmlSurface::new(),
        );
        let err = gallery.toggle_favorite("lagos").unwrap_err();
        assert!(matches!(err, crate::AppError::Storage(_)));
        assert_eq!(gallery.surface().favorite_count(), Some("1"));
    }
}
