use std::cmp::{Ordering, Reverse};

use crate::catalog::{Catalog, CatalogItem};
use crate::state::{Category, Favorites, FilterState, SortKey};

pub const DEFAULT_LARGEST_COUNT: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewOptions {
    /// Size of the `largest` selection.
    pub largest_count: usize,
    /// Galleries without sort controls ignore `FilterState::sort`.
    pub sort_enabled: bool,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            largest_count: DEFAULT_LARGEST_COUNT,
            sort_enabled: true,
        }
    }
}

/// Derives the ordered list of visible items: category, then search, then sort.
pub fn compute_view<'a>(
    catalog: &'a Catalog,
    filter: &FilterState,
    favorites: &Favorites,
    options: ViewOptions,
) -> Vec<&'a CatalogItem> {
    let mut view = select_category(catalog, filter.category, favorites, options.largest_count);

    let query = filter.query.trim().to_lowercase();
    if !query.is_empty() {
        view.retain(|item| item.name.to_lowercase().contains(&query));
    }

    if options.sort_enabled {
        if let Some(key) = filter.sort {
            sort_view(&mut view, key);
        }
    }

    view
}

fn select_category<'a>(
    catalog: &'a Catalog,
    category: Category,
    favorites: &Favorites,
    largest_count: usize,
) -> Vec<&'a CatalogItem> {
    let items = catalog.items().iter();
    match category {
        Category::All => items.collect(),
        Category::Before1900 => items.filter(|item| item.year < 1900).collect(),
        Category::Historic => items
            .filter(|item| (1900..2000).contains(&item.year))
            .collect(),
        Category::After2000 => items.filter(|item| item.year >= 2000).collect(),
        Category::Largest => {
            let mut by_size: Vec<&CatalogItem> = items.collect();
            // Stable: equal sizes keep catalog order. Unsized items sort last.
            by_size.sort_by_key(|item| Reverse(item.size));
            by_size.truncate(largest_count);
            by_size
        }
        Category::FavoritesOnly => items.filter(|item| favorites.contains(&item.id)).collect(),
    }
}

fn sort_view(view: &mut [&CatalogItem], key: SortKey) {
    match key {
        SortKey::NameAsc => view.sort_by(|a, b| compare_names(&a.name, &b.name)),
        SortKey::YearAsc => view.sort_by_key(|item| item.year),
        SortKey::YearDesc => view.sort_by_key(|item| Reverse(item.year)),
    }
}

/// Name ordering for the sort control. Case and Latin accents are ignored
/// first, then case-insensitive text, then the raw text breaks ties.
///
/// Not a full locale collation: letters outside Latin-1 and Latin Extended-A
/// compare by code point.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(collation_key(b))
        .then_with(|| lowercase(a).cmp(lowercase(b)))
        .then_with(|| a.cmp(b))
}

fn lowercase(name: &str) -> impl Iterator<Item = char> + '_ {
    name.chars().flat_map(char::to_lowercase)
}

fn collation_key(name: &str) -> impl Iterator<Item = char> + '_ {
    lowercase(name).map(fold_accent)
}

fn fold_accent(ch: char) -> char {
    match ch {
        'à'..='å' | 'ā' | 'ă' | 'ą' => 'a',
        'ç' | 'ć' | 'ĉ' | 'ċ' | 'č' => 'c',
        'ď' | 'đ' => 'd',
        'è'..='ë' | 'ē' | 'ĕ' | 'ė' | 'ę' | 'ě' => 'e',
        'ĝ' | 'ğ' | 'ġ' | 'ģ' => 'g',
        'ì'..='ï' | 'ĩ' | 'ī' | 'ĭ' | 'į' | 'ı' => 'i',
        'ł' | 'ĺ' | 'ļ' | 'ľ' => 'l',
        'ñ' | 'ń' | 'ņ' | 'ň' => 'n',
        'ò'..='ö' | 'ø' | 'ō' | 'ŏ' | 'ő' => 'o',
        'ŕ' | 'ř' => 'r',
        'ś' | 'ŝ' | 'ş' | 'š' => 's',
        'ţ' | 'ť' => 't',
        'ù'..='ü' | 'ũ' | 'ū' | 'ŭ' | 'ů' | 'ű' | 'ų' => 'u',
        'ý' | 'ÿ' => 'y',
        'ź' | 'ż' | 'ž' => 'z',
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::test_item;

    fn years_catalog() -> Catalog {
        Catalog::new(vec![
            test_item("saltlake", "Salt Lake Temple", 1893, Some(253_000)),
            test_item("laie", "Laie Hawaii Temple", 1919, Some(42_000)),
            test_item("london", "London England Temple", 1958, Some(42_000)),
            test_item("manila", "Manila Philippines Temple", 1984, Some(19_000)),
            test_item("accra", "Accra Ghana Temple", 2004, Some(17_500)),
            test_item("rome", "Rome Italy Temple", 2019, Some(41_010)),
            test_item("lagos", "Lagos Nigeria Temple", 2022, None),
        ])
        .expect("catalog should build")
    }

    fn filter(category: Category) -> FilterState {
        FilterState {
            category,
            ..FilterState::default()
        }
    }

    fn years(view: &[&CatalogItem]) -> Vec<i32> {
        view.iter().map(|item| item.year).collect()
    }

    fn ids(view: &[&CatalogItem]) -> Vec<String> {
        view.iter().map(|item| item.id.clone()).collect()
    }

    fn default_view<'a>(
        catalog: &'a Catalog,
        state: &FilterState,
        favorites: &Favorites,
    ) -> Vec<&'a CatalogItem> {
        compute_view(catalog, state, favorites, ViewOptions::default())
    }

    #[test]
    fn all_passes_catalog_through_in_order() {
        let catalog = years_catalog();
        let view = default_view(&catalog, &filter(Category::All), &Favorites::new());
        assert_eq!(years(&view), vec![1893, 1919, 1958, 1984, 2004, 2019, 2022]);
    }

    #[test]
    fn year_ranges_partition_the_catalog() {
        let catalog = years_catalog();
        let favorites = Favorites::new();
        let options = ViewOptions::default();

        let before = compute_view(&catalog, &filter(Category::Before1900), &favorites, options);
        let historic = compute_view(&catalog, &filter(Category::Historic), &favorites, options);
        let after = compute_view(&catalog, &filter(Category::After2000), &favorites, options);

        assert_eq!(years(&before), vec![1893]);
        assert_eq!(years(&historic), vec![1919, 1958, 1984]);
        assert_eq!(years(&after), vec![2004, 2019, 2022]);
        assert_eq!(before.len() + historic.len() + after.len(), catalog.len());
    }

    #[test]
    fn largest_takes_top_sizes_with_catalog_order_on_ties() {
        let catalog = years_catalog();
        let view = default_view(&catalog, &filter(Category::Largest), &Favorites::new());
        assert_eq!(ids(&view), vec!["saltlake", "laie", "london"]);

        let two = compute_view(
            &catalog,
            &filter(Category::Largest),
            &Favorites::new(),
            ViewOptions {
                largest_count: 2,
                ..ViewOptions::default()
            },
        );
        assert_eq!(ids(&two), vec!["saltlake", "laie"]);
    }

    #[test]
    fn favorites_only_ignores_ids_missing_from_catalog() {
        let catalog = years_catalog();
        let favorites: Favorites = ["rome", "stale-id", "saltlake"].into_iter().collect();
        let view = default_view(&catalog, &filter(Category::FavoritesOnly), &favorites);
        assert_eq!(ids(&view), vec!["saltlake", "rome"]);
    }

    #[test]
    fn single_toggle_changes_favorites_view_by_one() {
        let catalog = years_catalog();
        let mut favorites: Favorites = ["rome"].into_iter().collect();
        let state = filter(Category::FavoritesOnly);
        let before = compute_view(&catalog, &state, &favorites, ViewOptions::default()).len();

        favorites.toggle("accra");
        let added = compute_view(&catalog, &state, &favorites, ViewOptions::default()).len();
        assert_eq!(added, before + 1);

        favorites.toggle("rome");
        let removed = compute_view(&catalog, &state, &favorites, ViewOptions::default()).len();
        assert_eq!(removed, added - 1);
    }

    #[test]
    fn search_matches_names_case_insensitively() {
        let catalog = Catalog::new(vec![
            test_item("saltlake", "Salt Lake Temple", 1893, None),
            test_item("accra", "Accra Ghana Temple", 2004, None),
            test_item("lagos", "Lagos Nigeria Temple", 2022, None),
            test_item("manila", "Manila Philippines Temple", 1984, None),
            test_item("london", "London England Temple", 1958, None),
        ])
        .unwrap();

        for query in ["lagos", "LAGOS", "LaGoS", "  lagos  "] {
            let mut state = FilterState::default();
            state.query = query.to_string();
            let view = default_view(&catalog, &state, &Favorites::new());
            assert_eq!(ids(&view), vec!["lagos"], "query {query:?}");
        }
    }

    #[test]
    fn empty_search_is_a_no_op() {
        let catalog = years_catalog();
        let mut state = filter(Category::After2000);
        state.query = "   ".to_string();
        let view = default_view(&catalog, &state, &Favorites::new());
        assert_eq!(years(&view), vec![2004, 2019, 2022]);
    }

    #[test]
    fn search_applies_after_category() {
        let catalog = years_catalog();
        let mut state = filter(Category::Before1900);
        state.query = "lagos".to_string();
        let view = default_view(&catalog, &state, &Favorites::new());
        assert!(view.is_empty());
    }

    #[test]
    fn year_sorts_are_exact_reverses() {
        let catalog = Catalog::new(vec![
            test_item("b", "B", 1950, None),
            test_item("a", "A", 2010, None),
            test_item("c", "C", 1890, None),
        ])
        .unwrap();
        let mut state = FilterState::default();

        state.sort = Some(SortKey::YearAsc);
        let ascending = ids(&default_view(&catalog, &state, &Favorites::new()));
        state.sort = Some(SortKey::YearDesc);
        let mut descending = ids(&default_view(&catalog, &state, &Favorites::new()));

        assert_eq!(ascending, vec!["c", "b", "a"]);
        descending.reverse();
        assert_eq!(ascending, descending);
    }

    #[test]
    fn name_sort_ignores_case() {
        let catalog = Catalog::new(vec![
            test_item("r", "rome Italy Temple", 2019, None),
            test_item("a", "Accra Ghana Temple", 2004, None),
            test_item("m", "Manila Philippines Temple", 1984, None),
        ])
        .unwrap();
        let state = FilterState {
            sort: Some(SortKey::NameAsc),
            ..FilterState::default()
        };
        let view = default_view(&catalog, &state, &Favorites::new());
        assert_eq!(ids(&view), vec!["a", "m", "r"]);
    }

    #[test]
    fn sort_is_ignored_when_controls_are_disabled() {
        let catalog = years_catalog();
        let state = FilterState {
            sort: Some(SortKey::YearDesc),
            ..FilterState::default()
        };
        let options = ViewOptions {
            sort_enabled: false,
            ..ViewOptions::default()
        };
        let view = compute_view(&catalog, &state, &Favorites::new(), options);
        assert_eq!(view.first().map(|item| item.year), Some(1893));
    }

    #[test]
    fn compute_view_is_deterministic_and_leaves_inputs_untouched() {
        let catalog = years_catalog();
        let snapshot = catalog.clone();
        let favorites: Favorites = ["lagos"].into_iter().collect();
        let state = FilterState {
            category: Category::After2000,
            sort: Some(SortKey::NameAsc),
            query: "temple".to_string(),
        };

        let first = ids(&compute_view(&catalog, &state, &favorites, ViewOptions::default()));
        let second = ids(&compute_view(&catalog, &state, &favorites, ViewOptions::default()));
        assert_eq!(first, second);
        assert_eq!(catalog, snapshot);
        assert_eq!(favorites.len(), 1);
    }

    #[test]
    fn accented_names_sort_with_their_base_letter() {
        let mut names = vec!["Zürich", "Ámsterdam", "Dallas", "Éire", "Fresno", "amman"];
        names.sort_by(|a, b| compare_names(a, b));
        assert_eq!(names, vec!["amman", "Ámsterdam", "Dallas", "Éire", "Fresno", "Zürich"]);

        assert_eq!(compare_names("Ávila", "Avila"), Ordering::Greater);
        assert_eq!(compare_names("avila", "Avila"), Ordering::Greater);
    }
}
