use std::collections::HashSet;

use crate::models::{Restaurant, SortKey};

/// Unique cuisine tags across the dataset, in first-occurrence order.
/// These become the filter buttons; the UI prepends an implicit "All".
pub fn cuisine_facets(restaurants: &[Restaurant]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut facets = Vec::new();
    for r in restaurants {
        for c in &r.cuisine {
            if seen.insert(c.clone()) {
                facets.push(c.clone());
            }
        }
    }
    facets
}

/// Lower bound of a "min-max min" delivery-time string, i.e. its leading
/// integer. The dataset is well-formed, but a malformed string yields None
/// and sorts last.
pub fn delivery_lower_bound(delivery_time: &str) -> Option<u32> {
    let digits: String = delivery_time
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}

/// Filters then sorts the dataset. Pure: the result owns no state and is
/// recomputed on every render.
///
/// - filter passes when `cuisine_filter` is unset or the record's cuisine
///   list contains it (exact match)
/// - `Relevance` keeps dataset order; `Rating` sorts descending by rating;
///   `Time` sorts ascending by the delivery-time lower bound
/// - both sorts are stable, so ties keep their relative dataset order
pub fn derive_listing(
    restaurants: &[Restaurant],
    cuisine_filter: Option<&str>,
    sort_key: SortKey,
) -> Vec<Restaurant> {
    let mut filtered: Vec<Restaurant> = restaurants
        .iter()
        .filter(|r| match cuisine_filter {
            Some(c) => r.cuisine.iter().any(|tag| tag == c),
            None => true,
        })
        .cloned()
        .collect();

    match sort_key {
        SortKey::Relevance => {}
        SortKey::Rating => {
            filtered.sort_by(|a, b| b.rating.total_cmp(&a.rating));
        }
        SortKey::Time => {
            filtered.sort_by_key(|r| {
                delivery_lower_bound(&r.delivery_time).unwrap_or(u32::MAX)
            });
        }
    }

    filtered
}

/// Toggles membership of `id` in the favorites set. Toggling twice returns
/// the original set.
pub fn toggle_favorite(favorites: &HashSet<u32>, id: u32) -> HashSet<u32> {
    let mut set = favorites.clone();
    if set.contains(&id) {
        set.remove(&id);
    } else {
        set.insert(id);
    }
    set
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::sample_restaurants;

    fn names(listing: &[Restaurant]) -> Vec<&str> {
        listing.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn unfiltered_relevance_keeps_dataset_order() {
        let data = sample_restaurants();
        let listing = derive_listing(&data, None, SortKey::Relevance);
        assert_eq!(listing.len(), 6);
        assert_eq!(
            names(&listing),
            vec![
                "Bombay Bites",
                "Curry Corner",
                "Pizza Planet",
                "Sushi Studio",
                "Green Bowl",
                "Brew & Bite",
            ]
        );
    }

    #[test]
    fn filter_is_exact_for_every_facet() {
        let data = sample_restaurants();
        for facet in cuisine_facets(&data) {
            let listing = derive_listing(&data, Some(&facet), SortKey::Relevance);
            // no false positives
            for r in &listing {
                assert!(r.cuisine.iter().any(|c| *c == facet));
            }
            // no false negatives
            let expected = data
                .iter()
                .filter(|r| r.cuisine.iter().any(|c| *c == facet))
                .count();
            assert_eq!(listing.len(), expected, "facet {facet}");
        }
    }

    #[test]
    fn italian_filter_matches_only_pizza_planet() {
        let data = sample_restaurants();
        let listing = derive_listing(&data, Some("Italian"), SortKey::Relevance);
        assert_eq!(names(&listing), vec!["Pizza Planet"]);
    }

    #[test]
    fn unknown_cuisine_yields_empty_listing() {
        let data = sample_restaurants();
        let listing = derive_listing(&data, Some("Molecular"), SortKey::Rating);
        assert!(listing.is_empty());
    }

    #[test]
    fn rating_sort_is_descending() {
        let data = sample_restaurants();
        let listing = derive_listing(&data, None, SortKey::Rating);
        assert_eq!(
            names(&listing),
            vec![
                "Pizza Planet",
                "Brew & Bite",
                "Bombay Bites",
                "Sushi Studio",
                "Curry Corner",
                "Green Bowl",
            ]
        );
        for pair in listing.windows(2) {
            assert!(pair[0].rating >= pair[1].rating);
        }
    }

    #[test]
    fn time_sort_is_ascending_with_stable_ties() {
        let data = sample_restaurants();
        let listing = derive_listing(&data, None, SortKey::Time);
        // Pizza Planet and Brew & Bite both start at 20 min; dataset order
        // puts Pizza Planet first and the stable sort must keep it there.
        assert_eq!(
            names(&listing),
            vec![
                "Green Bowl",
                "Pizza Planet",
                "Brew & Bite",
                "Curry Corner",
                "Bombay Bites",
                "Sushi Studio",
            ]
        );
        let bounds: Vec<u32> = listing
            .iter()
            .filter_map(|r| delivery_lower_bound(&r.delivery_time))
            .collect();
        for pair in bounds.windows(2) {
            assert!(pair[0] <= pair[1]);
        }
    }

    #[test]
    fn clearing_filter_restores_full_order() {
        let data = sample_restaurants();
        let _ = derive_listing(&data, Some("Japanese"), SortKey::Relevance);
        let restored = derive_listing(&data, None, SortKey::Relevance);
        assert_eq!(names(&restored), names(&data));
    }

    #[test]
    fn delivery_lower_bound_parses_leading_integer() {
        assert_eq!(delivery_lower_bound("30-40 min"), Some(30));
        assert_eq!(delivery_lower_bound("15-25 min"), Some(15));
        assert_eq!(delivery_lower_bound("soon"), None);
        assert_eq!(delivery_lower_bound(""), None);
    }

    #[test]
    fn facets_are_deduplicated_in_first_occurrence_order() {
        let data = sample_restaurants();
        assert_eq!(
            cuisine_facets(&data),
            vec![
                "North Indian",
                "Street Food",
                "South Indian",
                "Seafood",
                "Italian",
                "Pizzas",
                "Japanese",
                "Healthy",
                "Salads",
                "Cafe",
                "Desserts",
            ]
        );
    }

    #[test]
    fn toggle_favorite_adds_then_removes() {
        let empty = HashSet::new();
        let one = toggle_favorite(&empty, 3);
        assert!(one.contains(&3));
        assert_eq!(one.len(), 1);

        let back = toggle_favorite(&one, 3);
        assert_eq!(back, empty);
    }

    #[test]
    fn double_toggle_is_identity_on_nonempty_set() {
        let mut favorites = HashSet::new();
        favorites.insert(1);
        favorites.insert(5);

        let toggled = toggle_favorite(&toggle_favorite(&favorites, 2), 2);
        assert_eq!(toggled, favorites);
    }
}
