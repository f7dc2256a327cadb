// ============================================================================
// APP — root view
// Owns all UI state (location, favorites, cuisine filter, sort key) and
// derives the filtered/sorted listing on every render. Children get data and
// callbacks via props; nothing else is shared.
// ============================================================================

use std::collections::HashSet;

use yew::prelude::*;

use crate::components::{FilterSidebar, Header, RestaurantGrid};
use crate::data::sample_restaurants;
use crate::listing::{cuisine_facets, derive_listing, toggle_favorite};
use crate::models::SortKey;

#[function_component(App)]
pub fn app() -> Html {
    let location = use_state(|| "Mumbai".to_string());
    let favorites = use_state(HashSet::<u32>::new);
    let cuisine_filter = use_state(|| None::<String>);
    let sort_key = use_state(SortKey::default);

    let restaurants = sample_restaurants();
    let cuisines = cuisine_facets(&restaurants);
    let listing = derive_listing(
        &restaurants,
        cuisine_filter.as_deref(),
        *sort_key,
    );

    let on_location_change = {
        let location = location.clone();
        Callback::from(move |value: String| {
            location.set(value);
        })
    };

    let on_toggle_favorite = {
        let favorites = favorites.clone();
        Callback::from(move |id: u32| {
            let next = toggle_favorite(&favorites, id);
            log::debug!("❤️ Favorite toggled: id={} ({} total)", id, next.len());
            favorites.set(next);
        })
    };

    let on_select_cuisine = {
        let cuisine_filter = cuisine_filter.clone();
        Callback::from(move |cuisine: Option<String>| {
            log::debug!("🍴 Cuisine filter: {:?}", cuisine);
            cuisine_filter.set(cuisine);
        })
    };

    let on_select_sort = {
        let sort_key = sort_key.clone();
        Callback::from(move |key: SortKey| {
            log::debug!("↕️ Sort: {}", key.as_str());
            sort_key.set(key);
        })
    };

    html! {
        <div class="page">
            <Header
                location={(*location).clone()}
                on_location_change={on_location_change}
            />

            <main class="main">
                <div class="layout">
                    <FilterSidebar
                        cuisines={cuisines}
                        cuisine_filter={(*cuisine_filter).clone()}
                        on_select_cuisine={on_select_cuisine}
                        sort_key={*sort_key}
                        on_select_sort={on_select_sort}
                    />

                    <RestaurantGrid
                        location={(*location).clone()}
                        listing={listing}
                        favorites={(*favorites).clone()}
                        on_toggle_favorite={on_toggle_favorite}
                    />
                </div>
            </main>

            <footer class="footer">
                {"This is a UI clone for learning/demo purposes only."}
            </footer>
        </div>
    }
}
