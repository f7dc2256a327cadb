use std::collections::HashSet;

use yew::prelude::*;

use crate::components::RestaurantCard;
use crate::models::Restaurant;

#[derive(Properties, PartialEq, Clone)]
pub struct RestaurantGridProps {
    pub location: String,
    pub listing: Vec<Restaurant>,
    pub favorites: HashSet<u32>,
    pub on_toggle_favorite: Callback<u32>,
}

/// Section heading, result count and the card grid. An empty listing just
/// renders "0 places" over an empty grid.
#[function_component(RestaurantGrid)]
pub fn restaurant_grid(props: &RestaurantGridProps) -> Html {
    html! {
        <section class="listing">
            <div class="listing-header">
                <h2 class="listing-title">
                    {format!("Restaurants near {}", props.location)}
                </h2>
                <div class="listing-count">
                    {format!("{} places", props.listing.len())}
                </div>
            </div>

            <div class="card-grid">
                { for props.listing.iter().map(|r| {
                    html! {
                        <RestaurantCard
                            key={r.id}
                            restaurant={r.clone()}
                            is_fav={props.favorites.contains(&r.id)}
                            on_toggle_favorite={props.on_toggle_favorite.clone()}
                        />
                    }
                })}
            </div>
        </section>
    }
}
