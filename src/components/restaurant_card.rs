use yew::prelude::*;

use crate::models::Restaurant;

#[derive(Properties, PartialEq, Clone)]
pub struct RestaurantCardProps {
    pub restaurant: Restaurant,
    pub is_fav: bool,
    pub on_toggle_favorite: Callback<u32>,
}

#[function_component(RestaurantCard)]
pub fn restaurant_card(props: &RestaurantCardProps) -> Html {
    let r = &props.restaurant;

    let on_heart_click = {
        let cb = props.on_toggle_favorite.clone();
        let id = r.id;
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            cb.emit(id);
        })
    };

    let heart_classes = classes!("btn-fav", props.is_fav.then_some("fav"));

    html! {
        <div class="restaurant-card">
            <div class="card-media">
                <img src={r.image.clone()} alt={r.name.clone()} class="card-image" />

                <button class={heart_classes} onclick={on_heart_click}>
                    { if props.is_fav { "♥" } else { "♡" } }
                </button>

                if r.featured {
                    <span class="badge-featured">{"Featured"}</span>
                }
            </div>

            <div class="card-body">
                <div class="card-top-row">
                    <div>
                        <h3 class="card-name">{r.name.clone()}</h3>
                        <p class="card-cuisine">{r.cuisine.join(" • ")}</p>
                    </div>

                    <div class="card-meta">
                        <div class="badge-rating">
                            <span class="star">{"★"}</span>
                            {format!(" {}", r.rating)}
                        </div>
                        <div class="card-cost">{r.cost_for_two.clone()}</div>
                    </div>
                </div>

                <div class="card-bottom-row">
                    <div class="card-time">
                        <span class="clock">{"🕐"}</span>
                        {format!(" {}", r.delivery_time)}
                    </div>
                    <div class="card-offer">
                        { r.offers.first().cloned().unwrap_or_default() }
                    </div>
                </div>
            </div>
        </div>
    }
}
