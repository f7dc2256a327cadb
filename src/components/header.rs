use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct HeaderProps {
    pub location: String,
    pub on_location_change: Callback<String>,
}

/// Top navigation bar: brand mark, editable location, search bar and the
/// login affordance. Everything except the location input is display-only.
#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let on_input = {
        let cb = props.on_location_change.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                cb.emit(input.value());
            }
        })
    };

    html! {
        <header class="header">
            <div class="header-inner">
                <div class="header-left">
                    <div class="brand">
                        {"Zomato"}<span class="brand-light">{"Clone"}</span>
                    </div>

                    <div class="location-box">
                        <span class="location-pin">{"📍"}</span>
                        <input
                            class="location-input"
                            value={props.location.clone()}
                            oninput={on_input}
                        />
                        { chevron_down_icon() }
                    </div>
                </div>

                // Search bar is presentational only, nothing is wired to it
                <div class="header-search">
                    <div class="search-box">
                        <span class="search-icon">{"🔎"}</span>
                        <input
                            class="search-input"
                            placeholder="Search for restaurants, dishes or cuisine"
                        />
                    </div>
                </div>

                <div class="header-right">
                    <button class="btn-login">{"Login"}</button>
                    <div class="avatar">{"A"}</div>
                </div>
            </div>
        </header>
    }
}

/// Decorative dropdown-arrow glyph next to the location input.
fn chevron_down_icon() -> Html {
    html! {
        <svg
            class="chevron-icon"
            fill="none"
            stroke="currentColor"
            viewBox="0 0 24 24"
            xmlns="http://www.w3.org/2000/svg"
        >
            <path
                stroke-linecap="round"
                stroke-linejoin="round"
                stroke-width="2"
                d="M19 9l-7 7-7-7"
            ></path>
        </svg>
    }
}
