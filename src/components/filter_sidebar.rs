use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::models::SortKey;

#[derive(Properties, PartialEq, Clone)]
pub struct FilterSidebarProps {
    pub cuisines: Vec<String>,
    pub cuisine_filter: Option<String>,
    pub on_select_cuisine: Callback<Option<String>>,
    pub sort_key: SortKey,
    pub on_select_sort: Callback<SortKey>,
}

/// Sidebar with the cuisine facet buttons, the sort dropdown and the static
/// quick links. The "All" button is implicit and always first.
#[function_component(FilterSidebar)]
pub fn filter_sidebar(props: &FilterSidebarProps) -> Html {
    let on_all_click = {
        let cb = props.on_select_cuisine.clone();
        Callback::from(move |_| cb.emit(None))
    };

    let on_sort_change = {
        let cb = props.on_select_sort.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
                cb.emit(SortKey::from_value(&select.value()));
            }
        })
    };

    let chip_class = |active: bool| classes!("filter-chip", active.then_some("active"));

    html! {
        <aside class="sidebar">
            <div class="sidebar-panel">
                <h4 class="sidebar-title">{"Filters"}</h4>

                <div class="filter-section">
                    <h5 class="filter-heading">{"Cuisine"}</h5>
                    <div class="filter-chips">
                        <button
                            class={chip_class(props.cuisine_filter.is_none())}
                            onclick={on_all_click}
                        >
                            {"All"}
                        </button>
                        { for props.cuisines.iter().map(|c| {
                            let cb = props.on_select_cuisine.clone();
                            let cuisine = c.clone();
                            let onclick = Callback::from(move |_| {
                                cb.emit(Some(cuisine.clone()));
                            });
                            let active = props.cuisine_filter.as_deref() == Some(c.as_str());
                            html! {
                                <button key={c.clone()} class={chip_class(active)} {onclick}>
                                    {c.clone()}
                                </button>
                            }
                        })}
                    </div>
                </div>

                <div class="filter-section">
                    <h5 class="filter-heading">{"Sort"}</h5>
                    <select class="sort-select" onchange={on_sort_change}>
                        <option value="relevance" selected={props.sort_key == SortKey::Relevance}>
                            {"Relevance"}
                        </option>
                        <option value="rating" selected={props.sort_key == SortKey::Rating}>
                            {"Rating"}
                        </option>
                        <option value="time" selected={props.sort_key == SortKey::Time}>
                            {"Delivery Time"}
                        </option>
                    </select>
                </div>

                <div class="filter-section">
                    <h5 class="filter-heading">{"Quick Links"}</h5>
                    <ul class="quick-links">
                        <li>{"Pure Veg"}</li>
                        <li>{"Under ₹500"}</li>
                        <li>{"Top Rated"}</li>
                    </ul>
                </div>
            </div>
        </aside>
    }
}
