pub mod app;
pub mod filter_sidebar;
pub mod header;
pub mod restaurant_card;
pub mod restaurant_grid;

pub use app::App;
pub use filter_sidebar::FilterSidebar;
pub use header::Header;
pub use restaurant_card::RestaurantCard;
pub use restaurant_grid::RestaurantGrid;
