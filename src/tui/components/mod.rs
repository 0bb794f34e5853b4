pub mod card_grid;
pub mod detail;
pub mod loading;
pub mod search_bar;

pub use card_grid::{CardGrid, GRID_COLUMNS};
pub use detail::CharacterDetail;
pub use loading::LoadingScreen;
pub use search_bar::SearchBar;
