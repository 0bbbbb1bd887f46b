mod game_settings;
mod piles;
mod search_value;
mod turn;

pub use game_settings::*;
pub use piles::*;
pub use search_value::*;
pub use turn::*;
