mod get_game_state;
mod play_ai_move;
mod play_human_move;
mod set_options;

pub use get_game_state::*;
pub use play_ai_move::*;
pub use play_human_move::*;
pub use set_options::*;
