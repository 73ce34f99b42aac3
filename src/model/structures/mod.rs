pub mod match_result;
pub mod outcome;
pub mod player_state;
