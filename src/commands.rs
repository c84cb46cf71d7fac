pub mod best_move;
pub mod play;
pub mod self_play;
pub mod solve;
