mod duel_log;
mod player;
