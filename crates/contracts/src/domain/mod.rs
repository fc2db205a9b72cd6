pub mod a001_game;
