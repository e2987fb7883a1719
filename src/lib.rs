pub mod client;
pub mod commands;
pub mod data_provider;
pub mod date;
pub mod fixtures;
pub mod scoreboard;
pub mod table;
