pub mod args;
pub mod controller;
pub mod menu;
