// Author: Dustin Pilgrim
// License: MIT

pub mod action;
pub mod champion;
pub mod config;
pub mod error;
pub mod estimator;
pub mod events;
pub mod gesture;
pub mod info;
pub mod manager;
pub mod manager_msg;
pub mod session;
pub mod spells;
pub mod timer;
pub mod utils;
