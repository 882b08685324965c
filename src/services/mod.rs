// Author: Dustin Pilgrim
// License: MIT

pub mod catalog;
pub mod store;
pub mod ticker;
