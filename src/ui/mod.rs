//! View pieces and the view-state controller

pub mod results;
pub mod search_bar;
pub mod state;
pub mod theme;
