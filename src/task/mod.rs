pub mod count;
pub mod display_refresh;
