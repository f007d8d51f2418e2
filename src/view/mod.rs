//----------------------------------------
// view mod
//----------------------------------------
pub mod error;
pub mod state;

pub use state::PowerView;
