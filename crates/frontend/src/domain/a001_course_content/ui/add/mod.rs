//! Add Content form
//!
//! - state.rs: form state and transitions (no signals, unit-tested)
//! - model.rs: API functions
//! - view_model.rs: signals and submit command
//! - view.rs: Leptos component

mod model;
pub mod state;
mod view;
mod view_model;

pub use view::AddContent;
pub use view_model::AddContentViewModel;
