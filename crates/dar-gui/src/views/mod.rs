//! View components
//!
//! Each view renders one section of the single-page form.

mod form;
mod help;
mod outcome;

pub use form::FormView;
pub use help::HelpView;
pub use outcome::OutcomeView;
