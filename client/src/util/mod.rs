//! Pure helpers: search filtering, form parsing, and display formatting.
//!
//! Everything in here is side-effect free and unit tested; page and component
//! code stays thin by delegating the decision logic to these functions.

pub mod filter;
pub mod form;
pub mod money;
