//! Progress indicators for the console front end
//!
//! The console presenter starts a [`FetchSpinner`] while a question is in
//! flight and clears it once the question, an abort, or an error arrives.

pub mod reporter;

pub use reporter::FetchSpinner;
