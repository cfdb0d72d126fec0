//! Store locations: loading the book, selection and listing.

pub mod book;
pub mod query;

pub use book::{LocationBook, LocationError};
pub use query::{LocationQuery, Page, paginate};
