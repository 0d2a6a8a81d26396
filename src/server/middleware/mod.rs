//! HTTP middleware

pub mod track;

pub use track::PageViewTracking;
