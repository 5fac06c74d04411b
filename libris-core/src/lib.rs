//! Libris core library exports

pub mod library;
