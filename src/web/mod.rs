//! HTML page rendering

pub mod pages;
