//! Bike-share dock availability map server.
//!
//! A web application that fetches the two GBFS station feeds, classifies
//! every dock into a health category, and serves classified map markers
//! with a live legend.

pub mod cache;
pub mod gbfs;
pub mod stations;
pub mod web;
