//! Rail atlas.
//!
//! Builds Overpass queries for railway stations, railway lines and cities
//! of a country, and composes interactive maps of precomputed train routes
//! with their surroundings: nearby cities, heritage sites, nature
//! reserves, the rail network and its stations.

pub mod config;
pub mod frame;
pub mod layers;
pub mod map;
pub mod query;
pub mod web;
