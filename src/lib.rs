// src/lib.rs

pub mod config;
pub mod controller;
pub mod data;
pub mod fetcher;
pub mod flags;
pub mod formatter;
pub mod model;
pub mod presentation;
