// src/server/handlers/mod.rs
//! HTTP request handlers for the larder server

pub mod recipes;
