//! Request handlers

pub mod catalog;
pub mod health;
pub mod pages;
pub mod profile;
pub mod quote;
