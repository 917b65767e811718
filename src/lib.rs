//! Snippetbox - share short-lived text snippets.
//!
//! A server-rendered web application: visitors browse and publish snippets,
//! registered users log in with session cookies guarded by CSRF tokens.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
