//! MedCenter Web
//!
//! Hospital website shell built around its top navigation bar.
//!
//! This library provides:
//! - Navigation model: menu entries, path rules, dropdown hover state,
//!   auth-gated actions and label search (`nav`)
//! - Dioxus components and pages, client router (`app`)
//! - Server-side rendering of every route plus JSON endpoints (`server` feature)

pub mod app;
pub mod auth;
pub mod error;
pub mod nav;

#[cfg(feature = "server")]
pub mod api;
#[cfg(feature = "server")]
pub mod config;
#[cfg(feature = "server")]
pub mod ui;
