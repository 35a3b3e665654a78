//! Shared Dioxus components and D3.js bridge for the F1 season dashboard.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for D3.js chart functions via `js_sys::eval()`
//! - `charts`: the D3.js chart surface the `Dashboard` draws into
//! - `fetch`: browser `fetch` as a corpus data source
//! - `profiles`: static per-driver presentation metadata
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: Reusable RSX components (selectors, hero, containers, etc.)

pub mod charts;
pub mod components;
pub mod fetch;
pub mod js_bridge;
pub mod profiles;
pub mod state;
