//! Reusable observers for Kutta integrators.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work with the integrators in `kutta-solvers`.
//!
//! # Modules
//!
//! - [`traits`] — Capability traits for generic observers
//!   ([`HasState`], [`CanStopEarly`])
//!
//! # Features
//!
//! - `plot` — Enables [`PlotObserver`] for comparing numerical and analytical
//!   solutions in an egui window. This feature adds dependencies on `eframe`
//!   and `egui_plot`.
//!
//! [`Observer`]: kutta_core::Observer
//! [`HasState`]: traits::HasState
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;

#[cfg(feature = "plot")]
mod plot;

#[cfg(feature = "plot")]
pub use plot::{Color32, LineStyle, PlotObserver, Plottable, ShowConfig, TraceStyle};
