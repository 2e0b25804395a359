//! Shopcart form UI Module
//!
//! MVVM split:
//! - state.rs / render.rs: plain form state and table rendering
//! - sequencer.rs / controller.rs: request building and response reconciliation
//! - view_model.rs: signals, network dispatch
//! - view.rs: Leptos component (pure UI)

pub mod controller;
pub mod render;
pub mod sequencer;
pub mod state;
mod view;
mod view_model;

pub use view::ShopcartForm;
pub use view_model::ShopcartFormViewModel;
