//! # Design Patterns
//!
//! Six classic object-oriented design patterns, each as a standalone module
//! with its traits, a few concrete implementations and a runnable demo.
//!
//! ## Creational
//! - [`abstract_factory`]: families of matching products (`Box<dyn Trait>`)
//! - [`factory_method`]: creation hook on a trait with a provided method
//! - [`singleton`]: init-once global instance (`OnceLock`)
//!
//! ## Structural
//! - [`decorator`]: ownership chain of cost-adding wrappers
//!
//! ## Behavioral
//! - [`observer`]: ordered registry of `Rc` observers
//! - [`strategy`]: swappable payment algorithm behind a trait object
//!
//! Everything except the singleton is single-threaded.
//!
//! Run individual demos with:
//! ```bash
//! cargo run --bin abstract_factory
//! cargo run --bin decorator
//! cargo run --bin patterns -- observer strategy --no-color
//! ```

pub mod abstract_factory;
pub mod config;
pub mod decorator;
pub mod demo;
pub mod error;
pub mod factory_method;
pub mod observer;
pub mod singleton;
pub mod strategy;
pub mod telemetry;

pub use config::DemoConfig;
pub use demo::Pattern;
pub use error::{ConfigError, PatternError, Result};
