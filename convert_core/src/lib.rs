//! # convert_core - Unit and Currency Conversion Engine
//!
//! `convert_core` is the computational heart of ConvertLab: a static registry
//! of unit categories, a conversion engine, a display formatter, and the
//! binding controller that keeps a two-field converter consistent. It has no
//! UI of its own; front ends drive it with events and render its state.
//!
//! ## Design Philosophy
//!
//! - **Static data**: the registry is built once and never mutated
//! - **Pure transitions**: every user input is one call to [`apply_event`]
//! - **Never panics on input**: bad text blanks a field, unknown ids fall back
//! - **JSON-friendly**: registry, session state and events serialize with serde
//!
//! ## Quick Start
//!
//! ```rust
//! use convert_core::{apply_event, convert, format_number, lookup_category, Event, SessionState};
//!
//! let length = lookup_category("length").unwrap();
//! assert_eq!(format_number(convert(1.0, "mi", "km", length)), "1.6093");
//!
//! let state = apply_event(SessionState::new(), Event::SelectCategory("temperature".into()));
//! let state = apply_event(state, Event::EditSource("0".into()));
//! assert_eq!(state.to_text, "32");
//! ```
//!
//! ## Modules
//!
//! - [`units`] - Units, categories and the registry
//! - [`convert`] - Conversion through the base unit
//! - [`format`] - Display formatting and lenient number parsing
//! - [`session`] - Binding controller (session state and events)
//! - [`settings`] - Start-up settings for front ends
//! - [`errors`] - Structured error types

pub mod convert;
pub mod errors;
pub mod format;
pub mod session;
pub mod settings;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use convert::convert;
pub use errors::{ConvertError, ConvertResult};
pub use format::{format_number, parse_number};
pub use session::{apply_event, Event, SessionState};
pub use settings::Settings;
pub use units::{find_category, list_categories, lookup_category, Category, Formula, Unit};
