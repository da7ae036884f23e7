//! # Conversion Session
//!
//! The binding controller that keeps two text fields and two unit selectors
//! consistent. All state changes go through one transition function,
//! [`apply_event`], which runs to completion for each user event.
//!
//! ## Events
//!
//! | Event            | Effect                                                    |
//! |------------------|-----------------------------------------------------------|
//! | `EditSource`     | store text as typed, recompute target (or blank it)       |
//! | `EditTarget`     | store text as typed, recompute source (or blank it)       |
//! | `SelectFromUnit` | change "from" unit, recompute target                      |
//! | `SelectToUnit`   | change "to" unit, recompute target                        |
//! | `SelectCategory` | reset units to category defaults, recompute target        |
//! | `Swap`           | exchange the two unit ids, recompute target               |
//!
//! Each edit recomputes only the *other* field from the edited one. Typing
//! into the target field makes it the input for that one computation; the
//! source field stays the one that unit and category changes read from.
//!
//! Text that does not parse never panics and is never rewritten: the edited
//! field keeps exactly what was typed (a lone `-`, a trailing `.`) and the
//! dependent field is cleared.
//!
//! ## Example
//!
//! ```rust
//! use convert_core::session::{apply_event, Event, SessionState};
//!
//! let state = SessionState::new();
//! let state = apply_event(state, Event::SelectCategory("length".into()));
//! let state = apply_event(state, Event::EditSource("1000".into()));
//! assert_eq!((state.from_unit.as_str(), state.to_unit.as_str()), ("m", "km"));
//! assert_eq!(state.to_text, "1");
//!
//! let state = apply_event(state, Event::Swap);
//! assert_eq!(state.to_text, "1000000");
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::convert::convert;
use crate::format::{format_number, parse_number};
use crate::units::{default_category, lookup_category, Category, Unit};

/// Source text a fresh session starts with
pub const INITIAL_SOURCE_TEXT: &str = "1";

/// A discrete user input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", content = "value", rename_all = "snake_case")]
pub enum Event {
    /// New text in the source field
    EditSource(String),
    /// New text in the target (result) field
    EditTarget(String),
    /// New "from" unit id
    SelectFromUnit(String),
    /// New "to" unit id
    SelectToUnit(String),
    /// New category id
    SelectCategory(String),
    /// Exchange the "from" and "to" units
    Swap,
}

/// Everything a front end needs to render the converter.
///
/// Owned by the front end and only changed through [`apply_event`] or
/// [`SessionState::apply`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    pub category_id: String,
    pub from_unit: String,
    pub to_unit: String,
    /// Source field text, exactly as typed
    pub from_text: String,
    /// Target field text, either typed or formatted
    pub to_text: String,
}

impl SessionState {
    /// First category, its default unit pair, and "1" in the source field.
    pub fn new() -> Self {
        Self::start(default_category().id, INITIAL_SOURCE_TEXT)
    }

    /// Start in `category_id` (first category if unknown) with `source_text`
    /// already entered.
    pub fn start(category_id: &str, source_text: &str) -> Self {
        let category = resolve_category(category_id);
        let mut state = SessionState {
            category_id: category.id.to_string(),
            from_unit: default_id(category.default_from()),
            to_unit: default_id(category.default_to()),
            from_text: source_text.to_string(),
            to_text: String::new(),
        };
        state.recompute_target();
        state
    }

    /// Apply one event in place.
    pub fn apply(&mut self, event: Event) {
        debug!(?event, category = %self.category_id, "applying event");

        match event {
            Event::EditSource(text) => {
                self.from_text = text;
                self.recompute_target();
            }
            Event::EditTarget(text) => {
                self.to_text = text;
                self.recompute_source();
            }
            Event::SelectFromUnit(unit_id) => {
                let category = self.settle_category();
                self.from_unit = resolve_unit(category, &unit_id, category.default_from()).to_string();
                self.recompute_target();
            }
            Event::SelectToUnit(unit_id) => {
                let category = self.settle_category();
                self.to_unit = resolve_unit(category, &unit_id, category.default_to()).to_string();
                self.recompute_target();
            }
            Event::SelectCategory(category_id) => {
                let category = resolve_category(&category_id);
                self.category_id = category.id.to_string();
                self.from_unit = default_id(category.default_from());
                self.to_unit = default_id(category.default_to());
                self.recompute_target();
            }
            Event::Swap => {
                std::mem::swap(&mut self.from_unit, &mut self.to_unit);
                self.recompute_target();
            }
        }

        debug!(
            from = %self.from_unit,
            to = %self.to_unit,
            from_text = %self.from_text,
            to_text = %self.to_text,
            "event applied"
        );
    }

    /// The selected category, or the first one if the id is unknown
    pub fn category(&self) -> &'static Category {
        lookup_category(&self.category_id).unwrap_or_else(default_category)
    }

    /// The selected "from" unit, or the category default if the id is unknown
    pub fn from_unit(&self) -> Option<&'static Unit> {
        let category = self.category();
        category
            .lookup_unit(&self.from_unit)
            .or_else(|| category.default_from())
    }

    /// The selected "to" unit, or the category default if the id is unknown
    pub fn to_unit(&self) -> Option<&'static Unit> {
        let category = self.category();
        category
            .lookup_unit(&self.to_unit)
            .or_else(|| category.default_to())
    }

    /// Resolve the category id and reset unit ids that do not belong to it.
    ///
    /// A deserialized state may carry ids from another category; a unit
    /// selection must never leave the state pointing at two categories.
    fn settle_category(&mut self) -> &'static Category {
        let category = resolve_category(&self.category_id);
        self.category_id = category.id.to_string();
        if !category.contains(&self.from_unit) {
            self.from_unit = default_id(category.default_from());
        }
        if !category.contains(&self.to_unit) {
            self.to_unit = default_id(category.default_to());
        }
        category
    }

    fn recompute_target(&mut self) {
        self.to_text = match parse_number(&self.from_text) {
            Ok(value) => format_number(convert(value, &self.from_unit, &self.to_unit, self.category())),
            Err(_) => String::new(),
        };
    }

    fn recompute_source(&mut self) {
        self.from_text = match parse_number(&self.to_text) {
            Ok(value) => format_number(convert(value, &self.to_unit, &self.from_unit, self.category())),
            Err(_) => String::new(),
        };
    }
}

impl Default for SessionState {
    fn default() -> Self {
        SessionState::new()
    }
}

/// Apply `event` to `state` and return the new state.
pub fn apply_event(mut state: SessionState, event: Event) -> SessionState {
    state.apply(event);
    state
}

fn resolve_category(category_id: &str) -> &'static Category {
    lookup_category(category_id).unwrap_or_else(|| {
        let fallback = default_category();
        warn!(category_id, fallback = fallback.id, "unknown category, using default");
        fallback
    })
}

fn resolve_unit(category: &Category, unit_id: &str, fallback: Option<&Unit>) -> &'static str {
    match category.lookup_unit(unit_id) {
        Some(unit) => unit.id,
        None => {
            let fallback = fallback.map_or("", |unit| unit.id);
            warn!(category = category.id, unit_id, fallback, "unknown unit, using default");
            fallback
        }
    }
}

/// Id of a default unit; empty for a category without units
fn default_id(unit: Option<&Unit>) -> String {
    unit.map_or("", |unit| unit.id).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(state: SessionState, events: impl IntoIterator<Item = Event>) -> SessionState {
        events.into_iter().fold(state, apply_event)
    }

    fn in_category(category_id: &str, source_text: &str) -> SessionState {
        SessionState::start(category_id, source_text)
    }

    #[test]
    fn test_initial_state() {
        let state = SessionState::new();
        assert_eq!(state.category_id, "currency");
        assert_eq!(state.from_unit, "usd");
        assert_eq!(state.to_unit, "vnd");
        assert_eq!(state.from_text, "1");
        assert_eq!(state.to_text, "25300");
        assert_eq!(state, SessionState::default());
    }

    #[test]
    fn test_metres_to_kilometres() {
        let state = run(
            SessionState::new(),
            [
                Event::SelectCategory("length".into()),
                Event::EditSource("1000".into()),
            ],
        );
        assert_eq!(state.from_unit, "m");
        assert_eq!(state.to_unit, "km");
        assert_eq!(state.to_text, "1");
    }

    #[test]
    fn test_celsius_to_fahrenheit() {
        let state = run(
            in_category("temperature", "1"),
            [Event::EditSource("0".into())],
        );
        assert_eq!((state.from_unit.as_str(), state.to_unit.as_str()), ("c", "f"));
        assert_eq!(state.to_text, "32");
    }

    #[test]
    fn test_usd_to_vnd() {
        let state = run(
            SessionState::new(),
            [
                Event::SelectFromUnit("usd".into()),
                Event::SelectToUnit("vnd".into()),
                Event::EditSource("1".into()),
            ],
        );
        assert_eq!(state.to_text, "25300");
    }

    #[test]
    fn test_category_switch_keeps_source_text() {
        let state = run(in_category("length", "5"), [Event::SelectToUnit("ft".into())]);
        assert_eq!(state.to_text, "16.4042");

        let state = apply_event(state, Event::SelectCategory("mass".into()));
        assert_eq!(state.category_id, "mass");
        assert_eq!(state.from_unit, "kg");
        assert_eq!(state.to_unit, "g");
        assert_eq!(state.from_text, "5");
        assert_eq!(state.to_text, "5000");
    }

    #[test]
    fn test_partial_input_blanks_target_only() {
        let state = run(in_category("length", "12"), [Event::EditSource("-".into())]);
        assert_eq!(state.from_text, "-");
        assert_eq!(state.to_text, "");

        let state = apply_event(state, Event::EditSource("-3".into()));
        assert_eq!(state.from_text, "-3");
        assert_eq!(state.to_text, "-0.003");
    }

    #[test]
    fn test_swap_exchanges_units() {
        let state = run(in_category("length", "1000"), [Event::Swap]);
        assert_eq!(state.from_unit, "km");
        assert_eq!(state.to_unit, "m");
        assert_eq!(state.from_text, "1000");
        assert_eq!(state.to_text, "1000000");

        let state = apply_event(state, Event::Swap);
        assert_eq!((state.from_unit.as_str(), state.to_unit.as_str()), ("m", "km"));
        assert_eq!(state.to_text, "1");
    }

    #[test]
    fn test_edit_target_recomputes_source() {
        let state = run(in_category("length", "1"), [Event::EditTarget("2.5".into())]);
        assert_eq!(state.to_text, "2.5");
        assert_eq!(state.from_text, "2500");

        let state = apply_event(state, Event::EditTarget("abc".into()));
        assert_eq!(state.to_text, "abc");
        assert_eq!(state.from_text, "");
    }

    #[test]
    fn test_last_edited_field_wins() {
        // Typed target text is kept verbatim, not replaced by a recomputation
        let state = run(in_category("temperature", "1"), [Event::EditTarget("212.000".into())]);
        assert_eq!(state.to_text, "212.000");
        assert_eq!(state.from_text, "100");

        // A unit change reads from the source field again
        let state = apply_event(state, Event::SelectToUnit("k".into()));
        assert_eq!(state.to_text, "373.15");
    }

    #[test]
    fn test_unit_change_recomputes_from_source() {
        let state = run(in_category("time", "2"), [Event::SelectFromUnit("h".into())]);
        assert_eq!(state.to_text, "120");

        let state = apply_event(state, Event::SelectToUnit("s".into()));
        assert_eq!(state.to_text, "7200");
    }

    #[test]
    fn test_category_switch_with_invalid_source() {
        let state = run(in_category("length", "."), [Event::SelectCategory("energy".into())]);
        assert_eq!(state.from_text, ".");
        assert_eq!(state.to_text, "");
        assert_eq!((state.from_unit.as_str(), state.to_unit.as_str()), ("j", "kj"));
    }

    #[test]
    fn test_unknown_category_falls_back() {
        let state = run(in_category("length", "3"), [Event::SelectCategory("pressure".into())]);
        assert_eq!(state.category_id, "currency");
        assert_eq!(state.from_unit, "usd");
        assert_eq!(state.to_unit, "vnd");
        assert_eq!(state.to_text, "75900");

        assert_eq!(SessionState::start("nope", "1").category_id, "currency");
    }

    #[test]
    fn test_unknown_unit_falls_back() {
        let state = run(
            in_category("length", "1000"),
            [
                Event::SelectFromUnit("ft".into()),
                Event::SelectToUnit("parsec".into()),
            ],
        );
        assert_eq!(state.from_unit, "ft");
        assert_eq!(state.to_unit, "km");
        assert_eq!(state.to_text, "0.3048");

        let state = apply_event(state, Event::SelectFromUnit("".into()));
        assert_eq!(state.from_unit, "m");
        assert_eq!(state.to_text, "1");
    }

    #[test]
    fn test_resolved_units() {
        let mut state = in_category("volume", "1");
        assert_eq!(state.category().name, "Volume");
        assert_eq!(state.from_unit().unwrap().id, "l");
        assert_eq!(state.to_unit().unwrap().id, "ml");

        state.to_unit = "bogus".to_string();
        assert_eq!(state.to_unit().unwrap().id, "ml");
    }

    #[test]
    fn test_unit_selection_repairs_stale_category() {
        let mut state = in_category("length", "1");
        state.category_id = "bogus".to_string();

        state.apply(Event::SelectToUnit("eur".into()));
        assert_eq!(state.category_id, "currency");
        assert_eq!(state.from_unit, "usd");
        assert_eq!(state.to_unit, "eur");
        assert_eq!(state.to_text, "0.92");

        let mut state = in_category("length", "2");
        state.category_id = "bogus".to_string();
        state.apply(Event::SelectFromUnit("gbp".into()));
        assert_eq!(state.category_id, "currency");
        assert_eq!(state.from_unit, "gbp");
        assert_eq!(state.to_unit, "vnd");
        assert_eq!(state.category().id, "currency");
    }

    #[test]
    fn test_stale_unit_ids_blank_target() {
        let mut state = in_category("mass", "1");
        state.from_unit = "m".to_string();
        state.apply(Event::EditSource("2".into()));
        assert_eq!(state.from_text, "2");
        assert_eq!(state.to_text, "");
    }

    #[test]
    fn test_event_serialization() {
        let json = serde_json::to_string(&Event::EditSource("12".into())).unwrap();
        assert_eq!(json, r#"{"event":"edit_source","value":"12"}"#);

        let swap: Event = serde_json::from_str(r#"{"event":"swap"}"#).unwrap();
        assert_eq!(swap, Event::Swap);
    }

    #[test]
    fn test_state_roundtrip() {
        let state = in_category("speed", "100");
        let json = serde_json::to_string(&state).unwrap();
        let roundtrip: SessionState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, roundtrip);
    }
}
