use crate::utils::{caret_end, sanitize_edit};
use crate::{CalculatorState, Ratio, WaterPreset};
use log::warn;
use std::rc::Rc;
use web_sys::HtmlInputElement;
use yew::prelude::*;

/// State transitions of the calculator.
#[derive(Debug, Clone, PartialEq)]
pub enum CalculatorAction {
    /// Raw text from the water input; sanitized by the reducer.
    WaterText(String),
    WaterPreset(&'static WaterPreset),
    Ratio(Ratio),
}

impl Reducible for CalculatorState {
    type Action = CalculatorAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            CalculatorAction::WaterText(text) => next.set_water_text(&text),
            CalculatorAction::WaterPreset(preset) => next.select_water_preset(preset),
            CalculatorAction::Ratio(ratio) => next.select_ratio(ratio),
        }
        // Hand back the same Rc when nothing changed so Yew skips the re-render
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

/// Holds the calculator state, the derived grounds mass and the callbacks
/// that mutate the inputs.
#[derive(Clone)]
pub struct RatioCalculatorHandle {
    /// Snapshot of the inputs for this render.
    pub state: CalculatorState,
    /// Derived from `state` on every render, never stored.
    pub grounds_mass: f64,
    /// Callback for the water input's `oninput` event.
    pub on_water_input: Callback<InputEvent>,
    pub select_water: Callback<&'static WaterPreset>,
    pub select_ratio: Callback<Ratio>,
}

/// Custom hook owning the calculator inputs for the lifetime of the component.
#[hook]
pub fn use_ratio_calculator() -> RatioCalculatorHandle {
    let state = use_reducer(CalculatorState::default);

    let on_water_input = {
        let dispatcher = state.dispatcher();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let raw = input.value();
            let caret = input.selection_start().ok().flatten();
            let edit = sanitize_edit(&raw, caret.unwrap_or_else(|| caret_end(&raw)));
            // The DOM keeps the rejected characters unless we overwrite them,
            // since the rendered value may not change.
            if edit.needs_write_back {
                input.set_value(&edit.digits);
                if caret.is_some() {
                    if let Err(e) = input.set_selection_range(edit.caret, edit.caret) {
                        warn!("Failed to restore caret: {:?}", e);
                    }
                }
            }
            dispatcher.dispatch(CalculatorAction::WaterText(edit.digits));
        })
    };

    let select_water = {
        let dispatcher = state.dispatcher();
        Callback::from(move |preset: &'static WaterPreset| {
            dispatcher.dispatch(CalculatorAction::WaterPreset(preset));
        })
    };

    let select_ratio = {
        let dispatcher = state.dispatcher();
        Callback::from(move |ratio: Ratio| {
            dispatcher.dispatch(CalculatorAction::Ratio(ratio));
        })
    };

    let snapshot = (*state).clone();
    RatioCalculatorHandle {
        grounds_mass: snapshot.grounds_mass(),
        state: snapshot,
        on_water_input,
        select_water,
        select_ratio,
    }
}

/// Focus the input behind `node_ref` once on mount, with the caret after the
/// existing text.
#[hook]
pub fn use_focus_at_end(node_ref: NodeRef) {
    use_effect_with((), move |_| {
        let Some(input) = node_ref.cast::<HtmlInputElement>() else {
            warn!("Focus target is not mounted as an input element");
            return;
        };
        if let Err(e) = input.focus() {
            warn!("Failed to focus input: {:?}", e);
            return;
        }
        let end = caret_end(&input.value());
        if let Err(e) = input.set_selection_range(end, end) {
            warn!("Failed to move caret to end: {:?}", e);
        }
    });
}
