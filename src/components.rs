//! Yew components for the calculator UI.
//!
//! The preset and readout components are pure views of their props.
//! Selection highlighting is computed from props on every render, never
//! stored as separate flags. `RatioCalculator` owns the state.

use crate::config::{
    BUTTON_SELECTED_CLASS, BUTTON_UNSELECTED_CLASS, DESCRIPTION, GROUNDS_LABEL, RATIO_LABEL,
    TITLE, WATER_INPUT_ID, WATER_LABEL,
};
use crate::hooks::{use_focus_at_end, use_ratio_calculator};
use crate::{format_grams, Ratio, WaterAmount, WaterPreset, RATIO_PRESETS, WATER_PRESETS};
use yew::prelude::*;

/// Button class for a preset, depending on whether it matches current state.
pub fn preset_class(selected: bool) -> &'static str {
    if selected {
        BUTTON_SELECTED_CLASS
    } else {
        BUTTON_UNSELECTED_CLASS
    }
}

/// Water label with the serving-size shortcuts.
#[derive(Properties, PartialEq)]
pub struct WaterPresetsProps {
    pub water: WaterAmount,
    pub onselect: Callback<&'static WaterPreset>,
}

#[function_component(WaterPresets)]
pub fn water_presets(props: &WaterPresetsProps) -> Html {
    html! {
        <div class="water-header">
            <label for={WATER_INPUT_ID}>{ WATER_LABEL }</label>
            <div class="preset-row">
                { WATER_PRESETS.iter().map(|preset| {
                    let onclick = props.onselect.reform(move |_: MouseEvent| preset);
                    html! {
                        <button key={preset.label}
                            class={classes!(preset_class(props.water.selects(preset)), "btn-sm")}
                            {onclick}
                        >
                            { preset.label }
                        </button>
                    }
                }).collect::<Html>() }
            </div>
        </div>
    }
}

/// The four `1:N` ratio buttons.
#[derive(Properties, PartialEq)]
pub struct RatioPresetsProps {
    pub ratio: Ratio,
    pub onselect: Callback<Ratio>,
}

#[function_component(RatioPresets)]
pub fn ratio_presets(props: &RatioPresetsProps) -> Html {
    html! {
        <div class="form-group">
            <label>{ RATIO_LABEL }</label>
            <div class="preset-row ratio-row">
                { RATIO_PRESETS.iter().map(|&ratio| {
                    let onclick = props.onselect.reform(move |_: MouseEvent| ratio);
                    html! {
                        <button key={ratio.parts()}
                            class={classes!(preset_class(props.ratio == ratio), "btn-lg", "flex-1")}
                            {onclick}
                        >
                            { ratio.to_string() }
                        </button>
                    }
                }).collect::<Html>() }
            </div>
        </div>
    }
}

/// Read-only line showing the grounds mass.
#[derive(Properties, PartialEq)]
pub struct GroundsDisplayProps {
    pub grounds_mass: f64,
}

#[function_component(GroundsDisplay)]
pub fn grounds_display(props: &GroundsDisplayProps) -> Html {
    html! {
        <div class="form-group">
            <label>{ GROUNDS_LABEL }</label>
            <p class="grounds-mass">{ format_grams(props.grounds_mass) }</p>
        </div>
    }
}

/// Calculator card: water input with presets, ratio presets and the
/// live grounds mass.
#[function_component(RatioCalculator)]
pub fn ratio_calculator() -> Html {
    let calculator = use_ratio_calculator();
    let water_ref = use_node_ref();
    use_focus_at_end(water_ref.clone());

    html! {
        <div class="card">
            <div class="card-header">
                <h1 class="card-title">{ TITLE }</h1>
                <p class="card-description">{ DESCRIPTION }</p>
            </div>
            <div class="card-content">
                <div class="form-group">
                    <WaterPresets
                        water={calculator.state.water().clone()}
                        onselect={calculator.select_water.clone()}
                    />
                    <input
                        ref={water_ref}
                        id={WATER_INPUT_ID}
                        type="text"
                        inputmode="numeric"
                        autocomplete="off"
                        value={calculator.state.water().to_string()}
                        oninput={calculator.on_water_input.clone()}
                    />
                </div>
                <RatioPresets
                    ratio={calculator.state.ratio()}
                    onselect={calculator.select_ratio.clone()}
                />
                <GroundsDisplay grounds_mass={calculator.grounds_mass} />
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selected_and_unselected_classes_differ() {
        assert_eq!(preset_class(true), "btn btn-default");
        assert_eq!(preset_class(false), "btn btn-outline");
    }

    #[test]
    fn at_most_one_water_preset_highlighted() {
        for text in ["250", "500", "750", "251", "", "0"] {
            let water = WaterAmount::from_input(text);
            let highlighted = WATER_PRESETS
                .iter()
                .filter(|p| preset_class(water.selects(p)) == BUTTON_SELECTED_CLASS)
                .count();
            assert!(highlighted <= 1, "{text}: {highlighted} highlighted");
        }
    }

    #[test]
    fn exactly_one_ratio_preset_highlighted() {
        for current in RATIO_PRESETS {
            let highlighted = RATIO_PRESETS
                .iter()
                .filter(|&&r| preset_class(r == current) == BUTTON_SELECTED_CLASS)
                .count();
            assert_eq!(highlighted, 1);
        }
    }
}
