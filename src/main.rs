//! Main module for the Coffee Ratio calculator using Yew.

use coffee_ratio::components::RatioCalculator;
use yew::prelude::*;

/// App wrapper centring the calculator on the page.
#[function_component]
pub fn App() -> Html {
    html! {
        <div class="container">
            <RatioCalculator />
        </div>
    }
}

/// Entry point: installs the panic hook and renders the App component.
fn main() {
    console_error_panic_hook::set_once();
    yew::Renderer::<App>::new().render();
}
