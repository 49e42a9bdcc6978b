//! Application-level configuration constants.

// Element ids
pub const WATER_INPUT_ID: &str = "water-volume";

// Display text
pub const TITLE: &str = "Coffee-to-Water Ratio Calculator";
pub const DESCRIPTION: &str = "Calculate the perfect coffee-to-water ratio for your brew.";
pub const WATER_LABEL: &str = "Water Volume (ml)";
pub const RATIO_LABEL: &str = "Coffee-to-Water Ratio";
pub const GROUNDS_LABEL: &str = "Coffee Grounds Needed";
pub const GROUNDS_UNIT: &str = "grams";

// Button styles
pub const BUTTON_SELECTED_CLASS: &str = "btn btn-default";
pub const BUTTON_UNSELECTED_CLASS: &str = "btn btn-outline";
