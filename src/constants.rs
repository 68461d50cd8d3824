// DOM hooks `index.html` must provide
pub const CANVAS_SELECTOR: &str = "canvas.webgl";
pub const CONTROLS_PANEL_ID: &str = "controls";
pub const COLOR_INPUT_ID: &str = "material-color";

// Class toggled on the controls panel
pub const HIDDEN_CLASS: &str = "hidden";

// Key that shows/hides the controls panel
pub const TOGGLE_CONTROLS_KEY: &str = "h";
