// GUI components module
pub mod mode_selector;
pub mod number_input;
pub mod result_pane;

pub use mode_selector::ModeSelector;
pub use number_input::NumberInput;
pub use result_pane::ResultPane;
