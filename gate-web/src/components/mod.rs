pub mod barrier_panel;
pub mod lang_switcher;
pub mod pin_generator;
pub mod pin_inputs;
pub mod weather_widget;

pub use barrier_panel::BarrierPanel;
pub use lang_switcher::LangSwitcher;
pub use pin_generator::PinGenerator;
pub use pin_inputs::{FocusRequest, PinInputs};
pub use weather_widget::WeatherWidget;
