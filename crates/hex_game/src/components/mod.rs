//! Components attached to unit, city and tile entities.

pub mod bar;
pub mod city_ui;
pub mod resource_markers;
pub mod unit_ui;

pub use bar::ProgressBar;
pub use city_ui::{CityUiComponent, Label};
pub use resource_markers::{ResourceDot, ResourceMarkerComponent};
pub use unit_ui::UnitUiComponent;
