//! The components module contains the building blocks of the customizer screen: the live
//! preview, the option groups of the settings panel and the small pieces they are made of.

pub mod icons;

mod option;
pub use option::{Accent, OptionButton, OptionCard};

mod pickers;
pub use pickers::{DateFormatPicker, FontPicker, SizePicker, TimeFormatPicker};

mod preview;
pub use preview::{format_date, format_time, QuickInfo, WidgetPreview};

mod settings;
pub use settings::{panel_visibility_class, SettingsPanel};
