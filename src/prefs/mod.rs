//! User-chosen display options for the widget and the static tables describing every choice.
//!
//! Every field of [`PreferenceState`] is a closed enumeration, so there is nothing to validate:
//! the settings panel only ever offers the variants listed in the tables below.

use std::fmt;

#[cfg(test)]
mod tests;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FontFamily {
    #[default]
    Inter,
    Roboto,
    Montserrat,
    PlayfairDisplay,
    CourierNew,
    Georgia,
    Arial,
    Verdana,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TextSize {
    Small,
    #[default]
    Medium,
    Large,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TimeFormat {
    #[default]
    H12,
    H24,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DateFormat {
    Short,
    #[default]
    Full,
    Numeric,
}

pub struct FontInfo {
    pub font: FontFamily,
    /// CSS family name, also shown on the button.
    pub name: &'static str,
}

pub struct TextSizeInfo {
    pub size: TextSize,
    pub label: &'static str,
    /// Tailwind class applied to the time line.
    pub time_class: &'static str,
    /// Tailwind class applied to the date line.
    pub date_class: &'static str,
}

pub struct TimeFormatInfo {
    pub format: TimeFormat,
    pub label: &'static str,
    pub tag: &'static str,
    pub pattern: &'static str,
}

pub struct DateFormatInfo {
    pub format: DateFormat,
    /// Button text, including an example of the output.
    pub label: &'static str,
    pub pattern: &'static str,
}

pub static FONTS: [FontInfo; 8] = [
    FontInfo {
        font: FontFamily::Inter,
        name: "Inter",
    },
    FontInfo {
        font: FontFamily::Roboto,
        name: "Roboto",
    },
    FontInfo {
        font: FontFamily::Montserrat,
        name: "Montserrat",
    },
    FontInfo {
        font: FontFamily::PlayfairDisplay,
        name: "Playfair Display",
    },
    FontInfo {
        font: FontFamily::CourierNew,
        name: "Courier New",
    },
    FontInfo {
        font: FontFamily::Georgia,
        name: "Georgia",
    },
    FontInfo {
        font: FontFamily::Arial,
        name: "Arial",
    },
    FontInfo {
        font: FontFamily::Verdana,
        name: "Verdana",
    },
];

pub static TEXT_SIZES: [TextSizeInfo; 3] = [
    TextSizeInfo {
        size: TextSize::Small,
        label: "small",
        time_class: "text-4xl",
        date_class: "text-sm",
    },
    TextSizeInfo {
        size: TextSize::Medium,
        label: "medium",
        time_class: "text-6xl",
        date_class: "text-base",
    },
    TextSizeInfo {
        size: TextSize::Large,
        label: "large",
        time_class: "text-8xl",
        date_class: "text-lg",
    },
];

// `%-I` and `%-m`/`%-d` drop the leading zero, matching en-US output.
pub static TIME_FORMATS: [TimeFormatInfo; 2] = [
    TimeFormatInfo {
        format: TimeFormat::H12,
        label: "12 Hour",
        tag: "12h",
        pattern: "%-I:%M %p",
    },
    TimeFormatInfo {
        format: TimeFormat::H24,
        label: "24 Hour",
        tag: "24h",
        pattern: "%H:%M",
    },
];

pub static DATE_FORMATS: [DateFormatInfo; 3] = [
    DateFormatInfo {
        format: DateFormat::Short,
        label: "Short (Dec 25)",
        pattern: "%b %-d",
    },
    DateFormatInfo {
        format: DateFormat::Full,
        label: "Full (Monday, December 25)",
        pattern: "%A, %B %-d",
    },
    DateFormatInfo {
        format: DateFormat::Numeric,
        label: "Numeric (12/25/2024)",
        pattern: "%-m/%-d/%Y",
    },
];

impl FontFamily {
    pub fn info(self) -> &'static FontInfo {
        &FONTS[self as usize]
    }

    pub fn name(self) -> &'static str {
        self.info().name
    }
}

impl TextSize {
    pub fn info(self) -> &'static TextSizeInfo {
        &TEXT_SIZES[self as usize]
    }
}

impl TimeFormat {
    pub fn info(self) -> &'static TimeFormatInfo {
        &TIME_FORMATS[self as usize]
    }
}

impl DateFormat {
    pub fn info(self) -> &'static DateFormatInfo {
        &DATE_FORMATS[self as usize]
    }
}

impl fmt::Display for FontFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for TextSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.info().label)
    }
}

impl fmt::Display for TimeFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.info().tag)
    }
}

impl fmt::Display for DateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DateFormat::Short => "short",
            DateFormat::Full => "full",
            DateFormat::Numeric => "numeric",
        };
        f.write_str(name)
    }
}

/// The widget's display options. Lives only as long as the page does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PreferenceState {
    pub font: FontFamily,
    pub text_size: TextSize,
    pub time_format: TimeFormat,
    pub date_format: DateFormat,
    pub settings_panel_visible: bool,
}

impl PreferenceState {
    pub fn set_font(&mut self, font: FontFamily) {
        tracing::debug!(%font, "font selected");
        self.font = font;
    }

    pub fn set_text_size(&mut self, size: TextSize) {
        tracing::debug!(%size, "text size selected");
        self.text_size = size;
    }

    pub fn set_time_format(&mut self, format: TimeFormat) {
        tracing::debug!(%format, "time format selected");
        self.time_format = format;
    }

    pub fn set_date_format(&mut self, format: DateFormat) {
        tracing::debug!(%format, "date format selected");
        self.date_format = format;
    }

    pub fn toggle_settings_panel(&mut self) {
        self.settings_panel_visible = !self.settings_panel_visible;
        tracing::debug!(visible = self.settings_panel_visible, "settings panel toggled");
    }
}
