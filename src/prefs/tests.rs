use super::*;

#[test]
fn test_defaults() {
    let prefs = PreferenceState::default();
    assert_eq!(prefs.font, FontFamily::Inter);
    assert_eq!(prefs.text_size, TextSize::Medium);
    assert_eq!(prefs.time_format, TimeFormat::H12);
    assert_eq!(prefs.date_format, DateFormat::Full);
    assert!(!prefs.settings_panel_visible);
}

#[test]
fn test_tables_are_indexed_by_variant() {
    for (i, info) in FONTS.iter().enumerate() {
        assert_eq!(info.font as usize, i);
        assert_eq!(info.font.name(), info.name);
    }
    for (i, info) in TEXT_SIZES.iter().enumerate() {
        assert_eq!(info.size as usize, i);
    }
    for (i, info) in TIME_FORMATS.iter().enumerate() {
        assert_eq!(info.format as usize, i);
    }
    for (i, info) in DATE_FORMATS.iter().enumerate() {
        assert_eq!(info.format as usize, i);
    }
}

#[test]
fn test_text_size_scales() {
    let scales: Vec<_> = TEXT_SIZES
        .iter()
        .map(|s| (s.time_class, s.date_class))
        .collect();
    assert_eq!(
        scales,
        vec![
            ("text-4xl", "text-sm"),
            ("text-6xl", "text-base"),
            ("text-8xl", "text-lg"),
        ]
    );
}

#[test]
fn test_each_setter_replaces_one_field() {
    for info in &FONTS {
        let mut prefs = PreferenceState::default();
        prefs.set_font(info.font);
        assert_eq!(
            prefs,
            PreferenceState {
                font: info.font,
                ..Default::default()
            }
        );
    }
    for info in &TEXT_SIZES {
        let mut prefs = PreferenceState::default();
        prefs.set_text_size(info.size);
        assert_eq!(
            prefs,
            PreferenceState {
                text_size: info.size,
                ..Default::default()
            }
        );
    }
    for info in &TIME_FORMATS {
        let mut prefs = PreferenceState::default();
        prefs.set_time_format(info.format);
        assert_eq!(
            prefs,
            PreferenceState {
                time_format: info.format,
                ..Default::default()
            }
        );
    }
    for info in &DATE_FORMATS {
        let mut prefs = PreferenceState::default();
        prefs.set_date_format(info.format);
        assert_eq!(
            prefs,
            PreferenceState {
                date_format: info.format,
                ..Default::default()
            }
        );
    }
}

#[test]
fn test_toggle_settings_panel() {
    let mut prefs = PreferenceState::default();
    prefs.toggle_settings_panel();
    assert!(prefs.settings_panel_visible);
    prefs.toggle_settings_panel();
    assert!(!prefs.settings_panel_visible);
    assert_eq!(prefs, PreferenceState::default());
}

#[test]
fn test_display_names() {
    assert_eq!(FontFamily::PlayfairDisplay.to_string(), "Playfair Display");
    assert_eq!(FontFamily::CourierNew.to_string(), "Courier New");
    assert_eq!(TextSize::Large.to_string(), "large");
    assert_eq!(TimeFormat::H24.to_string(), "24h");
    assert_eq!(DateFormat::Numeric.to_string(), "numeric");
}
