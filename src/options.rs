//! Rendering options and configuration.

use crate::locale::Locale;

/// The date system used for serial number conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateSystem {
    /// Windows Excel default (1900-based, includes leap year bug)
    #[default]
    Date1900,
    /// Mac Excel legacy (1904-based)
    Date1904,
}

/// The non-padding marker single-letter date tokens (`m`, `d`, `h`, `s`)
/// are rendered with.
///
/// Named after the strftime flag each platform uses to suppress the leading
/// zero. Both render `5` as `5`; the choice is explicit so output never
/// depends on which host renders it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaddingStyle {
    /// `%-d`, the glibc/BSD marker.
    #[default]
    Hyphen,
    /// `%#d`, the Windows CRT marker.
    Hash,
}

/// Options for rendering values.
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// Padding convention for single-letter date tokens.
    pub padding: PaddingStyle,
    /// The date system used when a date arrives as a serial number.
    pub date_system: DateSystem,
    /// The locale for separators, month names and meridiem strings.
    pub locale: Locale,
}

impl RenderOptions {
    pub fn with_padding(mut self, padding: PaddingStyle) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_date_system(mut self, date_system: DateSystem) -> Self {
        self.date_system = date_system;
        self
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }
}
