//! Built-in locale data.

/// Locale settings for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct Locale {
    pub decimal_separator: char,
    pub thousands_separator: char,
    pub am_string: &'static str,
    pub pm_string: &'static str,
    pub month_names_short: [&'static str; 12],
    pub month_names_full: [&'static str; 12],
    pub day_names_short: [&'static str; 7],
    pub day_names_full: [&'static str; 7],
}

impl Default for Locale {
    fn default() -> Self {
        Self::en_us()
    }
}

impl Locale {
    /// US English locale.
    pub fn en_us() -> Self {
        Locale {
            decimal_separator: '.',
            thousands_separator: ',',
            am_string: "AM",
            pm_string: "PM",
            month_names_short: [
                "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
            ],
            month_names_full: [
                "January",
                "February",
                "March",
                "April",
                "May",
                "June",
                "July",
                "August",
                "September",
                "October",
                "November",
                "December",
            ],
            day_names_short: ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"],
            day_names_full: [
                "Sunday",
                "Monday",
                "Tuesday",
                "Wednesday",
                "Thursday",
                "Friday",
                "Saturday",
            ],
        }
    }

    /// Japanese locale.
    pub fn ja_jp() -> Self {
        const MONTHS: [&str; 12] = [
            "1月", "2月", "3月", "4月", "5月", "6月", "7月", "8月", "9月", "10月", "11月", "12月",
        ];
        Locale {
            decimal_separator: '.',
            thousands_separator: ',',
            am_string: "午前",
            pm_string: "午後",
            month_names_short: MONTHS,
            month_names_full: MONTHS,
            day_names_short: ["日", "月", "火", "水", "木", "金", "土"],
            day_names_full: [
                "日曜日", "月曜日", "火曜日", "水曜日", "木曜日", "金曜日", "土曜日",
            ],
        }
    }

    /// Month name for a 1-based month number.
    pub(crate) fn month_name(&self, month: u32, full: bool) -> &'static str {
        let idx = (month.clamp(1, 12) - 1) as usize;
        if full {
            self.month_names_full[idx]
        } else {
            self.month_names_short[idx]
        }
    }

    /// Day name for a weekday counted from Sunday (0..=6).
    pub(crate) fn day_name(&self, days_from_sunday: u32, full: bool) -> &'static str {
        let idx = (days_from_sunday % 7) as usize;
        if full {
            self.day_names_full[idx]
        } else {
            self.day_names_short[idx]
        }
    }
}
