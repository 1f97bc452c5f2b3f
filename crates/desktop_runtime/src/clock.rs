//! Menu bar clock.

const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Wall-clock fields the menu bar needs, in local time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockSnapshot {
    /// 0 = Sunday.
    pub weekday: u32,
    /// 1-based.
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
}

impl ClockSnapshot {
    pub fn now() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            let date = js_sys::Date::new_0();
            return Self {
                weekday: date.get_day(),
                month: date.get_month() + 1,
                day: date.get_date(),
                hour: date.get_hours(),
                minute: date.get_minutes(),
            };
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            Self {
                weekday: 4,
                month: 1,
                day: 1,
                hour: 0,
                minute: 0,
            }
        }
    }
}

/// `Sat Oct 17  9:41 AM`, or `Sat Oct 17  09:41` on a 24-hour clock.
pub fn format_menu_bar_clock(snapshot: ClockSnapshot, use_24_hour: bool) -> String {
    let weekday = WEEKDAYS[(snapshot.weekday % 7) as usize];
    let month = MONTHS[(snapshot.month.clamp(1, 12) - 1) as usize];
    let date = format!("{weekday} {month} {}", snapshot.day);

    if use_24_hour {
        format!("{date}  {:02}:{:02}", snapshot.hour, snapshot.minute)
    } else {
        let mut hour = snapshot.hour % 12;
        if hour == 0 {
            hour = 12;
        }
        let suffix = if snapshot.hour >= 12 { "PM" } else { "AM" };
        format!("{date}  {hour}:{:02} {suffix}", snapshot.minute)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn at(hour: u32, minute: u32) -> ClockSnapshot {
        ClockSnapshot {
            weekday: 6,
            month: 10,
            day: 17,
            hour,
            minute,
        }
    }

    #[test]
    fn twelve_hour_clock() {
        assert_eq!(format_menu_bar_clock(at(9, 41), false), "Sat Oct 17  9:41 AM");
        assert_eq!(format_menu_bar_clock(at(0, 5), false), "Sat Oct 17  12:05 AM");
        assert_eq!(format_menu_bar_clock(at(12, 0), false), "Sat Oct 17  12:00 PM");
        assert_eq!(format_menu_bar_clock(at(23, 59), false), "Sat Oct 17  11:59 PM");
    }

    #[test]
    fn twenty_four_hour_clock() {
        assert_eq!(format_menu_bar_clock(at(9, 41), true), "Sat Oct 17  09:41");
        assert_eq!(format_menu_bar_clock(at(23, 0), true), "Sat Oct 17  23:00");
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn native_fallback_is_the_epoch() {
        assert_eq!(
            format_menu_bar_clock(ClockSnapshot::now(), false),
            "Thu Jan 1  12:00 AM"
        );
    }
}
