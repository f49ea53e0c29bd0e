//! Unit tests for it-core primitives.

#[cfg(test)]
mod ids {
    use crate::{ActivityId, IdAllocator};

    #[test]
    fn allocator_is_monotonic() {
        let mut ids = IdAllocator::new();
        let a = ids.next_id();
        let b = ids.next_id();
        let c = ids.next_id();
        assert!(a < b && b < c);
        assert_eq!(ids.peek(), ActivityId(3));
    }

    #[test]
    fn resume_after_skips_restored_ids() {
        let mut ids = IdAllocator::resume_after(ActivityId(41));
        assert_eq!(ids.next_id(), ActivityId(42));
    }

    #[test]
    fn display() {
        assert_eq!(ActivityId(7).to_string(), "ActivityId(7)");
    }
}

#[cfg(test)]
mod time {
    use std::cmp::Ordering;

    use crate::{ClockTime, CoreError, Meridiem, TwelveHour};

    fn t(s: &str) -> ClockTime {
        s.parse().unwrap()
    }

    #[test]
    fn parse_and_format() {
        let ten = t("10:00");
        assert_eq!(ten.minutes(), 600);
        assert_eq!(ten.to_string(), "10:00");
        assert_eq!(t("00:00"), ClockTime::MIDNIGHT);
        assert_eq!(t("23:59").minutes(), 1_439);
        assert_eq!(t("07:05").to_string(), "07:05");
    }

    #[test]
    fn parse_rejects_malformed_text() {
        for bad in ["", "7:05", "24:00", "12:60", "12-30", "1230", "ab:cd", "12:3", "012:30", " 12:30"] {
            let err = bad.parse::<ClockTime>().unwrap_err();
            assert!(matches!(err, CoreError::InvalidFormat(_)), "{bad:?} gave {err:?}");
        }
    }

    #[test]
    fn add_minutes_wraps_both_ways() {
        assert_eq!(t("23:50").add_minutes(20), t("00:10"));
        assert_eq!(t("00:03").add_minutes(-5), t("23:58"));
        assert_eq!(t("10:00").add_minutes(75), t("11:15"));
        assert_eq!(t("10:00").add_minutes(1_440), t("10:00"));
    }

    #[test]
    fn checked_add_minutes_refuses_to_leave_the_day() {
        assert_eq!(t("23:00").checked_add_minutes(59), Some(t("23:59")));
        assert_eq!(t("23:00").checked_add_minutes(60), None);
        assert_eq!(t("00:10").checked_add_minutes(-11), None);
    }

    #[test]
    fn compare_is_minute_order() {
        assert_eq!(t("09:59").cmp(&t("10:00")), Ordering::Less);
        assert_eq!(t("10:00").cmp(&t("10:00")), Ordering::Equal);
        assert_eq!(t("13:00").cmp(&t("01:00")), Ordering::Greater);
    }

    #[test]
    fn minutes_until() {
        assert_eq!(t("10:00").minutes_until(t("11:30")), Some(90));
        assert_eq!(t("11:30").minutes_until(t("10:00")), None);
    }

    #[test]
    fn twelve_hour_boundaries() {
        let midnight = t("00:00").to_twelve_hour();
        assert_eq!((midnight.period(), midnight.hour(), midnight.minute()), (Meridiem::Am, 12, 0));

        let noon = t("12:00").to_twelve_hour();
        assert_eq!((noon.period(), noon.hour()), (Meridiem::Pm, 12));

        let late = t("23:45").to_twelve_hour();
        assert_eq!((late.period(), late.hour(), late.minute()), (Meridiem::Pm, 11, 45));

        let morning = t("09:30").to_twelve_hour();
        assert_eq!((morning.period(), morning.hour()), (Meridiem::Am, 9));
    }

    #[test]
    fn from_twelve_hour_dropdown_strings() {
        let pm = TwelveHour::parse_parts("PM", "12", "05").unwrap();
        assert_eq!(ClockTime::from(pm).to_string(), "12:05");

        let am = TwelveHour::parse_parts("AM", "12", "00").unwrap();
        assert_eq!(ClockTime::from(am).to_string(), "00:00");

        let korean = TwelveHour::parse_parts("오후", "03", "30").unwrap();
        assert_eq!(ClockTime::from(korean).to_string(), "15:30");
    }

    #[test]
    fn from_twelve_hour_rejects_out_of_range() {
        for (hour, minute) in [(0, 0), (13, 0), (12, 60)] {
            let err = ClockTime::from_twelve_hour(Meridiem::Am, hour, minute).unwrap_err();
            assert!(matches!(err, CoreError::InvalidComponent(_)));
        }
        let err = TwelveHour::parse_parts("noon", "12", "00").unwrap_err();
        assert!(matches!(err, CoreError::InvalidComponent(_)));
        let err = TwelveHour::parse_parts("AM", "xx", "00").unwrap_err();
        assert!(matches!(err, CoreError::InvalidComponent(_)));
    }

    #[test]
    fn twelve_hour_display() {
        assert_eq!(t("15:07").to_twelve_hour().to_string(), "03:07 PM");
    }

    #[test]
    fn dropdown_options() {
        assert_eq!(ClockTime::hourly_options().count(), 24);
        assert_eq!(ClockTime::hourly_options().last(), Some(t("23:00")));
        assert_eq!(TwelveHour::hour_options().collect::<Vec<_>>(), (1..=12).collect::<Vec<_>>());
        assert_eq!(TwelveHour::minute_options().count(), 60);
    }
}

#[cfg(test)]
mod round_trip {
    use proptest::prelude::*;

    use crate::{ClockTime, Meridiem, TwelveHour};

    proptest! {
        #[test]
        fn text_form_round_trips(hour in 0u8..24, minute in 0u8..60) {
            let s = format!("{hour:02}:{minute:02}");
            let parsed: ClockTime = s.parse().unwrap();
            prop_assert_eq!(parsed.to_string(), s);
        }

        #[test]
        fn twelve_hour_form_round_trips(pm in any::<bool>(), hour in 1u8..=12, minute in 0u8..60) {
            let period = if pm { Meridiem::Pm } else { Meridiem::Am };
            let twelve = TwelveHour::new(period, hour, minute).unwrap();
            prop_assert_eq!(ClockTime::from(twelve).to_twelve_hour(), twelve);
        }

        #[test]
        fn add_then_subtract_is_identity(minutes in 0u16..1_440, delta in -5_000i32..5_000) {
            let t = ClockTime::from_minutes(minutes).unwrap();
            prop_assert_eq!(t.add_minutes(delta).add_minutes(-delta), t);
        }
    }
}

#[cfg(test)]
mod stay {
    use crate::StayDuration;

    #[test]
    fn split_and_label() {
        assert_eq!(StayDuration::from_minutes(90).to_string(), "1h 30m");
        assert_eq!(StayDuration::from_minutes(120).to_string(), "2h");
        assert_eq!(StayDuration::from_minutes(45).to_string(), "45m");
        assert_eq!(StayDuration::from_minutes(0).to_string(), "0m");
    }

    #[test]
    fn parts_carry() {
        let d = StayDuration::from_parts(1, 75);
        assert_eq!((d.hours, d.minutes), (2, 15));
        assert_eq!(d.total_minutes(), 135);
    }
}

#[cfg(test)]
mod config {
    use crate::{ClockTime, CoreError, PlannerConfig};

    #[test]
    fn default_is_valid() {
        let cfg = PlannerConfig::default();
        cfg.validate().unwrap();
        assert_eq!(cfg.default_start.to_string(), "10:00");
    }

    #[test]
    fn zero_step_rejected() {
        let cfg = PlannerConfig { duration_step_minutes: 0, ..PlannerConfig::default() };
        assert!(matches!(cfg.validate(), Err(CoreError::Config(_))));
    }

    #[test]
    fn end_before_start_rejected() {
        let cfg = PlannerConfig {
            default_start: "18:00".parse().unwrap(),
            default_end:   Some("10:00".parse::<ClockTime>().unwrap()),
            ..PlannerConfig::default()
        };
        assert!(matches!(cfg.validate(), Err(CoreError::Config(_))));
    }

    #[test]
    fn stay_above_max_rejected() {
        let cfg = PlannerConfig { default_stay_minutes: 800, ..PlannerConfig::default() };
        assert!(cfg.validate().is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn partial_json_uses_defaults() {
        let cfg = PlannerConfig::from_json_str(r#"{ "default_start": "09:30" }"#).unwrap();
        assert_eq!(cfg.default_start.to_string(), "09:30");
        assert_eq!(cfg.default_stay_minutes, PlannerConfig::default().default_stay_minutes);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn json_with_bad_time_rejected() {
        let err = PlannerConfig::from_json_str(r#"{ "default_start": "9:30" }"#).unwrap_err();
        assert!(matches!(err, CoreError::Json(_)));
    }
}
