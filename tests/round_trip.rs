use jalaali_date::{
    CalendarConfig, GregorianDate, JalaaliDate, JalaaliMonth, JulianDay, LeapRule, gregorian,
    jalaali, observed, to_gregorian, to_jalaali,
};

const RULES: [LeapRule; 2] = [LeapRule::GrandCycle, LeapRule::ThirtyThreeYear];

/// Every valid Gregorian date in `years`, in order.
fn gregorian_days(years: impl Iterator<Item = i32>) -> impl Iterator<Item = (i32, u8, u8)> {
    years.flat_map(|y| {
        (1..=12u8).flat_map(move |m| (1..=gregorian::days_in_month(y, m)).map(move |d| (y, m, d)))
    })
}

/// Every valid Jalaali date in `years` under `rule`, in order.
fn jalaali_days(
    years: impl Iterator<Item = i32>,
    rule: LeapRule,
) -> impl Iterator<Item = (i32, u8, u8)> {
    years.filter(|&y| y != 0).flat_map(move |y| {
        (1..=12u8).flat_map(move |m| (1..=rule.days_in_month(y, m)).map(move |d| (y, m, d)))
    })
}

#[test]
fn gregorian_round_trip_1_to_3000() {
    let mut prev: Option<JulianDay> = None;
    for (y, m, d) in gregorian_days(1..=3000) {
        let (gm, gd) = (i32::from(m), i32::from(d));
        let jd = gregorian::gregorian_to_julian_day(y, gm, gd);
        if let Some(prev) = prev {
            assert_eq!(jd - prev, 1, "gap before {y}-{m:02}-{d:02}");
        }
        prev = Some(jd);

        assert_eq!(
            gregorian::julian_day_to_gregorian(jd).to_tuple(),
            (y, m, d),
            "JDN round trip failed for {y}-{m:02}-{d:02}"
        );

        let j = to_jalaali(y, gm, gd);
        assert_eq!(
            to_gregorian(j.year(), i32::from(j.month()), i32::from(j.day())).to_tuple(),
            (y, m, d),
            "calendar round trip failed for {y}-{m:02}-{d:02} via {j}"
        );
    }
}

#[test]
fn gregorian_round_trip_before_common_era() {
    let mut prev: Option<JulianDay> = None;
    for (y, m, d) in gregorian_days(-5000..=0) {
        let jd = gregorian::gregorian_to_julian_day(y, i32::from(m), i32::from(d));
        if let Some(prev) = prev {
            assert_eq!(jd - prev, 1, "gap before {y}-{m:02}-{d:02}");
        }
        prev = Some(jd);
        assert_eq!(gregorian::julian_day_to_gregorian(jd).to_tuple(), (y, m, d));
    }
}

#[test]
fn jalaali_round_trip_full_grand_cycle() {
    let mut prev: Option<JulianDay> = None;
    for (y, m, d) in jalaali_days(1..=2820, LeapRule::GrandCycle) {
        let (jm, jd) = (i32::from(m), i32::from(d));
        let day = jalaali::jalaali_to_julian_day(y, jm, jd);
        if let Some(prev) = prev {
            assert_eq!(day - prev, 1, "gap before {y}/{m:02}/{d:02}");
        }
        prev = Some(day);

        assert_eq!(
            jalaali::julian_day_to_jalaali(day).to_tuple(),
            (y, m, d),
            "JDN round trip failed for {y}/{m:02}/{d:02}"
        );

        let g = to_gregorian(y, jm, jd);
        assert_eq!(
            to_jalaali(g.year(), i32::from(g.month()), i32::from(g.day())).to_tuple(),
            (y, m, d),
            "calendar round trip failed for {y}/{m:02}/{d:02} via {g}"
        );
    }
}

#[test]
fn jalaali_round_trip_across_year_zero() {
    for rule in RULES {
        let mut prev: Option<JulianDay> = None;
        for (y, m, d) in jalaali_days(-3000..=10, rule) {
            let day = rule.to_julian_day(y, i32::from(m), i32::from(d));
            if let Some(prev) = prev {
                assert_eq!(day - prev, 1, "gap before {y}/{m:02}/{d:02} under {rule}");
            }
            prev = Some(day);
            assert_eq!(rule.from_julian_day(day).to_tuple(), (y, m, d), "{rule}");
        }
    }
}

#[test]
fn observed_round_trip_1178_to_3000() {
    let mut prev: Option<JulianDay> = None;
    for (y, m, d) in jalaali_days(1178..=3000, LeapRule::ThirtyThreeYear) {
        let day = observed::jalaali_to_julian_day(y, i32::from(m), i32::from(d));
        if let Some(prev) = prev {
            assert_eq!(day - prev, 1, "gap before {y}/{m:02}/{d:02}");
        }
        prev = Some(day);
        assert_eq!(observed::julian_day_to_jalaali(day).to_tuple(), (y, m, d));
    }
}

#[test]
fn every_julian_day_maps_to_a_valid_date() {
    let start = gregorian::gregorian_to_julian_day(1900, 1, 1);
    for offset in 0..(200 * 366) {
        let day = start + offset;
        let g = gregorian::julian_day_to_gregorian(day);
        assert!(GregorianDate::new(g.year(), g.month(), g.day()).is_ok(), "{day} -> {g}");

        for rule in RULES {
            let j = rule.from_julian_day(day);
            assert!(
                JalaaliDate::new_with_rule(j.year(), j.month(), j.day(), rule).is_ok(),
                "{day} -> {j} under {rule}"
            );
        }
    }
}

#[test]
fn leap_boundary_1403() {
    let rule = LeapRule::ThirtyThreeYear;
    let last_day = JalaaliDate::new_with_rule(1403, 12, 30, rule).unwrap();
    let g = last_day.to_gregorian_with(rule);
    assert_eq!(g.to_tuple(), (2025, 3, 20));
    assert_eq!(g.to_jalaali_with(rule), last_day);
    assert_eq!(rule.from_julian_day(g.to_julian_day() + 1).to_tuple(), (1404, 1, 1));

    // the grand cycle has no 1403/12/30 and starts 1404 a day earlier
    assert!(JalaaliDate::new(1403, 12, 30).is_err());
    assert_eq!(g.to_jalaali().to_tuple(), (1404, 1, 1));
}

#[test]
fn month_grids_cover_each_day_once() {
    for rule in RULES {
        let config = CalendarConfig::new().with_leap_rule(rule);
        let mut month = JalaaliMonth::new(1395, 1).unwrap();
        let start = rule.to_julian_day(1395, 1, 1);
        let mut offset = 0_i64;

        while month.year() <= 1410 {
            let cells = month.cells(&config);
            assert_eq!(cells.len() % 7, 0, "{month} under {rule}");
            for date in cells.into_iter().flatten() {
                assert_eq!(date.to_julian_day_with(rule) - start, offset, "{date} under {rule}");
                offset += 1;
            }
            let Some(next) = month.next() else { break };
            month = next;
        }
    }
}
