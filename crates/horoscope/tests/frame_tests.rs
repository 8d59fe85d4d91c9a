use horoscope::chart::{ascendant, house_cusps, midheaven};
use horoscope::{compute_chart_frame, Angle, ChartError, ChartFrame, GeoLocation, EARTH_OBLIQUITY};

const LAT: f64 = 53.4807593;

fn frame(lst: f64) -> ChartFrame {
    compute_chart_frame(Angle::new(lst), LAT).unwrap()
}

#[test]
fn test_frame_manchester_lst_45() {
    let frame = frame(45.0);

    assert!((frame.ascendant().degrees() - 149.194_958_570_100_97).abs() < 1e-6);
    assert!((frame.midheaven().degrees() - 47.464_176_454_602_81).abs() < 1e-6);

    let d1 = 33.910_260_705_166_05;
    let d2 = 26.089_739_294_833_947;
    let expected = [
        180.0,
        180.0 + d2,
        180.0 + 2.0 * d2,
        180.0 + 3.0 * d2,
        180.0 + 3.0 * d2 + d1,
        180.0 + 3.0 * d2 + 2.0 * d1,
        (180.0 + 3.0 * d2 + 3.0 * d1) % 360.0,
        d2 + 0.0,
        2.0 * d2,
        3.0 * d2,
        3.0 * d2 + d1,
        3.0 * d2 + 2.0 * d1,
    ];
    for (house, want) in (1..=12u8).zip(expected) {
        let got = frame.cusps().get(house).unwrap().degrees();
        let diff = (got - want).abs().min(360.0 - (got - want).abs());
        assert!(diff < 1e-6, "house {}: got {}, want {}", house, got, want);
    }
}

#[test]
fn test_first_cusp_sits_at_180() {
    for lst in [0.0, 10.0, 45.0, 100.0, 135.0, 200.0, 300.0] {
        let frame = frame(lst);
        assert!((frame.cusps().get(1).unwrap().degrees() - 180.0).abs() < 1e-9);
        assert_eq!(frame.cusps().boundaries()[12], frame.cusps().boundaries()[0]);
    }
}

#[test]
fn test_ascendant_descendant_opposed() {
    for lst in [0.0, 10.0, 45.0, 100.0, 200.0, 300.0] {
        let frame = frame(lst);
        assert!((frame.ascendant().separation(frame.descendant()) - 180.0).abs() < 1e-9);
        assert!((frame.midheaven().separation(frame.imum_coeli()) - 180.0).abs() < 1e-9);
    }
}

#[test]
fn test_cusps_increase_with_single_wrap() {
    for lst in [0.0, 10.0, 45.0, 100.0, 135.0, 200.0, 300.0] {
        let frame = frame(lst);
        let cusps: Vec<f64> = frame.cusps().boundaries().iter().map(|c| c.degrees()).collect();
        let mut total = 0.0;
        for pair in cusps.windows(2) {
            let step = (pair[1] - pair[0]).rem_euclid(360.0);
            assert!(step > 0.0 && step < 180.0, "lst {}: step {}", lst, step);
            total += step;
        }
        assert!((total - 360.0).abs() < 1e-9, "lst {}: total {}", lst, total);
    }
}

#[test]
fn test_opposite_cusps_share_steps() {
    let frame = frame(45.0);
    for house in 1..=6u8 {
        let a = frame.cusps().get(house).unwrap();
        let b = frame.cusps().get(house + 6).unwrap();
        assert!((a.separation(b) - 180.0).abs() < 1e-6);
    }
}

#[test]
fn test_midheaven_quadrant() {
    // Meridian in the western half of the sky
    let mc = midheaven(Angle::new(135.0), EARTH_OBLIQUITY).unwrap();
    assert!((mc.degrees() - 132.535_823_545_397_2).abs() < 1e-6);

    let mc = midheaven(Angle::new(0.0), EARTH_OBLIQUITY).unwrap();
    assert!(mc.degrees().abs() < 1e-9);
}

#[test]
fn test_midheaven_singularity() {
    for lst in [90.0, 270.0] {
        let err = midheaven(Angle::new(lst), EARTH_OBLIQUITY).unwrap_err();
        assert!(matches!(err, ChartError::Domain { .. }));
        assert!(compute_chart_frame(Angle::new(lst), LAT).is_err());
    }
}

#[test]
fn test_ascendant_matches_frame() {
    let asc = ascendant(Angle::new(200.0), LAT, EARTH_OBLIQUITY);
    assert!((asc.degrees() - 256.627_473_333_819_86).abs() < 1e-6);
    assert_eq!(frame(200.0).ascendant(), asc);
}

#[test]
fn test_house_cusps_from_angles() {
    let frame = frame(300.0);
    let cusps = house_cusps(frame.ascendant(), frame.midheaven());
    assert_eq!(&cusps, frame.cusps());
}

#[test]
fn test_cusp_longitude_round_trip() {
    let frame = frame(45.0);
    let asc = frame.cusp_longitude(1).unwrap();
    assert!(asc.separation(frame.ascendant()) < 1e-9);
    let tenth = frame.cusp_longitude(10).unwrap();
    assert!(tenth.separation(frame.midheaven()) < 1e-6);
    assert!(frame.cusp_longitude(0).is_none());
    assert!(frame.cusp_longitude(13).is_none());
}

#[test]
fn test_invalid_latitude_rejected() {
    let err = ChartFrame::compute(Angle::new(45.0), 91.0, EARTH_OBLIQUITY).unwrap_err();
    match &err {
        ChartError::Domain { input, value, .. } => {
            assert_eq!(*input, "latitude");
            assert_eq!(*value, 91.0);
        }
        other => panic!("expected a latitude domain error, got {other:?}"),
    }
    assert!(err.to_string().contains("latitude = 91"));
    assert!(GeoLocation::new(f64::NAN, 0.0).is_err());
}
