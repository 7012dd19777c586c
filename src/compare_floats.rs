pub fn min_of_2<T: PartialOrd + Copy>(first: T, second: T) -> T {
    if first < second {
        first
    } else {
        second
    }
}

pub fn max_of_2<T: PartialOrd + Copy>(first: T, second: T) -> T {
    if first > second {
        first
    } else {
        second
    }
}

/// Limit the magnitude of a value to `limit`, keeping its sign. NaN is returned unchanged.
pub(crate) fn clamp_magnitude(value: f64, limit: f64) -> f64 {
    if value.abs() > limit {
        max_of_2(min_of_2(value, limit), -limit)
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    pub fn should_calc_2_as_min_of_4_and_2_floats() {
        assert_eq!(min_of_2(4., 2.), 2.);
    }

    #[rstest]
    pub fn should_calc_4_as_max_of_2_and_4_ints() {
        assert_eq!(max_of_2(2, 4), 4);
    }

    #[rstest]
    #[case(45., 30.)]
    #[case(-175.8, -30.)]
    #[case(5.75, 5.75)]
    #[case(-30., -30.)]
    #[case(0., 0.)]
    pub fn should_clamp_magnitude_keeping_sign(#[case] value: f64, #[case] expected: f64) {
        assert_eq!(clamp_magnitude(value, 30.), expected);
    }

    #[rstest]
    pub fn should_leave_nan_unclamped() {
        assert!(clamp_magnitude(f64::NAN, 30.).is_nan());
        assert_eq!(clamp_magnitude(f64::NEG_INFINITY, 30.), -30.);
    }
}
