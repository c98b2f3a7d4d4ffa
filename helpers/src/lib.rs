pub mod general;

#[cfg(test)]
mod general_tests {
    use crate::general::{argmin, fmt_delta, fmt_racetime, max, min, ordinal};
    use approx::assert_ulps_eq;

    #[test]
    fn test_argmin_1() {
        let x: Vec<i32> = vec![3, -1, 5, 8, -2];
        assert_eq!(argmin(&x), 4);
    }
    #[test]
    fn test_argmin_2() {
        let x: Vec<f64> = vec![20.1, 19.8, 19.8, 21.0];
        assert_eq!(argmin(&x), 1);
    }

    #[test]
    fn test_max_1() {
        let x: Vec<i32> = vec![3, -1, 5, 8, -2];
        assert_eq!(max(&x), 8);
    }
    #[test]
    fn test_max_2() {
        let x: Vec<f64> = vec![3.0, -1.0, 5.0, 8.0, -2.0];
        assert_ulps_eq!(max(&x), 8.0);
    }

    #[test]
    fn test_min_1() {
        let x: Vec<f64> = vec![3.0, -1.0, 5.0, 8.0, -2.0];
        assert_ulps_eq!(min(&x), -2.0);
    }

    #[test]
    fn test_ordinal() {
        let ords: Vec<String> = [1, 2, 3, 4, 11, 12, 13, 21, 22, 23, 101, 111]
            .iter()
            .map(|&n| ordinal(n))
            .collect();
        assert_eq!(
            ords,
            vec![
                "1st", "2nd", "3rd", "4th", "11th", "12th", "13th", "21st", "22nd", "23rd",
                "101st", "111th"
            ]
        );
    }

    #[test]
    fn test_fmt_racetime_1() {
        assert_eq!(fmt_racetime(40.5), "00:40.50");
    }
    #[test]
    fn test_fmt_racetime_2() {
        assert_eq!(fmt_racetime(372.456), "06:12.46");
    }
    #[test]
    fn test_fmt_racetime_3() {
        assert_eq!(fmt_racetime(0.0), "00:00.00");
        assert_eq!(fmt_racetime(-3.0), "00:00.00");
    }

    #[test]
    fn test_fmt_delta() {
        assert_eq!(fmt_delta(-0.2), "-0.20");
        assert_eq!(fmt_delta(0.0), "+0.00");
        assert_eq!(fmt_delta(1.257), "+1.26");
    }
}
