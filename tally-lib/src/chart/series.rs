use crate::store::Observation;
use chrono::TimeDelta;

/// A chart point: seconds since the Unix epoch against the counter value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: i64,
    pub y: f64,
}

/// Whether the series changes at least once.
///
/// Compares each value with the one immediately before it, so fewer than two
/// observations never vary.
#[must_use]
pub fn has_variation(observations: &[Observation]) -> bool {
    observations.windows(2).any(|pair| pair[0].value != pair[1].value)
}

/// Map observations to chart points.
///
/// With `shift_back_one_day`, each point is placed a day before its observation, since
/// the page reports the count as of yesterday.
#[must_use]
#[expect(clippy::cast_precision_loss, reason = "counter values are far below 2^52")]
pub fn points(observations: &[Observation], shift_back_one_day: bool) -> Vec<Point> {
    let shift = if shift_back_one_day { TimeDelta::days(1) } else { TimeDelta::zero() };

    observations
        .iter()
        .map(|o| Point {
            x: (o.timestamp - shift).timestamp(),
            y: o.value as f64,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;

    fn series(values: &[i64]) -> Vec<Observation> {
        let start = DateTime::parse_from_rfc3339("2021-06-01T08:00:00+08:00").unwrap();
        values
            .iter()
            .zip(0..)
            .map(|(&value, day)| Observation::new(start + TimeDelta::days(day), value))
            .collect()
    }

    #[test]
    fn test_too_short_never_varies() {
        assert!(!has_variation(&series(&[])));
        assert!(!has_variation(&series(&[7])));
    }

    #[test]
    fn test_constant_series_does_not_vary() {
        assert!(!has_variation(&series(&[5, 5])));
        assert!(!has_variation(&series(&[0, 0, 0, 0, 0])));
    }

    #[test]
    fn test_adjacent_change_varies() {
        assert!(has_variation(&series(&[5, 9])));
        assert!(has_variation(&series(&[5, 5, 5, 6])));
        assert!(has_variation(&series(&[9, 5, 5])));
    }

    #[test]
    fn test_return_to_start_still_varies() {
        assert!(has_variation(&series(&[5, 9, 5])));
    }

    #[test]
    fn test_points_shift_back_one_day() {
        let observations = series(&[3, 4]);
        let shifted = points(&observations, true);
        let unshifted = points(&observations, false);

        assert_eq!(unshifted[0].x, observations[0].timestamp.timestamp());
        assert_eq!(unshifted[0].x - shifted[0].x, 86_400);
        assert_eq!(shifted[1].x - shifted[0].x, 86_400);
        assert!((shifted[1].y - 4.0).abs() < f64::EPSILON);
    }
}
