/// Convert float seconds to an MPRIS position in microseconds
pub fn to_mpris_micros(seconds: f64) -> i64 {
    (seconds.max(0.0) * 1_000_000.0).round() as i64
}

/// Convert an MPRIS position in microseconds to float seconds
pub fn from_mpris_micros(micros: i64) -> f64 {
    micros as f64 / 1_000_000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_between_seconds_and_micros() {
        assert_eq!(to_mpris_micros(1.5), 1_500_000);
        assert_eq!(to_mpris_micros(-3.0), 0);
        assert_eq!(from_mpris_micros(250_000), 0.25);
    }
}
