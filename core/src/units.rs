// core/src/units.rs
pub const FEET_PER_METER: f64 = 3.28084;

// --- RoundTo trait (offentlig, brukt av rapport og ranking) ---
pub trait RoundTo {
    fn round_to(self, dp: u32) -> f64;
    /// Halvdeler rundes til partall (42.5 -> 42), som backendens `round`.
    fn round_even_to(self, dp: u32) -> f64;
}

impl RoundTo for f64 {
    #[inline]
    fn round_to(self, dp: u32) -> f64 {
        if dp == 0 { return self.round(); }
        let factor = 10_f64.powi(dp as i32);
        (self * factor).round() / factor
    }

    #[inline]
    fn round_even_to(self, dp: u32) -> f64 {
        let factor = 10_f64.powi(dp as i32);
        (self * factor).round_ties_even() / factor
    }
}

#[inline]
pub fn meters_to_feet(m: f64) -> f64 {
    m * FEET_PER_METER
}

/// Robust median; tom liste => None.
pub fn median(xs: &[f64]) -> Option<f64> {
    let mut xs: Vec<f64> = xs.iter().copied().filter(|x| x.is_finite()).collect();
    if xs.is_empty() {
        return None;
    }
    xs.sort_by(f64::total_cmp);
    let n = xs.len();
    if n % 2 == 1 {
        Some(xs[n / 2])
    } else {
        Some((xs[n / 2 - 1] + xs[n / 2]) / 2.0)
    }
}
