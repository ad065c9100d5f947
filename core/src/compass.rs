use serde_json::Value;

/// Vises når retningen ikke kan tolkes.
pub const UNKNOWN: &str = "Unknown";

const POINTS: [&str; 16] = [
    "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE",
    "S", "SSW", "SW", "WSW", "W", "WNW", "NW", "NNW",
];

/// Normaliser vinkel til [0, 360)
pub fn norm_deg(d: f64) -> f64 {
    let mut x = d % 360.0;
    if x < 0.0 {
        x += 360.0;
    }
    x
}

/// Grader -> en av 16 kompassretninger (22.5° sektorer, nærmeste).
/// NaN/uendelig gir "Unknown".
pub fn degrees_to_compass(deg: f64) -> &'static str {
    if !deg.is_finite() {
        return UNKNOWN;
    }
    let idx = (norm_deg(deg) / 22.5).round() as usize % POINTS.len();
    POINTS[idx]
}

/// Løst typet input fra API: tall eller numerisk streng, ellers "Unknown".
pub fn compass_from_json(v: &Value) -> &'static str {
    let deg = match v {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    deg.map_or(UNKNOWN, degrees_to_compass)
}
