use crate::conditions::EnvironmentalConditions;
use crate::types::ProfileReport;

/// Tekstlinjer for profilrapporten (skilt ut for test).
pub fn format_profile_report(report: &ProfileReport) -> Vec<String> {
    let mut lines = vec![
        "--- Surf Report ---".to_string(),
        format!("Sessions: {} (skipped {})", report.session_count, report.skipped_sessions),
        format!("{} DAY SURFING STREAK (longest {})", report.streak, report.longest_streak),
        format!("Total hours: {:.2}", report.total_hours),
        format!("Avg session: {:.2} h", report.avg_session_length),
    ];

    if !report.most_visited_beaches.is_empty() {
        lines.push("Most visited:".to_string());
        for r in &report.most_visited_beaches {
            lines.push(format!(
                "  {}. {} – {} visits, {:.1}★",
                r.rank, r.beach, r.visits, r.avg_rating
            ));
        }
    }

    if !report.hours_per_day.is_empty() {
        lines.push("Hours per day:".to_string());
        for d in &report.hours_per_day {
            lines.push(format!("  {:>6}: {:.2}", d.label, d.hours));
        }
    }
    lines
}

pub fn print_profile_report(report: &ProfileReport) {
    for line in format_profile_report(report) {
        println!("{line}");
    }
}

/// Tekstlinjer for vær/bølger (skilt ut for test).
pub fn format_conditions(c: &EnvironmentalConditions) -> Vec<String> {
    let mut lines = vec![
        "--- Conditions ---".to_string(),
        format!("Weather: {}", c.weather_description()),
        format!("Temp: {:.0}°F", c.temperature_2m),
        format!("Wind: {:.0} mph {}", c.wind_speed, c.wind_compass()),
        format!("Waves: {:.2} ft, tide {:.2} ft", c.wave_height, c.tide),
    ];
    if let Some(h) = c.swell_height {
        lines.push(format!("Swell: {:.2} ft {}", h, c.swell_compass()));
    }
    lines
}

pub fn print_conditions(c: &EnvironmentalConditions) {
    for line in format_conditions(c) {
        println!("{line}");
    }
}
