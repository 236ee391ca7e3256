//! Plain-text plan summary

use super::Advisory;
use crate::domain::Weekday;
use crate::sessions::SessionSnapshot;
use crate::templates::ActivityTemplate;
use crate::weather::EnvironmentReading;

const RULE_WIDTH: usize = 50;

/// Render the summary: header, routine, weather, optional session, advisories
pub fn render_summary(
    weekday: Weekday,
    template: &ActivityTemplate,
    reading: &EnvironmentReading,
    session: Option<&SessionSnapshot>,
    advisories: &[Advisory],
) -> String {
    let mut lines = vec![
        format!("Daily Workout Plan - {}", weekday),
        "=".repeat(RULE_WIDTH),
        String::new(),
        format!("Routine: {}", template.title),
        format!("   Duration: {} minutes", template.duration_minutes),
        format!("   Intensity: {}", template.intensity),
        format!("   Exercises: {}", template.exercises.join(", ")),
        String::new(),
        format!("Weather ({}):", reading.location),
        format!("   Wind Speed: {:.1} m/s", reading.wind_speed_mps),
        format!("   Description: {}", reading.description),
    ];
    lines.push(match reading.temperature_celsius {
        Some(t) => format!("   Temperature: {:.1} °C", t),
        None => "   Temperature: N/A".to_string(),
    });
    if let Some(gust) = reading.wind_gust_mps.filter(|g| *g > 0.0) {
        lines.push(format!("   Wind Gust: {:.1} m/s", gust));
    }

    if let Some(session) = session {
        lines.push(String::new());
        lines.push(format!("Class Session: {}", session.session_name));
        lines.push(format!("   Time: {}", session.time));
        lines.push(format!(
            "   Attendance: {}/{} members present",
            session.present_count(),
            session.total_count()
        ));
    }

    lines.push(String::new());
    lines.push("Recommendations:".to_string());
    lines.extend(advisories.iter().map(|advisory| format!("   • {}", advisory)));
    lines.join("\n")
}
