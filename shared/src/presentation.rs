//! View-side helpers. Everything here only reads session output; nothing
//! re-derives the prize on its own.

use crate::constants::{
    IDLE_TITLE, SPINNING_BUTTON_LABEL, SPIN_BUTTON_LABEL, SPIN_DURATION_MS, SPIN_EASING,
};
use crate::prize_table::Prize;
use crate::spin_session::Phase;

pub const SECTOR_COLORS: [&str; 2] = ["#2b0045", "#1c0031"];

pub const MIN_WHEEL_SIZE: u32 = 260;
pub const MAX_WHEEL_SIZE: u32 = 360;
pub const DEFAULT_WHEEL_SIZE: u32 = 320;
const VIEWPORT_PADDING: f64 = 48.0;

/// CSS transform for the disc. The disc turns clockwise by the accumulated angle.
pub fn wheel_transform(accumulated_angle: f64) -> String {
    format!("rotate({}deg)", accumulated_angle)
}

/// CSS transition; the duration comes from the same constant as the resolution timer.
pub fn wheel_transition(phase: Phase) -> String {
    match phase {
        Phase::Spinning => format!(
            "transform {}s {}",
            SPIN_DURATION_MS as f64 / 1000.0,
            SPIN_EASING
        ),
        Phase::Idle | Phase::Resolved => "none".to_string(),
    }
}

/// Where sector `i` is painted on the disc, as `[start, end)` degrees.
///
/// Turning the disc clockwise by `a` brings disc angle `-a` under the pointer,
/// so sectors are painted mirrored for the pointer to read sector `a mod 360`.
pub fn disc_span(sector: usize, n: usize) -> (f64, f64) {
    let width = 360.0 / n as f64;
    let end = 360.0 - sector as f64 * width;
    (end - width, end)
}

fn sector_color(sector: usize) -> &'static str {
    SECTOR_COLORS[sector % SECTOR_COLORS.len()]
}

pub fn wheel_background(n: usize) -> String {
    let mut stops: Vec<(f64, f64, &str)> = (0..n)
        .map(|sector| {
            let (start, end) = disc_span(sector, n);
            (start, end, sector_color(sector))
        })
        .collect();
    stops.sort_by(|a, b| a.0.total_cmp(&b.0));

    let stops: Vec<String> = stops
        .into_iter()
        .map(|(start, end, color)| format!("{} {}deg {}deg", color, start, end))
        .collect();
    format!("conic-gradient(from 0deg, {})", stops.join(", "))
}

/// Disc angle at the middle of a sector's painted span.
pub fn label_angle(sector: usize, n: usize) -> f64 {
    let (start, end) = disc_span(sector, n);
    (start + end) / 2.0
}

pub fn label_transform(sector: usize, n: usize, radius: u32) -> String {
    let angle = label_angle(sector, n);
    // Labels on the lower half would read upside down
    let text_rotation = if angle > 90.0 && angle < 270.0 { 180 } else { 0 };
    format!(
        "translate(-50%, -50%) rotate({}deg) translateY(-{}px) rotate({}deg)",
        angle, radius, text_rotation
    )
}

pub fn divider_transform(boundary: usize, n: usize) -> String {
    let angle = boundary as f64 * 360.0 / n as f64;
    // Dividers are drawn along +x, so shift by a quarter turn to start from 12 o'clock
    format!("translateY(-50%) rotate({}deg)", angle - 90.0)
}

pub fn title_text(resolved: Option<&Prize>) -> &str {
    match resolved {
        Some(prize) => prize.text.as_str(),
        None => IDLE_TITLE,
    }
}

pub fn win_text(prize: &Prize) -> String {
    format!("🎁 Красава, ты выиграл {} 🎁", prize.text)
}

pub fn spin_button_label(phase: Phase) -> &'static str {
    if phase == Phase::Spinning {
        SPINNING_BUTTON_LABEL
    } else {
        SPIN_BUTTON_LABEL
    }
}

/// Wheel diameter for a viewport width, in px.
pub fn wheel_size(viewport_width: Option<f64>) -> u32 {
    match viewport_width {
        Some(width) if width.is_finite() && width > 0.0 => {
            let fitted = (width - VIEWPORT_PADDING).floor().max(0.0) as u32;
            fitted.clamp(MIN_WHEEL_SIZE, MAX_WHEEL_SIZE)
        }
        _ => DEFAULT_WHEEL_SIZE,
    }
}

pub fn label_radius(wheel_size: u32) -> u32 {
    (wheel_size as f64 * 0.37).floor().max(92.0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::angle::resolve_sector;

    #[test]
    fn test_transition_follows_phase() {
        assert_eq!(
            wheel_transition(Phase::Spinning),
            "transform 2.6s cubic-bezier(.12,.78,.12,1)"
        );
        assert_eq!(wheel_transition(Phase::Resolved), "none");
        assert_eq!(wheel_transition(Phase::Idle), "none");
        assert_eq!(wheel_transform(2385.0), "rotate(2385deg)");
    }

    #[test]
    fn test_painted_sector_sits_under_pointer() {
        // Disc angle under the pointer after turning by `a` is -a
        for n in 1..=8usize {
            let width = 360.0 / n as f64;
            for sector in 0..n {
                let a = sector as f64 * width + width / 2.0 + 360.0 * 6.0;
                let under_pointer = (-a).rem_euclid(360.0);
                let (start, end) = disc_span(sector, n);
                assert!(under_pointer >= start && under_pointer < end);
                assert_eq!(resolve_sector(a, n), sector);
            }
        }
    }

    #[test]
    fn test_background_alternates() {
        assert_eq!(
            wheel_background(4),
            "conic-gradient(from 0deg, #1c0031 0deg 90deg, #2b0045 90deg 180deg, \
             #1c0031 180deg 270deg, #2b0045 270deg 360deg)"
        );
    }

    #[test]
    fn test_labels_flip_on_lower_half() {
        // Sector 1 of 4 is painted at 180..270, centre 225
        assert_eq!(
            label_transform(1, 4, 118),
            "translate(-50%, -50%) rotate(225deg) translateY(-118px) rotate(180deg)"
        );
        // Sector 0 of 4 centre 315
        assert!(label_transform(0, 4, 118).ends_with("rotate(0deg)"));
    }

    #[test]
    fn test_texts() {
        let prize = Prize::new(2, "бесплатную консультацию", "консультация");
        assert_eq!(title_text(None), IDLE_TITLE);
        assert_eq!(title_text(Some(&prize)), "бесплатную консультацию");
        assert_eq!(win_text(&prize), "🎁 Красава, ты выиграл бесплатную консультацию 🎁");
        assert_eq!(spin_button_label(Phase::Spinning), SPINNING_BUTTON_LABEL);
        assert_eq!(spin_button_label(Phase::Resolved), SPIN_BUTTON_LABEL);
    }

    #[test]
    fn test_wheel_size_clamps() {
        assert_eq!(wheel_size(None), DEFAULT_WHEEL_SIZE);
        assert_eq!(wheel_size(Some(0.0)), DEFAULT_WHEEL_SIZE);
        assert_eq!(wheel_size(Some(375.0)), 327);
        assert_eq!(wheel_size(Some(200.0)), MIN_WHEEL_SIZE);
        assert_eq!(wheel_size(Some(1920.0)), MAX_WHEEL_SIZE);
        assert_eq!(label_radius(320), 118);
        assert_eq!(label_radius(200), 92);
    }
}
