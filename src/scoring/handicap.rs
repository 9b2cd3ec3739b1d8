//! Handicap stroke allocation.
//!
//! A playing handicap is spread across the holes by stroke index: every hole
//! gets `handicap / holes` strokes and the hardest `handicap % holes` holes get
//! one more. Handicaps above twice the hole count keep wrapping, so a 40 on 18
//! holes receives three strokes on stroke indices 1-4.
//!
//! Plus handicaps give back a single stroke on holes whose stroke index is
//! within the handicap; multi-stroke giving is not modelled.

/// Converts a handicap index into a whole-stroke playing handicap after the
/// allowance (1.0 = full handicap). Missing or zero indexes play off scratch.
pub fn playing_handicap(index: Option<f64>, allowance: f64) -> i32 {
    match index {
        Some(index) if index != 0.0 && index.is_finite() => (index * allowance).round() as i32,
        _ => 0,
    }
}

/// Strokes received (positive) or given (negative) on a hole.
pub fn strokes_on_hole(handicap_index: Option<f64>, stroke_index: u32, holes_played: u32) -> i32 {
    strokes_for_playing_handicap(playing_handicap(handicap_index, 1.0), stroke_index, holes_played)
}

pub fn strokes_for_playing_handicap(handicap: i32, stroke_index: u32, holes_played: u32) -> i32 {
    if handicap == 0 || stroke_index == 0 || holes_played == 0 {
        return 0;
    }

    let magnitude = handicap.unsigned_abs();
    if handicap < 0 {
        return if stroke_index <= magnitude { -1 } else { 0 };
    }

    let full_passes = magnitude / holes_played;
    let extra = u32::from(stroke_index <= magnitude % holes_played);
    (full_passes + extra) as i32
}

pub fn net_score(gross: i32, strokes: i32) -> i32 {
    gross - strokes
}
