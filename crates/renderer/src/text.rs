//! Segment-based vector text for axis captions.
//!
//! Each glyph is a handful of straight strokes in a `[-1, 1]` box, enough
//! for short captions without shipping a font file. Lowercase input is
//! drawn with the uppercase shapes; unknown characters render as blanks.

use plot_common::Color;

use crate::figure::Figure;

/// Draw `text` centered at `(x, y)` in pixel space.
pub fn draw_text(figure: &mut Figure, x: f32, y: f32, text: &str, size: f32, color: Color) {
    let half_w = size * 0.3;
    let half_h = size * 0.5;
    let advance = half_w * 2.0 + size * 0.2;
    let stroke = (size * 0.09).max(1.0);

    let count = text.chars().count();
    if count == 0 {
        return;
    }
    let total = advance * count as f32 - size * 0.2;
    let mut cx = x - total / 2.0 + half_w;

    for ch in text.chars() {
        for &((x1, y1), (x2, y2)) in glyph_strokes(ch.to_ascii_uppercase()) {
            figure.stroke_polyline(
                &[
                    (cx + x1 * half_w, y + y1 * half_h),
                    (cx + x2 * half_w, y + y2 * half_h),
                ],
                color,
                stroke,
            );
        }
        cx += advance;
    }
}

type Strokes = &'static [((f32, f32), (f32, f32))];

/// Stroke list for one glyph, in a box running -1..1 on both axes with Y
/// growing downward.
fn glyph_strokes(ch: char) -> Strokes {
    match ch {
        'A' => &[((-1.0, 1.0), (0.0, -1.0)), ((0.0, -1.0), (1.0, 1.0)), ((-0.5, 0.2), (0.5, 0.2))],
        'B' => &[
            ((-1.0, -1.0), (-1.0, 1.0)),
            ((-1.0, -1.0), (0.8, -1.0)),
            ((0.8, -1.0), (0.8, 0.0)),
            ((-1.0, 0.0), (0.8, 0.0)),
            ((0.8, 0.0), (0.8, 1.0)),
            ((-1.0, 1.0), (0.8, 1.0)),
        ],
        'C' => &[((1.0, -1.0), (-1.0, -1.0)), ((-1.0, -1.0), (-1.0, 1.0)), ((-1.0, 1.0), (1.0, 1.0))],
        'D' => &[
            ((-1.0, -1.0), (-1.0, 1.0)),
            ((-1.0, -1.0), (0.5, -1.0)),
            ((0.5, -1.0), (1.0, -0.4)),
            ((1.0, -0.4), (1.0, 0.4)),
            ((1.0, 0.4), (0.5, 1.0)),
            ((0.5, 1.0), (-1.0, 1.0)),
        ],
        'E' => &[
            ((-1.0, -1.0), (-1.0, 1.0)),
            ((-1.0, -1.0), (1.0, -1.0)),
            ((-1.0, 0.0), (0.6, 0.0)),
            ((-1.0, 1.0), (1.0, 1.0)),
        ],
        'F' => &[((-1.0, -1.0), (-1.0, 1.0)), ((-1.0, -1.0), (1.0, -1.0)), ((-1.0, 0.0), (0.6, 0.0))],
        'G' => &[
            ((1.0, -1.0), (-1.0, -1.0)),
            ((-1.0, -1.0), (-1.0, 1.0)),
            ((-1.0, 1.0), (1.0, 1.0)),
            ((1.0, 1.0), (1.0, 0.1)),
            ((1.0, 0.1), (0.2, 0.1)),
        ],
        'H' => &[((-1.0, -1.0), (-1.0, 1.0)), ((1.0, -1.0), (1.0, 1.0)), ((-1.0, 0.0), (1.0, 0.0))],
        'I' => &[((0.0, -1.0), (0.0, 1.0)), ((-0.5, -1.0), (0.5, -1.0)), ((-0.5, 1.0), (0.5, 1.0))],
        'J' => &[
            ((1.0, -1.0), (1.0, 0.6)),
            ((1.0, 0.6), (0.4, 1.0)),
            ((0.4, 1.0), (-0.5, 1.0)),
            ((-0.5, 1.0), (-1.0, 0.6)),
        ],
        'K' => &[((-1.0, -1.0), (-1.0, 1.0)), ((-1.0, 0.0), (1.0, -1.0)), ((-1.0, 0.0), (1.0, 1.0))],
        'L' => &[((-1.0, -1.0), (-1.0, 1.0)), ((-1.0, 1.0), (1.0, 1.0))],
        'M' => &[
            ((-1.0, 1.0), (-1.0, -1.0)),
            ((-1.0, -1.0), (0.0, 0.2)),
            ((0.0, 0.2), (1.0, -1.0)),
            ((1.0, -1.0), (1.0, 1.0)),
        ],
        'N' => &[((-1.0, 1.0), (-1.0, -1.0)), ((-1.0, -1.0), (1.0, 1.0)), ((1.0, 1.0), (1.0, -1.0))],
        'O' => &[
            ((-1.0, -1.0), (1.0, -1.0)),
            ((1.0, -1.0), (1.0, 1.0)),
            ((1.0, 1.0), (-1.0, 1.0)),
            ((-1.0, 1.0), (-1.0, -1.0)),
        ],
        'P' => &[
            ((-1.0, -1.0), (-1.0, 1.0)),
            ((-1.0, -1.0), (0.8, -1.0)),
            ((0.8, -1.0), (0.8, 0.0)),
            ((-1.0, 0.0), (0.8, 0.0)),
        ],
        'Q' => &[
            ((-1.0, -1.0), (1.0, -1.0)),
            ((1.0, -1.0), (1.0, 1.0)),
            ((1.0, 1.0), (-1.0, 1.0)),
            ((-1.0, 1.0), (-1.0, -1.0)),
            ((0.3, 0.3), (1.0, 1.0)),
        ],
        'R' => &[
            ((-1.0, -1.0), (-1.0, 1.0)),
            ((-1.0, -1.0), (0.8, -1.0)),
            ((0.8, -1.0), (0.8, 0.0)),
            ((-1.0, 0.0), (0.8, 0.0)),
            ((0.2, 0.0), (1.0, 1.0)),
        ],
        'S' => &[
            ((1.0, -1.0), (-1.0, -1.0)),
            ((-1.0, -1.0), (-1.0, 0.0)),
            ((-1.0, 0.0), (1.0, 0.0)),
            ((1.0, 0.0), (1.0, 1.0)),
            ((1.0, 1.0), (-1.0, 1.0)),
        ],
        'T' => &[((-1.0, -1.0), (1.0, -1.0)), ((0.0, -1.0), (0.0, 1.0))],
        'U' => &[((-1.0, -1.0), (-1.0, 1.0)), ((-1.0, 1.0), (1.0, 1.0)), ((1.0, 1.0), (1.0, -1.0))],
        'V' => &[((-1.0, -1.0), (0.0, 1.0)), ((0.0, 1.0), (1.0, -1.0))],
        'W' => &[
            ((-1.0, -1.0), (-0.5, 1.0)),
            ((-0.5, 1.0), (0.0, -0.2)),
            ((0.0, -0.2), (0.5, 1.0)),
            ((0.5, 1.0), (1.0, -1.0)),
        ],
        'X' => &[((-1.0, -1.0), (1.0, 1.0)), ((1.0, -1.0), (-1.0, 1.0))],
        'Y' => &[((-1.0, -1.0), (0.0, 0.0)), ((1.0, -1.0), (0.0, 0.0)), ((0.0, 0.0), (0.0, 1.0))],
        'Z' => &[((-1.0, -1.0), (1.0, -1.0)), ((1.0, -1.0), (-1.0, 1.0)), ((-1.0, 1.0), (1.0, 1.0))],
        '0' => &[
            ((-1.0, -1.0), (1.0, -1.0)),
            ((1.0, -1.0), (1.0, 1.0)),
            ((1.0, 1.0), (-1.0, 1.0)),
            ((-1.0, 1.0), (-1.0, -1.0)),
            ((1.0, -1.0), (-1.0, 1.0)),
        ],
        '1' => &[((0.0, -1.0), (0.0, 1.0)), ((-0.4, -0.6), (0.0, -1.0))],
        '2' => &[
            ((-1.0, -1.0), (1.0, -1.0)),
            ((1.0, -1.0), (1.0, 0.0)),
            ((1.0, 0.0), (-1.0, 0.0)),
            ((-1.0, 0.0), (-1.0, 1.0)),
            ((-1.0, 1.0), (1.0, 1.0)),
        ],
        '3' => &[
            ((-1.0, -1.0), (1.0, -1.0)),
            ((1.0, -1.0), (1.0, 1.0)),
            ((1.0, 1.0), (-1.0, 1.0)),
            ((-0.6, 0.0), (1.0, 0.0)),
        ],
        '4' => &[((-1.0, -1.0), (-1.0, 0.0)), ((-1.0, 0.0), (1.0, 0.0)), ((1.0, -1.0), (1.0, 1.0))],
        '5' => &[
            ((1.0, -1.0), (-1.0, -1.0)),
            ((-1.0, -1.0), (-1.0, 0.0)),
            ((-1.0, 0.0), (1.0, 0.0)),
            ((1.0, 0.0), (1.0, 1.0)),
            ((1.0, 1.0), (-1.0, 1.0)),
        ],
        '6' => &[
            ((1.0, -1.0), (-1.0, -1.0)),
            ((-1.0, -1.0), (-1.0, 1.0)),
            ((-1.0, 1.0), (1.0, 1.0)),
            ((1.0, 1.0), (1.0, 0.0)),
            ((1.0, 0.0), (-1.0, 0.0)),
        ],
        '7' => &[((-1.0, -1.0), (1.0, -1.0)), ((1.0, -1.0), (0.0, 1.0))],
        '8' => &[
            ((-1.0, -1.0), (1.0, -1.0)),
            ((1.0, -1.0), (1.0, 1.0)),
            ((1.0, 1.0), (-1.0, 1.0)),
            ((-1.0, 1.0), (-1.0, -1.0)),
            ((-1.0, 0.0), (1.0, 0.0)),
        ],
        '9' => &[
            ((1.0, 0.0), (-1.0, 0.0)),
            ((-1.0, 0.0), (-1.0, -1.0)),
            ((-1.0, -1.0), (1.0, -1.0)),
            ((1.0, -1.0), (1.0, 1.0)),
        ],
        '-' => &[((-0.7, 0.0), (0.7, 0.0))],
        '.' => &[((0.0, 0.8), (0.0, 1.0))],
        _ => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_glyphs_have_strokes() {
        for ch in "ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789-.".chars() {
            assert!(!glyph_strokes(ch).is_empty(), "no strokes for {ch:?}");
        }
    }

    #[test]
    fn test_unknown_glyphs_are_blank() {
        assert!(glyph_strokes(' ').is_empty());
        assert!(glyph_strokes('@').is_empty());
    }

    #[test]
    fn test_draw_text_marks_canvas() {
        let mut figure = Figure::new().unwrap();
        draw_text(&mut figure, 500.0, 400.0, "X", 40.0, Color::opaque(0, 0, 0));
        let touched = figure
            .pixels()
            .chunks_exact(4)
            .any(|p| p[0] < 250 && p[3] == 255);
        assert!(touched);
    }
}
