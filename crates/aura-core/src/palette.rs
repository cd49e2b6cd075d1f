//! Color sets for the two page themes.
//!
//! Colors are plain sRGB triples; the frontend formats them for its canvas.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub particle: [u8; 3],
    pub link: [u8; 3],
    pub ray_labeled: [u8; 3],
    pub ray_plain: [u8; 3],
    pub glyph: [u8; 3],
    pub label_text: [u8; 3],
    pub center_marker: [u8; 3],
}

impl Palette {
    /// Dark strokes for a light page background.
    pub const fn light() -> Self {
        Self {
            particle: [51, 65, 85],
            link: [100, 116, 139],
            ray_labeled: [30, 41, 59],
            ray_plain: [148, 163, 184],
            glyph: [30, 41, 59],
            label_text: [15, 23, 42],
            center_marker: [15, 23, 42],
        }
    }

    /// Light strokes for a dark page background.
    pub const fn dark() -> Self {
        Self {
            particle: [226, 232, 240],
            link: [148, 163, 184],
            ray_labeled: [241, 245, 249],
            ray_plain: [71, 85, 105],
            glyph: [241, 245, 249],
            label_text: [248, 250, 252],
            center_marker: [248, 250, 252],
        }
    }

    #[inline]
    pub fn for_dark(dark: bool) -> Self {
        if dark {
            Self::dark()
        } else {
            Self::light()
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::light()
    }
}
