//! Text Placement
//!
//! Pure layout math for text directives. Measuring a string needs a font, so
//! that part sits behind the [`TextMeasure`] capability that the rendering
//! sink provides.

use crate::draw_plan::TextPosition;

/// Rendered size of a string in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextSize {
    pub width: u32,
    pub height: u32,
}

/// Destination rectangle for a rendered string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub x: i32,
    pub y: i32,
    pub w: u32,
    pub h: u32,
}

/// Anything that can tell how big a string renders
///
/// Implemented by the SDL2 frontend on top of a loaded TTF font.
pub trait TextMeasure {
    fn measure(&self, text: &str) -> Result<TextSize, String>;
}

/// Centers a measured string horizontally in the window
///
/// Text wider than the window gets a negative `x` and overhangs both edges
/// evenly.
pub fn center_horizontally(size: TextSize, window_width: u32, y: i32) -> Placement {
    let x = (window_width as i64 - size.width as i64) / 2;
    Placement {
        x: x as i32,
        y,
        w: size.width,
        h: size.height,
    }
}

/// Measures `text` and resolves a [`TextPosition`] into a placement
pub fn place<M: TextMeasure + ?Sized>(
    measure: &M,
    text: &str,
    position: TextPosition,
    window_width: u32,
) -> Result<Placement, String> {
    let size = measure.measure(text)?;
    Ok(match position {
        TextPosition::Centered { y } => center_horizontally(size, window_width, y),
        TextPosition::At { x, y } => Placement {
            x,
            y,
            w: size.width,
            h: size.height,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Every character is 10x20 pixels
    struct FixedWidth;

    impl TextMeasure for FixedWidth {
        fn measure(&self, text: &str) -> Result<TextSize, String> {
            Ok(TextSize {
                width: text.chars().count() as u32 * 10,
                height: 20,
            })
        }
    }

    #[test]
    fn test_center_horizontally() {
        let size = TextSize {
            width: 100,
            height: 24,
        };
        let placement = center_horizontally(size, 500, 200);

        assert_eq!(
            placement,
            Placement {
                x: 200,
                y: 200,
                w: 100,
                h: 24
            }
        );
    }

    #[test]
    fn test_center_wider_than_window() {
        let size = TextSize {
            width: 600,
            height: 24,
        };
        assert_eq!(center_horizontally(size, 500, 0).x, -50);
    }

    #[test]
    fn test_place_centered_uses_measurement() {
        let placement = place(&FixedWidth, "Play", TextPosition::Centered { y: 250 }, 500).unwrap();

        assert_eq!(placement.x, 230);
        assert_eq!(placement.y, 250);
        assert_eq!((placement.w, placement.h), (40, 20));
    }

    #[test]
    fn test_place_absolute_keeps_point() {
        let placement = place(&FixedWidth, "Exit", TextPosition::At { x: 12, y: 34 }, 500).unwrap();

        assert_eq!((placement.x, placement.y), (12, 34));
        assert_eq!(placement.w, 40);
    }
}
