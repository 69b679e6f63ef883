//! Glyph-set inclusion flags
//!
//! Each flag mirrors a Cargo feature so downstream firmware can branch on
//! what was actually compiled in. The small sets map to `embedded-graphics`
//! bundled tables; the large numeric and 7-segment sets are flash-budget
//! toggles for firmware that carries its own raw glyph data.

#[cfg(any(feature = "font-glcd", feature = "font-16px", feature = "font-26px"))]
use embedded_graphics::mono_font::MonoFont;

#[cfg(feature = "font-glcd")]
use embedded_graphics::mono_font::ascii::FONT_5X8;
#[cfg(feature = "font-16px")]
use embedded_graphics::mono_font::ascii::FONT_9X15;
#[cfg(feature = "font-26px")]
use embedded_graphics::mono_font::ascii::FONT_10X20;

/// Standard 5x7-class system font
pub const GLCD: bool = cfg!(feature = "font-glcd");
/// Small 16 pixel font
pub const FONT_16PX: bool = cfg!(feature = "font-16px");
/// Medium 26 pixel font
pub const FONT_26PX: bool = cfg!(feature = "font-26px");
/// Large 48 pixel numeric font
pub const FONT_48PX_NUMERIC: bool = cfg!(feature = "font-48px-numeric");
/// 7 segment 48 pixel font
pub const FONT_7SEG: bool = cfg!(feature = "font-7seg");
/// Large 75 pixel font
pub const FONT_75PX: bool = cfg!(feature = "font-75px");
/// Vector FreeFonts
pub const FREE_FONTS: bool = cfg!(feature = "free-fonts");

/// Anti-aliased font rendering
pub const SMOOTH_FONT: bool = cfg!(feature = "smooth-font");

/// Bundled table for the GLCD set
#[cfg(feature = "font-glcd")]
pub const GLCD_FONT: MonoFont = FONT_5X8;

/// Bundled table for the small set
#[cfg(feature = "font-16px")]
pub const SMALL_FONT: MonoFont = FONT_9X15;

/// Bundled table for the medium set
#[cfg(feature = "font-26px")]
pub const MEDIUM_FONT: MonoFont = FONT_10X20;

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn bundled_tables_match_their_flags() {
        #[cfg(feature = "font-glcd")]
        {
            assert!(GLCD);
            assert_eq!(GLCD_FONT.character_size.width, 5);
        }
        #[cfg(feature = "font-16px")]
        {
            assert!(FONT_16PX);
            assert_eq!(SMALL_FONT.character_size.height, 15);
        }
        #[cfg(feature = "font-26px")]
        {
            assert!(FONT_26PX);
            assert_eq!(MEDIUM_FONT.character_size.height, 20);
        }
    }

    #[test]
    fn flags_are_independent_toggles() {
        // Each flag only reflects its own feature.
        assert_eq!(GLCD, cfg!(feature = "font-glcd"));
        assert_eq!(FONT_48PX_NUMERIC, cfg!(feature = "font-48px-numeric"));
        assert_eq!(FONT_7SEG, cfg!(feature = "font-7seg"));
        assert_eq!(FONT_75PX, cfg!(feature = "font-75px"));
        assert_eq!(FREE_FONTS, cfg!(feature = "free-fonts"));
        assert_eq!(SMOOTH_FONT, cfg!(feature = "smooth-font"));
    }
}
