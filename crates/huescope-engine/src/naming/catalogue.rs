//! The fixed named-color catalogue.
//!
//! Declaration order is significant: nearest-name ties resolve to the
//! earliest entry. The first block holds everyday garment and paint names,
//! followed by the CSS named colors in alphabetical order.

use super::NamedColor;
use crate::color::Color;

const fn named(name: &'static str, r: u8, g: u8, b: u8) -> NamedColor {
    NamedColor {
        name,
        color: Color::new(r, g, b),
    }
}

/// Number of entries in [`CATALOGUE`].
pub const CATALOGUE_LEN: usize = 144;

/// Every named color, in declaration order.
pub static CATALOGUE: [NamedColor; CATALOGUE_LEN] = [
    named("Black", 0x00, 0x00, 0x00),
    named("White", 0xff, 0xff, 0xff),
    named("Beige", 0xf5, 0xf5, 0xdc),
    named("Gray", 0x80, 0x80, 0x80),
    named("Navy", 0x00, 0x00, 0x80),
    named("Denim", 0x15, 0x60, 0xbd),
    named("Coral", 0xff, 0x7f, 0x50),
    named("Mustard", 0xff, 0xdb, 0x58),
    named("Olive", 0x80, 0x80, 0x00),
    named("Emerald", 0x50, 0xc8, 0x78),
    named("Plum", 0x8e, 0x45, 0x85),
    named("Teal", 0x00, 0x80, 0x80),
    named("Maroon", 0x80, 0x00, 0x00),
    named("Gold", 0xff, 0xd7, 0x00),
    named("Tan", 0xd2, 0xb4, 0x8c),
    named("Cream", 0xff, 0xfd, 0xd0),
    named("Rust", 0xb7, 0x41, 0x0e),
    named("Blush", 0xde, 0x5d, 0x83),
    named("Sky Blue", 0x87, 0xce, 0xeb),
    named("Khaki", 0xc3, 0xb0, 0x91),
    named("AliceBlue", 0xf0, 0xf8, 0xff),
    named("AntiqueWhite", 0xfa, 0xeb, 0xd7),
    named("Aqua", 0x00, 0xff, 0xff),
    named("Aquamarine", 0x7f, 0xff, 0xd4),
    named("Azure", 0xf0, 0xff, 0xff),
    named("Bisque", 0xff, 0xe4, 0xc4),
    named("BlanchedAlmond", 0xff, 0xeb, 0xcd),
    named("Blue", 0x00, 0x00, 0xff),
    named("BlueViolet", 0x8a, 0x2b, 0xe2),
    named("Brown", 0xa5, 0x2a, 0x2a),
    named("BurlyWood", 0xde, 0xb8, 0x87),
    named("CadetBlue", 0x5f, 0x9e, 0xa0),
    named("Chartreuse", 0x7f, 0xff, 0x00),
    named("Chocolate", 0xd2, 0x69, 0x1e),
    named("CornflowerBlue", 0x64, 0x95, 0xed),
    named("Crimson", 0xdc, 0x14, 0x3c),
    named("Cyan", 0x00, 0xff, 0xff),
    named("DarkBlue", 0x00, 0x00, 0x8b),
    named("DarkCyan", 0x00, 0x8b, 0x8b),
    named("DarkGoldenRod", 0xb8, 0x86, 0x0b),
    named("DarkGray", 0xa9, 0xa9, 0xa9),
    named("DarkGreen", 0x00, 0x64, 0x00),
    named("DarkKhaki", 0xbd, 0xb7, 0x6b),
    named("DarkMagenta", 0x8b, 0x00, 0x8b),
    named("DarkOliveGreen", 0x55, 0x6b, 0x2f),
    named("DarkOrange", 0xff, 0x8c, 0x00),
    named("DarkOrchid", 0x99, 0x32, 0xcc),
    named("DarkRed", 0x8b, 0x00, 0x00),
    named("DarkSalmon", 0xe9, 0x96, 0x7a),
    named("DarkSeaGreen", 0x8f, 0xbc, 0x8f),
    named("DarkSlateBlue", 0x48, 0x3d, 0x8b),
    named("DarkSlateGray", 0x2f, 0x4f, 0x4f),
    named("DarkTurquoise", 0x00, 0xce, 0xd1),
    named("DarkViolet", 0x94, 0x00, 0xd3),
    named("DeepPink", 0xff, 0x14, 0x93),
    named("DeepSkyBlue", 0x00, 0xbf, 0xff),
    named("DimGray", 0x69, 0x69, 0x69),
    named("DodgerBlue", 0x1e, 0x90, 0xff),
    named("FireBrick", 0xb2, 0x22, 0x22),
    named("ForestGreen", 0x22, 0x8b, 0x22),
    named("Fuchsia", 0xff, 0x00, 0xff),
    named("Gainsboro", 0xdc, 0xdc, 0xdc),
    named("GhostWhite", 0xf8, 0xf8, 0xff),
    named("GoldenRod", 0xda, 0xa5, 0x20),
    named("Green", 0x00, 0x80, 0x00),
    named("GreenYellow", 0xad, 0xff, 0x2f),
    named("HoneyDew", 0xf0, 0xff, 0xf0),
    named("HotPink", 0xff, 0x69, 0xb4),
    named("IndianRed", 0xcd, 0x5c, 0x5c),
    named("Indigo", 0x4b, 0x00, 0x82),
    named("Ivory", 0xff, 0xff, 0xf0),
    named("Lavender", 0xe6, 0xe6, 0xfa),
    named("LavenderBlush", 0xff, 0xf0, 0xf5),
    named("LawnGreen", 0x7c, 0xfc, 0x00),
    named("LemonChiffon", 0xff, 0xfa, 0xcd),
    named("LightBlue", 0xad, 0xd8, 0xe6),
    named("LightCoral", 0xf0, 0x80, 0x80),
    named("LightCyan", 0xe0, 0xff, 0xff),
    named("LightGoldenRodYellow", 0xfa, 0xfa, 0xd2),
    named("LightGray", 0xd3, 0xd3, 0xd3),
    named("LightGreen", 0x90, 0xee, 0x90),
    named("LightPink", 0xff, 0xb6, 0xc1),
    named("LightSalmon", 0xff, 0xa0, 0x7a),
    named("LightSeaGreen", 0x20, 0xb2, 0xaa),
    named("LightSkyBlue", 0x87, 0xce, 0xfa),
    named("LightSlateGray", 0x77, 0x88, 0x99),
    named("LightSteelBlue", 0xb0, 0xc4, 0xde),
    named("LightYellow", 0xff, 0xff, 0xe0),
    named("Lime", 0x00, 0xff, 0x00),
    named("LimeGreen", 0x32, 0xcd, 0x32),
    named("Linen", 0xfa, 0xf0, 0xe6),
    named("Magenta", 0xff, 0x00, 0xff),
    named("MediumAquaMarine", 0x66, 0xcd, 0xaa),
    named("MediumBlue", 0x00, 0x00, 0xcd),
    named("MediumOrchid", 0xba, 0x55, 0xd3),
    named("MediumPurple", 0x93, 0x70, 0xdb),
    named("MediumSeaGreen", 0x3c, 0xb3, 0x71),
    named("MediumSlateBlue", 0x7b, 0x68, 0xee),
    named("MediumSpringGreen", 0x00, 0xfa, 0x9a),
    named("MediumTurquoise", 0x48, 0xd1, 0xcc),
    named("MediumVioletRed", 0xc7, 0x15, 0x85),
    named("MidnightBlue", 0x19, 0x19, 0x70),
    named("MintCream", 0xf5, 0xff, 0xfa),
    named("MistyRose", 0xff, 0xe4, 0xe1),
    named("Moccasin", 0xff, 0xe4, 0xb5),
    named("NavajoWhite", 0xff, 0xde, 0xad),
    named("OldLace", 0xfd, 0xf5, 0xe6),
    named("OliveDrab", 0x6b, 0x8e, 0x23),
    named("Orange", 0xff, 0xa5, 0x00),
    named("OrangeRed", 0xff, 0x45, 0x00),
    named("Orchid", 0xda, 0x70, 0xd6),
    named("PaleGoldenRod", 0xee, 0xe8, 0xaa),
    named("PaleGreen", 0x98, 0xfb, 0x98),
    named("PaleTurquoise", 0xaf, 0xee, 0xee),
    named("PaleVioletRed", 0xdb, 0x70, 0x93),
    named("PapayaWhip", 0xff, 0xef, 0xd5),
    named("PeachPuff", 0xff, 0xda, 0xb9),
    named("Peru", 0xcd, 0x85, 0x3f),
    named("Pink", 0xff, 0xc0, 0xcb),
    named("PowderBlue", 0xb0, 0xe0, 0xe6),
    named("Purple", 0x80, 0x00, 0x80),
    named("RebeccaPurple", 0x66, 0x33, 0x99),
    named("Red", 0xff, 0x00, 0x00),
    named("RosyBrown", 0xbc, 0x8f, 0x8f),
    named("RoyalBlue", 0x41, 0x69, 0xe1),
    named("SaddleBrown", 0x8b, 0x45, 0x13),
    named("Salmon", 0xfa, 0x80, 0x72),
    named("SandyBrown", 0xf4, 0xa4, 0x60),
    named("SeaGreen", 0x2e, 0x8b, 0x57),
    named("SeaShell", 0xff, 0xf5, 0xee),
    named("Sienna", 0xa0, 0x52, 0x2d),
    named("Silver", 0xc0, 0xc0, 0xc0),
    named("SlateBlue", 0x6a, 0x5a, 0xcd),
    named("SlateGray", 0x70, 0x80, 0x90),
    named("Snow", 0xff, 0xfa, 0xfa),
    named("SpringGreen", 0x00, 0xff, 0x7f),
    named("SteelBlue", 0x46, 0x82, 0xb4),
    named("Thistle", 0xd8, 0xbf, 0xd8),
    named("Tomato", 0xff, 0x63, 0x47),
    named("Turquoise", 0x40, 0xe0, 0xd0),
    named("Violet", 0xee, 0x82, 0xee),
    named("Wheat", 0xf5, 0xde, 0xb3),
    named("Yellow", 0xff, 0xff, 0x00),
    named("YellowGreen", 0x9a, 0xcd, 0x32),
];
