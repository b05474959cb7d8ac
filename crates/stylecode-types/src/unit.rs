//! Unit tags.
//!
//! Each unit has a stable 32-bit code that is written verbatim into style
//! bytecode. Codes are grouped by class bits so a class test is a mask.

const CLASS_PERCENT: u32 = 1 << 8;
const CLASS_ANGLE: u32 = 1 << 9;
const CLASS_TIME: u32 = 1 << 10;
const CLASS_FREQ: u32 = 1 << 11;
const CLASS_RESOLUTION: u32 = 1 << 12;
const CLASS_FLEX: u32 = 1 << 13;
const CLASS_NUMBER: u32 = 1 << 14;

/// A CSS unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum Unit {
    Px = 0x00,
    Ex = 0x01,
    Em = 0x02,
    In = 0x03,
    Cm = 0x04,
    Mm = 0x05,
    Pt = 0x06,
    Pc = 0x07,
    Q = 0x08,
    Ch = 0x09,
    Rem = 0x0a,
    Vw = 0x0b,
    Vh = 0x0c,
    Vmin = 0x0d,
    Vmax = 0x0e,
    Percent = CLASS_PERCENT,
    Deg = CLASS_ANGLE,
    Grad = CLASS_ANGLE | 0x01,
    Rad = CLASS_ANGLE | 0x02,
    Turn = CLASS_ANGLE | 0x03,
    Ms = CLASS_TIME,
    S = CLASS_TIME | 0x01,
    Hz = CLASS_FREQ,
    Khz = CLASS_FREQ | 0x01,
    Dpi = CLASS_RESOLUTION,
    Dpcm = CLASS_RESOLUTION | 0x01,
    Dppx = CLASS_RESOLUTION | 0x02,
    Fr = CLASS_FLEX,
    Number = CLASS_NUMBER,
}

/// The class a unit belongs to. Property grammars accept or reject whole
/// classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitClass {
    Length,
    Percentage,
    Angle,
    Time,
    Frequency,
    Resolution,
    Flex,
    Number,
}

impl Unit {
    const ALL: [Unit; 29] = [
        Unit::Px,
        Unit::Ex,
        Unit::Em,
        Unit::In,
        Unit::Cm,
        Unit::Mm,
        Unit::Pt,
        Unit::Pc,
        Unit::Q,
        Unit::Ch,
        Unit::Rem,
        Unit::Vw,
        Unit::Vh,
        Unit::Vmin,
        Unit::Vmax,
        Unit::Percent,
        Unit::Deg,
        Unit::Grad,
        Unit::Rad,
        Unit::Turn,
        Unit::Ms,
        Unit::S,
        Unit::Hz,
        Unit::Khz,
        Unit::Dpi,
        Unit::Dpcm,
        Unit::Dppx,
        Unit::Fr,
        Unit::Number,
    ];

    /// The bytecode word for this unit.
    pub const fn to_word(self) -> u32 {
        self as u32
    }

    /// Decode a bytecode word.
    pub fn from_word(word: u32) -> Option<Unit> {
        Self::ALL.iter().copied().find(|u| u.to_word() == word)
    }

    pub fn class(self) -> UnitClass {
        let code = self.to_word();
        if code & CLASS_NUMBER != 0 {
            UnitClass::Number
        } else if code & CLASS_FLEX != 0 {
            UnitClass::Flex
        } else if code & CLASS_RESOLUTION != 0 {
            UnitClass::Resolution
        } else if code & CLASS_FREQ != 0 {
            UnitClass::Frequency
        } else if code & CLASS_TIME != 0 {
            UnitClass::Time
        } else if code & CLASS_ANGLE != 0 {
            UnitClass::Angle
        } else if code & CLASS_PERCENT != 0 {
            UnitClass::Percentage
        } else {
            UnitClass::Length
        }
    }

    /// `true` for lengths and percentages.
    pub fn is_length_percentage(self) -> bool {
        matches!(self.class(), UnitClass::Length | UnitClass::Percentage)
    }

    /// Look up a unit suffix, ignoring ASCII case.
    pub fn from_keyword(keyword: &str) -> Option<Unit> {
        let unit = match keyword.to_ascii_lowercase().as_str() {
            "px" => Unit::Px,
            "ex" => Unit::Ex,
            "em" => Unit::Em,
            "in" => Unit::In,
            "cm" => Unit::Cm,
            "mm" => Unit::Mm,
            "pt" => Unit::Pt,
            "pc" => Unit::Pc,
            "q" => Unit::Q,
            "ch" => Unit::Ch,
            "rem" => Unit::Rem,
            "vw" => Unit::Vw,
            "vh" => Unit::Vh,
            "vmin" => Unit::Vmin,
            "vmax" => Unit::Vmax,
            "deg" => Unit::Deg,
            "grad" => Unit::Grad,
            "rad" => Unit::Rad,
            "turn" => Unit::Turn,
            "ms" => Unit::Ms,
            "s" => Unit::S,
            "hz" => Unit::Hz,
            "khz" => Unit::Khz,
            "dpi" => Unit::Dpi,
            "dpcm" => Unit::Dpcm,
            "dppx" => Unit::Dppx,
            "fr" => Unit::Fr,
            _ => return None,
        };
        Some(unit)
    }

    /// Suffix used when printing a value. Empty for [`Unit::Number`].
    pub const fn suffix(self) -> &'static str {
        match self {
            Unit::Px => "px",
            Unit::Ex => "ex",
            Unit::Em => "em",
            Unit::In => "in",
            Unit::Cm => "cm",
            Unit::Mm => "mm",
            Unit::Pt => "pt",
            Unit::Pc => "pc",
            Unit::Q => "q",
            Unit::Ch => "ch",
            Unit::Rem => "rem",
            Unit::Vw => "vw",
            Unit::Vh => "vh",
            Unit::Vmin => "vmin",
            Unit::Vmax => "vmax",
            Unit::Percent => "%",
            Unit::Deg => "deg",
            Unit::Grad => "grad",
            Unit::Rad => "rad",
            Unit::Turn => "turn",
            Unit::Ms => "ms",
            Unit::S => "s",
            Unit::Hz => "hz",
            Unit::Khz => "khz",
            Unit::Dpi => "dpi",
            Unit::Dpcm => "dpcm",
            Unit::Dppx => "dppx",
            Unit::Fr => "fr",
            Unit::Number => "",
        }
    }
}
