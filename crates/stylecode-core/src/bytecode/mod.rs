//! Style bytecode.
//!
//! A declaration is one OPV header word followed by zero or more operand
//! words. Operand words carry no type tag: their count and meaning follow
//! from the property id and value enum in the header, see [`operand_len`].
//!
//! OPV layout:
//!
//! ```text
//! 31              18 17      10 9        0
//! +-----------------+----------+----------+
//! |   value enum    |  flags   | property |
//! +-----------------+----------+----------+
//! ```
//!
//! Flag bit 0 marks `!important`; flag bits 1-3 hold a [`FlagValue`].

pub mod opcodes;

use stylecode_types::{CssError, Fixed, Unit};

use opcodes::*;

/// One bytecode word.
pub type CodeWord = u32;

/// Every longhand the engine knows. The discriminant is the id stored in
/// the OPV header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum PropertyId {
    AlignContent = 0,
    BackgroundImage = 1,
    ColumnGap = 2,
    GridAutoFlow = 3,
    GridColumnEnd = 4,
    GridColumnStart = 5,
    GridRowEnd = 6,
    GridRowStart = 7,
    GridTemplateColumns = 8,
    GridTemplateRows = 9,
    JustifyContent = 10,
    ObjectFit = 11,
    ObjectPosition = 12,
    RowGap = 13,
    Transform = 14,
}

impl PropertyId {
    pub const COUNT: usize = 15;

    pub const ALL: [PropertyId; Self::COUNT] = [
        PropertyId::AlignContent,
        PropertyId::BackgroundImage,
        PropertyId::ColumnGap,
        PropertyId::GridAutoFlow,
        PropertyId::GridColumnEnd,
        PropertyId::GridColumnStart,
        PropertyId::GridRowEnd,
        PropertyId::GridRowStart,
        PropertyId::GridTemplateColumns,
        PropertyId::GridTemplateRows,
        PropertyId::JustifyContent,
        PropertyId::ObjectFit,
        PropertyId::ObjectPosition,
        PropertyId::RowGap,
        PropertyId::Transform,
    ];

    pub fn from_index(index: u32) -> Option<PropertyId> {
        Self::ALL.get(usize::try_from(index).ok()?).copied()
    }

    pub const fn index(self) -> usize {
        self as usize
    }

    /// The CSS property name.
    pub const fn name(self) -> &'static str {
        match self {
            PropertyId::AlignContent => "align-content",
            PropertyId::BackgroundImage => "background-image",
            PropertyId::ColumnGap => "column-gap",
            PropertyId::GridAutoFlow => "grid-auto-flow",
            PropertyId::GridColumnEnd => "grid-column-end",
            PropertyId::GridColumnStart => "grid-column-start",
            PropertyId::GridRowEnd => "grid-row-end",
            PropertyId::GridRowStart => "grid-row-start",
            PropertyId::GridTemplateColumns => "grid-template-columns",
            PropertyId::GridTemplateRows => "grid-template-rows",
            PropertyId::JustifyContent => "justify-content",
            PropertyId::ObjectFit => "object-fit",
            PropertyId::ObjectPosition => "object-position",
            PropertyId::RowGap => "row-gap",
            PropertyId::Transform => "transform",
        }
    }
}

/// CSS-wide keywords, encoded in the OPV flags instead of a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlagValue {
    Inherit = 1,
    Initial = 2,
    Unset = 3,
    Revert = 4,
}

impl FlagValue {
    /// Recognize `inherit`, `initial`, `unset` or `revert`.
    pub fn from_keyword(keyword: &str) -> Option<FlagValue> {
        [
            ("inherit", FlagValue::Inherit),
            ("initial", FlagValue::Initial),
            ("unset", FlagValue::Unset),
            ("revert", FlagValue::Revert),
        ]
        .into_iter()
        .find(|(name, _)| keyword.eq_ignore_ascii_case(name))
        .map(|(_, flag)| flag)
    }

    /// The flag byte for this keyword.
    pub const fn flags(self) -> u8 {
        (self as u8) << 1
    }
}

/// Flag byte bit for `!important`.
pub const FLAG_IMPORTANT: u8 = 0x1;

/// An OPV header word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Opv(CodeWord);

impl Opv {
    pub fn new(property: PropertyId, flags: u8, value: u16) -> Self {
        Opv(property as u32 | (u32::from(flags) << 10) | ((u32::from(value) & 0x3fff) << 18))
    }

    pub const fn from_word(word: CodeWord) -> Self {
        Opv(word)
    }

    pub const fn word(self) -> CodeWord {
        self.0
    }

    /// The property this declaration sets.
    ///
    /// # Panics
    ///
    /// On an unknown property id, which only a corrupted buffer can hold.
    pub fn property(self) -> PropertyId {
        PropertyId::from_index(self.0 & 0x3ff)
            .unwrap_or_else(|| malformed(format_args!("unknown property id in {:#010x}", self.0)))
    }

    pub const fn flags(self) -> u8 {
        ((self.0 >> 10) & 0xff) as u8
    }

    pub const fn is_important(self) -> bool {
        self.flags() & FLAG_IMPORTANT != 0
    }

    pub fn flag_value(self) -> Option<FlagValue> {
        match (self.flags() >> 1) & 0x7 {
            1 => Some(FlagValue::Inherit),
            2 => Some(FlagValue::Initial),
            3 => Some(FlagValue::Unset),
            4 => Some(FlagValue::Revert),
            _ => None,
        }
    }

    pub fn has_flag_value(self) -> bool {
        self.flag_value().is_some()
    }

    pub const fn value(self) -> u16 {
        (self.0 >> 18) as u16
    }

    pub const fn with_important(self) -> Self {
        Opv(self.0 | ((FLAG_IMPORTANT as u32) << 10))
    }
}

#[track_caller]
pub(crate) fn malformed(what: std::fmt::Arguments<'_>) -> ! {
    panic!("malformed style bytecode: {what}")
}

/// Number of operand words following `opv`. `operands` starts right after
/// the header and is only consulted for counted lists.
///
/// # Panics
///
/// If a counted list runs past the end of `operands`.
pub fn operand_len(opv: Opv, operands: &[CodeWord]) -> usize {
    if opv.has_flag_value() {
        return 0;
    }
    let value = opv.value();
    let word_at = |i: usize| {
        operands
            .get(i)
            .copied()
            .unwrap_or_else(|| malformed(format_args!("{} list truncated", opv.property().name())))
    };
    match opv.property() {
        PropertyId::AlignContent
        | PropertyId::JustifyContent
        | PropertyId::GridAutoFlow
        | PropertyId::ObjectFit => 0,
        PropertyId::BackgroundImage => usize::from(value == BACKGROUND_IMAGE_URI),
        PropertyId::RowGap | PropertyId::ColumnGap => {
            if value == GAP_SET {
                2
            } else {
                0
            }
        },
        PropertyId::GridRowStart
        | PropertyId::GridRowEnd
        | PropertyId::GridColumnStart
        | PropertyId::GridColumnEnd => usize::from(value == GRID_LINE_SET),
        PropertyId::GridTemplateRows | PropertyId::GridTemplateColumns => {
            if value == GRID_TEMPLATE_SET {
                1 + 2 * word_at(0) as usize
            } else {
                0
            }
        },
        PropertyId::ObjectPosition => {
            let horz = value & OBJECT_POSITION_HORZ_MASK == OBJECT_POSITION_HORZ_SET;
            let vert = value & OBJECT_POSITION_VERT_MASK == OBJECT_POSITION_VERT_SET;
            2 * usize::from(horz) + 2 * usize::from(vert)
        },
        PropertyId::Transform => {
            if value != TRANSFORM_FUNCTIONS {
                return 0;
            }
            let mut len = 1;
            for _ in 0..word_at(0) {
                len += transform_fn_len(word_at(len));
            }
            len
        },
    }
}

/// Append-only buffer of bytecode words.
///
/// Appends reserve with `try_reserve`, so an allocation failure leaves the
/// buffer exactly as it was. An optional word limit turns growth past that
/// size into [`CssError::NoMem`] as well.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleBuffer {
    words: Vec<CodeWord>,
    limit: Option<usize>,
}

impl StyleBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limit(limit: Option<usize>) -> Self {
        Self {
            words: Vec::new(),
            limit,
        }
    }

    /// The limit this buffer enforces. Nested buffers inherit it.
    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Current write offset.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn words(&self) -> &[CodeWord] {
        &self.words
    }

    fn reserve(&mut self, additional: usize) -> Result<(), CssError> {
        if let Some(limit) = self.limit
            && self.words.len() + additional > limit
        {
            log::warn!("style buffer limit of {limit} words reached");
            return Err(CssError::NoMem);
        }
        self.words.try_reserve(additional)?;
        Ok(())
    }

    pub fn append_opv(&mut self, property: PropertyId, flags: u8, value: u16) -> Result<(), CssError> {
        self.append(Opv::new(property, flags, value).word())
    }

    pub fn append(&mut self, word: CodeWord) -> Result<(), CssError> {
        self.reserve(1)?;
        self.words.push(word);
        Ok(())
    }

    /// Append several words; either all of them land or none do.
    pub fn vappend(&mut self, words: &[CodeWord]) -> Result<(), CssError> {
        self.reserve(words.len())?;
        self.words.extend_from_slice(words);
        Ok(())
    }

    /// Append a fixed-point value and its unit.
    pub fn append_length(&mut self, value: Fixed, unit: Unit) -> Result<(), CssError> {
        self.vappend(&[value.raw() as u32, unit.to_word()])
    }

    /// Overwrite an already written word (placeholder back-patching).
    ///
    /// # Panics
    ///
    /// If `offset` is not below [`len`](Self::len).
    pub fn set(&mut self, offset: usize, word: CodeWord) {
        self.words[offset] = word;
    }

    /// Drop everything past `len`.
    pub fn truncate(&mut self, len: usize) {
        self.words.truncate(len);
    }

    /// Append every word of `other`.
    pub fn merge(&mut self, other: &StyleBuffer) -> Result<(), CssError> {
        self.vappend(&other.words)
    }

    /// Mark every declaration in the buffer `!important`.
    pub fn make_important(&mut self) {
        let mut pos = 0;
        while pos < self.words.len() {
            let opv = Opv::from_word(self.words[pos]);
            let len = operand_len(opv, &self.words[pos + 1..]);
            self.words[pos] = opv.with_important().word();
            pos += 1 + len;
        }
    }

    /// Walk the buffer one declaration at a time.
    pub fn declarations(&self) -> Declarations<'_> {
        Declarations {
            words: &self.words,
            pos: 0,
        }
    }
}

/// Iterator returned by [`StyleBuffer::declarations`].
pub struct Declarations<'a> {
    words: &'a [CodeWord],
    pos: usize,
}

impl<'a> Iterator for Declarations<'a> {
    type Item = (Opv, &'a [CodeWord]);

    fn next(&mut self) -> Option<Self::Item> {
        let opv = Opv::from_word(*self.words.get(self.pos)?);
        let rest = &self.words[self.pos + 1..];
        let len = operand_len(opv, rest);
        let operands = rest
            .get(..len)
            .unwrap_or_else(|| malformed(format_args!("{} operands truncated", opv.property().name())));
        self.pos += 1 + len;
        Some((opv, operands))
    }
}

/// Sequential reader used by the cascade to decode operands.
pub struct BytecodeReader<'a> {
    words: &'a [CodeWord],
    pos: usize,
}

impl<'a> BytecodeReader<'a> {
    pub fn new(words: &'a [CodeWord]) -> Self {
        Self { words, pos: 0 }
    }

    pub fn at_end(&self) -> bool {
        self.pos >= self.words.len()
    }

    /// # Panics
    ///
    /// When the stream is exhausted.
    #[track_caller]
    pub fn next_word(&mut self) -> CodeWord {
        let word = self
            .words
            .get(self.pos)
            .copied()
            .unwrap_or_else(|| malformed(format_args!("read past end at word {}", self.pos)));
        self.pos += 1;
        word
    }

    #[track_caller]
    pub fn next_fixed(&mut self) -> Fixed {
        Fixed::from_raw(self.next_word() as i32)
    }

    #[track_caller]
    pub fn next_unit(&mut self) -> Unit {
        let word = self.next_word();
        Unit::from_word(word).unwrap_or_else(|| malformed(format_args!("unknown unit {word:#x}")))
    }

    /// A count operand.
    #[track_caller]
    pub fn next_count(&mut self) -> usize {
        self.next_word() as usize
    }
}

/// Strings referenced from bytecode operands (resolved URLs).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StringTable {
    strings: Vec<String>,
}

impl StringTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Intern `s` and return its index. Equal strings share an index.
    pub fn add(&mut self, s: &str) -> Result<u32, CssError> {
        if let Some(index) = self.strings.iter().position(|existing| existing == s) {
            return Ok(index as u32);
        }
        self.strings.try_reserve(1)?;
        let mut owned = String::new();
        owned.try_reserve_exact(s.len())?;
        owned.push_str(s);
        self.strings.push(owned);
        Ok((self.strings.len() - 1) as u32)
    }

    pub fn get(&self, index: u32) -> Option<&str> {
        self.strings.get(index as usize).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.strings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }
}
