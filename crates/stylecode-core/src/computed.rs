//! Computed value types.
//!
//! A [`ComputedStyle`] holds one [`Slot`] per property: either a decided
//! value or a pending `inherit` that composition against the parent style
//! resolves. List-valued properties own their storage outright, so copying
//! or composing a style always deep-copies, and every clone goes through
//! [`TryClone`] so allocation failure surfaces as [`CssError::NoMem`].

use std::fmt;

use serde::{Serialize, Serializer};
use stylecode_types::{CssError, Fixed, Unit};

use crate::bytecode::PropertyId;
use crate::select::handler;

// -----------------------------------------------------------------------
// Slots and fallible cloning
// -----------------------------------------------------------------------

/// The cascaded state of one property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Slot<T> {
    /// Take the parent's value during composition.
    Inherit,
    Set(T),
}

impl<T> Slot<T> {
    pub fn is_inherit(&self) -> bool {
        matches!(self, Slot::Inherit)
    }

    /// The decided value, if any.
    pub fn value(&self) -> Option<&T> {
        match self {
            Slot::Inherit => None,
            Slot::Set(value) => Some(value),
        }
    }
}

/// An unset slot holds the property's initial value.
impl<T: Default> Default for Slot<T> {
    fn default() -> Self {
        Slot::Set(T::default())
    }
}

impl<T: Serialize> Serialize for Slot<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Slot::Inherit => serializer.serialize_str("inherit"),
            Slot::Set(value) => value.serialize(serializer),
        }
    }
}

/// `Clone` that reports allocation failure instead of aborting.
pub trait TryClone: Sized {
    fn try_clone(&self) -> Result<Self, CssError>;
}

macro_rules! copy_try_clone {
    ($($ty:ty),* $(,)?) => {
        $(
            impl TryClone for $ty {
                fn try_clone(&self) -> Result<Self, CssError> {
                    Ok(*self)
                }
            }
        )*
    };
}

copy_try_clone!(
    AlignContent,
    JustifyContent,
    Gap,
    GridLine,
    GridAutoFlow,
    ObjectFit,
    ObjectPosition,
);

impl<T: TryClone> TryClone for Slot<T> {
    fn try_clone(&self) -> Result<Self, CssError> {
        match self {
            Slot::Inherit => Ok(Slot::Inherit),
            Slot::Set(value) => Ok(Slot::Set(value.try_clone()?)),
        }
    }
}

pub(crate) fn try_clone_slice<T: Copy>(items: &[T]) -> Result<Vec<T>, CssError> {
    let mut copy = Vec::new();
    copy.try_reserve_exact(items.len())?;
    copy.extend_from_slice(items);
    Ok(copy)
}

/// The slot a composed style gets: the child's own value, or the parent's
/// when the child inherits. An unresolved parent yields the initial value.
pub(crate) fn compose_slot<T: TryClone + Default>(
    parent: &Slot<T>,
    child: &Slot<T>,
) -> Result<Slot<T>, CssError> {
    let source = if child.is_inherit() { parent } else { child };
    match source {
        Slot::Inherit => Ok(Slot::default()),
        Slot::Set(value) => Ok(Slot::Set(value.try_clone()?)),
    }
}

macro_rules! serialize_as_display {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Serialize for $ty {
                fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                    serializer.collect_str(self)
                }
            }
        )*
    };
}

serialize_as_display!(
    Length,
    BackgroundImage,
    Gap,
    GridLine,
    GridTemplate,
    ObjectPosition,
    Transform,
    TransformFunction,
);

// -----------------------------------------------------------------------
// Values
// -----------------------------------------------------------------------

/// A fixed-point quantity with its unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Length {
    pub value: Fixed,
    pub unit: Unit,
}

impl Length {
    pub const fn new(value: Fixed, unit: Unit) -> Self {
        Self { value, unit }
    }

    pub fn px(value: i32) -> Self {
        Self::new(Fixed::from_int(value), Unit::Px)
    }

    pub fn percent(value: i32) -> Self {
        Self::new(Fixed::from_int(value), Unit::Percent)
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.unit.suffix())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum AlignContent {
    #[default]
    Stretch,
    FlexStart,
    FlexEnd,
    Center,
    SpaceBetween,
    SpaceAround,
    SpaceEvenly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum JustifyContent {
    #[default]
    FlexStart,
    FlexEnd,
    Center,
    SpaceBetween,
    SpaceAround,
    SpaceEvenly,
}

/// `background-image`. Gradients compute to `None`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum BackgroundImage {
    #[default]
    None,
    /// Resolved URL.
    Url(String),
}

impl TryClone for BackgroundImage {
    fn try_clone(&self) -> Result<Self, CssError> {
        match self {
            BackgroundImage::None => Ok(BackgroundImage::None),
            BackgroundImage::Url(url) => {
                let mut copy = String::new();
                copy.try_reserve_exact(url.len())?;
                copy.push_str(url);
                Ok(BackgroundImage::Url(copy))
            },
        }
    }
}

impl fmt::Display for BackgroundImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackgroundImage::None => f.write_str("none"),
            BackgroundImage::Url(url) => write!(f, "url({url})"),
        }
    }
}

/// `row-gap` / `column-gap`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Gap {
    #[default]
    Normal,
    Length(Length),
}

impl fmt::Display for Gap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gap::Normal => f.write_str("normal"),
            Gap::Length(length) => length.fmt(f),
        }
    }
}

/// A grid placement line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GridLine {
    #[default]
    Auto,
    /// Non-zero line number; negative counts from the end.
    Line(i32),
}

impl fmt::Display for GridLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridLine::Auto => f.write_str("auto"),
            GridLine::Line(line) => write!(f, "{line}"),
        }
    }
}

/// `grid-template-rows` / `grid-template-columns`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum GridTemplate {
    #[default]
    None,
    /// At least one track; `auto` tracks are stored as `1fr`.
    Tracks(Vec<Length>),
}

impl TryClone for GridTemplate {
    fn try_clone(&self) -> Result<Self, CssError> {
        match self {
            GridTemplate::None => Ok(GridTemplate::None),
            GridTemplate::Tracks(tracks) => Ok(GridTemplate::Tracks(try_clone_slice(tracks)?)),
        }
    }
}

impl fmt::Display for GridTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridTemplate::None => f.write_str("none"),
            GridTemplate::Tracks(tracks) => {
                for (i, track) in tracks.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    track.fmt(f)?;
                }
                Ok(())
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum GridAutoFlow {
    #[default]
    Row,
    Column,
    RowDense,
    ColumnDense,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ObjectFit {
    #[default]
    Fill,
    Contain,
    Cover,
    None,
    ScaleDown,
}

/// `object-position`, with keywords already converted to percentages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObjectPosition {
    pub horizontal: Length,
    pub vertical: Length,
}

impl Default for ObjectPosition {
    fn default() -> Self {
        Self {
            horizontal: Length::percent(50),
            vertical: Length::percent(50),
        }
    }
}

impl fmt::Display for ObjectPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.horizontal, self.vertical)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransformKind {
    Translate,
    TranslateX,
    TranslateY,
    Scale,
    ScaleX,
    ScaleY,
    Rotate,
}

impl TransformKind {
    pub const fn name(self) -> &'static str {
        match self {
            TransformKind::Translate => "translate",
            TransformKind::TranslateX => "translateX",
            TransformKind::TranslateY => "translateY",
            TransformKind::Scale => "scale",
            TransformKind::ScaleX => "scaleX",
            TransformKind::ScaleY => "scaleY",
            TransformKind::Rotate => "rotate",
        }
    }

    /// `true` for the functions that carry a second argument.
    pub const fn takes_two(self) -> bool {
        matches!(self, TransformKind::Translate | TransformKind::Scale)
    }
}

/// One transform function. `second` is `0px` for single-argument functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransformFunction {
    pub kind: TransformKind,
    pub first: Length,
    pub second: Length,
}

impl fmt::Display for TransformFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.kind.takes_two() {
            write!(f, "{}({}, {})", self.kind.name(), self.first, self.second)
        } else {
            write!(f, "{}({})", self.kind.name(), self.first)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Transform {
    #[default]
    None,
    Functions(Vec<TransformFunction>),
}

impl TryClone for Transform {
    fn try_clone(&self) -> Result<Self, CssError> {
        match self {
            Transform::None => Ok(Transform::None),
            Transform::Functions(functions) => {
                Ok(Transform::Functions(try_clone_slice(functions)?))
            },
        }
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transform::None => f.write_str("none"),
            Transform::Functions(functions) => {
                for (i, function) in functions.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    function.fmt(f)?;
                }
                Ok(())
            },
        }
    }
}

// -----------------------------------------------------------------------
// ComputedStyle
// -----------------------------------------------------------------------

/// Per-element computed values.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ComputedStyle {
    pub align_content: Slot<AlignContent>,
    pub background_image: Slot<BackgroundImage>,
    pub column_gap: Slot<Gap>,
    pub grid_auto_flow: Slot<GridAutoFlow>,
    pub grid_column_end: Slot<GridLine>,
    pub grid_column_start: Slot<GridLine>,
    pub grid_row_end: Slot<GridLine>,
    pub grid_row_start: Slot<GridLine>,
    pub grid_template_columns: Slot<GridTemplate>,
    pub grid_template_rows: Slot<GridTemplate>,
    pub justify_content: Slot<JustifyContent>,
    pub object_fit: Slot<ObjectFit>,
    pub object_position: Slot<ObjectPosition>,
    pub row_gap: Slot<Gap>,
    pub transform: Slot<Transform>,
}

impl ComputedStyle {
    /// Resolve `child` against its parent's style.
    ///
    /// Inheriting slots take a deep copy of the parent's value; everything
    /// else is copied from `child`. Neither input is modified.
    pub fn compose(parent: &ComputedStyle, child: &ComputedStyle) -> Result<Self, CssError> {
        let mut result = ComputedStyle::default();
        for property in PropertyId::ALL {
            (handler(property).compose)(parent, child, &mut result)?;
        }
        Ok(result)
    }

    /// Resolve a style with no parent: `inherit` falls back to initial.
    pub fn resolve_root(&self) -> Result<Self, CssError> {
        Self::compose(&ComputedStyle::default(), self)
    }

    /// Reset every property to its initial value.
    pub fn reset(&mut self) {
        for property in PropertyId::ALL {
            (handler(property).initial)(self);
        }
    }

    /// Deep copy that reports allocation failure.
    pub fn try_clone(&self) -> Result<Self, CssError> {
        let mut copy = ComputedStyle::default();
        for property in PropertyId::ALL {
            (handler(property).copy)(self, &mut copy)?;
        }
        Ok(copy)
    }

    /// Properties still waiting on a parent value.
    pub fn inheriting(&self) -> impl Iterator<Item = PropertyId> + '_ {
        PropertyId::ALL
            .into_iter()
            .filter(|&property| (handler(property).is_inherit)(self))
    }
}
