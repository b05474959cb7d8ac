//! Property parsers: token stream in, style bytecode out.
//!
//! Every parser has the [`PropertyParser`] shape. On `Ok` the cursor sits
//! just past the value it recognized; on any error the cursor and the
//! output buffer are back where they were on entry.

mod declaration;
pub mod properties;
pub mod utils;

pub use declaration::{parse_declaration_list, parse_property};

use stylecode_types::CssError;
use stylecode_types::config::EngineConfig;

use crate::bytecode::{StringTable, StyleBuffer};
use crate::cursor::TokenCursor;

/// Signature shared by every property parser.
pub type PropertyParser =
    fn(&mut ParseContext, &mut TokenCursor<'_>, &mut StyleBuffer) -> Result<(), CssError>;

/// Resolves a `url()` reference against the stylesheet's base URL.
pub trait UrlResolver {
    fn resolve(&self, base: &str, reference: &str) -> Result<String, CssError>;
}

/// Plain textual resolution: absolute references pass through, relative
/// ones replace the last path segment of the base.
#[derive(Debug, Clone, Copy, Default)]
pub struct BaseUrlResolver;

impl UrlResolver for BaseUrlResolver {
    fn resolve(&self, base: &str, reference: &str) -> Result<String, CssError> {
        let has_scheme = reference
            .split_once(':')
            .is_some_and(|(scheme, _)| !scheme.is_empty() && !scheme.contains('/'));
        if has_scheme {
            return Ok(reference.to_string());
        }
        let authority_end = base.find("://").map(|i| i + 3);
        if reference.starts_with('/') {
            if let Some(start) = authority_end {
                let host_end = base[start..].find('/').map_or(base.len(), |i| start + i);
                return Ok(format!("{}{reference}", &base[..host_end]));
            }
            return Ok(reference.to_string());
        }
        match base.rfind('/') {
            Some(slash) if authority_end.is_none_or(|start| slash >= start) => {
                Ok(format!("{}{reference}", &base[..=slash]))
            },
            _ if authority_end.is_some() => Ok(format!("{base}/{reference}")),
            _ => Ok(reference.to_string()),
        }
    }
}

/// State shared by the parsers of one stylesheet.
pub struct ParseContext {
    base_url: String,
    resolver: Box<dyn UrlResolver>,
    strings: StringTable,
    buffer_limit: Option<usize>,
}

impl ParseContext {
    pub fn new(config: &EngineConfig) -> Self {
        Self::with_resolver(config, Box::new(BaseUrlResolver))
    }

    pub fn with_resolver(config: &EngineConfig, resolver: Box<dyn UrlResolver>) -> Self {
        Self {
            base_url: config.base_url.clone(),
            resolver,
            strings: StringTable::new(),
            buffer_limit: config.buffer_limit,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Strings referenced by the bytecode produced so far.
    pub fn strings(&self) -> &StringTable {
        &self.strings
    }

    pub fn into_strings(self) -> StringTable {
        self.strings
    }

    /// An empty buffer carrying the configured word limit.
    pub fn new_buffer(&self) -> StyleBuffer {
        StyleBuffer::with_limit(self.buffer_limit)
    }

    /// Resolve `reference` and intern the result.
    pub(crate) fn add_url(&mut self, reference: &str) -> Result<u32, CssError> {
        let resolved = self.resolver.resolve(&self.base_url, reference)?;
        self.strings.add(&resolved)
    }
}

impl Default for ParseContext {
    fn default() -> Self {
        Self::new(&EngineConfig::default())
    }
}

/// Run `body`, restoring the cursor and truncating `out` if it fails.
pub(crate) fn transaction<'a, F>(
    cursor: &mut TokenCursor<'a>,
    out: &mut StyleBuffer,
    body: F,
) -> Result<(), CssError>
where
    F: FnOnce(&mut TokenCursor<'a>, &mut StyleBuffer) -> Result<(), CssError>,
{
    let mark = cursor.mark();
    let len = out.len();
    let result = body(cursor, out);
    if result.is_err() {
        cursor.reset(mark);
        out.truncate(len);
    }
    result
}

/// Look up the parser for a property or shorthand name, ignoring ASCII case.
pub fn property_parser(name: &str) -> Option<PropertyParser> {
    use properties::*;

    let parser: PropertyParser = match name.to_ascii_lowercase().as_str() {
        "align-content" => alignment::parse_align_content,
        "justify-content" => alignment::parse_justify_content,
        "place-content" => alignment::parse_place_content,
        "background-image" => background::parse_background_image,
        "row-gap" => gap::parse_row_gap,
        "column-gap" => gap::parse_column_gap,
        "gap" => gap::parse_gap,
        "grid-row-start" => grid::parse_grid_row_start,
        "grid-row-end" => grid::parse_grid_row_end,
        "grid-column-start" => grid::parse_grid_column_start,
        "grid-column-end" => grid::parse_grid_column_end,
        "grid-row" => grid::parse_grid_row,
        "grid-column" => grid::parse_grid_column,
        "grid-area" => grid::parse_grid_area,
        "grid-auto-flow" => grid::parse_grid_auto_flow,
        "grid-template-rows" => grid_template::parse_grid_template_rows,
        "grid-template-columns" => grid_template::parse_grid_template_columns,
        "object-fit" => object::parse_object_fit,
        "object-position" => object::parse_object_position,
        "transform" => transform::parse_transform,
        _ => return None,
    };
    Some(parser)
}

/// Every name [`property_parser`] accepts.
pub const PROPERTY_NAMES: [&str; 20] = [
    "align-content",
    "justify-content",
    "place-content",
    "background-image",
    "row-gap",
    "column-gap",
    "gap",
    "grid-row-start",
    "grid-row-end",
    "grid-column-start",
    "grid-column-end",
    "grid-row",
    "grid-column",
    "grid-area",
    "grid-auto-flow",
    "grid-template-rows",
    "grid-template-columns",
    "object-fit",
    "object-position",
    "transform",
];
