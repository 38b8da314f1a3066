//! ZPL directive extraction.
//!
//! A small finite-state walk over scanned lines. The interpreter tracks
//! the current `^FO` position and an explicit field-pairing state:
//!
//! ```text
//!            barcode-type command            ^FD data field
//!   Idle ──────────────────────► TypePending ──────────────► emit + Idle
//!    ▲                              │
//!    └──── data with no type ◄──────┘ (new type command overwrites)
//! ```
//!
//! Malformed commands never fail a parse: an unparseable position is
//! ignored, an orphan data field is dropped, and an unconsumed pending
//! type simply never produces a directive.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::barcode::{BarcodeRequest, Symbology};

use super::scanner;

/// Directive geometry is fixed; ZPL height/width parameters are not derived.
const DIRECTIVE_WIDTH: u32 = 2;
const DIRECTIVE_HEIGHT: u32 = 100;

/// Barcode-type command markers, matched by substring containment in this
/// fixed priority order. The first match on a line wins.
const TYPE_MARKERS: [(&str, Symbology); 6] = [
    ("^BC", Symbology::Code128),
    ("^B3", Symbology::Code39),
    ("^BQ", Symbology::Qr),
    ("^BX", Symbology::DataMatrix),
    ("^BE", Symbology::Ean13),
    ("^BY", Symbology::UpcA),
];

/// A barcode placement extracted from ZPL text.
///
/// `x`/`y` capture the most recently set `^FO` position at the moment the
/// data field closed. Directives are immutable once emitted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarcodeDirective {
    #[serde(rename = "type")]
    pub symbology: Symbology,
    pub data: String,
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
    /// Reserved per-directive renderer overrides; currently always empty.
    pub options: Map<String, Value>,
}

impl From<&BarcodeDirective> for BarcodeRequest {
    fn from(directive: &BarcodeDirective) -> Self {
        BarcodeRequest::new(directive.symbology.to_string(), directive.data.clone())
            .height(directive.height)
    }
}

/// Field-pairing state: a directive needs a type command, then a data field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum FieldState {
    #[default]
    Idle,
    TypePending(Symbology),
}

/// Per-invocation interpreter state. The position register persists across
/// directive emissions; the pending type is consumed by each emission.
#[derive(Debug, Default)]
struct Interpreter {
    x: u32,
    y: u32,
    state: FieldState,
}

impl Interpreter {
    /// Apply one scanned line, emitting at most one directive.
    fn apply_line(&mut self, line: &str) -> Option<BarcodeDirective> {
        if let Some((x, y)) = parse_position(line) {
            self.x = x;
            self.y = y;
        }

        for (marker, symbology) in TYPE_MARKERS {
            if line.contains(marker) {
                self.state = FieldState::TypePending(symbology);
                break;
            }
        }

        let data = parse_field_data(line)?;
        match self.state {
            FieldState::TypePending(symbology) => {
                self.state = FieldState::Idle;
                Some(BarcodeDirective {
                    symbology,
                    data: data.to_string(),
                    x: self.x,
                    y: self.y,
                    width: DIRECTIVE_WIDTH,
                    height: DIRECTIVE_HEIGHT,
                    options: Map::new(),
                })
            }
            // A data field with no pending type is dropped.
            FieldState::Idle => None,
        }
    }
}

/// Extract barcode directives from ZPL text.
///
/// ## Example
///
/// ```
/// use cebra::zpl::interpret;
///
/// let directives = interpret("^XA\n^FO50,50^BC,100,Y,N,N\n^FD123456^FS\n^XZ");
/// assert_eq!(directives.len(), 1);
/// assert_eq!(directives[0].data, "123456");
/// assert_eq!((directives[0].x, directives[0].y), (50, 50));
/// ```
pub fn interpret(text: &str) -> Vec<BarcodeDirective> {
    let mut interpreter = Interpreter::default();
    scanner::scan(text)
        .into_iter()
        .filter_map(|line| interpreter.apply_line(line))
        .collect()
}

/// Parse a `^FO<x>,<y>` position command anywhere in the line.
fn parse_position(line: &str) -> Option<(u32, u32)> {
    let mut rest = line;
    while let Some(index) = rest.find("^FO") {
        let tail = &rest[index + 3..];
        if let Some(position) = parse_coordinates(tail) {
            return Some(position);
        }
        rest = tail;
    }
    None
}

fn parse_coordinates(tail: &str) -> Option<(u32, u32)> {
    let (x_digits, tail) = take_digits(tail);
    if x_digits.is_empty() {
        return None;
    }
    let tail = tail.strip_prefix(',')?;
    let (y_digits, _) = take_digits(tail);
    if y_digits.is_empty() {
        return None;
    }
    // Out-of-range numbers degrade to 0 rather than failing the line.
    Some((x_digits.parse().unwrap_or(0), y_digits.parse().unwrap_or(0)))
}

fn take_digits(s: &str) -> (&str, &str) {
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    s.split_at(end)
}

/// Parse a `^FD<content>` data field: the shortest non-empty run up to a
/// following `^FS` marker or the end of the line.
fn parse_field_data(line: &str) -> Option<&str> {
    let start = line.find("^FD")? + 3;
    let rest = &line[start..];
    let content = match rest.find("^FS") {
        Some(end) => &rest[..end],
        None => rest,
    };
    (!content.is_empty()).then_some(content)
}

/// Produce a minimal ZPL snippet for one of the six interpretable
/// symbologies; any other symbology falls back to the Code 128 template.
pub fn generate_template(symbology: Symbology, data: &str) -> String {
    match symbology {
        Symbology::Code39 => format!("^XA\n^FO50,50^B3N,N,100,Y,N\n^FD{data}^FS\n^XZ"),
        Symbology::Qr => format!("^XA\n^FO50,50^BQN,2,4\n^FD{data}^FS\n^XZ"),
        Symbology::DataMatrix => format!("^XA\n^FO50,50^BX,N,200,200\n^FD{data}^FS\n^XZ"),
        Symbology::Ean13 => format!("^XA\n^FO50,50^BE,N,100,Y,N\n^FD{data}^FS\n^XZ"),
        Symbology::UpcA => format!("^XA\n^FO50,50^BY,N,100,Y,N\n^FD{data}^FS\n^XZ"),
        _ => format!("^XA\n^FO50,50^BC,100,Y,N,N\n^FD{data}^FS\n^XZ"),
    }
}
