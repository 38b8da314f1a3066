//! # ZPL Interpretation
//!
//! A deliberately small subset of ZPL, the Zebra Programming Language:
//! the position command (`^FO`), the field data pair (`^FD`…`^FS`), and
//! six barcode-type commands (`^BC ^B3 ^BQ ^BX ^BE ^BY`). Everything
//! else in a label is ignored.
//!
//! ```
//! use cebra::zpl;
//!
//! let zpl = zpl::generate_template(cebra::Symbology::Qr, "https://example.com");
//! let directives = zpl::interpret(&zpl);
//! assert_eq!(directives[0].data, "https://example.com");
//! ```

mod interpreter;
mod scanner;

pub use interpreter::{BarcodeDirective, generate_template, interpret};
pub use scanner::scan;
