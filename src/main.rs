//! # Cebra CLI
//!
//! Command-line interface for barcode generation and ZPL interpretation.
//!
//! ## Usage
//!
//! ```bash
//! # Start the HTTP server
//! cebra serve --listen 0.0.0.0:8080
//!
//! # Generate a single barcode PNG
//! cebra generate --type EAN13 --data 123456789012 --out ean13.png
//!
//! # Extract barcode directives from a ZPL file
//! cebra interpret label.zpl
//!
//! # Extract and render every directive
//! cebra interpret label.zpl --render --out-dir out/
//!
//! # Print a minimal ZPL template
//! cebra template --type qr --data https://example.com
//! ```

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use cebra::{
    BarcodeGenerator, BarcodeRequest, CebraError, Outcome, Symbology,
    server::{ServerConfig, serve},
    zpl,
};

/// Cebra - barcode generation and ZPL interpretation utility
#[derive(Parser, Debug)]
#[command(name = "cebra")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Address to listen on
        #[arg(long, default_value = "0.0.0.0:8080")]
        listen: String,
    },

    /// Generate a single barcode PNG
    Generate {
        /// Symbology name (CODE128, EAN13, QR, ...)
        #[arg(long = "type", value_name = "TYPE")]
        kind: String,

        /// Data to encode
        #[arg(long)]
        data: String,

        /// Symbol height override
        #[arg(long)]
        height: Option<u32>,

        /// Output file
        #[arg(long, default_value = "barcode.png")]
        out: PathBuf,
    },

    /// Extract barcode directives from a ZPL file
    Interpret {
        /// ZPL file to read
        file: PathBuf,

        /// Also render each directive to a PNG
        #[arg(long)]
        render: bool,

        /// Directory for rendered PNGs
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,
    },

    /// Print a minimal ZPL template for a symbology
    Template {
        /// Symbology name (code128, code39, qr, datamatrix, ean13, upca)
        #[arg(long = "type", value_name = "TYPE")]
        kind: String,

        /// Data to encode
        #[arg(long)]
        data: String,
    },
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), CebraError> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { listen } => serve(ServerConfig { listen_addr: listen }).await,

        Commands::Generate {
            kind,
            data,
            height,
            out,
        } => {
            let mut request = BarcodeRequest::new(kind, data);
            if let Some(height) = height {
                request = request.height(height);
            }

            let generator = BarcodeGenerator::with_default_renderers();
            match generator.generate(&request).await? {
                Outcome::Success { image } => {
                    std::fs::write(&out, image.to_png()?)?;
                    println!("Wrote {}", out.display());
                }
                Outcome::Warning { message, fallback } => {
                    eprintln!("{message}");
                    eprintln!("Suggested fallback type: {fallback}");
                }
            }
            Ok(())
        }

        Commands::Interpret {
            file,
            render,
            out_dir,
        } => {
            let text = std::fs::read_to_string(&file)?;
            let directives = zpl::interpret(&text);
            println!("{}", serde_json::to_string_pretty(&directives)?);

            if render {
                let generator = BarcodeGenerator::with_default_renderers();
                for (index, directive) in directives.iter().enumerate() {
                    let request = BarcodeRequest::from(directive);
                    match generator.generate(&request).await? {
                        Outcome::Success { image } => {
                            let path = out_dir.join(format!("barcode-{index}.png"));
                            std::fs::write(&path, image.to_png()?)?;
                            println!("Wrote {}", path.display());
                        }
                        Outcome::Warning { message, .. } => {
                            eprintln!("Directive {index}: {message}");
                        }
                    }
                }
            }
            Ok(())
        }

        Commands::Template { kind, data } => {
            let symbology = Symbology::parse(&kind).unwrap_or(Symbology::Code128);
            println!("{}", zpl::generate_template(symbology, &data));
            Ok(())
        }
    }
}
