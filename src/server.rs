//! # HTTP Server for Barcode Generation
//!
//! Provides a small web API (and a form page) over the generator and the
//! ZPL interpreter.
//!
//! ## Usage
//!
//! ```bash
//! cebra serve --listen 0.0.0.0:8080
//! ```
//!
//! | Route | Description |
//! |-------|-------------|
//! | `GET /` | HTML form for interactive use |
//! | `POST /generate` | JSON barcode request → PNG bytes, or JSON warning |
//! | `POST /interpret` | ZPL text body → JSON directive list |
//! | `GET /template` | `?type=..&data=..` → ZPL snippet |

use axum::{
    Json, Router,
    extract::{Query, State},
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use serde::Deserialize;
use std::sync::Arc;

use crate::barcode::{BarcodeGenerator, BarcodeRequest, Outcome, Symbology};
use crate::error::CebraError;
use crate::zpl;

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to listen on (e.g., "0.0.0.0:8080")
    pub listen_addr: String,
}

struct AppState {
    generator: BarcodeGenerator,
}

/// Start the HTTP server.
///
/// ## Example
///
/// ```no_run
/// use cebra::server::{ServerConfig, serve};
///
/// # async fn example() -> Result<(), cebra::CebraError> {
/// serve(ServerConfig {
///     listen_addr: "0.0.0.0:8080".to_string(),
/// })
/// .await?;
/// # Ok(())
/// # }
/// ```
pub async fn serve(config: ServerConfig) -> Result<(), CebraError> {
    let state = Arc::new(AppState {
        generator: BarcodeGenerator::with_default_renderers(),
    });

    let app = router(state);

    println!("Cebra HTTP server starting...");
    println!("Listening on: {}", config.listen_addr);
    println!();
    println!("POST /generate  barcode request JSON -> PNG (or JSON warning)");
    println!("POST /interpret ZPL text -> directive JSON");
    println!("GET  /template  ?type=..&data=.. -> ZPL text");
    println!();
    println!("Open http://{}/ in your browser", config.listen_addr);

    let listener = tokio::net::TcpListener::bind(&config.listen_addr)
        .await
        .map_err(|e| {
            CebraError::Server(format!("Failed to bind to {}: {}", config.listen_addr, e))
        })?;

    axum::serve(listener, app)
        .await
        .map_err(|e| CebraError::Server(e.to_string()))
}

fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/generate", post(generate_handler))
        .route("/interpret", post(interpret_handler))
        .route("/template", get(template_handler))
        .with_state(state)
}

async fn index_handler() -> Html<&'static str> {
    Html(INDEX_PAGE)
}

/// Handle POST /generate - render one barcode request as PNG, or report
/// the validation warning as JSON.
async fn generate_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<BarcodeRequest>,
) -> Result<Response, (StatusCode, String)> {
    let outcome = state
        .generator
        .generate(&request)
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    match outcome {
        Outcome::Success { image } => {
            let png_bytes = image
                .to_png()
                .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;
            Ok(([(header::CONTENT_TYPE, "image/png")], png_bytes).into_response())
        }
        Outcome::Warning { message, fallback } => Ok((
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(serde_json::json!({
                "warning": message,
                "fallback_type": fallback,
            })),
        )
            .into_response()),
    }
}

/// Handle POST /interpret - extract barcode directives from a ZPL body.
async fn interpret_handler(body: String) -> Json<Vec<zpl::BarcodeDirective>> {
    Json(zpl::interpret(&body))
}

#[derive(Debug, Deserialize)]
struct TemplateQuery {
    #[serde(rename = "type")]
    kind: String,
    data: String,
}

/// Handle GET /template - ZPL snippet for a symbology.
async fn template_handler(Query(query): Query<TemplateQuery>) -> String {
    let symbology = Symbology::parse(&query.kind).unwrap_or(Symbology::Code128);
    zpl::generate_template(symbology, &query.data)
}

const INDEX_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head>
  <title>Cebra Barcode Generator</title>
  <style>
    body { font-family: sans-serif; max-width: 640px; margin: 2em auto; }
    textarea, input, select { width: 100%; margin-bottom: 0.5em; }
    img { border: 1px solid #ccc; margin-top: 1em; }
    pre { background: #f5f5f5; padding: 0.5em; white-space: pre-wrap; }
  </style>
</head>
<body>
  <h1>Cebra</h1>
  <h2>Generate a barcode</h2>
  <select id="type">
    <option>CODE128</option><option>CODE39</option><option>CODE93</option>
    <option>EAN13</option><option>EAN8</option><option>UPCA</option>
    <option>ITF14</option><option>PDF417</option><option>DATAMATRIX</option>
    <option>QR</option>
  </select>
  <input id="data" placeholder="Data to encode" value="123456789012">
  <button onclick="generate()">Generate</button>
  <div id="result"></div>

  <h2>Interpret ZPL</h2>
  <textarea id="zpl" rows="6">^XA
^FO50,50^BC,100,Y,N,N
^FD123456^FS
^XZ</textarea>
  <button onclick="interpret()">Interpret</button>
  <pre id="directives"></pre>

  <script>
    async function generate() {
      const body = JSON.stringify({
        type: document.getElementById('type').value,
        data: document.getElementById('data').value,
      });
      const response = await fetch('/generate', {
        method: 'POST',
        headers: { 'Content-Type': 'application/json' },
        body,
      });
      const result = document.getElementById('result');
      if (response.headers.get('Content-Type') === 'image/png') {
        const blob = await response.blob();
        result.innerHTML = '<img src="' + URL.createObjectURL(blob) + '">';
      } else {
        result.innerHTML = '<pre>' + await response.text() + '</pre>';
      }
    }
    async function interpret() {
      const response = await fetch('/interpret', {
        method: 'POST',
        body: document.getElementById('zpl').value,
      });
      document.getElementById('directives').textContent =
        JSON.stringify(await response.json(), null, 2);
    }
  </script>
</body>
</html>
"#;
