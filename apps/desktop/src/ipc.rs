//! # IPC Bridge
//!
//! Line-delimited JSON between the frontend and the command layer.
//!
//! ```text
//! stdin   {"id":1,"cmd":"list_items"}
//! stdout  {"id":1,"ok":{"items":[...],"stats":{...}}}
//!
//! stdin   {"id":2,"cmd":"add_item","args":{"form":{"name":"","cost":"5"}}}
//! stdout  {"id":2,"error":{"code":"VALIDATION_ERROR","message":"name is required"}}
//! ```
//!
//! Requests are handled one at a time in arrival order. The loop ends
//! when the input closes.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::io::{self, AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, warn};

use crate::commands;
use crate::error::ApiError;
use crate::state::AppContext;

/// One request line.
#[derive(Debug, Deserialize)]
pub struct Request {
    /// Echoed back so the frontend can match responses
    #[serde(default)]
    pub id: Option<u64>,
    pub cmd: String,
    #[serde(default)]
    pub args: Value,
}

/// One response line. Exactly one of `ok` and `error` is set.
#[derive(Debug, Serialize)]
pub struct Response {
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ok: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiError>,
}

impl Response {
    fn from_result(id: Option<u64>, result: Result<Value, ApiError>) -> Self {
        match result {
            Ok(value) => Response {
                id,
                ok: Some(value),
                error: None,
            },
            Err(error) => Response {
                id,
                ok: None,
                error: Some(error),
            },
        }
    }
}

/// Decodes and runs a single request line.
pub fn handle_line(ctx: &AppContext, line: &str) -> Response {
    let request: Request = match serde_json::from_str(line) {
        Ok(request) => request,
        Err(e) => {
            warn!(error = %e, "Malformed request line");
            return Response::from_result(
                None,
                Err(ApiError::invalid_request(format!("Malformed request: {}", e))),
            );
        }
    };

    debug!(id = ?request.id, cmd = %request.cmd, "Request received");

    let result = commands::invoke(ctx, &request.cmd, request.args);
    if let Err(e) = &result {
        debug!(id = ?request.id, error = %e, "Command failed");
    }

    Response::from_result(request.id, result)
}

/// Serves requests from `reader` until it closes, writing one response
/// line per non-blank request line.
pub async fn serve<R, W>(ctx: &AppContext, reader: R, mut writer: W) -> io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = reader.lines();

    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let response = handle_line(ctx, line);
        let mut encoded = serde_json::to_vec(&response)?;
        encoded.push(b'\n');

        writer.write_all(&encoded).await?;
        writer.flush().await?;
    }

    debug!("Input closed");
    Ok(())
}
