//! The JSONL request protocol spoken by `quill serve`.
//!
//! One JSON object per line in each direction:
//!
//! ```text
//! -> {"id":1,"command":"getDiagnostics","params":{"projectRoot":"/p","fullPath":"/p/a.ts","code":""}}
//! <- {"id":1,"ok":true,"result":{"report":{"errors":[]}}}
//! ```
//!
//! Commands are `notifyFileChanged`, `getDiagnostics` and `getCompletions`.
//! Failures answer with `"ok":false` and an `"error"` string; they never
//! end the session.

use std::path::PathBuf;

use quill_service::{FileChangeNotification, Service, ServiceError};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// One request line.
#[derive(Debug, Deserialize)]
pub struct Request {
    /// Echoed back in the response.
    #[serde(default)]
    pub id: Value,
    /// The command name.
    pub command: String,
    /// Command parameters.
    #[serde(default)]
    pub params: Value,
}

/// One response line.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct Response {
    /// The id of the request answered.
    pub id: Value,
    /// Whether the command succeeded.
    pub ok: bool,
    /// The command result, on success.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    /// The failure, otherwise.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Response {
    fn success(id: Value, result: Value) -> Self {
        Self {
            id,
            ok: true,
            result: Some(result),
            error: None,
        }
    }

    fn failure(id: Value, error: &ProtocolError) -> Self {
        Self {
            id,
            ok: false,
            result: None,
            error: Some(error.to_string()),
        }
    }
}

/// Errors answered with `"ok":false`.
#[derive(Debug, thiserror::Error)]
pub enum ProtocolError {
    /// The line is not a request object.
    #[error("malformed request: {0}")]
    Malformed(#[source] serde_json::Error),

    /// The command name is not recognized.
    #[error("unknown command '{0}'")]
    UnknownCommand(String),

    /// The parameters do not fit the command.
    #[error("invalid params for '{command}': {source}")]
    InvalidParams {
        /// The command being invoked.
        command: String,
        /// What failed to deserialize.
        source: serde_json::Error,
    },

    /// The result could not be encoded.
    #[error("failed to encode result: {0}")]
    Encode(#[source] serde_json::Error),

    /// The service failed the request.
    #[error(transparent)]
    Service(#[from] ServiceError),
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DiagnosticsParams {
    project_root: PathBuf,
    full_path: PathBuf,
    #[serde(default)]
    code: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CompletionsParams {
    project_root: PathBuf,
    full_path: PathBuf,
    #[serde(default)]
    code: String,
    position: usize,
}

/// Handles one request line and returns the response line, without a
/// trailing newline.
pub fn handle_line(service: &mut Service, line: &str) -> String {
    let response = match serde_json::from_str::<Request>(line) {
        Ok(request) => {
            let id = request.id.clone();
            match dispatch(service, request) {
                Ok(result) => Response::success(id, result),
                Err(e) => Response::failure(id, &e),
            }
        }
        Err(e) => {
            let err = ProtocolError::Malformed(e);
            tracing::warn!(error = %err, "rejected request line");
            Response::failure(Value::Null, &err)
        }
    };
    serde_json::to_string(&response).unwrap_or_else(|e| {
        format!(r#"{{"id":null,"ok":false,"error":"failed to encode response: {e}"}}"#)
    })
}

fn params<T: for<'de> Deserialize<'de>>(command: &str, params: Value) -> Result<T, ProtocolError> {
    serde_json::from_value(params).map_err(|source| ProtocolError::InvalidParams {
        command: command.to_string(),
        source,
    })
}

fn dispatch(service: &mut Service, request: Request) -> Result<Value, ProtocolError> {
    let command = request.command.as_str();
    match command {
        "notifyFileChanged" => {
            let notification: FileChangeNotification = params(command, request.params)?;
            let processed = service.notify_file_changed(&notification);
            Ok(json!({ "processed": processed }))
        }
        "getDiagnostics" => {
            let p: DiagnosticsParams = params(command, request.params)?;
            let report = service.get_diagnostics(&p.project_root, &p.full_path, &p.code)?;
            let report = serde_json::to_value(report).map_err(ProtocolError::Encode)?;
            Ok(json!({ "report": report }))
        }
        "getCompletions" => {
            let p: CompletionsParams = params(command, request.params)?;
            let report =
                service.get_completions(&p.project_root, &p.full_path, &p.code, p.position)?;
            let report = serde_json::to_value(report).map_err(ProtocolError::Encode)?;
            Ok(json!({ "report": report }))
        }
        other => Err(ProtocolError::UnknownCommand(other.to_string())),
    }
}
