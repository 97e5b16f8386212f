//! Line-delimited JSON request/response channel.
//!
//! One request per input line, one response per output line:
//!
//! ```text
//! → {"id":"1","method":"task.create","params":{"title":"Essay"}}
//! ← {"id":"1","ok":true,"result":{...},"change":{"entity":"task","action":"created","id":"tsk-..."}}
//! ← {"id":"2","ok":false,"error":{"code":"validation","message":"Please enter a task title"}}
//! ```
//!
//! Ids may be any JSON value and are echoed back unchanged. A line that is not
//! JSON is answered without an id (`bad_json`); a JSON object that is not a
//! request keeps whatever id it carried.

use std::io::{self, BufRead, Write};

use serde::Deserialize;
use serde_json::{Value, json};

use crate::dispatch::Command;
use crate::notify::BufferedNotifier;
use crate::service::Planner;

#[derive(Debug, Deserialize)]
pub struct Request {
    #[serde(default)]
    pub id: Value,
    pub method: String,
    #[serde(default)]
    pub params: Value,
}

#[must_use]
pub fn ok(id: &Value, result: Value) -> Value {
    json!({
        "id": id,
        "ok": true,
        "result": result,
    })
}

#[must_use]
pub fn err(id: &Value, code: &str, message: impl Into<String>) -> Value {
    json!({
        "id": id,
        "ok": false,
        "error": {
            "code": code,
            "message": message.into(),
        },
    })
}

/// Answer one request.
pub fn handle_request(planner: &mut Planner, request: &Request) -> Value {
    let command = match Command::parse(&request.method, &request.params) {
        Ok(command) => command,
        Err(e) => return err(&request.id, e.code(), e.to_string()),
    };

    match planner.execute(command) {
        Ok(outcome) => {
            let mut response = ok(&request.id, outcome.result);
            if let Some(change) = outcome.change {
                response["change"] = json!(change);
            }
            response
        }
        Err(e) => err(&request.id, e.code(), e.to_string()),
    }
}

fn answer(planner: &mut Planner, value: Value) -> Value {
    let id = value.get("id").cloned().unwrap_or(Value::Null);
    match serde_json::from_value::<Request>(value) {
        Ok(request) => handle_request(planner, &request),
        Err(e) => {
            tracing::warn!(error = %e, "malformed request");
            err(&id, "bad_request", e.to_string())
        }
    }
}

/// Serve requests from `input` until it closes.
///
/// Notifications raised while handling a request ride along on its response
/// under `"notifications"`.
///
/// # Errors
///
/// Returns the I/O error that stopped reading or writing.
pub fn serve<R: BufRead, W: Write>(
    planner: &mut Planner,
    notifier: &BufferedNotifier,
    input: R,
    mut output: W,
) -> io::Result<()> {
    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let mut response = match serde_json::from_str::<Value>(&line) {
            Ok(value) => answer(planner, value),
            Err(e) => {
                tracing::warn!(error = %e, "unparseable request line");
                json!({
                    "ok": false,
                    "error": {"code": "bad_json", "message": e.to_string()},
                })
            }
        };

        let notifications = notifier.drain();
        if !notifications.is_empty() {
            response["notifications"] = json!(notifications);
        }

        writeln!(output, "{response}")?;
        output.flush()?;
    }
    Ok(())
}
