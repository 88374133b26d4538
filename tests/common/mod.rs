//! Minimal JSON-RPC client talking to the `tnc7-ls` binary over stdio.
#![allow(dead_code)]

use std::io::{BufRead, BufReader, Read, Write};
use std::process::{Child, ChildStdout, Command, Stdio};
use std::time::{Duration, Instant};

use serde_json::Value;

const SERVER_TIMEOUT: Duration = Duration::from_secs(5);
const SHUTDOWN_GRACE_PERIOD: Duration = Duration::from_millis(200);

pub struct TestServer {
    child: Child,
    reader: BufReader<ChildStdout>,
}

impl TestServer {
    pub fn spawn() -> Self {
        let mut child = Command::new(env!("CARGO_BIN_EXE_tnc7-ls"))
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .expect("Failed to spawn language server");

        let stdout = child
            .stdout
            .take()
            .expect("Child stdout should be available");

        Self {
            child,
            reader: BufReader::new(stdout),
        }
    }

    /// Spawn, initialize and send `initialized`
    pub fn start() -> (Self, Value) {
        let mut server = Self::spawn();
        server.send(&serde_json::json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": "initialize",
            "params": {
                "processId": null,
                "rootUri": null,
                "capabilities": {
                    "workspace": { "applyEdit": true },
                    "textDocument": {
                        "hover": { "dynamicRegistration": false },
                        "formatting": { "dynamicRegistration": false }
                    }
                },
                "clientInfo": { "name": "test-client", "version": "1.0" }
            }
        }));
        let response = server.read_response(1);

        server.send(&serde_json::json!({
            "jsonrpc": "2.0",
            "method": "initialized",
            "params": {}
        }));

        (server, response)
    }

    pub fn send(&mut self, message: &Value) {
        let body = message.to_string();
        let request = format!("Content-Length: {}\r\n\r\n{}", body.len(), body);

        let stdin = self
            .child
            .stdin
            .as_mut()
            .expect("Child stdin should be available");
        stdin
            .write_all(request.as_bytes())
            .expect("Failed to write request");
        stdin.flush().expect("Failed to flush stdin");
    }

    pub fn open(&mut self, uri: &str, language_id: &str, text: &str) {
        self.send(&serde_json::json!({
            "jsonrpc": "2.0",
            "method": "textDocument/didOpen",
            "params": {
                "textDocument": {
                    "uri": uri,
                    "languageId": language_id,
                    "version": 1,
                    "text": text
                }
            }
        }));
    }

    /// Read messages until the response to request `id`
    pub fn read_response(&mut self, id: i64) -> Value {
        self.read_until(|msg| {
            msg.get("id").and_then(|v| v.as_i64()) == Some(id) && msg.get("method").is_none()
        })
    }

    /// Read messages until the server sends a request for `method`
    pub fn read_request(&mut self, method: &str) -> Value {
        self.read_until(|msg| {
            msg.get("method").and_then(|v| v.as_str()) == Some(method) && msg.get("id").is_some()
        })
    }

    fn read_until(&mut self, mut wanted: impl FnMut(&Value) -> bool) -> Value {
        let start_time = Instant::now();
        loop {
            if start_time.elapsed() > SERVER_TIMEOUT {
                panic!("Timeout waiting for server message");
            }
            let message = self.read_message();
            if wanted(&message) {
                return message;
            }
        }
    }

    fn read_message(&mut self) -> Value {
        let mut content_length = None;

        loop {
            let mut line = String::new();
            match self.reader.read_line(&mut line) {
                Ok(0) => panic!("Unexpected EOF while reading headers"),
                Ok(_) => {
                    if line.trim().is_empty() {
                        break;
                    }
                    if let Some(length_str) = line.strip_prefix("Content-Length:") {
                        content_length = Some(
                            length_str
                                .trim()
                                .parse::<usize>()
                                .expect("Invalid Content-Length header"),
                        );
                    }
                }
                Err(e) => panic!("Error reading headers: {}", e),
            }
        }

        let content_length = content_length.expect("Missing Content-Length header");
        let mut body_bytes = vec![0u8; content_length];
        self.reader
            .read_exact(&mut body_bytes)
            .expect("Failed to read response body");

        let body = String::from_utf8(body_bytes).expect("Response body should be valid UTF-8");
        serde_json::from_str(&body)
            .unwrap_or_else(|e| panic!("Invalid JSON message: {}\nBody: {}", e, body))
    }

    pub fn shutdown(mut self) {
        // Close stdin to signal we're done
        drop(self.child.stdin.take());

        std::thread::sleep(SHUTDOWN_GRACE_PERIOD);

        match self.child.try_wait() {
            Ok(Some(status)) => {
                if !status.success() {
                    eprintln!("Server exited with non-zero status: {:?}", status);
                }
            }
            Ok(None) => {
                eprintln!("Server didn't exit gracefully, forcing termination");
                let _ = self.child.kill();
                let _ = self.child.wait();
            }
            Err(e) => panic!("Error checking server status: {}", e),
        }
    }
}
