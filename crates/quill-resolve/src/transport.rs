//! Line-delimited JSON-RPC transport

use serde::{Deserialize, Serialize};
use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};

/// JSON-RPC parse error code
pub const PARSE_ERROR: i32 = -32700;
/// JSON-RPC unknown method code
pub const METHOD_NOT_FOUND: i32 = -32601;
/// JSON-RPC bad params code
pub const INVALID_PARAMS: i32 = -32602;
/// JSON-RPC internal error code
pub const INTERNAL_ERROR: i32 = -32603;

/// JSON-RPC request
#[derive(Debug, Deserialize)]
pub struct JsonRpcRequest {
    pub jsonrpc: String,
    #[serde(default)]
    pub id: serde_json::Value,
    pub method: String,
    #[serde(default)]
    pub params: serde_json::Value,
}

/// JSON-RPC response
#[derive(Debug, Serialize)]
pub struct JsonRpcResponse {
    pub jsonrpc: &'static str,
    pub id: serde_json::Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
}

/// JSON-RPC error
#[derive(Debug, Serialize)]
pub struct JsonRpcError {
    pub code: i32,
    pub message: String,
}

impl JsonRpcResponse {
    pub fn success(id: serde_json::Value, result: serde_json::Value) -> Self {
        Self {
            jsonrpc: "2.0",
            id,
            result: Some(result),
            error: None,
        }
    }

    pub fn error(id: serde_json::Value, code: i32, message: impl Into<String>) -> Self {
        Self {
            jsonrpc: "2.0",
            id,
            result: None,
            error: Some(JsonRpcError {
                code,
                message: message.into(),
            }),
        }
    }
}

/// One incoming line: a request, or the reason it could not be parsed
pub enum Incoming {
    Request(JsonRpcRequest),
    Malformed(String),
}

/// Reads requests from and writes responses to a pair of byte streams,
/// one JSON document per line
pub struct LineTransport<R, W> {
    reader: BufReader<R>,
    writer: W,
}

/// Transport over the process's stdin and stdout
pub type StdioTransport = LineTransport<tokio::io::Stdin, tokio::io::Stdout>;

impl StdioTransport {
    pub fn stdio() -> Self {
        Self::new(tokio::io::stdin(), tokio::io::stdout())
    }
}

impl<R: AsyncRead + Unpin, W: AsyncWrite + Unpin> LineTransport<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader: BufReader::new(reader),
            writer,
        }
    }

    /// Read the next non-blank line; `None` on EOF
    ///
    /// A line that is not valid UTF-8 or not a valid request comes back as
    /// `Incoming::Malformed`, leaving the stream positioned at the next line.
    pub async fn read_request(&mut self) -> std::io::Result<Option<Incoming>> {
        let mut line = Vec::new();
        loop {
            line.clear();
            if self.reader.read_until(b'\n', &mut line).await? == 0 {
                return Ok(None);
            }
            if !line.iter().all(u8::is_ascii_whitespace) {
                break;
            }
        }

        Ok(Some(match serde_json::from_slice(&line) {
            Ok(request) => Incoming::Request(request),
            Err(e) => Incoming::Malformed(e.to_string()),
        }))
    }

    /// Write a response followed by a newline
    pub async fn write_response(&mut self, response: &JsonRpcResponse) -> std::io::Result<()> {
        let json = serde_json::to_string(response)?;
        self.writer.write_all(json.as_bytes()).await?;
        self.writer.write_all(b"\n").await?;
        self.writer.flush().await?;
        Ok(())
    }

    pub fn into_writer(self) -> W {
        self.writer
    }
}
