//! JSON-RPC server exposing the executor over a line transport

use std::sync::Arc;

use quill_storage::EntityStore;
use serde_json::json;
use tokio::io::{AsyncRead, AsyncWrite};

use crate::executor::{Executor, Request};
use crate::transport::{
    Incoming, JsonRpcRequest, JsonRpcResponse, LineTransport, StdioTransport, INTERNAL_ERROR,
    INVALID_PARAMS, METHOD_NOT_FOUND, PARSE_ERROR,
};

const SERVER_NAME: &str = "quill";
const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Request server for Quill
///
/// Requests are handled one at a time, each resolved start to finish
/// before the next is read.
pub struct QuillServer<S: EntityStore> {
    executor: Executor<S>,
}

impl<S: EntityStore + 'static> QuillServer<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self {
            executor: Executor::new(store),
        }
    }

    pub fn executor(&self) -> &Executor<S> {
        &self.executor
    }

    /// Start the server on stdio
    pub async fn run_stdio(&self) -> anyhow::Result<()> {
        tracing::info!("Starting {} {} on stdio", SERVER_NAME, SERVER_VERSION);
        let mut transport = StdioTransport::stdio();
        self.serve(&mut transport).await
    }

    /// Serve requests until the reader reaches EOF
    pub async fn serve<R, W>(&self, transport: &mut LineTransport<R, W>) -> anyhow::Result<()>
    where
        R: AsyncRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        loop {
            let response = match transport.read_request().await {
                Ok(Some(Incoming::Request(request))) => {
                    tracing::debug!("Received request: {}", request.method);
                    self.handle_request(request).await
                }
                Ok(Some(Incoming::Malformed(reason))) => {
                    tracing::warn!("Malformed request: {}", reason);
                    JsonRpcResponse::error(
                        serde_json::Value::Null,
                        PARSE_ERROR,
                        format!("Parse error: {}", reason),
                    )
                }
                Ok(None) => {
                    tracing::info!("EOF on input, shutting down");
                    break;
                }
                Err(e) => {
                    tracing::error!("Failed to read request: {}", e);
                    break;
                }
            };

            if let Err(e) = transport.write_response(&response).await {
                tracing::error!("Failed to write response: {}", e);
                break;
            }
        }

        Ok(())
    }

    pub async fn handle_request(&self, request: JsonRpcRequest) -> JsonRpcResponse {
        if request.jsonrpc != "2.0" {
            tracing::debug!("Client sent jsonrpc version {:?}", request.jsonrpc);
        }

        match request.method.as_str() {
            "execute" => self.handle_execute(request.id, request.params),
            "schema" => JsonRpcResponse::success(
                request.id,
                json!({ "sdl": self.executor.schema().to_sdl() }),
            ),
            "stats" => self.handle_stats(request.id),
            "ping" => JsonRpcResponse::success(request.id, json!({})),
            _ => JsonRpcResponse::error(
                request.id,
                METHOD_NOT_FOUND,
                format!("Method not found: {}", request.method),
            ),
        }
    }

    fn handle_execute(&self, id: serde_json::Value, params: serde_json::Value) -> JsonRpcResponse {
        let request: Request = match serde_json::from_value(params) {
            Ok(r) => r,
            Err(e) => return JsonRpcResponse::error(id, INVALID_PARAMS, format!("Invalid params: {}", e)),
        };

        let response = self.executor.execute(&request);
        match serde_json::to_value(response) {
            Ok(val) => JsonRpcResponse::success(id, val),
            Err(e) => JsonRpcResponse::error(id, INTERNAL_ERROR, format!("Serialization error: {}", e)),
        }
    }

    fn handle_stats(&self, id: serde_json::Value) -> JsonRpcResponse {
        match self.executor.context().store().counts() {
            Ok(counts) => match serde_json::to_value(counts) {
                Ok(val) => JsonRpcResponse::success(id, val),
                Err(e) => JsonRpcResponse::error(id, INTERNAL_ERROR, format!("Serialization error: {}", e)),
            },
            Err(e) => JsonRpcResponse::error(id, INTERNAL_ERROR, format!("Storage error: {}", e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quill_storage::MemoryStore;

    fn server() -> QuillServer<MemoryStore> {
        QuillServer::new(Arc::new(MemoryStore::seeded()))
    }

    fn request(method: &str, params: serde_json::Value) -> JsonRpcRequest {
        JsonRpcRequest {
            jsonrpc: "2.0".to_string(),
            id: json!(1),
            method: method.to_string(),
            params,
        }
    }

    #[tokio::test]
    async fn test_execute_method() {
        let response = server()
            .handle_request(request(
                "execute",
                json!({"selection": [{"field": "authors", "arguments": {"query": "mike"}, "selection": [{"field": "id"}]}]}),
            ))
            .await;

        assert!(response.error.is_none());
        assert_eq!(
            response.result.unwrap(),
            json!({"data": {"authors": [{"id": "3"}]}})
        );
    }

    #[tokio::test]
    async fn test_unknown_method() {
        let response = server().handle_request(request("subscribe", json!({}))).await;
        assert_eq!(response.error.unwrap().code, METHOD_NOT_FOUND);
    }

    #[tokio::test]
    async fn test_invalid_params() {
        let response = server()
            .handle_request(request("execute", json!({"operation": "delete"})))
            .await;
        assert_eq!(response.error.unwrap().code, INVALID_PARAMS);
    }

    #[tokio::test]
    async fn test_serve_lines() {
        let input = concat!(
            r#"{"jsonrpc":"2.0","id":1,"method":"ping"}"#,
            "\n",
            "not json\n",
            "\n",
            r#"{"jsonrpc":"2.0","id":2,"method":"stats"}"#,
            "\n",
        );
        let server = server();
        let mut transport = LineTransport::new(input.as_bytes(), Vec::new());
        server.serve(&mut transport).await.unwrap();

        let output = String::from_utf8(transport.into_writer()).unwrap();
        let lines: Vec<serde_json::Value> = output
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0]["result"], json!({}));
        assert_eq!(lines[1]["error"]["code"], PARSE_ERROR);
        assert_eq!(
            lines[2]["result"],
            json!({"authors": 3, "contents": 3, "annotations": 4})
        );
    }

    #[tokio::test]
    async fn test_serve_survives_invalid_utf8() {
        let mut input: Vec<u8> = vec![0xff, 0xfe, b'\n'];
        input.extend_from_slice(br#"{"jsonrpc":"2.0","id":2,"method":"ping"}"#);
        input.push(b'\n');

        let server = server();
        let mut transport = LineTransport::new(input.as_slice(), Vec::new());
        server.serve(&mut transport).await.unwrap();

        let output = String::from_utf8(transport.into_writer()).unwrap();
        let lines: Vec<serde_json::Value> = output
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["error"]["code"], PARSE_ERROR);
        assert_eq!(lines[1]["id"], 2);
        assert_eq!(lines[1]["result"], json!({}));
    }

    #[tokio::test]
    async fn test_schema_method() {
        let response = server().handle_request(request("schema", json!(null))).await;
        let sdl = response.result.unwrap()["sdl"].as_str().unwrap().to_string();
        assert!(sdl.contains("type Mutation {"));
    }
}
