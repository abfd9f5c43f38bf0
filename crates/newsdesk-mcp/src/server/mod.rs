//! MCP server: request dispatch over a tool registry and prompt set

use newsdesk_tools::{Prompt, ToolRegistry};
use serde_json::{Value, json};
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::protocol::{
    CallToolParams, GetPromptParams, MCPContent, MCPPromptArgument, MCPPromptDefinition,
    MCPPromptMessage, MCPServerInfo, MCPToolDefinition, MCPToolResult, Request, Response,
    RpcError, negotiate_version,
};

pub mod stdio;

/// MCP server exposing registered tools and prompts
///
/// Requests are handled one at a time, in arrival order.
pub struct MCPServer {
    info: MCPServerInfo,
    tools: Arc<ToolRegistry>,
    prompts: Vec<Arc<dyn Prompt>>,
    instructions: Option<String>,
}

impl MCPServer {
    pub fn new(
        name: impl Into<String>,
        version: impl Into<String>,
        tools: Arc<ToolRegistry>,
    ) -> Self {
        Self {
            info: MCPServerInfo {
                name: name.into(),
                version: version.into(),
            },
            tools,
            prompts: Vec::new(),
            instructions: None,
        }
    }

    /// Add a prompt template; a later prompt with the same name wins
    pub fn with_prompt(mut self, prompt: Arc<dyn Prompt>) -> Self {
        self.prompts.retain(|p| p.name() != prompt.name());
        self.prompts.push(prompt);
        self
    }

    /// Usage hint returned to clients at initialization
    pub fn with_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.instructions = Some(instructions.into());
        self
    }

    /// Handle one raw frame
    ///
    /// Returns the response to write, or `None` for notifications.
    pub async fn handle_frame(&self, frame: &str) -> Option<Response> {
        let value: Value = match serde_json::from_str(frame) {
            Ok(v) => v,
            Err(e) => {
                warn!(error = %e, "Unparseable frame");
                return Some(Response::error(Value::Null, RpcError::parse_error(e.to_string())));
            }
        };

        let request = match Request::from_value(value) {
            Ok(r) => r,
            Err((id, err)) => {
                warn!(message = %err.message, "Invalid request");
                return Some(Response::error(id, err));
            }
        };

        let Some(id) = request.id.clone() else {
            debug!(method = %request.method, "Notification received");
            return None;
        };

        debug!(method = %request.method, "Handling request");
        let response = match self.dispatch(&request.method, request.params).await {
            Ok(result) => Response::success(id, result),
            Err(err) => {
                debug!(method = %request.method, code = err.code, "Request failed");
                Response::error(id, err)
            }
        };
        Some(response)
    }

    async fn dispatch(&self, method: &str, params: Value) -> Result<Value, RpcError> {
        match method {
            "initialize" => Ok(self.initialize(&params)),
            "ping" => Ok(json!({})),
            "tools/list" => Ok(self.list_tools()),
            "tools/call" => self.call_tool(params).await,
            "prompts/list" => Ok(self.list_prompts()),
            "prompts/get" => self.get_prompt(params),
            other => Err(RpcError::method_not_found(other)),
        }
    }

    fn initialize(&self, params: &Value) -> Value {
        let requested = params.get("protocolVersion").and_then(Value::as_str);
        let version = negotiate_version(requested);
        info!(
            client = params["clientInfo"]["name"].as_str().unwrap_or("unknown"),
            protocol_version = version,
            "Client initialized"
        );

        let mut result = json!({
            "protocolVersion": version,
            "capabilities": {
                "tools": { "listChanged": false },
                "prompts": { "listChanged": false },
            },
            "serverInfo": self.info,
        });
        if let Some(instructions) = &self.instructions {
            result["instructions"] = json!(instructions);
        }
        result
    }

    fn list_tools(&self) -> Value {
        let tools: Vec<MCPToolDefinition> = self
            .tools
            .list_tools()
            .iter()
            .map(|tool| MCPToolDefinition {
                name: tool.name().to_string(),
                description: Some(tool.description().to_string()),
                input_schema: tool.input_schema(),
            })
            .collect();
        json!({ "tools": tools })
    }

    async fn call_tool(&self, params: Value) -> Result<Value, RpcError> {
        let params: CallToolParams = serde_json::from_value(params)
            .map_err(|e| RpcError::invalid_params(e.to_string()))?;

        let tool = self
            .tools
            .get(&params.name)
            .ok_or_else(|| RpcError::invalid_params(format!("Unknown tool: {}", params.name)))?;

        let arguments = params.arguments.unwrap_or(Value::Null);
        let result = match tool.execute(arguments).await {
            Ok(output) => {
                info!(tool = %params.name, "Tool call completed");
                MCPToolResult::text(output.text, output.structured)
            }
            Err(e) => {
                warn!(tool = %params.name, error = %e, "Tool call failed");
                MCPToolResult::error(e.to_string())
            }
        };

        serde_json::to_value(result).map_err(|e| RpcError::internal(e.to_string()))
    }

    fn list_prompts(&self) -> Value {
        let prompts: Vec<MCPPromptDefinition> = self
            .prompts
            .iter()
            .map(|prompt| MCPPromptDefinition {
                name: prompt.name().to_string(),
                description: Some(prompt.description().to_string()),
                arguments: prompt
                    .arguments()
                    .into_iter()
                    .map(|arg| MCPPromptArgument {
                        name: arg.name,
                        description: arg.description,
                        required: arg.required,
                    })
                    .collect(),
            })
            .collect();
        json!({ "prompts": prompts })
    }

    fn get_prompt(&self, params: Value) -> Result<Value, RpcError> {
        let params: GetPromptParams = serde_json::from_value(params)
            .map_err(|e| RpcError::invalid_params(e.to_string()))?;

        let prompt = self
            .prompts
            .iter()
            .find(|p| p.name() == params.name)
            .ok_or_else(|| RpcError::invalid_params(format!("Unknown prompt: {}", params.name)))?;

        let text = prompt
            .render(&params.arguments)
            .map_err(|e| RpcError::invalid_params(e.to_string()))?;

        let messages = vec![MCPPromptMessage {
            role: "user".to_string(),
            content: MCPContent::Text { text },
        }];
        Ok(json!({
            "description": prompt.description(),
            "messages": messages,
        }))
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use async_trait::async_trait;
    use newsdesk_core::{Error, Result};
    use newsdesk_tools::{PromptArgument, Tool, ToolOutput};
    use serde_json::Map;

    /// Echoes `message`, failing when it is absent
    struct EchoTool;

    #[async_trait]
    impl Tool for EchoTool {
        async fn execute(&self, params: Value) -> Result<ToolOutput> {
            let message = params
                .get("message")
                .and_then(Value::as_str)
                .ok_or_else(|| Error::InvalidParams("missing field `message`".to_string()))?;
            Ok(ToolOutput::text(message).with_structured(&json!({ "echo": message })))
        }

        fn name(&self) -> &str {
            "echo"
        }

        fn description(&self) -> &str {
            "Echo a message"
        }

        fn input_schema(&self) -> Value {
            json!({
                "type": "object",
                "properties": { "message": { "type": "string" } },
                "required": ["message"],
            })
        }
    }

    struct GreetingPrompt;

    impl Prompt for GreetingPrompt {
        fn name(&self) -> &str {
            "greeting"
        }

        fn description(&self) -> &str {
            "Greet someone"
        }

        fn arguments(&self) -> Vec<PromptArgument> {
            vec![PromptArgument::required("who", "Person to greet")]
        }

        fn render(&self, arguments: &Map<String, Value>) -> Result<String> {
            let who = arguments
                .get("who")
                .and_then(Value::as_str)
                .ok_or_else(|| Error::InvalidParams("missing `who`".to_string()))?;
            Ok(format!("Say hello to {who}"))
        }
    }

    pub(crate) fn server() -> MCPServer {
        let registry = Arc::new(ToolRegistry::new());
        registry.register(Arc::new(EchoTool));
        MCPServer::new("test_server", "1.2.3", registry).with_prompt(Arc::new(GreetingPrompt))
    }

    async fn call(server: &MCPServer, frame: Value) -> Value {
        let response = server.handle_frame(&frame.to_string()).await.unwrap();
        serde_json::to_value(response).unwrap()
    }

    #[tokio::test]
    async fn test_initialize() {
        let server = server().with_instructions("Use the echo tool");
        let response = call(
            &server,
            json!({
                "jsonrpc": "2.0", "id": 1, "method": "initialize",
                "params": {
                    "protocolVersion": "2024-11-05",
                    "capabilities": {},
                    "clientInfo": { "name": "test-client", "version": "0.1" }
                }
            }),
        )
        .await;

        let result = &response["result"];
        assert_eq!(response["id"], 1);
        assert_eq!(result["protocolVersion"], "2024-11-05");
        assert_eq!(result["serverInfo"]["name"], "test_server");
        assert_eq!(result["serverInfo"]["version"], "1.2.3");
        assert!(result["capabilities"]["tools"].is_object());
        assert!(result["capabilities"]["prompts"].is_object());
        assert_eq!(result["instructions"], "Use the echo tool");
    }

    #[tokio::test]
    async fn test_ping_and_notification() {
        let server = server();
        let response = call(&server, json!({"jsonrpc": "2.0", "id": "p", "method": "ping"})).await;
        assert_eq!(response["id"], "p");
        assert_eq!(response["result"], json!({}));

        let none = server
            .handle_frame(r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#)
            .await;
        assert!(none.is_none());
    }

    #[tokio::test]
    async fn test_tools_list() {
        let request = json!({"jsonrpc": "2.0", "id": 2, "method": "tools/list"});
        let response = call(&server(), request).await;
        let tools = response["result"]["tools"].as_array().unwrap();
        assert_eq!(tools.len(), 1);
        assert_eq!(tools[0]["name"], "echo");
        assert_eq!(tools[0]["inputSchema"]["required"][0], "message");
    }

    #[tokio::test]
    async fn test_tools_call() {
        let response = call(
            &server(),
            json!({
                "jsonrpc": "2.0", "id": 3, "method": "tools/call",
                "params": { "name": "echo", "arguments": { "message": "hi" } }
            }),
        )
        .await;

        let result = &response["result"];
        assert_eq!(result["content"][0]["type"], "text");
        assert_eq!(result["content"][0]["text"], "hi");
        assert_eq!(result["structuredContent"]["echo"], "hi");
        assert_eq!(result["isError"], false);
    }

    #[tokio::test]
    async fn test_tools_call_invalid_arguments_is_error_result() {
        let response = call(
            &server(),
            json!({
                "jsonrpc": "2.0", "id": 4, "method": "tools/call",
                "params": { "name": "echo", "arguments": {} }
            }),
        )
        .await;

        let result = &response["result"];
        assert_eq!(result["isError"], true);
        assert_eq!(
            result["content"][0]["text"],
            "Invalid parameters: missing field `message`"
        );
    }

    #[tokio::test]
    async fn test_unknown_tool() {
        let response = call(
            &server(),
            json!({
                "jsonrpc": "2.0", "id": 5, "method": "tools/call",
                "params": { "name": "nope" }
            }),
        )
        .await;
        assert_eq!(response["error"]["code"], -32602);
        assert!(response.get("result").is_none());
    }

    #[tokio::test]
    async fn test_prompts() {
        let server = server();
        let request = json!({"jsonrpc": "2.0", "id": 6, "method": "prompts/list"});
        let listed = call(&server, request).await;
        let prompts = &listed["result"]["prompts"];
        assert_eq!(prompts[0]["name"], "greeting");
        assert_eq!(prompts[0]["arguments"][0]["name"], "who");
        assert_eq!(prompts[0]["arguments"][0]["required"], true);

        let got = call(
            &server,
            json!({
                "jsonrpc": "2.0", "id": 7, "method": "prompts/get",
                "params": { "name": "greeting", "arguments": { "who": "Ada" } }
            }),
        )
        .await;
        let message = &got["result"]["messages"][0];
        assert_eq!(message["role"], "user");
        assert_eq!(message["content"]["text"], "Say hello to Ada");

        let missing = call(
            &server,
            json!({
                "jsonrpc": "2.0", "id": 8, "method": "prompts/get",
                "params": { "name": "greeting" }
            }),
        )
        .await;
        assert_eq!(missing["error"]["code"], -32602);
    }

    #[tokio::test]
    async fn test_protocol_errors() {
        let server = server();

        let parse = server.handle_frame("{not json").await.unwrap();
        assert_eq!(parse.id, Value::Null);
        assert_eq!(parse.error.unwrap().code, -32700);

        let request = json!({"jsonrpc": "2.0", "id": 9, "method": "resources/list"});
        let unknown = call(&server, request).await;
        assert_eq!(unknown["error"]["code"], -32601);

        let invalid = call(&server, json!({"id": 10, "method": "ping"})).await;
        assert_eq!(invalid["id"], 10);
        assert_eq!(invalid["error"]["code"], -32600);
    }

    #[test]
    fn test_prompt_replacement() {
        let server = server().with_prompt(Arc::new(GreetingPrompt));
        assert_eq!(server.prompts.len(), 1);
    }
}
