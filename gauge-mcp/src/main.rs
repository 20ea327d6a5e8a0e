//! Gauge MCP Server
//!
//! MCP Server implementing spec 2025-11-25
//!
//! Tools:
//! - list_categories: Ordered category names
//! - list_units: Ordered unit names of a category
//! - convert: Convert a value between two units of a category
//!
//! The conversion core is pure and synchronous, so the server is a plain
//! line-delimited JSON-RPC loop over stdio. Logs go to stderr; stdout carries
//! protocol responses only.

use std::io::{self, BufRead, IsTerminal, Write};

use gauge_units::{categories, convert, units, Conversion};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value as JsonValue};
use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;

const PROTOCOL_VERSION: &str = "2025-11-25";
const SERVER_NAME: &str = "gauge";
const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");

// MCP Protocol types
#[derive(Debug, Deserialize)]
struct McpRequest {
    #[allow(dead_code)]
    jsonrpc: String,
    id: Option<JsonValue>,
    method: String,
    #[serde(default)]
    params: Option<JsonValue>,
}

#[derive(Debug, Serialize)]
struct McpResponse {
    jsonrpc: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<McpError>,
}

#[derive(Debug, Serialize)]
struct McpError {
    code: i32,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<JsonValue>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    info!("Gauge MCP Server v{} started", SERVER_VERSION);
    info!("Protocol: {}", PROTOCOL_VERSION);
    debug!("stdin is_terminal: {}", io::stdin().is_terminal());
    debug!("stdout is_terminal: {}", io::stdout().is_terminal());
    info!("Categories: {}", categories().join(", "));

    let stdin = io::stdin();
    let mut reader = io::BufReader::new(stdin.lock());

    info!("Server ready, waiting for requests...");

    loop {
        let mut line = String::new();
        match reader.read_line(&mut line) {
            Ok(0) => {
                info!("Client disconnected (EOF)");
                break;
            }
            Ok(_) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }

                let request: McpRequest = match serde_json::from_str(line) {
                    Ok(r) => r,
                    Err(e) => {
                        warn!("Error parsing request: {}", e);
                        let response = McpResponse {
                            jsonrpc: "2.0".to_string(),
                            id: None,
                            result: None,
                            error: Some(McpError {
                                code: -32700,
                                message: format!("Parse error: {}", e),
                                data: None,
                            }),
                        };
                        write_response(&response);
                        continue;
                    }
                };

                debug!("Processing: {}", request.method);

                let response = handle_request(&request);

                // Notifications (no id) do not get a response
                if request.id.is_none() {
                    debug!("Notification processed (no response): {}", request.method);
                    continue;
                }

                write_response(&response);
            }
            Err(e) => {
                error!("Error reading input: {}", e);
                break;
            }
        }
    }

    info!("Server shutting down");
}

fn write_response(response: &McpResponse) {
    let response_json = match serde_json::to_string(response) {
        Ok(s) => s,
        Err(e) => {
            error!("Error serializing response: {}", e);
            return;
        }
    };
    let mut stdout = io::stdout().lock();
    if let Err(e) = writeln!(stdout, "{}", response_json) {
        error!("Error writing response: {}", e);
        return;
    }
    if let Err(e) = stdout.flush() {
        error!("Error flushing stdout: {}", e);
    }
}

fn handle_request(request: &McpRequest) -> McpResponse {
    let result = match request.method.as_str() {
        // Lifecycle
        "initialize" => handle_initialize(&request.params),
        "initialized" => Ok(json!({})),
        "ping" => Ok(json!({})),

        // Tools
        "tools/list" => handle_tools_list(),
        "tools/call" => handle_tool_call(&request.params),

        _ => Err(McpError {
            code: -32601,
            message: format!("Method not found: {}", request.method),
            data: None,
        }),
    };

    match result {
        Ok(r) => McpResponse {
            jsonrpc: "2.0".to_string(),
            id: request.id.clone(),
            result: Some(r),
            error: None,
        },
        Err(e) => McpResponse {
            jsonrpc: "2.0".to_string(),
            id: request.id.clone(),
            result: None,
            error: Some(e),
        },
    }
}

fn handle_initialize(params: &Option<JsonValue>) -> Result<JsonValue, McpError> {
    let client_info = params
        .as_ref()
        .and_then(|p| p.get("clientInfo"))
        .and_then(|c| c.get("name"))
        .and_then(|n| n.as_str())
        .unwrap_or("unknown");

    // Use client's protocol version for compatibility
    let client_protocol = params
        .as_ref()
        .and_then(|p| p.get("protocolVersion"))
        .and_then(|v| v.as_str())
        .unwrap_or(PROTOCOL_VERSION);

    info!("Client connected: {} (protocol: {})", client_info, client_protocol);

    Ok(json!({
        "protocolVersion": client_protocol,
        "serverInfo": {
            "name": SERVER_NAME,
            "version": SERVER_VERSION,
            "description": "Unit conversion across Length, Weight, Temperature and Data Transfer Rate"
        },
        "capabilities": {
            "tools": {
                "listChanged": false
            }
        },
        "instructions": "Use 'list_categories' and 'list_units' to populate selections, then 'convert' to compute a result. The result includes a formatted message and a two-bar chart payload for visualization."
    }))
}

fn handle_tools_list() -> Result<JsonValue, McpError> {
    Ok(json!({
        "tools": [
            {
                "name": "list_categories",
                "description": "List measurement categories in selection order.",
                "inputSchema": {
                    "type": "object",
                    "properties": {}
                }
            },
            {
                "name": "list_units",
                "description": "List the units of a category in selection order.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "category": {
                            "type": "string",
                            "description": "Category name (e.g., \"Length\")"
                        }
                    },
                    "required": ["category"]
                }
            },
            {
                "name": "convert",
                "description": "Convert a value from one unit to another within a category. Returns the result, a formatted message, and chart data.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "value": {
                            "type": "number",
                            "description": "Value to convert (minimum 0)",
                            "minimum": 0.0
                        },
                        "from_unit": {
                            "type": "string",
                            "description": "Source unit (e.g., \"Kilometer\")"
                        },
                        "to_unit": {
                            "type": "string",
                            "description": "Target unit (e.g., \"Meter\")"
                        },
                        "category": {
                            "type": "string",
                            "description": "Category name (e.g., \"Length\")"
                        }
                    },
                    "required": ["value", "from_unit", "to_unit", "category"]
                }
            }
        ]
    }))
}

fn handle_tool_call(params: &Option<JsonValue>) -> Result<JsonValue, McpError> {
    let params = params.as_ref().ok_or(McpError {
        code: -32602,
        message: "Missing params".to_string(),
        data: None,
    })?;

    let name = params.get("name").and_then(|v| v.as_str()).ok_or(McpError {
        code: -32602,
        message: "Missing tool name".to_string(),
        data: None,
    })?;

    let args = params.get("arguments").cloned().unwrap_or(json!({}));

    match name {
        "list_categories" => tool_list_categories(),
        "list_units" => tool_list_units(args),
        "convert" => tool_convert(args),
        _ => Err(McpError {
            code: -32602,
            message: format!("Unknown tool: {}", name),
            data: None,
        }),
    }
}

fn require_str<'a>(args: &'a JsonValue, key: &str) -> Result<&'a str, McpError> {
    args.get(key).and_then(|v| v.as_str()).ok_or(McpError {
        code: -32602,
        message: format!("Missing {} argument", key),
        data: None,
    })
}

fn tool_list_categories() -> Result<JsonValue, McpError> {
    let names = categories();
    Ok(json!({
        "content": [{ "type": "text", "text": names.join("\n") }],
        "categories": names,
        "isError": false
    }))
}

fn tool_list_units(args: JsonValue) -> Result<JsonValue, McpError> {
    let category = require_str(&args, "category")?;

    match units(category) {
        Ok(names) => Ok(json!({
            "content": [{ "type": "text", "text": names.join("\n") }],
            "units": names,
            "isError": false
        })),
        Err(e) => Ok(json!({
            "content": [{ "type": "text", "text": format!("Conversion not possible: {}", e) }],
            "isError": true
        })),
    }
}

fn tool_convert(args: JsonValue) -> Result<JsonValue, McpError> {
    let value = args.get("value").and_then(|v| v.as_f64()).ok_or(McpError {
        code: -32602,
        message: "Missing value argument".to_string(),
        data: None,
    })?;
    let from_unit = require_str(&args, "from_unit")?;
    let to_unit = require_str(&args, "to_unit")?;
    let category = require_str(&args, "category")?;

    match convert(value, from_unit, to_unit, category) {
        Ok(result) => {
            let conversion = Conversion::new(value, from_unit, to_unit, result);
            debug!("{} [{}]", conversion, category);
            let message = conversion.to_string();
            let chart = conversion.chart();
            Ok(json!({
                "content": [{ "type": "text", "text": message }],
                "conversion": conversion,
                "chart": chart,
                "isError": false
            }))
        }
        Err(e) => {
            warn!("convert failed: {}", e);
            Ok(json!({
                "content": [{ "type": "text", "text": format!("Conversion not possible: {}", e) }],
                "isError": true
            }))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_tool_success() {
        let args = json!({
            "value": 5.0,
            "from_unit": "Kilometer",
            "to_unit": "Meter",
            "category": "Length"
        });
        let result = tool_convert(args).unwrap();
        assert_eq!(result["isError"], false);
        assert_eq!(result["conversion"]["result"], 5000.0);
        assert_eq!(
            result["content"][0]["text"],
            "5 Kilometer is equal to 5000.00 Meter"
        );
        assert_eq!(result["chart"]["values"][1], 5000.0);
    }

    #[test]
    fn test_convert_tool_unknown_unit() {
        let args = json!({
            "value": 1.0,
            "from_unit": "Furlong",
            "to_unit": "Meter",
            "category": "Length"
        });
        let result = tool_convert(args).unwrap();
        assert_eq!(result["isError"], true);
    }

    #[test]
    fn test_convert_tool_missing_argument() {
        let args = json!({ "value": 1.0 });
        let err = tool_convert(args).unwrap_err();
        assert_eq!(err.code, -32602);
    }

    #[test]
    fn test_list_tools_shape() {
        let listing = handle_tools_list().unwrap();
        let tools = listing["tools"].as_array().unwrap();
        assert_eq!(tools.len(), 3);
    }

    #[test]
    fn test_unknown_method() {
        let request = McpRequest {
            jsonrpc: "2.0".to_string(),
            id: Some(json!(1)),
            method: "resources/list".to_string(),
            params: None,
        };
        let response = handle_request(&request);
        assert_eq!(response.error.unwrap().code, -32601);
    }
}
