// src/tools/kitchen_sink_refresh.rs

use rmcp::ErrorData;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::CallToolResult;
use rmcp::schemars;
use rmcp::schemars::JsonSchema;
use serde::Deserialize;
use tracing::debug;

use super::{DEFAULT_ACCENT_COLOR, WidgetPayload, WidgetTool, widget_result};

pub const REFRESH_DETAILS: &str = "This response came from the widget via window.openai.callTool.";

#[derive(Debug, Deserialize, JsonSchema)]
pub struct RefreshArgs {
    #[schemars(description = "Message to echo back.")]
    pub message: String,
}

/// Echo called from inside the rendered widget via `window.openai.callTool`.
pub async fn kitchen_sink_refresh(
    Parameters(args): Parameters<RefreshArgs>,
) -> Result<CallToolResult, ErrorData> {
    debug!(message_len = args.message.len(), "kitchen-sink-refresh");

    let payload = WidgetPayload {
        message: args.message,
        accent_color: DEFAULT_ACCENT_COLOR.to_string(),
        details: Some(REFRESH_DETAILS.to_string()),
        from_tool: WidgetTool::Refresh,
    };
    widget_result(payload.message.clone(), &payload)
}
