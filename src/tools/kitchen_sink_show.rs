// src/tools/kitchen_sink_show.rs

use rmcp::ErrorData;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::CallToolResult;
use rmcp::schemars;
use rmcp::schemars::JsonSchema;
use serde::Deserialize;
use tracing::debug;

use super::{WidgetPayload, WidgetTool, default_accent_color, widget_result};

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ShowArgs {
    #[schemars(description = "Primary message to render in the widget.")]
    pub message: String,

    #[serde(default = "default_accent_color")]
    #[schemars(description = "Accent color for the widget header.")]
    pub accent_color: String,

    #[serde(default)]
    #[schemars(description = "Optional supporting copy shown under the main message.")]
    pub details: Option<String>,
}

/// Renders the widget with the caller's message. Any string is accepted,
/// including an empty one.
pub async fn kitchen_sink_show(
    Parameters(args): Parameters<ShowArgs>,
) -> Result<CallToolResult, ErrorData> {
    debug!(message_len = args.message.len(), has_details = args.details.is_some(), "kitchen-sink-show");

    let payload = WidgetPayload {
        message: args.message,
        accent_color: args.accent_color,
        details: args.details,
        from_tool: WidgetTool::Show,
    };
    let summary = format!("Widget ready with message: {}", payload.message);
    widget_result(summary, &payload)
}
