// src/tools/mod.rs

//! Widget tools. Both return the same template so the host can re-hydrate
//! the rendered widget with fresh structured content.

pub mod kitchen_sink_refresh;
pub mod kitchen_sink_show;

use rmcp::ErrorData;
use rmcp::model::{CallToolResult, Content, JsonObject, Meta};
use rmcp::serde_json::{self, Value};
use serde::Serialize;

use crate::widget::TEMPLATE_URI;

pub const DEFAULT_ACCENT_COLOR: &str = "#2d6cdf";

/// Which tool produced a payload. Only handlers construct this, callers
/// never get to pick it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum WidgetTool {
    #[serde(rename = "kitchen-sink-show")]
    Show,
    #[serde(rename = "kitchen-sink-refresh")]
    Refresh,
}

impl WidgetTool {
    pub fn as_str(self) -> &'static str {
        match self {
            WidgetTool::Show => "kitchen-sink-show",
            WidgetTool::Refresh => "kitchen-sink-refresh",
        }
    }
}

/// Structured content the widget renders.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetPayload {
    pub message: String,
    pub accent_color: String,
    /// Serialized as `null` when absent; the widget checks for it.
    pub details: Option<String>,
    pub from_tool: WidgetTool,
}

/// `_meta` telling the host which template to render and what to show while
/// the call is in flight.
pub fn tool_meta(invocation: WidgetTool) -> Meta {
    let mut meta = JsonObject::new();
    meta.insert("openai/outputTemplate".into(), TEMPLATE_URI.into());
    meta.insert(
        "openai/toolInvocation/invoking".into(),
        "Preparing the kitchen sink widget".into(),
    );
    meta.insert("openai/toolInvocation/invoked".into(), "Widget rendered".into());
    meta.insert("openai/widgetAccessible".into(), Value::Bool(true));
    meta.insert("openai/resultCanProduceWidget".into(), Value::Bool(true));
    meta.insert("invocation".into(), invocation.as_str().into());
    Meta(meta)
}

/// Bundles the text summary, the payload and the render metadata.
pub(crate) fn widget_result(
    summary: String,
    payload: &WidgetPayload,
) -> Result<CallToolResult, ErrorData> {
    let structured = serde_json::to_value(payload)
        .map_err(|e| ErrorData::internal_error(format!("Failed to encode payload: {e}"), None))?;

    let mut result = CallToolResult::success(vec![Content::text(summary)]);
    result.structured_content = Some(structured);
    result.meta = Some(tool_meta(payload.from_tool));
    Ok(result)
}

fn default_accent_color() -> String {
    DEFAULT_ACCENT_COLOR.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::serde_json::json;

    #[test]
    fn payload_uses_camel_case_and_null_details() {
        let payload = WidgetPayload {
            message: "hi".into(),
            accent_color: DEFAULT_ACCENT_COLOR.into(),
            details: None,
            from_tool: WidgetTool::Show,
        };
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({
                "message": "hi",
                "accentColor": "#2d6cdf",
                "details": null,
                "fromTool": "kitchen-sink-show",
            })
        );
    }

    #[test]
    fn meta_points_at_the_widget_template() {
        let meta = tool_meta(WidgetTool::Refresh);
        assert_eq!(meta.0["openai/outputTemplate"], json!(TEMPLATE_URI));
        assert_eq!(meta.0["openai/toolInvocation/invoking"], json!("Preparing the kitchen sink widget"));
        assert_eq!(meta.0["openai/toolInvocation/invoked"], json!("Widget rendered"));
        assert_eq!(meta.0["openai/widgetAccessible"], json!(true));
        assert_eq!(meta.0["openai/resultCanProduceWidget"], json!(true));
        assert_eq!(meta.0["invocation"], json!("kitchen-sink-refresh"));
    }

    #[test]
    fn tool_names_match_serialized_form() {
        for tool in [WidgetTool::Show, WidgetTool::Refresh] {
            assert_eq!(serde_json::to_value(tool).unwrap(), json!(tool.as_str()));
        }
    }
}
