use anyhow::Result;
use reqwest::Client;
use rmcp::{
    handler::server::{wrapper::Parameters, ServerHandler, tool::ToolRouter},
    model::{CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
    ErrorData as McpError,
};
use std::sync::Arc;

use crate::config::Config;
use crate::constants::{DEFAULT_PLACE, USER_AGENT};
use crate::error::TrendError;
use crate::formatters::{format_chart, format_trend};
use crate::models::GetTemperatureTrendRequest;
use crate::pipeline::TrendPipeline;

/// MCP service exposing the long-term temperature trend of a place
#[derive(Clone)]
pub struct TemperatureTrend {
    pipeline: Arc<TrendPipeline>,
    tool_router: ToolRouter<Self>,
}

impl TemperatureTrend {
    /// Creates a new service instance
    pub fn new(config: Config) -> Result<Self> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;

        Ok(Self {
            pipeline: Arc::new(TrendPipeline::new(Arc::new(client), config)),
            tool_router: Self::tool_router(),
        })
    }
}

fn to_mcp_error(error: TrendError) -> McpError {
    match error {
        TrendError::InvalidQuery(_) | TrendError::Lookup(_) => {
            McpError::invalid_params(error.to_string(), None)
        }
        other => McpError::internal_error(
            format!("Failed to build temperature trend: {}", other),
            None,
        ),
    }
}

#[tool_handler]
impl ServerHandler for TemperatureTrend {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "mcp-temperature-trend".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                icons: None,
                title: None,
                website_url: None,
            },
            instructions: Some(
                "Long-term temperature trends powered by OpenStreetMap Nominatim and the \
                Open-Meteo historical archive. Returns the three year moving average of daily \
                temperatures since 1940 and a Vega-Lite chart of it."
                    .to_string(),
            ),
        }
    }
}

#[tool_router]
impl TemperatureTrend {
    /// Gets the long-term temperature trend for a place
    #[tool(description = "Get the temperature change since 1940 for a place. Provide a free-text place name (e.g., 'Zurich', 'Lisbon, Portugal'); defaults to Zurich. Returns a summary and a Vega-Lite line chart of the three year moving average.")]
    pub async fn get_temperature_trend(
        &self,
        Parameters(request): Parameters<GetTemperatureTrendRequest>,
    ) -> Result<CallToolResult, McpError> {
        let place = request.place.unwrap_or_else(|| DEFAULT_PLACE.to_string());
        tracing::info!("Getting temperature trend for: {}", place);

        let report = self.pipeline.run(&place).await.map_err(to_mcp_error)?;

        let chart = format_chart(&report.chart).map_err(|e| {
            McpError::internal_error(format!("Failed to serialize chart: {}", e), None)
        })?;

        Ok(CallToolResult::success(vec![
            Content::text(format_trend(&report)),
            Content::text(chart),
        ]))
    }
}
