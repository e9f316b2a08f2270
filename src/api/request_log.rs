use std::fmt;

use tracing::info;

use crate::application::context::RequestContext;
use crate::domain::value_objects::ParameterMap;

/// What the request log says about the body; the body text itself is never logged
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyMarker {
    Absent,
    Text { length: usize },
    Base64 { length: usize },
}

impl fmt::Display for BodyMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BodyMarker::Absent => write!(f, "absent"),
            BodyMarker::Text { length } => write!(f, "{} bytes", length),
            BodyMarker::Base64 { length } => write!(f, "[base64] {} bytes", length),
        }
    }
}

/// One structured line describing an inbound request
#[derive(Debug, Clone, PartialEq)]
pub struct RequestSummary<'a> {
    pub method: &'static str,
    pub path: &'a str,
    pub source_ip: Option<&'a str>,
    pub user_agent: Option<&'a str>,
    pub operation: &'static str,
    pub resource_id: Option<&'a str>,
    pub account_id: Option<&'a str>,
    pub api_id: Option<&'a str>,
    pub domain_name: Option<&'a str>,
    pub stage: Option<&'a str>,
    pub request_time: Option<&'a str>,
    pub request_time_epoch: Option<i64>,
    pub headers: Option<ParameterMap>,
    pub query: Option<&'a ParameterMap>,
    pub path_parameters: Option<&'a ParameterMap>,
    pub stage_variables: Option<&'a ParameterMap>,
    pub body: BodyMarker,
}

impl<'a> RequestSummary<'a> {
    pub fn new(ctx: &'a RequestContext<'a>, redacted_headers: &[String]) -> Self {
        let event = ctx.event();
        let gateway = &event.request_context;

        let body = match event.body.as_deref() {
            None | Some("") => BodyMarker::Absent,
            Some(raw) if event.is_base64_encoded => BodyMarker::Base64 { length: raw.len() },
            Some(raw) => BodyMarker::Text { length: raw.len() },
        };

        Self {
            method: ctx.method().as_str(),
            path: ctx.path(),
            source_ip: gateway.http.source_ip.as_deref(),
            user_agent: gateway.http.user_agent.as_deref(),
            operation: ctx.operation().as_str(),
            resource_id: ctx.resource_id(),
            account_id: gateway.account_id.as_deref(),
            api_id: gateway.api_id.as_deref(),
            domain_name: gateway.domain_name.as_deref(),
            stage: gateway.stage.as_deref(),
            request_time: gateway.time.as_deref(),
            request_time_epoch: gateway.time_epoch,
            headers: event
                .headers
                .as_ref()
                .map(|headers| headers.without_keys(redacted_headers)),
            query: non_empty(event.query_string_parameters.as_ref()),
            path_parameters: non_empty(event.path_parameters.as_ref()),
            stage_variables: non_empty(event.stage_variables.as_ref()),
            body,
        }
    }

    pub fn log(&self) {
        info!(
            method = self.method,
            path = self.path,
            source_ip = self.source_ip,
            user_agent = self.user_agent,
            operation = self.operation,
            resource_id = self.resource_id,
            account_id = self.account_id,
            api_id = self.api_id,
            domain_name = self.domain_name,
            stage = self.stage,
            request_time = self.request_time,
            request_time_epoch = self.request_time_epoch,
            headers = ?self.headers,
            query = ?self.query,
            path_parameters = ?self.path_parameters,
            stage_variables = ?self.stage_variables,
            body = %self.body,
            "Processing {} request",
            self.method
        );
    }
}

fn non_empty(params: Option<&ParameterMap>) -> Option<&ParameterMap> {
    params.filter(|p| !p.is_empty())
}
