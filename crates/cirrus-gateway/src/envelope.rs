//! XML error envelope.

use std::fmt;

use quick_xml::events::Event;
use quick_xml::se::Serializer;
use quick_xml::Reader;
use serde::Serialize;

use crate::context::RequestContext;
use crate::error::GatewayError;
use crate::error_code::ErrorCode;

/// XML declaration prefixed to every error body.
pub const XML_HEADER: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n";

/// Body of an error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename = "Error", rename_all = "PascalCase")]
pub struct ErrorEnvelope {
    pub code: String,
    pub message: String,
    pub resource: String,

    /// Empty when the request carried no id.
    pub request_id: String,
}

impl ErrorEnvelope {
    /// Build the envelope for `code` from a request context.
    pub fn new<C: RequestContext + ?Sized>(code: &ErrorCode, ctx: &C) -> Self {
        Self {
            code: code.code().to_string(),
            message: code.message().to_string(),
            resource: ctx.resource(),
            request_id: ctx.request_id().unwrap_or_default().to_string(),
        }
    }

    /// Encode as an XML document.
    ///
    /// Empty fields are written as `<Message></Message>`, the same shape the
    /// static internal error body uses.
    pub fn to_xml(&self) -> Result<String, GatewayError> {
        let mut body = String::new();
        let mut serializer = Serializer::new(&mut body);
        serializer.expand_empty_elements(true);
        self.serialize(serializer).map_err(serialize_err)?;
        Ok(format!("{XML_HEADER}{body}"))
    }

    /// Parse an XML error document.
    ///
    /// Element text is kept verbatim, including surrounding whitespace.
    pub fn from_xml(xml: &str) -> Result<Self, GatewayError> {
        let mut reader = Reader::from_str(xml);
        reader.config_mut().trim_text(false);

        // Code, Message, Resource, RequestId
        let mut fields: [Option<String>; 4] = Default::default();
        let mut current: Option<usize> = None;
        let mut in_root = false;

        loop {
            match reader.read_event().map_err(parse_err)? {
                Event::Start(e) if !in_root => {
                    if e.name().as_ref() != b"Error" {
                        return Err(GatewayError::Parse("root element is not <Error>".into()));
                    }
                    in_root = true;
                }
                Event::Start(e) => {
                    current = field_index(e.name().as_ref());
                    if let Some(i) = current {
                        fields[i].get_or_insert_with(String::new);
                    }
                }
                Event::Empty(e) if in_root => {
                    if let Some(i) = field_index(e.name().as_ref()) {
                        fields[i].get_or_insert_with(String::new);
                    }
                }
                Event::Text(t) => {
                    if let Some(i) = current {
                        let text = t.unescape().map_err(parse_err)?;
                        fields[i].get_or_insert_with(String::new).push_str(&text);
                    }
                }
                Event::CData(c) => {
                    if let Some(i) = current {
                        let text = std::str::from_utf8(&c).map_err(parse_err)?;
                        fields[i].get_or_insert_with(String::new).push_str(text);
                    }
                }
                Event::End(_) => current = None,
                Event::Eof => break,
                _ => {}
            }
        }

        let [code, message, resource, request_id] = fields;
        Ok(Self {
            code: code.ok_or_else(|| missing("Code"))?,
            message: message.ok_or_else(|| missing("Message"))?,
            resource: resource.ok_or_else(|| missing("Resource"))?,
            request_id: request_id.ok_or_else(|| missing("RequestId"))?,
        })
    }
}

fn field_index(name: &[u8]) -> Option<usize> {
    match name {
        b"Code" => Some(0),
        b"Message" => Some(1),
        b"Resource" => Some(2),
        b"RequestId" => Some(3),
        _ => None,
    }
}

fn missing(element: &str) -> GatewayError {
    GatewayError::Parse(format!("missing <{element}>"))
}

fn serialize_err(e: impl fmt::Display) -> GatewayError {
    GatewayError::Serialize(e.to_string())
}

fn parse_err(e: impl fmt::Display) -> GatewayError {
    GatewayError::Parse(e.to_string())
}
