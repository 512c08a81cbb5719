use serde::{Deserialize, Serialize};

/// Error codes the API documents for 422 responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    FF08,
    RP03,
    BE18,
    RP01,
    PA02,
    AM06,
    AM02,
    AM03,
    RP02,
    RP06,
    ACMT03,
    ACMT01,
    ACMT07,
}

impl ErrorCode {
    pub const ALL: [ErrorCode; 13] = [
        ErrorCode::FF08,
        ErrorCode::RP03,
        ErrorCode::BE18,
        ErrorCode::RP01,
        ErrorCode::PA02,
        ErrorCode::AM06,
        ErrorCode::AM02,
        ErrorCode::AM03,
        ErrorCode::RP02,
        ErrorCode::RP06,
        ErrorCode::ACMT03,
        ErrorCode::ACMT01,
        ErrorCode::ACMT07,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::FF08 => "FF08",
            ErrorCode::RP03 => "RP03",
            ErrorCode::BE18 => "BE18",
            ErrorCode::RP01 => "RP01",
            ErrorCode::PA02 => "PA02",
            ErrorCode::AM06 => "AM06",
            ErrorCode::AM02 => "AM02",
            ErrorCode::AM03 => "AM03",
            ErrorCode::RP02 => "RP02",
            ErrorCode::RP06 => "RP06",
            ErrorCode::ACMT03 => "ACMT03",
            ErrorCode::ACMT01 => "ACMT01",
            ErrorCode::ACMT07 => "ACMT07",
        }
    }

    /// Human-readable message for display to the merchant or payer.
    pub fn message(&self) -> &'static str {
        match self {
            ErrorCode::FF08 => "PayeePaymentReference is invalid",
            ErrorCode::RP03 => "Callback URL is missing or does not use Https",
            ErrorCode::BE18 => "Payer alias is invalid",
            ErrorCode::RP01 => "Payee alias is missing or empty",
            ErrorCode::PA02 => "Amount value is missing or not a valid number",
            ErrorCode::AM06 => "Amount value is too low",
            ErrorCode::AM02 => "Amount value is too large",
            ErrorCode::AM03 => "Invalid or missing Currency",
            ErrorCode::RP02 => "Invalid Message text",
            ErrorCode::RP06 => {
                "Another active PaymentRequest already exists for this payerAlias"
            }
            ErrorCode::ACMT03 => "Payer not Enrolled",
            ErrorCode::ACMT01 => "Payer is not activated",
            ErrorCode::ACMT07 => "Payee not Enrolled",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ErrorCode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ErrorCode::ALL
            .iter()
            .find(|code| code.as_str() == s)
            .copied()
            .ok_or_else(|| format!("Unknown error code: {}", s))
    }
}

/// Looks up the display message for a raw error code.
pub fn error_message(code: &str) -> Option<&'static str> {
    code.parse::<ErrorCode>().ok().map(|c| c.message())
}

/// One entry of the error array returned with a 422 response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorObject {
    #[serde(default)]
    pub error_code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    #[serde(flatten)]
    pub additional: serde_json::Map<String, serde_json::Value>,
}

impl ErrorObject {
    pub fn new(error_code: impl Into<String>) -> Self {
        Self {
            error_code: error_code.into(),
            error_message: None,
            additional: serde_json::Map::new(),
        }
    }

    /// Known code, or `None` for codes outside the documented table.
    pub fn code(&self) -> Option<ErrorCode> {
        self.error_code.parse().ok()
    }

    /// Reads the body of a 422 response.
    ///
    /// An array is the documented shape. A lone object becomes a one-element
    /// list. Anything else yields an empty list.
    pub fn parse_list(body: &str) -> Vec<ErrorObject> {
        match serde_json::from_str::<serde_json::Value>(body) {
            Ok(serde_json::Value::Array(items)) => items
                .into_iter()
                .filter_map(|item| serde_json::from_value(item).ok())
                .collect(),
            Ok(item @ serde_json::Value::Object(_)) => {
                serde_json::from_value(item).into_iter().collect()
            }
            _ => Vec::new(),
        }
    }

    /// Local display message, falling back to the one sent by the server.
    pub fn display_message(&self) -> Option<&str> {
        self.code()
            .map(|c| c.message())
            .or(self.error_message.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_table() {
        assert_eq!(error_message("AM06"), Some("Amount value is too low"));
        assert_eq!(
            error_message("RP03"),
            Some("Callback URL is missing or does not use Https")
        );
        assert_eq!(error_message("XX99"), None);

        for code in ErrorCode::ALL {
            assert_eq!(code.as_str().parse::<ErrorCode>(), Ok(code));
        }
    }

    #[test]
    fn test_error_object_keeps_unknown_fields() {
        let body = r#"[
            {"errorCode": "AM06", "errorMessage": "Too low", "additionalInformation": null},
            {"errorCode": "ZZ01", "errorMessage": "Something new"}
        ]"#;

        let errors: Vec<ErrorObject> = serde_json::from_str(body).unwrap();

        assert_eq!(errors[0].code(), Some(ErrorCode::AM06));
        assert_eq!(errors[0].display_message(), Some("Amount value is too low"));
        assert!(errors[0].additional.contains_key("additionalInformation"));

        assert_eq!(errors[1].code(), None);
        assert_eq!(errors[1].error_code, "ZZ01");
        assert_eq!(errors[1].display_message(), Some("Something new"));
    }

    #[test]
    fn test_parse_list_shapes() {
        let errors = ErrorObject::parse_list(r#"{"errorCode":"AM06","errorMessage":"too low"}"#);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].code(), Some(ErrorCode::AM06));
        assert_eq!(errors[0].error_message.as_deref(), Some("too low"));

        let errors = ErrorObject::parse_list(r#"[{"errorCode":"RP01"},"junk",{"errorCode":"BE18"}]"#);
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[1].code(), Some(ErrorCode::BE18));

        assert!(ErrorObject::parse_list("<html>oops</html>").is_empty());
        assert!(ErrorObject::parse_list("").is_empty());
        assert!(ErrorObject::parse_list("42").is_empty());
    }

    #[test]
    fn test_minimal_error_object() {
        let errors: Vec<ErrorObject> = serde_json::from_str(r#"[{"errorCode":"AM06"}]"#).unwrap();
        assert_eq!(errors, vec![ErrorObject::new("AM06")]);
    }
}
