//! Mapping instruction construction and reply parsing.
//!
//! The instruction is fully deterministic for a given header list: a fixed
//! task description, synonym rules for the three semantic fields, a
//! date-header rule, two worked examples, and the actual headers as a JSON
//! array. The model is asked for a bare JSON object; replies wrapped in a
//! code fence are tolerated.

use serde_json::Value;
use tracing::debug;

use colnorm_model::{CanonicalMapping, MappingEntry, NormalizeError, Result, TextGenerator};

/// Fixed system role sent with every mapping request.
pub const SYSTEM_PROMPT: &str = "You're a helpful assistant.";

/// Builds the mapping instruction for a list of column headers.
pub fn build_instruction(headers: &[String]) -> String {
    let header_list = Value::Array(
        headers
            .iter()
            .map(|h| Value::String(h.clone()))
            .collect::<Vec<_>>(),
    )
    .to_string();

    format!(
        r#"You are a smart assistant helping to understand the schema of a spreadsheet. You will be given a list of column headers. Your task is to identify important columns and return a JSON object mapping standard field names to the actual column names from the sheet.

Please:
- Map the following fields based on column header names:
    - Style ID (key "style_id") -> may appear as "style id", "id", "sid", "STYLE ID", etc.
    - Style Description (key "style_description") -> may appear as "style", "style descr", "style description", etc.
    - Color (key "color") -> may appear as "color", "clr", "shade", etc.
    - Date Columns -> these are columns where the header looks like a date (e.g. "2024/12/04", "june 4", "12-06", "2024-june-05" etc.). Normalize all dates to the format yyyy-mm-dd and use them directly as keys in the JSON.

Example 1:

Input:
["STYLE", "ID", "CLR", "2024/12/05", "2024-june-04", "June 06"]

Output:
{{
"style_id": "ID",
"style_description": "STYLE",
"color": "CLR",
"2024-12-05": "2024/12/05",
"2024-06-04": "2024-june-04",
"2024-06-06": "June 06"
}}

Example 2:

Input:
["sid", "style descr", "shade", "12-06", "2024-feb-24"]

Output:
{{
"style_id": "sid",
"style_description": "style descr",
"color": "shade",
"2024-12-06": "12-06",
"2024-02-24": "2024-feb-24"
}}

Now apply the same logic for the following column headers:

{header_list}

Respond ONLY with the JSON object. Do not explain or include any other text."#
    )
}

/// Parses a model reply into a canonical mapping.
///
/// Strips an optional triple-backtick fence (with or without a `json`
/// label) and parses the remainder as a JSON object of string values.
/// Anything else fails with [`NormalizeError::MappingParse`], which keeps
/// the raw reply for diagnostics.
pub fn parse_reply(reply: &str) -> Result<CanonicalMapping> {
    let stripped = strip_code_fence(reply);
    let value: Value = serde_json::from_str(stripped).map_err(|_| parse_error(reply))?;
    let Value::Object(object) = value else {
        return Err(parse_error(reply));
    };

    let mut entries = Vec::with_capacity(object.len());
    for (key, value) in object {
        let Value::String(header) = value else {
            return Err(parse_error(reply));
        };
        entries.push(MappingEntry { key, header });
    }
    Ok(CanonicalMapping::new(entries))
}

/// Builds the instruction, sends it, and parses the reply.
///
/// Service failures and parse failures stay distinct: the former surface
/// as [`NormalizeError::ServiceCall`] from the generator, the latter as
/// [`NormalizeError::MappingParse`]. No retries.
pub fn request_mapping(
    generator: &dyn TextGenerator,
    headers: &[String],
) -> Result<CanonicalMapping> {
    let instruction = build_instruction(headers);
    debug!(headers = headers.len(), "requesting column mapping");
    let reply = generator.generate(SYSTEM_PROMPT, &instruction)?;
    parse_reply(&reply)
}

/// Checks that every mapping value is a real header.
///
/// Fails fast with [`NormalizeError::MappingValidation`] instead of
/// letting a fabricated header surface later during projection.
pub fn validate_mapping(mapping: &CanonicalMapping, headers: &[String]) -> Result<()> {
    for entry in mapping {
        if !headers.iter().any(|h| h == &entry.header) {
            return Err(NormalizeError::MappingValidation {
                key: entry.key.clone(),
                header: entry.header.clone(),
            });
        }
    }
    Ok(())
}

fn parse_error(reply: &str) -> NormalizeError {
    NormalizeError::MappingParse {
        raw_reply: reply.to_string(),
    }
}

fn strip_code_fence(reply: &str) -> &str {
    let mut text = reply.trim();
    if let Some(rest) = text.strip_prefix("```") {
        text = rest.strip_prefix("json").unwrap_or(rest);
        if let Some(rest) = text.trim_end().strip_suffix("```") {
            text = rest;
        }
        text = text.trim();
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn instruction_embeds_headers_and_rules() {
        let headers = vec!["STYLE".to_string(), "2024/12/05".to_string()];
        let instruction = build_instruction(&headers);
        assert!(instruction.contains(r#"["STYLE","2024/12/05"]"#));
        assert!(instruction.contains("style_id"));
        assert!(instruction.contains("yyyy-mm-dd"));
        assert!(instruction.contains("Respond ONLY with the JSON object"));
    }

    #[test]
    fn instruction_is_deterministic() {
        let headers = vec!["ID".to_string()];
        assert_eq!(build_instruction(&headers), build_instruction(&headers));
    }

    #[test]
    fn bare_json_parses() {
        let mapping = parse_reply(r#"{"style_id": "ID", "color": "CLR"}"#).unwrap();
        let keys: Vec<_> = mapping.keys().collect();
        assert_eq!(keys, vec!["style_id", "color"]);
        assert_eq!(mapping.get("style_id"), Some("ID"));
    }

    #[test]
    fn fenced_json_parses_like_bare_json() {
        let bare = parse_reply(r#"{"style_id": "ID"}"#).unwrap();
        let fenced = parse_reply("```json\n{\"style_id\": \"ID\"}\n```").unwrap();
        let unlabeled = parse_reply("```\n{\"style_id\": \"ID\"}\n```").unwrap();
        assert_eq!(bare, fenced);
        assert_eq!(bare, unlabeled);
    }

    #[test]
    fn prose_reply_fails_with_raw_text_preserved() {
        let reply = "Sorry, I cannot map these headers.";
        let err = parse_reply(reply).unwrap_err();
        match err {
            NormalizeError::MappingParse { raw_reply } => assert_eq!(raw_reply, reply),
            other => panic!("expected MappingParse, got {other:?}"),
        }
    }

    #[test]
    fn non_object_json_fails() {
        assert!(parse_reply(r#"["style_id", "ID"]"#).is_err());
        assert!(parse_reply(r#""style_id""#).is_err());
    }

    #[test]
    fn non_string_values_fail() {
        assert!(parse_reply(r#"{"style_id": 7}"#).is_err());
    }

    #[test]
    fn parse_preserves_reply_order() {
        let mapping = parse_reply(
            r#"{"color": "CLR", "style_id": "ID", "2024-12-05": "2024/12/05"}"#,
        )
        .unwrap();
        let keys: Vec<_> = mapping.keys().collect();
        assert_eq!(keys, vec!["color", "style_id", "2024-12-05"]);
    }

    #[test]
    fn validation_rejects_unknown_headers() {
        let headers = vec!["ID".to_string(), "CLR".to_string()];
        let good: CanonicalMapping = [("style_id".to_string(), "ID".to_string())]
            .into_iter()
            .collect();
        assert!(validate_mapping(&good, &headers).is_ok());

        let bad: CanonicalMapping = [("color".to_string(), "SHADE".to_string())]
            .into_iter()
            .collect();
        let err = validate_mapping(&bad, &headers).unwrap_err();
        assert!(matches!(err, NormalizeError::MappingValidation { .. }));
    }
}
