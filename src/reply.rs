use crate::check::Finding;

pub const IMAGE_FAILURE_TEXT: &str = "⚠️ Failed to generate image. Please try again later.";
pub const CHECK_FAILURE_TEXT: &str = "⚠️ Spelling check failed. Please try again later.";
pub const NO_ISSUES_TEXT: &str = "✅ No issues found.";
pub const NO_SUGGESTION: &str = "(no suggestion)";

/// Terminal reply for one inbound message. Exactly one of these is
/// sent per content-path message, success or failure.
#[derive(Debug, Clone, PartialEq)]
pub enum ReplyContent {
    Text(String),
    Photo(Vec<u8>),
}

/// Turn an image-generation outcome into a reply. Success bytes are
/// passed through untouched; any failure collapses to a generic text.
pub fn interpret_image(result: anyhow::Result<Vec<u8>>) -> ReplyContent {
    match result {
        Ok(bytes) => ReplyContent::Photo(bytes),
        Err(_) => ReplyContent::Text(IMAGE_FAILURE_TEXT.to_string()),
    }
}

/// Turn a spell-check outcome into a reply. Only the first finding is
/// reported; later findings never affect the result.
pub fn interpret_check(result: anyhow::Result<Vec<Finding>>) -> ReplyContent {
    let findings = match result {
        Ok(findings) => findings,
        Err(_) => return ReplyContent::Text(CHECK_FAILURE_TEXT.to_string()),
    };

    let finding = match findings.first() {
        Some(finding) => finding,
        None => return ReplyContent::Text(NO_ISSUES_TEXT.to_string()),
    };

    let description = if finding.short_message.is_empty() {
        &finding.message
    } else {
        &finding.short_message
    };

    let suggestion = finding
        .replacements
        .first()
        .map(|r| r.value.as_str())
        .unwrap_or(NO_SUGGESTION);

    ReplyContent::Text(format!("❗ {}\n💡 Suggestion: {}", description, suggestion))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::check::Replacement;
    use anyhow::anyhow;

    fn finding(short_message: &str, replacements: &[&str]) -> Finding {
        Finding {
            message: String::new(),
            short_message: short_message.to_string(),
            replacements: replacements
                .iter()
                .map(|v| Replacement {
                    value: v.to_string(),
                })
                .collect(),
        }
    }

    #[test]
    fn test_image_failure_is_generic_text() {
        let reply = interpret_image(Err(anyhow!("Inference API error (503): busy")));
        assert_eq!(reply, ReplyContent::Text(IMAGE_FAILURE_TEXT.to_string()));
    }

    #[test]
    fn test_image_success_bytes_untouched() {
        let bytes = vec![0x89, 0x50, 0x4e, 0x47, 0x00, 0xff];
        let reply = interpret_image(Ok(bytes.clone()));
        assert_eq!(reply, ReplyContent::Photo(bytes));
    }

    #[test]
    fn test_check_failure_is_generic_text() {
        let reply = interpret_check(Err(anyhow!("connection refused")));
        assert_eq!(reply, ReplyContent::Text(CHECK_FAILURE_TEXT.to_string()));
    }

    #[test]
    fn test_no_findings_is_fixed_text() {
        let reply = interpret_check(Ok(vec![]));
        assert_eq!(reply, ReplyContent::Text(NO_ISSUES_TEXT.to_string()));
    }

    #[test]
    fn test_first_finding_reported() {
        let reply = interpret_check(Ok(vec![finding(
            "Possible spelling mistake",
            &["congratulations", "congregation"],
        )]));
        let ReplyContent::Text(text) = reply else {
            panic!("expected text reply");
        };
        assert!(text.contains("Possible spelling mistake"));
        assert!(text.contains("congratulations"));
        assert!(!text.contains("congregation"));
    }

    #[test]
    fn test_later_findings_ignored() {
        let first = finding("Possible spelling mistake", &["congratulations"]);
        let only_first = interpret_check(Ok(vec![first.clone()]));
        let with_rest = interpret_check(Ok(vec![
            first,
            finding("Agreement error", &["is"]),
            finding("Extra whitespace", &[]),
        ]));
        assert_eq!(only_first, with_rest);
    }

    #[test]
    fn test_no_replacement_uses_placeholder() {
        let reply = interpret_check(Ok(vec![finding("Possible typo", &[])]));
        let ReplyContent::Text(text) = reply else {
            panic!("expected text reply");
        };
        assert!(text.contains(NO_SUGGESTION));
    }

    #[test]
    fn test_empty_short_message_falls_back_to_message() {
        let f = Finding {
            message: "Possible spelling mistake found.".to_string(),
            short_message: String::new(),
            replacements: vec![],
        };
        let ReplyContent::Text(text) = interpret_check(Ok(vec![f])) else {
            panic!("expected text reply");
        };
        assert!(text.contains("Possible spelling mistake found."));
    }
}
