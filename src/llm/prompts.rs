//! Prompt construction for the extraction call.

use crate::record::EXTRACTION_FIELDS;

/// Renders the extraction instruction around a listing description.
///
/// Deterministic: the same description always yields the same prompt, and
/// the field keys come straight from [`EXTRACTION_FIELDS`] so the prompt
/// and the output table cannot drift apart.
pub fn build_extraction_prompt(description: &str) -> String {
    let field_list = EXTRACTION_FIELDS
        .iter()
        .map(|field| format!("\"{}\",", field))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "You are an aircraft data extraction assistant. Given this aircraft listing:\n\
         {description}\n\
         Please extract the following fields in JSON format using ONLY these exact keys:\n\
         {field_list}\n\
         Do NOT use any extra description or formatting. Return only valid JSON."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_description_verbatim() {
        let description = "2004 TBM 700C2, TSN 2,340 hrs, fresh HSI";
        let prompt = build_extraction_prompt(description);
        assert!(prompt.contains(description));
    }

    #[test]
    fn test_prompt_lists_every_extraction_field() {
        let prompt = build_extraction_prompt("some listing");
        for field in EXTRACTION_FIELDS {
            assert!(
                prompt.contains(&format!("\"{}\"", field)),
                "prompt missing field key '{}'",
                field
            );
        }
    }

    #[test]
    fn test_prompt_is_deterministic() {
        assert_eq!(
            build_extraction_prompt("same text"),
            build_extraction_prompt("same text")
        );
    }
}
