/// Document text beyond this many characters is not sent to the model.
pub const MAX_REPORT_CHARS: usize = 12_000;

pub const REPORT_SYSTEM_PROMPT: &str = r#"You are a medical report analyst. Given raw text from a medical/lab report, respond with a JSON object only (no markdown, no code block) with this exact structure:
{
  "summary": "2-4 sentence plain-language summary of the report and overall health indication",
  "findings": [{"label": "Finding name", "value": "value or range", "status": "normal" or "attention" or "critical", "note": "optional brief note"}],
  "symptoms": ["possible symptom 1", "possible symptom 2", ...],
  "prevention": ["preventive or lifestyle step 1", "step 2", ...],
  "futureSuggestions": ["follow-up or monitoring suggestion 1", "suggestion 2", ...],
  "recommendations": ["immediate or short-term recommendation 1", "recommendation 2", ...],
  "disclaimer": "Short disclaimer that this is not medical advice and the user should consult a doctor."
}
Status: use "normal" for within range, "attention" for borderline, "critical" for out of range or concerning. Do NOT add any fields beyond the ones specified above."#;

/// Build the user turn for a report, truncated to [`MAX_REPORT_CHARS`].
pub fn build_report_message(text: &str) -> String {
    let truncated: String = text.chars().take(MAX_REPORT_CHARS).collect();
    format!("Analyze this medical report text:\n\n{truncated}")
}
