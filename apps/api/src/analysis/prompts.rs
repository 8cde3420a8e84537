// LLM prompt constants for the analysis module.

/// System prompt for resume analysis - enforces JSON-only output.
pub const ANALYSIS_SYSTEM: &str =
    "You are an expert resume analyzer and career coach. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Resume analysis prompt template.
/// Replace `{resume_text}` and `{job_description}` before sending.
pub const ANALYSIS_PROMPT_TEMPLATE: &str = r#"Analyze the following resume against the job description and provide detailed insights.

RESUME:
{resume_text}

JOB DESCRIPTION:
{job_description}

Provide a comprehensive analysis in the following JSON format:
{
  "keywordAnalysis": {
    "matched": ["keyword1", "keyword2"],
    "missing": ["keyword1", "keyword2"],
    "relevanceScore": 0-100
  },
  "atsScore": {
    "overall": 0-100,
    "breakdown": {
      "formatting": 0-100,
      "keywords": 0-100,
      "structure": 0-100,
      "contact": 0-100
    }
  },
  "strengths": [
    "Strength 1 with specific example",
    "Strength 2 with specific example"
  ],
  "weaknesses": [
    "Weakness 1 with specific improvement suggestion",
    "Weakness 2 with specific improvement suggestion"
  ],
  "recommendations": [
    {
      "priority": "high|medium|low",
      "category": "keywords|formatting|content|structure",
      "title": "Recommendation title",
      "description": "Detailed recommendation",
      "example": "Concrete example of improvement"
    }
  ],
  "aiEnhancedSuggestions": [
    {
      "type": "bullet|summary|skills|achievement",
      "original": "Original text from resume",
      "improved": "AI-enhanced version with keywords",
      "explanation": "Why this improvement works"
    }
  ]
}

IMPORTANT:
- Be specific and actionable
- Include actual keywords from the job description
- Provide concrete examples
- Focus on ATS optimization
- Response must be valid JSON only, no markdown or explanations"#;
