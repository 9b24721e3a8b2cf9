// Prompt construction for the Gemini analysis call

use super::aggregator::LogCorpus;

/// Fixed instruction template. The five numbered sections are the contract
/// the frontend renders; the corpus is appended verbatim after "Content:".
const INSTRUCTIONS: &str = "\
You are TraceToFix AI. Analyze the logs and code and provide:
1) Root Causes
2) Fixes
3) Suggestions
4) Improvements
5) Highlight key error lines";

/// Wrap the corpus in the instruction template.
///
/// Deterministic: identical corpus yields a byte-identical prompt. No
/// truncation or sanitization happens here; the HTTP layer caps the
/// request body size before the corpus ever reaches this point.
pub fn build_prompt(corpus: &LogCorpus) -> String {
    format!("{INSTRUCTIONS}\n\nContent:\n{}", corpus.as_str())
}
