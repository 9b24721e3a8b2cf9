// Gemini API gateway - outbound generateContent call and response
// normalization

mod client;
mod types;

pub use client::{GeminiClient, GEMINI_BASE_URL, GEMINI_MODEL};
pub use types::{
    Candidate, CandidateContent, Content, Fragment, FragmentList, GenerateRequest,
    GenerateResponse, Part, NO_TEXT_FALLBACK,
};
