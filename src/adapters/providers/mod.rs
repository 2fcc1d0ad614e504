//! Provider adapters. Implement SentimentPort for each external classification service.
//!
//! Provides the Hugging Face classifier, the Groq chat-completion adapter, and a mock adapter
//! for testing.

pub mod groq_adapter;
pub mod huggingface_adapter;
pub mod json_extract;
pub mod mock_adapter;

pub use groq_adapter::GroqAdapter;
pub use huggingface_adapter::HuggingFaceAdapter;
pub use json_extract::extract_json_object;
pub use mock_adapter::MockSentimentAdapter;
