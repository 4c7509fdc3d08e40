//! Answer service capability and its HTTP implementation

mod http;
mod traits;
mod types;

pub use http::HttpAnswerService;
pub use traits::AnswerService;
pub use types::{AnswerError, AnswerRequest, AnswerResponse};
