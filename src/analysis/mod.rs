pub mod request;
pub mod response;

pub use request::{AnalysisRequest, build_request};
pub use response::interpret;
