use crate::query_params;

/// The parsed intent of one proxy call: which origin image to fetch and
/// which output dimensions to produce (0 = unspecified).
#[derive(Clone, Debug, PartialEq)]
pub struct TransformRequest {
    pub path: String,
    pub width: u32,
    pub height: u32,
}

impl TransformRequest {
    pub fn new(path: &str, query: Option<&str>) -> Self {
        let (width, height) = query_params::resize_params(query.unwrap_or(""));
        Self {
            path: path.to_string(),
            width,
            height,
        }
    }
}
