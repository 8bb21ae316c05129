pub mod client;
pub mod content;
pub mod image;
pub mod types;

pub use content::GeminiContentClient;
pub use image::GeminiImageClient;

/// Implements a test-only `with_base_url` for a client wrapping a
/// [`client::GeminiHttpClient`] in its `http` field.
#[cfg(test)]
macro_rules! impl_with_gemini_base_url {
    ($client:ty) => {
        impl $client {
            pub fn with_base_url(self, base_url: String) -> Self {
                Self {
                    http: self.http.with_base_url(base_url),
                }
            }
        }
    };
}

#[cfg(test)]
pub(crate) use impl_with_gemini_base_url;

#[cfg(test)]
pub(crate) mod test_support {
    use wiremock::matchers::{method, path_regex};
    use wiremock::{Mock, MockBuilder};

    pub const GENERATE_CONTENT_PATH_REGEX: &str = r"^/v1beta/models/[^/]+:generateContent$";
    pub const PREDICT_PATH_REGEX: &str = r"^/v1beta/models/[^/]+:predict$";

    pub fn post_path_regex(pattern: &str) -> MockBuilder {
        Mock::given(method("POST")).and(path_regex(pattern))
    }
}
