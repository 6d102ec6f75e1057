use geolookup_core::LookupBackend;
use serde_json::Value;
use thiserror::Error;
use url::{Url, form_urlencoded};

use super::PlaceResult;

/// Placeholder replaced by the encoded query in URL templates.
pub const QUERY_PLACEHOLDER: &str = "{query}";

/// Errors returned by [`TemplateBackend::new`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BackendConfigError {
    /// A template has nowhere to put the query.
    #[error("{which} URL template {template:?} does not contain the {{query}} placeholder")]
    MissingPlaceholder {
        /// Which template was rejected (`"forward"` or `"reverse"`).
        which: &'static str,
        /// The rejected template.
        template: String,
    },
    /// A template does not produce a valid absolute URL.
    #[error("{which} URL template {template:?} is not a valid URL: {source}")]
    InvalidUrl {
        /// Which template was rejected (`"forward"` or `"reverse"`).
        which: &'static str,
        /// The rejected template.
        template: String,
        /// Parser error.
        source: url::ParseError,
    },
}

/// Backend that fills forward and reverse URL templates with the query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateBackend {
    forward: String,
    reverse: String,
}

impl TemplateBackend {
    /// Validate and construct a backend from two URL templates.
    ///
    /// Each template must contain [`QUERY_PLACEHOLDER`] and form a valid
    /// absolute URL once the placeholder is filled.
    ///
    /// # Errors
    ///
    /// Returns [`BackendConfigError`] naming the first rejected template.
    pub fn new(
        forward: impl Into<String>,
        reverse: impl Into<String>,
    ) -> Result<Self, BackendConfigError> {
        let forward = forward.into();
        let reverse = reverse.into();
        validate_template(&forward, "forward")?;
        validate_template(&reverse, "reverse")?;
        Ok(Self { forward, reverse })
    }

    /// Template used for forward lookups.
    #[must_use]
    pub fn forward_template(&self) -> &str {
        &self.forward
    }

    /// Template used for reverse lookups.
    #[must_use]
    pub fn reverse_template(&self) -> &str {
        &self.reverse
    }
}

fn validate_template(template: &str, which: &'static str) -> Result<(), BackendConfigError> {
    if !template.contains(QUERY_PLACEHOLDER) {
        return Err(BackendConfigError::MissingPlaceholder {
            which,
            template: template.to_owned(),
        });
    }
    Url::parse(&template.replace(QUERY_PLACEHOLDER, "probe")).map_err(|source| {
        BackendConfigError::InvalidUrl {
            which,
            template: template.to_owned(),
            source,
        }
    })?;
    Ok(())
}

impl LookupBackend for TemplateBackend {
    type Output = PlaceResult;
    type Error = serde_json::Error;

    fn query_url(&self, query: &str, reverse: bool) -> String {
        let template = if reverse { &self.reverse } else { &self.forward };
        let encoded: String = form_urlencoded::byte_serialize(query.as_bytes()).collect();
        template.replace(QUERY_PLACEHOLDER, &encoded)
    }

    fn build_result(&self, record: Value) -> Result<PlaceResult, serde_json::Error> {
        serde_json::from_value(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geolookup_core::{Coordinates, GeocodeResult};
    use rstest::{fixture, rstest};

    #[fixture]
    fn backend() -> TemplateBackend {
        TemplateBackend::new(
            "http://geocode.example.com/search?q={query}&format=json",
            "http://geocode.example.com/reverse?q={query}",
        )
        .expect("templates are valid")
    }

    #[rstest]
    #[case("Biloxi, MS", false, "http://geocode.example.com/search?q=Biloxi%2C+MS&format=json")]
    #[case("30.4,-88.9", true, "http://geocode.example.com/reverse?q=30.4%2C-88.9")]
    #[case("Café & Bar", false, "http://geocode.example.com/search?q=Caf%C3%A9+%26+Bar&format=json")]
    fn query_url_encodes_the_query(
        backend: TemplateBackend,
        #[case] query: &str,
        #[case] reverse: bool,
        #[case] expected: &str,
    ) {
        assert_eq!(backend.query_url(query, reverse), expected);
    }

    #[rstest]
    fn keeps_templates_as_given(backend: TemplateBackend) {
        assert_eq!(
            backend.forward_template(),
            "http://geocode.example.com/search?q={query}&format=json"
        );
        assert_eq!(
            backend.reverse_template(),
            "http://geocode.example.com/reverse?q={query}"
        );
    }

    #[rstest]
    fn build_result_reads_records(backend: TemplateBackend) {
        let record = serde_json::json!({
            "lat": "30.4",
            "lon": "-88.9",
            "display_name": "Biloxi, Harrison County, Mississippi, USA",
        });

        let result = backend.build_result(record).expect("record should parse");

        assert_eq!(result.coordinates(), Coordinates::new(30.4, -88.9));
        assert_eq!(result.address(), "Biloxi, Harrison County, Mississippi, USA");
    }

    #[rstest]
    fn rejects_template_without_placeholder() {
        let err = TemplateBackend::new(
            "http://geocode.example.com/search",
            "http://geocode.example.com/reverse?q={query}",
        )
        .expect_err("forward template lacks placeholder");

        assert!(matches!(
            err,
            BackendConfigError::MissingPlaceholder {
                which: "forward",
                ..
            }
        ));
    }

    #[rstest]
    fn rejects_template_that_is_not_a_url() {
        let err = TemplateBackend::new(
            "http://geocode.example.com/search?q={query}",
            "geocode.example.com/reverse?q={query}",
        )
        .expect_err("reverse template is relative");

        match err {
            BackendConfigError::InvalidUrl { which, source, .. } => {
                assert_eq!(which, "reverse");
                assert_eq!(source, url::ParseError::RelativeUrlWithoutBase);
            }
            other => panic!("expected InvalidUrl, got {other:?}"),
        }
    }
}
