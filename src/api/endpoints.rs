use url::Url;

/// Registry of logical API resources. Paths are resolved against the
/// configured base URL, which is normalized to end with a slash.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Categories,
    Courses,
}

impl Endpoint {
    pub fn name(self) -> &'static str {
        match self {
            Endpoint::Categories => "categories",
            Endpoint::Courses => "courses",
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Endpoint::Categories => "categories/",
            Endpoint::Courses => "courses/",
        }
    }

    pub fn url(self, base: &Url) -> Result<Url, url::ParseError> {
        base.join(self.path())
    }
}
