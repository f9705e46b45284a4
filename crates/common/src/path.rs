use std::fmt;

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

/// Route prefix under which bucket listings are served.
pub const BUCKETS_ROUTE: &str = "/buckets";

/// Bytes escaped when a bucket name becomes one segment of a link. The
/// router percent-decodes the wildcard capture, so `%` itself must be
/// escaped along with anything that would end the path early.
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

fn encode_segment(name: &str) -> String {
    utf8_percent_encode(name, SEGMENT).to_string()
}

/// Split a request path (with the route prefix already stripped) into
/// bucket names.
///
/// An empty path means the store root and yields no names. Otherwise the
/// path is split on `/` verbatim: empty segments from `a//b` or a trailing
/// slash are kept and later fail to resolve as a bucket named `''`.
pub fn parse_bucket_path(raw: &str) -> Vec<String> {
    if raw.is_empty() {
        return Vec::new();
    }
    raw.split('/').map(str::to_string).collect()
}

/// A requested bucket path: the raw text as the user asked for it, plus
/// its parsed segments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BucketPath {
    raw: String,
    segments: Vec<String>,
}

/// One navigable step of a bucket path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Breadcrumb {
    pub name: String,
    pub link: String,
}

impl BucketPath {
    pub fn parse(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let segments = parse_bucket_path(&raw);
        Self { raw, segments }
    }

    pub fn root() -> Self {
        Self::default()
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Link to a nested bucket directly under this path. Every segment is
    /// percent-encoded so the link decodes back to the same names.
    pub fn child_link(&self, key: &str) -> String {
        let mut link = BUCKETS_ROUTE.to_string();
        for name in self.segments.iter().map(String::as_str).chain([key]) {
            link.push('/');
            link.push_str(&encode_segment(name));
        }
        link
    }

    /// Every prefix of the path, each linking back to its own listing.
    pub fn breadcrumbs(&self) -> Vec<Breadcrumb> {
        let mut link = BUCKETS_ROUTE.to_string();
        self.segments
            .iter()
            .map(|name| {
                link.push('/');
                link.push_str(&encode_segment(name));
                Breadcrumb {
                    name: name.clone(),
                    link: link.clone(),
                }
            })
            .collect()
    }
}

impl fmt::Display for BucketPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl From<&str> for BucketPath {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}
