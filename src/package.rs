// file: src/package.rs
// description: build-time package metadata exposed at runtime
// reference: cargo manifest environment variables

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageInfo {
    pub name: &'static str,
    pub version: &'static str,
    pub authors: &'static str,
    pub description: &'static str,
}

impl PackageInfo {
    pub fn current() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            authors: env!("CARGO_PKG_AUTHORS"),
            description: env!("CARGO_PKG_DESCRIPTION"),
        }
    }

    pub fn summary(&self) -> String {
        format!("{} {} by {}", self.name, self.version, self.authors)
    }
}
