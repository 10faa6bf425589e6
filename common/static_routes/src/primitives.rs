use std::fmt;

/// A route split into its scope (`/api`) and the part a nested router
/// matches on (`/submit`).
pub trait Url {
    fn prefix(&self) -> &str {
        ""
    }
    fn postfix(&self) -> &str;
}

/// Path without scheme and host, as the browser and the router see it.
#[derive(Clone, Debug, PartialEq)]
pub struct RelativePath {
    prefix: String,
    postfix: String,
    complete: String,
}

impl RelativePath {
    fn of(url: &(impl Url + ?Sized)) -> Self {
        let (prefix, postfix) = (url.prefix().to_owned(), url.postfix().to_owned());
        Self {
            complete: format!("{prefix}{postfix}"),
            prefix,
            postfix,
        }
    }

    pub fn complete(&self) -> &str {
        &self.complete
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn postfix(&self) -> &str {
        &self.postfix
    }

    /// Absolute url on `base_url`; a trailing slash on the base is ignored.
    pub fn with_base(&self, base_url: &str) -> FullPath {
        let base_url = base_url.trim_end_matches('/').to_owned();
        FullPath {
            complete: format!("{}{}", base_url, self.complete),
            base_url,
        }
    }
}

impl fmt::Display for RelativePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.complete)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FullPath {
    base_url: String,
    complete: String,
}

impl FullPath {
    pub fn complete(&self) -> &str {
        &self.complete
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

/// Routes answering `GET`.
pub trait Get: Url {
    fn get(&self) -> RelativePath {
        RelativePath::of(self)
    }
}

/// Routes answering `POST`.
pub trait Post: Url {
    fn post(&self) -> RelativePath {
        RelativePath::of(self)
    }
}
