//! Query keys and invalidation groups

use std::collections::BTreeMap;
use std::fmt;

/// Identity of one cached read: a hierarchical path plus its parameters.
///
/// Parameters live in a sorted map, so two keys built from the same filters
/// in a different order are equal. Blank parameter values are dropped when the
/// key is built, matching what is actually sent to the server.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QueryKey {
    path: Vec<String>,
    params: BTreeMap<&'static str, String>,
}

impl QueryKey {
    pub fn new(path: &[&'static str]) -> Self {
        Self {
            path: path.iter().map(|s| s.to_string()).collect(),
            params: BTreeMap::new(),
        }
    }

    /// Append an identifier segment (e.g. a submission id).
    pub fn segment(mut self, segment: &str) -> Self {
        self.path.push(segment.to_string());
        self
    }

    /// Attach parameters; blank values are skipped.
    pub fn with_params<I>(mut self, params: I) -> Self
    where
        I: IntoIterator<Item = (&'static str, String)>,
    {
        for (k, v) in params {
            let v = v.trim();
            if !v.is_empty() {
                self.params.insert(k, v.to_string());
            }
        }
        self
    }

    pub fn path(&self) -> &[String] {
        &self.path
    }

    pub fn params(&self) -> &BTreeMap<&'static str, String> {
        &self.params
    }

    /// Prefix match on path segments.
    pub fn starts_with(&self, prefix: &[&str]) -> bool {
        prefix.len() <= self.path.len()
            && self.path.iter().zip(prefix).all(|(segment, p)| segment.as_str() == *p)
    }

    pub fn belongs_to(&self, group: QueryGroup) -> bool {
        self.starts_with(group.prefix())
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.join("/"))?;
        let mut sep = '?';
        for (k, v) in &self.params {
            write!(f, "{}{}={}", sep, k, v)?;
            sep = '&';
        }
        Ok(())
    }
}

/// Named key prefixes a mutation can invalidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryGroup {
    /// Every admin list and detail (`swinfy/…`)
    Swinfy,
    /// The admin summary (`admin/…`)
    Admin,
    /// Everything the trainer reads (`trainer/…`)
    Trainer,
    TrainerProfile,
    TrainerStudents,
    TrainerSummary,
    /// Sponsor views (`uwh/…`)
    Uwh,
}

impl QueryGroup {
    pub fn prefix(&self) -> &'static [&'static str] {
        match self {
            QueryGroup::Swinfy => &["swinfy"],
            QueryGroup::Admin => &["admin"],
            QueryGroup::Trainer => &["trainer"],
            QueryGroup::TrainerProfile => &["trainer", "profile"],
            QueryGroup::TrainerStudents => &["trainer", "students"],
            QueryGroup::TrainerSummary => &["trainer", "summary"],
            QueryGroup::Uwh => &["uwh"],
        }
    }
}

impl fmt::Display for QueryGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.prefix().join("/"))
    }
}
