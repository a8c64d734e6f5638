use std::fmt;

/// Ordering direction. The API treats an ordering without a suffix as
/// ascending, so only `Desc` renders one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Asc,
    Desc,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    /// Exact match on a document path.
    At { path: String, value: String },
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Predicate::At { path, value } => write!(f, "at({}, \"{}\")", path, value),
        }
    }
}

/// Builder for the repository's search parameters.
#[derive(Debug, Clone, Default)]
pub struct Query {
    pub(crate) predicates: Vec<Predicate>,
    pub(crate) fetch: Vec<String>,
    pub(crate) ordering: Option<(String, Direction)>,
    pub(crate) page_size: Option<u32>,
    pub(crate) after: Option<String>,
    pub(crate) reference: Option<String>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn at(mut self, path: &str, value: &str) -> Self {
        self.predicates.push(Predicate::At {
            path: path.into(),
            value: value.into(),
        });
        self
    }

    /// Limit the `data` fields present on returned documents.
    pub fn fetch(mut self, fields: &[&str]) -> Self {
        self.fetch = fields.iter().map(|f| f.to_string()).collect();
        self
    }

    pub fn order_by(mut self, path: &str, direction: Direction) -> Self {
        self.ordering = Some((path.into(), direction));
        self
    }

    pub fn page_size(mut self, size: u32) -> Self {
        self.page_size = Some(size);
        self
    }

    /// Anchor the result window immediately after the given document id
    /// in the query's ordering.
    pub fn after(mut self, document_id: &str) -> Self {
        self.after = Some(document_id.into());
        self
    }

    /// Pin the query to a specific revision instead of the master ref.
    pub fn with_ref(mut self, reference: &str) -> Self {
        self.reference = Some(reference.into());
        self
    }

    pub fn ref_override(&self) -> Option<&str> {
        self.reference.as_deref()
    }

    /// Encode as request parameters. `reference` is the resolved master
    /// ref, used unless the query pins its own.
    pub fn params(&self, reference: &str) -> Vec<(&'static str, String)> {
        let mut params = vec![(
            "ref",
            self.reference
                .clone()
                .unwrap_or_else(|| reference.to_string()),
        )];

        if !self.predicates.is_empty() {
            let inner: String = self.predicates.iter().map(|p| format!("[{p}]")).collect();
            params.push(("q", format!("[{inner}]")));
        }
        if let Some((path, direction)) = &self.ordering {
            let rendered = match direction {
                Direction::Asc => format!("[{path}]"),
                Direction::Desc => format!("[{path} desc]"),
            };
            params.push(("orderings", rendered));
        }
        if let Some(size) = self.page_size {
            params.push(("pageSize", size.to_string()));
        }
        if let Some(after) = &self.after {
            params.push(("after", after.clone()));
        }
        if !self.fetch.is_empty() {
            params.push(("fetch", self.fetch.join(",")));
        }

        params
    }
}
