/// Builder for the CMS query-string dialect.
///
/// Filters render as `filters[field][$eq]=value`, pagination as
/// `pagination[page]=N`, population as `populate=*` or a comma list. Pair
/// order is deterministic so request shapes are testable.
#[derive(Debug, Clone, Default)]
pub struct QueryParams {
    filters: Vec<(String, String)>,
    sort: Vec<String>,
    page: Option<u32>,
    page_size: Option<u32>,
    start: Option<u32>,
    limit: Option<u32>,
    populate: Option<Populate>,
    fields: Vec<String>,
    publication_state: Option<PublicationState>,
    locale: Option<String>,
}

#[derive(Debug, Clone)]
pub enum Populate {
    /// `populate=*` — one level deep, every relation.
    All,
    /// `populate=a,b.c` — explicit relation paths.
    Paths(Vec<String>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublicationState {
    Live,
    Preview,
}

impl PublicationState {
    fn as_str(self) -> &'static str {
        match self {
            PublicationState::Live => "live",
            PublicationState::Preview => "preview",
        }
    }
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filter(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.filters.push((field.into(), value.into()));
        self
    }

    /// Sort directive, e.g. `completedDate:desc`.
    pub fn sort(mut self, directive: impl Into<String>) -> Self {
        self.sort.push(directive.into());
        self
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn page_size(mut self, page_size: u32) -> Self {
        self.page_size = Some(page_size);
        self
    }

    /// Offset pagination; mutually exclusive with page/page_size on the
    /// server, the builder does not enforce that.
    pub fn start(mut self, start: u32) -> Self {
        self.start = Some(start);
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn populate_all(mut self) -> Self {
        self.populate = Some(Populate::All);
        self
    }

    pub fn populate<I, S>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.populate = Some(Populate::Paths(
            paths.into_iter().map(Into::into).collect(),
        ));
        self
    }

    pub fn fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields = fields.into_iter().map(Into::into).collect();
        self
    }

    pub fn publication_state(mut self, state: PublicationState) -> Self {
        self.publication_state = Some(state);
        self
    }

    pub fn locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    /// Render to query pairs in a fixed order: filters, sort, pagination,
    /// populate, fields, publicationState, locale.
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        for (field, value) in &self.filters {
            pairs.push((format!("filters[{field}][$eq]"), value.clone()));
        }
        if !self.sort.is_empty() {
            pairs.push(("sort".to_string(), self.sort.join(",")));
        }
        if let Some(page) = self.page {
            pairs.push(("pagination[page]".to_string(), page.to_string()));
        }
        if let Some(page_size) = self.page_size {
            pairs.push(("pagination[pageSize]".to_string(), page_size.to_string()));
        }
        if let Some(start) = self.start {
            pairs.push(("pagination[start]".to_string(), start.to_string()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("pagination[limit]".to_string(), limit.to_string()));
        }
        match &self.populate {
            Some(Populate::All) => pairs.push(("populate".to_string(), "*".to_string())),
            Some(Populate::Paths(paths)) if !paths.is_empty() => {
                pairs.push(("populate".to_string(), paths.join(",")));
            }
            _ => {}
        }
        if !self.fields.is_empty() {
            pairs.push(("fields".to_string(), self.fields.join(",")));
        }
        if let Some(state) = self.publication_state {
            pairs.push(("publicationState".to_string(), state.as_str().to_string()));
        }
        if let Some(locale) = &self.locale {
            pairs.push(("locale".to_string(), locale.clone()));
        }
        pairs
    }
}
