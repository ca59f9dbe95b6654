use crate::errors::PageError;
use crate::utils::BoundingBox;
use async_trait::async_trait;
use std::time::Duration;

/// ARIA-ish roles used by the login flow and the submit lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Button,
    Textbox,
}

/// What the resolvers need from a rendered page.
///
/// Handles returned by `query_all` are live references into the current DOM.
/// Callers must not keep them past the action they were fetched for: a submit
/// may regenerate every node on the page.
#[async_trait]
pub trait Page: Send + Sync {
    type Element: PageElement;

    /// All elements matching an XPath expression, in document order.
    async fn query_all(&self, xpath: &str) -> Result<Vec<Self::Element>, PageError>;

    async fn find_by_role(
        &self,
        role: Role,
        name: &str,
        exact: bool,
    ) -> Result<Self::Element, PageError>;

    async fn goto(&self, url: &str) -> Result<(), PageError>;

    async fn wait(&self, duration: Duration);
}

/// Operations on a single live element.
#[async_trait]
pub trait PageElement: Send + Sync {
    /// `None` when the element is not rendered.
    async fn bounding_box(&self) -> Result<Option<BoundingBox>, PageError>;

    async fn inner_text(&self, timeout: Duration) -> Result<String, PageError>;

    async fn is_disabled(&self) -> Result<bool, PageError>;

    async fn input_value(&self, timeout: Duration) -> Result<String, PageError>;

    /// Replace the value in one step. Non-standard editable regions may refuse.
    async fn fill(&self, value: &str) -> Result<(), PageError>;

    async fn click(&self) -> Result<(), PageError>;

    async fn select_all(&self) -> Result<(), PageError>;

    async fn type_text(&self, text: &str) -> Result<(), PageError>;
}
