use crate::browser::page::{Page, PageElement, Role};
use crate::browser::role::role_xpath;
use crate::errors::PageError;
use crate::utils::BoundingBox;
use async_trait::async_trait;
use fantoccini::elements::Element;
use fantoccini::{Client, Locator};
use std::future::Future;
use std::time::Duration;

// WebDriver key codepoints
const KEY_CONTROL: char = '\u{E009}';
const KEY_NULL: char = '\u{E000}';

/// How an element accepts text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    TextInput,
    TextArea,
    Editable,
    Other,
}

impl ElementKind {
    pub fn from_tag(tag: &str, contenteditable: Option<&str>) -> Self {
        match tag.to_ascii_lowercase().as_str() {
            "input" => ElementKind::TextInput,
            "textarea" => ElementKind::TextArea,
            _ if matches!(contenteditable, Some("true") | Some("")) => ElementKind::Editable,
            _ => ElementKind::Other,
        }
    }

    /// Only form controls take a value in one step; editable regions need typing.
    pub fn supports_direct_fill(self) -> bool {
        matches!(self, ElementKind::TextInput | ElementKind::TextArea)
    }
}

async fn with_timeout<T, F>(timeout: Duration, fut: F) -> Result<T, PageError>
where
    F: Future<Output = Result<T, fantoccini::error::CmdError>>,
{
    match tokio::time::timeout(timeout, fut).await {
        Ok(result) => result.map_err(PageError::from),
        Err(_) => Err(PageError::Timeout(timeout.as_millis() as u64)),
    }
}

/// `Page` backed by a fantoccini WebDriver session.
pub struct WebDriverPage {
    client: Client,
}

impl WebDriverPage {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    pub async fn close(self) -> Result<(), PageError> {
        self.client.close().await.map_err(PageError::from)
    }
}

#[async_trait]
impl Page for WebDriverPage {
    type Element = WebDriverElement;

    async fn query_all(&self, xpath: &str) -> Result<Vec<WebDriverElement>, PageError> {
        let found = self.client.find_all(Locator::XPath(xpath)).await?;
        Ok(found.into_iter().map(WebDriverElement::new).collect())
    }

    async fn find_by_role(
        &self,
        role: Role,
        name: &str,
        exact: bool,
    ) -> Result<WebDriverElement, PageError> {
        let xpath = role_xpath(role, name, exact);
        tracing::debug!("🔍 {:?} '{}' -> {}", role, name, xpath);
        self.client
            .find(Locator::XPath(&xpath))
            .await
            .map(WebDriverElement::new)
            .map_err(|e| PageError::NotFound(format!("{:?} '{}': {}", role, name, e)))
    }

    async fn goto(&self, url: &str) -> Result<(), PageError> {
        self.client.goto(url).await.map_err(PageError::from)
    }

    async fn wait(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

pub struct WebDriverElement {
    inner: Element,
}

impl WebDriverElement {
    fn new(inner: Element) -> Self {
        Self { inner }
    }

    pub async fn kind(&self) -> Result<ElementKind, PageError> {
        let tag = self.inner.tag_name().await?;
        let editable = self.inner.attr("contenteditable").await?;
        Ok(ElementKind::from_tag(&tag, editable.as_deref()))
    }
}

#[async_trait]
impl PageElement for WebDriverElement {
    async fn bounding_box(&self) -> Result<Option<BoundingBox>, PageError> {
        if !self.inner.is_displayed().await? {
            return Ok(None);
        }
        let (x, y, width, height) = self.inner.rectangle().await?;
        let bb = BoundingBox::new(x, y, width, height);
        // Collapsed nodes report as displayed but cannot hold a caption or take input.
        Ok(if bb.is_empty() { None } else { Some(bb) })
    }

    async fn inner_text(&self, timeout: Duration) -> Result<String, PageError> {
        with_timeout(timeout, self.inner.text()).await
    }

    async fn is_disabled(&self) -> Result<bool, PageError> {
        let disabled = self.inner.prop("disabled").await?;
        Ok(disabled.as_deref() == Some("true"))
    }

    async fn input_value(&self, timeout: Duration) -> Result<String, PageError> {
        with_timeout(timeout, self.inner.prop("value"))
            .await?
            .ok_or_else(|| PageError::Unsupported("element has no value property".to_string()))
    }

    async fn fill(&self, value: &str) -> Result<(), PageError> {
        let kind = self.kind().await?;
        if !kind.supports_direct_fill() {
            return Err(PageError::Unsupported(format!("direct fill on {:?}", kind)));
        }
        self.inner.clear().await?;
        self.inner.send_keys(value).await?;
        Ok(())
    }

    async fn click(&self) -> Result<(), PageError> {
        self.inner.click().await.map_err(PageError::from)
    }

    async fn select_all(&self) -> Result<(), PageError> {
        let chord = format!("{}a{}", KEY_CONTROL, KEY_NULL);
        self.inner.send_keys(&chord).await.map_err(PageError::from)
    }

    async fn type_text(&self, text: &str) -> Result<(), PageError> {
        self.inner.send_keys(text).await.map_err(PageError::from)
    }
}
