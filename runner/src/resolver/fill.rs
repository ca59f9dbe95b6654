use crate::browser::PageElement;
use crate::errors::PageError;
use crate::resolver::outcome::FillMethod;

/// Puts `value` into the element: direct set first, then click, select-all and type.
pub async fn fill_element<E: PageElement>(element: &E, value: &str) -> Result<FillMethod, PageError> {
    match element.fill(value).await {
        Ok(()) => return Ok(FillMethod::Direct),
        Err(e) => tracing::debug!("direct fill refused ({}), typing instead", e),
    }

    element.click().await?;
    element.select_all().await?;
    element.type_text(value).await?;
    Ok(FillMethod::Typed)
}
