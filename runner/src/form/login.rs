use crate::browser::{Page, PageElement, Role};
use crate::errors::{PageError, RunError};
use crate::utils::mask_sensitive;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub enum LoginStep<'a> {
    Click { name: &'static str, exact: bool },
    Fill { name: &'static str, value: &'a str },
    Settle,
}

impl LoginStep<'_> {
    fn describe(&self) -> String {
        match self {
            LoginStep::Click { name, .. } => format!("click button '{}'", name),
            LoginStep::Fill { name, .. } => format!("fill textbox '{}'", name),
            LoginStep::Settle => "settle".to_string(),
        }
    }
}

/// The sign-in flow run once before the first row.
pub fn login_steps<'a>(username: &'a str, password: &'a str) -> Vec<LoginStep<'a>> {
    vec![
        LoginStep::Click { name: "SIGN UP OR LOGIN", exact: false },
        LoginStep::Click { name: "OR LOGIN", exact: true },
        LoginStep::Fill { name: "Email", value: username },
        LoginStep::Fill { name: "Password", value: password },
        LoginStep::Click { name: "LOG IN", exact: false },
        LoginStep::Settle,
        LoginStep::Click { name: "Start", exact: false },
        LoginStep::Settle,
    ]
}

async fn run_step<P: Page>(page: &P, step: &LoginStep<'_>, settle: Duration) -> Result<(), PageError> {
    match step {
        LoginStep::Click { name, exact } => {
            page.find_by_role(Role::Button, name, *exact).await?.click().await
        }
        LoginStep::Fill { name, value } => {
            page.find_by_role(Role::Textbox, name, false).await?.fill(value).await
        }
        LoginStep::Settle => {
            page.wait(settle).await;
            Ok(())
        }
    }
}

pub async fn login<P: Page>(
    page: &P,
    username: &str,
    password: &str,
    settle: Duration,
) -> Result<(), RunError> {
    tracing::info!("🔐 Logging in as {}", mask_sensitive(username));

    for step in login_steps(username, password) {
        run_step(page, &step, settle)
            .await
            .map_err(|source| RunError::LoginFailed {
                step: step.describe(),
                source,
            })?;
    }

    tracing::info!("✅ Login complete");
    Ok(())
}
