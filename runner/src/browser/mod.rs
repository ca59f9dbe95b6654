pub mod driver;
pub mod page;
pub mod role;
pub mod webdriver;

pub use driver::create_webdriver_client;
pub use page::{Page, PageElement, Role};
pub use webdriver::{ElementKind, WebDriverElement, WebDriverPage};
