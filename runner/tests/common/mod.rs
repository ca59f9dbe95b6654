//! In-memory page used by the integration tests.
#![allow(dead_code)]

use async_trait::async_trait;
use formfill_runner::browser::{Page, PageElement, Role};
use formfill_runner::errors::PageError;
use formfill_runner::resolver::FormSelectors;
use formfill_runner::utils::BoundingBox;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Label,
    Input,
    Button,
    Textbox,
}

#[derive(Debug, Clone)]
pub struct FakeNode {
    pub key: String,
    pub kind: Kind,
    pub text: String,
    pub bbox: Option<BoundingBox>,
    /// `None` makes the disabled check fail.
    pub disabled: Option<bool>,
    pub value: String,
    pub initial_value: String,
    pub value_readable: bool,
    pub direct_fill: bool,
    pub typing: bool,
    pub text_fails: bool,
}

impl FakeNode {
    fn base(key: &str, kind: Kind) -> Self {
        Self {
            key: key.to_string(),
            kind,
            text: String::new(),
            bbox: Some(BoundingBox::new(0.0, 0.0, 10.0, 10.0)),
            disabled: Some(false),
            value: String::new(),
            initial_value: String::new(),
            value_readable: true,
            direct_fill: true,
            typing: true,
            text_fails: false,
        }
    }

    pub fn label(key: &str, text: &str, bbox: BoundingBox) -> Self {
        let mut node = Self::base(key, Kind::Label);
        node.text = text.to_string();
        node.bbox = Some(bbox);
        node
    }

    pub fn input(key: &str, bbox: BoundingBox) -> Self {
        let mut node = Self::base(key, Kind::Input);
        node.bbox = Some(bbox);
        node
    }

    /// Input whose box is centered on (x, y).
    pub fn input_at(key: &str, x: f64, y: f64) -> Self {
        Self::input(key, BoundingBox::new(x - 0.5, y - 0.5, 1.0, 1.0))
    }

    pub fn button(name: &str) -> Self {
        let mut node = Self::base(name, Kind::Button);
        node.text = name.to_string();
        node
    }

    pub fn textbox(name: &str) -> Self {
        let mut node = Self::base(name, Kind::Textbox);
        node.text = name.to_string();
        node
    }

    pub fn hidden(mut self) -> Self {
        self.bbox = None;
        self
    }

    pub fn disabled(mut self) -> Self {
        self.disabled = Some(true);
        self
    }

    pub fn disabled_check_fails(mut self) -> Self {
        self.disabled = None;
        self
    }

    pub fn prefilled(mut self, value: &str) -> Self {
        self.value = value.to_string();
        self.initial_value = value.to_string();
        self
    }

    pub fn unreadable(mut self) -> Self {
        self.value_readable = false;
        self
    }

    /// contenteditable region: no value property, no direct fill, typing works.
    pub fn editable(mut self) -> Self {
        self.value_readable = false;
        self.direct_fill = false;
        self
    }

    pub fn read_only(mut self) -> Self {
        self.direct_fill = false;
        self.typing = false;
        self
    }

    pub fn slow_text(mut self) -> Self {
        self.text_fails = true;
        self
    }
}

pub type SubmitHook = Box<dyn FnMut(usize, &mut Vec<FakeNode>) + Send>;

#[derive(Default)]
pub struct FakeState {
    pub nodes: Vec<FakeNode>,
    pub generation: u64,
    pub gotos: Vec<String>,
    pub clicks: Vec<String>,
    pub waits: Vec<Duration>,
    pub fail_goto: bool,
    /// Input values (by key) captured at each submit.
    pub submissions: Vec<HashMap<String, String>>,
    on_submit: Option<SubmitHook>,
}

#[derive(Clone, Default)]
pub struct FakePage {
    state: Arc<Mutex<FakeState>>,
}

impl FakePage {
    pub fn new(nodes: Vec<FakeNode>) -> Self {
        let page = Self::default();
        page.state.lock().unwrap().nodes = nodes;
        page
    }

    pub fn on_submit(self, hook: SubmitHook) -> Self {
        self.state.lock().unwrap().on_submit = Some(hook);
        self
    }

    pub fn failing_goto(self) -> Self {
        self.state.lock().unwrap().fail_goto = true;
        self
    }

    pub fn state(&self) -> std::sync::MutexGuard<'_, FakeState> {
        self.state.lock().unwrap()
    }

    pub fn value_of(&self, key: &str) -> String {
        self.state()
            .nodes
            .iter()
            .find(|n| n.key == key)
            .map(|n| n.value.clone())
            .unwrap_or_default()
    }

    pub fn click_count(&self, name: &str) -> usize {
        self.state().clicks.iter().filter(|c| c.as_str() == name).count()
    }

    fn handle(&self, key: &str, generation: u64) -> FakeElement {
        FakeElement {
            state: self.state.clone(),
            key: key.to_string(),
            generation,
        }
    }
}

fn name_matches(candidate: &str, name: &str, exact: bool) -> bool {
    if exact {
        candidate.trim() == name.trim()
    } else {
        candidate.to_lowercase().contains(&name.trim().to_lowercase())
    }
}

#[async_trait]
impl Page for FakePage {
    type Element = FakeElement;

    async fn query_all(&self, xpath: &str) -> Result<Vec<FakeElement>, PageError> {
        let (keys, generation) = {
            let state = self.state();
            let wanted: &[Kind] = if xpath == FormSelectors::LABEL_LIKE {
                &[Kind::Label]
            } else if xpath == FormSelectors::INPUT_CAPABLE {
                &[Kind::Input]
            } else {
                return Err(PageError::Driver(format!("unsupported query {}", xpath)));
            };
            let keys: Vec<String> = state
                .nodes
                .iter()
                .filter(|n| wanted.contains(&n.kind))
                .map(|n| n.key.clone())
                .collect();
            (keys, state.generation)
        };
        Ok(keys.iter().map(|k| self.handle(k, generation)).collect())
    }

    async fn find_by_role(
        &self,
        role: Role,
        name: &str,
        exact: bool,
    ) -> Result<FakeElement, PageError> {
        let kind = match role {
            Role::Button => Kind::Button,
            Role::Textbox => Kind::Textbox,
        };
        let (key, generation) = {
            let state = self.state();
            let key = state
                .nodes
                .iter()
                .find(|n| n.kind == kind && name_matches(&n.text, name, exact))
                .map(|n| n.key.clone())
                .ok_or_else(|| PageError::NotFound(format!("{:?} '{}'", role, name)))?;
            (key, state.generation)
        };
        Ok(self.handle(&key, generation))
    }

    async fn goto(&self, url: &str) -> Result<(), PageError> {
        let mut state = self.state();
        if state.fail_goto {
            return Err(PageError::Driver("net::ERR_NAME_NOT_RESOLVED".to_string()));
        }
        state.gotos.push(url.to_string());
        Ok(())
    }

    async fn wait(&self, duration: Duration) {
        self.state().waits.push(duration);
    }
}

pub struct FakeElement {
    state: Arc<Mutex<FakeState>>,
    key: String,
    generation: u64,
}

impl FakeElement {
    fn with_node<T>(
        &self,
        f: impl FnOnce(&mut FakeNode) -> Result<T, PageError>,
    ) -> Result<T, PageError> {
        let mut state = self.state.lock().unwrap();
        if state.generation != self.generation {
            return Err(PageError::Driver("stale element reference".to_string()));
        }
        let node = state
            .nodes
            .iter_mut()
            .find(|n| n.key == self.key)
            .ok_or_else(|| PageError::NotFound(self.key.clone()))?;
        f(node)
    }
}

#[async_trait]
impl PageElement for FakeElement {
    async fn bounding_box(&self) -> Result<Option<BoundingBox>, PageError> {
        self.with_node(|n| Ok(n.bbox))
    }

    async fn inner_text(&self, timeout: Duration) -> Result<String, PageError> {
        self.with_node(|n| {
            if n.text_fails {
                Err(PageError::Timeout(timeout.as_millis() as u64))
            } else {
                Ok(n.text.clone())
            }
        })
    }

    async fn is_disabled(&self) -> Result<bool, PageError> {
        self.with_node(|n| {
            n.disabled
                .ok_or_else(|| PageError::Driver("evaluate failed".to_string()))
        })
    }

    async fn input_value(&self, _timeout: Duration) -> Result<String, PageError> {
        self.with_node(|n| {
            if n.value_readable {
                Ok(n.value.clone())
            } else {
                Err(PageError::Unsupported("no value property".to_string()))
            }
        })
    }

    async fn fill(&self, value: &str) -> Result<(), PageError> {
        self.with_node(|n| {
            if n.direct_fill {
                n.value = value.to_string();
                Ok(())
            } else {
                Err(PageError::Unsupported("fill".to_string()))
            }
        })
    }

    async fn click(&self) -> Result<(), PageError> {
        let mut state = self.state.lock().unwrap();
        if state.generation != self.generation {
            return Err(PageError::Driver("stale element reference".to_string()));
        }
        let node = state
            .nodes
            .iter()
            .find(|n| n.key == self.key)
            .cloned()
            .ok_or_else(|| PageError::NotFound(self.key.clone()))?;
        if node.kind != Kind::Button {
            return Ok(());
        }

        state.clicks.push(node.text.clone());
        if node.text == "Submit" {
            let snapshot = state
                .nodes
                .iter()
                .filter(|n| n.kind == Kind::Input)
                .map(|n| (n.key.clone(), n.value.clone()))
                .collect();
            state.submissions.push(snapshot);

            let count = state.submissions.len();
            let FakeState {
                nodes, on_submit, ..
            } = &mut *state;
            for n in nodes.iter_mut() {
                n.value = n.initial_value.clone();
            }
            if let Some(hook) = on_submit.as_mut() {
                hook(count, nodes);
            }
            state.generation += 1;
        }
        Ok(())
    }

    async fn select_all(&self) -> Result<(), PageError> {
        self.with_node(|_| Ok(()))
    }

    async fn type_text(&self, text: &str) -> Result<(), PageError> {
        self.with_node(|n| {
            if n.typing {
                n.value = text.to_string();
                Ok(())
            } else {
                Err(PageError::Unsupported("typing".to_string()))
            }
        })
    }
}

/// Label/input pairs laid out as rows of a two-column form, in slot order.
///
/// Labels sit at x=0..200, inputs at x=220..420, one row every 100px.
pub fn form_nodes(fields: &[(&str, &str)], slots: &[usize]) -> Vec<FakeNode> {
    let mut placed: Vec<(usize, FakeNode, FakeNode)> = fields
        .iter()
        .zip(slots)
        .map(|((key, caption), slot)| {
            let y = 100.0 * (*slot as f64 + 1.0);
            (
                *slot,
                FakeNode::label(&format!("{}-label", key), caption, BoundingBox::new(0.0, y, 200.0, 20.0)),
                FakeNode::input(key, BoundingBox::new(220.0, y, 200.0, 30.0)),
            )
        })
        .collect();
    placed.sort_by_key(|(slot, _, _)| *slot);

    let mut nodes = Vec::new();
    for (_, label, input) in placed {
        nodes.push(label);
        nodes.push(input);
    }
    nodes
}

pub fn login_nodes() -> Vec<FakeNode> {
    vec![
        FakeNode::button("SIGN UP OR LOGIN"),
        FakeNode::button("OR LOGIN"),
        FakeNode::textbox("Email"),
        FakeNode::textbox("Password"),
        FakeNode::button("LOG IN"),
        FakeNode::button("Start"),
    ]
}

pub const CHALLENGE_FIELDS: [(&str, &str); 7] = [
    ("ein", "EIN / Employer ID:"),
    ("company_name", "Company Name"),
    ("sector", "Sector"),
    ("address", "Company Address"),
    ("automation_tool", "Automation Tool"),
    ("annual_saving", "Annual Automation Saving"),
    ("first_project_date", "Date of First Project"),
];

pub const FIVE_ROWS_CSV: &str = "\
EIN,Company Name,Sector,Address,Automation Tool,Annual Saving,Date,Username,Password
11-1111111,Acme Corp,Retail,1 Main St,UiPath,50000,2020-01-01,qa@example.com,hunter22
22-2222222,Globex,Energy,2 Side Ave,Automation Anywhere,75000,2021-06-30,qa@example.com,hunter22
33-3333333,Initech,Software,3 Office Park,Blue Prism,12000,2019-03-15,qa@example.com,hunter22
44-4444444,Umbrella,Pharma,4 Hive Rd,Power Automate,99000,2018-11-11,qa@example.com,hunter22
55-5555555,Hooli,Tech,5 Valley Way,Rust,31000,2022-02-02,qa@example.com,hunter22
";

/// Collects formatted log lines emitted while its guard is alive.
#[derive(Clone, Default)]
pub struct LogCapture(Arc<Mutex<Vec<u8>>>);

impl LogCapture {
    /// Installs a thread-local WARN-level subscriber writing into this buffer.
    pub fn install(&self) -> tracing::subscriber::DefaultGuard {
        let subscriber = tracing_subscriber::fmt()
            .with_writer(self.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::WARN)
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl std::io::Write for LogCapture {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for LogCapture {
    type Writer = LogCapture;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}
