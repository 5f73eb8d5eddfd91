//! Popover action menu entries and the navigation side effect behind them.

use std::cell::{Cell, RefCell};

use serde::{Deserialize, Serialize};
use url::Url;

use crate::deeplink::MessagingLink;
use crate::error::{CoreResult, GearError};

/// Placeholder replaced by [`ActionContext::title`] in messaging templates.
pub const TITLE_PLACEHOLDER: &str = "{title}";

/// Icon shown next to an action label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActionIcon {
    Message,
    ExternalLink,
}

/// What selecting an action opens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum ActionTarget {
    /// Messaging deep link pre-filled with `template`.
    Messaging { phone: String, template: String },
    /// Fixed external portal.
    Portal { url: String },
}

/// One entry in a popover menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionSpec {
    pub label: String,
    pub icon: ActionIcon,
    pub target: ActionTarget,
}

impl ActionSpec {
    pub fn messaging(label: impl Into<String>, phone: impl Into<String>, template: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            icon: ActionIcon::Message,
            target: ActionTarget::Messaging {
                phone: phone.into(),
                template: template.into(),
            },
        }
    }

    pub fn portal(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            icon: ActionIcon::ExternalLink,
            target: ActionTarget::Portal { url: url.into() },
        }
    }

    /// URL this action opens for `context`.
    pub fn url(&self, context: &ActionContext) -> CoreResult<Url> {
        match &self.target {
            ActionTarget::Messaging { phone, template } => MessagingLink::new(phone)
                .text(render_template(template, context))
                .to_url(),
            ActionTarget::Portal { url } => Ok(Url::parse(url)?),
        }
    }
}

/// Host-supplied context captured when a popover opens.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ActionContext {
    /// Display title of the item the trigger belongs to.
    pub title: String,
}

impl ActionContext {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

pub fn render_template(template: &str, context: &ActionContext) -> String {
    template.replace(TITLE_PLACEHOLDER, &context.title)
}

/// Opens a new browsing context.
pub trait Navigator {
    fn open_url(&self, url: &Url) -> CoreResult<()>;
}

/// Navigator that remembers what it was asked to open.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    opened: RefCell<Vec<Url>>,
    fail: Cell<bool>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make subsequent opens fail, as a blocked popup would.
    pub fn set_failing(&self, fail: bool) {
        self.fail.set(fail);
    }

    pub fn opened(&self) -> Vec<Url> {
        self.opened.borrow().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn open_url(&self, url: &Url) -> CoreResult<()> {
        if self.fail.get() {
            return Err(GearError::Navigation(format!("blocked: {}", url)));
        }
        self.opened.borrow_mut().push(url.clone());
        Ok(())
    }
}
