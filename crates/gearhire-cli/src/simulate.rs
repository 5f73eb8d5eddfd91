//! Replays a session script against the headless viewport.

use std::collections::HashMap;
use std::rc::Rc;

use anyhow::{Context, Result};
use gearhire_core::{
    ActionContext, ActionOutcome, HeadlessAnchor, HeadlessViewport, OwnerId, Placement,
    PopoverController, RecordingNavigator, Region, RegionSettings, Size,
};
use serde::Serialize;

use crate::script::{ClickTarget, Step};

/// Pointer path used for `click outside`.
const PAGE_ELEMENT_ID: &str = "page";

/// Popover state after one step.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepReport {
    pub step: String,
    pub open: Option<String>,
    pub placement: Option<Placement>,
    pub listeners: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opened_url: Option<String>,
}

impl StepReport {
    pub fn render(&self) -> String {
        let state = match (&self.open, &self.placement) {
            (Some(owner), Some(p)) => format!(
                "open {} top={} left={} {}",
                owner,
                p.top,
                p.left,
                if p.place_above { "above" } else { "below" }
            ),
            _ => "closed".to_string(),
        };
        let mut line = format!("{:<32} -> {:<44} listeners={}", self.step, state, self.listeners);
        if let Some(url) = &self.opened_url {
            line.push_str(&format!("\n{:<32}    opened {}", "", url));
        }
        line
    }
}

pub struct Simulation {
    port: HeadlessViewport,
    controller: PopoverController<HeadlessViewport>,
    region: Region,
    anchors: HashMap<OwnerId, Rc<HeadlessAnchor>>,
}

fn trigger_element_id(owner: &OwnerId) -> String {
    format!("trigger-{}", owner)
}

impl Simulation {
    pub fn new(region: Region, viewport: Size, settings: RegionSettings) -> Self {
        let port = HeadlessViewport::new(viewport);
        let controller = PopoverController::new(
            region,
            port.clone(),
            settings,
            Rc::new(RecordingNavigator::new()),
        );
        Self {
            port,
            controller,
            region,
            anchors: HashMap::new(),
        }
    }

    fn activate(&self, owner: &OwnerId, title: &str) {
        let context = if title.is_empty() {
            ActionContext::default()
        } else {
            ActionContext::titled(title)
        };
        self.controller.activate_with(owner.clone(), context);
    }

    pub fn apply(&mut self, step: &Step) -> Result<StepReport> {
        tracing::debug!(region = %self.region, step = %step, "Replaying step");
        let mut opened_url = None;

        match step {
            Step::Trigger { owner, rect } => {
                let anchor = Rc::new(HeadlessAnchor::new(trigger_element_id(owner), *rect));
                self.controller.register_trigger(owner.clone(), anchor.clone());
                self.anchors.insert(owner.clone(), anchor);
            }
            Step::Move { owner, rect } => {
                let anchor = self
                    .anchors
                    .get(owner)
                    .with_context(|| format!("no trigger '{}'", owner))?;
                anchor.set_rect(*rect);
            }
            Step::Remove(owner) => {
                self.anchors.remove(owner);
                self.controller.unregister_trigger(owner);
            }
            Step::Open { owner, title } => self.activate(owner, title),
            Step::Click { target, title } => match target {
                ClickTarget::Popover => self.port.pointer_down([self.region.popover_element_id()]),
                ClickTarget::Outside => self.port.pointer_down([PAGE_ELEMENT_ID]),
                ClickTarget::Trigger(owner) => {
                    // pointer-down reaches the document before the click handler runs
                    self.port.pointer_down([trigger_element_id(owner), PAGE_ELEMENT_ID.to_string()]);
                    self.activate(owner, title);
                }
            },
            Step::Resize(size) => self.port.resize(*size),
            Step::Scroll => self.port.scroll(),
            Step::Key(key) => self.port.key_up(key),
            Step::Select(index) => {
                if let ActionOutcome::Opened(url) = self.controller.select_action(*index)? {
                    tracing::debug!(region = %self.region, url = %url, "Simulated action opened link");
                    opened_url = Some(url.to_string());
                }
            }
            Step::Close => {
                self.controller.close();
            }
        }

        Ok(StepReport {
            step: step.to_string(),
            open: self.controller.active_owner().map(|o| o.to_string()),
            placement: self.controller.placement(),
            listeners: self.port.total_listeners(),
            opened_url,
        })
    }
}

/// Run every step, stopping at the first failing one.
pub fn run(region: Region, viewport: Size, settings: RegionSettings, steps: &[Step]) -> Result<Vec<StepReport>> {
    let mut simulation = Simulation::new(region, viewport, settings);
    steps
        .iter()
        .map(|step| simulation.apply(step).with_context(|| format!("step '{}'", step)))
        .collect()
}
