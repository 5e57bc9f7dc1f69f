//! Headless navigation surface.
//!
//! Commits every navigation immediately without fetching or rendering
//! anything, so the shell can run without a window.

use std::collections::VecDeque;
use std::io::BufRead;
use std::sync::Arc;

use common::ShellResult;
use parking_lot::Mutex;
use tracing::{debug, info, warn};
use ui::{
    EventSink, LocationTracker, NavigationHistory, NavigationSurface, SurfaceEvent, SurfaceOptions,
    ToolbarCommand, WindowChrome,
};

use crate::config::BrowserConfig;
use crate::controller::BrowserController;
use crate::launch::LaunchPlan;
use crate::visit_log::VisitLog;

/// Queue collecting surface notifications until the driver drains them.
#[derive(Clone, Default)]
pub struct EventQueue {
    events: Arc<Mutex<VecDeque<SurfaceEvent>>>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sink pushing into this queue.
    pub fn sink(&self) -> EventSink {
        let events = Arc::clone(&self.events);
        Arc::new(move |event| events.lock().push_back(event))
    }

    /// Take the oldest pending event.
    pub fn pop(&self) -> Option<SurfaceEvent> {
        self.events.lock().pop_front()
    }

    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }
}

/// Navigation surface without an engine behind it.
pub struct HeadlessSurface {
    options: SurfaceOptions,
    history: NavigationHistory,
    highlight: Option<String>,
    tracker: LocationTracker,
    sink: EventSink,
}

impl HeadlessSurface {
    /// Create the surface and load `options.initial_url`.
    pub fn new(options: SurfaceOptions, sink: EventSink) -> Self {
        debug!(
            "Headless surface: user agent {:?}, launch flags {:?}",
            options.user_agent, options.launch_flags
        );

        let mut surface = Self {
            history: NavigationHistory::new(),
            highlight: None,
            tracker: LocationTracker::new(),
            sink,
            options,
        };
        let initial_url = surface.options.initial_url.clone();
        surface.commit(initial_url);
        surface
    }

    /// Options the surface was created with.
    pub fn options(&self) -> &SurfaceOptions {
        &self.options
    }

    /// Current location.
    pub fn url(&self) -> Option<&str> {
        self.history.current()
    }

    /// Text currently highlighted by a search.
    pub fn highlight(&self) -> Option<&str> {
        self.highlight.as_deref()
    }

    fn commit(&mut self, url: String) {
        self.history.push(url);
        self.announce_current();
    }

    fn announce_current(&mut self) {
        self.highlight = None;
        let Some(url) = self.history.current() else {
            return;
        };
        if let Some(event) = self.tracker.observe(url) {
            (self.sink)(event);
        }
    }
}

impl NavigationSurface for HeadlessSurface {
    fn load_url(&mut self, url: &str) -> ShellResult<()> {
        self.commit(url.to_string());
        Ok(())
    }

    fn back(&mut self) -> ShellResult<()> {
        if self.history.go_back().is_some() {
            self.announce_current();
        }
        Ok(())
    }

    fn forward(&mut self) -> ShellResult<()> {
        if self.history.go_forward().is_some() {
            self.announce_current();
        }
        Ok(())
    }

    fn reload(&mut self) -> ShellResult<()> {
        self.highlight = None;
        Ok(())
    }

    fn find_text(&mut self, query: &str) -> ShellResult<()> {
        self.highlight = (!query.is_empty()).then(|| query.to_string());
        Ok(())
    }
}

/// Window chrome that only remembers the URL field text.
#[derive(Debug, Default)]
pub struct HeadlessChrome {
    url_text: String,
}

impl HeadlessChrome {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current URL field text.
    pub fn url_text(&self) -> &str {
        &self.url_text
    }
}

impl WindowChrome for HeadlessChrome {
    fn set_url_text(&mut self, text: &str) {
        self.url_text = text.to_string();
    }
}

/// Headless controller type.
pub type HeadlessController = BrowserController<HeadlessSurface, HeadlessChrome>;

fn dispatch_pending(controller: &mut HeadlessController, queue: &EventQueue) {
    while let Some(event) = queue.pop() {
        controller.handle_event(event);
    }
}

/// Run the shell without a window.
///
/// Each line of `input` is handled as a toolbar message (`back`,
/// `navigate:example.com`, `search:text`, ...). Returns the controller once
/// the input is exhausted.
pub fn run<R: BufRead>(
    config: BrowserConfig,
    plan: LaunchPlan,
    visit_log: VisitLog,
    input: R,
) -> ShellResult<HeadlessController> {
    if plan.chrome.is_dark() {
        debug!("Dark palette has no effect without a window");
    }

    let queue = EventQueue::new();
    let surface = HeadlessSurface::new(plan.surface, queue.sink());
    let mut controller = BrowserController::new(config, surface, HeadlessChrome::new(), visit_log);
    dispatch_pending(&mut controller, &queue);
    info!("Headless shell running");

    for line in input.lines() {
        let line = line?;
        let message = line.trim_end_matches('\r');
        if message.is_empty() {
            continue;
        }

        match ToolbarCommand::parse(message) {
            Some(command) => controller.handle_toolbar(command),
            None => warn!("Ignoring unknown command {:?}", message),
        }
        dispatch_pending(&mut controller, &queue);
    }

    Ok(controller)
}
