//! Native window shell.
//!
//! A `tao` window hosting two `wry` webviews: the toolbar strip on top and
//! the page below it. Both report back to the event loop through a proxy,
//! so the controller only ever runs on the event loop thread.

use std::sync::Arc;

use common::{ShellError, ShellResult};
use parking_lot::Mutex;
use tao::dpi::{LogicalPosition, LogicalSize};
use tao::event::{Event, WindowEvent};
use tao::event_loop::{ControlFlow, EventLoopBuilder, EventLoopProxy};
use tao::window::{Window, WindowBuilder};
use tracing::{debug, info, warn};
use ui::toolbar::TOOLBAR_HEIGHT;
use ui::{
    parse_location_message, render_toolbar_html, EventSink, LocationTracker, NavigationSurface,
    SurfaceEvent, SurfaceOptions, ToolbarCommand, WindowChrome, LOCATION_SCRIPT,
};
use wry::{PageLoadEvent, WebView, WebViewBuilder};

use crate::config::BrowserConfig;
use crate::controller::BrowserController;
use crate::launch::LaunchPlan;
use crate::visit_log::VisitLog;

/// Event delivered to the window event loop.
#[derive(Debug)]
pub enum ShellEvent {
    Surface(SurfaceEvent),
    Toolbar(ToolbarCommand),
}

fn window_error(e: impl std::fmt::Display) -> ShellError {
    ShellError::window(e.to_string())
}

/// Quote a string as a JavaScript literal.
fn js_string(text: &str) -> String {
    serde_json::Value::String(text.to_string()).to_string()
}

/// Navigation surface backed by a wry webview.
pub struct WebViewSurface {
    webview: WebView,
}

impl WebViewSurface {
    /// Configure the page webview. Location changes are reported to `sink`.
    ///
    /// A finished page load reports the final URL after redirects. Fragment
    /// and `history` API changes arrive from the injected location script.
    fn builder<'a>(options: &SurfaceOptions, sink: EventSink) -> WebViewBuilder<'a> {
        let report: Arc<dyn Fn(&str) + Send + Sync> = {
            let tracker = Mutex::new(LocationTracker::new());
            Arc::new(move |url: &str| {
                let event = tracker.lock().observe(url);
                if let Some(event) = event {
                    sink(event);
                }
            })
        };
        let report_load = Arc::clone(&report);

        let builder = WebViewBuilder::new()
            .with_url(options.initial_url.as_str())
            .with_user_agent(options.user_agent.as_str())
            .with_initialization_script(LOCATION_SCRIPT)
            .with_on_page_load_handler(move |event, url| {
                if let PageLoadEvent::Finished = event {
                    report_load(&url);
                }
            })
            .with_ipc_handler(move |request| match parse_location_message(request.body()) {
                Some(url) => report(url),
                None => debug!("Ignoring page message {:?}", request.body()),
            });

        #[cfg(target_os = "windows")]
        let builder = {
            use wry::WebViewBuilderExtWindows;
            builder.with_additional_browser_args(crate::flags::webview2_args(&options.launch_flags))
        };

        #[cfg(not(target_os = "windows"))]
        if !options.launch_flags.is_empty() {
            debug!(
                "Engine launch flags {:?} are not supported by this platform's webview",
                options.launch_flags
            );
        }

        builder
    }

    pub fn webview(&self) -> &WebView {
        &self.webview
    }
}

impl NavigationSurface for WebViewSurface {
    fn load_url(&mut self, url: &str) -> ShellResult<()> {
        self.webview.load_url(url).map_err(window_error)
    }

    fn back(&mut self) -> ShellResult<()> {
        self.webview
            .evaluate_script("window.history.back()")
            .map_err(window_error)
    }

    fn forward(&mut self) -> ShellResult<()> {
        self.webview
            .evaluate_script("window.history.forward()")
            .map_err(window_error)
    }

    fn reload(&mut self) -> ShellResult<()> {
        self.webview
            .evaluate_script("window.location.reload()")
            .map_err(window_error)
    }

    fn find_text(&mut self, query: &str) -> ShellResult<()> {
        let script = if query.is_empty() {
            "window.getSelection().removeAllRanges()".to_string()
        } else {
            format!("window.find({})", js_string(query))
        };
        self.webview.evaluate_script(&script).map_err(window_error)
    }
}

/// Window chrome backed by the toolbar webview.
pub struct ToolbarChrome {
    webview: WebView,
}

impl ToolbarChrome {
    fn builder<'a>(html: String, proxy: EventLoopProxy<ShellEvent>) -> WebViewBuilder<'a> {
        WebViewBuilder::new()
            .with_html(html)
            .with_ipc_handler(move |request| {
                let message = request.body();
                match ToolbarCommand::parse(message) {
                    Some(command) => {
                        let _ = proxy.send_event(ShellEvent::Toolbar(command));
                    }
                    None => debug!("Ignoring toolbar message {:?}", message),
                }
            })
    }

    pub fn webview(&self) -> &WebView {
        &self.webview
    }
}

impl WindowChrome for ToolbarChrome {
    fn set_url_text(&mut self, text: &str) {
        let script = format!("setUrl({})", js_string(text));
        if let Err(e) = self.webview.evaluate_script(&script) {
            warn!("Failed to update URL field: {}", e);
        }
    }
}

#[cfg(not(target_os = "linux"))]
fn child_bounds(window: &Window) -> (wry::Rect, wry::Rect) {
    use wry::dpi::{LogicalPosition, LogicalSize};

    let size = window.inner_size().to_logical::<f64>(window.scale_factor());
    let toolbar_height = TOOLBAR_HEIGHT as f64;

    let toolbar = wry::Rect {
        position: LogicalPosition::new(0.0, 0.0).into(),
        size: LogicalSize::new(size.width, toolbar_height).into(),
    };
    let page = wry::Rect {
        position: LogicalPosition::new(0.0, toolbar_height).into(),
        size: LogicalSize::new(size.width, (size.height - toolbar_height).max(0.0)).into(),
    };
    (toolbar, page)
}

/// Place the toolbar and page webviews in the window.
#[cfg(target_os = "linux")]
fn build_webviews<'a>(
    window: &'a Window,
    toolbar: WebViewBuilder<'a>,
    page: WebViewBuilder<'a>,
) -> ShellResult<(WebView, WebView)> {
    use gtk::prelude::*;
    use tao::platform::unix::WindowExtUnix;
    use wry::WebViewBuilderExtUnix;

    let vbox = window
        .default_vbox()
        .ok_or_else(|| ShellError::window("window has no GTK container"))?;

    let toolbar_box = gtk::Box::new(gtk::Orientation::Vertical, 0);
    toolbar_box.set_size_request(-1, TOOLBAR_HEIGHT as i32);
    let page_box = gtk::Box::new(gtk::Orientation::Vertical, 0);
    page_box.set_vexpand(true);

    vbox.pack_start(&toolbar_box, false, false, 0);
    vbox.pack_start(&page_box, true, true, 0);
    vbox.show_all();

    let toolbar = toolbar.build_gtk(&toolbar_box).map_err(window_error)?;
    let page = page.build_gtk(&page_box).map_err(window_error)?;
    Ok((toolbar, page))
}

#[cfg(not(target_os = "linux"))]
fn build_webviews<'a>(
    window: &'a Window,
    toolbar: WebViewBuilder<'a>,
    page: WebViewBuilder<'a>,
) -> ShellResult<(WebView, WebView)> {
    let (toolbar_bounds, page_bounds) = child_bounds(window);
    let toolbar = toolbar
        .with_bounds(toolbar_bounds)
        .build_as_child(window)
        .map_err(window_error)?;
    let page = page
        .with_bounds(page_bounds)
        .build_as_child(window)
        .map_err(window_error)?;
    Ok((toolbar, page))
}

/// Open the browser window and run the event loop until it is closed.
pub fn run(config: BrowserConfig, plan: LaunchPlan, visit_log: VisitLog) -> ShellResult<()> {
    let event_loop = EventLoopBuilder::<ShellEvent>::with_user_event().build();

    let dimensions = &plan.chrome.dimensions;
    let window = WindowBuilder::new()
        .with_title(plan.chrome.title.as_str())
        .with_position(LogicalPosition::new(dimensions.x, dimensions.y))
        .with_inner_size(LogicalSize::new(dimensions.width, dimensions.height))
        .build(&event_loop)
        .map_err(window_error)?;

    let surface_proxy = Mutex::new(event_loop.create_proxy());
    let sink: EventSink = Arc::new(move |event| {
        let _ = surface_proxy.lock().send_event(ShellEvent::Surface(event));
    });

    let toolbar_builder =
        ToolbarChrome::builder(render_toolbar_html(&plan.chrome), event_loop.create_proxy());
    let page_builder = WebViewSurface::builder(&plan.surface, sink);
    let (toolbar, page) = build_webviews(&window, toolbar_builder, page_builder)?;

    let mut controller = BrowserController::new(
        config,
        WebViewSurface { webview: page },
        ToolbarChrome { webview: toolbar },
        visit_log,
    );
    info!("Window opened at {}", plan.surface.initial_url);

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;

        match event {
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => {
                info!("Window closed");
                *control_flow = ControlFlow::Exit;
            }
            #[cfg(not(target_os = "linux"))]
            Event::WindowEvent {
                event: WindowEvent::Resized(_),
                ..
            } => {
                let (toolbar_bounds, page_bounds) = child_bounds(&window);
                if let Err(e) = controller.chrome().webview().set_bounds(toolbar_bounds) {
                    warn!("Failed to resize toolbar: {}", e);
                }
                if let Err(e) = controller.surface().webview().set_bounds(page_bounds) {
                    warn!("Failed to resize page: {}", e);
                }
            }
            Event::UserEvent(ShellEvent::Surface(event)) => controller.handle_event(event),
            Event::UserEvent(ShellEvent::Toolbar(command)) => controller.handle_toolbar(command),
            _ => {}
        }

        #[cfg(target_os = "linux")]
        let _ = &window;
    })
}
