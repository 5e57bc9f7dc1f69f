//! Toolbar markup and the message protocol it speaks.
//!
//! The toolbar is a small HTML document hosted above the page. It reports
//! user input as plain string messages:
//!
//! | message            | meaning                          |
//! |--------------------|----------------------------------|
//! | `back`             | Back button                      |
//! | `forward`          | Forward button                   |
//! | `reload`           | Reload button                    |
//! | `home`             | Home button                      |
//! | `navigate:<text>`  | URL field confirmed with `<text>` |
//! | `search:<text>`    | search prompt confirmed          |
//! | `search-cancel`    | search prompt dismissed          |

use crate::find_bar::SearchPrompt;
use crate::navigation::NavigationAction;
use crate::window::ChromeOptions;

/// Height of the toolbar strip in logical pixels.
pub const TOOLBAR_HEIGHT: u32 = 40;

/// Command decoded from a toolbar message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ToolbarCommand {
    Navigation(NavigationAction),
    /// Text confirmed in the URL field.
    Navigate(String),
    /// Search prompt result, `None` when cancelled.
    Search(Option<String>),
}

impl ToolbarCommand {
    /// Decode a toolbar message. Returns `None` for unknown messages.
    pub fn parse(message: &str) -> Option<Self> {
        if let Some(text) = message.strip_prefix("navigate:") {
            return Some(ToolbarCommand::Navigate(text.to_string()));
        }
        if let Some(text) = message.strip_prefix("search:") {
            return Some(ToolbarCommand::Search(Some(text.to_string())));
        }

        let command = match message {
            "back" => ToolbarCommand::Navigation(NavigationAction::Back),
            "forward" => ToolbarCommand::Navigation(NavigationAction::Forward),
            "reload" => ToolbarCommand::Navigation(NavigationAction::Reload),
            "home" => ToolbarCommand::Navigation(NavigationAction::Home),
            "search-cancel" => ToolbarCommand::Search(None),
            _ => return None,
        };
        Some(command)
    }
}

const DEFAULT_COLORS: &str = ":root {
  --window: #efefef;
  --window-text: #000000;
  --base: #ffffff;
  --text: #000000;
  --button: #efefef;
  --button-text: #000000;
  --highlight: #308cc6;
  --highlighted-text: #ffffff;
}";

const TOOLBAR_STYLE: &str = "
* { margin: 0; padding: 0; box-sizing: border-box; }
html, body { height: 100%; overflow: hidden; }
body {
  display: flex;
  align-items: center;
  gap: 4px;
  padding: 0 6px;
  background: var(--window);
  color: var(--window-text);
  font-family: system-ui, sans-serif;
  font-size: 13px;
}
button {
  background: var(--button);
  color: var(--button-text);
  border: 1px solid transparent;
  border-radius: 3px;
  padding: 4px 8px;
  cursor: pointer;
}
button:hover { border-color: var(--highlight); }
#url {
  flex: 1;
  background: var(--base);
  color: var(--text);
  border: 1px solid var(--button);
  padding: 4px 8px;
  outline: none;
}
#url::selection { background: var(--highlight); color: var(--highlighted-text); }
";

const TOOLBAR_SCRIPT: &str = "
function send(message) { window.ipc.postMessage(message); }
function search() {
  const query = window.prompt(SEARCH_LABEL, '');
  send(query === null ? 'search-cancel' : 'search:' + query);
}
function setUrl(url) { document.getElementById('url').value = url; }
document.getElementById('url').addEventListener('keydown', function (event) {
  if (event.key === 'Enter') { send('navigate:' + this.value); }
});
";

fn button(message: &str, label: &str) -> String {
    format!(r#"<button onclick="send('{}')">{}</button>"#, message, label)
}

/// Render the toolbar document for the given chrome options.
pub fn render_toolbar_html(options: &ChromeOptions) -> String {
    let colors = match &options.palette {
        Some(palette) => palette.to_css(),
        None => DEFAULT_COLORS.to_string(),
    };

    let buttons = [
        button("back", NavigationAction::Back.label()),
        button("forward", NavigationAction::Forward.label()),
        button("reload", NavigationAction::Reload.label()),
        button("home", NavigationAction::Home.label()),
    ]
    .concat();

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="UTF-8">
<title>{title}</title>
<style>
{colors}
{style}
</style>
</head>
<body>
{buttons}
<button onclick="search()">{search}</button>
<input id="url" type="text" spellcheck="false">
<script>
const SEARCH_LABEL = "{label}";
{script}
</script>
</body>
</html>"#,
        title = options.title,
        colors = colors,
        style = TOOLBAR_STYLE,
        buttons = buttons,
        search = SearchPrompt::TITLE,
        label = SearchPrompt::LABEL,
        script = TOOLBAR_SCRIPT,
    )
}
