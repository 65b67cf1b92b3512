use std::ffi::OsString;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use headless_chrome::{Browser, LaunchOptions, Tab};
use tracing::{debug, warn};

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Selector whose appearance means the listing area has rendered.
const READY_SELECTOR: &str = ".item_recruit";
const READY_TIMEOUT: Duration = Duration::from_secs(10);

/// Settle delay used when the ready selector never shows up (layout drift).
const SETTLE_DELAY: Duration = Duration::from_secs(3);

/// Navigate to `url` in a headless browser and return the rendered HTML.
/// Launch and navigation failures propagate and abort the whole run; the
/// browser process is torn down when the handle drops.
pub fn render_page(url: &str) -> Result<String> {
    let browser = launch().context("failed to launch headless browser")?;
    let tab = browser.new_tab().context("failed to open a browser tab")?;
    tab.navigate_to(url)
        .with_context(|| format!("navigation to {} failed", url))?;

    wait_for_listings(&tab);

    tab.get_content().context("failed to read rendered page")
}

fn launch() -> Result<Browser> {
    let user_agent = OsString::from(format!("--user-agent={}", USER_AGENT));
    let no_automation = OsString::from("--disable-blink-features=AutomationControlled");
    let no_dev_shm = OsString::from("--disable-dev-shm-usage");

    Browser::new(LaunchOptions {
        headless: true,
        sandbox: false,
        args: vec![&user_agent, &no_automation, &no_dev_shm],
        ..Default::default()
    })
}

/// Bounded wait for a listing container; when the site's layout has changed
/// enough that the selector never matches, fall back to a fixed settle delay
/// so the degraded discovery path still gets a fully rendered page.
fn wait_for_listings(tab: &Arc<Tab>) {
    match tab.wait_for_element_with_custom_timeout(READY_SELECTOR, READY_TIMEOUT) {
        Ok(_) => debug!("listing container present"),
        Err(err) => {
            warn!(
                "no {} element within {:?} ({}); settling with a fixed delay",
                READY_SELECTOR, READY_TIMEOUT, err
            );
            thread::sleep(SETTLE_DELAY);
        }
    }
}
