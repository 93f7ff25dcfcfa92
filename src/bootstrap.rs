//! Page Bootstrap
//!
//! Reads what the server-rendered page hands the widget: the mount element,
//! its `data-*` configuration, the display name and the flash payload.

use wasm_bindgen::JsCast;

use crate::config::{WidgetConfig, MOUNT_ID};
use crate::flash;
use crate::models::FlashEntry;

pub struct PageBootstrap {
    /// Element to mount into; `None` mounts to `<body>`
    pub root: Option<web_sys::HtmlElement>,
    pub config: WidgetConfig,
    pub username: Option<String>,
    pub flashes: Vec<FlashEntry>,
}

impl PageBootstrap {
    pub fn read() -> Self {
        let root = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(MOUNT_ID))
            .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok());

        let config = root
            .as_ref()
            .map(|el| WidgetConfig::from_element(el))
            .unwrap_or_default();
        let username = root.as_ref().and_then(|el| el.get_attribute("data-username"));

        if root.is_none() {
            web_sys::console::log_1(&format!("[BOOT] #{} not found, mounting to body", MOUNT_ID).into());
        }

        // A bad payload only costs the toasts
        let flashes = flash::read_flash_entries(&config.flash_data_id).unwrap_or_else(|e| {
            web_sys::console::error_1(&format!("[FLASH] {}", e).into());
            Vec::new()
        });

        Self { root, config, username, flashes }
    }
}
