// web-sysによるPage実装（WASM環境）

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlInputElement, HtmlTextAreaElement, UrlSearchParams, Window};

use super::Page;

/// 実ブラウザのwindow/documentに対するPage実装
#[derive(Clone)]
pub struct DomPage {
    window: Window,
    document: Document,
}

impl DomPage {
    /// グローバルのwindowからDomPageを構築する。
    /// window/documentが取得できない環境（Worker等）ではNone。
    pub fn from_window() -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;
        Some(Self { window, document })
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// ページのオリジン（スキーム+ホスト）。APIのベースURLとして使う。
    pub fn origin(&self) -> String {
        match self.window.location().origin() {
            Ok(origin) => origin,
            Err(e) => {
                log::error!("Failed to read location.origin: {:?}", e);
                String::new()
            }
        }
    }
}

impl Page for DomPage {
    fn field_value(&self, element_id: &str) -> Option<String> {
        let element = self.document.get_element_by_id(element_id)?;

        // input / textarea のどちらでも値を読めるようにする
        if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
            return Some(input.value());
        }
        if let Some(textarea) = element.dyn_ref::<HtmlTextAreaElement>() {
            return Some(textarea.value());
        }

        log::warn!("Element '{}' is not an input or textarea", element_id);
        None
    }

    fn query_param(&self, key: &str) -> Option<String> {
        let search = self.window.location().search().ok()?;
        let params = UrlSearchParams::new_with_str(&search).ok()?;
        params.get(key)
    }

    fn alert(&self, message: &str) {
        if let Err(e) = self.window.alert_with_message(message) {
            log::error!("Failed to show alert: {:?}", e);
        }
    }

    fn replace_location(&self, url: &str) {
        log::info!("Replacing location with: {}", url);

        if let Err(e) = self.window.location().replace(url) {
            log::error!("Failed to replace location with {}: {:?}", url, e);
        }
    }
}
