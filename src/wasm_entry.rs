// WASM専用のエントリーポイント

use wasm_bindgen::prelude::*;

use crate::actions::bind::bind_article_actions;
use crate::api::ArticleApi;
use crate::page::dom::DomPage;

#[wasm_bindgen(start)]
pub fn main() {
    // パニック時のエラーメッセージをブラウザコンソールに表示
    console_error_panic_hook::set_once();

    // WebAssembly用のロガーを初期化
    console_log::init_with_level(log::Level::Info).expect("error initializing log");

    log::info!("article-actions WASM starting...");

    let page = match DomPage::from_window() {
        Some(page) => page,
        None => {
            log::error!("No window/document available, skipping article action binding");
            return;
        }
    };

    // APIはページと同一オリジンに向ける
    let api = ArticleApi::new(page.origin());
    bind_article_actions(&page, api);

    log::info!("article-actions WASM initialized successfully!");
}
