pub mod api;
pub mod page;
pub mod actions;
pub mod routing;

#[cfg(target_arch = "wasm32")]
pub mod wasm_entry;

pub use actions::{Completion, handle_create, handle_delete, handle_modify};
pub use api::{ArticleApi, ArticleBackend, ArticleDraft};
pub use page::Page;

/// ネイティブ側（テスト・ツール実行時）のログレベルを初期化する関数
#[cfg(not(target_arch = "wasm32"))]
pub fn init_logger() {
    use env_logger::Builder;
    use log::LevelFilter;
    use std::sync::Once;

    static INIT: Once = Once::new();

    INIT.call_once(|| {
        Builder::from_default_env()
            .filter_level(LevelFilter::Info)
            // reqwest/hyper関連のInfoログを抑制
            .filter_module("reqwest", LevelFilter::Warn)
            .filter_module("hyper", LevelFilter::Warn)
            .format_timestamp_secs()
            .try_init()
            .ok(); // エラーを無視
    });
}
