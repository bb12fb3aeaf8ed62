// ページコンテキストの抽象化
//
// ハンドラはDOMへ直接触らず、このトレイト越しにページを読み書きする。
// 実ブラウザではdom::DomPage、テストでは記録型のモックを差し込む。

#[cfg(target_arch = "wasm32")]
pub mod dom;

/// トリガー要素のID。ページに存在する場合のみハンドラが束縛される。
pub const DELETE_BUTTON_ID: &str = "delete-btn";
pub const MODIFY_BUTTON_ID: &str = "modify-btn";
pub const CREATE_BUTTON_ID: &str = "create-btn";

/// フォーム入力要素のID
pub const ARTICLE_ID_FIELD: &str = "article-id";
pub const TITLE_FIELD: &str = "title";
pub const CONTENT_FIELD: &str = "content";

/// 修正対象の記事IDを運ぶURLクエリパラメータ名
pub const ID_QUERY_PARAM: &str = "id";

pub trait Page {
    /// 要素IDで入力値を取得する。要素が存在しない場合はNone。
    fn field_value(&self, element_id: &str) -> Option<String>;

    /// 現在のURLのクエリ文字列からパラメータを取得する（デコード済み）。
    fn query_param(&self, key: &str) -> Option<String>;

    /// ブロッキングな通知ダイアログを表示する。
    fn alert(&self, message: &str);

    /// 現在の履歴エントリを置き換えて遷移する。
    /// 戻るボタンで元のページには戻らない。
    fn replace_location(&self, url: &str);
}
