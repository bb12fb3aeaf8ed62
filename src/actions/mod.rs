// 記事操作ハンドラ
//
// delete / modify / create の3つの独立したクリックハンドラ。
// それぞれページから入力を読み、APIを1回だけ呼び、結末をアラートと
// 画面遷移としてページに反映する。ハンドラ間で共有する状態はない。

#[cfg(target_arch = "wasm32")]
pub mod bind;

use reqwest::StatusCode;

use crate::api::{ArticleBackend, ArticleDraft};
use crate::page::{ARTICLE_ID_FIELD, CONTENT_FIELD, ID_QUERY_PARAM, Page, TITLE_FIELD};
use crate::routing::{ARTICLE_LIST_PATH, article_path};

// ユーザー向け通知文（元のブログ画面の文言をそのまま使う）
pub const MSG_DELETE_SUCCESS: &str = "글이 삭제되었습니다.";
pub const MSG_DELETE_FAILURE: &str = "글 삭제에 실패했습니다.";
pub const MSG_INVALID_ID: &str = "유효한 ID가 아닙니다.";
pub const MSG_MODIFY_SUCCESS: &str = "수정이 완료되었습니다.";
pub const MSG_MODIFY_FAILURE: &str = "수정에 실패했습니다.";
pub const MSG_CREATE_SUCCESS: &str = "등록이 완료되었습니다.";
pub const MSG_CREATE_FAILURE: &str = "등록에 실패했습니다.";

/// ハンドラ1回分の結末。アラート文言と、成功時のみの遷移先。
#[derive(Debug, Clone, PartialEq)]
pub struct Completion {
    pub message: &'static str,
    pub redirect: Option<String>,
}

impl Completion {
    fn success(message: &'static str, redirect: String) -> Self {
        Self {
            message,
            redirect: Some(redirect),
        }
    }

    fn failure(message: &'static str) -> Self {
        Self {
            message,
            redirect: None,
        }
    }
}

/// 結末をページに反映する。アラートを出してから遷移する。
fn apply<P: Page>(page: &P, completion: Completion) {
    page.alert(completion.message);

    if let Some(url) = completion.redirect {
        page.replace_location(&url);
    }
}

/// 空でない記事IDだけを通す。
fn require_id(id: Option<String>) -> Result<String, Completion> {
    match id {
        Some(id) if !id.is_empty() => Ok(id),
        _ => Err(Completion::failure(MSG_INVALID_ID)),
    }
}

/// フォームからタイトルと本文を読み取る。要素がなければ空文字列。
fn read_draft<P: Page>(page: &P) -> ArticleDraft {
    ArticleDraft::new(
        page.field_value(TITLE_FIELD).unwrap_or_default(),
        page.field_value(CONTENT_FIELD).unwrap_or_default(),
    )
}

/// DELETEの応答から結末を決める。2xxのみ成功。
fn decide_delete(result: Result<StatusCode, String>) -> Completion {
    match result {
        Ok(status) if status.is_success() => {
            Completion::success(MSG_DELETE_SUCCESS, ARTICLE_LIST_PATH.to_string())
        }
        Ok(status) => {
            log::warn!("Delete rejected by server: {}", status);
            Completion::failure(MSG_DELETE_FAILURE)
        }
        Err(e) => {
            log::error!("Delete request failed: {}", e);
            Completion::failure(MSG_DELETE_FAILURE)
        }
    }
}

/// PUTの応答から結末を決める。
/// レスポンスが返ればステータスを見ずに完了扱いにする（現行画面の挙動）。
/// 転送エラーのみ失敗として通知する。
fn decide_modify(id: &str, result: Result<StatusCode, String>) -> Completion {
    match result {
        Ok(_) => Completion::success(MSG_MODIFY_SUCCESS, article_path(id)),
        Err(e) => {
            log::error!("Modify request failed: {}", e);
            Completion::failure(MSG_MODIFY_FAILURE)
        }
    }
}

/// POSTの応答から結末を決める。2xxのみ成功。
fn decide_create(result: Result<StatusCode, String>) -> Completion {
    match result {
        Ok(status) if status.is_success() => {
            Completion::success(MSG_CREATE_SUCCESS, ARTICLE_LIST_PATH.to_string())
        }
        Ok(status) => {
            log::warn!("Create rejected by server: {}", status);
            Completion::failure(MSG_CREATE_FAILURE)
        }
        Err(e) => {
            log::error!("Create request failed: {}", e);
            Completion::failure(MSG_CREATE_FAILURE)
        }
    }
}

/// 削除ボタンのハンドラ。IDはarticle-idフィールドから読む。
pub async fn handle_delete<P: Page, B: ArticleBackend>(page: &P, backend: &B) {
    let id = match require_id(page.field_value(ARTICLE_ID_FIELD)) {
        Ok(id) => id,
        Err(completion) => {
            // IDが無効な場合はリクエストを発行せずに通知だけ出す
            apply(page, completion);
            return;
        }
    };

    let completion = decide_delete(backend.delete_article(&id).await);
    apply(page, completion);
}

/// 修正ボタンのハンドラ。IDはフォームではなくURLの?idから読む。
pub async fn handle_modify<P: Page, B: ArticleBackend>(page: &P, backend: &B) {
    let id = match require_id(page.query_param(ID_QUERY_PARAM)) {
        Ok(id) => id,
        Err(completion) => {
            apply(page, completion);
            return;
        }
    };

    let draft = read_draft(page);
    let completion = decide_modify(&id, backend.update_article(&id, &draft).await);
    apply(page, completion);
}

/// 登録ボタンのハンドラ。
pub async fn handle_create<P: Page, B: ArticleBackend>(page: &P, backend: &B) {
    let draft = read_draft(page);
    let completion = decide_create(backend.create_article(&draft).await);
    apply(page, completion);
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::cell::RefCell;
    use std::collections::HashMap;

    /// アラートと遷移を記録するモックページ
    #[derive(Default)]
    struct MockPage {
        fields: HashMap<String, String>,
        params: HashMap<String, String>,
        alerts: RefCell<Vec<String>>,
        navigations: RefCell<Vec<String>>,
    }

    impl MockPage {
        fn with_field(mut self, id: &str, value: &str) -> Self {
            self.fields.insert(id.to_string(), value.to_string());
            self
        }

        fn with_param(mut self, key: &str, value: &str) -> Self {
            self.params.insert(key.to_string(), value.to_string());
            self
        }
    }

    impl Page for MockPage {
        fn field_value(&self, element_id: &str) -> Option<String> {
            self.fields.get(element_id).cloned()
        }

        fn query_param(&self, key: &str) -> Option<String> {
            self.params.get(key).cloned()
        }

        fn alert(&self, message: &str) {
            self.alerts.borrow_mut().push(message.to_string());
        }

        fn replace_location(&self, url: &str) {
            self.navigations.borrow_mut().push(url.to_string());
        }
    }

    /// 発行されたリクエストを記録し、決められた応答を返すモックバックエンド
    struct MockBackend {
        response: Result<StatusCode, String>,
        requests: RefCell<Vec<String>>,
    }

    impl MockBackend {
        fn responding(status: u16) -> Self {
            Self {
                response: Ok(StatusCode::from_u16(status).unwrap()),
                requests: RefCell::new(Vec::new()),
            }
        }

        fn transport_error(detail: &str) -> Self {
            Self {
                response: Err(detail.to_string()),
                requests: RefCell::new(Vec::new()),
            }
        }

        fn request_count(&self) -> usize {
            self.requests.borrow().len()
        }
    }

    #[async_trait(?Send)]
    impl ArticleBackend for MockBackend {
        async fn delete_article(&self, id: &str) -> Result<StatusCode, String> {
            self.requests
                .borrow_mut()
                .push(format!("DELETE /api/articles/{}", id));
            self.response.clone()
        }

        async fn update_article(
            &self,
            id: &str,
            draft: &ArticleDraft,
        ) -> Result<StatusCode, String> {
            self.requests.borrow_mut().push(format!(
                "PUT /api/articles/{} {}",
                id,
                serde_json::to_string(draft).unwrap()
            ));
            self.response.clone()
        }

        async fn create_article(&self, draft: &ArticleDraft) -> Result<StatusCode, String> {
            self.requests.borrow_mut().push(format!(
                "POST /api/articles {}",
                serde_json::to_string(draft).unwrap()
            ));
            self.response.clone()
        }
    }

    // ---- delete ----

    #[test]
    fn delete_success_navigates_to_list() {
        crate::init_logger();

        let page = MockPage::default().with_field(ARTICLE_ID_FIELD, "42");
        let backend = MockBackend::responding(200);

        pollster::block_on(handle_delete(&page, &backend));

        assert_eq!(
            backend.requests.borrow().as_slice(),
            ["DELETE /api/articles/42"]
        );
        assert_eq!(page.alerts.borrow().as_slice(), [MSG_DELETE_SUCCESS]);
        assert_eq!(page.navigations.borrow().as_slice(), ["/articles"]);
    }

    #[test]
    fn delete_not_found_alerts_without_navigation() {
        let page = MockPage::default().with_field(ARTICLE_ID_FIELD, "42");
        let backend = MockBackend::responding(404);

        pollster::block_on(handle_delete(&page, &backend));

        assert_eq!(backend.request_count(), 1);
        assert_eq!(page.alerts.borrow().as_slice(), [MSG_DELETE_FAILURE]);
        assert!(page.navigations.borrow().is_empty());
    }

    #[test]
    fn delete_empty_id_issues_no_request() {
        let page = MockPage::default().with_field(ARTICLE_ID_FIELD, "");
        let backend = MockBackend::responding(200);

        pollster::block_on(handle_delete(&page, &backend));

        assert_eq!(backend.request_count(), 0);
        assert_eq!(page.alerts.borrow().as_slice(), [MSG_INVALID_ID]);
        assert!(page.navigations.borrow().is_empty());
    }

    #[test]
    fn delete_missing_field_issues_no_request() {
        // article-id要素自体が存在しないページ
        let page = MockPage::default();
        let backend = MockBackend::responding(200);

        pollster::block_on(handle_delete(&page, &backend));

        assert_eq!(backend.request_count(), 0);
        assert_eq!(page.alerts.borrow().as_slice(), [MSG_INVALID_ID]);
    }

    #[test]
    fn delete_transport_error_alerts_failure() {
        let page = MockPage::default().with_field(ARTICLE_ID_FIELD, "42");
        let backend = MockBackend::transport_error("connection refused");

        pollster::block_on(handle_delete(&page, &backend));

        assert_eq!(backend.request_count(), 1);
        assert_eq!(page.alerts.borrow().as_slice(), [MSG_DELETE_FAILURE]);
        assert!(page.navigations.borrow().is_empty());
    }

    // ---- modify ----

    #[test]
    fn modify_puts_draft_and_navigates_to_article() {
        let page = MockPage::default()
            .with_param(ID_QUERY_PARAM, "7")
            .with_field(TITLE_FIELD, "새 제목")
            .with_field(CONTENT_FIELD, "새 내용");
        let backend = MockBackend::responding(200);

        pollster::block_on(handle_modify(&page, &backend));

        assert_eq!(
            backend.requests.borrow().as_slice(),
            [r#"PUT /api/articles/7 {"title":"새 제목","content":"새 내용"}"#]
        );
        assert_eq!(page.alerts.borrow().as_slice(), [MSG_MODIFY_SUCCESS]);
        assert_eq!(page.navigations.borrow().as_slice(), ["/articles/7"]);
    }

    #[test]
    fn modify_treats_any_resolved_response_as_completion() {
        // レスポンスが返ればステータスに関係なく完了扱い（現行画面の挙動）
        let page = MockPage::default()
            .with_param(ID_QUERY_PARAM, "7")
            .with_field(TITLE_FIELD, "t")
            .with_field(CONTENT_FIELD, "c");
        let backend = MockBackend::responding(500);

        pollster::block_on(handle_modify(&page, &backend));

        assert_eq!(page.alerts.borrow().as_slice(), [MSG_MODIFY_SUCCESS]);
        assert_eq!(page.navigations.borrow().as_slice(), ["/articles/7"]);
    }

    #[test]
    fn modify_transport_error_alerts_failure() {
        let page = MockPage::default()
            .with_param(ID_QUERY_PARAM, "7")
            .with_field(TITLE_FIELD, "t")
            .with_field(CONTENT_FIELD, "c");
        let backend = MockBackend::transport_error("dns error");

        pollster::block_on(handle_modify(&page, &backend));

        assert_eq!(backend.request_count(), 1);
        assert_eq!(page.alerts.borrow().as_slice(), [MSG_MODIFY_FAILURE]);
        assert!(page.navigations.borrow().is_empty());
    }

    #[test]
    fn modify_without_id_param_issues_no_request() {
        let page = MockPage::default()
            .with_field(TITLE_FIELD, "t")
            .with_field(CONTENT_FIELD, "c");
        let backend = MockBackend::responding(200);

        pollster::block_on(handle_modify(&page, &backend));

        assert_eq!(backend.request_count(), 0);
        assert_eq!(page.alerts.borrow().as_slice(), [MSG_INVALID_ID]);
        assert!(page.navigations.borrow().is_empty());
    }

    // ---- create ----

    #[test]
    fn create_success_navigates_to_list() {
        let page = MockPage::default()
            .with_field(TITLE_FIELD, "첫 글")
            .with_field(CONTENT_FIELD, "본문");
        // 作成成功時のサーバー応答は201 Created
        let backend = MockBackend::responding(201);

        pollster::block_on(handle_create(&page, &backend));

        assert_eq!(
            backend.requests.borrow().as_slice(),
            [r#"POST /api/articles {"title":"첫 글","content":"본문"}"#]
        );
        assert_eq!(page.alerts.borrow().as_slice(), [MSG_CREATE_SUCCESS]);
        assert_eq!(page.navigations.borrow().as_slice(), ["/articles"]);
    }

    #[test]
    fn create_failure_status_alerts_without_navigation() {
        let page = MockPage::default()
            .with_field(TITLE_FIELD, "t")
            .with_field(CONTENT_FIELD, "c");
        let backend = MockBackend::responding(400);

        pollster::block_on(handle_create(&page, &backend));

        assert_eq!(page.alerts.borrow().as_slice(), [MSG_CREATE_FAILURE]);
        assert!(page.navigations.borrow().is_empty());
    }

    #[test]
    fn create_transport_error_alerts_failure() {
        let page = MockPage::default()
            .with_field(TITLE_FIELD, "t")
            .with_field(CONTENT_FIELD, "c");
        let backend = MockBackend::transport_error("connection reset");

        pollster::block_on(handle_create(&page, &backend));

        assert_eq!(page.alerts.borrow().as_slice(), [MSG_CREATE_FAILURE]);
        assert!(page.navigations.borrow().is_empty());
    }

    #[test]
    fn create_missing_fields_sends_empty_strings() {
        // title/content要素がないページでは空文字列を送る
        let page = MockPage::default();
        let backend = MockBackend::responding(201);

        pollster::block_on(handle_create(&page, &backend));

        assert_eq!(
            backend.requests.borrow().as_slice(),
            [r#"POST /api/articles {"title":"","content":""}"#]
        );
    }
}
