// 記事リソースのREST APIクライアント

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Serialize;

/// 記事APIのコレクションエンドポイント
pub const ARTICLES_ENDPOINT: &str = "/api/articles";

/// 作成・修正リクエストのボディ。
/// {"title": ..., "content": ...} の形でシリアライズされる。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArticleDraft {
    pub title: String,
    pub content: String,
}

impl ArticleDraft {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }
}

/// コレクションURL（POST先）
pub fn collection_url(base_url: &str) -> String {
    format!("{}{}", base_url, ARTICLES_ENDPOINT)
}

/// 個別記事URL（PUT/DELETE先）
pub fn resource_url(base_url: &str, id: &str) -> String {
    format!("{}{}/{}", base_url, ARTICLES_ENDPOINT, id)
}

/// ハンドラとHTTP転送の間の継ぎ目。
///
/// Ok(ステータス) はレスポンスが返ってきたこと、Errは転送自体の失敗
/// （レスポンスが存在しない）を表す。成功・失敗の解釈は呼び出し側が行う。
/// WASMのFutureはSendではないため ?Send。
#[async_trait(?Send)]
pub trait ArticleBackend {
    async fn delete_article(&self, id: &str) -> Result<StatusCode, String>;
    async fn update_article(&self, id: &str, draft: &ArticleDraft) -> Result<StatusCode, String>;
    async fn create_article(&self, draft: &ArticleDraft) -> Result<StatusCode, String>;
}

/// reqwestによる実装。WASMではブラウザのfetchが下回りになる。
/// リトライもタイムアウトも持たない。1クリック1リクエスト。
#[derive(Debug, Clone)]
pub struct ArticleApi {
    client: reqwest::Client,
    base_url: String,
}

impl ArticleApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait(?Send)]
impl ArticleBackend for ArticleApi {
    async fn delete_article(&self, id: &str) -> Result<StatusCode, String> {
        let url = resource_url(&self.base_url, id);
        log::info!("DELETE {}", url);

        let response = self
            .client
            .delete(&url)
            .send()
            .await
            .map_err(|e| e.to_string())?;

        Ok(response.status())
    }

    async fn update_article(&self, id: &str, draft: &ArticleDraft) -> Result<StatusCode, String> {
        let url = resource_url(&self.base_url, id);
        log::info!("PUT {}", url);

        // .json()がContent-Type: application/jsonを設定する
        let response = self
            .client
            .put(&url)
            .json(draft)
            .send()
            .await
            .map_err(|e| e.to_string())?;

        Ok(response.status())
    }

    async fn create_article(&self, draft: &ArticleDraft) -> Result<StatusCode, String> {
        let url = collection_url(&self.base_url);
        log::info!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .json(draft)
            .send()
            .await
            .map_err(|e| e.to_string())?;

        Ok(response.status())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collection_url() {
        assert_eq!(
            collection_url("http://localhost:8080"),
            "http://localhost:8080/api/articles"
        );
    }

    #[test]
    fn test_resource_url() {
        assert_eq!(
            resource_url("http://localhost:8080", "42"),
            "http://localhost:8080/api/articles/42"
        );
    }

    #[test]
    fn test_draft_serializes_to_title_and_content() {
        let draft = ArticleDraft::new("제목", "내용");
        let json = serde_json::to_value(&draft).unwrap();

        assert_eq!(
            json,
            serde_json::json!({"title": "제목", "content": "내용"})
        );
    }

    #[test]
    fn test_api_keeps_base_url() {
        let api = ArticleApi::new("http://localhost:8080");
        assert_eq!(api.base_url(), "http://localhost:8080");
    }
}
