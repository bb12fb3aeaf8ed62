// トリガー要素へのクリックリスナー登録（WASM環境）
//
// 各ボタンはページに存在する場合のみ束縛される。リスナーはページの
// ライフタイムと同じだけ生きるため、Closureはforgetで手放す。
// クリックごとにハンドラのFutureをイベントループへspawnするだけで、
// 多重クリックの抑止は行わない。

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::MouseEvent;

use crate::api::ArticleApi;
use crate::page::dom::DomPage;
use crate::page::{CREATE_BUTTON_ID, DELETE_BUTTON_ID, MODIFY_BUTTON_ID};

use super::{handle_create, handle_delete, handle_modify};

/// ページ読み込み時に1回だけ呼び、存在するトリガーにだけリスナーを付ける。
pub fn bind_article_actions(page: &DomPage, api: ArticleApi) {
    // 削除ボタン
    if let Some(button) = page.document().get_element_by_id(DELETE_BUTTON_ID) {
        let page_clone = page.clone();
        let api_clone = api.clone();
        let closure = Closure::wrap(Box::new(move |event: MouseEvent| {
            event.prevent_default();

            let page = page_clone.clone();
            let api = api_clone.clone();
            spawn_local(async move {
                handle_delete(&page, &api).await;
            });
        }) as Box<dyn FnMut(_)>);
        button
            .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
            .ok();
        closure.forget();

        log::info!("Bound delete handler to #{}", DELETE_BUTTON_ID);
    }

    // 修正ボタン
    if let Some(button) = page.document().get_element_by_id(MODIFY_BUTTON_ID) {
        let page_clone = page.clone();
        let api_clone = api.clone();
        let closure = Closure::wrap(Box::new(move |_event: MouseEvent| {
            let page = page_clone.clone();
            let api = api_clone.clone();
            spawn_local(async move {
                handle_modify(&page, &api).await;
            });
        }) as Box<dyn FnMut(_)>);
        button
            .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
            .ok();
        closure.forget();

        log::info!("Bound modify handler to #{}", MODIFY_BUTTON_ID);
    }

    // 登録ボタン
    if let Some(button) = page.document().get_element_by_id(CREATE_BUTTON_ID) {
        let page_clone = page.clone();
        let api_clone = api.clone();
        let closure = Closure::wrap(Box::new(move |_event: MouseEvent| {
            let page = page_clone.clone();
            let api = api_clone.clone();
            spawn_local(async move {
                handle_create(&page, &api).await;
            });
        }) as Box<dyn FnMut(_)>);
        button
            .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
            .ok();
        closure.forget();

        log::info!("Bound create handler to #{}", CREATE_BUTTON_ID);
    }
}
