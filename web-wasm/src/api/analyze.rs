//! 解析エンドポイント連携
//!
//! 選択された全ファイルを `FormData` に詰めて1回だけPOSTする。
//! `AbortController` をタイマーで叩いてクライアント側タイムアウトにする。

use gloo::timers::callback::Timeout;
use statement_dash_common::{
    resolve, AnalysisOutcome, NetworkFailure, RawResponse, FILE_FIELD, WEB_ENDPOINT,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{AbortController, File, FileList, FormData, RequestInit, Response};

/// FileListをVecに変換
pub fn files_from_list(list: &FileList) -> Vec<File> {
    (0..list.length()).filter_map(|i| list.get(i)).collect()
}

/// 全ファイルを同じフィールド名で添付したフォームを作る
pub fn build_form_data(files: &[File]) -> Result<FormData, JsValue> {
    let form = FormData::new()?;
    for file in files {
        form.append_with_blob_and_filename(FILE_FIELD, file, &file.name())?;
    }
    Ok(form)
}

/// JSのエラー値からメッセージを取り出す
fn js_failure(value: JsValue) -> NetworkFailure {
    let message = value
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{:?}", value));
    NetworkFailure::Transport(message)
}

async fn send(init: &RequestInit) -> Result<RawResponse, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("window is not available"))?;

    let resp_value = JsFuture::from(window.fetch_with_str_and_init(WEB_ENDPOINT, init)).await?;
    let resp: Response = resp_value.dyn_into()?;

    let status = resp.status();
    let body = JsFuture::from(resp.text()?).await?;

    Ok(RawResponse {
        status,
        body: body.as_string().unwrap_or_default(),
    })
}

/// ファイルを送信して生レスポンスを得る
///
/// タイムアウトは本文の読み込みまで含む。
pub async fn post_statements(
    files: &[File],
    timeout_secs: u64,
) -> Result<RawResponse, NetworkFailure> {
    let form = build_form_data(files).map_err(js_failure)?;
    let controller = AbortController::new().map_err(js_failure)?;
    let signal = controller.signal();

    let init = RequestInit::new();
    init.set_method("POST");
    init.set_body(&form);
    init.set_signal(Some(&signal));

    let millis = u32::try_from(timeout_secs.saturating_mul(1000)).unwrap_or(u32::MAX);
    let abort_timer = Timeout::new(millis, move || controller.abort());

    let result = send(&init).await;
    drop(abort_timer);

    match result {
        Ok(raw) => Ok(raw),
        Err(_) if signal.aborted() => Err(NetworkFailure::Timeout { secs: timeout_secs }),
        Err(e) => Err(js_failure(e)),
    }
}

/// 送信して結果を判定する
pub async fn analyze_statements(files: &[File], timeout_secs: u64) -> AnalysisOutcome {
    resolve(post_statements(files, timeout_secs).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn pdf(name: &str) -> File {
        let parts = js_sys::Array::of1(&JsValue::from_str("%PDF-1.4"));
        File::new_with_str_sequence(&parts, name).unwrap()
    }

    #[wasm_bindgen_test]
    fn test_form_repeats_file_field() {
        let form = build_form_data(&[pdf("jan.pdf"), pdf("feb.pdf")]).unwrap();
        let parts = form.get_all(FILE_FIELD);
        assert_eq!(parts.length(), 2);

        let first: File = parts.get(0).dyn_into().unwrap();
        assert_eq!(first.name(), "jan.pdf");
    }

    #[wasm_bindgen_test]
    fn test_empty_form() {
        let form = build_form_data(&[]).unwrap();
        assert_eq!(form.get_all(FILE_FIELD).length(), 0);
    }

    #[wasm_bindgen_test]
    fn test_js_failure_message() {
        let failure = js_failure(js_sys::Error::new("Failed to fetch").into());
        assert_eq!(failure, NetworkFailure::Transport("Failed to fetch".into()));
    }
}
