//! 浏览器 HTTP 客户端
//!
//! 基于 `gloo-net` 实现核心库的 [`HttpClient`]，multipart 请求体使用原生 `FormData`。

use async_trait::async_trait;
use gloo_net::http::{Method, RequestBuilder};
use kos_admin::error::{AdminError, AdminResult};
use kos_admin::request::{
    HttpClient, HttpMethod, HttpRequest, HttpResponse, MultipartForm, PreviewHandle, RequestBody,
    UploadFile,
};
use wasm_bindgen::JsCast;
use web_sys::{File, FormData, HtmlInputElement, Url};

// =========================================================
// 上传文件 (web_sys::File)
// =========================================================

/// 用户从文件选择框中选取的文件
#[derive(Debug, Clone)]
pub struct BrowserFile(File);

impl BrowserFile {
    /// 读取 `<input type="file">` 当前选中的全部文件
    pub fn from_input(input: &HtmlInputElement) -> Vec<Self> {
        let Some(list) = input.files() else {
            return Vec::new();
        };
        (0..list.length())
            .filter_map(|i| list.get(i))
            .map(BrowserFile)
            .collect()
    }

    /// 从 change 事件中取出文件
    pub fn from_event(ev: &web_sys::Event) -> Vec<Self> {
        ev.target()
            .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
            .map(|input| Self::from_input(&input))
            .unwrap_or_default()
    }
}

impl UploadFile for BrowserFile {
    type Preview = ObjectUrl;

    fn file_name(&self) -> String {
        self.0.name()
    }

    fn mime_type(&self) -> String {
        self.0.type_()
    }

    fn size(&self) -> u64 {
        self.0.size() as u64
    }

    fn create_preview(&self) -> Option<ObjectUrl> {
        match Url::create_object_url_with_blob(&self.0) {
            Ok(url) => Some(ObjectUrl { url }),
            Err(e) => {
                log_warn!("[Http] Could not create preview for {}: {:?}", self.0.name(), e);
                None
            }
        }
    }
}

/// `blob:` 预览地址，drop 时自动 revoke
#[derive(Debug)]
pub struct ObjectUrl {
    url: String,
}

impl PreviewHandle for ObjectUrl {
    fn url(&self) -> &str {
        &self.url
    }
}

impl Drop for ObjectUrl {
    fn drop(&mut self) {
        let _ = Url::revoke_object_url(&self.url);
    }
}

// =========================================================
// HTTP 客户端
// =========================================================

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserHttpClient;

fn to_method(method: HttpMethod) -> Method {
    match method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
        HttpMethod::Put => Method::PUT,
        HttpMethod::Delete => Method::DELETE,
    }
}

fn to_form_data(form: &MultipartForm<BrowserFile>) -> AdminResult<FormData> {
    let data = FormData::new()
        .map_err(|e| AdminError::serialization(format!("Failed to create FormData: {:?}", e)))?;

    for (name, value) in &form.fields {
        data.append_with_str(name, value)
            .map_err(|e| AdminError::serialization(format!("Failed to append {}: {:?}", name, e)))?;
    }
    for (name, file) in &form.files {
        data.append_with_blob_and_filename(name, &file.0, &file.0.name())
            .map_err(|e| AdminError::serialization(format!("Failed to append {}: {:?}", name, e)))?;
    }
    Ok(data)
}

#[async_trait(?Send)]
impl HttpClient for BrowserHttpClient {
    type File = BrowserFile;

    async fn send(&self, req: HttpRequest<BrowserFile>) -> AdminResult<HttpResponse> {
        let mut builder = RequestBuilder::new(&req.url).method(to_method(req.method));
        for (key, value) in &req.headers {
            builder = builder.header(key, value);
        }

        // multipart 不设置 Content-Type，由浏览器生成 boundary
        let request = match &req.body {
            RequestBody::Empty => builder.build(),
            RequestBody::Json(body) => builder.body(body.as_str()),
            RequestBody::Multipart(form) => builder.body(to_form_data(form)?),
        }
        .map_err(|e| AdminError::network(format!("Failed to build request: {}", e)))?;

        let response = request
            .send()
            .await
            .map_err(|e| AdminError::network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| AdminError::malformed(format!("Failed to read response: {}", e)))?;

        Ok(HttpResponse { status, body })
    }
}
