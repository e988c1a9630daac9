//! The compute bridge: fetch the module's bytes, instantiate them, and
//! invoke the single numeric export.

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use crate::ui_model::{BridgeError, EXPORT_NAME, MODULE_URL};

/// One full round trip for one submission. No caching: every call
/// re-fetches and re-instantiates the module.
pub(super) async fn load_and_invoke(input: i32) -> Result<f64, BridgeError> {
    let bytes = fetch_module_bytes(MODULE_URL)
        .await
        .map_err(BridgeError::ModuleLoad)?;
    let instance = instantiate(&bytes).await.map_err(BridgeError::ModuleLoad)?;
    invoke_export(&instance, EXPORT_NAME, input).map_err(BridgeError::ExportInvocation)
}

async fn fetch_module_bytes(url: &str) -> Result<Vec<u8>, String> {
    let window = web_sys::window().ok_or("no window".to_string())?;

    let resp = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|_| "fetch: request failed".to_string())?;
    let resp: web_sys::Response = resp
        .dyn_into()
        .map_err(|_| "fetch: expected Response".to_string())?;
    if !resp.ok() {
        return Err(format!("fetch: http {}", resp.status()));
    }

    let promise = resp
        .array_buffer()
        .map_err(|_| "fetch: array_buffer() threw".to_string())?;
    let buf = JsFuture::from(promise)
        .await
        .map_err(|_| "fetch: body read failed".to_string())?;
    let buf = buf
        .dyn_into::<js_sys::ArrayBuffer>()
        .map_err(|_| "fetch: expected ArrayBuffer".to_string())?;

    let arr = js_sys::Uint8Array::new(&buf);
    let mut out = vec![0u8; arr.length() as usize];
    arr.copy_to(&mut out);
    Ok(out)
}

async fn instantiate(bytes: &[u8]) -> Result<js_sys::WebAssembly::Instance, String> {
    // The module is built without bindgen glue, so no imports are needed.
    let imports = js_sys::Object::new();
    let promise = js_sys::WebAssembly::instantiate_buffer(bytes, &imports);

    let result = JsFuture::from(promise)
        .await
        .map_err(|_| "instantiate: rejected".to_string())?;
    let instance = js_sys::Reflect::get(&result, &JsValue::from_str("instance"))
        .map_err(|_| "instantiate: missing instance".to_string())?;
    instance
        .dyn_into::<js_sys::WebAssembly::Instance>()
        .map_err(|_| "instantiate: expected Instance".to_string())
}

fn invoke_export(
    instance: &js_sys::WebAssembly::Instance,
    name: &str,
    arg: i32,
) -> Result<f64, String> {
    let exports = instance.exports();

    let export = js_sys::Reflect::get(&exports, &JsValue::from_str(name))
        .map_err(|_| format!("{name}: lookup threw"))?;
    let func = export
        .dyn_into::<js_sys::Function>()
        .map_err(|_| format!("{name}: missing or not a function"))?;

    let ret = func
        .call1(&JsValue::UNDEFINED, &JsValue::from(arg))
        .map_err(|_| format!("{name}: call threw"))?;
    ret.as_f64().ok_or_else(|| format!("{name}: non-numeric return"))
}
