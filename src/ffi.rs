//! C-ABI FFI bindings for cross-language integration.
//!
//! This module provides a C-compatible API for using modoc from other
//! languages such as C#, Python, and Node.js. Functions take the document
//! JSON as a string; hosts typically already hold the payload in memory.

use std::ffi::{c_char, CStr, CString};
use std::ptr;

use crate::render::{HtmlOptions, JsonFormat, RenderOptions};
use crate::{parse_str, render};

/// Result structure returned by FFI functions.
#[repr(C)]
pub struct ModocResult {
    /// Whether the operation succeeded.
    pub success: bool,
    /// The result data (null if failed). Must be freed with `modoc_free_string`.
    pub data: *mut c_char,
    /// Error message (null if succeeded). Must be freed with `modoc_free_string`.
    pub error: *mut c_char,
}

impl ModocResult {
    fn success(data: String) -> Self {
        Self {
            success: true,
            data: CString::new(data).unwrap_or_default().into_raw(),
            error: ptr::null_mut(),
        }
    }

    fn error(message: String) -> Self {
        Self {
            success: false,
            data: ptr::null_mut(),
            error: CString::new(message).unwrap_or_default().into_raw(),
        }
    }
}

/// Render a modular document JSON string to HTML.
///
/// # Safety
///
/// The `json` must be a valid null-terminated UTF-8 string.
/// The returned result must be freed with `modoc_free_result`.
#[no_mangle]
pub unsafe extern "C" fn modoc_render_html(json: *const c_char) -> ModocResult {
    if json.is_null() {
        return ModocResult::error("Input cannot be null".to_string());
    }

    let input = match CStr::from_ptr(json).to_str() {
        Ok(s) => s,
        Err(_) => return ModocResult::error("Invalid UTF-8 input".to_string()),
    };

    match render_html_internal(input) {
        Ok(html) => ModocResult::success(html),
        Err(e) => ModocResult::error(e.to_string()),
    }
}

fn render_html_internal(input: &str) -> crate::Result<String> {
    let doc = parse_str(input)?;
    let tree = render::render_document(&doc, &RenderOptions::default());
    Ok(render::to_html(&tree, &HtmlOptions::default()))
}

/// Render a modular document JSON string to plain text.
///
/// # Safety
///
/// The `json` must be a valid null-terminated UTF-8 string.
/// The returned result must be freed with `modoc_free_result`.
#[no_mangle]
pub unsafe extern "C" fn modoc_render_text(json: *const c_char) -> ModocResult {
    if json.is_null() {
        return ModocResult::error("Input cannot be null".to_string());
    }

    let input = match CStr::from_ptr(json).to_str() {
        Ok(s) => s,
        Err(_) => return ModocResult::error("Invalid UTF-8 input".to_string()),
    };

    match render_text_internal(input) {
        Ok(text) => ModocResult::success(text),
        Err(e) => ModocResult::error(e.to_string()),
    }
}

fn render_text_internal(input: &str) -> crate::Result<String> {
    let doc = parse_str(input)?;
    let tree = render::render_document(&doc, &RenderOptions::default());
    Ok(render::to_text(&tree))
}

/// Render a modular document JSON string to its presentation tree as JSON.
///
/// # Safety
///
/// The `json` must be a valid null-terminated UTF-8 string.
/// The returned result must be freed with `modoc_free_result`.
#[no_mangle]
pub unsafe extern "C" fn modoc_render_tree(json: *const c_char, pretty: bool) -> ModocResult {
    if json.is_null() {
        return ModocResult::error("Input cannot be null".to_string());
    }

    let input = match CStr::from_ptr(json).to_str() {
        Ok(s) => s,
        Err(_) => return ModocResult::error("Invalid UTF-8 input".to_string()),
    };

    let format = if pretty {
        JsonFormat::Pretty
    } else {
        JsonFormat::Compact
    };

    match render_tree_internal(input, format) {
        Ok(tree) => ModocResult::success(tree),
        Err(e) => ModocResult::error(e.to_string()),
    }
}

fn render_tree_internal(input: &str, format: JsonFormat) -> crate::Result<String> {
    let doc = parse_str(input)?;
    let tree = render::render_document(&doc, &RenderOptions::default());
    render::to_json(&tree, format)
}

/// Get the number of blocks in a modular document JSON string.
///
/// # Safety
///
/// The `json` must be a valid null-terminated UTF-8 string.
/// Returns -1 on error.
#[no_mangle]
pub unsafe extern "C" fn modoc_block_count(json: *const c_char) -> i32 {
    if json.is_null() {
        return -1;
    }

    let input = match CStr::from_ptr(json).to_str() {
        Ok(s) => s,
        Err(_) => return -1,
    };

    match parse_str(input) {
        Ok(doc) => doc.block_count() as i32,
        Err(_) => -1,
    }
}

/// Free a result returned by any modoc function.
///
/// # Safety
///
/// The `result` must have been returned by a modoc function.
/// This function should only be called once per result.
#[no_mangle]
pub unsafe extern "C" fn modoc_free_result(result: ModocResult) {
    if !result.data.is_null() {
        drop(CString::from_raw(result.data));
    }
    if !result.error.is_null() {
        drop(CString::from_raw(result.error));
    }
}

/// Free a string allocated by modoc.
///
/// # Safety
///
/// The `ptr` must have been allocated by modoc.
/// This function should only be called once per pointer.
#[no_mangle]
pub unsafe extern "C" fn modoc_free_string(ptr: *mut c_char) {
    if !ptr.is_null() {
        drop(CString::from_raw(ptr));
    }
}

/// Get the version of the modoc library.
///
/// # Safety
///
/// The returned string is statically allocated and should not be freed.
#[no_mangle]
pub extern "C" fn modoc_version() -> *const c_char {
    static VERSION: &[u8] = concat!(env!("CARGO_PKG_VERSION"), "\0").as_bytes();
    VERSION.as_ptr() as *const c_char
}
