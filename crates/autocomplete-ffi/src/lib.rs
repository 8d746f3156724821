// FFI functions are inherently unsafe: callers must ensure pointer validity.
// Safety contracts are documented per-function in the public API comments.
#![allow(clippy::missing_safety_doc)]

// autocomplete-ffi: C-compatible FFI layer for Autocompleter.
//
// This crate exposes a stable C ABI that can be consumed by any language
// with C FFI support (Python/ctypes, C#/P-Invoke, etc.).
//
// Memory management rules:
// - Opaque `Autocompleter` pointer: created by `ac_new`, freed by `ac_free`.
// - Returned strings: caller must free with `ac_free_str`.
// - Returned string arrays: caller must free with `ac_free_str_array`.
// - All input strings are UTF-8 encoded, null-terminated C strings.
// - Vocabulary words containing an interior NUL byte cannot be represented
//   as C strings and are left out of returned arrays.

use std::ffi::{CStr, CString, c_char, c_int};
use std::ptr;
use std::slice;

use autocomplete_engine::Autocompleter;

// ── Handle lifecycle ─────────────────────────────────────────────

/// Create a new autocompleter from word list data (UTF-8, one word per line).
///
/// `data` may be NULL only if `len` is 0, which yields an empty vocabulary.
///
/// Returns an opaque pointer on success, NULL on failure.
/// On failure, if `error_out` is non-NULL, it receives a heap-allocated error string
/// that the caller must free with `ac_free_str`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn ac_new(
    data: *const u8,
    len: usize,
    error_out: *mut *mut c_char,
) -> *mut Autocompleter {
    let bytes: &[u8] = if len == 0 {
        &[]
    } else if data.is_null() {
        set_error(error_out, "data is null");
        return ptr::null_mut();
    } else {
        unsafe { slice::from_raw_parts(data, len) }
    };

    match Autocompleter::from_bytes(bytes) {
        Ok(handle) => Box::into_raw(Box::new(handle)),
        Err(e) => {
            set_error(error_out, &e.to_string());
            ptr::null_mut()
        }
    }
}

/// Free an autocompleter created by `ac_new`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn ac_free(handle: *mut Autocompleter) {
    if !handle.is_null() {
        drop(unsafe { Box::from_raw(handle) });
    }
}

// ── Queries ─────────────────────────────────────────────────────

/// Check whether a word is in the vocabulary.
/// Returns 1 if present, 0 if not, -1 on error.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn ac_contains(handle: *const Autocompleter, word: *const c_char) -> c_int {
    let Some(handle) = (unsafe { handle.as_ref() }) else {
        return -1;
    };
    let Some(word) = cstr_to_str(word) else {
        return -1;
    };
    if handle.contains(word) { 1 } else { 0 }
}

/// Generate suggestions for a prefix.
///
/// Returns a NULL-terminated array of C strings. Caller must free with
/// `ac_free_str_array`. Returns NULL on error.
///
/// Words containing an interior NUL byte are omitted from the array.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn ac_suggest(
    handle: *const Autocompleter,
    prefix: *const c_char,
) -> *mut *mut c_char {
    let Some(handle) = (unsafe { handle.as_ref() }) else {
        return ptr::null_mut();
    };
    let Some(prefix) = cstr_to_str(prefix) else {
        return ptr::null_mut();
    };
    strings_to_c_array(&handle.suggest(prefix))
}

/// Generate suggestions for the last whitespace-delimited token of `text`.
///
/// Same ownership rules as `ac_suggest`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn ac_suggest_for_text(
    handle: *const Autocompleter,
    text: *const c_char,
) -> *mut *mut c_char {
    let Some(handle) = (unsafe { handle.as_ref() }) else {
        return ptr::null_mut();
    };
    let Some(text) = cstr_to_str(text) else {
        return ptr::null_mut();
    };
    strings_to_c_array(&handle.suggest_for_text(text))
}

/// Replace the last token of `text` with `suggestion`.
///
/// Returns a heap-allocated string (free with `ac_free_str`), or NULL on
/// error. If `cursor_out` is non-NULL it receives the cursor position in
/// characters (the end of the returned text).
#[unsafe(no_mangle)]
pub unsafe extern "C" fn ac_apply_suggestion(
    text: *const c_char,
    suggestion: *const c_char,
    cursor_out: *mut usize,
) -> *mut c_char {
    let (Some(text), Some(suggestion)) = (cstr_to_str(text), cstr_to_str(suggestion)) else {
        return ptr::null_mut();
    };
    let applied = autocomplete_core::apply_suggestion(text, suggestion);
    if !cursor_out.is_null() {
        unsafe { *cursor_out = applied.cursor };
    }
    str_to_c(&applied.text)
}

// ── Options ─────────────────────────────────────────────────────

/// Set how many closest words are returned when nothing matches the prefix.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn ac_set_max_corrections(handle: *mut Autocompleter, value: usize) {
    if let Some(handle) = unsafe { handle.as_mut() } {
        handle.set_max_corrections(value);
    }
}

/// Number of distinct vocabulary words, or 0 for a NULL handle.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn ac_size(handle: *const Autocompleter) -> usize {
    unsafe { handle.as_ref() }.map_or(0, Autocompleter::len)
}

// ── Memory management ───────────────────────────────────────────

/// Free a string returned by this library.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn ac_free_str(s: *mut c_char) {
    free_c_str(s);
}

/// Free a NULL-terminated array of C strings.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn ac_free_str_array(arr: *mut *mut c_char) {
    free_null_terminated_array(arr);
}

// ── Internal helpers ────────────────────────────────────────────

fn cstr_to_str<'a>(s: *const c_char) -> Option<&'a str> {
    if s.is_null() {
        return None;
    }
    unsafe { CStr::from_ptr(s) }.to_str().ok()
}

fn str_to_c(s: &str) -> *mut c_char {
    CString::new(s).unwrap_or_default().into_raw()
}

fn set_error(out: *mut *mut c_char, msg: &str) {
    if !out.is_null() {
        unsafe { *out = str_to_c(msg); }
    }
}

fn free_c_str(s: *mut c_char) {
    if !s.is_null() {
        drop(unsafe { CString::from_raw(s) });
    }
}

fn strings_to_c_array(strings: &[String]) -> *mut *mut c_char {
    let mut ptrs: Vec<*mut c_char> = strings
        .iter()
        .filter_map(|s| CString::new(s.as_str()).ok())
        .map(CString::into_raw)
        .collect();
    ptrs.push(ptr::null_mut()); // NULL terminator
    // Boxed slice: capacity == length, so the array can be rebuilt on free.
    Box::into_raw(ptrs.into_boxed_slice()).cast::<*mut c_char>()
}

fn free_null_terminated_array(arr: *mut *mut c_char) {
    if arr.is_null() {
        return;
    }
    let mut i = 0;
    loop {
        let p = unsafe { *arr.add(i) };
        if p.is_null() {
            break;
        }
        free_c_str(p);
        i += 1;
    }
    drop(unsafe { Box::from_raw(ptr::slice_from_raw_parts_mut(arr, i + 1)) });
}
