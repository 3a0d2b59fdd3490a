//! Modal dialog shell for quick create / quick edit
//!
//! The shell is a single fixed-id overlay appended to `<body>`. Opening a
//! dialog while one is up replaces it. The form rendered inside is produced
//! and saved server-side; this module only presents it.

use crate::dom;
use crate::error::AdminError;

const DIALOG_ID: &str = "admin-dialog";

/// Open the dialog shell with server-rendered form markup as its body.
pub fn open(html: &str) -> Result<(), AdminError> {
    let body = shell("admin-dialog")?;
    body.set_inner_html(html);
    Ok(())
}

/// Open the dialog shell in an error state (no retry offered).
pub fn open_error(message: &str) -> Result<(), AdminError> {
    let body = shell("admin-dialog admin-dialog-error")?;
    body.set_text_content(Some(message));
    Ok(())
}

/// Remove the dialog from the document, if present.
pub fn close() {
    if let Ok(existing) = dom::element_by_id(DIALOG_ID) {
        existing.remove();
    }
}

/// (Re)create the overlay and return its body element.
fn shell(class: &str) -> Result<web_sys::Element, AdminError> {
    close();
    let document = dom::document()?;
    let overlay = document
        .create_element("div")
        .map_err(|_| AdminError::MissingNode("dialog overlay".to_string()))?;
    overlay.set_id(DIALOG_ID);
    overlay.set_class_name(class);

    let body = document
        .create_element("div")
        .map_err(|_| AdminError::MissingNode("dialog body".to_string()))?;
    body.set_class_name("admin-dialog-body");
    overlay
        .append_child(&body)
        .map_err(|_| AdminError::MissingNode("dialog body".to_string()))?;

    let page_body = document
        .body()
        .ok_or_else(|| AdminError::MissingNode("body".to_string()))?;
    page_body
        .append_child(&overlay)
        .map_err(|_| AdminError::MissingNode("body".to_string()))?;
    Ok(body)
}
