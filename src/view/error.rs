use maud::html;

use super::document;
use crate::server::error_pages::ErrorDescriptor;

/// Render the error page for a descriptor.
pub fn render_error(error: &ErrorDescriptor) -> String {
    let body = html! {
        h1 { (error.message) }
        p { (error.description) }
        p.muted { "Error code: " (error.code) }
        p { a href="/" { "Back to diagnostics" } }
    };
    document(&error.message, body).into_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_known() {
        let html = render_error(&ErrorDescriptor::for_code(503));
        assert!(html.contains("<h1>503 Service Unavailable</h1>"));
        assert!(html.contains("temporarily unavailable"));
        assert!(html.contains("Error code: 503"));
    }

    #[test]
    fn test_render_unknown() {
        let html = render_error(&ErrorDescriptor::for_code(799));
        assert!(html.contains("799 Unknown Error"));
        assert!(html.contains("An unspecified error has occurred."));
    }
}
