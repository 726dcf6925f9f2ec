use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use tera::{Context, Tera};
use tracing::error;

pub struct Templates {
    tera: Tera,
}

impl Templates {
    pub fn new() -> Result<Self, tera::Error> {
        let mut tera = Tera::default();
        tera.add_raw_templates(vec![
            ("base.html", include_str!("../../templates/base.html")),
            ("history.html", include_str!("../../templates/history.html")),
            ("index.html", include_str!("../../templates/index.html")),
            ("station.html", include_str!("../../templates/station.html")),
            ("error.html", include_str!("../../templates/error.html")),
        ])?;

        Ok(Templates { tera })
    }

    pub fn render(&self, name: &str, context: &Context) -> Result<String, tera::Error> {
        self.tera.render(name, context)
    }

    /// Renders `name`, falling back to the 500 error page if rendering fails.
    pub fn page(&self, name: &str, context: &Context) -> Response {
        match self.render(name, context) {
            Ok(html) => Html(html).into_response(),
            Err(e) => {
                error!("Failed to render {}: {:?}", name, e);
                self.error_page(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        }
    }

    pub fn error_page(&self, code: StatusCode, message: &str) -> Response {
        let mut context = Context::new();
        context.insert("error_message", message);
        context.insert("status_code", &code.as_u16());

        match self.render("error.html", &context) {
            Ok(html) => (code, Html(html)).into_response(),
            Err(e) => {
                error!("Failed to render error page: {:?}", e);
                (code, message.to_string()).into_response()
            }
        }
    }
}
