//! Browser front-end: static files from the web root, `index.html` for
//! everything else so client-side routes load the app.

use actix_files::{Files, NamedFile};
use actix_web::dev::{fn_service, ServiceRequest, ServiceResponse};
use std::path::Path;

/// Serve `static_dir` at `/`. Register after the API routes: it matches every path.
pub fn frontend(static_dir: impl AsRef<Path>) -> Files {
    let static_dir = static_dir.as_ref();
    let index = static_dir.join("index.html");
    Files::new("/", static_dir)
        .index_file("index.html")
        .default_handler(fn_service(move |req: ServiceRequest| {
            let index = index.clone();
            async move {
                let (req, _) = req.into_parts();
                let file = NamedFile::open_async(index).await?;
                let res = file.into_response(&req);
                Ok::<_, actix_web::Error>(ServiceResponse::new(req, res))
            }
        }))
}
