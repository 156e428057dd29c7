use actix_web::{http::header, web, HttpResponse};
use futures::Stream;
use serde::Serialize;

/// One Server-Sent Events frame carrying `value` as JSON.
pub fn sse_event<T: Serialize>(value: &T) -> Result<web::Bytes, actix_web::Error> {
    let json = serde_json::to_string(value)?;
    Ok(web::Bytes::from(format!("data: {}\n\n", json)))
}

pub fn sse_response<S>(stream: S) -> HttpResponse
where
    S: Stream<Item = Result<web::Bytes, actix_web::Error>> + 'static,
{
    HttpResponse::Ok()
        .insert_header((header::CONTENT_TYPE, "text/event-stream"))
        .insert_header((header::CACHE_CONTROL, "no-cache"))
        .streaming(stream)
}
