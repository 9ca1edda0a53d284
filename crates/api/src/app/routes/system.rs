use axum::Json;
use chrono::{SecondsFormat, Utc};

use crate::app::dto::{PongResponse, RootResponse};

fn now_iso() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        foo: "Bar",
        time: now_iso(),
    })
}

pub async fn ping() -> Json<PongResponse> {
    Json(PongResponse { pong: now_iso() })
}
