//! Backend endpoints: response classification (pure, host-testable) and
//! the fetch/POST wrappers the controllers call from `spawn_local`.

use crate::error::{ApiError, Result};
use crate::model::{LiveMatch, PredictionRecord, SubmittedPrediction};
use serde::Deserialize;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response};

pub const PREDICT_TODAY_URL: &str = "/api/predict-today";
pub const LIVE_SCORES_URL: &str = "/api/live-scores";
pub const SAVE_PREDICTION_URL: &str = "/api/save-prediction";

#[derive(Debug, Deserialize)]
struct PredictionsResponse {
    status: String,
    #[serde(default)]
    predictions: Vec<PredictionRecord>,
}

// The live-scores route can answer `{matches: [...]}`, or an error object,
// or both at once (an error with an empty matches list). An `error` field
// always wins.
#[derive(Debug, Deserialize)]
struct LiveScoresResponse {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    matches: Vec<LiveMatch>,
}

#[derive(Debug, Deserialize)]
struct SaveAck {
    status: String,
    #[serde(default)]
    message: Option<String>,
}

/// A predictions response after the HTTP layer succeeded: either cards to
/// render or the informational empty state. An empty list and a
/// non-success `status` field are both the empty state, not errors.
#[derive(Clone, Debug, PartialEq)]
pub enum TodayPredictions {
    Ready(Vec<PredictionRecord>),
    Empty,
}

pub fn parse_predictions(body: &str) -> Result<TodayPredictions> {
    let resp: PredictionsResponse =
        serde_json::from_str(body).map_err(|e| ApiError::Malformed(e.to_string()))?;
    if resp.status == "success" && !resp.predictions.is_empty() {
        Ok(TodayPredictions::Ready(resp.predictions))
    } else {
        Ok(TodayPredictions::Empty)
    }
}

pub fn parse_live_scores(body: &str) -> Result<Vec<LiveMatch>> {
    let resp: LiveScoresResponse =
        serde_json::from_str(body).map_err(|e| ApiError::Malformed(e.to_string()))?;
    if let Some(error) = resp.error {
        return Err(ApiError::Api(resp.message.unwrap_or(error)));
    }
    Ok(resp.matches)
}

pub fn parse_save_ack(body: &str) -> Result<()> {
    let ack: SaveAck =
        serde_json::from_str(body).map_err(|e| ApiError::Malformed(e.to_string()))?;
    if ack.status == "success" {
        Ok(())
    } else {
        Err(ApiError::Api(
            ack.message.unwrap_or_else(|| "save rejected".to_string()),
        ))
    }
}

// ---------------- Fetch layer -----------------

struct FetchedBody {
    ok: bool,
    status: u16,
    text: String,
}

fn js_network_error(value: JsValue) -> ApiError {
    let message = value.as_string().unwrap_or_else(|| format!("{value:?}"));
    ApiError::Network(message)
}

async fn response_body(resp_value: JsValue) -> Result<FetchedBody> {
    let resp: Response = resp_value
        .dyn_into()
        .map_err(|_| ApiError::Network("fetch did not yield a response".to_string()))?;
    let ok = resp.ok();
    let status = resp.status();
    let text_promise = resp.text().map_err(js_network_error)?;
    let text = JsFuture::from(text_promise).await.map_err(js_network_error)?;
    Ok(FetchedBody {
        ok,
        status,
        text: text.as_string().unwrap_or_default(),
    })
}

async fn get_body(url: &str) -> Result<FetchedBody> {
    let window = web_sys::window().ok_or(ApiError::Browser("window"))?;
    let resp = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(js_network_error)?;
    response_body(resp).await
}

async fn post_body(url: &str, json: &str) -> Result<FetchedBody> {
    let window = web_sys::window().ok_or(ApiError::Browser("window"))?;
    let init = RequestInit::new();
    init.set_method("POST");
    let headers = Headers::new().map_err(js_network_error)?;
    headers
        .set("Content-Type", "application/json")
        .map_err(js_network_error)?;
    init.set_headers(headers.as_ref());
    init.set_body(&JsValue::from_str(json));
    let request = Request::new_with_str_and_init(url, &init).map_err(js_network_error)?;
    let resp = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_network_error)?;
    response_body(resp).await
}

/// GET today's predictions. This path does check the HTTP status before
/// touching the body.
pub async fn fetch_today_predictions() -> Result<TodayPredictions> {
    let body = get_body(PREDICT_TODAY_URL).await?;
    if !body.ok {
        return Err(ApiError::Status(body.status));
    }
    parse_predictions(&body.text)
}

/// GET the live scoreboard. The status line is deliberately ignored: the
/// backend answers failures with a structured error body, which the
/// parser reports with more detail than a bare status code.
pub async fn fetch_live_scores() -> Result<Vec<LiveMatch>> {
    let body = get_body(LIVE_SCORES_URL).await?;
    parse_live_scores(&body.text)
}

/// POST one prediction and trust the acknowledgment field in the body.
pub async fn submit_prediction(prediction: &SubmittedPrediction) -> Result<()> {
    let json =
        serde_json::to_string(prediction).map_err(|e| ApiError::Malformed(e.to_string()))?;
    let body = post_body(SAVE_PREDICTION_URL, &json).await?;
    parse_save_ack(&body.text)
}
