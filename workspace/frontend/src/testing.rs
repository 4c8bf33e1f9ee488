//! Fixtures, fake providers and a throwaway HTTP backend for the dashboard tests.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, Once};

use async_trait::async_trait;
use axum::Router;
use chrono::NaiveDate;
use common::{PredictionPoint, PredictionRequest, PricePoint};
use rust_decimal::Decimal;
use tokio::net::TcpListener;
use tokio::sync::Notify;

use crate::api_client::{ApiClient, ApiError, HistoryProvider, PredictionProvider};
use crate::settings::AppSettings;

static TRACING: Once = Once::new();

/// Installs a test writer subscriber once per test binary.
pub fn init_test_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_test_writer()
            .try_init();
    });
}

/// Serves `router` on an ephemeral localhost port and returns its base URL.
pub async fn spawn_backend(router: Router) -> String {
    init_test_tracing();
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

/// Client pointed at `base_url`, bypassing any system proxy.
pub fn test_client(base_url: String) -> ApiClient {
    let client = reqwest::Client::builder().no_proxy().build().unwrap();
    ApiClient::with_client(client, AppSettings::with_base_url(base_url))
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn day(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

pub fn price(s: &str, amount: i64, commodity: &str, location: &str) -> PricePoint {
    PricePoint::new(day(s), Decimal::from(amount), commodity, location)
}

pub fn prediction(
    s: &str,
    predicted: i64,
    min: i64,
    max: i64,
    commodity: &str,
    location: &str,
) -> PredictionPoint {
    PredictionPoint {
        date: day(s),
        predicted_price: Decimal::from(predicted),
        confidence_min: Decimal::from(min),
        confidence_max: Decimal::from(max),
        commodity: commodity.to_string(),
        location: location.to_string(),
    }
}

/// Weekly observations for three series.
pub fn sample_history() -> Vec<PricePoint> {
    vec![
        price("2023-01-01", 100, "Wheat", "North Farm"),
        price("2023-01-08", 105, "Wheat", "North Farm"),
        price("2023-01-15", 110, "Wheat", "North Farm"),
        price("2023-01-22", 108, "Wheat", "North Farm"),
        price("2023-01-29", 112, "Wheat", "North Farm"),
        price("2023-02-05", 115, "Wheat", "North Farm"),
        price("2023-01-01", 200, "Corn", "South Farm"),
        price("2023-01-15", 205, "Corn", "South Farm"),
        price("2023-01-29", 210, "Corn", "South Farm"),
        price("2023-02-05", 208, "Corn", "South Farm"),
        price("2023-01-01", 150, "Soybeans", "East Farm"),
        price("2023-02-05", 158, "Soybeans", "East Farm"),
    ]
}

/// History provider returning queued results, then the fallback.
pub struct FakeHistory {
    responses: Mutex<VecDeque<Result<Vec<PricePoint>, ApiError>>>,
    fallback: Vec<PricePoint>,
    calls: AtomicUsize,
}

impl FakeHistory {
    pub fn returning(points: Vec<PricePoint>) -> Self {
        Self {
            responses: Mutex::new(VecDeque::new()),
            fallback: points,
            calls: AtomicUsize::new(0),
        }
    }

    /// Fails the next call with an HTTP status error, then serves `points`.
    pub fn failing_once(status: u16, points: Vec<PricePoint>) -> Self {
        let fake = Self::returning(points);
        fake.push(Err(ApiError::Status {
            status,
            message: None,
        }));
        fake
    }

    pub fn push(&self, response: Result<Vec<PricePoint>, ApiError>) {
        self.responses.lock().unwrap().push_back(response);
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl HistoryProvider for FakeHistory {
    async fn fetch_history(&self) -> Result<Vec<PricePoint>, ApiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let queued = self.responses.lock().unwrap().pop_front();
        queued.unwrap_or_else(|| Ok(self.fallback.clone()))
    }
}

/// History provider that blocks until released, so tests can observe `loading`.
pub struct GatedHistory {
    pub gate: Arc<Notify>,
    pub points: Vec<PricePoint>,
}

#[async_trait]
impl HistoryProvider for GatedHistory {
    async fn fetch_history(&self) -> Result<Vec<PricePoint>, ApiError> {
        self.gate.notified().await;
        Ok(self.points.clone())
    }
}

/// Prediction provider answering with a fixed forecast for the requested target.
pub struct FakePredictions {
    predicted: i64,
    failure: Mutex<Option<ApiError>>,
    calls: AtomicUsize,
}

impl FakePredictions {
    pub fn new(predicted: i64) -> Self {
        Self {
            predicted,
            failure: Mutex::new(None),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(err: ApiError) -> Self {
        let fake = Self::new(0);
        *fake.failure.lock().unwrap() = Some(err);
        fake
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PredictionProvider for FakePredictions {
    async fn predict(&self, request: &PredictionRequest) -> Result<PredictionPoint, ApiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        tokio::task::yield_now().await;
        if let Some(err) = self.failure.lock().unwrap().take() {
            return Err(err);
        }
        Ok(PredictionPoint {
            date: request.date,
            predicted_price: Decimal::from(self.predicted),
            confidence_min: Decimal::from(self.predicted - 3),
            confidence_max: Decimal::from(self.predicted + 3),
            commodity: request.commodity.clone(),
            location: request.location.clone(),
        })
    }
}
