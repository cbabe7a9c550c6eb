//! Crop price estimation workflow
//!
//! Holds the three-step form sessions in memory: the in-progress request,
//! the current step cursor, the latest result, and the ordered list of saved
//! estimates. Nothing is persisted; a session disappears with the process.
//!
//! The random factor in the price formula and the saved-estimate dates come
//! from an injected RNG and clock so tests can pin outputs.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, RwLock};
use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;

use shared::{
    predicted_price, validate_estimate, DemandTier, EstimateRequest, EstimateResult, ModelChoice,
    SavedEstimate,
};

use crate::error::{AppError, AppResult};
use crate::services::{Clock, SystemClock};

/// One estimation form session
#[derive(Debug, Default)]
struct Session {
    step: u8,
    request: EstimateRequest,
    result: Option<EstimateResult>,
    saved: Vec<SavedEstimate>,
}

/// Session state returned to the client
#[derive(Debug, Clone, Serialize)]
pub struct SessionView {
    pub id: Uuid,
    pub step: u8,
    pub request: EstimateRequest,
    pub result: Option<EstimateResult>,
    pub saved: Vec<SavedEstimate>,
}

/// Estimation workflow service
#[derive(Clone)]
pub struct EstimationService {
    sessions: Arc<RwLock<HashMap<Uuid, Session>>>,
    rng: Arc<Mutex<StdRng>>,
    clock: Arc<dyn Clock>,
    simulated_delay: Duration,
}

impl EstimationService {
    pub fn new(simulated_delay_ms: u64) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            rng: Arc::new(Mutex::new(StdRng::from_entropy())),
            clock: Arc::new(SystemClock),
            simulated_delay: Duration::from_millis(simulated_delay_ms),
        }
    }

    /// Seed the noise source, pinning prices for tests
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = Arc::new(Mutex::new(StdRng::seed_from_u64(seed)));
        self
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Start a new form session at step 1
    pub fn create_session(&self) -> SessionView {
        let id = Uuid::new_v4();
        let mut sessions = self.sessions.write().expect("session lock poisoned");
        sessions.insert(id, Session { step: 1, ..Default::default() });
        view(id, &sessions[&id])
    }

    pub fn session(&self, id: Uuid) -> AppResult<SessionView> {
        let sessions = self.sessions.read().expect("session lock poisoned");
        let session = sessions.get(&id).ok_or_else(not_found)?;
        Ok(view(id, session))
    }

    /// Update one field of the in-progress request.
    ///
    /// Numeric fields are coerced from numbers or numeric strings; an empty
    /// string or null resets the field to its unset state, distinct from
    /// zero. No range clamping happens here.
    pub fn set_field(&self, id: Uuid, name: &str, value: &Value) -> AppResult<SessionView> {
        let mut sessions = self.sessions.write().expect("session lock poisoned");
        let session = sessions.get_mut(&id).ok_or_else(not_found)?;
        apply_field(&mut session.request, name, value)?;
        Ok(view(id, session))
    }

    /// Move the step cursor. The step being left is not validated and no
    /// fields are reset.
    pub fn go_to_step(&self, id: Uuid, step: u8) -> AppResult<SessionView> {
        if !(1..=3).contains(&step) {
            return Err(AppError::ValidationError(format!("Step {} does not exist.", step)));
        }
        let mut sessions = self.sessions.write().expect("session lock poisoned");
        let session = sessions.get_mut(&id).ok_or_else(not_found)?;
        session.step = step;
        Ok(view(id, session))
    }

    /// Validate and compute an estimate for the session.
    ///
    /// Validation only happens here, never on step transitions; a failure
    /// leaves any previous result untouched. On success the previous result
    /// is replaced and nothing is appended to the saved list.
    pub async fn submit(&self, id: Uuid) -> AppResult<EstimateResult> {
        let request = {
            let sessions = self.sessions.read().expect("session lock poisoned");
            let session = sessions.get(&id).ok_or_else(not_found)?;
            session.request.clone()
        };

        validate_estimate(&request).map_err(AppError::ValidationError)?;

        // Simulated model run
        if !self.simulated_delay.is_zero() {
            tokio::time::sleep(self.simulated_delay).await;
        }

        let (noise, elapsed) = {
            let mut rng = self.rng.lock().expect("rng lock poisoned");
            ((rng.gen::<f64>() - 0.5) * 100.0, 0.7 + rng.gen::<f64>() * 0.5)
        };
        let model = request.model_choice.unwrap_or_default();
        let result = EstimateResult {
            predicted_price: predicted_price(&request, noise),
            model_r2_score: model.accuracy(),
            elapsed_time_sec: elapsed,
        };

        let mut sessions = self.sessions.write().expect("session lock poisoned");
        let session = sessions.get_mut(&id).ok_or_else(not_found)?;
        session.result = Some(result.clone());
        tracing::debug!(session = %id, price = result.predicted_price, "estimate computed");
        Ok(result)
    }

    /// Append a snapshot of the current result to the saved list.
    ///
    /// A no-op when no result exists. Saving the same result twice appends
    /// two identical rows; deduplication is deliberately absent.
    pub fn save_current_result(&self, id: Uuid) -> AppResult<Vec<SavedEstimate>> {
        let mut sessions = self.sessions.write().expect("session lock poisoned");
        let session = sessions.get_mut(&id).ok_or_else(not_found)?;
        if let Some(result) = &session.result {
            session.saved.push(SavedEstimate {
                id: Uuid::new_v4(),
                crop: session.request.crop_name.clone().unwrap_or_default(),
                price: result.predicted_price,
                date: self.clock.now().date_naive(),
            });
        }
        Ok(session.saved.clone())
    }

    /// Serialize the saved list as CSV. `None` when there is nothing to
    /// export, so no document is produced.
    pub fn export_saved(&self, id: Uuid) -> AppResult<Option<String>> {
        let sessions = self.sessions.read().expect("session lock poisoned");
        let session = sessions.get(&id).ok_or_else(not_found)?;
        if session.saved.is_empty() {
            return Ok(None);
        }

        let mut writer = csv::Writer::from_writer(vec![]);
        writer
            .write_record(["Crop", "Price (\u{20b9})", "Date"])
            .map_err(|e| AppError::Internal(format!("CSV serialization error: {}", e)))?;
        for saved in &session.saved {
            writer
                .write_record([
                    saved.crop.as_str(),
                    &saved.price.to_string(),
                    &saved.date.format("%-m/%-d/%Y").to_string(),
                ])
                .map_err(|e| AppError::Internal(format!("CSV serialization error: {}", e)))?;
        }
        let data = String::from_utf8(
            writer
                .into_inner()
                .map_err(|e| AppError::Internal(format!("CSV writer error: {}", e)))?,
        )
        .map_err(|e| AppError::Internal(format!("UTF-8 conversion error: {}", e)))?;
        Ok(Some(data))
    }
}

fn not_found() -> AppError {
    AppError::NotFound("Estimation session".to_string())
}

fn view(id: Uuid, session: &Session) -> SessionView {
    SessionView {
        id,
        step: session.step,
        request: session.request.clone(),
        result: session.result.clone(),
        saved: session.saved.clone(),
    }
}

/// Apply one named field update to a request
fn apply_field(request: &mut EstimateRequest, name: &str, value: &Value) -> AppResult<()> {
    match name {
        "crop_name" => request.crop_name = string_field(name, value)?,
        "crop_variety" => request.crop_variety = string_field(name, value)?,
        "region" => request.region = string_field(name, value)?,
        "area_sown" => request.area_sown = number_field(name, value)?,
        "year" => request.year = int_field(name, value)?,
        "month" => request.month = int_field(name, value)?,
        "rainfall" => request.rainfall = number_field(name, value)?,
        "irrigated_percent" => request.irrigated_percent = number_field(name, value)?,
        "fertilizer_used" => request.fertilizer_used = number_field(name, value)?,
        "expected_yield" => request.expected_yield = number_field(name, value)?,
        "msp" => request.msp = number_field(name, value)?,
        "market_demand" => request.market_demand = demand_field(name, value)?,
        "export_demand" => request.export_demand = demand_field(name, value)?,
        "input_cost" => request.input_cost = number_field(name, value)?,
        "transport_cost" => request.transport_cost = number_field(name, value)?,
        "govt_scheme_active" => request.govt_scheme_active = flag_field(name, value)?,
        "cold_storage_available" => request.cold_storage_available = flag_field(name, value)?,
        "mandi_open" => request.mandi_open = flag_field(name, value)?,
        "model_choice" => request.model_choice = model_field(value)?,
        other => return Err(AppError::UnknownField(other.to_string())),
    }
    Ok(())
}

fn string_field(name: &str, value: &Value) -> AppResult<Option<String>> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) if s.is_empty() => Ok(None),
        Value::String(s) => Ok(Some(s.clone())),
        _ => Err(invalid(name, "text")),
    }
}

fn number_field(name: &str, value: &Value) -> AppResult<Option<f64>> {
    match value {
        Value::Null => Ok(None),
        Value::Number(n) => Ok(n.as_f64()),
        Value::String(s) if s.is_empty() => Ok(None),
        Value::String(s) => s.parse::<f64>().map(Some).map_err(|_| invalid(name, "number")),
        _ => Err(invalid(name, "number")),
    }
}

fn int_field<T: TryFrom<i64>>(name: &str, value: &Value) -> AppResult<Option<T>> {
    match value {
        Value::Null => Ok(None),
        Value::Number(n) => n
            .as_i64()
            .and_then(|v| T::try_from(v).ok())
            .map(Some)
            .ok_or_else(|| invalid(name, "whole number")),
        Value::String(s) if s.is_empty() => Ok(None),
        Value::String(s) => s
            .parse::<i64>()
            .ok()
            .and_then(|v| T::try_from(v).ok())
            .map(Some)
            .ok_or_else(|| invalid(name, "whole number")),
        _ => Err(invalid(name, "whole number")),
    }
}

fn demand_field(name: &str, value: &Value) -> AppResult<Option<DemandTier>> {
    match int_field::<u8>(name, value)? {
        None => Ok(None),
        Some(weight) => DemandTier::from_weight(weight)
            .map(Some)
            .ok_or_else(|| invalid(name, "demand level 1-3")),
    }
}

fn flag_field(name: &str, value: &Value) -> AppResult<Option<bool>> {
    match value {
        Value::Null => Ok(None),
        Value::Bool(b) => Ok(Some(*b)),
        Value::String(s) => match s.as_str() {
            "" => Ok(None),
            "yes" => Ok(Some(true)),
            "no" => Ok(Some(false)),
            _ => Err(invalid(name, "yes/no")),
        },
        _ => Err(invalid(name, "yes/no")),
    }
}

fn model_field(value: &Value) -> AppResult<Option<ModelChoice>> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) if s.is_empty() => Ok(None),
        Value::String(s) => ModelChoice::parse(s)
            .map(Some)
            .ok_or_else(|| AppError::ValidationError(format!("Unknown prediction model '{}'.", s))),
        _ => Err(invalid("model_choice", "model name")),
    }
}

fn invalid(name: &str, expected: &str) -> AppError {
    AppError::ValidationError(format!("Field '{}' must be a {}.", name, expected))
}
