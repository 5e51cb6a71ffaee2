//! Gateway lifecycle probes.
//!
//! The gateway moves through three phases: wiring adapters, serving traffic
//! and draining on shutdown. Readiness holds only while serving; liveness
//! fails once draining starts so orchestrators stop routing to the instance.

use std::sync::atomic::{AtomicU8, Ordering};

use actix_web::{HttpResponse, get, http::header, web};

/// Lifecycle phase reported by the probes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum GatewayPhase {
    /// Settings loaded, adapters not yet bound to a listener.
    Wiring = 0,
    /// Listener bound and every adapter wired.
    Serving = 1,
    /// Server stopped accepting work.
    Draining = 2,
}

impl GatewayPhase {
    fn from_raw(raw: u8) -> Self {
        match raw {
            0 => Self::Wiring,
            1 => Self::Serving,
            _ => Self::Draining,
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Wiring => "wiring",
            Self::Serving => "serving",
            Self::Draining => "draining",
        }
    }
}

/// Phase shared between the server bootstrap and the probe handlers.
#[derive(Debug)]
pub struct HealthState {
    phase: AtomicU8,
}

impl Default for HealthState {
    fn default() -> Self {
        Self {
            phase: AtomicU8::new(GatewayPhase::Wiring as u8),
        }
    }
}

impl HealthState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> GatewayPhase {
        GatewayPhase::from_raw(self.phase.load(Ordering::Acquire))
    }

    /// Enter [`GatewayPhase::Serving`] unless draining already began.
    pub fn mark_serving(&self) {
        let _ = self.phase.compare_exchange(
            GatewayPhase::Wiring as u8,
            GatewayPhase::Serving as u8,
            Ordering::AcqRel,
            Ordering::Acquire,
        );
    }

    /// Enter [`GatewayPhase::Draining`]; final.
    pub fn mark_draining(&self) {
        self.phase
            .store(GatewayPhase::Draining as u8, Ordering::Release);
    }
}

fn phase_response(healthy: bool, phase: GatewayPhase) -> HttpResponse {
    let mut response = if healthy {
        HttpResponse::Ok()
    } else {
        HttpResponse::ServiceUnavailable()
    };
    response
        .insert_header((header::CACHE_CONTROL, "no-store"))
        .content_type(header::ContentType::plaintext())
        .body(phase.label())
}

/// Readiness: 200 while serving tenant and account traffic.
#[utoipa::path(
    get,
    path = "/health/ready",
    tags = ["health"],
    responses(
        (status = 200, description = "Gateway phase is serving", body = String, content_type = "text/plain"),
        (status = 503, description = "Gateway is wiring or draining", body = String, content_type = "text/plain")
    )
)]
#[get("/health/ready")]
pub async fn ready(state: web::Data<HealthState>) -> HttpResponse {
    let phase = state.phase();
    phase_response(phase == GatewayPhase::Serving, phase)
}

/// Liveness: 503 once the gateway is draining.
#[utoipa::path(
    get,
    path = "/health/live",
    tags = ["health"],
    responses(
        (status = 200, description = "Gateway process is alive", body = String, content_type = "text/plain"),
        (status = 503, description = "Gateway is draining", body = String, content_type = "text/plain")
    )
)]
#[get("/health/live")]
pub async fn live(state: web::Data<HealthState>) -> HttpResponse {
    let phase = state.phase();
    phase_response(phase != GatewayPhase::Draining, phase)
}
