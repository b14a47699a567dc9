//! Telemetry event derivation from a finished roster.

use std::fmt;

use chrono::NaiveDateTime;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::generator;
use crate::record::UserRecord;

/// Minimum number of events derived per user.
pub const MIN_EVENTS_PER_USER: usize = 5;

/// Maximum number of events derived per user.
pub const MAX_EVENTS_PER_USER: usize = 15;

/// Kind of driving-behaviour observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    /// Hard braking.
    #[serde(rename = "Frenagem Brusca")]
    HardBraking,
    /// Rapid acceleration.
    #[serde(rename = "Aceleração Rápida")]
    RapidAcceleration,
    /// Speeding.
    #[serde(rename = "Excesso de Velocidade")]
    Speeding,
    /// Sharp turn.
    #[serde(rename = "Curva Acentuada")]
    SharpTurn,
}

impl EventKind {
    /// Every event kind, in declaration order.
    pub const ALL: [Self; 4] = [
        Self::HardBraking,
        Self::RapidAcceleration,
        Self::Speeding,
        Self::SharpTurn,
    ];

    /// The spreadsheet label for this kind.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::HardBraking => "Frenagem Brusca",
            Self::RapidAcceleration => "Aceleração Rápida",
            Self::Speeding => "Excesso de Velocidade",
            Self::SharpTurn => "Curva Acentuada",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One timestamped driving-behaviour observation.
///
/// Events reference their operator by code and carry a denormalised copy of
/// the operator's full name taken at emission time; there is no reverse
/// navigation back to the roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TelemetryEvent {
    /// Operator code of the source record.
    pub id_operador: String,
    /// Moment of the observation, within the last 30 days of derivation.
    #[serde(rename = "Data")]
    pub data: NaiveDateTime,
    /// Observed behaviour.
    #[serde(rename = "Evento")]
    pub evento: EventKind,
    /// Latitude inside the fixed bounding box, six decimal places.
    #[serde(rename = "Latitude")]
    pub latitude: f64,
    /// Longitude inside the fixed bounding box, six decimal places.
    #[serde(rename = "Longitude")]
    pub longitude: f64,
    /// Operator full name at emission time.
    #[serde(rename = "Nome do Operador")]
    pub nome_operador: String,
}

impl TelemetryEvent {
    /// Spreadsheet column headers, in serialization order.
    pub const COLUMNS: [&'static str; 6] = [
        "id_operador",
        "Data",
        "Evento",
        "Latitude",
        "Longitude",
        "Nome do Operador",
    ];
}

/// Derives telemetry events for every roster record.
///
/// Each user contributes between [`MIN_EVENTS_PER_USER`] and
/// [`MAX_EVENTS_PER_USER`] events (count drawn independently per user). The
/// returned collection is sorted by timestamp ascending; tie order is
/// unspecified. This is the only ordering guarantee the datasets carry.
pub fn derive_telemetry<R: Rng + ?Sized>(
    rng: &mut R,
    roster: &[UserRecord],
    now: NaiveDateTime,
) -> Vec<TelemetryEvent> {
    let mut events = Vec::new();
    for user in roster {
        let count = rng.random_range(MIN_EVENTS_PER_USER..=MAX_EVENTS_PER_USER);
        for _ in 0..count {
            let (latitude, longitude) = generator::coordinates(rng);
            events.push(TelemetryEvent {
                id_operador: user.id_operador.clone(),
                data: generator::recent_timestamp(rng, now),
                evento: event_kind(rng),
                latitude,
                longitude,
                nome_operador: format!("{} {}", user.nome, user.sobrenome),
            });
        }
    }
    events.sort_by_key(|event| event.data);
    events
}

fn event_kind<R: Rng + ?Sized>(rng: &mut R) -> EventKind {
    EventKind::ALL
        .get(rng.random_range(0..EventKind::ALL.len()))
        .copied()
        .unwrap_or(EventKind::HardBraking)
}
