//! Fixed data pools and geographic constants.
//!
//! Every literal the generators draw from lives here as immutable
//! configuration data: the Brazilian name/surname pools, license categories,
//! the coordinate bounding box, and the per-mode literals. Keeping them in
//! one module makes the pools swappable for localisation or testing without
//! touching generation logic.

/// Given-name pool for generated identities.
pub const GIVEN_NAMES: &[&str] = &[
    "Miguel", "Arthur", "Heitor", "Helena", "Alice", "Laura", "Theo", "Davi", "Gabriel",
    "Bernardo", "Samuel", "Valentina", "Sophia", "Isabella", "Manuela", "Luísa", "Pedro",
    "Lorenzo", "Benjamin", "Matheus", "Lucas", "Nicolas", "Joaquim", "Vicente", "Eduardo",
    "Daniel", "Henrique", "Murilo", "Rafael", "João Miguel", "Lucca", "Guilherme", "Felipe",
];

/// Surname pool for generated identities.
pub const SURNAMES: &[&str] = &[
    "Silva", "Santos", "Oliveira", "Souza", "Rodrigues", "Ferreira", "Alves", "Pereira",
    "Lima", "Gomes", "Costa", "Ribeiro", "Martins", "Carvalho", "Almeida", "Lopes",
];

/// Driver's license categories, including the compound ones.
pub const LICENSE_CATEGORIES: &[&str] = &["A", "B", "C", "D", "E", "AB", "AC", "AD", "AE"];

/// Domain suffix appended to generated e-mail addresses.
pub const EMAIL_DOMAIN: &str = "empresa.com.br";

/// Literal prefix of every operator code.
pub const OPERATOR_PREFIX: &str = "ID-";

/// Placeholder password used when building a roster from scratch.
pub const DEFAULT_PASSWORD: &str = "senha123";

/// Group label used when building a roster from scratch.
pub const DEFAULT_GROUP: &str = "Motoristas";

/// Profile label used when building a roster from scratch.
pub const DEFAULT_PROFILE: &str = "Condutor";

/// Group labels drawn from when completing an uploaded roster.
pub const GROUP_CHOICES: &[&str] = &["Motoristas", "Operadores"];

/// Profile labels drawn from when completing an uploaded roster.
pub const PROFILE_CHOICES: &[&str] = &["Condutor", "Gestor"];

/// Inclusive coordinate bounds for generated telemetry positions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    /// Southernmost latitude.
    pub lat_min: f64,
    /// Northernmost latitude.
    pub lat_max: f64,
    /// Westernmost longitude.
    pub lon_min: f64,
    /// Easternmost longitude.
    pub lon_max: f64,
}

/// Bounding box approximating Brazilian territory.
pub const BRAZIL_BOUNDS: BoundingBox = BoundingBox {
    lat_min: -33.7683,
    lat_max: 5.2842,
    lon_min: -73.9855,
    lon_max: -34.7929,
};
