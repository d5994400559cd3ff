/// Required sum of ingredient percentages for a complete mix.
pub const PERCENT_TOTAL: f64 = 100.0;

/// Kilograms per arroba, the Brazilian cattle-trade weight unit.
pub const KG_PER_ARROBA: f64 = 15.0;

/// Daily feed intake as a fraction of live weight per head.
pub const DAILY_INTAKE_RATIO: f64 = 0.003;

// ─────────────────────────────────────────────────────────────────────────────
// Profit projection defaults
// ─────────────────────────────────────────────────────────────────────────────

/// Arroba price step between projection curve samples.
pub const CURVE_PRICE_STEP: f64 = 10.0;

/// Number of samples in the default projection curve.
pub const CURVE_POINTS: usize = 20;
