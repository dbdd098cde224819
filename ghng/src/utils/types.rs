/// Alias to a scalar floating type.
///
/// NOTE: distances are squared and accumulated over many steps, so `f64` is used to keep error
/// counters stable for long runs.
pub type Float = f64;
