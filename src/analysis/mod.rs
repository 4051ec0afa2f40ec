/// Data shaping for the environmental monitoring service.
///
/// Submodules:
/// - `seismic` — turns the flat ingest output into the ranked, bounded
///   snapshot the renderer displays, and classifies magnitudes for coloring.

pub mod seismic;
