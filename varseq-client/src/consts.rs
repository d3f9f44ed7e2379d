//! Constants for the varseq client: environment variable names, service
//! routes, storage keys and command strings.

// Environment variable names

/// Environment variable name for setting the prediction service base URL.
///
/// When set, this overrides the default endpoint (`http://localhost:8000`).
///
/// # Example
///
/// ```bash
/// export VARSEQ_API=https://predict.example.org
/// ```
pub const VARSEQ_API_ENV: &str = "VARSEQ_API";

/// Environment variable name for setting the session store location.
///
/// When set, this overrides the default location (`~/.varseq/`).
pub const VARSEQ_CACHE_ENV: &str = "VARSEQ_CACHE";

/// Environment variable name for the session identifier.
///
/// Each session owns its own handoff slot, so two shells exporting
/// different values never see each other's results.
pub const VARSEQ_SESSION_ENV: &str = "VARSEQ_SESSION";

// Service

/// Default base URL of the prediction service.
pub const DEFAULT_API: &str = "http://localhost:8000";

/// Route for multipart (file) predictions.
pub const PREDICT_FILE_ENDPOINT: &str = "/api/sars-variants/predictSarsFile";

/// Route for JSON (pasted sequence) predictions.
pub const PREDICT_SEQUENCE_ENDPOINT: &str = "/api/sars-variants/predictSarsSequence";

/// Route answering `{"health_check": "OK"}` when the service is up.
pub const HEALTH_ENDPOINT: &str = "/";

/// Multipart field carrying the uploaded file.
pub const FILE_FIELD: &str = "file";

// Handoff

/// The single well-known key the analysis result is stored under.
pub const ANALYSIS_RESULTS_KEY: &str = "analysisResults";

/// Session id used when none is configured.
pub const DEFAULT_SESSION: &str = "default";

/// Subdirectory of the cache folder holding one directory per session.
pub const DEFAULT_SESSION_SUBFOLDER: &str = "sessions";

/// Extension of the files backing session store keys.
pub const DEFAULT_SESSION_EXT: &str = ".json";

// Uploads

/// Extensions accepted at the drop boundary.
pub const ACCEPTED_EXTENSIONS: [&str; 2] = ["fasta", "csv"];

// Command-line interface command names

pub const ANALYZE_CMD: &str = "analyze";
pub const RESULTS_CMD: &str = "results";
pub const SAMPLE_CMD: &str = "sample";
pub const HEALTH_CMD: &str = "health";
