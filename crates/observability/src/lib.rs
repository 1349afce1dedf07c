//! Process-wide tracing setup shared by the client binaries.

/// Initialize process-wide logging with the format chosen by
/// `SYSCONSOLE_LOG_FORMAT`.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init(tracing::LogFormat::from_env());
}

/// Subscriber configuration (filters, output format).
pub mod tracing;
