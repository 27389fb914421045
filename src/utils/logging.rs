//! File logging for debugging the demos. Only built with the `logging` feature.

#[cfg(feature = "logging")]
pub fn init_logger(
    min_level: log::LevelFilter, log_file: &std::path::Path,
) -> Result<(), fern::InitError> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            // Local time isn't reliable once other threads are running, so use UTC.
            let timestamp = time::OffsetDateTime::now_utc()
                .format(time::macros::format_description!(
                    "[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:3]Z"
                ))
                .unwrap_or_default();

            out.finish(format_args!(
                "{timestamp} {:<5} [{}] {message}",
                record.level(),
                record.target(),
            ))
        })
        .level(min_level)
        .chain(fern::log_file(log_file)?)
        .apply()?;

    Ok(())
}
