use indicatif::ProgressStyle;

/// Style for progress bars drawn by the tracing-indicatif layer.
/// Returns `None` when running tests, where no bar is drawn.
pub fn progress_style() -> Option<ProgressStyle> {
    if cfg!(test) {
        return None;
    }

    let style = ProgressStyle::default_bar()
        .template("[{elapsed_precise} / {eta_precise}] {bar:40.cyan/blue} {pos:>7}/{len:7} {msg}")
        .ok()?
        .progress_chars("##-");

    Some(style)
}
