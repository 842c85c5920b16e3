use notepad_log_lib::{logger, NotepadSink, SinkConfig, SinkError};

/// Manual check: `notepad-log <text> [config.json]` appends "Message: '<text>'".
fn main() {
    let mut args = std::env::args().skip(1);
    let text = args.next().unwrap_or_default();

    let Some(config_path) = args.next() else {
        notepad_log_lib::notepad_log!("Message: '{}'", text);
        return;
    };

    let loaded: Result<NotepadSink, SinkError> =
        SinkConfig::load(&config_path).and_then(NotepadSink::with_config);
    let sink = match loaded {
        Ok(sink) => sink,
        Err(e) => {
            eprintln!("notepad-log: {config_path}: {e}");
            std::process::exit(1);
        }
    };

    if sink.config().diagnostics {
        logger::init_file_logger();
        notepad_log_lib::app_log!("[demo] sending {} bytes of input", text.len());
    }
    let _ = sink.log(format_args!("Message: '{}'", text));
}
