// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! End to end checks of the public API, from reporting a state to decoding the bytes
//! that landed on the output device.

use std::{fs, thread};

use pretty_assertions::assert_eq;
use r3bl_term_progress::{HandleTerminalCheck, MockTerminal, OscProgressBuffer, OutputDevice,
                         OutputDeviceExt, ProgressConfig, ProgressConfigOption, ProgressEncoder,
                         ProgressState, ReportOutcome, StreamTerminalCheck};

fn new_interactive_encoder(config: impl Into<ProgressConfig>)
-> (ProgressEncoder, r3bl_term_progress::StdoutMock) {
    let (output_device, stdout_mock) = OutputDevice::new_mock();
    let encoder = ProgressEncoder::new(output_device, MockTerminal::interactive(), config);
    (encoder, stdout_mock)
}

#[test]
fn test_typical_session_decodes_back_to_reported_states() {
    let (encoder, stdout_mock) = new_interactive_encoder(ProgressConfig::default());

    let reported = [
        ProgressState::Indeterminate,
        ProgressState::Set(0),
        ProgressState::Set(42),
        ProgressState::Paused(Some(42)),
        ProgressState::Set(100),
        ProgressState::Error(None),
        ProgressState::Remove,
    ];
    for state in reported {
        encoder.report(state);
    }

    let bytes = stdout_mock.get_copy_of_buffer();
    let mut buffer = OscProgressBuffer::new();
    let decoded = buffer.append_and_extract(&bytes, bytes.len());
    assert_eq!(decoded.as_slice(), &reported);
    assert_eq!(stdout_mock.get_copy_of_buffer_as_string_strip_ansi(), "");
}

#[test]
fn test_string_terminator_decodes_in_small_chunks() {
    let (encoder, stdout_mock) =
        new_interactive_encoder(ProgressConfigOption::StringTerminator);

    encoder.report(ProgressState::Set(7));
    encoder.report(ProgressState::Paused(None));

    let bytes = stdout_mock.get_copy_of_buffer();
    assert!(bytes.ends_with(b"\x1b]9;4;4\x1b\\"));

    let mut buffer = OscProgressBuffer::new();
    let mut decoded = vec![];
    for chunk in bytes.chunks(3) {
        decoded.extend(buffer.append_and_extract(chunk, chunk.len()));
    }
    assert_eq!(decoded, vec![ProgressState::Set(7), ProgressState::Paused(None)]);
}

#[test]
fn test_concurrent_reports_never_interleave() {
    let (encoder, stdout_mock) = new_interactive_encoder(ProgressConfig::default());
    let threads = 8;
    let reports_per_thread: u8 = 50;

    thread::scope(|scope| {
        for _ in 0..threads {
            scope.spawn(|| {
                for percent in 0..reports_per_thread {
                    encoder.report(ProgressState::Set(percent));
                }
            });
        }
    });

    let bytes = stdout_mock.get_copy_of_buffer();
    let mut buffer = OscProgressBuffer::new();
    let decoded = buffer.append_and_extract(&bytes, bytes.len());
    assert_eq!(decoded.len(), threads * usize::from(reports_per_thread));

    // Every byte belongs to a whole sequence.
    let text = stdout_mock.get_copy_of_buffer_as_string();
    let sequences: Vec<&str> = text.split_terminator('\x07').collect();
    assert_eq!(sequences.len(), decoded.len());
    for sequence in sequences {
        assert!(sequence.starts_with("\x1b]9;4;1;"), "bad sequence: {sequence:?}");
    }
}

#[test]
fn test_clones_of_one_device_share_the_lock() {
    let (output_device, stdout_mock) = OutputDevice::new_mock();
    let first = ProgressEncoder::new(
        output_device.clone(),
        MockTerminal::interactive(),
        ProgressConfig::default(),
    );
    let second = ProgressEncoder::new(
        output_device,
        MockTerminal::interactive(),
        ProgressConfig::default(),
    );

    thread::scope(|scope| {
        scope.spawn(|| (0..=100).for_each(|it| first.report(ProgressState::Set(it))));
        scope.spawn(|| (0..=100).for_each(|_| second.report(ProgressState::Indeterminate)));
    });

    let bytes = stdout_mock.get_copy_of_buffer();
    let decoded = OscProgressBuffer::new().append_and_extract(&bytes, bytes.len());
    assert_eq!(decoded.len(), 202);
}

#[test]
fn test_redirected_to_file_writes_nothing() {
    let path = std::env::temp_dir().join(format!(
        "term_progress_redirect_{}.txt",
        uuid::Uuid::new_v4()
    ));
    let file = fs::File::create(&path).unwrap();

    // The check looks at the very file the device writes to.
    let encoder = ProgressEncoder::new(
        OutputDevice::new(file.try_clone().unwrap()),
        HandleTerminalCheck::new(file),
        ProgressConfig::default(),
    );
    for state in [
        ProgressState::Indeterminate,
        ProgressState::Set(10),
        ProgressState::Error(Some(10)),
        ProgressState::Remove,
    ] {
        assert_eq!(
            encoder.try_report(state).unwrap(),
            ReportOutcome::SkippedNotInteractive
        );
        encoder.report(state);
    }
    drop(encoder);

    assert_eq!(fs::metadata(&path).unwrap().len(), 0);
    fs::remove_file(&path).unwrap();
}

#[test]
fn test_stream_terminal_check_is_usable_as_gate() {
    // Whether stderr is a terminal depends on how the tests are run. Either way the
    // report must not fail, and must emit bytes only when the check says so.
    let (output_device, stdout_mock) = OutputDevice::new_mock();
    let encoder = ProgressEncoder::new(
        output_device,
        StreamTerminalCheck::stderr(),
        ProgressConfig::default(),
    );
    let outcome = encoder.try_report(ProgressState::Set(5)).unwrap();
    let bytes = stdout_mock.get_copy_of_buffer();
    match outcome {
        ReportOutcome::Emitted => assert_eq!(bytes, b"\x1b]9;4;1;5\x07"),
        ReportOutcome::SkippedNotInteractive => assert!(bytes.is_empty()),
    }
}

#[test]
fn test_failing_device_is_silent() {
    let encoder = ProgressEncoder::new(
        OutputDevice::new_failing(),
        MockTerminal::interactive(),
        ProgressConfig::default(),
    );
    encoder.report(ProgressState::Set(1));
    assert!(encoder.try_report(ProgressState::Set(1)).is_err());
}
