use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use parking_lot::Mutex;

use crate::models::config::{RecorderConfig, CHANNELS, SAMPLE_RATE};
use crate::models::error::RecorderError;
use crate::models::result::RecordingResult;
use crate::models::state::RecorderState;
use crate::processing::power_meter::{self, PowerReading};
use crate::processing::waveform::WaveformSampler;
use crate::session::encoder::AacEncoder;
use crate::storage::adts_writer::AdtsWriter;
use crate::traits::capture_source::{CaptureParams, CaptureSource, ReadOutcome};
use crate::traits::listener::WaveformListener;
use crate::traits::stream_encoder::StreamEncoder;

/// Shared meters: written only by the capture thread, snapshot-read by
/// control-side queries. One short lock per access, no torn reads.
struct Meters {
    state: RecorderState,
    power: PowerReading,
    data_size: u64,
}

impl Meters {
    fn new() -> Self {
        Self {
            state: RecorderState::Idle,
            power: PowerReading::silence(),
            data_size: 0,
        }
    }
}

/// The loop-owned half of the session. The capture thread takes it by
/// value and hands it back when the loop exits, so device, encoder,
/// writer, and waveform accumulator are only ever touched by one thread
/// at a time.
struct Pipeline<D: CaptureSource, E: StreamEncoder> {
    device: D,
    encoder: AacEncoder<E>,
    writer: AdtsWriter,
    waveform: WaveformSampler,
    block: Vec<u8>,
}

/// Microphone-to-AAC recording session.
///
/// Owns the capture device and encoder exclusively and drives the
/// capture/encode loop on a dedicated thread:
///
/// ```text
/// [CaptureSource] → raw block → { power meter, waveform, AacEncoder }
///                                 AacEncoder → frames → ADTS writer
/// ```
///
/// State machine: idle → recording ↔ paused → stopped (terminal).
/// Pause and stop never cancel an in-flight device read; the read
/// completes, its data is processed and counted, then the loop exits.
pub struct RecordingSession<D: CaptureSource, E: StreamEncoder> {
    config: RecorderConfig,
    meters: Arc<Mutex<Meters>>,
    running: Arc<AtomicBool>,
    finishing: Arc<AtomicBool>,
    listener: Option<Arc<dyn WaveformListener>>,

    // Exactly one of these holds the resources outside Idle/Stopped:
    // `idle` before start, `worker` while the loop runs, `parked` while
    // paused or mid-stop.
    idle: Option<(D, E)>,
    parked: Option<Pipeline<D, E>>,
    worker: Option<JoinHandle<Pipeline<D, E>>>,
}

impl<D, E> RecordingSession<D, E>
where
    D: CaptureSource + 'static,
    E: StreamEncoder + 'static,
{
    pub fn new(config: RecorderConfig, device: D, encoder: E) -> Self {
        Self {
            config,
            meters: Arc::new(Mutex::new(Meters::new())),
            running: Arc::new(AtomicBool::new(false)),
            finishing: Arc::new(AtomicBool::new(false)),
            listener: None,
            idle: Some((device, encoder)),
            parked: None,
            worker: None,
        }
    }

    /// Register the live waveform listener. Takes effect at start.
    pub fn set_listener(&mut self, listener: Arc<dyn WaveformListener>) {
        self.listener = Some(listener);
    }

    pub fn state(&self) -> RecorderState {
        self.meters.lock().state
    }

    /// Latest per-block power reading, or the silence floor outside
    /// active recording.
    pub fn current_power(&self) -> PowerReading {
        self.meters.lock().power
    }

    /// Recorded duration in milliseconds. Truncated to whole seconds
    /// before the millisecond conversion, so sub-second precision is
    /// structurally lost.
    pub fn duration_ms(&self) -> u64 {
        duration_ms_for(self.meters.lock().data_size)
    }

    pub fn output_path(&self) -> &Path {
        &self.config.output_path
    }

    /// Acquire device and encoder, open the output stream, and launch the
    /// capture loop. Any initialization failure releases everything
    /// acquired so far and surfaces as a start failure.
    pub fn start(&mut self) -> Result<(), RecorderError> {
        {
            let m = self.meters.lock();
            if !matches!(m.state, RecorderState::Idle) {
                return Err(RecorderError::InvalidState {
                    operation: "start",
                    state: m.state,
                });
            }
        }

        let (mut device, raw_encoder) = self.idle.take().ok_or(RecorderError::InvalidState {
            operation: "start",
            state: RecorderState::Idle,
        })?;

        let params = CaptureParams {
            sample_rate: SAMPLE_RATE,
            channels: CHANNELS,
            internal_buffer_size: self.config.read_buffer_size * 10,
        };
        device.open(&params)?;

        if device.enable_noise_suppression() {
            log::debug!("noise suppression enabled");
        }
        if device.enable_automatic_gain() {
            log::debug!("automatic gain control enabled");
        }

        let mut encoder = match AacEncoder::configure(raw_encoder, self.config.read_buffer_size) {
            Ok(encoder) => encoder,
            Err(e) => {
                device.release();
                return Err(e);
            }
        };

        let mut writer = AdtsWriter::new(self.config.output_path.clone());
        if let Err(e) = writer.open() {
            encoder.release();
            device.release();
            return Err(e);
        }

        if let Err(e) = encoder.start() {
            encoder.release();
            device.release();
            return Err(e);
        }

        if let Err(e) = device.start() {
            encoder.stop();
            encoder.release();
            device.release();
            return Err(e);
        }

        self.meters.lock().state = RecorderState::Recording;
        self.spawn_loop(Pipeline {
            device,
            encoder,
            writer,
            waveform: WaveformSampler::new(self.listener.clone()),
            block: vec![0u8; self.config.read_buffer_size],
        });
        Ok(())
    }

    /// Pause capture. The loop observes the cleared run flag as soon as
    /// its current read returns; encoder and output stream stay alive.
    pub fn pause(&mut self) -> Result<(), RecorderError> {
        {
            let mut m = self.meters.lock();
            if !m.state.is_recording() {
                return Err(RecorderError::InvalidState {
                    operation: "pause",
                    state: m.state,
                });
            }
            m.state = RecorderState::Paused;
            m.power = PowerReading::silence();
        }

        let mut pipeline = self.reclaim_pipeline();
        pipeline.device.stop();
        self.parked = Some(pipeline);
        Ok(())
    }

    /// Resume capture after pause. No encoded byte is dropped or
    /// duplicated across pause cycles: the encoder stream was never
    /// terminated and the writer position never moved.
    pub fn resume(&mut self) -> Result<(), RecorderError> {
        {
            let m = self.meters.lock();
            if !m.state.is_paused() {
                return Err(RecorderError::InvalidState {
                    operation: "resume",
                    state: m.state,
                });
            }
        }

        let mut pipeline = self
            .parked
            .take()
            .expect("paused session holds a parked pipeline");
        if let Err(e) = pipeline.device.start() {
            self.parked = Some(pipeline);
            return Err(e);
        }

        self.meters.lock().state = RecorderState::Recording;
        self.spawn_loop(pipeline);
        Ok(())
    }

    /// Stop the session, release all resources, and return the final
    /// result snapshot. Output-stream close failures are logged, not
    /// fatal: the bytes already written remain a valid ADTS stream.
    pub fn stop(&mut self) -> Result<RecordingResult, RecorderError> {
        let was_recording = {
            let m = self.meters.lock();
            match m.state {
                RecorderState::Recording => true,
                RecorderState::Paused => false,
                state => {
                    return Err(RecorderError::InvalidState {
                        operation: "stop",
                        state,
                    })
                }
            }
        };

        // Mark end-of-stream before the loop winds down so the final fed
        // block carries the flag. Pause never sets this.
        self.finishing.store(true, Ordering::SeqCst);

        let mut pipeline = self.reclaim_pipeline();
        if was_recording {
            pipeline.device.stop();
        }

        let result = {
            let m = self.meters.lock();
            RecordingResult {
                duration_ms: duration_ms_for(m.data_size),
                path: self.config.output_path.to_string_lossy().into_owned(),
                audio_format: self.config.audio_format.clone(),
                peak_power: m.power.peak_db,
                average_power: m.power.average_db,
                is_metering_enabled: true,
                status: RecorderState::Stopped.as_str().into(),
            }
        };

        {
            let mut m = self.meters.lock();
            m.state = RecorderState::Stopped;
            m.power = PowerReading::silence();
            m.data_size = 0;
        }

        pipeline.encoder.stop();
        pipeline.encoder.release();
        pipeline.device.release();
        if let Err(e) = pipeline.writer.close() {
            log::error!("failed to close output stream: {}", e);
        }

        Ok(result)
    }

    fn spawn_loop(&mut self, pipeline: Pipeline<D, E>) {
        self.running.store(true, Ordering::SeqCst);

        let running = Arc::clone(&self.running);
        let finishing = Arc::clone(&self.finishing);
        let meters = Arc::clone(&self.meters);

        let handle = thread::Builder::new()
            .name("aac-capture".into())
            .spawn(move || run_loop(pipeline, running, finishing, meters))
            .expect("failed to spawn capture thread");

        self.worker = Some(handle);
    }

    /// Stop the loop and take the pipeline back. Waits for the in-flight
    /// read to complete; its data is processed and counted before the
    /// loop hands the pipeline over.
    fn reclaim_pipeline(&mut self) -> Pipeline<D, E> {
        self.running.store(false, Ordering::SeqCst);
        if let Some(handle) = self.worker.take() {
            return handle.join().expect("capture thread panicked");
        }
        self.parked.take().expect("no active pipeline")
    }
}

/// Millisecond duration from the captured byte count: whole seconds at
/// 16-bit mono, times 1000.
fn duration_ms_for(data_size: u64) -> u64 {
    let bytes_per_second = SAMPLE_RATE as u64 * 2 * CHANNELS as u64;
    (data_size / bytes_per_second) * 1000
}

/// The capture/encode loop. One iteration: blocking read, meter, waveform,
/// feed, drain, write — strictly before the next read. All per-iteration
/// anomalies are absorbed and logged; the loop only exits when the run
/// flag clears.
fn run_loop<D: CaptureSource, E: StreamEncoder>(
    mut pipeline: Pipeline<D, E>,
    running: Arc<AtomicBool>,
    finishing: Arc<AtomicBool>,
    meters: Arc<Mutex<Meters>>,
) -> Pipeline<D, E> {
    loop {
        let outcome = pipeline.device.read(&mut pipeline.block);

        // The full block is counted and metered regardless of the read
        // outcome; only the encode step depends on it.
        {
            let mut m = meters.lock();
            let state = m.state;
            m.data_size += pipeline.block.len() as u64;
            m.power = power_meter::measure(&pipeline.block, state);
        }
        pipeline.waveform.push(&pipeline.block);

        let well_formed = match outcome {
            ReadOutcome::Data(n) if n == pipeline.block.len() => {
                let is_final = finishing.load(Ordering::SeqCst);
                pipeline.encoder.feed(&pipeline.block, is_final)
            }
            ReadOutcome::Data(n) => {
                log::debug!("short device read: {} of {} bytes", n, pipeline.block.len());
                false
            }
            ReadOutcome::BadValue => {
                log::warn!("device read failed: bad value");
                false
            }
            ReadOutcome::InvalidOperation => {
                log::warn!("device read failed: invalid operation");
                false
            }
        };

        if well_formed {
            for frame in pipeline.encoder.drain() {
                if frame.is_config {
                    continue;
                }
                if let Err(e) = pipeline.writer.write_frame(&frame.data) {
                    log::error!("failed to write encoded frame: {}", e);
                }
            }
        }

        if !running.load(Ordering::SeqCst) {
            return pipeline;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::adts;
    use crate::traits::stream_encoder::{EncoderSetup, OutputPoll, OutputSlotInfo};
    use std::collections::VecDeque;
    use std::fs;
    use std::path::PathBuf;
    use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
    use std::time::{Duration, Instant};

    const BLOCK_SIZE: usize = 8;

    fn temp_file_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("aac_session_test_{}", name))
    }

    fn test_config(path: &PathBuf) -> RecorderConfig {
        let mut config = RecorderConfig::new(SAMPLE_RATE, path.clone());
        config.read_buffer_size = BLOCK_SIZE;
        config
    }

    // --- Scripted capture device -------------------------------------

    #[derive(Default)]
    struct DeviceFlags {
        opened: bool,
        started: u32,
        stopped: u32,
        released: bool,
        fail_open: bool,
    }

    struct ScriptedCapture {
        rx: Receiver<Vec<u8>>,
        flags: Arc<Mutex<DeviceFlags>>,
    }

    impl ScriptedCapture {
        fn new(fail_open: bool) -> (Self, Sender<Vec<u8>>, Arc<Mutex<DeviceFlags>>) {
            let (tx, rx) = mpsc::channel();
            let flags = Arc::new(Mutex::new(DeviceFlags {
                fail_open,
                ..Default::default()
            }));
            (
                Self {
                    rx,
                    flags: Arc::clone(&flags),
                },
                tx,
                flags,
            )
        }
    }

    impl CaptureSource for ScriptedCapture {
        fn open(&mut self, _params: &CaptureParams) -> Result<(), RecorderError> {
            let mut flags = self.flags.lock();
            if flags.fail_open {
                return Err(RecorderError::DeviceInit("scripted open failure".into()));
            }
            flags.opened = true;
            Ok(())
        }

        fn start(&mut self) -> Result<(), RecorderError> {
            self.flags.lock().started += 1;
            Ok(())
        }

        fn stop(&mut self) {
            self.flags.lock().stopped += 1;
        }

        fn release(&mut self) {
            self.flags.lock().released = true;
        }

        // A blocking device read that always returns eventually: either a
        // scripted block, or a short (empty) read when nothing arrived.
        fn read(&mut self, buf: &mut [u8]) -> ReadOutcome {
            match self.rx.recv_timeout(Duration::from_millis(5)) {
                Ok(block) => {
                    buf[..block.len()].copy_from_slice(&block);
                    ReadOutcome::Data(block.len())
                }
                Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => {
                    buf.fill(0);
                    ReadOutcome::Data(0)
                }
            }
        }
    }

    // --- Fake slot encoder -------------------------------------------

    /// Passes each input through as one output frame tagged with a
    /// sequence number, preceded by a config frame and a slots-changed
    /// event, so the written ADTS stream can be parsed back and checked
    /// for order, duplicates, and gaps.
    #[derive(Default)]
    struct FakeEncoderState {
        configured: bool,
        fail_configure: bool,
        started: bool,
        stopped: bool,
        released: bool,
        seq: u32,
        pending: VecDeque<(Vec<u8>, bool)>,
        slots_changed: bool,
    }

    struct FakeEncoder {
        state: Arc<Mutex<FakeEncoderState>>,
        // The dequeued slot buffer lives on the encoder itself so
        // `output_slot` can hand out a plain borrow.
        current: Option<Vec<u8>>,
    }

    impl FakeEncoder {
        fn new(fail_configure: bool) -> (Self, Arc<Mutex<FakeEncoderState>>) {
            let state = Arc::new(Mutex::new(FakeEncoderState {
                fail_configure,
                ..Default::default()
            }));
            (
                Self {
                    state: Arc::clone(&state),
                    current: None,
                },
                state,
            )
        }
    }

    impl StreamEncoder for FakeEncoder {
        fn configure(&mut self, _setup: &EncoderSetup) -> Result<(), RecorderError> {
            let mut state = self.state.lock();
            if state.fail_configure {
                return Err(RecorderError::EncoderInit("scripted configure failure".into()));
            }
            state.configured = true;
            Ok(())
        }

        fn start(&mut self) -> Result<(), RecorderError> {
            self.state.lock().started = true;
            Ok(())
        }

        fn stop(&mut self) {
            self.state.lock().stopped = true;
        }

        fn release(&mut self) {
            self.state.lock().released = true;
        }

        fn dequeue_input_slot(&mut self, _timeout_micros: u64) -> Option<usize> {
            Some(0)
        }

        fn queue_input(&mut self, _slot: usize, _data: &[u8], _end_of_stream: bool) {
            let mut state = self.state.lock();
            if state.seq == 0 {
                state.pending.push_back((vec![0xDE, 0xC0], true));
                state.slots_changed = true;
            }
            let seq = state.seq;
            state.pending.push_back((seq.to_le_bytes().to_vec(), false));
            state.seq += 1;
        }

        fn dequeue_output_slot(&mut self, _timeout_micros: u64) -> OutputPoll {
            let mut state = self.state.lock();
            if state.slots_changed {
                state.slots_changed = false;
                return OutputPoll::SlotsChanged;
            }
            match state.pending.pop_front() {
                Some((payload, is_config)) => {
                    let info = OutputSlotInfo {
                        offset: 0,
                        size: payload.len(),
                        is_config,
                    };
                    self.current = Some(payload);
                    OutputPoll::Frame { slot: 0, info }
                }
                None => OutputPoll::Empty,
            }
        }

        fn output_slot(&self, _slot: usize) -> &[u8] {
            self.current.as_deref().unwrap()
        }

        fn release_output_slot(&mut self, _slot: usize) {
            self.current = None;
        }

        fn refresh_output_slots(&mut self) {}
    }

    // --- Helpers ------------------------------------------------------

    fn wait_until(mut cond: impl FnMut() -> bool) {
        let deadline = Instant::now() + Duration::from_secs(2);
        while !cond() {
            assert!(Instant::now() < deadline, "timed out waiting for condition");
            thread::sleep(Duration::from_millis(2));
        }
    }

    /// Parse an ADTS stream into frame payloads.
    fn parse_adts(data: &[u8]) -> Vec<Vec<u8>> {
        let mut frames = Vec::new();
        let mut pos = 0;
        while pos < data.len() {
            let header: [u8; 7] = data[pos..pos + 7].try_into().unwrap();
            assert_eq!(header[0], 0xFF);
            assert_eq!(header[1], 0xF1);
            let frame_length = adts::frame_length(&header);
            frames.push(data[pos + 7..pos + frame_length].to_vec());
            pos += frame_length;
        }
        frames
    }

    fn frame_seqs(path: &PathBuf) -> Vec<u32> {
        let data = fs::read(path).unwrap();
        parse_adts(&data)
            .iter()
            .map(|payload| u32::from_le_bytes(payload.as_slice().try_into().unwrap()))
            .collect()
    }

    fn block(fill: u8) -> Vec<u8> {
        vec![fill; BLOCK_SIZE]
    }

    // --- Tests --------------------------------------------------------

    #[test]
    fn records_blocks_and_stops_with_result() {
        let path = temp_file_path("basic.aac");
        let (device, tx, device_flags) = ScriptedCapture::new(false);
        let (encoder, encoder_state) = FakeEncoder::new(false);
        let mut session = RecordingSession::new(test_config(&path), device, encoder);

        session.start().unwrap();
        assert!(session.state().is_recording());

        for i in 0..3u8 {
            tx.send(block(i + 1)).unwrap();
        }
        wait_until(|| encoder_state.lock().seq == 3);

        let result = session.stop().unwrap();
        assert_eq!(result.status, "stopped");
        assert_eq!(result.audio_format, "aac");
        assert_eq!(result.path, path.to_string_lossy());
        assert!(result.is_metering_enabled);
        assert!(session.state().is_terminal());

        // Config frame discarded; data frames framed in emission order.
        assert_eq!(frame_seqs(&path), vec![0, 1, 2]);

        // All resources released, stream closed.
        let flags = device_flags.lock();
        assert!(flags.released);
        assert!(flags.stopped >= 1);
        let enc = encoder_state.lock();
        assert!(enc.stopped && enc.released);

        fs::remove_file(&path).ok();
    }

    #[test]
    fn pause_resume_preserves_every_frame_once_in_order() {
        let path = temp_file_path("pause_resume.aac");
        let (device, tx, device_flags) = ScriptedCapture::new(false);
        let (encoder, encoder_state) = FakeEncoder::new(false);
        let mut session = RecordingSession::new(test_config(&path), device, encoder);

        session.start().unwrap();
        for i in 0..3u8 {
            tx.send(block(i + 1)).unwrap();
        }
        wait_until(|| encoder_state.lock().seq == 3);

        session.pause().unwrap();
        assert!(session.state().is_paused());
        assert_eq!(session.current_power(), PowerReading::silence());
        assert!(device_flags.lock().stopped >= 1);
        assert!(!encoder_state.lock().stopped); // encoder survives pause

        // A second pause cycle.
        session.resume().unwrap();
        assert!(session.state().is_recording());
        for i in 3..5u8 {
            tx.send(block(i + 1)).unwrap();
        }
        wait_until(|| encoder_state.lock().seq == 5);
        session.pause().unwrap();
        session.resume().unwrap();

        tx.send(block(9)).unwrap();
        wait_until(|| encoder_state.lock().seq == 6);

        let result = session.stop().unwrap();
        assert_eq!(result.status, "stopped");

        // Every data frame from before, between, and after the pauses:
        // original emission order, no duplicates, no gaps.
        assert_eq!(frame_seqs(&path), vec![0, 1, 2, 3, 4, 5]);

        fs::remove_file(&path).ok();
    }

    #[test]
    fn stop_with_no_data_returns_floor_result() {
        let path = temp_file_path("empty.aac");
        let (device, _tx, _) = ScriptedCapture::new(false);
        let (encoder, _) = FakeEncoder::new(false);
        let mut session = RecordingSession::new(test_config(&path), device, encoder);

        session.start().unwrap();
        let result = session.stop().unwrap();

        assert_eq!(result.duration_ms, 0);
        assert_eq!(result.peak_power, -120.0);
        assert_eq!(result.average_power, -120.0);
        assert_eq!(result.status, "stopped");

        fs::remove_file(&path).ok();
    }

    #[test]
    fn start_failure_releases_partial_resources() {
        let path = temp_file_path("fail_start.aac");
        let (device, _tx, device_flags) = ScriptedCapture::new(false);
        let (encoder, encoder_state) = FakeEncoder::new(true);
        let mut session = RecordingSession::new(test_config(&path), device, encoder);

        let err = session.start().unwrap_err();
        assert!(matches!(err, RecorderError::EncoderInit(_)));

        // Device was opened, then released when the encoder failed.
        let flags = device_flags.lock();
        assert!(flags.opened && flags.released);
        assert!(!encoder_state.lock().configured);

        fs::remove_file(&path).ok();
    }

    #[test]
    fn device_open_failure_surfaces_from_start() {
        let path = temp_file_path("fail_open.aac");
        let (device, _tx, _) = ScriptedCapture::new(true);
        let (encoder, encoder_state) = FakeEncoder::new(false);
        let mut session = RecordingSession::new(test_config(&path), device, encoder);

        let err = session.start().unwrap_err();
        assert!(matches!(err, RecorderError::DeviceInit(_)));
        assert!(!encoder_state.lock().configured);
    }

    #[test]
    fn invalid_transitions_are_rejected() {
        let path = temp_file_path("transitions.aac");
        let (device, _tx, _) = ScriptedCapture::new(false);
        let (encoder, _) = FakeEncoder::new(false);
        let mut session = RecordingSession::new(test_config(&path), device, encoder);

        assert!(matches!(
            session.pause(),
            Err(RecorderError::InvalidState { operation: "pause", .. })
        ));
        assert!(matches!(
            session.resume(),
            Err(RecorderError::InvalidState { operation: "resume", .. })
        ));
        assert!(matches!(
            session.stop(),
            Err(RecorderError::InvalidState { operation: "stop", .. })
        ));

        session.start().unwrap();
        assert!(matches!(
            session.resume(),
            Err(RecorderError::InvalidState { operation: "resume", .. })
        ));
        assert!(matches!(
            session.start(),
            Err(RecorderError::InvalidState { operation: "start", .. })
        ));

        session.stop().unwrap();
        assert!(session.stop().is_err()); // terminal

        fs::remove_file(&path).ok();
    }

    #[test]
    fn waveform_listener_receives_full_snapshots() {
        struct Snapshots(Mutex<Vec<usize>>);
        impl WaveformListener for Snapshots {
            fn on_audio_data(&self, samples: &[f32]) {
                self.0.lock().push(samples.len());
            }
        }

        let path = temp_file_path("waveform.aac");
        let (device, tx, _) = ScriptedCapture::new(false);
        let (encoder, _) = FakeEncoder::new(false);

        // One block carries exactly the accumulator capacity.
        let mut config = test_config(&path);
        config.read_buffer_size = crate::models::config::SAMPLE_BUFFER_SIZE * 2;

        let mut session = RecordingSession::new(config.clone(), device, encoder);
        let snapshots = Arc::new(Snapshots(Mutex::new(Vec::new())));
        session.set_listener(snapshots.clone());

        session.start().unwrap();
        tx.send(vec![0x10; config.read_buffer_size]).unwrap();
        wait_until(|| !snapshots.0.lock().is_empty());
        session.stop().unwrap();

        assert_eq!(
            snapshots.0.lock()[0],
            crate::models::config::SAMPLE_BUFFER_SIZE
        );

        fs::remove_file(&path).ok();
    }

    #[test]
    fn duration_truncates_to_whole_seconds() {
        let bytes_per_second = SAMPLE_RATE as u64 * 2;

        assert_eq!(duration_ms_for(0), 0);
        assert_eq!(duration_ms_for(bytes_per_second - 1), 0);
        assert_eq!(duration_ms_for(bytes_per_second), 1000);
        assert_eq!(duration_ms_for(2 * bytes_per_second), 2000);
        // One extra byte never rounds up.
        assert_eq!(duration_ms_for(2 * bytes_per_second + 1), 2000);
    }
}
