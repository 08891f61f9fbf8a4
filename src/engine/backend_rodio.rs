use super::{EventHub, MediaEngine, MediaEvent, Subscription, SubscriptionId};
use crate::{PlaybackError, is_remote_locator, strip_file_scheme};
use anyhow::{Context, Result};
use lofty::file::AudioFile;
use rodio::{Decoder, OutputStream, OutputStreamBuilder, Sink};
use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
    sync::{Arc, Mutex, MutexGuard, PoisonError},
    thread,
};

/// Local-file playback through the default audio output.
///
/// Loading only reads metadata (on a helper thread). The file is decoded
/// and handed to the sink the first time `play` is called.
pub struct RodioEngine {
    sink: Sink,
    hub: Arc<Mutex<EventHub>>,
    locator: Option<String>,
    decoded: bool,
    _stream: OutputStream,
}

impl RodioEngine {
    pub fn new() -> Result<Self> {
        let mut _stream = OutputStreamBuilder::open_default_stream()
            .context("No audio output device is available")?;
        _stream.log_on_drop(false);

        let sink = Sink::connect_new(_stream.mixer());
        sink.pause();

        Ok(RodioEngine {
            sink,
            hub: Arc::new(Mutex::new(EventHub::new())),
            locator: None,
            decoded: false,
            _stream,
        })
    }

    fn hub(&self) -> MutexGuard<'_, EventHub> {
        lock_hub(&self.hub)
    }

    fn broadcast(&self, event: MediaEvent) {
        self.hub().broadcast(event);
    }

    fn append_source(&mut self) -> std::result::Result<(), PlaybackError> {
        let path = playable_path(self.locator.as_deref())?;
        let source = decode(&path).map_err(|e| {
            PlaybackError::load_failure(self.locator.as_deref().unwrap_or_default(), e)
        })?;
        self.sink.append(source);
        self.decoded = true;

        Ok(())
    }
}

impl MediaEngine for RodioEngine {
    fn load(&mut self, source: &str) {
        self.sink.clear();
        self.decoded = false;
        self.locator = Some(source.to_string());

        let path = match resolve_locator(source) {
            Ok(path) => path,
            Err(e) => {
                self.broadcast(MediaEvent::Failed(e));
                return;
            }
        };

        let hub = Arc::clone(&self.hub);
        let locator = source.to_string();

        thread::spawn(move || {
            let event = match read_duration(&path) {
                Ok(duration) => {
                    tracing::debug!(%locator, duration, "metadata read");
                    MediaEvent::MetadataReady { duration }
                }
                Err(e) => {
                    tracing::warn!(%locator, "metadata read failed: {e:#}");
                    MediaEvent::Failed(PlaybackError::load_failure(&locator, format!("{e:#}")))
                }
            };

            lock_hub(&hub).broadcast(event);
        });
    }

    fn play(&mut self) {
        if !self.decoded {
            if let Err(e) = self.append_source() {
                tracing::warn!("{e}");
                self.broadcast(MediaEvent::Failed(e));
                return;
            }
        }
        self.sink.play();
    }

    fn pause(&mut self) {
        self.sink.pause();
    }

    fn position(&self) -> f64 {
        self.sink.get_pos().as_secs_f64()
    }

    fn subscribe(&mut self) -> Subscription {
        self.hub().subscribe()
    }

    fn unsubscribe(&mut self, id: SubscriptionId) {
        self.hub().unsubscribe(id);
    }
}

// A panicking metadata thread leaves the subscriber list itself intact
fn lock_hub(hub: &Mutex<EventHub>) -> MutexGuard<'_, EventHub> {
    hub.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Map a locator onto a local path. Plain paths and `file://` URLs are
/// accepted; network locators are not.
fn resolve_locator(locator: &str) -> std::result::Result<PathBuf, PlaybackError> {
    if is_remote_locator(locator) {
        return Err(PlaybackError::load_failure(
            locator,
            "remote sources are not supported",
        ));
    }
    Ok(PathBuf::from(strip_file_scheme(locator)))
}

/// Where `play` should decode from. A load that never happened is a
/// rejection; a load of an unusable locator stays a load failure.
fn playable_path(locator: Option<&str>) -> std::result::Result<PathBuf, PlaybackError> {
    match locator {
        Some(locator) => resolve_locator(locator),
        None => Err(PlaybackError::rejected("no media has been loaded")),
    }
}

fn read_duration(path: &Path) -> Result<f64> {
    let tagged = lofty::read_from_path(path)
        .with_context(|| format!("Could not read {}", path.display()))?;

    Ok(tagged.properties().duration().as_secs_f64())
}

fn decode(path: &Path) -> Result<Decoder<BufReader<File>>> {
    let file = File::open(path)?;
    let len = file.metadata()?.len();

    let mut builder = Decoder::builder()
        .with_data(BufReader::new(file))
        .with_byte_len(len);

    if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
        let hint = match ext {
            "adif" | "adts" => "aac",
            "caf" => "audio/x-caf",
            "m4a" | "m4b" | "m4p" | "m4r" | "mp4" => "audio/mp4",
            "bit" | "mpga" => "mp3",
            "mka" | "mkv" => "audio/matroska",
            "oga" | "ogm" | "ogv" | "ogx" | "spx" => "audio/ogg",
            "wave" => "wav",
            _ => ext,
        };
        builder = builder.with_hint(hint);
    }

    Ok(builder.build()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    /// A mono 16-bit PCM WAV of `secs` seconds of silence.
    fn silent_wav(secs: u32) -> tempfile::NamedTempFile {
        const RATE: u32 = 8000;
        let data_len = RATE * 2 * secs;

        let mut bytes = Vec::with_capacity(44 + data_len as usize);
        bytes.extend_from_slice(b"RIFF");
        bytes.extend_from_slice(&(36 + data_len).to_le_bytes());
        bytes.extend_from_slice(b"WAVEfmt ");
        bytes.extend_from_slice(&16u32.to_le_bytes());
        bytes.extend_from_slice(&1u16.to_le_bytes()); // PCM
        bytes.extend_from_slice(&1u16.to_le_bytes()); // mono
        bytes.extend_from_slice(&RATE.to_le_bytes());
        bytes.extend_from_slice(&(RATE * 2).to_le_bytes());
        bytes.extend_from_slice(&2u16.to_le_bytes());
        bytes.extend_from_slice(&16u16.to_le_bytes());
        bytes.extend_from_slice(b"data");
        bytes.extend_from_slice(&data_len.to_le_bytes());
        bytes.resize(44 + data_len as usize, 0);

        let mut file = tempfile::Builder::new().suffix(".wav").tempfile().unwrap();
        file.write_all(&bytes).unwrap();
        file.flush().unwrap();
        file
    }

    fn text_file() -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".mp3").tempfile().unwrap();
        writeln!(file, "this is not audio").unwrap();
        file
    }

    #[test]
    fn plain_paths_and_file_urls_resolve() {
        assert_eq!(
            resolve_locator("music/a.flac").unwrap(),
            PathBuf::from("music/a.flac")
        );
        assert_eq!(
            resolve_locator("file:///music/a.flac").unwrap(),
            PathBuf::from("/music/a.flac")
        );
    }

    #[test]
    fn remote_locators_are_load_failures() {
        assert_eq!(
            resolve_locator("https://example.com/a.mp3"),
            Err(PlaybackError::load_failure(
                "https://example.com/a.mp3",
                "remote sources are not supported"
            ))
        );
    }

    #[test]
    fn retrying_a_remote_source_keeps_the_load_failure() {
        let err = playable_path(Some("https://example.com/a.mp3")).unwrap_err();
        assert!(matches!(err, PlaybackError::MediaLoadFailure { .. }));
    }

    #[test]
    fn play_without_load_is_rejected() {
        let err = playable_path(None).unwrap_err();
        assert!(matches!(err, PlaybackError::PlayRejected { .. }));
    }

    #[test]
    fn missing_file_fails_metadata_and_decode() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("gone.mp3");

        assert!(read_duration(&missing).is_err());
        assert!(decode(&missing).is_err());
    }

    #[test]
    fn non_audio_file_fails_metadata_and_decode() {
        let file = text_file();

        assert!(read_duration(file.path()).is_err());
        assert!(decode(file.path()).is_err());
    }

    #[test]
    fn reads_wav_duration() {
        let file = silent_wav(2);
        let duration = read_duration(file.path()).unwrap();

        assert!((duration - 2.0).abs() < 0.01, "{duration}");
    }

    #[test]
    fn poisoned_hub_still_delivers_events() {
        let hub = Arc::new(Mutex::new(EventHub::new()));
        let sub = lock_hub(&hub).subscribe();

        let worker = Arc::clone(&hub);
        let _ = thread::spawn(move || {
            let _guard = worker.lock().unwrap();
            panic!("metadata thread died");
        })
        .join();
        assert!(hub.is_poisoned());

        lock_hub(&hub).broadcast(MediaEvent::MetadataReady { duration: 1.0 });

        assert_eq!(sub.poll_events().len(), 1);
        assert_eq!(lock_hub(&hub).subscriber_count(), 1);
    }
}
