// src/audio/cpal_backend.rs  -  cpal sine-wave tone generator
use anyhow::{anyhow, Context, Result};
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::{SampleFormat, Stream};
use super::ToneService;
use std::sync::{Arc, Mutex};
use std::time::Duration;

struct SharedState {
    /// Frames still to render for the current tone; 0 = silence
    remaining:   u64,
    frequency:   f32,
    volume:      f32,
    phase:       f32,
    sample_rate: f32,
}

pub struct CpalAudio {
    state:   Arc<Mutex<SharedState>>,
    device:  String,
    _stream: Stream,
}

impl CpalAudio {
    pub fn new(volume: f32) -> Result<Self> {
        let host   = cpal::default_host();
        let device = host.default_output_device()
            .ok_or_else(|| anyhow!("No audio output device found"))?;
        let name   = device.name().unwrap_or_else(|_| "default output".into());
        let config = device.default_output_config()
            .with_context(|| format!("Querying output config of {name}"))?;
        let sr = config.sample_rate().0 as f32;

        let state = Arc::new(Mutex::new(SharedState {
            remaining: 0,
            frequency: 0.0,
            volume,
            phase: 0.0,
            sample_rate: sr,
        }));

        let st = Arc::clone(&state);
        let stream = match config.sample_format() {
            SampleFormat::F32 => build_stream::<f32>(&device, &config.into(), st)?,
            SampleFormat::I16 => build_stream::<i16>(&device, &config.into(), st)?,
            SampleFormat::U16 => build_stream::<u16>(&device, &config.into(), st)?,
            other             => return Err(anyhow!("Unsupported sample format {other:?}")),
        };
        stream.play().context("Starting audio stream")?;
        Ok(Self { state, device: name, _stream: stream })
    }
}

fn build_stream<S>(
    device: &cpal::Device,
    config: &cpal::StreamConfig,
    state: Arc<Mutex<SharedState>>,
) -> Result<Stream>
where S: cpal::Sample + cpal::SizedSample + cpal::FromSample<f32>
{
    let ch = config.channels as usize;
    let stream = device.build_output_stream(
        config,
        move |data: &mut [S], _: &cpal::OutputCallbackInfo| {
            let mut s = state.lock().unwrap();
            let step = s.frequency / s.sample_rate;
            // Same sample on every channel: mono tone, stereo (or wider) frame
            for frame in data.chunks_mut(ch) {
                let sample = if s.remaining > 0 {
                    let v = (s.phase * 2.0 * std::f32::consts::PI).sin() * s.volume;
                    s.phase = (s.phase + step) % 1.0;
                    s.remaining -= 1;
                    v
                } else {
                    s.phase = 0.0;
                    0.0
                };
                let out = S::from_sample(sample);
                for smp in frame.iter_mut() { *smp = out; }
            }
        },
        |e| log::error!("[audio] stream error: {e}"),
        None,
    )?;
    Ok(stream)
}

impl ToneService for CpalAudio {
    fn emit_tone(&mut self, frequency_hz: u32, duration: Duration) -> Result<()> {
        let mut s = self.state.lock().map_err(|_| anyhow!("Audio state lock poisoned"))?;
        s.frequency = frequency_hz as f32;
        s.remaining = (duration.as_secs_f64() * s.sample_rate as f64).round() as u64;
        s.phase     = 0.0;
        Ok(())
    }

    fn name(&self) -> &str { &self.device }
}
