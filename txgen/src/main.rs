//! Transmit Signal Generator Application
//!
//! Generates a baseband waveform, encodes it to the hardware fixed-point
//! format, and loads it into the SDR replay buffer for continuous
//! transmission from one or two antennas.

use anyhow::Result;
use clap::Parser;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use common::types::TxAntenna;
use radio::device::{SdrDevice, SimulatedSdr, TxChannelConfig};
use radio::replay::ReplayWriter;
use radio::sensors;
use waveform::{to_fixed_point, WaveformSynthesizer};

/// Transmit signal generator
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Serial number of the device
    #[arg(long, default_value = "")]
    serial: String,

    /// TX sample rate in samples/second
    #[arg(long, default_value_t = 5e6)]
    rate: f64,

    /// TX digital amplitude scale
    #[arg(long, default_value_t = 1.0)]
    ampl: f32,

    /// TX antenna (A, B, or AB)
    #[arg(long, default_value = "A")]
    ant: String,

    /// TX gain in dB
    #[arg(long, default_value_t = -5.0)]
    gain: f32,

    /// TX RF frequency in Hz
    #[arg(long, default_value_t = 2.6e9)]
    freq: f64,

    /// Baseband mixer frequency in Hz
    #[arg(long, default_value_t = 0.0)]
    bbfreq: f64,

    /// Number of samples to generate
    #[arg(long, default_value_t = 1024)]
    num_samps: usize,

    /// Signal type: LTE/LTS/STS/SINE
    #[arg(long, default_value = "SINE")]
    sig_type: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&args.log_level));
    fmt().with_env_filter(env_filter).with_target(true).init();

    let antenna: TxAntenna = args.ant.parse()?;

    info!("========== TX PARAMETERS =========");
    info!("Transmitting {} signal from board {}", args.sig_type, args.serial);
    info!("Sample Rate (sps): {}", args.rate);
    info!("Antenna: {}", antenna);
    info!("Tx Gain (dB): {}", args.gain);
    info!("Frequency (Hz): {}", args.freq);
    info!("Baseband Freq. (Hz): {}", args.bbfreq);
    info!("Number of Samples: {}", args.num_samps);
    info!("==================================");

    // Acquire the device handle. The simulated driver stands in for the
    // vendor driver; it exposes the same replay-buffer surface.
    let device: Arc<dyn SdrDevice> = Arc::new(SimulatedSdr::new(&args.serial));
    let hw = device.hardware_info().await;
    info!("Device front end: {}", hw.frontend);

    // Front-end settings for every active channel
    let channel_config = TxChannelConfig {
        frequency_hz: args.freq + args.bbfreq,
        baseband_frequency_hz: args.bbfreq,
        sample_rate: args.rate,
        gain_db: args.gain,
    };
    for &channel in antenna.channels() {
        device.configure_tx_channel(channel, &channel_config).await?;
    }

    // Generate the TX signal and encode it for the replay buffer
    let synthesizer = WaveformSynthesizer::new(args.rate, args.ampl)?;
    let samples = synthesizer.synthesize_named(&args.sig_type, args.num_samps)?;
    let words = to_fixed_point(&samples);
    info!(
        "Generated {} samples ({} replay words)",
        samples.len(),
        words.len()
    );

    // Load the replay banks and start transmission
    ReplayWriter::new(device.as_ref())
        .load_and_start(antenna, &words)
        .await?;

    // Background sensor reporting until shutdown
    let (stop_tx, stop_rx) = watch::channel(false);
    let sensor_task = tokio::spawn(sensors::poll_loop(device.clone(), stop_rx));

    info!("ctrl-c to stop ...");
    tokio::signal::ctrl_c().await?;

    // Orderly shutdown: stop the poller, then the replay
    let _ = stop_tx.send(true);
    let _ = sensor_task.await;
    device.stop_replay().await?;
    info!("Transmission stopped");

    Ok(())
}
