//! Front-End Sensor Polling
//!
//! Background temperature reporting for CBRS front ends. Shutdown is
//! signaled through a `watch` channel passed in by the caller; there is no
//! process-global run flag or device handle.

use crate::device::SdrDevice;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tracing::{info, warn};

/// Interval between sensor sweeps
pub const POLL_INTERVAL: Duration = Duration::from_secs(2);

/// Sensors reported on each sweep
const SENSORS: [&str; 5] = ["LMS7_TEMP", "ZYNQ_TEMP", "FE_TEMP", "TX0_TEMP", "TX1_TEMP"];

/// Periodically log front-end sensor readings until `stop` flips to true.
///
/// Returns immediately when the device does not report a CBRS front end,
/// matching the hardware the temperature sensors exist on.
pub async fn poll_loop(device: Arc<dyn SdrDevice>, mut stop: watch::Receiver<bool>) {
    let hw = device.hardware_info().await;
    if !hw.has_cbrs_frontend() {
        info!(
            "Front end {:?} has no temperature sensors, skipping sensor polling",
            hw.frontend
        );
        return;
    }

    loop {
        info!("{}", "-".repeat(80));
        for sensor in SENSORS {
            match device.read_sensor(sensor).await {
                Ok(value) => info!("{}: {}", sensor, value),
                Err(e) => warn!("Failed to read {}: {}", sensor, e),
            }
        }

        tokio::select! {
            _ = tokio::time::sleep(POLL_INTERVAL) => {}
            changed = stop.changed() => {
                if changed.is_err() || *stop.borrow() {
                    break;
                }
            }
        }
    }

    info!("Sensor polling stopped");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::SimulatedSdr;
    use std::time::Duration;

    #[tokio::test(start_paused = true)]
    async fn test_poll_loop_stops_on_signal() {
        let device: Arc<dyn SdrDevice> = Arc::new(SimulatedSdr::new("X"));
        let (stop_tx, stop_rx) = watch::channel(false);

        let handle = tokio::spawn(poll_loop(device, stop_rx));
        tokio::time::sleep(Duration::from_secs(5)).await;
        stop_tx.send(true).unwrap();

        tokio::time::timeout(Duration::from_secs(10), handle)
            .await
            .expect("poll loop did not stop")
            .unwrap();
    }

    #[tokio::test]
    async fn test_poll_loop_skips_non_cbrs_frontend() {
        let device: Arc<dyn SdrDevice> = Arc::new(SimulatedSdr::with_frontend(
            "X",
            "DEV",
            SimulatedSdr::DEFAULT_CAPACITY,
        ));
        let (_stop_tx, stop_rx) = watch::channel(false);

        // must return on its own without a stop signal
        tokio::time::timeout(Duration::from_secs(1), poll_loop(device, stop_rx))
            .await
            .expect("poll loop should exit immediately");
    }
}
