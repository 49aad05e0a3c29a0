//! OpenCL-Setup: Platform → Device → Context → Queue.

use opencl3::{
    command_queue::{CommandQueue, CL_QUEUE_PROFILING_ENABLE},
    context::Context,
    device::{Device, CL_DEVICE_TYPE_CPU, CL_DEVICE_TYPE_GPU},
    platform::{get_platforms, Platform},
};

use crate::ClError;

#[cfg(feature = "metrics")]
use crate::metrics::record;
#[cfg(feature = "metrics")]
use std::time::Instant;

/// Gebündelter OpenCL-Grundzustand.
///
/// Die Feld-Reihenfolge legt die Freigabe-Reihenfolge fest: Queue vor
/// Context vor Device, also exakt umgekehrt zur Erzeugung.
pub struct ClSetup {
    pub queue: CommandQueue,
    pub context: Context,
    pub device: Device,
}

impl ClSetup {
    /// erste Platform, GPU-Device (Fallback CPU), Context und Queue
    pub fn new() -> Result<Self, ClError> {
        #[cfg(feature = "metrics")]
        let t = Instant::now();

        let platform = get_platforms()?
            .into_iter()
            .next()
            .ok_or(ClError::NoPlatform)?;
        let device = select_device(&platform)?;
        let context = Context::from_device(&device)?;
        let queue = CommandQueue::create(&context, device.id(), CL_QUEUE_PROFILING_ENABLE)?;

        #[cfg(feature = "metrics")]
        record("ClSetup::new", t);

        Ok(Self { queue, context, device })
    }

    pub fn device_name(&self) -> Result<String, ClError> {
        Ok(self.device.name()?)
    }
}

/// GPU zuerst, sonst CPU.
fn select_device(platform: &Platform) -> Result<Device, ClError> {
    match platform.get_devices(CL_DEVICE_TYPE_GPU) {
        Ok(ids) if !ids.is_empty() => return Ok(Device::new(ids[0])),
        _ => eprintln!("no GPU device, trying CPU"),
    }

    let ids = platform.get_devices(CL_DEVICE_TYPE_CPU).unwrap_or_default();
    ids.first().copied().map(Device::new).ok_or(ClError::NoDevice)
}
