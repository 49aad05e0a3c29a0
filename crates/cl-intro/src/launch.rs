//! Kernel-Build und Launch für die Vektoraddition.

use opencl3::{
    command_queue::CommandQueue,
    context::Context,
    event::Event,
    kernel::Kernel,
    program::Program,
};

use crate::buffer::{GpuBuffer, InFlight, Ready};
use crate::ClError;

#[cfg(feature = "metrics")]
use crate::metrics::record;
#[cfg(feature = "metrics")]
use std::time::Instant;

pub const KERNEL_NAME: &str = "vec_add";
pub const KERNEL_SRC: &str = include_str!("vec_add.cl");

/// Kompiliertes `vec_add`-Programm samt Kernel-Handle.
///
/// Feld-Reihenfolge: Kernel wird vor seinem Program freigegeben.
pub struct VecAdd {
    kernel: Kernel,
    // hält das Program bis nach dem Kernel am Leben
    _program: Program,
}

impl VecAdd {
    /// baut das Programm aus `KERNEL_SRC`; bei Fehlschlag trägt der
    /// Fehler das Build-Log
    pub fn build(ctx: &Context) -> Result<Self, ClError> {
        #[cfg(feature = "metrics")]
        let t = Instant::now();

        let program = Program::create_and_build_from_source(ctx, KERNEL_SRC, "")
            .map_err(|log| ClError::Build(log.to_string()))?;
        let kernel = Kernel::create(&program, KERNEL_NAME)?;

        #[cfg(feature = "metrics")]
        record("VecAdd::build", t);

        Ok(Self { kernel, _program: program })
    }

    /// Argument-Indizes 0/1/2 wie in der Kernel-Signatur
    pub fn set_args(
        &self,
        a: &GpuBuffer<f32, Ready>,
        b: &GpuBuffer<f32, Ready>,
        out: &mut GpuBuffer<f32, InFlight>,
    ) -> Result<(), ClError> {
        self.kernel.set_arg(0, a.raw())?;
        self.kernel.set_arg(1, b.raw())?;
        self.kernel.set_arg(2, out.raw_mut())?;
        Ok(())
    }

    /// eine 1-D-NDRange über `n` Elemente, keine lokale Work-Size
    pub fn enqueue(&self, queue: &CommandQueue, n: usize) -> Result<Event, ClError> {
        #[cfg(feature = "metrics")]
        let t = Instant::now();

        let global = [n, 1, 1];
        let evt = queue.enqueue_nd_range_kernel(
            self.kernel.get(),
            1,
            std::ptr::null(),
            global.as_ptr(),
            std::ptr::null(),
            &[],
        )?;

        #[cfg(feature = "metrics")]
        record("enqueue_kernel", t);

        Ok(evt)
    }
}
