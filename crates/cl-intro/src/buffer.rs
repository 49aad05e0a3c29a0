//! Typ-State-Wrapper um OpenCL-Buffer.
//!
//! `Queued` → frisch angelegt, Inhalt undefiniert.
//! `InFlight` → ein Transfer oder Kernel arbeitet gerade auf dem Buffer.
//! `Ready` → Inhalt definiert, als Kernel-Argument oder Lesequelle nutzbar.

use bytemuck::Pod;
use opencl3::{
    command_queue::CommandQueue,
    context::Context,
    event::Event,
    memory::{Buffer, CL_MEM_READ_ONLY, CL_MEM_READ_WRITE},
    types::{cl_mem_flags, CL_NON_BLOCKING},
};

use std::{marker::PhantomData, ptr};

use crate::ClError;

#[cfg(feature = "metrics")]
use crate::metrics::{record, ALLOCS, ALLOC_BYTES};
#[cfg(feature = "metrics")]
use std::sync::atomic::Ordering;
#[cfg(feature = "metrics")]
use std::time::Instant;

// ─── Typ-State-Marker ────────────────────────────────────────────────
mod sealed {
    pub trait Sealed {}
}

pub trait State: sealed::Sealed {}

pub struct Queued;
impl sealed::Sealed for Queued {}
impl State for Queued {}

pub struct InFlight;
impl sealed::Sealed for InFlight {}
impl State for InFlight {}

pub struct Ready;
impl sealed::Sealed for Ready {}
impl State for Ready {}

// ─── GPU-Buffer-Wrapper ──────────────────────────────────────────────
pub struct GpuBuffer<T: Pod, S: State> {
    buf: Buffer<T>,
    len: usize,
    _state: PhantomData<S>,
}

// ── Queued ───────────────────────────────────────────────────────────
impl<T: Pod> GpuBuffer<T, Queued> {
    /// legt ein neues Device-Buffer an, Inhalt noch **nicht** definiert
    pub fn new(ctx: &Context, len: usize) -> Result<Self, ClError> {
        Self::with_flags(ctx, CL_MEM_READ_WRITE, len)
    }

    /// wie `new`, aber mit expliziten `cl_mem_flags`
    pub fn with_flags(ctx: &Context, flags: cl_mem_flags, len: usize) -> Result<Self, ClError> {
        if len == 0 {
            return Err(ClError::InvalidLen(len));
        }

        #[cfg(feature = "metrics")]
        {
            ALLOCS.fetch_add(1, Ordering::Relaxed);
            ALLOC_BYTES.fetch_add(len * std::mem::size_of::<T>(), Ordering::Relaxed);
        }

        #[cfg(feature = "metrics")]
        let t = Instant::now();

        let buf = Buffer::<T>::create(ctx, flags, len, ptr::null_mut())?;

        #[cfg(feature = "metrics")]
        record("GpuBuffer::new", t);

        Ok(Self { buf, len, _state: PhantomData })
    }

    /// Host → Device, nicht blockierend; der Guard hält das Write-Event
    pub fn enqueue_write(
        mut self,
        queue: &CommandQueue,
        host: &[T],
    ) -> Result<(GpuBuffer<T, InFlight>, GpuEventGuard), ClError> {
        if host.len() != self.len {
            return Err(ClError::LenMismatch { expected: self.len, actual: host.len() });
        }

        #[cfg(feature = "metrics")]
        let t = Instant::now();

        let evt = queue.enqueue_write_buffer(&mut self.buf, CL_NON_BLOCKING, 0, host, &[])?;

        #[cfg(feature = "metrics")]
        record("enqueue_write", t);

        Ok((
            GpuBuffer { buf: self.buf, len: self.len, _state: PhantomData },
            GpuEventGuard { evt },
        ))
    }

    /// Anlegen (read-only) + Schreiben + Warten in einem Schritt
    pub fn from_slice(
        ctx: &Context,
        queue: &CommandQueue,
        data: &[T],
    ) -> Result<GpuBuffer<T, Ready>, ClError> {
        let buf = Self::with_flags(ctx, CL_MEM_READ_ONLY, data.len())?;
        let (in_flight, guard) = buf.enqueue_write(queue, data)?;
        in_flight.into_ready(guard)
    }

    /// Übergang für ein Buffer, das gleich von einem Kernel gefüllt wird
    pub fn launch(self) -> GpuBuffer<T, InFlight> {
        GpuBuffer { buf: self.buf, len: self.len, _state: PhantomData }
    }
}

// ── InFlight ─────────────────────────────────────────────────────────
impl<T: Pod> GpuBuffer<T, InFlight> {
    /// wartet auf das Event des Guards und überführt in den Ready-State
    pub fn into_ready(self, guard: GpuEventGuard) -> Result<GpuBuffer<T, Ready>, ClError> {
        guard.wait()?;
        Ok(GpuBuffer { buf: self.buf, len: self.len, _state: PhantomData })
    }
}

// ── Ready → Host (D2H) ───────────────────────────────────────────────
impl<T: Pod> GpuBuffer<T, Ready> {
    /// Device → Host, nicht blockierend; vor dem Zugriff auf `host_out`
    /// muss der Guard konsumiert werden (`into_ready`)
    pub fn enqueue_read(
        self,
        queue: &CommandQueue,
        host_out: &mut [T],
    ) -> Result<(GpuBuffer<T, InFlight>, GpuEventGuard), ClError> {
        if host_out.len() != self.len {
            return Err(ClError::LenMismatch { expected: self.len, actual: host_out.len() });
        }

        #[cfg(feature = "metrics")]
        let t = Instant::now();

        let evt = queue.enqueue_read_buffer(&self.buf, CL_NON_BLOCKING, 0, host_out, &[])?;

        #[cfg(feature = "metrics")]
        record("enqueue_read", t);

        Ok((
            GpuBuffer { buf: self.buf, len: self.len, _state: PhantomData },
            GpuEventGuard { evt },
        ))
    }
}

// ── Accessors (alle States) ──────────────────────────────────────────
impl<T: Pod, S: State> GpuBuffer<T, S> {
    pub fn raw(&self) -> &Buffer<T> {
        &self.buf
    }

    pub fn raw_mut(&mut self) -> &mut Buffer<T> {
        &mut self.buf
    }

    /// Länge in Elementen
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn size_bytes(&self) -> usize {
        self.len * std::mem::size_of::<T>()
    }
}

// ── Guard (wartet bei Drop auf das Event) ────────────────────────────
pub struct GpuEventGuard {
    evt: Event,
}

impl GpuEventGuard {
    pub fn new(evt: Event) -> Self {
        Self { evt }
    }

    /// explizites Warten mit Fehler-Propagation; das anschließende
    /// Drop-Wait auf dem fertigen Event ist ein No-op
    pub fn wait(self) -> Result<(), ClError> {
        self.evt.wait().map_err(ClError::from)
    }
}

impl Drop for GpuEventGuard {
    fn drop(&mut self) {
        let _ = self.evt.wait();
    }
}
