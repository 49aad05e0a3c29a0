// Typ-State-Übergänge mit Dummy-Handles, läuft ohne OpenCL-Runtime.

use std::marker::PhantomData;

struct DummyHandle(u64);

struct DummyGpuBuffer<S> {
    handle: DummyHandle,
    len: usize,
    _state: PhantomData<S>,
}

mod sealed {
    pub trait Sealed {}
}
trait State: sealed::Sealed {}

struct Queued;
struct InFlight;
struct Ready;
impl sealed::Sealed for Queued {}
impl sealed::Sealed for InFlight {}
impl sealed::Sealed for Ready {}
impl State for Queued {}
impl State for InFlight {}
impl State for Ready {}

struct DummyGuard;
impl Drop for DummyGuard {
    fn drop(&mut self) {}
}

#[test]
fn upload_launch_readback_transitions() {
    let queued = DummyGpuBuffer::<Queued> {
        handle: DummyHandle(0xC0FFEE),
        len: 1000,
        _state: PhantomData,
    };

    // Queued → InFlight: Transfer oder Kernel angestoßen, Guard läuft
    let guard = DummyGuard;
    let in_flight: DummyGpuBuffer<InFlight> = DummyGpuBuffer {
        handle: queued.handle,
        len: queued.len,
        _state: PhantomData,
    };

    // InFlight → Ready: Guard konsumiert, Inhalt definiert
    drop(guard);
    let ready: DummyGpuBuffer<Ready> = DummyGpuBuffer {
        handle: in_flight.handle,
        len: in_flight.len,
        _state: PhantomData,
    };

    assert_eq!(ready.len, 1000);
    assert_eq!(ready.handle.0, 0xC0FFEE);
}
