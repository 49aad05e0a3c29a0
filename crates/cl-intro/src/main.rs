// 2025 Thomas Bicanic – MIT License
//
// Vektoraddition als Einführungsbeispiel:
// Hostdaten → Setup → Kernel-Build → H2D → Launch → D2H → Verifikation.

use cl_intro::{init_input, verify, ClError, ClSetup, GpuBuffer, GpuEventGuard, Queued, VecAdd};

#[cfg(feature = "metrics")]
use cl_intro::summary;
#[cfg(feature = "memtrace")]
use cl_intro::{flush_csv, start as trace_start, Dir};

const ARRAY_SIZE: usize = 1000;

fn main() -> Result<(), ClError> {
    /* ---------- 1. Hostdaten ------------------------------------- */
    // zuerst angelegt, damit sie als letztes freigegeben werden
    let (h_a, h_b) = init_input(ARRAY_SIZE);
    let mut h_out = vec![0.0_f32; ARRAY_SIZE];

    #[cfg(feature = "memtrace")]
    let size_bytes = ARRAY_SIZE * std::mem::size_of::<f32>();

    /* ---------- 2. OpenCL-Setup ---------------------------------- */
    let setup = ClSetup::new()?;
    println!("using device: {}", setup.device_name()?);

    /* ---------- 3. Kernel bauen ---------------------------------- */
    let vec_add = VecAdd::build(&setup.context)?;

    /* ---------- 4. Device-Buffer + Host → Device ----------------- */
    #[cfg(feature = "memtrace")]
    let tok_h2d = trace_start(Dir::H2D, 2 * size_bytes);

    let a_dev = GpuBuffer::from_slice(&setup.context, &setup.queue, &h_a)?;
    let b_dev = GpuBuffer::from_slice(&setup.context, &setup.queue, &h_b)?;

    #[cfg(feature = "memtrace")]
    tok_h2d.finish();

    let out_dev = GpuBuffer::<f32, Queued>::new(&setup.context, ARRAY_SIZE)?;

    /* ---------- 5. Kernel starten -------------------------------- */
    #[cfg(feature = "memtrace")]
    let tok_kernel = trace_start(Dir::Kernel, 0);

    let mut out_if = out_dev.launch();
    vec_add.set_args(&a_dev, &b_dev, &mut out_if)?;
    let evt = vec_add.enqueue(&setup.queue, ARRAY_SIZE)?;
    let out_ready = out_if.into_ready(GpuEventGuard::new(evt))?; // wartet auf den Kernel

    #[cfg(feature = "memtrace")]
    tok_kernel.finish();

    /* ---------- 6. Device → Host --------------------------------- */
    #[cfg(feature = "memtrace")]
    let tok_d2h = trace_start(Dir::D2H, size_bytes);

    let (read_if, rd_guard) = out_ready.enqueue_read(&setup.queue, &mut h_out)?;
    let _out_done = read_if.into_ready(rd_guard)?;

    #[cfg(feature = "memtrace")]
    tok_d2h.finish();

    /* ---------- 7. Verifizieren ---------------------------------- */
    println!("Computation completed. Verifying...");
    verify(&h_a, &h_b, &h_out)?;
    println!("Verification completed successfully!");

    #[cfg(feature = "metrics")]
    summary();
    #[cfg(feature = "memtrace")]
    flush_csv();

    Ok(())
}
