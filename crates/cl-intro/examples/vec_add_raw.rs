// 2025 Thomas Bicanic – MIT License
//
// Dieselbe Vektoraddition wie in `src/main.rs`, aber direkt gegen die
// rohe opencl3-API, ohne die Typ-State-Wrapper.

use cl_intro::{init_input, verify, ClError, KERNEL_NAME, KERNEL_SRC};

use opencl3::{
    command_queue::{CommandQueue, CL_QUEUE_PROFILING_ENABLE},
    context::Context,
    device::{Device, CL_DEVICE_TYPE_GPU},
    kernel::Kernel,
    memory::{Buffer, CL_MEM_READ_ONLY, CL_MEM_READ_WRITE},
    platform::get_platforms,
    program::Program,
    types::CL_BLOCKING,
};

fn main() -> Result<(), ClError> {
    /* ---------- OpenCL-Setup ---------- */
    let platform = get_platforms()?.remove(0);
    let device_id = platform.get_devices(CL_DEVICE_TYPE_GPU)?[0];
    let device = Device::new(device_id);
    let context = Context::from_device(&device)?;
    let queue = CommandQueue::create(&context, device.id(), CL_QUEUE_PROFILING_ENABLE)?;

    /* ---------- Hostdaten ---------- */
    let n = 1000;
    let (h_a, h_b) = init_input(n);
    let mut h_out = vec![0.0_f32; n];

    /* ---------- Device-Buffer anlegen ---------- */
    let mut a_dev: Buffer<f32> =
        Buffer::create(&context, CL_MEM_READ_ONLY, n, std::ptr::null_mut())?;
    let mut b_dev: Buffer<f32> =
        Buffer::create(&context, CL_MEM_READ_ONLY, n, std::ptr::null_mut())?;
    let out_dev: Buffer<f32> =
        Buffer::create(&context, CL_MEM_READ_WRITE, n, std::ptr::null_mut())?;

    /* ---------- Host → Device, blockierend ---------- */
    queue.enqueue_write_buffer(&mut a_dev, CL_BLOCKING, 0, &h_a, &[])?;
    queue.enqueue_write_buffer(&mut b_dev, CL_BLOCKING, 0, &h_b, &[])?;

    /* ---------- Kernel bauen und starten ---------- */
    let program = Program::create_and_build_from_source(&context, KERNEL_SRC, "")
        .map_err(|log| ClError::Build(log.to_string()))?;
    let kernel = Kernel::create(&program, KERNEL_NAME)?;
    kernel.set_arg(0, &a_dev)?;
    kernel.set_arg(1, &b_dev)?;
    kernel.set_arg(2, &out_dev)?;

    let global = [n, 1, 1];
    queue.enqueue_nd_range_kernel(
        kernel.get(),
        1,
        std::ptr::null(),
        global.as_ptr(),
        std::ptr::null(),
        &[],
    )?;
    queue.finish()?;

    /* ---------- Device → Host, blockierend ---------- */
    queue.enqueue_read_buffer(&out_dev, CL_BLOCKING, 0, &mut h_out, &[])?;

    /* ---------- Verifizieren ---------- */
    verify(&h_a, &h_b, &h_out)?;
    println!("vec_add OK, last element = {}", h_out[n - 1]);

    Ok(())
}
