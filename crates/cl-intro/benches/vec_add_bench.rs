use criterion::{criterion_group, criterion_main, Criterion};

use cl_intro::{init_input, ClSetup, GpuBuffer, GpuEventGuard, Queued, VecAdd};

fn bench_vec_add(c: &mut Criterion) {
    // Setup und Kernel-Build einmalig, gemessen wird die Pipeline
    let setup = ClSetup::new().unwrap();
    let vec_add = VecAdd::build(&setup.context).unwrap();

    c.bench_function("vec_add_1000", |bench| {
        bench.iter(|| {
            let n = 1000;
            let (h_a, h_b) = init_input(n);
            let mut h_out = vec![0.0_f32; n];

            let a = GpuBuffer::from_slice(&setup.context, &setup.queue, &h_a).unwrap();
            let b = GpuBuffer::from_slice(&setup.context, &setup.queue, &h_b).unwrap();
            let out = GpuBuffer::<f32, Queued>::new(&setup.context, n).unwrap();

            let mut out_if = out.launch();
            vec_add.set_args(&a, &b, &mut out_if).unwrap();
            let evt = vec_add.enqueue(&setup.queue, n).unwrap();
            let out_ready = out_if.into_ready(GpuEventGuard::new(evt)).unwrap();

            let (read_if, guard) = out_ready.enqueue_read(&setup.queue, &mut h_out).unwrap();
            read_if.into_ready(guard).unwrap();

            assert!((h_out[n - 1] - 2997.0).abs() < 1e-6);
        });
    });
}

// Diese Zeilen sind notwendig, damit Criterion den Benchmark ausführt
criterion_group!(benches, bench_vec_add);
criterion_main!(benches);
