// Host-seitige Tests: Eingabedaten, Verifikation, Fehlerbilder.
// Alles hier läuft ohne OpenCL-Runtime.

use cl_intro::{init_input, verify, ClError, KERNEL_NAME, KERNEL_SRC};

#[test]
fn init_input_matches_reference_pattern() {
    let (a, b) = init_input(4);
    assert_eq!(a, vec![0.0, 1.0, 2.0, 3.0]);
    assert_eq!(b, vec![0.0, 2.0, 4.0, 6.0]);
}

#[test]
fn verify_accepts_correct_sums() {
    let (a, b) = init_input(1000);
    let result: Vec<f32> = a.iter().zip(&b).map(|(x, y)| x + y).collect();
    assert!(verify(&a, &b, &result).is_ok());
}

#[test]
fn verify_reports_first_mismatch() {
    let (a, b) = init_input(8);
    let mut result: Vec<f32> = a.iter().zip(&b).map(|(x, y)| x + y).collect();
    result[3] = 99.0;
    result[5] = 77.0;

    match verify(&a, &b, &result) {
        Err(ClError::Verify { index, got, expected }) => {
            assert_eq!(index, 3); // erster Fehlindex, nicht der letzte
            assert_eq!(got, 99.0);
            assert_eq!(expected, 9.0);
        }
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn verify_tolerates_float_noise() {
    let a = [1.0_f32];
    let b = [2.0_f32];
    let result = [3.0_f32 + 5e-7];
    assert!(verify(&a, &b, &result).is_ok());
}

#[test]
fn verify_rejects_length_mismatch() {
    let (a, b) = init_input(4);
    let result = vec![0.0_f32; 3];
    assert!(matches!(
        verify(&a, &b, &result),
        Err(ClError::LenMismatch { expected: 4, actual: 3 })
    ));
}

#[test]
fn kernel_source_declares_vec_add() {
    assert_eq!(KERNEL_NAME, "vec_add");
    assert!(KERNEL_SRC.contains("__kernel void vec_add"));
    assert!(KERNEL_SRC.contains("get_global_id(0)"));
}

#[test]
fn error_messages_carry_context() {
    let api: ClError = (-5).into();
    assert_eq!(api.to_string(), "OpenCL API error: -5");

    let build = ClError::Build("ptxas fatal: line 1".into());
    assert!(build.to_string().contains("ptxas fatal: line 1"));

    assert_eq!(
        ClError::NoDevice.to_string(),
        "no OpenCL compatible GPU or CPU device available"
    );
}
