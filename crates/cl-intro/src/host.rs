//! Host-Seite: Eingabedaten und Ergebnis-Verifikation.

use crate::ClError;

/// klassische Belegung des Einführungsbeispiels: a[i] = i, b[i] = 2i
pub fn init_input(n: usize) -> (Vec<f32>, Vec<f32>) {
    let a = (0..n).map(|i| i as f32).collect();
    let b = (0..n).map(|i| (i * 2) as f32).collect();
    (a, b)
}

/// prüft `result[i] == a[i] + b[i]` mit 1e-6 Toleranz; der erste
/// abweichende Index geht als Fehler zurück
pub fn verify(a: &[f32], b: &[f32], result: &[f32]) -> Result<(), ClError> {
    if a.len() != b.len() || a.len() != result.len() {
        return Err(ClError::LenMismatch { expected: a.len(), actual: result.len() });
    }

    for (i, ((&x, &y), &got)) in a.iter().zip(b).zip(result).enumerate() {
        let expected = x + y;
        if (got - expected).abs() > 1e-6 {
            return Err(ClError::Verify { index: i, got, expected });
        }
    }
    Ok(())
}
