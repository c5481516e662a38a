use peakloc::{load_spectrum, save_spectrum, search_peaks, PeakError, Spectrum, ValueTransform};
use std::path::PathBuf;

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("peakloc_{}_{}.dat", name, std::process::id()))
}

#[test]
fn save_then_load_preserves_samples() {
    let positions: Vec<f64> = (0..25).map(|i| 10.0 + 0.125 * i as f64).collect();
    let values: Vec<f64> = positions.iter().map(|x| (x - 11.5).powi(2) + 1.0).collect();
    let spectrum = Spectrum::new(positions, values).unwrap();

    let path = temp_path("roundtrip");
    save_spectrum(&path, &spectrum).unwrap();
    let loaded = load_spectrum(&path, ValueTransform::Identity).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(loaded, spectrum);
}

#[test]
fn log_transform_turns_power_law_into_bump() {
    let path = temp_path("log10");
    let mut text = String::from("position intensity\n");
    for i in 0..21 {
        let x = i as f64 * 0.5;
        let intensity = 10f64.powf(3.0 - (x - 5.0).powi(2) / 4.0);
        text.push_str(&format!("{x} {intensity}\n"));
    }
    text.push_str("11.0 -5.0\n");
    std::fs::write(&path, text).unwrap();

    let spectrum = load_spectrum(&path, ValueTransform::Log10).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(spectrum.len(), 21);
    assert!((spectrum.values()[10] - 3.0).abs() < 1e-12);
    let peaks = search_peaks(spectrum.positions(), spectrum.values(), 2).unwrap();
    assert_eq!(peaks.len(), 1);
    assert!((peaks[0] - 5.0).abs() < 1e-6);
}

#[test]
fn missing_file_is_an_io_error() {
    let err = load_spectrum(temp_path("does_not_exist"), ValueTransform::Identity).unwrap_err();
    assert!(matches!(err, PeakError::Io { .. }));
}
