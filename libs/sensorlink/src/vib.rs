//! Boundary to the native vibration-processing library
//!
//! Integration (acceleration to velocity/displacement) and FFT live in an
//! external numeric library; this crate only defines the call seam and
//! guarantees that its array decoders produce the sample layout these
//! functions expect (see [`crate::bytes::conversions`]).

/// Spectrum sink filled in place by [`VibrationProcessor::compute_spectrum`]
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Spectrum {
    /// Amplitude per frequency bin
    pub amplitude: Vec<f64>,
}

/// Pure numeric vibration-processing functions supplied by a collaborator
///
/// All samples are time-domain waveforms at `sample_rate_hz`; `f_min` /
/// `f_max` bound the band of interest in Hz.
pub trait VibrationProcessor {
    /// Integrate an acceleration waveform into a velocity waveform
    fn acc_to_velocity(&self, acc: &[f64], sample_rate_hz: f64, f_min: f64, f_max: f64)
        -> Vec<f64>;

    /// Double-integrate an acceleration waveform into a displacement waveform
    fn acc_to_displacement(
        &self,
        acc: &[f64],
        sample_rate_hz: f64,
        f_min: f64,
        f_max: f64,
    ) -> Vec<f64>;

    /// Compute the amplitude spectrum of a waveform into `spectrum`
    fn compute_spectrum(&self, spectrum: &mut Spectrum, data: &[f64], sample_rate_hz: f64);
}
